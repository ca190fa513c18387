mod alignment;
pub use alignment::{Alignment, GAP_CHAR};

mod score_matrix;
pub use score_matrix::{
    EmptyMatrixError, MalformedMatrixError, MatrixDimensionError, RaggedMatrixError, ScoreMatrix,
};

mod scoring;
pub use scoring::{Score, ScoringParams};

pub mod trace;
pub use trace::{Trace, TraceStep};
