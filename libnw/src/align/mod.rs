pub mod structs;

mod needleman_wunsch;
pub use needleman_wunsch::needleman_wunsch;

mod traceback;
pub use traceback::{traceback, InconsistentCellError};

use anyhow::Result;
use structs::{Alignment, ScoreMatrix, ScoringParams};

/// Build the score matrix for two sequences and trace back one optimal global alignment.
pub fn align<T: PartialEq + Copy + Into<char>>(
    seq_1: &[T],
    seq_2: &[T],
    params: &ScoringParams,
) -> Result<(ScoreMatrix, Alignment)> {
    let matrix = needleman_wunsch(seq_1, seq_2, params);
    let alignment = align_with_matrix(seq_1, seq_2, &matrix, params)?;
    Ok((matrix, alignment))
}

/// Trace back one optimal global alignment from a score matrix that was built elsewhere.
pub fn align_with_matrix<T: PartialEq + Copy + Into<char>>(
    seq_1: &[T],
    seq_2: &[T],
    matrix: &ScoreMatrix,
    params: &ScoringParams,
) -> Result<Alignment> {
    let trace = traceback(seq_1, seq_2, matrix, params)?;
    Ok(Alignment::new(trace, seq_1, seq_2, matrix.score()))
}
