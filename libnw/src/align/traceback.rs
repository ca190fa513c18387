use anyhow::Result;
use log::debug;
use thiserror::Error;

use crate::align::structs::{Score, ScoreMatrix, ScoringParams, Trace, TraceStep};

#[derive(Error, Debug, PartialEq, Eq)]
#[error("score matrix cell ({row}, {col}) with score {score} is not reachable from any neighbor")]
pub struct InconsistentCellError {
    pub row: usize,
    pub col: usize,
    pub score: Score,
}

/// Recover one optimal global alignment from a filled score matrix.
///
/// The matrix may come from anywhere, but it must have been built from the same
/// sequences and scoring parameters. On ties, a diagonal step is preferred over
/// an up step, which is preferred over a left step.
pub fn traceback<T: PartialEq>(
    seq_1: &[T],
    seq_2: &[T],
    score_matrix: &ScoreMatrix,
    params: &ScoringParams,
) -> Result<Trace> {
    score_matrix.check_dimensions(seq_1.len(), seq_2.len())?;

    let mut steps: Vec<TraceStep> = Vec::with_capacity(seq_1.len() + seq_2.len());
    let mut seq_1_idx = seq_1.len();
    let mut seq_2_idx = seq_2.len();

    // a neighbor whose step would overflow can't be the source of this cell
    let reaches = |neighbor: Score, delta: Score, current: Score| {
        neighbor.checked_add(delta) == Some(current)
    };

    while seq_2_idx > 0 || seq_1_idx > 0 {
        let current_score = score_matrix.get(seq_2_idx, seq_1_idx);

        if seq_2_idx > 0
            && seq_1_idx > 0
            && reaches(
                score_matrix.get(seq_2_idx - 1, seq_1_idx - 1),
                params.substitution(&seq_1[seq_1_idx - 1], &seq_2[seq_2_idx - 1]),
                current_score,
            )
        {
            seq_1_idx -= 1;
            seq_2_idx -= 1;
            steps.push(TraceStep::Diagonal);
        } else if seq_2_idx > 0
            && reaches(
                score_matrix.get(seq_2_idx - 1, seq_1_idx),
                params.gap_penalty,
                current_score,
            )
        {
            seq_2_idx -= 1;
            steps.push(TraceStep::Up);
        } else if seq_1_idx > 0
            && reaches(
                score_matrix.get(seq_2_idx, seq_1_idx - 1),
                params.gap_penalty,
                current_score,
            )
        {
            seq_1_idx -= 1;
            steps.push(TraceStep::Left);
        } else {
            // a consistent matrix always satisfies one of the
            // above, so the matrix and parameters disagree
            return Err(InconsistentCellError {
                row: seq_2_idx,
                col: seq_1_idx,
                score: current_score,
            }
            .into());
        }
    }

    steps.reverse();

    debug!(
        "traced back {} columns from cell ({}, {})",
        steps.len(),
        seq_2.len(),
        seq_1.len()
    );

    Ok(Trace::new(steps))
}
