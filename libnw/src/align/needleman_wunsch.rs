use log::debug;

use crate::align::structs::{ScoreMatrix, ScoringParams};

/// Fill the global alignment score matrix for two sequences.
///
/// The returned matrix has `seq_2.len() + 1` rows and `seq_1.len() + 1` columns;
/// its bottom-right cell is the alignment score.
pub fn needleman_wunsch<T: PartialEq>(
    seq_1: &[T],
    seq_2: &[T],
    params: &ScoringParams,
) -> ScoreMatrix {
    let mut dp_matrix = ScoreMatrix::new(seq_2.len() + 1, seq_1.len() + 1);

    for seq_2_idx in 1..=seq_2.len() {
        let value = dp_matrix.get(seq_2_idx - 1, 0) + params.gap_penalty;
        dp_matrix.set(seq_2_idx, 0, value);
    }

    for seq_1_idx in 1..=seq_1.len() {
        let value = dp_matrix.get(0, seq_1_idx - 1) + params.gap_penalty;
        dp_matrix.set(0, seq_1_idx, value);
    }

    for seq_2_idx in 1..=seq_2.len() {
        let seq_2_residue = &seq_2[seq_2_idx - 1];

        for seq_1_idx in 1..=seq_1.len() {
            let seq_1_residue = &seq_1[seq_1_idx - 1];

            let diag_score = dp_matrix.get(seq_2_idx - 1, seq_1_idx - 1)
                + params.substitution(seq_1_residue, seq_2_residue);
            let up_score = dp_matrix.get(seq_2_idx - 1, seq_1_idx) + params.gap_penalty;
            let left_score = dp_matrix.get(seq_2_idx, seq_1_idx - 1) + params.gap_penalty;

            dp_matrix.set(seq_2_idx, seq_1_idx, diag_score.max(up_score.max(left_score)));
        }
    }

    debug!(
        "filled {}x{} score matrix, score: {}",
        dp_matrix.rows(),
        dp_matrix.cols(),
        dp_matrix.score()
    );

    dp_matrix
}
