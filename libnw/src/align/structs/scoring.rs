use serde::{Deserialize, Serialize};

/// The integer type of every cell in a score matrix.
pub type Score = isize;

/// The linear scoring scheme for a single global alignment.
///
/// No constraint is placed on the sign of any of these values, though the
/// gap penalty is typically negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// The score added when two aligned symbols are equal
    pub match_score: Score,
    /// The score added when two aligned symbols differ
    pub mismatch_score: Score,
    /// The score added for every symbol aligned against a gap
    pub gap_penalty: Score,
}

impl ScoringParams {
    pub const DEFAULT_MATCH_SCORE: Score = 1;
    pub const DEFAULT_MISMATCH_SCORE: Score = -1;
    pub const DEFAULT_GAP_PENALTY: Score = -2;

    pub fn new(match_score: Score, mismatch_score: Score, gap_penalty: Score) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// The score of aligning `a` against `b` in a single column.
    #[inline]
    pub fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> Score {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            match_score: Self::DEFAULT_MATCH_SCORE,
            mismatch_score: Self::DEFAULT_MISMATCH_SCORE,
            gap_penalty: Self::DEFAULT_GAP_PENALTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = ScoringParams::default();
        assert_eq!(params, ScoringParams::new(1, -1, -2));
    }

    #[test]
    fn test_substitution() {
        let params = ScoringParams::new(5, -4, -10);
        assert_eq!(params.substitution(&b'A', &b'A'), 5);
        assert_eq!(params.substitution(&b'A', &b'C'), -4);
        assert_eq!(params.substitution(&'x', &'x'), 5);
    }
}
