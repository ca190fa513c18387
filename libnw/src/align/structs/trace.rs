use super::{Score, ScoringParams};

/// One column of a global alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStep {
    /// A symbol of the first sequence aligned against a symbol of the second
    Diagonal,
    /// A symbol of the second sequence aligned against a gap
    Up,
    /// A symbol of the first sequence aligned against a gap
    Left,
}

/// A path through a score matrix, ordered from the origin to the bottom-right corner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new(steps: Vec<TraceStep>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Expand the trace into two equal-length rows of symbols, filling gaps with `gap`.
    pub fn apply<T: Copy>(&self, seq_1: &[T], seq_2: &[T], gap: T) -> (Vec<T>, Vec<T>) {
        let mut aligned_1 = Vec::with_capacity(self.len());
        let mut aligned_2 = Vec::with_capacity(self.len());
        let mut seq_1_idx = 0;
        let mut seq_2_idx = 0;

        for step in &self.steps {
            match step {
                TraceStep::Diagonal => {
                    aligned_1.push(seq_1[seq_1_idx]);
                    aligned_2.push(seq_2[seq_2_idx]);
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                }
                TraceStep::Up => {
                    aligned_1.push(gap);
                    aligned_2.push(seq_2[seq_2_idx]);
                    seq_2_idx += 1;
                }
                TraceStep::Left => {
                    aligned_1.push(seq_1[seq_1_idx]);
                    aligned_2.push(gap);
                    seq_1_idx += 1;
                }
            }
        }

        (aligned_1, aligned_2)
    }

    /// Recompute the score of the alignment this trace describes.
    pub fn rescore<T: PartialEq>(&self, seq_1: &[T], seq_2: &[T], params: &ScoringParams) -> Score {
        let mut score = 0;
        let mut seq_1_idx = 0;
        let mut seq_2_idx = 0;

        for step in &self.steps {
            match step {
                TraceStep::Diagonal => {
                    score += params.substitution(&seq_1[seq_1_idx], &seq_2[seq_2_idx]);
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                }
                TraceStep::Up => {
                    score += params.gap_penalty;
                    seq_2_idx += 1;
                }
                TraceStep::Left => {
                    score += params.gap_penalty;
                    seq_1_idx += 1;
                }
            }
        }

        score
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            match step {
                TraceStep::Diagonal => write!(f, "D")?,
                TraceStep::Up => write!(f, "U")?,
                TraceStep::Left => write!(f, "L")?,
            }
        }
        Ok(())
    }
}
