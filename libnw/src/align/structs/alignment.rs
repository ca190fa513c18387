use std::fmt::{Display, Formatter};

use super::trace::TraceStep;
use super::{Score, Trace};

pub const GAP_CHAR: char = '-';
pub const MATCH_CHAR: char = '|';
pub const BLANK_CHAR: char = ' ';

/// A global alignment of two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// The score of the alignment, i.e. the bottom-right cell of its score matrix
    pub score: Score,
    /// The first sequence with gaps inserted
    pub aligned_seq_1: String,
    /// The second sequence with gaps inserted
    pub aligned_seq_2: String,
    /// The display in between the two aligned sequences
    pub middle: String,
    /// The path through the score matrix that produced the alignment
    pub trace: Trace,
}

impl Alignment {
    pub fn new<T: Copy + Into<char>>(trace: Trace, seq_1: &[T], seq_2: &[T], score: Score) -> Self {
        let seq_1: Vec<char> = seq_1.iter().map(|&s| s.into()).collect();
        let seq_2: Vec<char> = seq_2.iter().map(|&s| s.into()).collect();
        let (top, bottom) = trace.apply(&seq_1, &seq_2, GAP_CHAR);

        let middle = top
            .iter()
            .zip(trace.steps.iter())
            .zip(bottom.iter())
            .map(|((a, step), b)| match step {
                TraceStep::Diagonal if a == b => MATCH_CHAR,
                _ => BLANK_CHAR,
            })
            .collect();

        Self {
            score,
            aligned_seq_1: top.into_iter().collect(),
            aligned_seq_2: bottom.into_iter().collect(),
            middle,
            trace,
        }
    }

    /// The number of columns in the alignment
    pub fn length(&self) -> usize {
        self.trace.len()
    }

    /// The number of columns pairing two identical symbols
    pub fn matches(&self) -> usize {
        self.middle.chars().filter(|&c| c == MATCH_CHAR).count()
    }

    /// The number of columns pairing two different symbols
    pub fn mismatches(&self) -> usize {
        self.diagonal_columns() - self.matches()
    }

    /// The number of columns pairing a symbol with a gap
    pub fn gaps(&self) -> usize {
        self.length() - self.diagonal_columns()
    }

    /// The fraction of columns that are matches
    pub fn identity(&self) -> f64 {
        match self.length() {
            0 => 0.0,
            length => self.matches() as f64 / length as f64,
        }
    }

    fn diagonal_columns(&self) -> usize {
        self.trace
            .steps
            .iter()
            .filter(|&&step| step == TraceStep::Diagonal)
            .count()
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.aligned_seq_1)?;
        writeln!(f, "{}", self.middle)?;
        write!(f, "{}", self.aligned_seq_2)
    }
}
