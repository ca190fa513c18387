use std::io::{Read, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Score;
use crate::util::display_width;

#[derive(Error, Debug, PartialEq, Eq)]
#[error(
    "score matrix is {rows}x{cols}, but sequences of length {seq_1_length} and {seq_2_length} require {expected_rows}x{expected_cols}"
)]
pub struct MatrixDimensionError {
    pub rows: usize,
    pub cols: usize,
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    pub expected_rows: usize,
    pub expected_cols: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("score matrix declares {rows}x{cols} cells but holds {data_length}")]
pub struct MalformedMatrixError {
    pub rows: usize,
    pub cols: usize,
    pub data_length: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("score matrix row {row} has {length} cells, expected {expected}")]
pub struct RaggedMatrixError {
    pub row: usize,
    pub length: usize,
    pub expected: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("a score matrix needs at least one row and one column")]
pub struct EmptyMatrixError;

/// The on-disk shape of a score matrix, checked before it becomes a [`ScoreMatrix`].
#[derive(Deserialize)]
struct RawScoreMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Score>,
}

impl TryFrom<RawScoreMatrix> for ScoreMatrix {
    type Error = MalformedMatrixError;

    fn try_from(raw: RawScoreMatrix) -> std::result::Result<Self, Self::Error> {
        if raw.rows == 0
            || raw.cols == 0
            || raw.rows.checked_mul(raw.cols) != Some(raw.data.len())
        {
            return Err(MalformedMatrixError {
                rows: raw.rows,
                cols: raw.cols,
                data_length: raw.data.len(),
            });
        }

        Ok(ScoreMatrix {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

/// A dense Needleman-Wunsch score matrix.
///
/// Row `i` corresponds to the length `i` prefix of the second sequence and
/// column `j` to the length `j` prefix of the first, so a matrix for
/// sequences of length `n` (first) and `m` (second) is `(m + 1) x (n + 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScoreMatrix")]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    /// The matrix cells as a flat vector.
    ///
    /// It's stored in the following pattern:
    ///
    /// ```text
    ///     [
    ///
    ///         s_(0, 0), s_(0, 1), ..., s_(0, N),
    ///         s_(1, 0), s_(1, 1), ..., s_(1, N),
    ///         ...
    ///         s_(M, 0), s_(M, 1), ..., s_(M, N)
    ///
    ///     ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    ///     M:        <rows - 1>, the length of the second sequence
    ///     N:        <cols - 1>, the length of the first sequence
    ///     s_(i, j): the optimal score of seq_2[0..i) against seq_1[0..j)
    /// ```
    data: Vec<Score>,
}

impl ScoreMatrix {
    /// A zeroed matrix; callers always size it from sequence lengths plus one.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        ScoreMatrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build a matrix from nested rows, e.g. one computed outside of this library.
    pub fn from_rows(rows: Vec<Vec<Score>>) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(EmptyMatrixError.into()),
        };

        let capacity = rows
            .len()
            .checked_mul(expected)
            .context("score matrix is too large")?;
        let mut data = Vec::with_capacity(capacity);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(RaggedMatrixError {
                    row: row_idx,
                    length: row.len(),
                    expected,
                }
                .into());
            }
            data.extend_from_slice(row);
        }

        Ok(ScoreMatrix {
            rows: rows.len(),
            cols: expected,
            data,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<Score>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Score {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Score) {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[Score] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// The value of the bottom-right cell, which is the global alignment score.
    pub fn score(&self) -> Score {
        self.data.last().copied().unwrap_or_default()
    }

    /// Check that this matrix has the dimensions required by two sequences.
    pub fn check_dimensions(&self, seq_1_length: usize, seq_2_length: usize) -> Result<()> {
        let expected_rows = seq_2_length + 1;
        let expected_cols = seq_1_length + 1;

        if self.rows != expected_rows || self.cols != expected_cols {
            return Err(MatrixDimensionError {
                rows: self.rows,
                cols: self.cols,
                seq_1_length,
                seq_2_length,
                expected_rows,
                expected_cols,
            }
            .into());
        }
        Ok(())
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context("failed to read score matrix json")
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer(&mut *out, self).context("failed to write score matrix json")?;
        writeln!(out)?;
        Ok(())
    }

    /// Write the matrix with the first sequence as the column
    /// header and the second sequence as the row header.
    pub fn dump<T: Copy + Into<char>>(
        &self,
        out: &mut impl Write,
        seq_1: &[T],
        seq_2: &[T],
    ) -> Result<()> {
        self.check_dimensions(seq_1.len(), seq_2.len())?;

        let width = self
            .data
            .iter()
            .map(|&value| display_width(value))
            .max()
            .unwrap_or(1);

        // the row header and the blank header of column 0
        write!(out, "  {:>w$}", "", w = width)?;
        for &symbol in seq_1 {
            let symbol: char = symbol.into();
            write!(out, " {:>w$}", symbol, w = width)?;
        }
        writeln!(out)?;

        for row_idx in 0..self.rows {
            let row_header = match row_idx {
                0 => ' ',
                _ => seq_2[row_idx - 1].into(),
            };
            write!(out, "{row_header} ")?;

            for (col_idx, value) in self.row(row_idx).iter().enumerate() {
                if col_idx > 0 {
                    write!(out, " ")?;
                }
                write!(out, "{:>w$}", value, w = width)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, let_assert};

    #[test]
    fn test_score_matrix_get_set() {
        let mut matrix = ScoreMatrix::new(3, 4);

        (0..3).for_each(|row| {
            (0..4).for_each(|col| {
                matrix.set(row, col, (row * 10 + col) as Score);
            });
        });

        (0..3).for_each(|row| {
            (0..4).for_each(|col| {
                assert!(matrix.get(row, col) == (row * 10 + col) as Score);
            });
        });

        assert!(matrix.row(2) == &[20, 21, 22, 23]);
        assert!(matrix.score() == 23);
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![vec![0, -2, -4], vec![-2, 1, -1]];
        let_assert!(Ok(matrix) = ScoreMatrix::from_rows(rows.clone()));
        assert!(matrix.rows() == 2);
        assert!(matrix.cols() == 3);
        assert!(matrix.get(1, 1) == 1);
        assert!(matrix.to_rows() == rows);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![0, -2, -4], vec![-2, 1]];
        let_assert!(Err(err) = ScoreMatrix::from_rows(rows));
        assert!(
            err.downcast_ref::<RaggedMatrixError>()
                == Some(&RaggedMatrixError {
                    row: 1,
                    length: 2,
                    expected: 3
                })
        );

        let_assert!(Err(err) = ScoreMatrix::from_rows(vec![]));
        assert!(err.downcast_ref::<EmptyMatrixError>().is_some());
    }

    #[test]
    fn test_check_dimensions() {
        let matrix = ScoreMatrix::new(3, 5);
        assert!(matrix.check_dimensions(4, 2).is_ok());

        let_assert!(Err(err) = matrix.check_dimensions(2, 4));
        let_assert!(Some(err) = err.downcast_ref::<MatrixDimensionError>());
        assert!(err.expected_rows == 5);
        assert!(err.expected_cols == 3);
    }

    #[test]
    fn test_json() {
        let matrix = ScoreMatrix::from_rows(vec![vec![0, -2], vec![-2, 1], vec![-4, -1]])
            .expect("valid rows");

        let mut buffer: Vec<u8> = vec![];
        matrix.write_json(&mut buffer).expect("json write");

        let_assert!(Ok(read) = ScoreMatrix::from_json_reader(buffer.as_slice()));
        assert!(read == matrix);
    }

    #[test]
    fn test_json_malformed() {
        let json = r#"{"rows": 2, "cols": 2, "data": [0, -2, -2]}"#;
        let_assert!(Err(err) = ScoreMatrix::from_json_reader(json.as_bytes()));
        assert!(format!("{err:#}").contains("declares 2x2 cells but holds 3"));
    }

    #[test]
    fn test_json_oversized_dimensions() {
        // rows * cols overflows usize
        let json = format!(r#"{{"rows": {}, "cols": 4, "data": []}}"#, usize::MAX / 2);
        let_assert!(Err(err) = ScoreMatrix::from_json_reader(json.as_bytes()));
        assert!(format!("{err:#}").contains("holds 0"));

        let json = r#"{"rows": 3, "cols": 0, "data": []}"#;
        assert!(ScoreMatrix::from_json_reader(json.as_bytes()).is_err());
    }

    #[test]
    fn test_single_cell_to_rows() {
        let_assert!(Ok(matrix) = ScoreMatrix::from_rows(vec![vec![0]]));
        assert!(matrix.to_rows() == vec![vec![0]]);
        assert!(matrix.score() == 0);

        let_assert!(Err(err) = ScoreMatrix::from_rows(vec![vec![], vec![]]));
        assert!(err.downcast_ref::<EmptyMatrixError>().is_some());
    }

    #[test]
    fn test_dump() {
        let matrix =
            ScoreMatrix::from_rows(vec![vec![0, -2, -4], vec![-2, 1, -1]]).expect("valid rows");

        let mut buffer: Vec<u8> = vec![];
        matrix.dump(&mut buffer, b"GA", b"G").expect("dump");

        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text == "      G  A\n   0 -2 -4\nG -2  1 -1\n");
    }

    #[test]
    fn test_dump_wrong_dimensions() {
        let matrix = ScoreMatrix::new(2, 2);
        let mut buffer: Vec<u8> = vec![];
        assert!(matrix.dump(&mut buffer, b"GA", b"G").is_err());
    }
}
