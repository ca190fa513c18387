use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use anyhow::{Context, Result};

const UTF8_SPACE: u8 = b' ';

/// A named sequence of residues.
///
/// Residues are kept as raw bytes and compared only for equality;
/// no alphabet is enforced.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The residues of the sequence, in order
    pub residues: Vec<u8>,
}

impl Sequence {
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            seqs.push(Sequence {
                name,
                details,
                residues: record.full_seq().into_owned(),
            });
        }
        Ok(seqs)
    }

    pub fn from_utf8(bytes: &[u8]) -> Self {
        Sequence {
            name: "".to_string(),
            details: None,
            residues: bytes.to_vec(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn length(&self) -> usize {
        self.residues.len()
    }

    /// The residues decoded as UTF-8 text, one symbol per character.
    ///
    /// Multi-byte characters stay whole, so aligning symbols rather than raw
    /// bytes gives back the original text once the gaps are removed.
    pub fn symbols(&self) -> Vec<char> {
        String::from_utf8_lossy(&self.residues).chars().collect()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        for line in self.residues.chunks(80) {
            writeln!(f)?;
            write!(f, "{}", String::from_utf8_lossy(line))?;
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.residues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::io::Write;

    #[test]
    fn test_from_fasta() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, ">seq1 first test sequence\nGATTA\nCACGA\n>seq2\nGCATGC\n").expect("write");

        let_assert!(Ok(seqs) = Sequence::from_fasta(file.path()));
        check!(seqs.len() == 2);

        check!(seqs[0].name == "seq1");
        check!(seqs[0].details.as_deref() == Some("first test sequence"));
        check!(seqs[0].residues == b"GATTACACGA");
        check!(seqs[0].length() == 10);

        check!(seqs[1].name == "seq2");
        check!(seqs[1].details.is_none());
        check!(seqs[1].residues == b"GCATGC");
    }

    #[test]
    fn test_from_fasta_missing_file() {
        let_assert!(Err(err) = Sequence::from_fasta("/nonexistent/path/to.fasta"));
        check!(err.to_string().starts_with("failed to open fasta file"));
    }

    #[test]
    fn test_symbols() {
        let seq = Sequence::from_utf8("ÅBC".as_bytes());
        check!(seq.length() == 4);
        check!(seq.symbols() == vec!['Å', 'B', 'C']);

        let seq = Sequence::from_utf8(b"GATTACA");
        check!(seq.symbols().into_iter().collect::<String>() == "GATTACA");
    }

    #[test]
    fn test_display() {
        let seq = Sequence::from_utf8(&[b'A'; 100]).with_name("long");
        let text = seq.to_string();
        let lines: Vec<&str> = text.lines().collect();
        check!(lines.len() == 3);
        check!(lines[0] == ">long");
        check!(lines[1].len() == 80);
        check!(lines[2].len() == 20);
    }
}
