use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use libnw::structs::Sequence;
use thiserror::Error;

use crate::args::PairArgs;

#[derive(Error, Debug)]
#[error("no sequences in fasta file: {path}")]
pub struct EmptyFastaError {
    path: String,
}

pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

/// Open `path` for writing, or fall back to stdout.
pub fn writer_or_stdout(
    path: &Option<PathBuf>,
    allow_overwrite: bool,
) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(path.open(allow_overwrite)?),
        None => Box::new(stdout()),
    })
}

pub fn first_fasta_record(path: &str) -> anyhow::Result<Sequence> {
    Sequence::from_fasta(path)?
        .into_iter()
        .next()
        .ok_or_else(|| {
            EmptyFastaError {
                path: path.to_string(),
            }
            .into()
        })
}

/// Resolve the two sequences named on the command line.
pub fn load_pair(args: &PairArgs) -> anyhow::Result<(Sequence, Sequence)> {
    if args.fasta {
        Ok((
            first_fasta_record(&args.seq_1)?,
            first_fasta_record(&args.seq_2)?,
        ))
    } else {
        Ok((
            Sequence::from_utf8(args.seq_1.as_bytes()).with_name("seq1"),
            Sequence::from_utf8(args.seq_2.as_bytes()).with_name("seq2"),
        ))
    }
}

pub fn set_threads(num_threads: usize) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("failed to build rayon global threadpool")
}
