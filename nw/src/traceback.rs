use std::fs::File;
use std::io::{stdout, BufReader, Write};

use anyhow::Context;
use libnw::align::align_with_matrix;
use libnw::align::structs::ScoreMatrix;

use crate::align::{write_alignment, write_header};
use crate::args::TracebackArgs;
use crate::util::load_pair;

pub fn traceback_command(args: &TracebackArgs) -> anyhow::Result<()> {
    write_traceback(&mut stdout().lock(), args)
}

pub fn write_traceback(out: &mut impl Write, args: &TracebackArgs) -> anyhow::Result<()> {
    let (seq_1, seq_2) = load_pair(&args.pair_args)?;
    let params = args.scoring_args.params();

    let file = File::open(&args.matrix_path).context(format!(
        "failed to open score matrix file: {}",
        args.matrix_path.to_string_lossy()
    ))?;
    let matrix = ScoreMatrix::from_json_reader(BufReader::new(file))?;

    let alignment = align_with_matrix(&seq_1.symbols(), &seq_2.symbols(), &matrix, &params)
        .context("failed to trace back the score matrix")?;

    write_header(out, &seq_1, &seq_2, &params)?;
    writeln!(out)?;
    write_alignment(out, &alignment)?;
    Ok(())
}
