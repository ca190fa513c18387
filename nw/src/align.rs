use std::io::{stdout, Write};

use colored::Colorize;
use libnw::align::align;
use libnw::align::structs::{Alignment, ScoringParams};
use libnw::structs::Sequence;

use crate::args::AlignArgs;
use crate::util::{load_pair, PathBufExt};

pub fn write_header(
    out: &mut impl Write,
    seq_1: &Sequence,
    seq_2: &Sequence,
    params: &ScoringParams,
) -> anyhow::Result<()> {
    writeln!(out, "{} {seq_1:?}", format!("{}:", seq_1.name).bold())?;
    writeln!(out, "{} {seq_2:?}", format!("{}:", seq_2.name).bold())?;
    writeln!(
        out,
        "match: {}  mismatch: {}  gap: {}",
        params.match_score, params.mismatch_score, params.gap_penalty
    )?;
    Ok(())
}

pub fn write_alignment(out: &mut impl Write, alignment: &Alignment) -> anyhow::Result<()> {
    writeln!(out, "{} {}", "score:".bold(), alignment.score)?;
    writeln!(
        out,
        "{} {}/{} ({:.1}%)",
        "identity:".bold(),
        alignment.matches(),
        alignment.length(),
        alignment.identity() * 100.0
    )?;
    writeln!(out, "{} {}", "gaps:".bold(), alignment.gaps())?;
    writeln!(out)?;
    writeln!(out, "{alignment}")?;
    Ok(())
}

pub fn align_command(args: &AlignArgs) -> anyhow::Result<()> {
    write_align(&mut stdout().lock(), args)
}

pub fn write_align(out: &mut impl Write, args: &AlignArgs) -> anyhow::Result<()> {
    let (seq_1, seq_2) = load_pair(&args.pair_args)?;
    let params = args.scoring_args.params();

    let symbols_1 = seq_1.symbols();
    let symbols_2 = seq_2.symbols();
    let (matrix, alignment) = align(&symbols_1, &symbols_2, &params)?;

    if let Some(path) = &args.matrix_path {
        let mut writer = path.open(args.overwrite_args.allow_overwrite)?;
        matrix.write_json(&mut writer)?;
        writer.flush()?;
        log::info!("wrote score matrix to {}", path.to_string_lossy());
    }

    write_header(out, &seq_1, &seq_2, &params)?;
    writeln!(out)?;

    if args.show_matrix {
        matrix.dump(out, &symbols_1, &symbols_2)?;
        writeln!(out)?;
    }

    write_alignment(out, &alignment)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, SubCommands};
    use clap::Parser;
    use libnw::align::structs::ScoreMatrix;
    use std::fs::File;

    fn align_args(argv: &[&str]) -> AlignArgs {
        let cli = Cli::try_parse_from(argv).expect("parse");
        let SubCommands::Align(args) = cli.command else {
            panic!("expected the align subcommand");
        };
        args
    }

    fn run(args: &AlignArgs) -> anyhow::Result<String> {
        let mut buffer: Vec<u8> = vec![];
        write_align(&mut buffer, args)?;
        Ok(String::from_utf8(buffer).expect("utf8"))
    }

    #[test]
    fn test_reference_pair() {
        let text = run(&align_args(&["nw", "align"])).expect("align");
        assert!(text.contains("GATTACACGA\n"));
        assert!(text.contains("G----CATGC\n"));
        assert!(text.contains("-6"));
    }

    #[test]
    fn test_multibyte_symbols() {
        let text = run(&align_args(&["nw", "align", "ÅBC", "ÅC", "-m"])).expect("align");
        assert!(text.contains("ÅBC\n"));
        assert!(text.contains("Å-C\n"));
        // one matrix column per character, not per byte
        assert!(text.contains("   Å  B  C\n"));
    }

    #[test]
    fn test_matrix_out_refuses_overwrite() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("matrix.json");
        let path_str = path.to_str().expect("utf8 path");

        let args = align_args(&["nw", "align", "ACGT", "AGT", "-M", path_str]);
        run(&args).expect("first write");

        let matrix = ScoreMatrix::from_json_reader(File::open(&path).expect("open"))
            .expect("matrix json");
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 5);

        let err = run(&args).expect_err("existing file");
        assert!(format!("{err:#}").contains("failed to create file"));

        let args = align_args(&["nw", "align", "ACGT", "AGT", "-M", path_str, "-q"]);
        assert!(run(&args).is_ok());
    }
}
