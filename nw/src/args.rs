use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use libnw::align::structs::{Score, ScoringParams};

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(about = "Globally align two sequences and print the alignment")]
    Align(AlignArgs),
    #[command(about = "Recover an alignment from a previously computed score matrix")]
    Traceback(TracebackArgs),
    #[command(about = "Align every query sequence against every target sequence")]
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
#[command(name = "nw")]
#[command(about = "Needleman-Wunsch global sequence alignment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// The number of threads that nw will use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,

    /// Arguments that control writing output files
    #[command(flatten)]
    pub overwrite_args: OverwriteArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OverwriteArgs {
    /// Allow nw to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// The score for aligning two identical residues
    #[arg(
        long = "match",
        default_value_t = ScoringParams::DEFAULT_MATCH_SCORE,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub match_score: Score,

    /// The score for aligning two different residues
    #[arg(
        long = "mismatch",
        default_value_t = ScoringParams::DEFAULT_MISMATCH_SCORE,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub mismatch_score: Score,

    /// The score for aligning a residue against a gap
    #[arg(
        long = "gap",
        default_value_t = ScoringParams::DEFAULT_GAP_PENALTY,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub gap_penalty: Score,
}

impl ScoringArgs {
    pub fn params(&self) -> ScoringParams {
        ScoringParams::new(self.match_score, self.mismatch_score, self.gap_penalty)
    }
}

#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// The first sequence (matrix columns)
    #[arg(value_name = "SEQ1", default_value = "GATTACACGA")]
    pub seq_1: String,

    /// The second sequence (matrix rows)
    #[arg(value_name = "SEQ2", default_value = "GCATGC")]
    pub seq_2: String,

    /// Read each sequence from the first record of a fasta file named by SEQ1 and SEQ2
    #[arg(short = 'f', long = "fasta", default_value_t = false)]
    pub fasta: bool,
}

#[derive(Debug, Args)]
pub struct AlignArgs {
    /// The sequences to align
    #[command(flatten)]
    pub pair_args: PairArgs,

    /// Print the score matrix
    #[arg(short = 'm', long = "show-matrix", default_value_t = false)]
    pub show_matrix: bool,

    /// Where to write the score matrix as json
    #[arg(short = 'M', long = "matrix-out", value_name = "path")]
    pub matrix_path: Option<PathBuf>,

    /// Arguments that control writing output files
    #[command(flatten)]
    pub overwrite_args: OverwriteArgs,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,
}

#[derive(Debug, Args)]
pub struct TracebackArgs {
    /// The sequences the matrix was built from
    #[command(flatten)]
    pub pair_args: PairArgs,

    /// The score matrix json file, as written by `nw align --matrix-out`
    #[arg(short = 'M', long = "matrix", value_name = "path")]
    pub matrix_path: PathBuf,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Query file
    #[arg(value_name = "QUERY.fasta")]
    pub query_path: PathBuf,

    /// Target file
    #[arg(value_name = "TARGET.fasta")]
    pub target_path: PathBuf,

    /// Where to place tabular output (defaults to stdout)
    #[arg(short = 'T', long = "tab-output", value_name = "path")]
    pub tbl_results_path: Option<PathBuf>,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control threading and output files
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_defaults() {
        let cli = Cli::try_parse_from(["nw", "align"]).expect("parse");
        let SubCommands::Align(args) = cli.command else {
            panic!("expected the align subcommand");
        };

        assert_eq!(args.pair_args.seq_1, "GATTACACGA");
        assert_eq!(args.pair_args.seq_2, "GCATGC");
        assert!(!args.pair_args.fasta);
        assert_eq!(args.scoring_args.params(), ScoringParams::default());
    }

    #[test]
    fn test_negative_scores() {
        let cli = Cli::try_parse_from([
            "nw",
            "align",
            "ACGT",
            "AGT",
            "--match",
            "2",
            "--mismatch",
            "-3",
            "--gap",
            "-5",
        ])
        .expect("parse");
        let SubCommands::Align(args) = cli.command else {
            panic!("expected the align subcommand");
        };

        assert_eq!(args.pair_args.seq_1, "ACGT");
        assert_eq!(args.scoring_args.params(), ScoringParams::new(2, -3, -5));
    }

    #[test]
    fn test_traceback_requires_matrix() {
        assert!(Cli::try_parse_from(["nw", "traceback", "ACGT", "AGT"]).is_err());
        assert!(
            Cli::try_parse_from(["nw", "traceback", "ACGT", "AGT", "--matrix", "m.json"]).is_ok()
        );
    }

    #[test]
    fn test_batch() {
        let cli = Cli::try_parse_from(["nw", "batch", "q.fa", "t.fa", "-t", "2"]).expect("parse");
        let SubCommands::Batch(args) = cli.command else {
            panic!("expected the batch subcommand");
        };

        assert_eq!(args.query_path, PathBuf::from("q.fa"));
        assert_eq!(args.common_args.num_threads, 2);
        assert!(!args.common_args.overwrite_args.allow_overwrite);
        assert!(args.tbl_results_path.is_none());
    }

    #[test]
    fn test_allow_overwrite_shared() {
        let cli = Cli::try_parse_from(["nw", "align", "-M", "m.json", "-q"]).expect("parse");
        let SubCommands::Align(args) = cli.command else {
            panic!("expected the align subcommand");
        };
        assert!(args.overwrite_args.allow_overwrite);

        let cli = Cli::try_parse_from(["nw", "batch", "q.fa", "t.fa", "--allow-overwrite"])
            .expect("parse");
        let SubCommands::Batch(args) = cli.command else {
            panic!("expected the batch subcommand");
        };
        assert!(args.common_args.overwrite_args.allow_overwrite);
    }
}
