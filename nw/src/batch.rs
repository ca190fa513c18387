use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use libnw::align::align;
use libnw::align::structs::{Score, ScoringParams};
use libnw::structs::Sequence;
use log::info;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::args::BatchArgs;
use crate::util::{set_threads, writer_or_stdout};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub query_name: String,
    pub target_name: String,
    pub score: Score,
    pub length: usize,
    pub identity: f64,
    pub gaps: usize,
}

/// Align every query against every target. Each pair is aligned
/// independently, so the pairs are spread across the rayon thread pool.
pub fn align_all(
    queries: &[Sequence],
    targets: &[Sequence],
    params: &ScoringParams,
) -> anyhow::Result<Vec<BatchRecord>> {
    let pairs: Vec<(&Sequence, &Sequence)> = queries
        .iter()
        .flat_map(|query| targets.iter().map(move |target| (query, target)))
        .collect();

    pairs
        .into_par_iter()
        .map(|(query, target)| {
            let (_, alignment) = align(&query.symbols(), &target.symbols(), params)
                .with_context(|| format!("failed to align {} to {}", query.name, target.name))?;

            Ok(BatchRecord {
                query_name: query.name.clone(),
                target_name: target.name.clone(),
                score: alignment.score,
                length: alignment.length(),
                identity: alignment.identity(),
                gaps: alignment.gaps(),
            })
        })
        .collect()
}

pub fn write_table(out: &mut impl Write, records: &[BatchRecord]) -> anyhow::Result<()> {
    writeln!(out, "#query\ttarget\tscore\tlength\tidentity\tgaps")?;
    for record in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{:.3}\t{}",
            record.query_name,
            record.target_name,
            record.score,
            record.length,
            record.identity,
            record.gaps
        )?;
    }
    Ok(())
}

pub fn batch_command(args: &BatchArgs) -> anyhow::Result<()> {
    set_threads(args.common_args.num_threads)?;

    let queries = Sequence::from_fasta(&args.query_path)?;
    let targets = Sequence::from_fasta(&args.target_path)?;
    let params = args.scoring_args.params();

    let now = Instant::now();
    let records = align_all(&queries, &targets, &params)?;
    info!(
        "aligned {} queries against {} targets ({} pairs) in {:.3}s",
        queries.len(),
        targets.len(),
        records.len(),
        now.elapsed().as_secs_f64()
    );

    let mut out = writer_or_stdout(&args.tbl_results_path, args.common_args.overwrite_args.allow_overwrite)?;
    write_table(&mut out, &records)?;
    out.flush()?;
    Ok(())
}
