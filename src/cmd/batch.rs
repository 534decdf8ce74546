use crate::reports;
use clap::Args;
use fretforge::config::Config;
use fretforge::fingering::Fingering;
use fretforge::loader::load_fingerings_from_file;
use fretforge::scorer::{Analysis, Scorer};
use fretforge::FfResult;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV file with a `name,fingering` header.
    #[arg(short, long)]
    pub input: String,

    /// Only show the N easiest shapes.
    #[arg(short, long)]
    pub top: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    name: &'a str,
    fingering: Fingering,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

pub fn run(args: BatchArgs, scorer: Arc<Scorer>) -> FfResult<()> {
    info!("📂 Loading Fingerings: {}", args.input);
    let rows = load_fingerings_from_file(&args.input)?;

    let start = Instant::now();
    let fingerings: Vec<Fingering> = rows.iter().map(|(_, f)| *f).collect();
    let analyses = scorer.analyze_batch(&fingerings);
    info!(
        "Scored {} fingerings in {:.2?}",
        analyses.len(),
        start.elapsed()
    );

    let mut results: Vec<(String, Fingering, Analysis)> = rows
        .into_iter()
        .zip(analyses)
        .map(|((name, fingering), analysis)| (name, fingering, analysis))
        .collect();

    // Stable: equal scores keep file order. Impossible shapes always go last.
    results.sort_by(|a, b| {
        b.2.is_playable()
            .cmp(&a.2.is_playable())
            .then(a.2.score.total_cmp(&b.2.score))
    });
    if let Some(n) = args.top {
        results.truncate(n);
    }

    if args.json {
        let entries: Vec<BatchEntry> = results
            .iter()
            .map(|(name, fingering, analysis)| BatchEntry {
                name,
                fingering: *fingering,
                analysis,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        reports::print_ranking_report(&results);
    }
    Ok(())
}
