use crate::reports;
use clap::Args;
use fretforge::config::Config;
use fretforge::fingering::Fingering;
use fretforge::scorer::Scorer;
use fretforge::FfResult;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Fingerings such as `x32010` or `"1 3 3 2 1 1"`, low E first.
    #[arg(required = true)]
    pub fingerings: Vec<String>,
}

pub fn run(args: AnalyzeArgs, scorer: Arc<Scorer>) -> FfResult<()> {
    let fingerings = args
        .fingerings
        .iter()
        .map(|s| s.parse::<Fingering>())
        .collect::<FfResult<Vec<_>>>()?;

    let mut results = Vec::with_capacity(fingerings.len());
    for fingering in fingerings {
        let analysis = scorer.analyze(&fingering);

        println!("\n🎸 === CHORD ANALYSIS: {} === 🎸", fingering);
        if let Some(details) = analysis.details() {
            reports::print_fret_grid(&fingering, &details.assignment);
        }
        println!("Final Difficulty Score: {:.1}", analysis.score);
        println!("{}", analysis.report);

        results.push((fingering.to_string(), fingering, analysis));
    }

    if results.len() > 1 {
        reports::print_ranking_report(&results);
    }
    Ok(())
}
