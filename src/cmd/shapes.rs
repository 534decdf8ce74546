use crate::reports;
use clap::Args;
use fretforge::config::Config;
use fretforge::scorer::Scorer;
use fretforge::shapes::all_shapes;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ShapesArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(scorer: Arc<Scorer>) {
    let rows: Vec<_> = all_shapes()
        .into_iter()
        .map(|shape| {
            let analysis = scorer.analyze(&shape.fingering());
            (shape, analysis)
        })
        .collect();
    reports::print_shapes_report(&rows);
}
