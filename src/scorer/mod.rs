pub mod costs;
pub mod engine;
pub mod types;

pub use self::types::{Analysis, ScoreDetails, Verdict};
use crate::assignment::{self, FingerAssignment, Impossibility};
use crate::config::{Config, ScoringWeights};
use crate::error::FfResult;
use crate::fingering::Fingering;
use rayon::prelude::*;
use tracing::debug;

/// Stateless apart from its weights, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> FfResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn from_config(config: Config) -> FfResult<Self> {
        Self::new(config.weights)
    }

    /// Scores an existing assignment. The stretch limit can still reject it.
    pub fn score(&self, assignment: &FingerAssignment) -> Result<ScoreDetails, Impossibility> {
        engine::score_details(&self.weights, assignment)
    }

    pub fn verdict(&self, fingering: &Fingering) -> Verdict {
        match assignment::assign(fingering).and_then(|a| self.score(&a)) {
            Ok(details) => Verdict::Playable(details),
            Err(reason) => {
                debug!("{} -> {}", fingering, reason);
                Verdict::Impossible { reason }
            }
        }
    }

    pub fn analyze(&self, fingering: &Fingering) -> Analysis {
        Analysis::from_verdict(self.verdict(fingering))
    }

    /// Scores independent fingerings in parallel. Output order matches input order.
    pub fn analyze_batch(&self, fingerings: &[Fingering]) -> Vec<Analysis> {
        fingerings.par_iter().map(|f| self.analyze(f)).collect()
    }
}
