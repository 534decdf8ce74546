use crate::consts::*;
use crate::error::{FfResult, FretForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    // === HAND SHAPE ===
    #[arg(long, default_value_t = DEFAULT_WEIGHT_FINGER_COUNT)]
    pub weight_finger_count: f32,
    #[arg(long, default_value_t = DEFAULT_WEIGHT_FRET_SPAN)]
    pub weight_fret_span: f32,
    #[arg(long, default_value_t = DEFAULT_WEIGHT_POSITION)]
    pub weight_position: f32,

    // === BARRE ===
    #[arg(long, default_value_t = DEFAULT_WEIGHT_BARRE_BASE)]
    pub weight_barre_base: f32,
    #[arg(long, default_value_t = DEFAULT_WEIGHT_BARRE_LENGTH)]
    pub weight_barre_length: f32,

    // === CONTORTION ===
    #[arg(long, default_value_t = DEFAULT_WEIGHT_STRETCH_VARIANCE)]
    pub weight_stretch_variance: f32,
    #[arg(long, default_value_t = DEFAULT_WEIGHT_FRET_INVERSION)]
    pub weight_fret_inversion: f32,

    // === HARD LIMITS ===
    #[arg(long, default_value_t = DEFAULT_MAX_FRET_SPAN)]
    pub max_fret_span: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_finger_count: DEFAULT_WEIGHT_FINGER_COUNT,
            weight_fret_span: DEFAULT_WEIGHT_FRET_SPAN,
            weight_position: DEFAULT_WEIGHT_POSITION,
            weight_barre_base: DEFAULT_WEIGHT_BARRE_BASE,
            weight_barre_length: DEFAULT_WEIGHT_BARRE_LENGTH,
            weight_stretch_variance: DEFAULT_WEIGHT_STRETCH_VARIANCE,
            weight_fret_inversion: DEFAULT_WEIGHT_FRET_INVERSION,
            max_fret_span: DEFAULT_MAX_FRET_SPAN,
        }
    }
}

impl ScoringWeights {
    /// Loads a JSON weight profile. Missing fields fall back to the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Weights must be finite and non-negative, and no playable shape may reach `IMPOSSIBLE_SCORE`.
    pub fn validate(&self) -> FfResult<()> {
        let named = [
            ("weight_finger_count", self.weight_finger_count),
            ("weight_fret_span", self.weight_fret_span),
            ("weight_position", self.weight_position),
            ("weight_barre_base", self.weight_barre_base),
            ("weight_barre_length", self.weight_barre_length),
            ("weight_stretch_variance", self.weight_stretch_variance),
            ("weight_fret_inversion", self.weight_fret_inversion),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(FretForgeError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        let worst = self.worst_case_total();
        if !worst.is_finite() || worst >= IMPOSSIBLE_SCORE {
            return Err(FretForgeError::Config(format!(
                "weights allow a playable score of {:.1}, which reaches the impossible sentinel {:.1}",
                worst, IMPOSSIBLE_SCORE
            )));
        }
        Ok(())
    }

    /// Upper bound on the total of any shape that passes the stretch limit.
    pub fn worst_case_total(&self) -> f32 {
        let span = self.max_fret_span as f32;
        FINGER_COUNT as f32 * self.weight_finger_count
            + span * self.weight_fret_span
            + u8::MAX as f32 * self.weight_position
            + (STRING_COUNT / 2) as f32 * self.weight_barre_base
            + (STRING_COUNT - 1) as f32 * self.weight_barre_length
            // Values inside a range of width `span` deviate by at most span / 2.
            + span / 2.0 * self.weight_stretch_variance
            + STRING_PAIRS as f32 * span * self.weight_fret_inversion
    }

    /// Copies over only the flags the user actually typed, leaving file values intact.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_finger_count, "weight_finger_count");
        update_if_present!(weight_fret_span, "weight_fret_span");
        update_if_present!(weight_position, "weight_position");
        update_if_present!(weight_barre_base, "weight_barre_base");
        update_if_present!(weight_barre_length, "weight_barre_length");
        update_if_present!(weight_stretch_variance, "weight_stretch_variance");
        update_if_present!(weight_fret_inversion, "weight_fret_inversion");
        update_if_present!(max_fret_span, "max_fret_span");
    }
}
