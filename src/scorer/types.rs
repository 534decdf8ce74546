use crate::assignment::{FingerAssignment, Impossibility};
use crate::consts::IMPOSSIBLE_SCORE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Top-line Score
    pub total: f32,

    // Weighted Components (in evaluation order)
    pub finger_count: f32,
    pub fret_span: f32,
    pub position: f32,
    pub barre_base: f32,
    pub barre_length: f32,
    pub stretch_variance: f32,
    pub fret_inversion: f32,

    // === RAW MEASUREMENTS ===
    pub stat_fingers: usize,
    pub stat_span: u8,
    pub stat_mean_fret: f32,
    pub stat_barres: usize,
    pub stat_barre_extra_strings: usize,
    pub stat_stretch_std_dev: f32,
    pub stat_inversion_frets: u32,

    // Report
    pub assignment: FingerAssignment,
    pub lines: Vec<String>,
}

impl ScoreDetails {
    /// `Proposed Fingering ...` header followed by one `- ` line per non-zero contribution.
    pub fn report(&self) -> String {
        if self.assignment.is_empty() {
            return self
                .lines
                .first()
                .cloned()
                .unwrap_or_else(|| "No notes to play.".to_string());
        }
        let mut out = format!(
            "Proposed Fingering (1=Index..4=Pinky): {}\nAnalysis:",
            self.assignment.summary()
        );
        for line in &self.lines {
            out.push_str("\n- ");
            out.push_str(line);
        }
        out
    }
}

/// Outcome of scoring one fingering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Verdict {
    Playable(ScoreDetails),
    Impossible { reason: Impossibility },
}

/// Flat (score, report) view. Impossible shapes carry `IMPOSSIBLE_SCORE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub score: f32,
    pub report: String,
    pub verdict: Verdict,
}

impl Analysis {
    pub fn from_verdict(verdict: Verdict) -> Self {
        match &verdict {
            Verdict::Playable(details) => Self {
                score: details.total,
                report: details.report(),
                verdict,
            },
            Verdict::Impossible { reason } => Self {
                score: IMPOSSIBLE_SCORE,
                report: reason.to_string(),
                verdict,
            },
        }
    }

    pub fn is_playable(&self) -> bool {
        matches!(self.verdict, Verdict::Playable(_))
    }

    pub fn details(&self) -> Option<&ScoreDetails> {
        match &self.verdict {
            Verdict::Playable(d) => Some(d),
            Verdict::Impossible { .. } => None,
        }
    }

    pub fn impossibility(&self) -> Option<Impossibility> {
        match self.verdict {
            Verdict::Impossible { reason } => Some(reason),
            Verdict::Playable(_) => None,
        }
    }
}
