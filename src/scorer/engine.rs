use super::costs::{barre_stats, fret_inversions, fret_span, mean_fret, stretch_std_dev};
use super::ScoreDetails;
use crate::assignment::{FingerAssignment, Impossibility};
use crate::config::ScoringWeights;
use tracing::trace;

/// Applies the stretch limit, then every weighted penalty in a fixed order.
pub fn score_details(
    weights: &ScoringWeights,
    assignment: &FingerAssignment,
) -> Result<ScoreDetails, Impossibility> {
    let mut d = ScoreDetails {
        assignment: assignment.clone(),
        ..Default::default()
    };

    if assignment.is_empty() {
        d.lines.push("No notes to play.".to_string());
        return Ok(d);
    }

    let frets = assignment.frets();
    let span = fret_span(&frets);
    if span > weights.max_fret_span {
        return Err(Impossibility::ExcessiveStretch {
            span,
            limit: weights.max_fret_span,
        });
    }

    // 1. Finger Count
    d.stat_fingers = assignment.fingers_used().len();
    d.finger_count = d.stat_fingers as f32 * weights.weight_finger_count;
    if d.finger_count > 0.0 {
        d.lines.push(format!(
            "Fingers used: {} -> Score +{:.1}",
            d.stat_fingers, d.finger_count
        ));
    }

    // 2. Fret Span
    d.stat_span = span;
    d.fret_span = span as f32 * weights.weight_fret_span;
    if d.fret_span > 0.0 {
        d.lines.push(format!(
            "Fret span (stretch): {} frets -> Score +{:.1}",
            span, d.fret_span
        ));
    }

    // 3. Hand Position
    d.stat_mean_fret = mean_fret(&frets);
    d.position = d.stat_mean_fret * weights.weight_position;
    if d.position > 0.0 {
        d.lines.push(format!(
            "Average fret position: {:.1} -> Score +{:.1}",
            d.stat_mean_fret, d.position
        ));
    }

    // 4. Barres
    let barres = barre_stats(assignment);
    d.stat_barres = barres.barres;
    d.stat_barre_extra_strings = barres.extra_strings;
    d.barre_base = barres.barres as f32 * weights.weight_barre_base;
    if d.barre_base > 0.0 {
        d.lines.push(format!(
            "Barre detected ({} finger{}) -> Score +{:.1}",
            barres.barres,
            if barres.barres == 1 { "" } else { "s" },
            d.barre_base
        ));
    }
    d.barre_length = barres.extra_strings as f32 * weights.weight_barre_length;
    if d.barre_length > 0.0 {
        d.lines.push(format!(
            "Barre length penalty ({} extra strings) -> Score +{:.1}",
            barres.extra_strings, d.barre_length
        ));
    }

    // 5. Stretch Variance
    if let Some(std_dev) = stretch_std_dev(assignment) {
        d.stat_stretch_std_dev = std_dev;
        d.stretch_variance = std_dev * weights.weight_stretch_variance;
        if d.stretch_variance > 0.0 {
            d.lines.push(format!(
                "Uneven finger stretch (std dev {:.2} frets) -> Score +{:.1}",
                std_dev, d.stretch_variance
            ));
        }
    }

    // 6. Fret Inversion
    for inv in fret_inversions(assignment) {
        d.stat_inversion_frets += inv.frets as u32;
        let penalty = inv.frets as f32 * weights.weight_fret_inversion;
        if penalty > 0.0 {
            d.fret_inversion += penalty;
            d.lines.push(format!(
                "Fret inversion on strings {}-{} ({} frets) -> Score +{:.1}",
                inv.low_string + 1,
                inv.high_string + 1,
                inv.frets,
                penalty
            ));
        }
    }

    trace!(
        fingers = d.finger_count,
        span = d.fret_span,
        position = d.position,
        barre_base = d.barre_base,
        barre_length = d.barre_length,
        variance = d.stretch_variance,
        inversion = d.fret_inversion,
        "score components"
    );

    d.total = d.finger_count
        + d.fret_span
        + d.position
        + d.barre_base
        + d.barre_length
        + d.stretch_variance
        + d.fret_inversion;

    Ok(d)
}
