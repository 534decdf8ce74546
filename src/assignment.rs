use crate::consts::{BLOCKING_BARRE_STRINGS, FINGER_COUNT};
use crate::fingering::Fingering;
use crate::shapes;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use strum_macros::{Display, EnumIter};
use tracing::debug;

/// Fretting-hand fingers, numbered the way chord charts number them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Finger {
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub fn number(self) -> u8 {
        self as u8
    }
}

/// Fingers left once the index finger has taken the anchor fret, in the order they are handed out.
const FOLLOWING_FINGERS: [Finger; FINGER_COUNT - 1] = [Finger::Middle, Finger::Ring, Finger::Pinky];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub fret: u8,
    pub finger: Finger,
}

/// String index -> (fret, finger). A finger appears on several strings only as a barre.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerAssignment {
    placements: BTreeMap<usize, Placement>,
}

impl FingerAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, string: usize, fret: u8, finger: Finger) {
        self.placements.insert(string, Placement { fret, finger });
    }

    pub fn get(&self, string: usize) -> Option<&Placement> {
        self.placements.get(&string)
    }

    /// Placements in ascending string order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Placement)> {
        self.placements.iter().map(|(&s, p)| (s, p))
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn frets(&self) -> Vec<u8> {
        self.placements.values().map(|p| p.fret).collect()
    }

    pub fn fingers_used(&self) -> BTreeSet<Finger> {
        self.placements.values().map(|p| p.finger).collect()
    }

    /// Finger -> (fret, number of strings it covers).
    pub fn finger_usage(&self) -> BTreeMap<Finger, (u8, usize)> {
        let mut usage: BTreeMap<Finger, (u8, usize)> = BTreeMap::new();
        for p in self.placements.values() {
            usage.entry(p.finger).or_insert((p.fret, 0)).1 += 1;
        }
        usage
    }

    /// `S1:F1(1) S2:F3(3) ...` with 1-based strings and finger numbers.
    pub fn summary(&self) -> String {
        self.placements
            .iter()
            .map(|(s, p)| format!("S{}:F{}({})", s + 1, p.fret, p.finger.number()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Why a shape cannot be played. These are expected outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impossibility {
    /// A note sits below a barre that already spans most of the strings.
    BlockedByBarre { string: usize, fret: u8, barre_fret: u8 },
    /// More notes than fingers. `required` counts the index finger.
    InsufficientFingers { required: usize },
    /// The hand would have to stretch across more frets than it can.
    ExcessiveStretch { span: u8, limit: u8 },
}

impl fmt::Display for Impossibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockedByBarre {
                string,
                fret,
                barre_fret,
            } => write!(
                f,
                "Impossible Fingering: Note at fret {} on string {} is blocked by the index finger barre on fret {}.",
                fret,
                string + 1,
                barre_fret
            ),
            Self::InsufficientFingers { required } => write!(
                f,
                "Impossible Fingering: Requires {} fingers, but only {} are available.",
                required, FINGER_COUNT
            ),
            Self::ExcessiveStretch { span, limit } => write!(
                f,
                "Impossible Fingering: Fret span of {} exceeds the maximum stretch of {} frets.",
                span, limit
            ),
        }
    }
}

/// Assigns fingers to a full fingering. Known shapes win over the heuristic.
pub fn assign(fingering: &Fingering) -> Result<FingerAssignment, Impossibility> {
    if let Some(shape) = shapes::lookup(fingering) {
        debug!("Known shape '{}' matched {}", shape, fingering);
        return Ok(shape.assignment());
    }
    assign_pressed(&fingering.pressed())
}

/// Barre-centric greedy heuristic over the pressed strings (string -> fret).
///
/// A wide barre with a note below it is blocked. Otherwise the index finger anchors at the
/// lowest fret and the remaining notes go to middle, ring and pinky by ascending (fret, string).
/// It commits immediately and never backtracks, so the result is plausible rather than optimal.
pub fn assign_pressed(pressed: &BTreeMap<usize, u8>) -> Result<FingerAssignment, Impossibility> {
    let mut assignment = FingerAssignment::new();
    let Some(lowest) = pressed.values().copied().min() else {
        return Ok(assignment);
    };

    let barre_fret = candidate_barre_fret(pressed).unwrap_or(lowest);
    let barre_strings = pressed.values().filter(|&&f| f == barre_fret).count();

    if barre_strings >= BLOCKING_BARRE_STRINGS {
        if let Some((&string, &fret)) = pressed.iter().find(|&(_, &f)| f < barre_fret) {
            let verdict = Impossibility::BlockedByBarre {
                string,
                fret,
                barre_fret,
            };
            debug!("{}", verdict);
            return Err(verdict);
        }
    }

    // The candidate barre only decides blocking. The index finger always anchors nearest the nut.
    let anchor = lowest;

    let mut remaining: Vec<(usize, u8)> = Vec::with_capacity(pressed.len());
    for (&string, &fret) in pressed {
        if fret == anchor {
            assignment.place(string, fret, Finger::Index);
        } else {
            remaining.push((string, fret));
        }
    }

    if remaining.len() > FOLLOWING_FINGERS.len() {
        let verdict = Impossibility::InsufficientFingers {
            required: remaining.len() + 1,
        };
        debug!("{}", verdict);
        return Err(verdict);
    }

    remaining.sort_by_key(|&(string, fret)| (fret, string));
    for ((string, fret), finger) in remaining.into_iter().zip(FOLLOWING_FINGERS) {
        assignment.place(string, fret, finger);
    }

    Ok(assignment)
}

/// Most frequently pressed fret; ties go to the lowest fret.
pub fn candidate_barre_fret(pressed: &BTreeMap<usize, u8>) -> Option<u8> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for &fret in pressed.values() {
        *counts.entry(fret).or_default() += 1;
    }

    let mut best: Option<(u8, usize)> = None;
    for (fret, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((fret, count)),
        }
    }
    best.map(|(fret, _)| fret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(frets: &[(usize, u8)]) -> BTreeMap<usize, u8> {
        frets.iter().copied().collect()
    }

    #[test]
    fn tie_goes_to_lowest_fret() {
        let p = pressed(&[(0, 5), (1, 5), (2, 3), (3, 3)]);
        assert_eq!(candidate_barre_fret(&p), Some(3));
    }

    #[test]
    fn no_repetition_degenerates_to_lowest() {
        let p = pressed(&[(0, 7), (2, 4), (5, 9)]);
        assert_eq!(candidate_barre_fret(&p), Some(4));
    }

    #[test]
    fn index_takes_lowest_fret_below_a_short_cluster() {
        let p = pressed(&[(0, 3), (1, 5), (2, 5), (3, 5)]);
        assert_eq!(candidate_barre_fret(&p), Some(5));
        let a = assign_pressed(&p).unwrap();
        assert_eq!(a.get(0).map(|pl| pl.finger), Some(Finger::Index));
        assert_eq!(a.get(1).map(|pl| pl.finger), Some(Finger::Middle));
        assert_eq!(a.get(3).map(|pl| pl.finger), Some(Finger::Pinky));
    }

    #[test]
    fn empty_pressed_set_is_empty_assignment() {
        let a = assign_pressed(&BTreeMap::new()).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.summary(), "");
    }

    #[test]
    fn finger_usage_counts_barre_strings() {
        let p = pressed(&[(0, 1), (1, 3), (2, 3), (3, 2), (4, 1), (5, 1)]);
        let a = assign_pressed(&p).unwrap();
        let usage = a.finger_usage();
        assert_eq!(usage[&Finger::Index], (1, 3));
        assert_eq!(usage[&Finger::Middle], (2, 1));
    }
}
