use crate::assignment::{Finger, FingerAssignment};
use crate::consts::STRING_COUNT;
use crate::fingering::{Fingering, StringState};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Chord shapes whose fingering players learn by rote rather than by the usual
/// index-finger-first logic. Their assignments are written out by hand.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownShape {
    GMajorOpen,
    GMajorRock,
}

impl KnownShape {
    /// Frets per string, low E first. Negative = muted.
    pub fn frets(&self) -> [i32; STRING_COUNT] {
        match self {
            Self::GMajorOpen => [3, 2, 0, 0, 0, 3],
            Self::GMajorRock => [3, 2, 0, 0, 3, 3],
        }
    }

    /// (string, fret, finger) triples.
    fn placements(&self) -> &'static [(usize, u8, Finger)] {
        match self {
            Self::GMajorOpen => &[(0, 3, Finger::Middle), (1, 2, Finger::Index), (5, 3, Finger::Ring)],
            Self::GMajorRock => &[
                (0, 3, Finger::Middle),
                (1, 2, Finger::Index),
                (4, 3, Finger::Pinky),
                (5, 3, Finger::Ring),
            ],
        }
    }

    pub fn fingering(&self) -> Fingering {
        let mut strings = [StringState::Muted; STRING_COUNT];
        for (state, fret) in strings.iter_mut().zip(self.frets()) {
            *state = match fret {
                f if f < 0 => StringState::Muted,
                0 => StringState::Open,
                f => StringState::Fret(f as u8),
            };
        }
        Fingering::new(strings)
    }

    pub fn assignment(&self) -> FingerAssignment {
        let mut assignment = FingerAssignment::new();
        for &(string, fret, finger) in self.placements() {
            assignment.place(string, fret, finger);
        }
        assignment
    }
}

/// Exact-match lookup against the override table.
pub fn lookup(fingering: &Fingering) -> Option<KnownShape> {
    KnownShape::iter().find(|shape| shape.fingering() == *fingering)
}

pub fn all_shapes() -> Vec<KnownShape> {
    KnownShape::iter().collect()
}
