use crate::assignment::FingerAssignment;

/// Distance in frets between the highest and lowest pressed notes.
pub fn fret_span(frets: &[u8]) -> u8 {
    match (frets.iter().max(), frets.iter().min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}

pub fn mean_fret(frets: &[u8]) -> f32 {
    if frets.is_empty() {
        return 0.0;
    }
    frets.iter().map(|&f| f as f32).sum::<f32>() / frets.len() as f32
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BarreStats {
    /// Fingers lying across more than one string.
    pub barres: usize,
    /// Strings covered beyond the first, summed over all barres.
    pub extra_strings: usize,
}

pub fn barre_stats(assignment: &FingerAssignment) -> BarreStats {
    let mut stats = BarreStats::default();
    for &(_, strings) in assignment.finger_usage().values() {
        if strings > 1 {
            stats.barres += 1;
            stats.extra_strings += strings - 1;
        }
    }
    stats
}

/// Population standard deviation of the frets held by single-string fingers.
/// `None` when fewer than two such fingers exist.
pub fn stretch_std_dev(assignment: &FingerAssignment) -> Option<f32> {
    let frets: Vec<f32> = assignment
        .finger_usage()
        .values()
        .filter(|&&(_, strings)| strings == 1)
        .map(|&(fret, _)| fret as f32)
        .collect();
    if frets.len() < 2 {
        return None;
    }
    let n = frets.len() as f32;
    let mean = frets.iter().sum::<f32>() / n;
    let variance = frets.iter().map(|f| (f - mean) * (f - mean)).sum::<f32>() / n;
    Some(variance.sqrt())
}

/// A string pair (lower index first) where the lower-indexed string sits at a higher fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inversion {
    pub low_string: usize,
    pub high_string: usize,
    pub frets: u8,
}

/// Every inverted pair, not only neighbours.
pub fn fret_inversions(assignment: &FingerAssignment) -> Vec<Inversion> {
    let placed: Vec<(usize, u8)> = assignment.iter().map(|(s, p)| (s, p.fret)).collect();
    let mut inversions = Vec::new();
    for (i, &(s1, f1)) in placed.iter().enumerate() {
        for &(s2, f2) in &placed[i + 1..] {
            if f1 > f2 {
                inversions.push(Inversion {
                    low_string: s1,
                    high_string: s2,
                    frets: f1 - f2,
                });
            }
        }
    }
    inversions
}
