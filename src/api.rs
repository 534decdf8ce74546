use crate::error::FfResult;
use crate::fingering::Fingering;
use crate::scorer::{Analysis, Scorer};

/// Scores a fingering with the built-in weight table.
pub fn analyze(fingering: &Fingering) -> Analysis {
    Scorer::default().analyze(fingering)
}

/// Integer entry point: negative = muted, 0 = open. Fails on anything but 6 values.
pub fn analyze_frets(values: &[i32]) -> FfResult<Analysis> {
    let fingering = Fingering::from_frets(values)?;
    Ok(analyze(&fingering))
}

/// Text entry point, e.g. `x32010` or `1 3 3 2 1 1`.
pub fn analyze_str(s: &str) -> FfResult<Analysis> {
    let fingering: Fingering = s.parse()?;
    Ok(analyze(&fingering))
}
