/// Number of strings on a standard guitar. A fingering always has this many entries.
pub const STRING_COUNT: usize = 6;

/// Distinct string pairs, the most inversions a shape can have.
pub const STRING_PAIRS: usize = STRING_COUNT * (STRING_COUNT - 1) / 2;

/// Fingers available to the fretting hand (index..pinky). The thumb is never used.
pub const FINGER_COUNT: usize = 4;

/// Minimum number of strings under a barre before a lower note elsewhere counts as blocked.
pub const BLOCKING_BARRE_STRINGS: usize = 4;

/// Sentinel score for shapes no hand can realize. Acts as a ceiling, not a difficulty.
pub const IMPOSSIBLE_SCORE: f32 = 10_000.0;

// Default weight table. `ScoringWeights::default()` is built from these.
pub const DEFAULT_WEIGHT_FINGER_COUNT: f32 = 10.0;
pub const DEFAULT_WEIGHT_FRET_SPAN: f32 = 15.0;
pub const DEFAULT_WEIGHT_POSITION: f32 = 2.0;
pub const DEFAULT_WEIGHT_BARRE_BASE: f32 = 20.0;
pub const DEFAULT_WEIGHT_BARRE_LENGTH: f32 = 8.0;
pub const DEFAULT_WEIGHT_STRETCH_VARIANCE: f32 = 10.0;
pub const DEFAULT_WEIGHT_FRET_INVERSION: f32 = 2.0;

/// Widest fret span (max - min) a hand is allowed to stretch across.
pub const DEFAULT_MAX_FRET_SPAN: u8 = 4;
