use thiserror::Error;

/// Input-level failures. Unplayable shapes are not errors; see `assignment::Impossibility`.
#[derive(Error, Debug)]
pub enum FretForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Fingering Parse Error: {0}")]
    Parse(String),

    #[error("Fingering must have exactly {expected} strings, got {actual}")]
    Length { expected: usize, actual: usize },
}

pub type FfResult<T> = Result<T, FretForgeError>;
