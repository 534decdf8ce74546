pub mod api;
pub mod assignment;
pub mod config;
pub mod consts;
pub mod error;
pub mod fingering;
pub mod loader;
pub mod scorer;
pub mod shapes;

pub use crate::api::{analyze, analyze_frets, analyze_str};
pub use crate::error::{FfResult, FretForgeError};
