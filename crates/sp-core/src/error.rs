//! Errors raised while loading a scene configuration.
//!
//! Pointer handling itself never fails; broken invariants there panic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed scene config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}: expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("canvas size must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("shape {index} ({kind}): {reason}")]
    InvalidShape {
        index: usize,
        kind: &'static str,
        reason: &'static str,
    },
}
