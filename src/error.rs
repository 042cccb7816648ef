//! Configuration errors
//!
//! Every value that reaches the animation core through a control is checked
//! at the API boundary. A rejected value leaves the previous one in place.

use thiserror::Error;

/// Errors raised when a control value falls outside its supported range
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("side count {sides} is outside the supported range {min}..={max}")]
    SidesOutOfRange { sides: u32, min: u32, max: u32 },

    #[error("polygon radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("tick interval {ms} ms is outside the supported range {min}..={max}")]
    TickIntervalOutOfRange { ms: u32, min: u32, max: u32 },

    #[error("waveform step must be positive and finite, got {0}")]
    InvalidStep(f64),
}
