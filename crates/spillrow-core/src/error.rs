#![forbid(unsafe_code)]

//! Error types for configuration validation.
//!
//! The engine has exactly one hard failure mode: a caller handing it an
//! impossible configuration. Everything else (missing measurements, zero
//! width containers, empty item sets) is a degraded-but-valid state that
//! resolves to zero visible items and recovers on a later pass, so those
//! paths return plain values instead of errors.

use std::fmt;

/// Rejected configuration, surfaced before any measurement work happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configured gap is negative. Negative gaps break width
    /// accumulation, so this is refused loudly instead of clamped.
    NegativeGap {
        /// The offending gap value.
        gap: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeGap { gap } => {
                write!(f, "gap must be non-negative, got {gap}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
