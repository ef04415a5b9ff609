#![forbid(unsafe_code)]

//! Construction-time configuration for an overflow row.
//!
//! # Usage
//!
//! ```
//! use spillrow_core::OverflowConfig;
//!
//! let config = OverflowConfig::default()
//!     .with_gap(12.0)
//!     .with_indicator(true);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Validation is fail-fast: a negative gap is a programmer error and is
//! rejected before any measurement happens, because silently clamping it
//! would produce confusing layout downstream.

use crate::error::ConfigError;

/// Default spacing between adjacent row items, in layout units.
pub const DEFAULT_GAP: f64 = 8.0;

/// Behavior knobs fixed at controller construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowConfig {
    /// Spacing between adjacent visible items, and between the last
    /// visible item and the indicator. Must be non-negative.
    pub gap: f64,
    /// Whether the caller supplies an overflow indicator renderer.
    ///
    /// When false, no indicator reserve is ever charged during fitting and
    /// no indicator appears in render plans, even when items are hidden.
    pub has_indicator: bool,
    /// Element tag the host should use for the root container.
    pub container_tag: String,
}

impl Default for OverflowConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            has_indicator: false,
            container_tag: "div".to_string(),
        }
    }
}

impl OverflowConfig {
    /// Set the item gap.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Declare whether an overflow indicator renderer exists.
    #[must_use]
    pub fn with_indicator(mut self, has_indicator: bool) -> Self {
        self.has_indicator = has_indicator;
        self
    }

    /// Set the root container's element tag.
    #[must_use]
    pub fn with_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = tag.into();
        self
    }

    /// Reject impossible configurations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gap < 0.0 {
            return Err(ConfigError::NegativeGap { gap: self.gap });
        }
        Ok(())
    }
}
