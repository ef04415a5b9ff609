#![forbid(unsafe_code)]

//! Core: fit calculation, measurement caching, and shared overflow types.

pub mod cache;
pub mod config;
pub mod error;
pub mod fit;
pub mod item;
pub mod logging;
pub mod size;

pub use cache::MeasureCache;
pub use config::{DEFAULT_GAP, OverflowConfig};
pub use error::ConfigError;
pub use fit::visible_count;
pub use item::{ElementId, ItemKey};
pub use size::Size;

// Re-export tracing macros at crate root for ergonomic use. Without the
// feature the no-op macros in `logging` already land at the crate root.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
