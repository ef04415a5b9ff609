#![forbid(unsafe_code)]

//! Logging seam.
//!
//! Core modules log through `crate::trace!` / `crate::debug!` /
//! `crate::warn!` unconditionally. With the `tracing` feature enabled
//! those are the real tracing macros; without it they expand to nothing,
//! so log sites never force the dependency on consumers.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    /// Discards its arguments when the `tracing` feature is off.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Discards its arguments when the `tracing` feature is off.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Discards its arguments when the `tracing` feature is off.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
