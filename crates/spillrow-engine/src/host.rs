#![forbid(unsafe_code)]

//! One-shot element measurement seam.
//!
//! The controller reads rendered sizes through this trait at two points:
//! the container's available width at the start of every pass, and the
//! scaffold's item slots plus the indicator sizer when the cache is cold.
//! Reads are synchronous and must reflect the host's settled layout; the
//! controller batches all reads for a pass before committing any state.
//!
//! # Failure Modes
//!
//! Returning `None` means the element cannot be measured right now (element
//! not attached yet, headless evaluation context with no layout engine).
//! That is a degraded-but-valid state, not an error: the pass resolves to
//! zero visible items and a later pass recovers once reads succeed.

use spillrow_core::{ElementId, Size};

/// Synchronous size reads against the host's current layout.
pub trait MeasureHost {
    /// Measure one element, or `None` when no measurement is available.
    fn measure(&self, id: ElementId) -> Option<Size>;
}
