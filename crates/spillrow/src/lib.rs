#![forbid(unsafe_code)]

//! Spillrow public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for hosts. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! A host wires four pieces together: an [`OverflowRow`] controller, a
//! [`MeasureHost`] that reads element sizes, a [`FrameScheduler`] that
//! defers work to the next frame, and a [`ResizeMultiplexer`] that
//! coalesces size notifications. Everything else is plain data flowing
//! out through [`RenderPlan`].
//!
//! ```ignore
//! use std::rc::Rc;
//! use spillrow::prelude::*;
//!
//! let host: Rc<dyn MeasureHost> = Rc::new(my_host);
//! let frames: Rc<dyn FrameScheduler> = Rc::new(my_frame_loop);
//! let mux = ResizeMultiplexer::new(frames.clone());
//!
//! let row = OverflowRow::new(
//!     OverflowConfig::default().with_indicator(true),
//!     host,
//!     frames,
//!     mux.clone(),
//! )?;
//! row.set_item_count(tags.len());
//! row.on_update(|plan: &RenderPlan| redraw(plan));
//! row.mount();
//! // Feed raw size changes into the multiplexer as they arrive:
//! // mux.notify(row.container_id(), new_size);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use spillrow_core::{
    ConfigError, DEFAULT_GAP, ElementId, ItemKey, MeasureCache, OverflowConfig, Size,
    visible_count,
};

// --- Engine re-exports -----------------------------------------------------

pub use spillrow_engine::{
    FrameHandle, FrameScheduler, IndicatorPayload, MeasureHost, OverflowRow, Phase, RenderPlan,
    ResizeEntry, ResizeMultiplexer, ScaffoldPlan,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    // Deliberately no `core`/`engine` aliases here: a glob import of the
    // prelude must not shadow the language's `core` crate.
    pub use crate::{
        ConfigError, ElementId, FrameScheduler, ItemKey, MeasureHost, OverflowConfig,
        OverflowRow, Phase, RenderPlan, ResizeMultiplexer, Size,
    };
}

pub use spillrow_core as core;
pub use spillrow_engine as engine;

#[cfg(test)]
mod tests {
    #[test]
    fn prelude_glob_leaves_the_core_crate_reachable() {
        use crate::prelude::*;

        // Breaks if the prelude ever re-exports a `core` alias again:
        // `core::primitive` only exists on the language's core crate.
        let max: core::primitive::usize = core::primitive::usize::MAX;
        assert!(max > 0);
        assert!(OverflowConfig::default().validate().is_ok());
    }
}
