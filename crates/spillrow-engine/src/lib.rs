#![forbid(unsafe_code)]

//! Spillrow Engine
//!
//! This crate orchestrates the pieces from `spillrow-core` into a working
//! overflow row: hidden measurement, fit calculation, and coalesced
//! recomputation on resize or content change.
//!
//! # Key Components
//!
//! - [`OverflowRow`] - Controller state machine driving measure and fit passes
//! - [`RenderPlan`] - Declarative output the host redraws from
//! - [`ResizeMultiplexer`] - Shared service coalescing size-change callbacks
//! - [`FrameScheduler`] - Deferred-task seam every async step goes through
//! - [`MeasureHost`] - One-shot element measurement seam
//!
//! # How it fits in the system
//! The engine is deliberately headless. A host (DOM adapter, canvas scene
//! graph, test harness) implements [`MeasureHost`] and [`FrameScheduler`],
//! feeds raw size notifications into the [`ResizeMultiplexer`], and redraws
//! whatever [`OverflowRow::render_plan`] tells it to. All engine work runs
//! on the host's single UI thread; there are no locks and no threads here.

pub mod controller;
pub mod host;
pub mod multiplexer;
pub mod plan;
pub mod schedule;

#[cfg(test)]
mod testing;

pub use controller::{OverflowRow, Phase};
pub use host::MeasureHost;
pub use multiplexer::{ResizeEntry, ResizeMultiplexer};
pub use plan::{IndicatorPayload, RenderPlan, ScaffoldPlan};
pub use schedule::{FrameHandle, FrameScheduler};
