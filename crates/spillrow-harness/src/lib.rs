#![forbid(unsafe_code)]

//! Headless test instruments for the overflow engine.
//!
//! Everything here stands in for a real layout host in tests and benches:
//!
//! - **Scripted measurement**: [`HeadlessHost`] serves element sizes from a
//!   table and counts every read, so tests can assert not just the outcome
//!   but how many measurements it cost.
//! - **Manual frames**: [`ManualFrameLoop`] is a frame scheduler that runs
//!   nothing until the test pumps it, making "this work is deferred" and
//!   "these triggers coalesced" directly observable.
//! - **Deterministic resize sequences**: [`ResizeScript`] generates seeded
//!   width sequences (bursts, sweeps, oscillations) for storm testing.
//!
//! # Quick Start
//!
//! ```ignore
//! use spillrow_harness::{HeadlessHost, ManualFrameLoop};
//!
//! let host = Rc::new(HeadlessHost::new());
//! let frames = Rc::new(ManualFrameLoop::new());
//! let mux = ResizeMultiplexer::new(frames.clone());
//! let row = OverflowRow::new(config, host.clone(), frames.clone(), mux)?;
//! row.mount();
//! frames.pump();
//! assert_eq!(row.visible_count(), 4);
//! ```

pub mod frame_loop;
pub mod headless;
pub mod resize_script;

pub use frame_loop::ManualFrameLoop;
pub use headless::HeadlessHost;
pub use resize_script::{ResizeScript, ScriptConfig, ScriptPattern, WidthEvent};
