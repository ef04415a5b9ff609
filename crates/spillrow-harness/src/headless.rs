#![forbid(unsafe_code)]

//! Scripted measurement host.
//!
//! Serves sizes from an in-memory table and counts reads per element.
//! Elements without a scripted size measure as `None`, which is exactly
//! how hosts report unlaid-out or missing elements, so degraded-host
//! behavior is scriptable too: leave the entry out.

use std::cell::RefCell;
use std::collections::HashMap;

use spillrow_core::{ElementId, Size};
use spillrow_engine::MeasureHost;

/// In-memory measurement host with read accounting.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    sizes: RefCell<HashMap<ElementId, Size>>,
    reads: RefCell<HashMap<ElementId, usize>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the size reported for `id`.
    pub fn set_size(&self, id: ElementId, size: Size) {
        self.sizes.borrow_mut().insert(id, size);
    }

    /// Script only a width for `id`; the height is a nominal line height,
    /// which nothing in the fit pass consults.
    pub fn set_width(&self, id: ElementId, width: f64) {
        self.set_size(id, Size::new(width, 16.0));
    }

    /// Remove the scripted size; subsequent reads of `id` return `None`.
    pub fn clear_size(&self, id: ElementId) {
        self.sizes.borrow_mut().remove(&id);
    }

    /// How many times `id` has been measured.
    pub fn reads_of(&self, id: ElementId) -> usize {
        self.reads.borrow().get(&id).copied().unwrap_or(0)
    }

    /// Total measurements across all elements.
    pub fn total_reads(&self) -> usize {
        self.reads.borrow().values().sum()
    }

    /// Forget all read counts without touching scripted sizes.
    pub fn reset_reads(&self) {
        self.reads.borrow_mut().clear();
    }
}

impl MeasureHost for HeadlessHost {
    fn measure(&self, id: ElementId) -> Option<Size> {
        *self.reads.borrow_mut().entry(id).or_insert(0) += 1;
        self.sizes.borrow().get(&id).copied()
    }
}
