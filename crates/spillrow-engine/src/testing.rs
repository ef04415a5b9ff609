#![forbid(unsafe_code)]

//! In-crate test doubles: a pump-driven frame queue and a scripted host.
//!
//! These mirror what the spillrow-harness crate ships for downstream
//! integration tests, kept local so unit tests need no dev-dependency
//! cycle.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use spillrow_core::{ElementId, Size};

use crate::host::MeasureHost;
use crate::schedule::{FrameHandle, FrameScheduler};

/// Frame scheduler driven by explicit [`FrameQueue::pump`] calls.
///
/// Tasks scheduled during a pump run on the next pump, matching frame
/// boundary semantics.
pub struct FrameQueue {
    queue: RefCell<Vec<(FrameHandle, Box<dyn FnOnce()>)>>,
    cancelled: RefCell<Vec<FrameHandle>>,
    next: Cell<u64>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self {
            queue: RefCell::new(Vec::new()),
            cancelled: RefCell::new(Vec::new()),
            next: Cell::new(0),
        }
    }

    /// Run every task due this frame; returns how many ran.
    pub fn pump(&self) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let mut ran = 0;
        for (handle, task) in due {
            let skip = {
                let mut cancelled = self.cancelled.borrow_mut();
                match cancelled.iter().position(|h| *h == handle) {
                    Some(at) => {
                        cancelled.swap_remove(at);
                        true
                    }
                    None => false,
                }
            };
            if skip {
                continue;
            }
            task();
            ran += 1;
        }
        self.cancelled.borrow_mut().clear();
        ran
    }

    /// Number of tasks waiting for the next pump.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule(&self, task: Box<dyn FnOnce()>) -> FrameHandle {
        let id = self.next.get() + 1;
        self.next.set(id);
        let handle = FrameHandle::from_raw(id);
        self.queue.borrow_mut().push((handle, task));
        handle
    }

    fn cancel(&self, handle: FrameHandle) {
        let mut queue = self.queue.borrow_mut();
        match queue.iter().position(|(h, _)| *h == handle) {
            Some(at) => {
                queue.remove(at);
            }
            // Possibly snapshotted by a pump in progress; veto it there.
            None => self.cancelled.borrow_mut().push(handle),
        }
    }
}

/// Measure host backed by a scripted size table, with read counters.
#[derive(Default)]
pub struct ScriptedHost {
    sizes: RefCell<HashMap<ElementId, Size>>,
    reads: RefCell<HashMap<ElementId, u64>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the size reported for `id`.
    pub fn set_size(&self, id: ElementId, size: Size) {
        self.sizes.borrow_mut().insert(id, size);
    }

    /// Make future reads of `id` fail.
    pub fn clear_size(&self, id: ElementId) {
        self.sizes.borrow_mut().remove(&id);
    }

    /// How many times `id` has been measured.
    pub fn reads_of(&self, id: ElementId) -> u64 {
        self.reads.borrow().get(&id).copied().unwrap_or(0)
    }
}

impl MeasureHost for ScriptedHost {
    fn measure(&self, id: ElementId) -> Option<Size> {
        *self.reads.borrow_mut().entry(id).or_insert(0) += 1;
        self.sizes.borrow().get(&id).copied()
    }
}
