#![forbid(unsafe_code)]

//! Resize notification multiplexer.
//!
//! Many logical observers (each row's container, each indicator sizer)
//! want to know when their element's size changes, but raw size
//! notifications arrive in bursts and may fire several times within one
//! frame. This service fans a single notification stream out to per-element
//! callbacks while coalescing delivery to at most one invocation per
//! element per frame, which is what keeps resize handling from feeding back
//! into itself as layout thrash.
//!
//! # Usage
//!
//! ```ignore
//! let mux = ResizeMultiplexer::new(scheduler);
//! mux.observe(container, move |entry| recompute(entry.size));
//! // Host plumbing, on every raw size change:
//! mux.notify(container, new_size);
//! // Next frame: the callback fires once with the latest size.
//! ```
//!
//! # Design
//!
//! One callback is registered per element; observing an element again
//! replaces its callback. Raw notifications join a pending batch in first
//! notification order, with later sizes for the same element overwriting
//! earlier ones (latest wins). The first notification after an empty batch
//! schedules a drain at the next frame boundary; the drain clears the batch
//! before invoking anything, so callbacks that trigger further
//! notifications start a fresh batch for the following frame.
//!
//! # Invariants
//!
//! - Per element, at most one callback invocation per frame.
//! - A callback never fires for an element unobserved before the drain,
//!   even when a notification for it was already in flight.
//! - Delivery order within a batch is first-notification order.
//!
//! # Failure Modes
//!
//! Dropping every clone of the multiplexer with a drain still scheduled is
//! harmless: the drain task holds only a weak reference and becomes a
//! no-op. `disconnect` exists for deliberate whole-service teardown (test
//! isolation); per-row cleanup should use `unobserve`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use spillrow_core::{ElementId, Size};

use crate::schedule::{FrameHandle, FrameScheduler};

/// Latest observed size for one element, handed to its callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEntry {
    /// The element that changed.
    pub id: ElementId,
    /// Its most recently notified size.
    pub size: Size,
}

type ResizeCallback = Box<dyn FnMut(ResizeEntry)>;

struct MuxInner {
    callbacks: HashMap<ElementId, Rc<RefCell<ResizeCallback>>>,
    /// First-notification order, latest size per element.
    pending: Vec<(ElementId, Size)>,
    drain_handle: Option<FrameHandle>,
}

/// Shared, cheaply clonable handle to one multiplexer service.
///
/// Construct one per host event loop and hand clones to every controller
/// that needs resize callbacks.
#[derive(Clone)]
pub struct ResizeMultiplexer {
    scheduler: Rc<dyn FrameScheduler>,
    inner: Rc<RefCell<MuxInner>>,
}

impl ResizeMultiplexer {
    /// Create a multiplexer that drains through `scheduler`.
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            inner: Rc::new(RefCell::new(MuxInner {
                callbacks: HashMap::new(),
                pending: Vec::new(),
                drain_handle: None,
            })),
        }
    }

    /// Register (or replace) the callback for `id`.
    pub fn observe<F>(&self, id: ElementId, callback: F)
    where
        F: FnMut(ResizeEntry) + 'static,
    {
        tracing::trace!(element = id.raw(), "resize observe");
        self.inner
            .borrow_mut()
            .callbacks
            .insert(id, Rc::new(RefCell::new(Box::new(callback))));
    }

    /// Remove the callback and any in-flight notification for `id`.
    pub fn unobserve(&self, id: ElementId) {
        let mut inner = self.inner.borrow_mut();
        inner.callbacks.remove(&id);
        inner.pending.retain(|(pending_id, _)| *pending_id != id);
        tracing::trace!(element = id.raw(), "resize unobserve");
    }

    /// Feed one raw size-change notification from the host.
    ///
    /// Safe to call at any rate; delivery stays once per element per frame.
    pub fn notify(&self, id: ElementId, size: Size) {
        let mut inner = self.inner.borrow_mut();
        match inner
            .pending
            .iter_mut()
            .find(|(pending_id, _)| *pending_id == id)
        {
            Some(slot) => slot.1 = size,
            None => inner.pending.push((id, size)),
        }

        if inner.drain_handle.is_none() {
            let weak = Rc::downgrade(&self.inner);
            let handle = self
                .scheduler
                .schedule(Box::new(move || drain_batch(&weak)));
            inner.drain_handle = Some(handle);
            tracing::trace!(element = id.raw(), "resize drain scheduled");
        }
    }

    /// Cancel any scheduled drain and clear all registrations.
    pub fn disconnect(&self) {
        let handle = {
            let mut inner = self.inner.borrow_mut();
            inner.callbacks.clear();
            inner.pending.clear();
            inner.drain_handle.take()
        };
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
        tracing::debug!("resize multiplexer disconnected");
    }

    /// Number of currently observed elements.
    pub fn observed_len(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }

    /// Number of elements awaiting delivery.
    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// True while a drain is scheduled for the next frame.
    pub fn drain_scheduled(&self) -> bool {
        self.inner.borrow().drain_handle.is_some()
    }
}

fn drain_batch(inner: &Weak<RefCell<MuxInner>>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let batch = {
        let mut mux = inner.borrow_mut();
        mux.drain_handle = None;
        std::mem::take(&mut mux.pending)
    };
    if batch.is_empty() {
        return;
    }

    tracing::debug!(batch = batch.len(), "delivering coalesced resize batch");
    for (id, size) in batch {
        // Clone the callback handle out so the registry is not borrowed
        // while user code runs; callbacks may observe, unobserve, or
        // notify without deadlocking the registry.
        let callback = inner.borrow().callbacks.get(&id).cloned();
        let Some(callback) = callback else {
            continue;
        };
        (&mut *callback.borrow_mut())(ResizeEntry { id, size });
    }
}
