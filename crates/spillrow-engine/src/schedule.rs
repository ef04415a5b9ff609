#![forbid(unsafe_code)]

//! Deferred-task scheduling seam.
//!
//! Every asynchronous step in the engine (initial measurement, coalesced
//! resize delivery, content-change recomputation) is expressed as "run this
//! once, after the current layout settles, unless cancelled first". Hosts
//! map that onto whatever their event loop offers: an animation-frame
//! callback in a browser adapter, an idle tick in a game loop, an explicit
//! pump in tests.
//!
//! # Contract
//!
//! - A scheduled task runs exactly once, on the scheduling thread, at the
//!   next frame boundary. It must never run synchronously inside
//!   [`FrameScheduler::schedule`]; callers store the returned handle after
//!   the call and rely on the task not having fired yet.
//! - [`FrameScheduler::cancel`] withdraws a task that has not run.
//!   Cancelling a handle that already ran, or was never issued, is a no-op.
//! - Tasks scheduled while a frame is being delivered belong to the next
//!   frame, not the current one.
//!
//! # Design
//!
//! The engine is single-threaded by construction, so the trait deliberately
//! avoids `Send` bounds; schedulers and tasks may capture `Rc` state.

/// Cancellation token for a scheduled task.
///
/// Handles are opaque and scheduler-scoped; implementations mint them from
/// their own id space and must not reuse a value while its task is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wrap a scheduler-minted raw id.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Runs closures once at the next frame boundary.
pub trait FrameScheduler {
    /// Queue `task` for the next frame and return its cancellation handle.
    fn schedule(&self, task: Box<dyn FnOnce()>) -> FrameHandle;

    /// Withdraw a pending task. No-op for unknown or already-run handles.
    fn cancel(&self, handle: FrameHandle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Minimal conforming scheduler: queues tasks, runs them on `tick`.
    struct TickScheduler {
        queue: RefCell<Vec<(FrameHandle, Box<dyn FnOnce()>)>>,
        next: std::cell::Cell<u64>,
    }

    impl TickScheduler {
        fn new() -> Self {
            Self {
                queue: RefCell::new(Vec::new()),
                next: std::cell::Cell::new(0),
            }
        }

        fn tick(&self) {
            let due = std::mem::take(&mut *self.queue.borrow_mut());
            for (_, task) in due {
                task();
            }
        }
    }

    impl FrameScheduler for TickScheduler {
        fn schedule(&self, task: Box<dyn FnOnce()>) -> FrameHandle {
            let id = self.next.get() + 1;
            self.next.set(id);
            let handle = FrameHandle::from_raw(id);
            self.queue.borrow_mut().push((handle, task));
            handle
        }

        fn cancel(&self, handle: FrameHandle) {
            self.queue.borrow_mut().retain(|(h, _)| *h != handle);
        }
    }

    #[test]
    fn handle_round_trips_raw_value() {
        assert_eq!(FrameHandle::from_raw(99).raw(), 99);
    }

    #[test]
    fn handles_compare_by_value() {
        assert_eq!(FrameHandle::from_raw(1), FrameHandle::from_raw(1));
        assert_ne!(FrameHandle::from_raw(1), FrameHandle::from_raw(2));
    }

    #[test]
    fn scheduled_task_defers_until_tick() {
        let sched = TickScheduler::new();
        let ran = Rc::new(RefCell::new(false));

        let flag = Rc::clone(&ran);
        sched.schedule(Box::new(move || *flag.borrow_mut() = true));
        assert!(!*ran.borrow());

        sched.tick();
        assert!(*ran.borrow());
    }

    #[test]
    fn cancelled_task_never_runs() {
        let sched = TickScheduler::new();
        let ran = Rc::new(RefCell::new(false));

        let flag = Rc::clone(&ran);
        let handle = sched.schedule(Box::new(move || *flag.borrow_mut() = true));
        sched.cancel(handle);

        sched.tick();
        assert!(!*ran.borrow());
    }

    #[test]
    fn cancel_of_finished_handle_is_noop() {
        let sched = TickScheduler::new();
        let handle = sched.schedule(Box::new(|| {}));
        sched.tick();
        sched.cancel(handle);
    }

    #[test]
    fn usable_as_trait_object() {
        let sched: Rc<dyn FrameScheduler> = Rc::new(TickScheduler::new());
        let _ = sched.schedule(Box::new(|| {}));
    }
}
