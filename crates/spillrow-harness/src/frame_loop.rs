#![forbid(unsafe_code)]

//! Manually pumped frame scheduler.
//!
//! Scheduled tasks sit in a queue until the test calls [`ManualFrameLoop::pump`],
//! which runs exactly one frame: every task queued before the pump, in order,
//! minus cancelled ones. Tasks scheduled while a frame is running land in the
//! next frame, matching the contract that scheduled work never runs inside
//! the call that scheduled it.

use std::cell::{Cell, RefCell};

use spillrow_engine::{FrameHandle, FrameScheduler};

/// Frames to attempt in [`ManualFrameLoop::settle`] before declaring the
/// system divergent.
const SETTLE_FRAME_LIMIT: usize = 64;

type Task = Box<dyn FnOnce()>;

/// Frame scheduler driven entirely by the test.
#[derive(Default)]
pub struct ManualFrameLoop {
    queue: RefCell<Vec<(FrameHandle, Task)>>,
    cancelled: RefCell<Vec<FrameHandle>>,
    next_handle: Cell<u64>,
    frames: Cell<u64>,
}

impl ManualFrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame. Returns how many tasks actually ran.
    pub fn pump(&self) -> usize {
        let batch = std::mem::take(&mut *self.queue.borrow_mut());
        self.frames.set(self.frames.get() + 1);

        let mut ran = 0;
        for (handle, task) in batch {
            if self.cancelled.borrow().contains(&handle) {
                continue;
            }
            task();
            ran += 1;
        }
        self.cancelled.borrow_mut().clear();
        ran
    }

    /// Pump until no work remains. Returns the number of frames it took.
    ///
    /// # Panics
    ///
    /// Panics after [`SETTLE_FRAME_LIMIT`] frames, which means something is
    /// rescheduling itself forever.
    pub fn settle(&self) -> usize {
        let mut frames = 0;
        while self.pending() > 0 {
            self.pump();
            frames += 1;
            assert!(
                frames <= SETTLE_FRAME_LIMIT,
                "frame loop did not settle within {SETTLE_FRAME_LIMIT} frames"
            );
        }
        frames
    }

    /// Tasks currently queued for the next frame, cancelled ones included.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Frames pumped since construction.
    pub fn frames_pumped(&self) -> u64 {
        self.frames.get()
    }
}

impl FrameScheduler for ManualFrameLoop {
    fn schedule(&self, task: Box<dyn FnOnce()>) -> FrameHandle {
        let handle = FrameHandle::from_raw(self.next_handle.get());
        self.next_handle.set(self.next_handle.get() + 1);
        self.queue.borrow_mut().push((handle, task));
        handle
    }

    fn cancel(&self, handle: FrameHandle) {
        let mut queue = self.queue.borrow_mut();
        if let Some(pos) = queue.iter().position(|(h, _)| *h == handle) {
            queue.remove(pos);
        } else {
            // The frame is mid-pump; veto the task when its turn comes.
            self.cancelled.borrow_mut().push(handle);
        }
    }
}
