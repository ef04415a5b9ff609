#![forbid(unsafe_code)]

//! Overflow row controller.
//!
//! Owns the measurement cache and the visible count for one row, and drives
//! the measure-then-fit cycle: hidden measurement pass, fit calculation,
//! plan update, recomputation on resize or content change.
//!
//! # Usage
//!
//! ```ignore
//! let row = OverflowRow::new(
//!     OverflowConfig::default().with_indicator(true),
//!     host.clone(),
//!     scheduler.clone(),
//!     multiplexer.clone(),
//! )?;
//! row.set_item_count(10);
//! row.on_update(|plan| redraw(plan));
//! row.mount();
//! // Host pumps its frame loop; the first pass measures the scaffold,
//! // fits, and the hook receives a settled plan.
//! ```
//!
//! # Design
//!
//! The controller is a state machine over plain data:
//!
//! ```text
//! Uninitialized -> AwaitingMeasurement -> Measured(count)
//!       ^  mount()          next frame        |   ^
//!       +--------------- unmount() -----------+   +-- resize / content
//! ```
//!
//! Mounting never measures synchronously; the pass runs on the next frame
//! so the hidden scaffold has been laid out first. A pass is one bounded
//! unit of work with a strict read-then-write discipline: the container
//! width, every scaffold slot, and the indicator sizer are read before any
//! cache write or phase transition is committed. Resize notifications
//! (already coalesced to once per element per frame by the multiplexer)
//! re-run the pass against cached widths; only a change in item count or
//! an explicit content fingerprint change invalidates the cache.
//!
//! # Invariants
//!
//! - At most one scheduled pass is in flight per row; re-triggering before
//!   the frame arrives coalesces into it.
//! - A re-entrancy flag makes nested pass attempts (a hook or a host read
//!   cycling back into the controller) drop instead of recurse; it is set
//!   and cleared synchronously within one callback.
//! - The committed count is always recomputed from scratch, never
//!   incremented or decremented in place.
//!
//! # Failure Modes
//!
//! Every unmeasurable situation (no container size, unmeasurable slot,
//! empty item set, non-positive width) degrades to `Measured(0)` rather
//! than failing, and recovers on the next successful pass. Dropping the
//! row without `unmount` leaves only weak references behind: in-flight
//! frame tasks and resize callbacks upgrade to nothing and become no-ops.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use spillrow_core::{
    ConfigError, ElementId, ItemKey, MeasureCache, OverflowConfig, visible_count,
};

use crate::host::MeasureHost;
use crate::multiplexer::ResizeMultiplexer;
use crate::plan::{IndicatorPayload, RenderPlan, ScaffoldPlan};
use crate::schedule::{FrameHandle, FrameScheduler};

/// Lifecycle state of one overflow row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed or unmounted; nothing scheduled.
    Uninitialized,
    /// Mounted, first measurement pass not yet committed.
    AwaitingMeasurement,
    /// A pass committed this visible count.
    Measured(usize),
}

type UpdateHook = Rc<dyn Fn(&RenderPlan)>;

struct RowInner {
    config: OverflowConfig,
    keys: Vec<ItemKey>,
    cache: MeasureCache,
    phase: Phase,
    container_id: ElementId,
    sizer_id: ElementId,
    slot_ids: Vec<ElementId>,
    pending_pass: Option<FrameHandle>,
    resizing: bool,
    mounted: bool,
    revision: u64,
    on_update: Option<UpdateHook>,
    host: Rc<dyn MeasureHost>,
    scheduler: Rc<dyn FrameScheduler>,
    multiplexer: ResizeMultiplexer,
}

/// Controller for one overflow row. Cheaply clonable handle.
#[derive(Clone)]
pub struct OverflowRow {
    inner: Rc<RefCell<RowInner>>,
}

impl std::fmt::Debug for OverflowRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverflowRow").finish_non_exhaustive()
    }
}

impl OverflowRow {
    /// Validate `config` and build an idle controller.
    ///
    /// Fails fast on an invalid configuration, before any element exists
    /// or any measurement is attempted.
    pub fn new(
        config: OverflowConfig,
        host: Rc<dyn MeasureHost>,
        scheduler: Rc<dyn FrameScheduler>,
        multiplexer: ResizeMultiplexer,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inner: Rc::new(RefCell::new(RowInner {
                config,
                keys: Vec::new(),
                cache: MeasureCache::new(),
                phase: Phase::Uninitialized,
                container_id: ElementId::next(),
                sizer_id: ElementId::next(),
                slot_ids: Vec::new(),
                pending_pass: None,
                resizing: false,
                mounted: false,
                revision: 0,
                on_update: None,
                host,
                scheduler,
                multiplexer,
            })),
        })
    }

    /// Replace the item sequence.
    ///
    /// A changed item count starts a new measurement epoch: cached widths
    /// are dropped, fresh slot elements are minted, and (when mounted) a
    /// full pass is scheduled for the next frame. Replacing items without
    /// changing the count keeps cached widths; pair with
    /// [`OverflowRow::set_content_fingerprint`] when item content can
    /// change size at a stable count.
    pub fn set_items(&self, keys: Vec<ItemKey>) {
        let epoch_changed = {
            let mut row = self.inner.borrow_mut();
            if row.keys == keys {
                return;
            }
            let epoch_changed = row.cache.sync_epoch(keys.len());
            if epoch_changed {
                row.slot_ids = (0..keys.len()).map(|_| ElementId::next()).collect();
            }
            row.keys = keys;
            row.revision += 1;
            tracing::debug!(
                items = row.keys.len(),
                epoch_changed,
                "item sequence updated"
            );
            epoch_changed
        };
        if epoch_changed {
            schedule_pass(&self.inner);
        }
    }

    /// Replace the items with `count` unkeyed (ordinal) entries.
    pub fn set_item_count(&self, count: usize) {
        self.set_items((0..count).map(ItemKey::Ordinal).collect());
    }

    /// Feed a fingerprint of the current item content.
    ///
    /// When two consecutive fingerprints differ, cached widths are
    /// invalidated even though the item count is unchanged, and a fresh
    /// measurement pass is scheduled. Callers that never invoke this keep
    /// the count-only invalidation contract.
    pub fn set_content_fingerprint(&self, fingerprint: u64) {
        let invalidated = self
            .inner
            .borrow_mut()
            .cache
            .sync_fingerprint(Some(fingerprint));
        if invalidated {
            schedule_pass(&self.inner);
        }
    }

    /// Enter the live lifecycle: observe resize notifications for the
    /// container (and indicator sizer, when configured) and schedule the
    /// initial measurement pass for the next frame.
    ///
    /// Mounting an already mounted row is a no-op.
    pub fn mount(&self) {
        {
            let mut row = self.inner.borrow_mut();
            if row.mounted {
                return;
            }
            row.mounted = true;
            row.phase = Phase::AwaitingMeasurement;
            tracing::debug!(container = row.container_id.raw(), "overflow row mounted");
        }
        self.observe_elements();
        schedule_pass(&self.inner);
    }

    /// Leave the live lifecycle: cancel any scheduled pass, stop observing
    /// resize notifications, and drop cached measurements.
    pub fn unmount(&self) {
        let (multiplexer, scheduler, pending, container_id, sizer_id) = {
            let mut row = self.inner.borrow_mut();
            if !row.mounted {
                return;
            }
            row.mounted = false;
            row.phase = Phase::Uninitialized;
            row.cache.invalidate();
            (
                row.multiplexer.clone(),
                row.scheduler.clone(),
                row.pending_pass.take(),
                row.container_id,
                row.sizer_id,
            )
        };
        if let Some(handle) = pending {
            scheduler.cancel(handle);
        }
        multiplexer.unobserve(container_id);
        multiplexer.unobserve(sizer_id);
        tracing::debug!(container = container_id.raw(), "overflow row unmounted");
    }

    /// Register the hook invoked after every committed measurement pass.
    ///
    /// The hook receives the plan produced by that pass. Passes commit on
    /// every trigger, including ones that do not change the outcome; hosts
    /// wanting minimal redraws can compare plans for equality.
    pub fn on_update<F>(&self, hook: F)
    where
        F: Fn(&RenderPlan) + 'static,
    {
        self.inner.borrow_mut().on_update = Some(Rc::new(hook));
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase
    }

    /// Committed visible count, clamped to the current item count.
    ///
    /// Zero until the first pass commits. The clamp matters transiently
    /// when items shrink between a commit and the follow-up pass.
    pub fn visible_count(&self) -> usize {
        let row = self.inner.borrow();
        match row.phase {
            Phase::Measured(count) => count.min(row.keys.len()),
            _ => 0,
        }
    }

    /// Monotonic change counter: bumps on every committed pass and every
    /// item-sequence update. Equal revisions imply an unchanged plan.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Number of items currently in the row.
    pub fn item_count(&self) -> usize {
        self.inner.borrow().keys.len()
    }

    /// Element the host binds as the row container.
    pub fn container_id(&self) -> ElementId {
        self.inner.borrow().container_id
    }

    /// Element the host binds as the hidden indicator sizer.
    pub fn indicator_sizer_id(&self) -> ElementId {
        self.inner.borrow().sizer_id
    }

    /// Measurement slot elements for the current epoch, in item order.
    pub fn item_slot_ids(&self) -> Vec<ElementId> {
        self.inner.borrow().slot_ids.clone()
    }

    /// True while a measurement pass is scheduled but not yet run.
    pub fn pass_scheduled(&self) -> bool {
        self.inner.borrow().pending_pass.is_some()
    }

    /// True between `mount` and `unmount`.
    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    /// What the host should draw right now.
    pub fn render_plan(&self) -> RenderPlan {
        build_plan(&self.inner.borrow())
    }

    fn observe_elements(&self) {
        let (multiplexer, container_id, sizer_id, has_indicator) = {
            let row = self.inner.borrow();
            (
                row.multiplexer.clone(),
                row.container_id,
                row.sizer_id,
                row.config.has_indicator,
            )
        };

        let weak = Rc::downgrade(&self.inner);
        multiplexer.observe(container_id, move |_entry| {
            if let Some(inner) = weak.upgrade() {
                run_pass(&inner);
            }
        });

        if has_indicator {
            let weak = Rc::downgrade(&self.inner);
            multiplexer.observe(sizer_id, move |_entry| {
                if let Some(inner) = weak.upgrade() {
                    run_pass(&inner);
                }
            });
        }
    }
}

/// Queue a pass for the next frame unless one is already in flight.
fn schedule_pass(inner: &Rc<RefCell<RowInner>>) {
    let mut row = inner.borrow_mut();
    if !row.mounted || row.pending_pass.is_some() {
        return;
    }
    let weak = Rc::downgrade(inner);
    let handle = row.scheduler.schedule(Box::new(move || {
        if let Some(inner) = weak.upgrade() {
            inner.borrow_mut().pending_pass = None;
            run_pass(&inner);
        }
    }));
    row.pending_pass = Some(handle);
    tracing::trace!(handle = handle.raw(), "measurement pass scheduled");
}

/// One guarded measurement pass: measure, fit, commit, announce.
fn run_pass(inner: &Rc<RefCell<RowInner>>) {
    {
        let mut row = inner.borrow_mut();
        if row.resizing {
            tracing::trace!("re-entrant measurement pass dropped");
            return;
        }
        row.resizing = true;
    }
    let committed = execute_pass(inner);
    if committed {
        announce(inner);
    }
    inner.borrow_mut().resizing = false;
}

/// The pass body. Returns whether a phase transition was committed.
fn execute_pass(inner: &Rc<RefCell<RowInner>>) -> bool {
    let (host, container_id, sizer_id, slot_ids, gap, has_indicator, needs_items, indicator_unset) = {
        let row = inner.borrow();
        if !row.mounted {
            return false;
        }
        (
            row.host.clone(),
            row.container_id,
            row.sizer_id,
            row.slot_ids.clone(),
            row.config.gap,
            row.config.has_indicator,
            row.cache.needs_measurement(),
            row.cache.indicator_unset(),
        )
    };

    // Read phase: every host read completes before any state is written.
    let Some(container) = host.measure(container_id) else {
        tracing::debug!(
            container = container_id.raw(),
            "container unmeasurable, degrading to zero visible"
        );
        return commit(inner, 0);
    };
    let available = container.width;
    if available <= 0.0 {
        return commit(inner, 0);
    }

    let mut fresh_widths = None;
    if needs_items {
        if slot_ids.is_empty() {
            return commit(inner, 0);
        }
        let mut widths = Vec::with_capacity(slot_ids.len());
        for slot in &slot_ids {
            match host.measure(*slot) {
                Some(size) => widths.push(size.width),
                None => {
                    tracing::debug!(
                        slot = slot.raw(),
                        "scaffold slot unmeasurable, degrading to zero visible"
                    );
                    return commit(inner, 0);
                }
            }
        }
        fresh_widths = Some(widths);
    }

    // A sizer that cannot be measured yet stays unset: this pass runs with
    // a zero reserve and the next trigger retries the read.
    let fresh_indicator = if has_indicator && indicator_unset {
        host.measure(sizer_id).map(|size| size.width)
    } else {
        None
    };

    // Write phase.
    let count = {
        let mut row = inner.borrow_mut();
        if let Some(widths) = fresh_widths {
            if widths.len() == row.cache.epoch_len() {
                row.cache.store_widths(widths);
            }
            // A mismatch means the epoch moved mid-pass; the stale read is
            // dropped and the already scheduled follow-up pass re-measures.
        }
        if let Some(width) = fresh_indicator {
            row.cache.store_indicator_width(width);
        }
        visible_count(
            row.cache.item_widths(),
            row.cache.indicator_width().unwrap_or(0.0),
            gap,
            has_indicator,
            available,
        )
    };
    commit(inner, count)
}

fn commit(inner: &Rc<RefCell<RowInner>>, count: usize) -> bool {
    let mut row = inner.borrow_mut();
    if !row.mounted {
        return false;
    }
    let from = row.phase;
    row.phase = Phase::Measured(count);
    row.revision += 1;
    tracing::debug!(
        from = ?from,
        count,
        revision = row.revision,
        "measurement pass committed"
    );
    true
}

/// Invoke the update hook, if any, outside all interior borrows.
fn announce(inner: &Rc<RefCell<RowInner>>) {
    let announced = {
        let row = inner.borrow();
        row.on_update.clone().map(|hook| (hook, build_plan(&row)))
    };
    if let Some((hook, plan)) = announced {
        hook(&plan);
    }
}

fn build_plan(row: &RowInner) -> RenderPlan {
    let total = row.keys.len();
    let count = match row.phase {
        Phase::Measured(count) => count.min(total),
        _ => 0,
    };

    let overflow = if row.config.has_indicator && count < total {
        Some(IndicatorPayload::hidden_from(&row.keys, count))
    } else {
        None
    };
    let item_scaffold = if row.cache.needs_measurement() {
        Some(ScaffoldPlan {
            items: row.keys.clone(),
            slots: row.slot_ids.clone(),
        })
    } else {
        None
    };
    let indicator_scaffold = if row.config.has_indicator && row.cache.indicator_unset() {
        Some(IndicatorPayload::sample(&row.keys))
    } else {
        None
    };

    RenderPlan {
        container_tag: row.config.container_tag.clone(),
        gap: row.config.gap,
        visible: 0..count,
        overflow,
        item_scaffold,
        indicator_scaffold,
    }
}
