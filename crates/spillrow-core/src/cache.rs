#![forbid(unsafe_code)]

//! Measurement cache with epoch-scoped invalidation.
//!
//! Item widths are measured once per epoch, where an epoch is keyed by the
//! item count. Container resizes between content changes reuse the cached
//! widths instead of re-reading the scaffold, on the theory that intrinsic
//! item sizes do not change independently of content. Callers whose item
//! content mutates without changing the count can opt into invalidation by
//! feeding a content fingerprint (see [`MeasureCache::sync_fingerprint`]);
//! without one, same-count mutations keep stale widths until the count
//! changes, which mirrors the count-only contract this engine inherits.
//!
//! # Invariants
//!
//! - A populated width set always has exactly `epoch_len` entries.
//! - The indicator width is `None` until a read succeeds; a measured width
//!   of `0.0` is a legitimate cached value and is never re-measured.
//! - `invalidate` clears both the width set and the indicator width.

/// Cached measurements for one overflow row.
#[derive(Debug, Clone, Default)]
pub struct MeasureCache {
    item_widths: Vec<f64>,
    indicator_width: Option<f64>,
    epoch_len: usize,
    fingerprint: Option<u64>,
}

impl MeasureCache {
    /// Empty cache at epoch length 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no width set is cached and a scaffold read is required.
    #[inline]
    pub fn needs_measurement(&self) -> bool {
        self.item_widths.is_empty()
    }

    /// True when the indicator has never been measured this epoch.
    #[inline]
    pub fn indicator_unset(&self) -> bool {
        self.indicator_width.is_none()
    }

    /// Drop all cached measurements.
    pub fn invalidate(&mut self) {
        crate::trace!(
            cached = self.item_widths.len(),
            epoch_len = self.epoch_len,
            "measure cache invalidated"
        );
        self.item_widths.clear();
        self.indicator_width = None;
    }

    /// Adopt `item_count` as the current epoch.
    ///
    /// Returns true when the count differed and the cache was invalidated.
    /// Call this before every measurement pass so the width set can never
    /// outlive the item count it was taken for.
    pub fn sync_epoch(&mut self, item_count: usize) -> bool {
        if item_count == self.epoch_len {
            return false;
        }
        self.invalidate();
        self.epoch_len = item_count;
        true
    }

    /// Record the caller's content fingerprint for this pass.
    ///
    /// Invalidates only when two consecutive fingerprints are both present
    /// and differ. Starting or stopping fingerprinting merely records the
    /// new value; there is nothing meaningful to compare against.
    pub fn sync_fingerprint(&mut self, fingerprint: Option<u64>) -> bool {
        let changed = matches!(
            (self.fingerprint, fingerprint),
            (Some(old), Some(new)) if old != new
        );
        self.fingerprint = fingerprint;
        if changed {
            self.invalidate();
        }
        changed
    }

    /// Store a complete width set for the current epoch.
    pub fn store_widths(&mut self, widths: Vec<f64>) {
        debug_assert_eq!(
            widths.len(),
            self.epoch_len,
            "width set must cover the current epoch exactly"
        );
        self.item_widths = widths;
    }

    /// Store the measured indicator width. Zero is a valid measurement.
    pub fn store_indicator_width(&mut self, width: f64) {
        self.indicator_width = Some(width);
    }

    /// Cached widths in row order; empty until measured.
    #[inline]
    pub fn item_widths(&self) -> &[f64] {
        &self.item_widths
    }

    /// Cached indicator width, if measured.
    #[inline]
    pub fn indicator_width(&self) -> Option<f64> {
        self.indicator_width
    }

    /// Item count of the current epoch.
    #[inline]
    pub fn epoch_len(&self) -> usize {
        self.epoch_len
    }
}
