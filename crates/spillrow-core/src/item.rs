#![forbid(unsafe_code)]

//! Identity types for measured elements and row items.
//!
//! The engine never holds caller content. Items and host elements are
//! referred to exclusively through the opaque handles defined here, so the
//! same controller drives a DOM adapter, a canvas scene graph, or the
//! headless test host without caring what an "element" actually is.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle for a measurable host element.
///
/// The controller mints ids for the elements it owns (container, per-item
/// measurement slots, indicator sizer) via [`ElementId::next`]. Hosts that
/// already have a stable id space can wrap their own values with
/// [`ElementId::from_raw`]; mixing host-minted and engine-minted ids in one
/// process is the host's responsibility to keep collision-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Mint a fresh process-unique id.
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a host-provided raw id.
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

/// Identity of one item within the row.
///
/// Callers that track their items with stable keys supply `Keyed`; callers
/// that only have a positional sequence get `Ordinal` derived from the
/// item's index. Render plans carry these keys back to the host so it can
/// reconcile visible, hidden, and scaffold renders of the same item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// Caller-supplied stable key.
    Keyed(u64),
    /// Positional fallback for unkeyed items.
    Ordinal(usize),
}

impl ItemKey {
    /// Key for the item at `index`: the explicit key when the caller has
    /// one, otherwise the ordinal position.
    #[inline]
    pub fn for_position(explicit: Option<u64>, index: usize) -> Self {
        match explicit {
            Some(key) => Self::Keyed(key),
            None => Self::Ordinal(index),
        }
    }

    /// True when this key is a positional fallback.
    #[inline]
    pub fn is_ordinal(&self) -> bool {
        matches!(self, Self::Ordinal(_))
    }
}
