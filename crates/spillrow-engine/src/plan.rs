#![forbid(unsafe_code)]

//! Declarative render output.
//!
//! The controller never draws. After every pass it exposes a [`RenderPlan`]
//! describing what the row should look like, and the host redraws from that
//! plain data. Plans derive `PartialEq`, so hosts that want to skip
//! redundant redraws can simply compare against the previous plan.
//!
//! # Host contract
//!
//! The measurement scaffold described by [`RenderPlan::item_scaffold`] and
//! [`RenderPlan::indicator_scaffold`] must be rendered for measurement yet
//! never be perceivable. Concretely the host must lay it out:
//!
//! - removed from normal flow (absolutely positioned), visibility hidden,
//!   zero height with clipped overflow, intrinsic (max-content) width so
//!   the row never wraps;
//! - inert: no pointer interaction, excluded from the accessibility tree
//!   and from focus traversal;
//! - items in original order in a single row using [`RenderPlan::gap`],
//!   each inside a slot that must not shrink, so slot widths are the
//!   items' intrinsic widths under the same spacing as the visible row.
//!
//! The visible row itself shows `visible` leading items, then the overflow
//! indicator when `overflow` is present.

use std::ops::Range;

use spillrow_core::{ElementId, ItemKey};

/// Arguments for the caller's indicator renderer: the affected items and
/// their original positions, in row order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndicatorPayload {
    /// Item identities.
    pub items: Vec<ItemKey>,
    /// Each item's ordinal in the full sequence.
    pub ordinals: Vec<usize>,
}

impl IndicatorPayload {
    /// Representative payload used to size the indicator: the first item
    /// when one exists, otherwise empty.
    pub fn sample(keys: &[ItemKey]) -> Self {
        match keys.first() {
            Some(first) => Self {
                items: vec![*first],
                ordinals: vec![0],
            },
            None => Self::default(),
        }
    }

    /// Payload for the hidden suffix starting at `start`.
    pub fn hidden_from(keys: &[ItemKey], start: usize) -> Self {
        let start = start.min(keys.len());
        Self {
            items: keys[start..].to_vec(),
            ordinals: (start..keys.len()).collect(),
        }
    }

    /// Number of items in the payload.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the payload carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Hidden measurement render of the full item set.
///
/// `slots` are the host elements wrapping each item, parallel to `items`;
/// the controller measures those slots, so the host must attach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    /// All items in original order.
    pub items: Vec<ItemKey>,
    /// Measurement slot element per item.
    pub slots: Vec<ElementId>,
}

/// Everything the host needs to draw the row right now.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Element tag for the root container.
    pub container_tag: String,
    /// Spacing between adjacent row entries, visible and scaffold alike.
    pub gap: f64,
    /// Leading items to show, as `0..visible_count` clamped to the item
    /// count.
    pub visible: Range<usize>,
    /// Indicator render. Present exactly when at least one item is hidden
    /// and an indicator renderer is configured.
    pub overflow: Option<IndicatorPayload>,
    /// Hidden all-items render, present until item widths are cached.
    pub item_scaffold: Option<ScaffoldPlan>,
    /// Hidden one-item indicator render, present until the indicator
    /// width is cached (and only when an indicator renderer exists).
    pub indicator_scaffold: Option<IndicatorPayload>,
}

impl RenderPlan {
    /// Number of hidden items.
    pub fn hidden_count(&self) -> usize {
        self.overflow.as_ref().map_or(0, IndicatorPayload::len)
    }

    /// True when the host must keep any measurement scaffold mounted.
    pub fn needs_scaffold(&self) -> bool {
        self.item_scaffold.is_some() || self.indicator_scaffold.is_some()
    }
}
