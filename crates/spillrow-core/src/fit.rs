#![forbid(unsafe_code)]

//! First-fit-prefix visible count calculation.
//!
//! Given measured item widths and an available width budget, decide how many
//! leading items fit alongside the overflow indicator. This is the only
//! place in the engine where widths are compared against the budget; the
//! controller feeds it cached measurements, the calculator stays pure.
//!
//! # Usage
//!
//! ```
//! use spillrow_core::fit::visible_count;
//!
//! // Four 50-unit items fit in 300 units with an 8-unit gap and a
//! // 30-unit indicator reserved behind them.
//! let widths = [50.0; 10];
//! assert_eq!(visible_count(&widths, 30.0, 8.0, true, 300.0), 4);
//! ```
//!
//! # Design
//!
//! The algorithm commits to first-fit-prefix semantics: items are considered
//! strictly in order, and the first item that does not fit ends the scan.
//! A later, narrower item is never admitted ahead of an earlier one, because
//! reordering would change the row's meaning. Room for the indicator is
//! reserved only while at least one item remains after the candidate; when
//! the scan consumes every item, nothing is hidden and no reserve is ever
//! charged, so a row that fully fits never shows an indicator.
//!
//! # Invariants
//!
//! - The result is always in `[0, item_widths.len()]`.
//! - A non-positive available width yields 0 without inspecting widths.
//! - Pure function of its arguments; no hidden state, no side effects.

/// How many leading items fit in `available_width`.
///
/// `item_widths` are intrinsic widths in row order. `indicator_width` is the
/// measured width of the overflow indicator (pass 0.0 while unmeasured).
/// `gap` is the spacing between adjacent row entries and must already be
/// validated non-negative at the public boundary. `has_indicator` tells the
/// calculator whether an indicator renderer exists at all; without one no
/// reserve is charged and items simply fill the budget in order.
pub fn visible_count(
    item_widths: &[f64],
    indicator_width: f64,
    gap: f64,
    has_indicator: bool,
    available_width: f64,
) -> usize {
    if available_width <= 0.0 {
        return 0;
    }

    let total = item_widths.len();
    let mut running = 0.0;
    let mut count = 0;

    for (i, &width) in item_widths.iter().enumerate() {
        let lead_gap = if i > 0 { gap } else { 0.0 };
        let tentative = running + lead_gap + width;

        // The indicator follows at least one visible item, so its reserve
        // includes a gap. It is charged only while items would remain
        // hidden behind this candidate.
        let remaining = total - (i + 1);
        let reserve = if has_indicator && remaining > 0 {
            gap + indicator_width
        } else {
            0.0
        };

        if tentative + reserve <= available_width {
            running = tentative;
            count = i + 1;
        } else {
            break;
        }
    }

    count
}
