// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-window computation and the scroll-window paging algorithm.

use crate::{Direction, LayoutMode, ViewportState};

/// The range of items at least partially inside a viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// Index of the first partially visible item.
    pub first: usize,
    /// Index of the last at-least-partially visible item.
    ///
    /// May point one past the actual content when the viewport extends
    /// beyond the last item; index access must be guarded by the caller.
    pub last: usize,
}

/// `f64::floor` for `no_std` builds, collapsed to an index-sized integer.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Inputs are pixel offsets divided by item sizes; they fit an isize by construction"
)]
fn floor_to_isize(value: f64) -> isize {
    let truncated = value as isize;
    if (truncated as f64) > value {
        truncated - 1
    } else {
        truncated
    }
}

/// Computes which item indices fall at least partially inside the viewport.
///
/// - `unit_size`: the paging unit, the on-screen size of one item (`> 0`).
/// - `logical_position`: the current scroll offset in the logical (RTL-sign
///   normalized) convention.
/// - `viewport_size`: the visible extent of the viewport.
///
/// Flooring `logical_position / unit_size` alone yields the first *fully*
/// visible item; the window backs up one index so the preceding, possibly
/// cut-off item counts as the true first visible item and a backward page
/// never skips it. `last` rounds the far edge down to the last index that
/// still overlaps the viewport, which can overflow the real content.
#[must_use]
pub fn visible_window(unit_size: f64, logical_position: f64, viewport_size: f64) -> VisibleWindow {
    debug_assert!(
        unit_size > 0.0,
        "visible_window requires a positive unit size; got {unit_size:?}"
    );

    let first = (floor_to_isize(logical_position / unit_size) - 1).max(0);
    let last = floor_to_isize((logical_position + viewport_size) / unit_size).max(0);

    // Both indices are clamped non-negative above.
    VisibleWindow {
        first: first as usize,
        last: last as usize,
    }
}

/// Computes the scroll offset that pages the viewport by one window of items.
///
/// - `items`: the on-screen pixel size of each child, in layout order. Items
///   are assumed uniformly sized for windowing purposes; the first item's
///   size is the paging unit.
/// - `viewport`: the current scroll geometry, with `scroll_position` in the
///   host's physical sign convention.
/// - `direction`: [`Direction::Forward`] anchors the item at the trailing
///   edge to become the new leading item; [`Direction::Backward`] anchors
///   the first visible item to the trailing edge, stepping back one page.
/// - `layout`: the sign convention; the computation runs on logical offsets
///   and the result is converted back before returning.
///
/// Returns `None` — no scroll should be issued — for an empty `items` slice
/// or a non-positive paging unit. The returned offset is *not* clamped to
/// the scrollable range; host scroll containers clamp silently, and near the
/// end of content the forward target intentionally overshoots rather than
/// special-casing the final page.
#[must_use]
pub fn compute_next_scroll_position(
    items: &[f64],
    viewport: &ViewportState,
    direction: Direction,
    layout: LayoutMode,
) -> Option<f64> {
    let unit = items.first().copied()?;
    if unit <= 0.0 {
        return None;
    }
    debug_assert!(
        items.iter().all(|size| size.is_finite() && *size > 0.0),
        "item sizes must be positive and finite"
    );

    let logical = layout.to_logical(viewport.scroll_position);
    let window = visible_window(unit, logical, viewport.scroll_size);
    let last_valid = items.len() - 1;

    let logical_target = match direction {
        Direction::Forward => {
            // Anchor on the item at the trailing edge. When `window.last`
            // runs past the content, the previous item supplies the anchor
            // size while the computed index stays the multiplier.
            let anchor = items
                .get(window.last)
                .or_else(|| items.get(window.last.saturating_sub(1)))
                .copied()
                .unwrap_or(items[last_valid]);
            window.last as f64 * anchor
        }
        Direction::Backward => {
            let anchor = items[window.first.min(last_valid)];
            // Whole items per viewport, minus one to account for the anchor
            // item itself. The combined size of those items is the distance
            // that puts the anchor at the trailing edge of the viewport.
            let items_per_page = floor_to_isize(viewport.scroll_size / anchor) - 1;
            window.first as f64 * anchor - items_per_page as f64 * anchor
        }
    };

    Some(layout.to_physical(logical_target))
}

#[cfg(test)]
mod tests {
    use super::{compute_next_scroll_position, visible_window};
    use crate::{Direction, LayoutMode, ViewportState};

    const ITEMS: [f64; 10] = [100.0; 10];

    fn viewport(scroll_position: f64) -> ViewportState {
        ViewportState::new(scroll_position, 350.0, 1000.0)
    }

    #[test]
    fn window_indices_from_start() {
        let window = visible_window(100.0, 0.0, 350.0);
        assert_eq!(window.first, 0);
        assert_eq!(window.last, 3);
    }

    #[test]
    fn window_backs_up_to_partially_cut_item() {
        let window = visible_window(100.0, 300.0, 350.0);
        assert_eq!(window.first, 2);
        assert_eq!(window.last, 6);
    }

    #[test]
    fn window_tolerates_transient_negative_position() {
        // Animation overshoot past the start must not underflow the indices.
        let window = visible_window(100.0, -50.0, 350.0);
        assert_eq!(window.first, 0);
        assert_eq!(window.last, 3);
    }

    #[test]
    fn forward_page_from_start() {
        let next =
            compute_next_scroll_position(&ITEMS, &viewport(0.0), Direction::Forward, LayoutMode::Ltr);
        assert_eq!(next, Some(300.0));
    }

    #[test]
    fn backward_page_returns_to_start() {
        let next = compute_next_scroll_position(
            &ITEMS,
            &viewport(300.0),
            Direction::Backward,
            LayoutMode::Ltr,
        );
        assert_eq!(next, Some(0.0));
    }

    #[test]
    fn rtl_forward_page_is_negated() {
        let next =
            compute_next_scroll_position(&ITEMS, &viewport(0.0), Direction::Forward, LayoutMode::Rtl);
        assert_eq!(next, Some(-300.0));
    }

    #[test]
    fn rtl_matches_sign_flipped_ltr() {
        for physical in [0.0, -100.0, -250.0, -400.0] {
            let rtl = compute_next_scroll_position(
                &ITEMS,
                &viewport(physical),
                Direction::Forward,
                LayoutMode::Rtl,
            );
            let ltr = compute_next_scroll_position(
                &ITEMS,
                &viewport(-physical),
                Direction::Forward,
                LayoutMode::Ltr,
            );
            assert_eq!(rtl, ltr.map(|offset| -offset));
        }
    }

    #[test]
    fn forward_then_backward_round_trips_on_exact_pages() {
        // Viewport of exactly three whole items.
        let viewport = |pos: f64| ViewportState::new(pos, 300.0, 1000.0);

        for start in [0.0, 300.0] {
            let forward = compute_next_scroll_position(
                &ITEMS,
                &viewport(start),
                Direction::Forward,
                LayoutMode::Ltr,
            )
            .unwrap();
            let back = compute_next_scroll_position(
                &ITEMS,
                &viewport(forward),
                Direction::Backward,
                LayoutMode::Ltr,
            )
            .unwrap();
            assert_eq!(back, start);
        }
    }

    #[test]
    fn forward_at_last_page_stays_in_bounds() {
        // `window.last` computes to 10, one past the content; the anchor
        // falls back to the final item and no index panics.
        let next = compute_next_scroll_position(
            &ITEMS,
            &viewport(650.0),
            Direction::Forward,
            LayoutMode::Ltr,
        );
        assert_eq!(next, Some(1000.0));
    }

    #[test]
    fn backward_with_viewport_smaller_than_item() {
        // A viewport narrower than one item: items_per_page computes to -1,
        // so the target lands one unit past the anchor's start.
        let narrow = ViewportState::new(500.0, 80.0, 1000.0);
        let next =
            compute_next_scroll_position(&ITEMS, &narrow, Direction::Backward, LayoutMode::Ltr);
        assert_eq!(next, Some(500.0));
    }

    #[test]
    fn empty_items_are_a_noop() {
        let next =
            compute_next_scroll_position(&[], &viewport(0.0), Direction::Forward, LayoutMode::Ltr);
        assert_eq!(next, None);
    }
}
