// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-integration traits: the scroll primitive and the layout-direction
//! source.
//!
//! The controller performs no I/O of its own. Scrolls are issued through a
//! [`ScrollPrimitive`] the host supplies per call, and the LTR/RTL sign
//! convention is read from a [`DirectionSource`] so the windowing math never
//! touches ambient state.

use windrow_paging::LayoutMode;

/// The host's ability to move a scroll viewport.
///
/// Offsets are pixel positions along the scroll axis in the host's physical
/// sign convention. Animated scrolls are fire-and-forget: the controller
/// never waits for completion, and a newly issued request supersedes any
/// in-flight animation through the host's own interruption semantics.
pub trait ScrollPrimitive {
    /// Sets the scroll position immediately.
    fn set_position(&mut self, offset: f64);

    /// Requests an animated scroll to `offset`.
    ///
    /// Returns `false` when the host cannot animate, in which case the
    /// caller falls back to [`ScrollPrimitive::set_position`].
    fn animate_to(&mut self, offset: f64) -> bool;
}

/// Reports the layout direction in effect for a scroller.
pub trait DirectionSource {
    /// The ambient layout mode of the current locale.
    fn layout_mode(&self) -> LayoutMode;

    /// The layout mode of the scroller element itself.
    ///
    /// Element-level styling can override the locale direction; the default
    /// assumes no override.
    fn element_layout_mode(&self) -> LayoutMode {
        self.layout_mode()
    }
}

impl DirectionSource for LayoutMode {
    fn layout_mode(&self) -> LayoutMode {
        *self
    }
}

/// Issues one scroll through the host primitive.
///
/// Instant requests and hosts without animation support take the immediate
/// path, where the offset is rounded to a whole pixel the way direct
/// position writes expect.
pub(crate) fn issue_scroll(host: &mut impl ScrollPrimitive, offset: f64, immediate: bool) {
    if immediate || !host.animate_to(offset) {
        host.set_position(round_offset(offset));
    }
}

/// Rounds half-up without `std` float methods.
fn round_offset(value: f64) -> f64 {
    let shifted = value + 0.5;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Scroll offsets are pixel values well inside i64 range"
    )]
    let truncated = shifted as i64;
    let floored = if (truncated as f64) > shifted {
        truncated - 1
    } else {
        truncated
    };
    floored as f64
}
