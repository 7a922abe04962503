// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windrow Anchor: where a focused element sits inside a scrolling viewport.
//!
//! Focus-driven scrolling ("focus follow") needs to answer two questions
//! about a newly focused element: is it already adequately visible, and if
//! not, what scroll offset brings it to the viewport's leading edge or
//! center? [`locate`] answers both as a pure function of two rectangles and
//! a scroll [`Axis`], so the decision can be unit tested without a rendering
//! environment.
//!
//! Both rectangles live in content coordinates: the viewport rectangle's
//! leading edge along the axis is the current scroll position, and the
//! element rectangle is its laid-out bounds within the content. The result
//! is an [`AnchorResult`] carrying the start-aligned offset, the centering
//! offset, and a visibility flag used by the skip-when-visible policy.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use windrow_anchor::{Axis, locate};
//!
//! // A 350 px viewport at scroll position 0, and an element at 500..600.
//! let viewport = Rect::new(0.0, 0.0, 350.0, 120.0);
//! let element = Rect::new(500.0, 0.0, 600.0, 120.0);
//!
//! let anchor = locate(viewport, element, Axis::Horizontal);
//! assert!(!anchor.visible);
//! assert_eq!(anchor.start, 500.0);
//! // Centering leaves (350 - 100) / 2 = 125 px of margin on each side.
//! assert_eq!(anchor.center, 375.0);
//! ```
//!
//! This crate is `no_std`.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for `kurbo`'s
//!   floating-point math.

#![no_std]

use kurbo::Rect;

/// The scrolling axis an anchor query runs along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Measure along the x axis.
    Horizontal,
    /// Measure along the y axis.
    Vertical,
}

impl Axis {
    /// The `(start, end)` span of `rect` along this axis.
    #[must_use]
    pub const fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }
}

/// An element's position relative to a viewport, along one scroll axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorResult {
    /// Scroll offset that aligns the element with the viewport's leading edge.
    pub start: f64,
    /// Scroll offset that centers the element within the viewport.
    pub center: f64,
    /// Whether the element already lies entirely inside the viewport.
    pub visible: bool,
}

/// Locates `element` relative to `viewport` along `axis`.
///
/// Both rectangles are in content coordinates; the viewport's leading edge
/// is the current scroll position. The centering offset is
/// `start - (viewport_size - element_size) / 2` and may land outside the
/// scrollable range for elements near either end of content — host scroll
/// containers clamp such requests, so no clamping happens here.
///
/// The computation reads nothing but its arguments, so repeated calls with
/// unchanged inputs return identical results.
#[must_use]
pub fn locate(viewport: Rect, element: Rect, axis: Axis) -> AnchorResult {
    let (view_start, view_end) = axis.span(viewport);
    let (elem_start, elem_end) = axis.span(element);

    let viewport_size = view_end - view_start;
    let element_size = elem_end - elem_start;

    AnchorResult {
        start: elem_start,
        center: elem_start - (viewport_size - element_size) / 2.0,
        visible: elem_start >= view_start && elem_end <= view_end,
    }
}
