// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windrow Paging: scroll-window paging math for media-row viewports.
//!
//! This crate is the pure core of a scroll-window manager: given an ordered
//! sequence of fixed-layout item sizes, a viewport, and a requested paging
//! direction, it computes the scroll offset at which exactly one "page" of
//! items slides into view. It holds no state; the host supplies the current
//! scroll position and viewport geometry on every call, which keeps the
//! whole thing trivially testable without a rendering environment.
//!
//! The core concepts are:
//!
//! - [`ViewportState`]: the scroll position, visible extent, and total
//!   scrollable extent of a viewport along its scroll axis.
//! - [`Direction`]: paging toward the end ([`Direction::Forward`]) or the
//!   start ([`Direction::Backward`]) of content, independent of visual
//!   left/right.
//! - [`LayoutMode`]: the LTR/RTL sign convention. Under RTL every physical
//!   scroll offset is the negation of its logical (direction-agnostic)
//!   value; [`LayoutMode`] is passed explicitly rather than queried from
//!   ambient state.
//! - [`visible_window`]: which item indices are at least partially inside
//!   the viewport.
//! - [`compute_next_scroll_position`]: the paging algorithm itself.
//!
//! ## Minimal example
//!
//! Ten 100 px items in a 350 px viewport, paging forward from the start:
//!
//! ```rust
//! use windrow_paging::{Direction, LayoutMode, ViewportState, compute_next_scroll_position};
//!
//! let items = [100.0; 10];
//! let viewport = ViewportState {
//!     scroll_position: 0.0,
//!     scroll_size: 350.0,
//!     scroll_extent: 1000.0,
//! };
//!
//! // The item currently cut off at the trailing edge (index 3) becomes the
//! // new leading item.
//! let next = compute_next_scroll_position(&items, &viewport, Direction::Forward, LayoutMode::Ltr);
//! assert_eq!(next, Some(300.0));
//! ```
//!
//! The result is deliberately not clamped to the scrollable range; host
//! scroll containers clamp out-of-range requests silently, and doing it here
//! as well would double up the edge handling.
//!
//! This crate is `no_std` and dependency-free.

#![no_std]

mod direction;
mod viewport;
mod window;

pub use direction::{Direction, LayoutMode};
pub use viewport::ViewportState;
pub use window::{VisibleWindow, compute_next_scroll_position, visible_window};
