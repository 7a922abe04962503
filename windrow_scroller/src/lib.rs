// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windrow Scroller: the host-facing controller for scrollable media rows.
//!
//! This crate wraps the pure math of [`windrow_paging`] and
//! [`windrow_anchor`] in the interaction and presentation policy a host UI
//! needs to run a scrollable row of media items:
//!
//! - [`ScrollerConfig`] / [`HostCaps`]: typed configuration with documented
//!   defaults, validated once at construction.
//! - [`StyleClasses`]: the scrollbar/smooth-scroll presentation classes the
//!   host applies, resolved from config and capabilities.
//! - [`PagingButtons`] / [`ButtonState`]: the two-phase paging-button
//!   subcomponent and its locale-aware enabled state.
//! - [`Scroller`]: the controller itself — paging on button clicks,
//!   focus-follow recentering, skip-when-visible policy, and the imperative
//!   scroll surface.
//! - [`ScrollPrimitive`] / [`DirectionSource`]: the seams to the host
//!   platform. The controller performs no I/O; every scroll leaves through
//!   a host-supplied primitive, and the LTR/RTL convention is read from an
//!   explicit source rather than ambient state.
//!
//! The controller is deliberately thin over its inputs: viewport geometry
//! arrives through [`Scroller::on_metrics`] whenever the host observes a
//! scroll or resize, and item measurements are taken fresh per interaction
//! (see [`ItemRow`]). All computation is synchronous on the caller's
//! thread; the single side effect per call is at most one scroll request.
//!
//! ## Example
//!
//! Paging a desktop row forward by one window of items:
//!
//! ```rust
//! use windrow_paging::{Direction, LayoutMode, ViewportState};
//! use windrow_scroller::{HostCaps, ScrollPrimitive, Scroller, ScrollerConfig};
//!
//! struct Host(Option<f64>);
//! impl ScrollPrimitive for Host {
//!     fn set_position(&mut self, offset: f64) {
//!         self.0 = Some(offset);
//!     }
//!     fn animate_to(&mut self, _offset: f64) -> bool {
//!         false // no animation support; the controller falls back
//!     }
//! }
//!
//! let mut scroller = Scroller::new(
//!     ScrollerConfig::default(),
//!     HostCaps { desktop: true, tv: false },
//! );
//! scroller.attach();
//! scroller.on_metrics(ViewportState::new(0.0, 350.0, 1000.0));
//!
//! let mut host = Host(None);
//! let items = [100.0; 10];
//! scroller.page(&items, Direction::Forward, &LayoutMode::Ltr, &mut host);
//! assert_eq!(host.0, Some(300.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math in dependencies.

#![no_std]

extern crate alloc;

mod buttons;
mod config;
mod host;
mod row;
mod scroller;
mod style;

pub use buttons::{ButtonState, OVERFLOW_SHOW_THRESHOLD, PagingButtons, button_state, should_show};
pub use config::{HostCaps, ScrollerConfig};
pub use host::{DirectionSource, ScrollPrimitive};
pub use row::ItemRow;
pub use scroller::{Align, Scroller};
pub use style::StyleClasses;
