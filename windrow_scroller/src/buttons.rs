// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging-button state: two-phase enablement and locale-aware
//! enabled/disabled resolution.

use windrow_paging::{LayoutMode, ViewportState};

/// Minimum content overflow, in pixels, before paging buttons are shown.
///
/// Rows that overflow by only a sliver are not worth a whole page step.
pub const OVERFLOW_SHOW_THRESHOLD: f64 = 20.0;

/// Enabled state of the two paging buttons.
///
/// Resolved against the logical scroll position so the backward button is
/// the "toward start" button in both LTR and RTL layouts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// The toward-start button accepts clicks.
    pub backward_enabled: bool,
    /// The toward-end button accepts clicks.
    pub forward_enabled: bool,
}

/// Computes button enablement from viewport geometry.
#[must_use]
pub fn button_state(viewport: &ViewportState, layout: LayoutMode) -> ButtonState {
    let locale_pos = layout.to_logical(viewport.scroll_position);
    ButtonState {
        backward_enabled: locale_pos > 0.0,
        forward_enabled: !(viewport.scroll_extent > 0.0
            && locale_pos + viewport.scroll_size >= viewport.scroll_extent),
    }
}

/// Returns `true` when the content overflows enough for buttons to show.
#[must_use]
pub fn should_show(viewport: &ViewportState) -> bool {
    viewport.scroll_extent > viewport.scroll_size + OVERFLOW_SHOW_THRESHOLD
}

/// The paging-button subcomponent of a scroller.
///
/// Buttons are constructed hidden and become enabled in a second phase, once
/// the owning scroller is attached and the host capability is known. Queries
/// against a still-hidden subcomponent all answer "not shown".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PagingButtons {
    enabled: bool,
}

impl PagingButtons {
    /// Creates the subcomponent in its hidden phase.
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: false }
    }

    /// Phase two: makes the buttons available. Idempotent.
    pub const fn enable(&mut self) {
        self.enabled = true;
    }

    /// Returns the buttons to the hidden phase.
    pub const fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether phase-two enablement has happened.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the buttons should currently be shown for `viewport`.
    #[must_use]
    pub fn is_shown(&self, viewport: &ViewportState) -> bool {
        self.enabled && should_show(viewport)
    }
}

impl Default for PagingButtons {
    fn default() -> Self {
        Self::new()
    }
}
