// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroller configuration and host capability flags.

/// Behavior configuration for a [`Scroller`](crate::Scroller).
///
/// Every field is an explicit boolean with a documented default, resolved
/// once at construction. Toggling behavior after construction means building
/// a new scroller; nothing re-reads configuration mid-flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollerConfig {
    /// Scroll along the horizontal axis. Default `true`; a `false` value
    /// scrolls vertically and disables paging buttons, which only apply to
    /// horizontal rows.
    pub horizontal: bool,
    /// Follow input focus by centering the focused element. Default `false`.
    /// Only takes effect on hosts reporting [`HostCaps::tv`].
    pub center_focus: bool,
    /// Suppress a focus-follow scroll when the focused element is already
    /// fully visible. Default `false`.
    pub skip_focus_when_visible: bool,
    /// Offer paging buttons when the host supports them. Default `true`.
    /// The buttons become active only on hosts reporting
    /// [`HostCaps::desktop`], and only for horizontal scrollers.
    pub scroll_buttons: bool,
    /// Hide the native scrollbar even when buttons are not shown.
    /// Default `false`.
    pub hide_scrollbar: bool,
    /// Allow the host's native smooth scrolling when buttons are not in
    /// play. Default `false`.
    pub allow_native_smooth_scroll: bool,
    /// Redirect dominant vertical mouse-wheel deltas along a horizontal
    /// scroll axis. Default `false`.
    pub mouse_wheel: bool,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            horizontal: true,
            center_focus: false,
            skip_focus_when_visible: false,
            scroll_buttons: true,
            hide_scrollbar: false,
            allow_native_smooth_scroll: false,
            mouse_wheel: false,
        }
    }
}

/// Capability flags reported by the host platform.
///
/// These correspond to the ambient layout profile a host UI shell already
/// tracks: pointer-driven desktop layouts get paging buttons, remote-driven
/// TV layouts get focus-follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct HostCaps {
    /// The host renders a pointer-driven desktop layout.
    pub desktop: bool,
    /// The host renders a remote/keyboard-driven TV layout.
    pub tv: bool,
}
