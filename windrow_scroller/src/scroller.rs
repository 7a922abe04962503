// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroller controller.

use kurbo::Rect;
use windrow_anchor::{Axis, locate};
use windrow_paging::{Direction, ViewportState, compute_next_scroll_position};

use crate::buttons::{ButtonState, PagingButtons, button_state};
use crate::host::{DirectionSource, ScrollPrimitive, issue_scroll};
use crate::style::{StyleClasses, buttons_capability, resolve};
use crate::{HostCaps, ScrollerConfig};

/// Where a move-to request anchors its target within the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// Align the target's leading edge with the viewport's leading edge.
    Start,
    /// Center the target within the viewport.
    Center,
}

/// Controller for one scrollable row of media items.
///
/// This type composes the pure windowing math with the presentation and
/// interaction policy the host needs: resolved style classes, paging-button
/// phase and enablement, focus-follow, and the imperative scroll surface.
/// It owns no platform resources — viewport geometry arrives through
/// [`Scroller::on_metrics`], item measurements arrive per call, and every
/// scroll leaves through a host-supplied [`ScrollPrimitive`].
///
/// Lifecycle is two-phase: construction resolves configuration, and
/// [`Scroller::attach`] flips on the capabilities (paging buttons,
/// focus-follow) that only make sense once the scroller is live in a host
/// tree. [`Scroller::detach`] reverses attach and releases nothing else,
/// so a detached controller can be attached again.
#[derive(Clone, Debug)]
pub struct Scroller {
    config: ScrollerConfig,
    caps: HostCaps,
    classes: StyleClasses,
    metrics: ViewportState,
    buttons: PagingButtons,
    attached: bool,
}

impl Scroller {
    /// Creates a detached scroller from validated configuration.
    ///
    /// Style classes are resolved here, once; the paging-button subcomponent
    /// starts hidden pending [`Scroller::attach`].
    #[must_use]
    pub fn new(config: ScrollerConfig, caps: HostCaps) -> Self {
        Self {
            classes: resolve(&config, &caps),
            config,
            caps,
            metrics: ViewportState::default(),
            buttons: PagingButtons::new(),
            attached: false,
        }
    }

    /// The configuration this scroller was built with.
    #[must_use]
    pub const fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    /// The presentation classes the host should apply.
    #[must_use]
    pub const fn style_classes(&self) -> StyleClasses {
        self.classes
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        if self.config.horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Whether paging buttons apply for this config and host.
    #[must_use]
    pub const fn buttons_capability(&self) -> bool {
        buttons_capability(&self.config, &self.caps)
    }

    /// Phase two of initialization: marks the scroller live and enables the
    /// paging buttons when the capability holds. Idempotent.
    pub fn attach(&mut self) {
        self.attached = true;
        if self.buttons_capability() {
            self.buttons.enable();
        }
    }

    /// Detaches the scroller, returning the buttons to their hidden phase
    /// and disabling focus-follow until the next [`Scroller::attach`].
    pub fn detach(&mut self) {
        self.attached = false;
        self.buttons.disable();
    }

    /// Whether [`Scroller::attach`] has run.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Records fresh viewport geometry from a scroll or resize notification.
    ///
    /// A zero-size viewport is a valid transient state (not yet measured);
    /// queries against it simply resolve to position 0 and no shown buttons
    /// until the next notification.
    pub fn on_metrics(&mut self, metrics: ViewportState) {
        self.metrics = metrics;
    }

    /// The viewport geometry recorded by the last notification.
    #[must_use]
    pub const fn metrics(&self) -> ViewportState {
        self.metrics
    }

    /// Whether the paging buttons should currently be shown.
    #[must_use]
    pub fn buttons_shown(&self) -> bool {
        self.buttons.is_shown(&self.metrics)
    }

    /// Locale-aware enabled state for the paging buttons.
    pub fn button_state(&self, directions: &impl DirectionSource) -> ButtonState {
        button_state(&self.metrics, directions.element_layout_mode())
    }

    /// Pages the viewport by one window of items. The button-click entry point.
    ///
    /// `items` are the on-screen sizes of the row's children along the
    /// scroll axis, measured at call time. Paging applies only to horizontal
    /// scrollers with at least one item; anything else is a no-op. Returns
    /// `true` when a scroll was issued.
    ///
    /// Paging scrolls are animated, with an instant fallback when the host
    /// cannot animate.
    pub fn page(
        &self,
        items: &[f64],
        direction: Direction,
        directions: &impl DirectionSource,
        host: &mut impl ScrollPrimitive,
    ) -> bool {
        if !self.config.horizontal || items.is_empty() {
            return false;
        }

        let layout = directions.layout_mode();
        match compute_next_scroll_position(items, &self.metrics, direction, layout) {
            Some(offset) => {
                issue_scroll(host, offset, false);
                true
            }
            None => false,
        }
    }

    /// Scrolls to an absolute position along the scroll axis.
    pub fn scroll_to_position(
        &self,
        offset: f64,
        immediate: bool,
        host: &mut impl ScrollPrimitive,
    ) {
        issue_scroll(host, offset, immediate);
    }

    /// Jumps to the start of content, instantly.
    pub fn scroll_to_beginning(&self, host: &mut impl ScrollPrimitive) {
        issue_scroll(host, 0.0, true);
    }

    /// Scrolls `element` into view with the given alignment.
    ///
    /// Both rectangles are in content coordinates, the viewport's leading
    /// edge at the current scroll position (see [`windrow_anchor::locate`]).
    /// A `None` element is a no-op, as is an already-visible element when
    /// skip-when-visible is configured.
    pub fn move_to(
        &self,
        viewport: Rect,
        element: Option<Rect>,
        align: Align,
        immediate: bool,
        host: &mut impl ScrollPrimitive,
    ) {
        let Some(element) = element else {
            return;
        };

        let anchor = locate(viewport, element, self.axis());
        if self.config.skip_focus_when_visible && anchor.visible {
            return;
        }

        let offset = match align {
            Align::Start => anchor.start,
            Align::Center => anchor.center,
        };
        issue_scroll(host, offset, immediate);
    }

    /// Focus-follow: recenters on the newly focused element.
    ///
    /// Active only on TV hosts with `center_focus` configured, and only
    /// while attached. The scroll is animated; skip-when-visible applies
    /// through [`Scroller::move_to`].
    pub fn on_focus_moved(
        &self,
        viewport: Rect,
        focused: Option<Rect>,
        host: &mut impl ScrollPrimitive,
    ) {
        if !self.attached || !self.caps.tv || !self.config.center_focus {
            return;
        }
        self.move_to(viewport, focused, Align::Center, false, host);
    }

    /// Maps a mouse-wheel event onto the scroll axis.
    ///
    /// For horizontal scrollers with wheel support configured, a dominant
    /// vertical delta is redirected along the row and returned; the host
    /// applies it as a relative scroll and consumes the event. `None` means
    /// the event should be left to its default handling.
    #[must_use]
    pub fn wheel_delta(&self, delta_x: f64, delta_y: f64) -> Option<f64> {
        if !self.config.horizontal || !self.config.mouse_wheel {
            return None;
        }
        if abs(delta_x) >= abs(delta_y) || delta_y == 0.0 {
            return None;
        }
        Some(delta_y)
    }
}

/// `f64::abs` without `std`.
fn abs(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;
    use windrow_paging::{Direction, LayoutMode, ViewportState};

    use super::{Align, Scroller};
    use crate::host::ScrollPrimitive;
    use crate::{HostCaps, ScrollerConfig};

    const DESKTOP: HostCaps = HostCaps {
        desktop: true,
        tv: false,
    };
    const TV: HostCaps = HostCaps {
        desktop: false,
        tv: true,
    };

    /// Records issued scrolls instead of moving anything.
    #[derive(Debug, Default)]
    struct RecordingHost {
        animated: Vec<f64>,
        instant: Vec<f64>,
        supports_animation: bool,
    }

    impl RecordingHost {
        fn animating() -> Self {
            Self {
                supports_animation: true,
                ..Self::default()
            }
        }
    }

    impl ScrollPrimitive for RecordingHost {
        fn set_position(&mut self, offset: f64) {
            self.instant.push(offset);
        }

        fn animate_to(&mut self, offset: f64) -> bool {
            if self.supports_animation {
                self.animated.push(offset);
            }
            self.supports_animation
        }
    }

    fn row_scroller(caps: HostCaps) -> Scroller {
        let mut scroller = Scroller::new(ScrollerConfig::default(), caps);
        scroller.on_metrics(ViewportState::new(0.0, 350.0, 1000.0));
        scroller
    }

    #[test]
    fn buttons_enable_on_attach_for_desktop_rows() {
        let mut scroller = row_scroller(DESKTOP);
        assert!(scroller.buttons_capability());
        assert!(!scroller.buttons_shown());

        scroller.attach();
        assert!(scroller.buttons_shown());

        scroller.detach();
        assert!(!scroller.buttons_shown());
    }

    #[test]
    fn tv_rows_never_enable_buttons() {
        let mut scroller = row_scroller(TV);
        scroller.attach();
        assert!(!scroller.buttons_capability());
        assert!(!scroller.buttons_shown());
    }

    #[test]
    fn page_forward_issues_one_animated_scroll() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::animating();

        let issued = scroller.page(
            &[100.0; 10],
            Direction::Forward,
            &LayoutMode::Ltr,
            &mut host,
        );

        assert!(issued);
        assert_eq!(host.animated, [300.0]);
        assert!(host.instant.is_empty());
    }

    #[test]
    fn page_falls_back_to_instant_set() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::default();

        scroller.page(&[100.0; 10], Direction::Forward, &LayoutMode::Ltr, &mut host);
        assert_eq!(host.instant, [300.0]);
    }

    #[test]
    fn page_ignores_empty_rows_and_vertical_scrollers() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::animating();
        assert!(!scroller.page(&[], Direction::Forward, &LayoutMode::Ltr, &mut host));

        let config = ScrollerConfig {
            horizontal: false,
            ..ScrollerConfig::default()
        };
        let vertical = Scroller::new(config, DESKTOP);
        assert!(!vertical.page(&[100.0; 10], Direction::Forward, &LayoutMode::Ltr, &mut host));

        assert!(host.animated.is_empty());
        assert!(host.instant.is_empty());
    }

    #[test]
    fn rtl_paging_issues_negative_offsets() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::animating();

        scroller.page(&[100.0; 10], Direction::Forward, &LayoutMode::Rtl, &mut host);
        assert_eq!(host.animated, [-300.0]);
    }

    #[test]
    fn move_to_center_issues_centering_offset() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::animating();

        let viewport = Rect::new(0.0, 0.0, 350.0, 150.0);
        let element = Rect::new(500.0, 0.0, 600.0, 150.0);
        scroller.move_to(viewport, Some(element), Align::Center, false, &mut host);

        assert_eq!(host.animated, [375.0]);
    }

    #[test]
    fn move_to_without_target_is_a_noop() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::animating();
        let viewport = Rect::new(0.0, 0.0, 350.0, 150.0);

        scroller.move_to(viewport, None, Align::Start, false, &mut host);
        assert!(host.animated.is_empty());
        assert!(host.instant.is_empty());
    }

    #[test]
    fn skip_when_visible_suppresses_the_scroll() {
        let config = ScrollerConfig {
            skip_focus_when_visible: true,
            ..ScrollerConfig::default()
        };
        let scroller = Scroller::new(config, DESKTOP);
        let mut host = RecordingHost::animating();

        let viewport = Rect::new(0.0, 0.0, 350.0, 150.0);
        let visible = Rect::new(50.0, 0.0, 150.0, 150.0);
        scroller.move_to(viewport, Some(visible), Align::Center, false, &mut host);
        assert!(host.animated.is_empty());

        let offscreen = Rect::new(500.0, 0.0, 600.0, 150.0);
        scroller.move_to(viewport, Some(offscreen), Align::Center, false, &mut host);
        assert_eq!(host.animated, [375.0]);
    }

    #[test]
    fn focus_follow_requires_tv_center_focus_and_attach() {
        let config = ScrollerConfig {
            center_focus: true,
            ..ScrollerConfig::default()
        };
        let viewport = Rect::new(0.0, 0.0, 350.0, 150.0);
        let focused = Rect::new(500.0, 0.0, 600.0, 150.0);

        // Desktop host: inactive even when configured.
        let mut desktop = Scroller::new(config, DESKTOP);
        desktop.attach();
        let mut host = RecordingHost::animating();
        desktop.on_focus_moved(viewport, Some(focused), &mut host);
        assert!(host.animated.is_empty());

        // TV host, but not yet attached.
        let mut tv = Scroller::new(config, TV);
        tv.on_focus_moved(viewport, Some(focused), &mut host);
        assert!(host.animated.is_empty());

        tv.attach();
        tv.on_focus_moved(viewport, Some(focused), &mut host);
        assert_eq!(host.animated, [375.0]);
    }

    #[test]
    fn scroll_to_beginning_is_instant() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::animating();

        scroller.scroll_to_beginning(&mut host);
        assert_eq!(host.instant, [0.0]);
        assert!(host.animated.is_empty());
    }

    #[test]
    fn instant_fallback_rounds_to_whole_pixels() {
        let scroller = row_scroller(DESKTOP);
        let mut host = RecordingHost::default();

        scroller.scroll_to_position(123.6, false, &mut host);
        assert_eq!(host.instant, [124.0]);
    }

    #[test]
    fn wheel_redirects_dominant_vertical_deltas() {
        let config = ScrollerConfig {
            mouse_wheel: true,
            ..ScrollerConfig::default()
        };
        let scroller = Scroller::new(config, DESKTOP);

        assert_eq!(scroller.wheel_delta(0.0, 40.0), Some(40.0));
        assert_eq!(scroller.wheel_delta(10.0, -40.0), Some(-40.0));
        // Horizontal-dominant or zero deltas stay with default handling.
        assert_eq!(scroller.wheel_delta(50.0, 40.0), None);
        assert_eq!(scroller.wheel_delta(0.0, 0.0), None);

        // Not configured: always default handling.
        let plain = row_scroller(DESKTOP);
        assert_eq!(plain.wheel_delta(0.0, 40.0), None);
    }
}
