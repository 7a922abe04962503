// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollbar presentation classes resolved from config and capabilities.

use crate::{HostCaps, ScrollerConfig};

bitflags::bitflags! {
    /// Presentation classes a host applies to the scroll container.
    ///
    /// These mirror the style hooks a scroller needs: which axis scrolls,
    /// whether the native scrollbar is hidden, and whether native smooth
    /// scrolling is requested. The `*_FORCED` variants hide the scrollbar
    /// unconditionally while paging buttons take over navigation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct StyleClasses: u16 {
        /// Container scrolls along the horizontal axis.
        const SCROLL_X = 0b0000_0001;
        /// Container scrolls along the vertical axis.
        const SCROLL_Y = 0b0000_0010;
        /// Hide the horizontal scrollbar.
        const HIDDEN_SCROLL_X = 0b0000_0100;
        /// Hide the vertical scrollbar.
        const HIDDEN_SCROLL_Y = 0b0000_1000;
        /// Use native smooth scrolling on the horizontal axis.
        const SMOOTH_SCROLL_X = 0b0001_0000;
        /// Use native smooth scrolling on the vertical axis.
        const SMOOTH_SCROLL_Y = 0b0010_0000;
        /// Horizontal scrollbar hidden because buttons take over.
        const HIDDEN_SCROLL_X_FORCED = 0b0100_0000;
        /// Vertical scrollbar hidden because buttons take over.
        const HIDDEN_SCROLL_Y_FORCED = 0b1000_0000;
    }
}

/// Returns `true` when paging buttons apply for this config and host.
///
/// Buttons are a pointer-driven affordance for horizontal rows; vertical and
/// non-desktop scrollers never get them.
#[must_use]
pub(crate) const fn buttons_capability(config: &ScrollerConfig, caps: &HostCaps) -> bool {
    caps.desktop && config.horizontal && config.scroll_buttons
}

/// Resolves the presentation classes for a scroller.
///
/// Resolution happens once, at construction; the host toggles classes from
/// the returned set rather than re-deriving them per event.
#[must_use]
pub(crate) fn resolve(config: &ScrollerConfig, caps: &HostCaps) -> StyleClasses {
    let buttons = buttons_capability(config, caps);
    let hide_scrollbar = buttons || config.hide_scrollbar || !caps.desktop;
    let smooth = (config.allow_native_smooth_scroll && !buttons) || (caps.tv && !buttons);

    let mut classes = StyleClasses::empty();

    if config.horizontal {
        classes |= StyleClasses::SCROLL_X;
        if hide_scrollbar {
            classes |= StyleClasses::HIDDEN_SCROLL_X;
        }
        if smooth {
            classes |= StyleClasses::SMOOTH_SCROLL_X;
        }
        if buttons {
            classes |= StyleClasses::HIDDEN_SCROLL_X_FORCED;
        }
    } else {
        classes |= StyleClasses::SCROLL_Y;
        if hide_scrollbar {
            classes |= StyleClasses::HIDDEN_SCROLL_Y;
        }
        if smooth {
            classes |= StyleClasses::SMOOTH_SCROLL_Y;
        }
        if buttons {
            classes |= StyleClasses::HIDDEN_SCROLL_Y_FORCED;
        }
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::{StyleClasses, resolve};
    use crate::{HostCaps, ScrollerConfig};

    #[test]
    fn desktop_row_hides_scrollbar_for_buttons() {
        let classes = resolve(
            &ScrollerConfig::default(),
            &HostCaps {
                desktop: true,
                tv: false,
            },
        );
        assert_eq!(
            classes,
            StyleClasses::SCROLL_X
                | StyleClasses::HIDDEN_SCROLL_X
                | StyleClasses::HIDDEN_SCROLL_X_FORCED
        );
    }

    #[test]
    fn tv_row_scrolls_smoothly_without_buttons() {
        let classes = resolve(
            &ScrollerConfig::default(),
            &HostCaps {
                desktop: false,
                tv: true,
            },
        );
        assert_eq!(
            classes,
            StyleClasses::SCROLL_X | StyleClasses::HIDDEN_SCROLL_X | StyleClasses::SMOOTH_SCROLL_X
        );
    }

    #[test]
    fn vertical_scroller_uses_y_variants() {
        let config = ScrollerConfig {
            horizontal: false,
            hide_scrollbar: true,
            ..ScrollerConfig::default()
        };
        let classes = resolve(
            &config,
            &HostCaps {
                desktop: true,
                tv: false,
            },
        );
        assert_eq!(
            classes,
            StyleClasses::SCROLL_Y | StyleClasses::HIDDEN_SCROLL_Y
        );
    }

    #[test]
    fn buttons_suppress_native_smooth_scroll() {
        let config = ScrollerConfig {
            allow_native_smooth_scroll: true,
            ..ScrollerConfig::default()
        };
        let classes = resolve(
            &config,
            &HostCaps {
                desktop: true,
                tv: false,
            },
        );
        assert!(!classes.contains(StyleClasses::SMOOTH_SCROLL_X));
        assert!(classes.contains(StyleClasses::HIDDEN_SCROLL_X_FORCED));
    }
}
