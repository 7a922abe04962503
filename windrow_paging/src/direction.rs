// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging direction and LTR/RTL sign normalization.

/// Requested paging direction along the scroll axis.
///
/// Directions are semantic: [`Direction::Forward`] always means "toward the
/// end of content" and [`Direction::Backward`] "toward the start",
/// regardless of whether content flows left-to-right or right-to-left on
/// screen. Visual left/right is resolved by [`LayoutMode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Page toward the end of content.
    Forward,
    /// Page toward the start of content.
    Backward,
}

/// The sign convention applied to scroll positions and offsets.
///
/// When a locale renders right-to-left, scrolling toward the end of content
/// moves toward the visual left, and host platforms report scroll positions
/// as negative values. All windowing math in this crate runs on "logical"
/// offsets (always non-negative toward the end of content); a [`LayoutMode`]
/// converts between the physical and logical conventions at the boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Left-to-right: physical and logical offsets coincide.
    #[default]
    Ltr,
    /// Right-to-left: physical offsets are the negation of logical offsets.
    Rtl,
}

impl LayoutMode {
    /// Returns `true` for right-to-left layout.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// The multiplier converting between physical and logical offsets.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Ltr => 1.0,
            Self::Rtl => -1.0,
        }
    }

    /// Converts a physical scroll offset into its logical value.
    #[must_use]
    pub const fn to_logical(self, physical: f64) -> f64 {
        physical * self.sign()
    }

    /// Converts a logical scroll offset back into the physical convention.
    ///
    /// The conversion is its own inverse, so this is the same multiplication
    /// as [`LayoutMode::to_logical`]; the two names exist to keep call sites
    /// readable about which space a value lives in.
    #[must_use]
    pub const fn to_physical(self, logical: f64) -> f64 {
        logical * self.sign()
    }
}
