// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A measured row of item extents, collected from host layout rectangles.

use kurbo::Rect;
use smallvec::SmallVec;
use windrow_anchor::Axis;

/// On-screen sizes of a scroller's children along the scroll axis.
///
/// Hosts rebuild this from the current layout on every paging interaction;
/// nothing here survives between events. The inline capacity covers typical
/// media rows without touching the heap.
#[derive(Clone, Debug, Default)]
pub struct ItemRow {
    extents: SmallVec<[f64; 16]>,
}

impl ItemRow {
    /// Collects item extents from laid-out child rectangles.
    ///
    /// Each rectangle contributes its size along `axis`, in child order.
    #[must_use]
    pub fn from_rects<I>(rects: I, axis: Axis) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let extents = rects
            .into_iter()
            .map(|rect| {
                let (start, end) = axis.span(rect);
                end - start
            })
            .collect();
        Self { extents }
    }

    /// Builds a row directly from measured extents.
    #[must_use]
    pub fn from_extents<I>(extents: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            extents: extents.into_iter().collect(),
        }
    }

    /// The measured extents, in child order.
    #[must_use]
    pub fn extents(&self) -> &[f64] {
        &self.extents
    }

    /// Number of measured items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns `true` when no items were measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }
}
