// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry: low-corner/extent rectangles and their predicates.

/// Axis-aligned rectangle stored as a low corner plus extents.
///
/// The high edges are derived (`low + extent`), never stored. Extents may be
/// zero or negative; a rectangle with a negative extent contains no point,
/// but its edges are compared as-is rather than normalized, so an outer
/// region can still contain it when the low corner and the derived high
/// corner both fall inside the outer extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// Low x (left edge).
    pub low_x: f64,
    /// Low y (top edge).
    pub low_y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its low corner and extents.
    pub const fn new(low_x: f64, low_y: f64, width: f64, height: f64) -> Self {
        Self {
            low_x,
            low_y,
            width,
            height,
        }
    }

    /// High x (right edge), derived.
    #[inline]
    pub fn high_x(&self) -> f64 {
        self.low_x + self.width
    }

    /// High y (bottom edge), derived.
    #[inline]
    pub fn high_y(&self) -> f64 {
        self.low_y + self.height
    }

    /// Whether `inner` lies fully inside `self`.
    ///
    /// Low edges are inclusive, high edges are exclusive: a rectangle that
    /// exactly spans `self` is not contained. Quadrant descent relies on this
    /// asymmetry to stop deterministically, so it is part of the contract and
    /// not a rounding accident.
    #[inline]
    pub fn contains(&self, inner: &Self) -> bool {
        inner.low_x >= self.low_x
            && inner.high_x() < self.high_x()
            && inner.low_y >= self.low_y
            && inner.high_y() < self.high_y()
    }

    /// Whether the rectangles share any point. Touching edges count as
    /// overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.high_x() < other.low_x
            || other.high_x() < self.low_x
            || self.high_y() < other.low_y
            || other.high_y() < self.low_y)
    }

    /// Whether the rectangle contains the point, all four edges inclusive.
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.low_x <= x && x <= self.high_x() && self.low_y <= y && y <= self.high_y()
    }

    /// The four equal quadrants, in top-left, top-right, bottom-left,
    /// bottom-right order.
    pub fn quarters(&self) -> [Self; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        [
            Self::new(self.low_x, self.low_y, half_w, half_h),
            Self::new(self.low_x + half_w, self.low_y, half_w, half_h),
            Self::new(self.low_x, self.low_y + half_h, half_w, half_h),
            Self::new(self.low_x + half_w, self.low_y + half_h, half_w, half_h),
        ]
    }

    /// Grow each extent to at least `min_extent`, keeping the centre fixed.
    ///
    /// Extents already at or above the minimum are left untouched, so the
    /// result never shrinks. This is the footprint used to index an item on
    /// behalf of a proximity probe of radius `min_extent / 2`: however small
    /// the item, its footprint stays wide enough for the probe to find.
    pub fn padded_to(&self, min_extent: f64) -> Self {
        let width = self.width.max(min_extent);
        let height = self.height.max(min_extent);
        Self {
            low_x: self.low_x + (self.width - width) / 2.0,
            low_y: self.low_y + (self.height - height) / 2.0,
            width,
            height,
        }
    }
}
