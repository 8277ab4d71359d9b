// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening a field and its index into renderer-agnostic draw lists.

use alloc::vec::Vec;

use kurbo::Rect;
use quadrat_index::{QuadTree, Rect as Region};

use crate::field::{Field, rect_to_region};

bitflags::bitflags! {
    /// Which parts of a field make it into a [`RenderList`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Layers: u8 {
        /// The region of every materialized tree node.
        const BOUNDS = 1 << 0;
        /// The translucent interior of every raw item.
        const ITEMS = 1 << 1;
        /// One outline per item, padded when the item sits at or below the
        /// minimum extent.
        const FOOTPRINTS = 1 << 2;
    }
}

/// The outline of a single item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outline {
    /// The rectangle to stroke.
    pub rect: Rect,
    /// Whether `rect` is the padded footprint rather than the item itself.
    ///
    /// Renderers typically stroke padded outlines dashed so the synthetic
    /// extent reads differently from real geometry.
    pub padded: bool,
}

/// Draw lists for one field, grouped by layer.
///
/// Everything is plain `kurbo` geometry; no drawing happens here. A renderer
/// strokes `bounds`, fills `fills` at low alpha, and strokes `outlines`
/// according to their [`padded`](Outline::padded) flag.
#[derive(Clone, Debug, Default)]
pub struct RenderList {
    /// Node regions, in depth-first quadrant order starting at the root.
    pub bounds: Vec<Rect>,
    /// Raw item rectangles, in generation order.
    pub fills: Vec<Rect>,
    /// Item outlines, in generation order.
    pub outlines: Vec<Outline>,
}

impl RenderList {
    /// Flattens `field` and `index` into draw lists for the given layers.
    ///
    /// An item is outlined padded when either raw extent is at or below
    /// `min_extent`, matching the threshold [`Field::spacing_index`] pads
    /// to when `min_extent` is twice the padding radius.
    pub fn build(field: &Field, index: &QuadTree<usize>, layers: Layers, min_extent: f64) -> Self {
        let mut list = Self::default();
        if layers.contains(Layers::BOUNDS) {
            index.traverse(|node| list.bounds.push(region_to_rect(node.region())));
        }
        if layers.contains(Layers::ITEMS) {
            list.fills.extend_from_slice(field.items());
        }
        if layers.contains(Layers::FOOTPRINTS) {
            for item in field.items() {
                let padded = item.width() <= min_extent || item.height() <= min_extent;
                let rect = if padded {
                    region_to_rect(rect_to_region(*item).padded_to(min_extent))
                } else {
                    *item
                };
                list.outlines.push(Outline { rect, padded });
            }
        }
        list
    }
}

fn region_to_rect(region: Region) -> Rect {
    Rect::new(region.low_x, region.low_y, region.high_x(), region.high_y())
}
