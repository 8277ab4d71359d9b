// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter fields: seeded generation, spacing indices, and picking.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use quadrat_index::{LinearScan, QuadTree, Rect as Region};

use crate::math;
use crate::rng::Sfc32;

/// Default generation seed for [`FieldParams`].
pub const DEFAULT_SEED: u32 = 1337 ^ 0xDEAD_BEEF;

/// Default depth cap for [`Field::spacing_index`].
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Default padding radius.
///
/// [`Field::spacing_index`] grows every footprint to at least twice the
/// padding radius on each axis, so with this value no indexed extent is
/// ever narrower than 24 logical pixels.
pub const DEFAULT_PADDING_RADIUS: f64 = 12.0;

/// Parameters for [`Field::generate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// How many rectangles to scatter.
    pub count: usize,
    /// Mean of the normally distributed width and height draws.
    pub size_mean: f64,
    /// Standard deviation of the width and height draws.
    pub size_std_dev: f64,
    /// Seed for the generator; equal seeds reproduce the field exactly.
    pub seed: u32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 400,
            size_mean: 2.0 * DEFAULT_PADDING_RADIUS,
            size_std_dev: 6.0,
            seed: DEFAULT_SEED,
        }
    }
}

/// A scatter of axis-aligned rectangles over a rectangular domain.
///
/// Items keep whatever extents generation produced, including extents below
/// the padding minimum and, for draws far below the mean, negative ones.
/// Padding is applied when an index is built, never to the stored items.
#[derive(Clone, Debug)]
pub struct Field {
    domain: Rect,
    items: Vec<Rect>,
}

impl Field {
    /// Scatters `params.count` rectangles over `domain`.
    ///
    /// Each item consumes six draws in a fixed order: one uniform draw per
    /// center coordinate, floored onto the integer grid, then one normal
    /// draw (two uniforms) per extent. The order is part of the crate's
    /// reproducibility contract and is pinned by tests.
    pub fn generate(domain: Rect, params: FieldParams) -> Self {
        let mut rng = Sfc32::new(params.seed);
        let mut items = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let cx = domain.x0 + math::floor(rng.next_f64() * domain.width());
            let cy = domain.y0 + math::floor(rng.next_f64() * domain.height());
            let w = rng.normal(params.size_mean, params.size_std_dev);
            let h = rng.normal(params.size_mean, params.size_std_dev);
            items.push(Rect::new(
                cx - w / 2.0,
                cy - h / 2.0,
                cx + w / 2.0,
                cy + h / 2.0,
            ));
        }
        Self { domain, items }
    }

    /// Wraps an existing set of rectangles as a field over `domain`.
    pub fn from_items(domain: Rect, items: Vec<Rect>) -> Self {
        Self { domain, items }
    }

    /// The domain the field was scattered over.
    pub fn domain(&self) -> Rect {
        self.domain
    }

    /// The scattered rectangles, in generation order.
    pub fn items(&self) -> &[Rect] {
        &self.items
    }

    /// The number of rectangles in the field.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the field holds no rectangles.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds a quadtree over the domain from padded footprints.
    ///
    /// Every footprint is grown to at least `2.0 * padding_radius` per axis
    /// before insertion, so a point query against the result reports every
    /// item whose padded footprint reaches the probe. Payloads are indices
    /// into [`items`](Self::items).
    pub fn spacing_index(&self, max_depth: usize, padding_radius: f64) -> QuadTree<usize> {
        let mut tree = QuadTree::new(rect_to_region(self.domain), max_depth);
        for (i, item) in self.items.iter().enumerate() {
            tree.insert(rect_to_region(*item).padded_to(2.0 * padding_radius), i);
        }
        tree
    }

    /// Builds the exhaustive-scan baseline over the raw footprints.
    pub fn linear_scan(&self) -> LinearScan<usize> {
        let mut scan = LinearScan::new();
        for (i, item) in self.items.iter().enumerate() {
            scan.insert(rect_to_region(*item), i);
        }
        scan
    }

    /// Items whose raw footprint contains `at`, edges included.
    ///
    /// `index` must have been built by [`spacing_index`](Self::spacing_index)
    /// on this field; its payloads are resolved against [`items`](Self::items).
    /// The index narrows the search to padded candidates and the raw check
    /// discards the ones only the padding reached. Results are ascending.
    pub fn hits_at(&self, index: &QuadTree<usize>, at: Point) -> Vec<usize> {
        let mut hits: Vec<usize> = index.query_point(at.x, at.y).collect();
        hits.retain(|&i| rect_to_region(self.items[i]).contains_point(at.x, at.y));
        hits.sort_unstable();
        hits
    }

    /// Items whose padded footprint meets the box extending `radius` out
    /// from `at` on both axes.
    ///
    /// Unlike [`hits_at`](Self::hits_at) there is no raw-footprint check:
    /// this is the proximity query, and the padding is what guarantees that
    /// small items still turn up when the probe lands near them rather than
    /// on them. Results are ascending.
    pub fn near(&self, index: &QuadTree<usize>, at: Point, radius: f64) -> Vec<usize> {
        let probe = Region::new(at.x - radius, at.y - radius, 2.0 * radius, 2.0 * radius);
        let mut hits: Vec<usize> = index.query_rect(probe).collect();
        hits.sort_unstable();
        hits
    }
}

/// Reinterprets a corner-form rectangle as an origin-plus-extent region.
///
/// Inverted rectangles come through with negative extents, unnormalized.
pub(crate) fn rect_to_region(rect: Rect) -> Region {
    Region::new(rect.x0, rect.y0, rect.width(), rect.height())
}
