// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrat_index --heading-base-level=0

//! Quadrat Index: a depth-bounded quadtree over axis-aligned rectangles.
//!
//! Quadrat Index is a reusable building block for proximity queries over scattered
//! rectangular items.
//!
//! - Insert rectangles ("footprints") with user payloads; each sinks to the deepest
//!   quadrant that fully contains it.
//! - Query by point or by overlapping rectangle.
//! - Walk the partition with [`QuadTree::traverse`] for rendering or statistics.
//!
//! Containment onto quadrants is half-open: low edges are inclusive, high edges are
//! exclusive, so a footprint exactly spanning a quadrant stays with the parent. That
//! asymmetry is what stops descent deterministically; see [`Rect::contains`].
//!
//! Subdivision is bounded by a configurable depth cap, and children materialize only
//! when something descends into them. Footprints that straddle a quadrant midline,
//! fall outside the tree's region, or arrive at the cap are held in the node where
//! descent stopped. Nothing is ever split further, re-balanced, or moved after
//! insertion; when the underlying set changes, rebuild the tree from scratch.
//!
//! The crate also ships [`LinearScan`], the obvious O(n) store with the same query
//! surface. It is the oracle the tree is tested against and the baseline it is
//! benchmarked against.
//!
//! # Example
//!
//! ```rust
//! use quadrat_index::{QuadTree, Rect};
//!
//! // Partition a 1200x800 region, at most 8 levels deep.
//! let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0.0, 0.0, 1200.0, 800.0), 8);
//!
//! // A small box near the origin sinks several levels down; a box straddling
//! // the vertical midline at x = 600 stays at the root.
//! tree.insert(Rect::new(10.0, 10.0, 4.0, 4.0), 1);
//! tree.insert(Rect::new(590.0, 10.0, 20.0, 20.0), 2);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.root().items().len(), 1);
//!
//! let hits: Vec<_> = tree.query_point(12.0, 12.0).collect();
//! assert_eq!(hits, [1]);
//! ```
//!
//! Footprints can be padded to a minimum extent before insertion, so that a later
//! proximity probe of known radius cannot slip past arbitrarily small items:
//!
//! ```rust
//! use quadrat_index::Rect;
//!
//! let padded = Rect::new(100.0, 100.0, 10.0, 40.0).padded_to(24.0);
//! assert_eq!((padded.low_x, padded.width), (93.0, 24.0));
//! assert_eq!((padded.low_y, padded.height), (100.0, 40.0));
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are `f64` and assumed finite (no NaNs). Extents may be zero or
//! negative; such footprints contain no point, and their edges are compared as-is
//! during placement, so an inverted footprint descends like any other whenever its
//! low corner and derived high corner both fall inside a quadrant.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod linear;
pub mod tree;
pub mod types;

pub use linear::LinearScan;
pub use tree::{Node, QuadTree};
pub use types::Rect;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    struct Rng(u64);

    impl Rng {
        fn new(seed: u64) -> Self {
            Self(seed)
        }
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }
        fn next_f64(&mut self) -> f64 {
            let v = self.next_u64() >> 11;
            (v as f64) / ((1_u64 << 53) as f64)
        }
    }

    /// A messy footprint set: mostly inside the 1200x800 region, a few
    /// outside, sizes from negative through region-scale.
    fn scattered_footprints(count: usize, seed: u64) -> Vec<Rect> {
        let mut rng = Rng::new(seed);
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let low_x = rng.next_f64() * 1300.0 - 50.0;
            let low_y = rng.next_f64() * 900.0 - 50.0;
            let width = rng.next_f64() * 66.0 - 6.0;
            let height = rng.next_f64() * 66.0 - 6.0;
            out.push(Rect::new(low_x, low_y, width, height));
        }
        out
    }

    fn build_both(footprints: &[Rect]) -> (QuadTree<u32>, LinearScan<u32>) {
        let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 1200.0, 800.0), 8);
        let mut scan = LinearScan::new();
        for (i, &fp) in (0_u32..).zip(footprints.iter()) {
            tree.insert(fp, i);
            scan.insert(fp, i);
        }
        (tree, scan)
    }

    #[test]
    fn tree_matches_linear_scan_on_point_probes() {
        let footprints = scattered_footprints(300, 0x5EED_0001);
        let (tree, scan) = build_both(&footprints);
        assert_eq!(tree.len(), scan.len());

        // A boundary-heavy probe grid: every multiple of 100 lands on some
        // subdivision midline.
        for gy in 0..=8 {
            for gx in 0..=12 {
                let (x, y) = (f64::from(gx) * 100.0, f64::from(gy) * 100.0);
                let mut fast: Vec<_> = tree.query_point(x, y).collect();
                let slow: Vec<_> = scan.query_point(x, y).collect();
                fast.sort_unstable();
                assert_eq!(fast, slow, "probe ({x}, {y})");
            }
        }
    }

    #[test]
    fn tree_matches_linear_scan_on_rect_probes() {
        let footprints = scattered_footprints(300, 0x5EED_0002);
        let (tree, scan) = build_both(&footprints);

        let mut rng = Rng::new(0x5EED_0003);
        for _ in 0..64 {
            let probe = Rect::new(
                rng.next_f64() * 1200.0,
                rng.next_f64() * 800.0,
                rng.next_f64() * 300.0,
                rng.next_f64() * 300.0,
            );
            let mut fast: Vec<_> = tree.query_rect(probe).collect();
            let slow: Vec<_> = scan.query_rect(probe).collect();
            fast.sort_unstable();
            assert_eq!(fast, slow, "probe {probe:?}");
        }

        // Probing the whole region returns everything that overlaps it, in
        // both stores.
        let everything = Rect::new(-100.0, -100.0, 1500.0, 1100.0);
        assert_eq!(
            tree.query_rect(everything).count(),
            scan.query_rect(everything).count()
        );
    }

    #[test]
    fn every_item_is_stored_exactly_once_at_a_valid_node() {
        let footprints = scattered_footprints(300, 0x5EED_0004);
        let (tree, _) = build_both(&footprints);
        let max_depth = tree.max_depth();

        let mut payloads = Vec::new();
        tree.traverse(|n| {
            for &(fp, p) in n.items() {
                payloads.push(p);
                if n.depth() > 0 {
                    assert!(
                        n.region().contains(&fp),
                        "an item below the root must fit its node's region"
                    );
                }
                if n.depth() < max_depth {
                    assert!(
                        !n.child_regions().iter().any(|r| r.contains(&fp)),
                        "an item above the cap must not fit any child region"
                    );
                }
            }
            assert!(n.depth() <= max_depth, "no node may sit below the cap");
        });

        payloads.sort_unstable();
        let expected: Vec<u32> = (0..300).collect();
        assert_eq!(payloads, expected);
    }
}
