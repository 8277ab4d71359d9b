// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-bounded quadtree over rectangular footprints.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Rect;

/// One node of a [`QuadTree`].
///
/// Nodes are exposed read-only (through [`QuadTree::root`] and
/// [`QuadTree::traverse`]) so callers can render the partition or gather
/// statistics without the tree giving up ownership of anything.
pub struct Node<P: Copy + Debug> {
    region: Rect,
    depth: usize,
    child_regions: [Rect; 4],
    children: [Option<Box<Node<P>>>; 4],
    items: Vec<(Rect, P)>,
}

impl<P: Copy + Debug> Node<P> {
    fn new(region: Rect, depth: usize) -> Self {
        Self {
            region,
            depth,
            child_regions: region.quarters(),
            children: [None, None, None, None],
            items: Vec::new(),
        }
    }

    /// The extent this node covers. Fixed at construction.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Distance from the root. The root sits at depth zero.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The four quadrant extents in top-left, top-right, bottom-left,
    /// bottom-right order. Computed once when the node is created, whether or
    /// not the matching children ever materialize.
    pub fn child_regions(&self) -> &[Rect; 4] {
        &self.child_regions
    }

    /// The child for quadrant `i`, if it has been materialized.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    pub fn child(&self, i: usize) -> Option<&Self> {
        self.children[i].as_deref()
    }

    /// Existing children, in quadrant order. Absent quadrants are skipped,
    /// not yielded as empties.
    pub fn children(&self) -> impl Iterator<Item = &Self> + '_ {
        self.children.iter().filter_map(|c| c.as_deref())
    }

    /// Footprint and payload pairs held at this node, in insertion order.
    ///
    /// An item sits here because no child quadrant fully contained its
    /// footprint: it straddles a midline, lies outside this node's region, or
    /// arrived once the depth cap stopped subdivision.
    pub fn items(&self) -> &[(Rect, P)] {
        &self.items
    }

    /// Total payloads stored in this node's subtree.
    pub fn len(&self) -> usize {
        let mut n = self.items.len();
        for child in self.children.iter().flatten() {
            n += child.len();
        }
        n
    }

    /// Whether the subtree stores no payloads.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, footprint: Rect, item: P, max_depth: usize) {
        if self.depth < max_depth {
            let child_depth = self.depth + 1;
            for i in 0..4 {
                if self.child_regions[i].contains(&footprint) {
                    let region = self.child_regions[i];
                    let child = self.children[i]
                        .get_or_insert_with(|| Box::new(Self::new(region, child_depth)));
                    child.insert(footprint, item, max_depth);
                    return;
                }
            }
        }
        self.items.push((footprint, item));
    }

    fn visit<F: FnMut(&Self)>(&self, visit: &mut F) {
        visit(self);
        for child in self.children.iter().flatten() {
            child.visit(visit);
        }
    }

    fn collect_overlapping(&self, probe: &Rect, out: &mut Vec<P>) {
        for (footprint, item) in &self.items {
            if footprint.overlaps(probe) {
                out.push(*item);
            }
        }
        for child in self.children.iter().flatten() {
            if child.region.overlaps(probe) {
                child.collect_overlapping(probe, out);
            }
        }
    }
}

impl<P: Copy + Debug> Debug for Node<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let children = self.children.iter().filter(|c| c.is_some()).count();
        f.debug_struct("Node")
            .field("region", &self.region)
            .field("depth", &self.depth)
            .field("items", &self.items.len())
            .field("children", &children)
            .finish_non_exhaustive()
    }
}

/// Depth-bounded quadtree storing `Copy` payloads under rectangular
/// footprints.
///
/// The tree is write-once: build it by inserting, then query and traverse it.
/// There is no removal, no re-balancing, and no in-place update; when the
/// underlying set changes, drop the tree and build a new one.
pub struct QuadTree<P: Copy + Debug> {
    root: Node<P>,
    max_depth: usize,
}

impl<P: Copy + Debug> QuadTree<P> {
    /// Create an empty tree covering `region`, subdividing at most
    /// `max_depth` levels below the root.
    ///
    /// # Panics
    ///
    /// Panics if `region` has a negative extent. Zero extents are allowed;
    /// the quadrants of such a region contain no footprint with non-negative
    /// extents, so ordinary inserts stay in the root's item list.
    pub fn new(region: Rect, max_depth: usize) -> Self {
        debug_assert!(
            region.low_x.is_finite()
                && region.low_y.is_finite()
                && region.width.is_finite()
                && region.height.is_finite(),
            "tree region must be finite"
        );
        assert!(
            region.width >= 0.0 && region.height >= 0.0,
            "tree region extents must be non-negative"
        );
        Self {
            root: Node::new(region, 0),
            max_depth,
        }
    }

    /// The extent covered by the root.
    pub fn region(&self) -> Rect {
        self.root.region
    }

    /// The deepest level a node may sit at. The root is level zero.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Read access to the root node.
    pub fn root(&self) -> &Node<P> {
        &self.root
    }

    /// Insert `item` under its `footprint`.
    ///
    /// The item lands at the deepest node, capped at
    /// [`max_depth`](Self::max_depth), whose region fully contains the
    /// footprint under the half-open rule of [`Rect::contains`]. Quadrants
    /// are tried in fixed top-left, top-right, bottom-left, bottom-right
    /// order; at most one can contain a given footprint, so the order only
    /// decides which comparisons short-circuit. A footprint that fits no
    /// quadrant stays in the current node's item list, which also covers
    /// footprints outside the tree's region entirely.
    ///
    /// Children materialize on first descent; inserting never allocates
    /// nodes off the descent path.
    pub fn insert(&mut self, footprint: Rect, item: P) {
        self.root.insert(footprint, item, self.max_depth);
    }

    /// Total payloads stored in the tree.
    ///
    /// Walks the whole tree. Meant for verification and inspection, not hot
    /// paths.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the tree stores no payloads.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Visit every node in depth-first pre-order: each node before its
    /// children, children in quadrant order.
    ///
    /// Traversal is read-only and repeatable: two runs over an unmutated
    /// tree visit the same nodes in the same order.
    pub fn traverse<F: FnMut(&Node<P>)>(&self, mut visit: F) {
        self.root.visit(&mut visit);
    }

    /// Payloads whose stored footprint overlaps `probe`, edges inclusive.
    ///
    /// Subtrees whose region does not overlap the probe are skipped, which
    /// is sound because every stored footprint lies within its node's
    /// region; the root is always scanned.
    pub fn query_rect(&self, probe: Rect) -> impl Iterator<Item = P> + '_ {
        let mut out = Vec::new();
        self.root.collect_overlapping(&probe, &mut out);
        out.into_iter()
    }

    /// Payloads whose stored footprint contains the point, edges inclusive.
    ///
    /// Identical to [`query_rect`](Self::query_rect) with a zero-size probe
    /// at the point.
    pub fn query_point(&self, x: f64, y: f64) -> impl Iterator<Item = P> + '_ {
        let mut out = Vec::new();
        self.root
            .collect_overlapping(&Rect::new(x, y, 0.0, 0.0), &mut out);
        out.into_iter()
    }
}

impl<P: Copy + Debug> Debug for QuadTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut nodes = 0_usize;
        let mut deepest = 0_usize;
        self.traverse(|n| {
            nodes += 1;
            deepest = deepest.max(n.depth());
        });
        f.debug_struct("QuadTree")
            .field("region", &self.root.region)
            .field("max_depth", &self.max_depth)
            .field("nodes", &nodes)
            .field("deepest", &deepest)
            .field("len", &self.root.len())
            .finish_non_exhaustive()
    }
}
