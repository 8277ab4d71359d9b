// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan baseline with the same query surface as the tree.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Rect;

/// Flat list of footprint/payload pairs answering queries by scanning
/// everything.
///
/// This is the obvious O(n) store. It exists as the oracle the quadtree is
/// tested against and the baseline it is benchmarked against: for any probe,
/// [`QuadTree`](crate::QuadTree) over the same entries must report the same
/// payload set.
pub struct LinearScan<P: Copy + Debug> {
    entries: Vec<(Rect, P)>,
}

impl<P: Copy + Debug> Default for LinearScan<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + Debug> LinearScan<P> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn insert(&mut self, footprint: Rect, item: P) {
        self.entries.push((footprint, item));
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Payloads whose footprint contains the point, all edges inclusive, in
    /// insertion order.
    pub fn query_point(&self, x: f64, y: f64) -> impl Iterator<Item = P> + '_ {
        let mut out = Vec::new();
        for (footprint, item) in &self.entries {
            if footprint.contains_point(x, y) {
                out.push(*item);
            }
        }
        out.into_iter()
    }

    /// Payloads whose footprint overlaps `probe`, edges inclusive, in
    /// insertion order.
    pub fn query_rect(&self, probe: Rect) -> impl Iterator<Item = P> + '_ {
        let mut out = Vec::new();
        for (footprint, item) in &self.entries {
            if footprint.overlaps(&probe) {
                out.push(*item);
            }
        }
        out.into_iter()
    }
}

impl<P: Copy + Debug> Debug for LinearScan<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScan")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
