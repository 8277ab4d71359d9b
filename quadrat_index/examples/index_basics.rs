// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quadrat Index: insert, inspect the partition, and query.

use quadrat_index::{QuadTree, Rect};

fn main() {
    let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0.0, 0.0, 1200.0, 800.0), 8);
    tree.insert(Rect::new(10.0, 10.0, 4.0, 4.0), 1);
    tree.insert(Rect::new(590.0, 10.0, 20.0, 20.0), 2);
    tree.insert(Rect::new(700.0, 500.0, 80.0, 60.0), 3);

    // Where did everything land?
    tree.traverse(|node| {
        if !node.items().is_empty() {
            let payloads: Vec<_> = node.items().iter().map(|&(_, p)| p).collect();
            let r = node.region();
            println!(
                "depth {}: region ({}, {}) {}x{} holds {:?}",
                node.depth(),
                r.low_x,
                r.low_y,
                r.width,
                r.height,
                payloads
            );
        }
    });

    // Query a point
    let hits: Vec<_> = tree.query_point(12.0, 12.0).collect();
    println!("hits at (12,12): {:?}", hits);
}
