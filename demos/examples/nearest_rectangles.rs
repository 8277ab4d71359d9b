// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles under and near the cursor.
//!
//! Mirrors an interactive picker: probe the field at a few cursor positions,
//! list exact hits and padded neighbors, and cross-check the index against
//! the exhaustive baseline.
//!
//! Run:
//! - `cargo run -p quadrat_examples --example nearest_rectangles`

use kurbo::{Point, Rect};
use quadrat_scatter::{DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS, Field, FieldParams};

fn main() {
    let domain = Rect::new(0.0, 0.0, 1200.0, 800.0);
    let field = Field::generate(domain, FieldParams::default());
    let index = field.spacing_index(DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS);
    let scan = field.linear_scan();

    let cursors = [
        Point::new(600.0, 400.0),
        Point::new(100.0, 80.0),
        Point::new(951.0, 333.0),
        Point::new(1199.0, 799.0),
    ];
    for at in cursors {
        let hits = field.hits_at(&index, at);
        let near = field.near(&index, at, DEFAULT_PADDING_RADIUS);

        let slow: Vec<usize> = scan.query_point(at.x, at.y).collect();
        assert_eq!(hits, slow, "index and exhaustive scan disagree at {:?}", at);

        // An interactive picker keeps the last hit, so overlapping rectangles
        // resolve to the most recently generated one.
        let selected = hits.last().copied();
        println!(
            "cursor {:?}: {} exact, {} within {} px, selected {:?}",
            at,
            hits.len(),
            near.len(),
            DEFAULT_PADDING_RADIUS,
            selected
        );
        if let Some(i) = selected {
            println!("  rect {}: {:?}", i, field.items()[i]);
        }
    }
}
