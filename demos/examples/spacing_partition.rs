// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing partition overview.
//!
//! Scatter the stock 400-rectangle field, build the padded spacing index,
//! report how the partition came out, and write an SVG snapshot into the
//! working directory.
//!
//! Run:
//! - `cargo run -p quadrat_examples --example spacing_partition`

use std::fmt::Write as _;
use std::time::Instant;

use kurbo::Rect;
use quadrat_index::QuadTree;
use quadrat_scatter::{
    DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS, Field, FieldParams, Layers, RenderList,
};

fn main() {
    let domain = Rect::new(0.0, 0.0, 1200.0, 800.0);
    let params = FieldParams::default();

    let start = Instant::now();
    let field = Field::generate(domain, params);
    let index: QuadTree<usize> = field.spacing_index(DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS);
    let elapsed = start.elapsed();
    println!(
        "Spacing calculation for {} rectangles took {:.3} ms",
        field.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    // How the partition came out
    let mut nodes = 0usize;
    let mut deepest = 0usize;
    index.traverse(|node| {
        nodes += 1;
        deepest = deepest.max(node.depth());
    });
    println!("partition: {} nodes, deepest level {}", nodes, deepest);
    println!(
        "root holds {} straddling or oversized footprints",
        index.root().items().len()
    );
    assert_eq!(index.len(), field.len(), "every footprint should be indexed");

    // Snapshot
    let list = RenderList::build(&field, &index, Layers::all(), 2.0 * DEFAULT_PADDING_RADIUS);
    let svg = render_svg(domain, &list);
    let path = "spacing_partition.svg";
    std::fs::write(path, svg).expect("failed to write SVG");
    println!(
        "wrote {}: {} node bounds, {} fills, {} outlines",
        path,
        list.bounds.len(),
        list.fills.len(),
        list.outlines.len()
    );
}

fn render_svg(domain: Rect, list: &RenderList) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='{} {} {} {}'>",
        domain.x0,
        domain.y0,
        domain.width(),
        domain.height()
    );
    push_rect(&mut svg, domain, "fill='#101014'");
    for &bounds in &list.bounds {
        push_rect(
            &mut svg,
            bounds,
            "fill='none' stroke='white' stroke-width='0.5' stroke-opacity='0.6'",
        );
    }
    for &fill in &list.fills {
        // Canvas flips inverted extents when filling; SVG drops them instead.
        push_rect(&mut svg, fill.abs(), "fill='cornflowerblue' fill-opacity='0.2'");
    }
    for outline in &list.outlines {
        let style = if outline.padded {
            "fill='none' stroke='yellow' stroke-width='1' stroke-dasharray='4 3'"
        } else {
            "fill='none' stroke='green' stroke-width='1'"
        };
        push_rect(&mut svg, outline.rect, style);
    }
    svg.push_str("</svg>\n");
    svg
}

fn push_rect(svg: &mut String, r: Rect, style: &str) {
    let _ = writeln!(
        svg,
        "  <rect x='{}' y='{}' width='{}' height='{}' {}/>",
        r.x0,
        r.y0,
        r.width(),
        r.height(),
        style
    );
}
