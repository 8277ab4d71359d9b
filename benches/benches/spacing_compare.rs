// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use quadrat_index::{QuadTree, Rect as Region};
use quadrat_scatter::{DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS, Field, FieldParams};

#[derive(Clone)]
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
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn domain() -> Rect {
    Rect::new(0.0, 0.0, 1200.0, 800.0)
}

fn scattered_field(count: usize) -> Field {
    Field::generate(
        domain(),
        FieldParams {
            count,
            ..Default::default()
        },
    )
}

fn gen_random_footprints(count: usize) -> Vec<Region> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * 1988.0;
        let y0 = rng.next_f64() * 1988.0;
        out.push(Region::new(x0, y0, 12.0, 12.0));
    }
    out
}

// Every item crosses a midline, so none of them leaves the root.
fn straddling_field(count: usize) -> Field {
    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        let offset = (i % 40) as f64 * 18.0;
        if i % 2 == 0 {
            items.push(Rect::new(560.0, 20.0 + offset, 640.0, 50.0 + offset));
        } else {
            items.push(Rect::new(100.0 + offset, 370.0, 160.0 + offset, 430.0));
        }
    }
    Field::from_items(domain(), items)
}

fn probe_storm_tree(field: &Field, index: &QuadTree<usize>) -> usize {
    let mut total = 0usize;
    for q in 0..256 {
        let at = Point::new((q % 16) as f64 * 75.0, (q / 16) as f64 * 50.0);
        total += field.hits_at(index, at).len();
    }
    total
}

fn bench_raw_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_inserts");
    for &n in &[1024usize, 4096] {
        let footprints = gen_random_footprints(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_insert_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(Region::new(0.0, 0.0, 2000.0, 2000.0), DEFAULT_MAX_DEPTH),
                |mut tree| {
                    for (i, fp) in footprints.iter().copied().enumerate() {
                        tree.insert(fp, i);
                    }
                    let hits = tree.query_rect(Region::new(800.0, 800.0, 400.0, 400.0)).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[100usize, 400, 1600] {
        let field = scattered_field(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_n{}", n), |b| {
            b.iter_batched(
                || field.clone(),
                |field| {
                    let index = field.spacing_index(DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS);
                    black_box(index.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("linear_n{}", n), |b| {
            b.iter_batched(
                || field.clone(),
                |field| {
                    let scan = field.linear_scan();
                    black_box(scan.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_point_probes(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_probes");
    for &n in &[100usize, 400, 1600] {
        let field = scattered_field(n);
        group.throughput(Throughput::Elements(256));
        group.bench_function(format!("quadtree_n{}", n), |b| {
            b.iter_batched(
                || field.spacing_index(DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS),
                |index| {
                    black_box(probe_storm_tree(&field, &index));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("linear_n{}", n), |b| {
            b.iter_batched(
                || field.linear_scan(),
                |scan| {
                    let mut total = 0usize;
                    for q in 0..256 {
                        let at = Point::new((q % 16) as f64 * 75.0, (q / 16) as f64 * 50.0);
                        total += scan.query_point(at.x, at.y).count();
                    }
                    black_box(total);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_straddlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("straddlers");
    let field = straddling_field(400);
    group.throughput(Throughput::Elements(256));
    group.bench_function("quadtree_probes", |b| {
        b.iter_batched(
            || field.spacing_index(DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS),
            |index| {
                black_box(probe_storm_tree(&field, &index));
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("linear_probes", |b| {
        b.iter_batched(
            || field.linear_scan(),
            |scan| {
                let mut total = 0usize;
                for q in 0..256 {
                    let at = Point::new((q % 16) as f64 * 75.0, (q / 16) as f64 * 50.0);
                    total += scan.query_point(at.x, at.y).count();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_raw_inserts,
    bench_build,
    bench_point_probes,
    bench_straddlers,
);
criterion_main!(benches);
