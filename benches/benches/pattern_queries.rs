// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `folio_pattern` queries.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use folio_pattern::{PatternConverter, TileLayout};
use kurbo::{Point, Rect};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }
}

fn grid(across: u32, down: u32, clipped: bool) -> TileLayout {
    let builder = TileLayout::builder()
        .origin(9_000_000.0, 2_000_000.0)
        .tile_grid(across, down)
        .tile_size(600.0, 800.0)
        .tile_stride(750.0, 950.0)
        .void_edges(40.0, 60.0)
        .total_size(
            600.0 * f64::from(across) - 40.0,
            800.0 * f64::from(down) - 60.0,
        )
        .starting_tile(1_000);
    let builder = if clipped {
        builder.clip_rect(Point::new(100.0, 100.0), 300.0, 400.0)
    } else {
        builder
    };
    builder.build().expect("benchmark layout is valid")
}

/// Samples spread over the layout's outer bounds plus a margin, so that a
/// realistic share of them miss.
fn samples(bounds: Rect, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg(seed);
    let area = bounds.inflate(bounds.width() * 0.1, bounds.height() * 0.1);
    (0..n)
        .map(|_| {
            Point::new(
                area.x0 + rng.next_unit() * area.width(),
                area.y0 + rng.next_unit() * area.height(),
            )
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("folio_pattern");

    for &(across, down, clipped) in &[(1_u32, 1_u32, false), (4, 1, false), (4, 1, true)] {
        let layout = grid(across, down, clipped);
        let pts = samples(layout.outer_bounds(), 4_096, 0xF0_110_0001);
        let label = format!("{across}x{down}{}", if clipped { "_clip" } else { "" });

        group.bench_with_input(BenchmarkId::new("contains", &label), &pts, |b, pts| {
            b.iter(|| pts.iter().filter(|&&pt| layout.contains(pt)).count());
        });
        group.bench_with_input(BenchmarkId::new("tile_index", &label), &pts, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .filter_map(|&pt| layout.tile_index(pt))
                    .fold(0_i64, |acc, t| acc + i64::from(t))
            });
        });
        group.bench_with_input(
            BenchmarkId::new("relative_position", &label),
            &pts,
            |b, pts| {
                b.iter(|| {
                    pts.iter()
                        .filter_map(|&pt| layout.relative_position(pt).ok())
                        .fold(0.0, |acc, p| acc + p.x + p.y)
                });
            },
        );

        let converter = PatternConverter::with_layout("bench", layout);
        group.bench_with_input(
            BenchmarkId::new("converter_relative_position", &label),
            &pts,
            |b, pts| {
                b.iter(|| {
                    pts.iter()
                        .filter_map(|&pt| converter.relative_position(pt).ok())
                        .fold(0.0, |acc, p| acc + p.x + p.y)
                });
            },
        );
    }

    group.bench_function("build", |b| {
        b.iter(|| black_box(grid(black_box(4), 2, true)));
    });

    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
