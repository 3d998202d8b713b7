// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `folio_region` resolution and stroke routing.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use folio_pattern::{PatternConverter, TileLayout};
use folio_region::{PenListener, PenRouter, PenSample, RegionEvent, RegionRegistry};
use kurbo::Point;

/// A sheet with one page-sized region and a column of small buttons on it.
fn sheet(buttons: u32) -> RegionRegistry {
    let mut regions = RegionRegistry::new();
    let page = TileLayout::single_tile(Point::new(50_000.0, 50_000.0), 4_000.0, 6_000.0)
        .expect("page layout is valid");
    regions
        .register(Arc::new(PatternConverter::with_layout("page", page)))
        .expect("names are unique");
    for i in 0..buttons {
        let y = 50_000.0 + f64::from(i) * 300.0;
        let button = TileLayout::single_tile(Point::new(54_200.0, y), 250.0, 250.0)
            .expect("button layout is valid");
        regions
            .register(Arc::new(PatternConverter::with_layout(
                format!("button{i}"),
                button,
            )))
            .expect("names are unique");
    }
    regions
}

fn stroke(n: u32) -> Vec<PenSample> {
    (0..n)
        .map(|i| {
            let t = f64::from(i);
            PenSample::new(50_100.0 + t * 3.0, 50_100.0 + t * 2.0, u64::from(i) * 8)
        })
        .collect()
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("folio_region");

    for &buttons in &[4_u32, 32] {
        let regions = sheet(buttons);
        let pt = Point::new(51_000.0, 52_000.0);
        group.bench_function(format!("resolve(regions={})", buttons + 1), |b| {
            b.iter(|| black_box(regions.resolve(black_box(pt))));
        });
        group.bench_function(format!("resolve_first(regions={})", buttons + 1), |b| {
            b.iter(|| black_box(regions.resolve_first(black_box(pt))));
        });
    }

    let samples = stroke(256);
    let mut router = PenRouter::new(sheet(8));
    router
        .listen("page", |event: &RegionEvent<'_>| {
            black_box(event.hit.position);
        })
        .expect("page is registered");
    group.bench_function("route_stroke(samples=256)", |b| {
        b.iter(|| {
            let (first, rest) = samples.split_first().expect("stroke is not empty");
            router.pen_down(first);
            for sample in rest {
                router.sample(sample);
            }
            router.pen_up(first);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
