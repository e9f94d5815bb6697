// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Vec2};
use loupe_view::{PixelSize, ScaleLimits, ViewportState};
use std::time::Duration;

const VIEWPORT: PixelSize = PixelSize::new(1920, 1080);

fn state(texture: PixelSize) -> ViewportState {
    ViewportState::new(VIEWPORT, texture, ScaleLimits::default()).expect("non-empty sizes")
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/pan");

    // Pans alternate direction so both clamp branches are taken.
    for len in [64usize, 512, 4_096] {
        let deltas: Vec<Vec2> = (0..len)
            .map(|i| {
                let sign = if i % 32 < 16 { 1.0 } else { -1.0 };
                Vec2::new(sign * 37.0, -sign * 11.0)
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("zoomed", len), &deltas, |b, deltas| {
            b.iter_batched(
                || {
                    let mut vp = state(PixelSize::new(4000, 3000));
                    vp.zoom_to_max_centered();
                    vp
                },
                |mut vp| {
                    for delta in deltas {
                        vp.pan(*delta);
                    }
                    black_box(vp.draw_rect());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/zoom");

    // One pinch gesture: spread to the maximum, then pinch back to fit.
    for steps in [16usize, 128, 1_024] {
        let factors: Vec<f64> = (0..steps)
            .map(|i| if i < steps / 2 { 1.04 } else { 0.96 })
            .collect();
        group.throughput(Throughput::Elements(steps as u64));

        group.bench_with_input(BenchmarkId::new("pinch", steps), &factors, |b, factors| {
            b.iter_batched(
                || state(PixelSize::new(3000, 2000)),
                |mut vp| {
                    for &factor in factors {
                        let anchor = vp
                            .hit_test(Point::new(700.0, 400.0))
                            .unwrap_or_else(|| vp.draw_rect().size.center());
                        vp.zoom(factor, anchor);
                    }
                    black_box(vp.current_scale());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    c.bench_function("viewport/reset_to_fit", |b| {
        let mut vp = state(PixelSize::new(1000, 500));
        b.iter(|| {
            vp.reset_to_fit();
            black_box(vp.draw_rect());
        });
    });
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_pan, bench_zoom, bench_reset
}
criterion_main!(benches);
