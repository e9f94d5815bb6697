// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use loupe::view::PixelSize;
use loupe::{TouchPhase, Viewer, ViewerEvent};
use loupe_gesture::classify::TouchClassifier;

/// One touch frame: phase, pointer positions and timestamp.
type TouchFrame = (TouchPhase, Vec<Point>, u64);

/// A drag followed by a two-finger spread and release, `moves` frames each.
fn trace(moves: usize) -> Vec<TouchFrame> {
    let mut frames = Vec::with_capacity(moves * 2 + 4);
    let mut t = 0;
    let mut tick = || {
        t += 16;
        t
    };
    let start = Point::new(900.0, 500.0);
    frames.push((TouchPhase::Down, vec![start], tick()));
    for i in 0..moves {
        let x = 900.0 - (i % 40) as f64 * 6.0;
        frames.push((TouchPhase::Move, vec![Point::new(x, 500.0)], tick()));
    }
    let (a, b) = (Point::new(860.0, 540.0), Point::new(1060.0, 540.0));
    frames.push((TouchPhase::Down, vec![a, b], tick()));
    for i in 0..moves {
        // Spread for a while, then pinch back in.
        let spread = ((i % 60) as f64 - 30.0).abs() * 4.0;
        frames.push((
            TouchPhase::Move,
            vec![Point::new(a.x - spread, a.y), Point::new(b.x + spread, b.y)],
            tick(),
        ));
    }
    frames.push((TouchPhase::Up, vec![a, b], tick()));
    frames
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/classify");

    for moves in [64usize, 512, 4_096] {
        let frames = trace(moves);
        group.throughput(Throughput::Elements(frames.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(moves), &frames, |b, frames| {
            b.iter_batched(
                TouchClassifier::default,
                |mut classifier| {
                    let mut gestures = 0_usize;
                    for (phase, pointers, time) in frames {
                        if classifier.on_touch(*phase, pointers, *time).is_some() {
                            gestures += 1;
                        }
                    }
                    black_box(gestures);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_viewer(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/viewer");

    // Classification plus the locked viewport update for every frame.
    for moves in [64usize, 512, 4_096] {
        let frames = trace(moves);
        group.throughput(Throughput::Elements(frames.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(moves), &frames, |b, frames| {
            b.iter_batched(
                || {
                    let viewer = Viewer::default();
                    viewer.apply(ViewerEvent::Resize(PixelSize::new(1920, 1080)));
                    viewer.apply(ViewerEvent::TextureLoaded(PixelSize::new(4000, 3000)));
                    viewer
                },
                |mut viewer| {
                    for (phase, pointers, time) in frames {
                        viewer.handle_touch(*phase, pointers, *time);
                    }
                    black_box(viewer.render_quad());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_viewer);
criterion_main!(benches);
