// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_zoom::{AxisCheck, ContentTransform, Thresholds, bounds_correction};
use understory_zoom_gesture::{PointerPhase, ScaleGesture, ZoomView};

const VIEWPORT: Size = Size::new(1080.0, 2340.0);
const CONTENT: Size = Size::new(4032.0, 3024.0);

fn settled_view() -> ZoomView {
    let mut view = ZoomView::default();
    view.set_viewport(VIEWPORT);
    view.set_content(Some(CONTENT));
    view
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom/bounds");
    let thresholds = Thresholds::fit(VIEWPORT, CONTENT).unwrap();
    let mut transform = ContentTransform::fitted(VIEWPORT, CONTENT, thresholds.init_scale);
    transform.scale_about(3.0, Point::new(100.0, 100.0));
    let rect = transform.map_content_rect(CONTENT);

    group.bench_function("bounds_correction", |b| {
        b.iter(|| black_box(bounds_correction(black_box(rect), VIEWPORT, AxisCheck::BOTH)));
    });
    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom_gesture/pinch");

    for samples in [16_usize, 256] {
        // Alternate in and out so the run never parks on a bound.
        let gestures: Vec<ScaleGesture> = (0..samples)
            .map(|i| {
                let factor = if (i / 8) % 2 == 0 { 1.06 } else { 0.95 };
                ScaleGesture::new(factor, Point::new(540.0, 1170.0))
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::new("scale_samples", samples),
            &gestures,
            |b, gestures| {
                b.iter_batched(
                    settled_view,
                    |mut view| {
                        for g in gestures {
                            black_box(view.scale(*g));
                        }
                        black_box(view);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom_gesture/pan");

    for fingers in [1_usize, 2, 5] {
        group.bench_with_input(BenchmarkId::new("drag_256", fingers), &fingers, |b, &fingers| {
            b.iter_batched(
                || {
                    let mut view = settled_view();
                    view.scale(ScaleGesture::new(3.0, Point::new(540.0, 1170.0)));
                    view
                },
                |mut view| {
                    let mut pointers: Vec<Point> = (0..fingers)
                        .map(|i| Point::new(100.0 + 50.0 * i as f64, 1000.0))
                        .collect();
                    view.pointer(PointerPhase::Down, &pointers);
                    for _ in 0..256 {
                        for p in &mut pointers {
                            p.x += 12.0;
                            p.y -= 3.0;
                        }
                        black_box(view.pointer(PointerPhase::Move, &pointers));
                    }
                    view.pointer(PointerPhase::Up, &[]);
                    black_box(view);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_double_tap(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom_gesture/double_tap");
    group.bench_function("animate_in_and_out", |b| {
        b.iter_batched(
            settled_view,
            |mut view| {
                for _ in 0..2 {
                    let mut fx = view.double_tap(Point::new(300.0, 900.0));
                    while fx.next_frame.is_some() {
                        fx = view.frame();
                    }
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_bounds, bench_pinch, bench_pan, bench_double_tap);
criterion_main!(benches);
