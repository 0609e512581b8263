// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End‑to‑end tests for `ZoomView`.
//!
//! Animation frames are driven by a virtual clock: the test loop advances
//! time by whatever delay the view asks for and calls `frame()` until it
//! stops asking.

use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use understory_zoom::{AxisCheck, bounds_correction};
use understory_zoom_gesture::{PointerPhase, ScaleGesture, ZoomEffects, ZoomView};

/// Runs scheduled frames to completion, returning elapsed virtual time and
/// the number of frames.
fn drive(view: &mut ZoomView, mut fx: ZoomEffects) -> (Duration, usize) {
    let mut now = Duration::ZERO;
    let mut frames = 0;
    while let Some(delay) = fx.next_frame {
        now += delay;
        frames += 1;
        assert!(frames < 1_000, "animation did not terminate");
        fx = view.frame();
    }
    (now, frames)
}

fn view(viewport: Size, content: Size) -> ZoomView {
    let mut view = ZoomView::default();
    view.set_viewport(viewport);
    view.set_content(Some(content));
    view
}

fn assert_in_bounds(view: &ZoomView) {
    let rect = view.content_rect().unwrap();
    let viewport = view.viewport().unwrap();
    let delta = bounds_correction(rect, viewport, AxisCheck::BOTH);
    assert!(
        delta.x.abs() < 1e-6 && delta.y.abs() < 1e-6,
        "content {rect:?} out of policy by {delta:?}"
    );
}

#[test]
fn fit_scenarios() {
    let v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));
    let t = v.thresholds().unwrap();
    assert_eq!((t.init_scale, t.double_tap_scale, t.max_scale), (0.5, 1.0, 2.0));

    let v = view(Size::new(400.0, 400.0), Size::new(200.0, 200.0));
    assert_eq!(v.thresholds().unwrap().init_scale, 2.0);
    assert_in_bounds(&v);
}

#[test]
fn double_tap_toggles_in_and_out() {
    let mut v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));
    let tap = Point::new(120.0, 380.0);

    let fx = v.double_tap(tap);
    let (elapsed, frames) = drive(&mut v, fx);
    assert!((v.transform().scale() - 1.0).abs() < 1e-3);
    assert_eq!(elapsed, Duration::from_millis(16) * u32::try_from(frames).unwrap());
    assert!(!v.is_animating());
    assert_in_bounds(&v);

    let fx = v.double_tap(tap);
    drive(&mut v, fx);
    assert!((v.transform().scale() - 0.5).abs() < 1e-3);
    assert_in_bounds(&v);
}

#[test]
fn repeated_double_taps_return_to_fit_scale() {
    // Fit scales of 320 / width, none of them powers of two.
    for width in (330_u32..2_000).step_by(37) {
        let mut v = view(Size::new(320.0, 480.0), Size::new(f64::from(width), 100.0));
        let t = v.thresholds().unwrap();
        assert_eq!(v.transform().scale(), t.init_scale);
        let tap = Point::new(90.0, 300.0);

        for _ in 0..3 {
            let fx = v.double_tap(tap);
            drive(&mut v, fx);
            assert_eq!(v.transform().scale(), t.double_tap_scale, "width {width}");
            assert_in_bounds(&v);

            let fx = v.double_tap(tap);
            drive(&mut v, fx);
            assert_eq!(v.transform().scale(), t.init_scale, "width {width}");
            assert_in_bounds(&v);
        }
    }
}

#[test]
fn double_tap_while_animating_is_dropped() {
    let mut v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));

    let fx = v.double_tap(Point::new(200.0, 400.0));
    assert!(fx.next_frame.is_some());
    v.frame();
    v.frame();
    assert!(v.is_animating());

    assert!(v.double_tap(Point::new(10.0, 10.0)).is_empty());

    // The original run still finishes on the double-tap scale.
    drive(
        &mut v,
        ZoomEffects {
            next_frame: Some(Duration::from_millis(16)),
            ..ZoomEffects::NONE
        },
    );
    assert!((v.transform().scale() - 1.0).abs() < 1e-9);
}

#[test]
fn pinch_clamps_to_max_exactly() {
    let mut v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));
    let focus = Point::new(200.0, 400.0);

    // Bring the scale to 1.9.
    v.scale(ScaleGesture::new(1.9 / 0.5, focus));
    assert!((v.transform().scale() - 1.9).abs() < 1e-12);

    let fx = v.scale(ScaleGesture::new(1.5, focus));
    assert!(fx.transform_changed);
    assert!((v.transform().scale() - 2.0).abs() < 1e-12);

    // Further enlarging cannot pass the ceiling.
    v.scale(ScaleGesture::new(1.5, focus));
    assert!((v.transform().scale() - 2.0).abs() < 1e-12);
}

#[test]
fn pinch_keeps_content_in_policy() {
    let mut v = view(Size::new(300.0, 500.0), Size::new(1200.0, 900.0));
    let samples = [
        (1.3, Point::new(0.0, 0.0)),
        (1.4, Point::new(300.0, 500.0)),
        (0.7, Point::new(10.0, 480.0)),
        (2.5, Point::new(150.0, 20.0)),
        (0.2, Point::new(290.0, 250.0)),
        (1.1, Point::new(75.0, 75.0)),
    ];
    let t = v.thresholds().unwrap();
    for (factor, focus) in samples {
        v.scale(ScaleGesture::new(factor, focus));
        let s = v.transform().scale();
        assert!(s >= t.init_scale - 1e-9 && s <= t.max_scale + 1e-9);
        assert_in_bounds(&v);
    }
}

#[test]
fn drag_below_slop_does_not_move() {
    let mut v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));
    v.scale(ScaleGesture::new(4.0, Point::new(200.0, 400.0)));
    let before = v.transform();

    v.pointer(PointerPhase::Down, &[Point::new(200.0, 400.0)]);
    for i in 1..=6 {
        let p = Point::new(200.0 + f64::from(i), 400.0 - f64::from(i));
        assert!(!v.pointer(PointerPhase::Move, &[p]).transform_changed);
    }
    v.pointer(PointerPhase::Up, &[]);
    assert_eq!(v.transform(), before);
}

#[test]
fn drag_above_slop_pans_and_clamps() {
    let mut v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));
    v.scale(ScaleGesture::new(4.0, Point::new(200.0, 400.0)));
    let before = v.transform().translation();

    let fx = v.pointer(PointerPhase::Down, &[Point::new(200.0, 400.0)]);
    assert_eq!(fx.disallow_intercept, Some(true));
    let fx = v.pointer(PointerPhase::Move, &[Point::new(180.0, 390.0)]);
    assert!(fx.transform_changed);
    // The content is exactly as tall as the viewport, so the upward part of
    // the drag is pulled back flush.
    assert_eq!(v.transform().translation(), before + Vec2::new(-20.0, 0.0));

    // A huge drag is stopped at the content edge.
    v.pointer(PointerPhase::Move, &[Point::new(-5_000.0, -5_000.0)]);
    let rect = v.content_rect().unwrap();
    assert!((rect.x1 - 400.0).abs() < 1e-9);
    assert!((rect.y1 - 800.0).abs() < 1e-9);

    let fx = v.pointer(PointerPhase::Up, &[]);
    assert_eq!(fx.disallow_intercept, Some(false));
}

#[test]
fn adding_a_finger_does_not_jump() {
    let mut v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));
    v.scale(ScaleGesture::new(4.0, Point::new(200.0, 400.0)));

    v.pointer(PointerPhase::Down, &[Point::new(100.0, 100.0)]);
    v.pointer(PointerPhase::Move, &[Point::new(130.0, 100.0)]);
    let before = v.transform();

    let fx = v.pointer(
        PointerPhase::Move,
        &[Point::new(130.0, 100.0), Point::new(330.0, 500.0)],
    );
    assert!(!fx.transform_changed);
    assert_eq!(v.transform(), before);
    assert_eq!(v.debug_info().pointer_count, 2);
    assert!(!v.debug_info().dragging);
}

#[test]
fn fitted_content_only_pans_on_covered_axis() {
    // At fit scale the wide content covers x exactly and is centered on y.
    let mut v = view(Size::new(400.0, 800.0), Size::new(800.0, 400.0));
    let before = v.content_rect().unwrap();

    let fx = v.pointer(PointerPhase::Down, &[Point::new(200.0, 400.0)]);
    assert_eq!(fx.disallow_intercept, Some(false));
    v.pointer(PointerPhase::Move, &[Point::new(260.0, 500.0)]);

    let after = v.content_rect().unwrap();
    assert_eq!(after, before);
}
