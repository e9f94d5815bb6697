// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `loupe_view` crate.
//!
//! These drive `ViewportState` through pan and zoom sequences and check the
//! placement invariants after every step.

use kurbo::{Point, Vec2};
use loupe_view::{PixelPoint, PixelRect, PixelSize, ScaleLimits, ViewportState};

const GROW: f64 = 1.04;
const SHRINK: f64 = 0.96;

fn state(view: (u32, u32), tex: (u32, u32)) -> ViewportState {
    ViewportState::new(
        PixelSize::new(view.0, view.1),
        PixelSize::new(tex.0, tex.1),
        ScaleLimits::default(),
    )
    .unwrap()
}

fn center_anchor(vp: &ViewportState) -> PixelPoint {
    vp.draw_rect().size.center()
}

/// Overflowing axes stay inside `[-(size - view), 0]`.
fn assert_edges_clamped(vp: &ViewportState) {
    let rect = vp.draw_rect();
    let view = vp.viewport().size;
    if rect.size.width > view.width {
        let overflow = i32::try_from(rect.size.width - view.width).unwrap();
        assert!(
            (-overflow..=0).contains(&rect.origin.x),
            "x origin {} outside [-{overflow}, 0]",
            rect.origin.x
        );
    }
    if rect.size.height > view.height {
        let overflow = i32::try_from(rect.size.height - view.height).unwrap();
        assert!(
            (-overflow..=0).contains(&rect.origin.y),
            "y origin {} outside [-{overflow}, 0]",
            rect.origin.y
        );
    }
}

fn assert_scale_bounded(vp: &ViewportState) {
    let scale = vp.current_scale();
    assert!(
        scale >= vp.fit_scale() - 1e-9 && scale <= vp.max_scale() + 1e-9,
        "scale {scale} outside [{}, {}]",
        vp.fit_scale(),
        vp.max_scale()
    );
}

#[test]
fn landscape_scenario_fits_by_height() {
    let vp = state((800, 480), (400, 300));
    assert!((vp.fit_scale() - 1.6).abs() < 1e-12);
    assert_eq!(
        vp.draw_rect(),
        PixelRect::new(PixelPoint::new(80, 0), PixelSize::new(640, 480))
    );
    assert_eq!(vp.current_scale(), vp.fit_scale());
}

#[test]
fn reset_to_fit_is_idempotent() {
    let mut vp = state((480, 800), (1000, 500));
    vp.zoom(GROW, center_anchor(&vp));
    vp.pan(Vec2::new(-30.0, 10.0));

    vp.reset_to_fit();
    let first = vp.debug_info();
    vp.reset_to_fit();
    let second = vp.debug_info();

    assert_eq!(first.draw_rect, second.draw_rect);
    assert_eq!(first.current_scale, second.current_scale);
    assert_eq!(first.fit_scale, second.fit_scale);
    assert_eq!(
        second.draw_rect,
        PixelRect::new(PixelPoint::new(0, 280), PixelSize::new(480, 240))
    );
}

#[test]
fn portrait_pan_clamps_to_right_edge() {
    let mut vp = state((480, 800), (1000, 500));
    while vp.draw_rect().size.width <= 600 {
        vp.zoom(GROW, center_anchor(&vp));
    }
    let width = i32::try_from(vp.draw_rect().size.width).unwrap();
    let min_x = -(width - 480);

    let before = vp.draw_rect().origin.x;
    assert!(before <= 0, "zooming about the center keeps x non-positive");
    vp.pan(Vec2::new(-50.0, 0.0));
    assert_eq!(vp.draw_rect().origin.x, (before - 50).max(min_x));

    vp.pan(Vec2::new(-10_000.0, 0.0));
    assert_eq!(vp.draw_rect().origin.x, min_x);

    vp.pan(Vec2::new(10_000.0, 0.0));
    assert_eq!(vp.draw_rect().origin.x, 0);
}

#[test]
fn fitting_axis_ignores_pan() {
    let mut vp = state((480, 800), (1000, 500));
    while vp.draw_rect().size.width <= 600 {
        vp.zoom(GROW, center_anchor(&vp));
    }
    let y = vp.draw_rect().origin.y;
    assert!(vp.draw_rect().size.height < 800);
    vp.pan(Vec2::new(0.0, -75.0));
    vp.pan(Vec2::new(0.0, 75.0));
    assert_eq!(vp.draw_rect().origin.y, y);
}

#[test]
fn fitting_axis_above_top_edge_is_pinned_by_pan() {
    // Growing about the bottom-left corner walks y upward while the height
    // still fits the 800 px viewport.
    let mut vp = state((480, 800), (1000, 500));
    for _ in 0..20 {
        let anchor = PixelPoint::new(0, i32::try_from(vp.draw_rect().size.height).unwrap());
        vp.zoom(GROW, anchor);
    }
    assert_eq!(
        vp.draw_rect(),
        PixelRect::new(PixelPoint::new(0, -7), PixelSize::new(1048, 526))
    );
    assert_eq!(vp.viewport().center_origin(vp.draw_rect().size).y, 137);

    vp.pan(Vec2::new(0.0, -5.0));
    assert_eq!(vp.draw_rect().origin, PixelPoint::new(0, 0));

    // Once at the top edge the axis stays there.
    vp.pan(Vec2::new(0.0, 40.0));
    assert_eq!(vp.draw_rect().origin.y, 0);
}

#[test]
fn shrinking_pinch_decreases_scale_until_fit() {
    let mut vp = state((800, 480), (400, 300));
    for _ in 0..3 {
        vp.zoom(GROW, center_anchor(&vp));
    }
    assert!(vp.current_scale() > vp.fit_scale());

    let mut previous = vp.current_scale();
    for _ in 0..10 {
        vp.zoom(SHRINK, center_anchor(&vp));
        let scale = vp.current_scale();
        if previous > vp.fit_scale() {
            assert!(scale < previous, "scale {scale} did not drop below {previous}");
        } else {
            assert_eq!(scale, vp.fit_scale());
        }
        previous = scale;
    }
    assert_eq!(vp.current_scale(), vp.fit_scale());
    assert_eq!(vp.draw_rect().origin, PixelPoint::new(80, 0));
}

#[test]
fn scale_stays_bounded_through_mixed_zooms() {
    let mut vp = state((800, 480), (400, 300));
    let anchors = [
        PixelPoint::new(0, 0),
        PixelPoint::new(320, 240),
        PixelPoint::new(639, 479),
        PixelPoint::new(17, 301),
    ];
    for step in 0..200_usize {
        let factor = if (step / 7) % 3 == 2 { SHRINK } else { GROW };
        vp.zoom(factor, anchors[step % anchors.len()]);
        assert_scale_bounded(&vp);
    }
}

#[test]
fn pans_keep_edges_clamped() {
    let mut vp = state((800, 480), (400, 300));
    for _ in 0..12 {
        vp.zoom(GROW, center_anchor(&vp));
    }
    let deltas = [
        Vec2::new(-40.0, -25.0),
        Vec2::new(300.0, 0.0),
        Vec2::new(-1_000.0, 1_000.0),
        Vec2::new(12.4, -7.6),
        Vec2::new(0.0, -2_000.0),
    ];
    for delta in deltas.iter().cycle().take(50) {
        vp.pan(*delta);
        assert_edges_clamped(&vp);
    }
}

#[test]
fn shrinking_zoom_reclamps_overflowing_axes() {
    let mut vp = state((800, 480), (400, 300));
    for _ in 0..12 {
        vp.zoom(GROW, PixelPoint::ZERO);
    }
    vp.pan(Vec2::new(-10_000.0, -10_000.0));
    for _ in 0..4 {
        vp.zoom(SHRINK, PixelPoint::ZERO);
        assert_edges_clamped(&vp);
    }
}

#[test]
fn centered_whenever_axis_fits() {
    let mut vp = state((800, 480), (400, 300));
    for _ in 0..5 {
        vp.zoom(GROW, center_anchor(&vp));
    }
    for _ in 0..8 {
        vp.zoom(SHRINK, PixelPoint::new(5, 5));
    }
    let rect = vp.draw_rect();
    let centered = vp.viewport().center_origin(rect.size);
    assert!(rect.size.width <= 800);
    assert_eq!(rect.origin.x, centered.x);
    assert!(rect.size.height <= 480);
    assert_eq!(rect.origin.y, centered.y);
}

#[test]
fn zoom_keeps_anchor_projection() {
    let mut vp = state((800, 480), (400, 300));
    vp.zoom(GROW, center_anchor(&vp));

    let touch = Point::new(350.0, 200.0);
    let anchor = vp.hit_test(touch).unwrap();
    let before = vp.draw_rect();
    vp.zoom(GROW, anchor);
    let after = vp.draw_rect();
    assert!(vp.current_scale() < vp.max_scale());

    let local_scale = f64::from(after.size.width) / f64::from(before.size.width);
    let projected_x = f64::from(after.origin.x) + f64::from(anchor.x) * local_scale;
    let projected_y = f64::from(after.origin.y) + f64::from(anchor.y) * local_scale;
    let expected_x = f64::from(before.origin.x + anchor.x);
    let expected_y = f64::from(before.origin.y + anchor.y);
    assert!((projected_x - expected_x).abs() <= 1.0);
    assert!((projected_y - expected_y).abs() <= 1.0);
}

#[test]
fn wide_texture_scale_range_is_not_empty() {
    // 800 > 480 so the fit matches height: 480 / 100 = 4.8, above the default max.
    let mut vp = state((800, 480), (1000, 100));
    assert!((vp.fit_scale() - 4.8).abs() < 1e-12);
    assert_eq!(vp.max_scale(), vp.fit_scale());
    assert_eq!(vp.draw_rect().origin, PixelPoint::new(-2000, 0));
    assert_edges_clamped(&vp);

    vp.zoom(GROW, PixelPoint::new(100, 100));
    assert_scale_bounded(&vp);
    assert_eq!(vp.draw_rect().size, PixelSize::new(4800, 480));

    vp.pan(Vec2::new(-5_000.0, 0.0));
    assert_eq!(vp.draw_rect().origin.x, -4000);
}
