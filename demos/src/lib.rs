// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Loupe demos.
//!
//! Provides a scripted touch trace standing in for a platform input queue,
//! and a one-line frame printer.

use kurbo::Point;
use loupe::{Frame, Quad, TouchPhase};

/// One recorded touch frame.
#[derive(Clone, Debug)]
pub struct TouchSample {
    /// Lifecycle phase reported by the platform.
    pub phase: TouchPhase,
    /// Every finger on the surface.
    pub pointers: Vec<Point>,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

/// Builds touch traces at a fixed 16 ms frame interval.
#[derive(Debug, Default)]
pub struct TraceBuilder {
    samples: Vec<TouchSample>,
    time_ms: u64,
}

impl TraceBuilder {
    /// Appends a frame and advances the clock.
    pub fn push(&mut self, phase: TouchPhase, pointers: &[Point]) -> &mut Self {
        self.samples.push(TouchSample {
            phase,
            pointers: pointers.to_vec(),
            time_ms: self.time_ms,
        });
        self.time_ms += 16;
        self
    }

    /// Advances the clock without input.
    pub fn idle(&mut self, ms: u64) -> &mut Self {
        self.time_ms += ms;
        self
    }

    /// Two fingers around `center` moving from `from` to `to` apart in `steps`.
    pub fn pinch(&mut self, center: Point, from: f64, to: f64, steps: u32) -> &mut Self {
        let pair = |gap: f64| {
            [
                Point::new(center.x - gap / 2.0, center.y),
                Point::new(center.x + gap / 2.0, center.y),
            ]
        };
        self.push(TouchPhase::Down, &pair(from)[..1]);
        self.push(TouchPhase::Down, &pair(from));
        for i in 1..=steps {
            let gap = from + (to - from) * f64::from(i) / f64::from(steps);
            self.push(TouchPhase::Move, &pair(gap));
        }
        let end = pair(to);
        self.push(TouchPhase::Up, &end);
        self.push(TouchPhase::Up, &end[..1])
    }

    /// One finger dragged from `from` by `delta` in `steps` moves.
    pub fn drag(&mut self, from: Point, delta: kurbo::Vec2, steps: u32) -> &mut Self {
        self.push(TouchPhase::Down, &[from]);
        for i in 1..=steps {
            let pos = from + delta * (f64::from(i) / f64::from(steps));
            self.push(TouchPhase::Move, &[pos]);
        }
        self.push(TouchPhase::Up, &[from + delta])
    }

    /// Two taps at `at`.
    pub fn double_tap(&mut self, at: Point) -> &mut Self {
        self.push(TouchPhase::Down, &[at]);
        self.push(TouchPhase::Up, &[at]);
        self.idle(80);
        self.push(TouchPhase::Down, &[at]);
        self.push(TouchPhase::Up, &[at])
    }

    /// The recorded samples.
    pub fn build(&mut self) -> Vec<TouchSample> {
        core::mem::take(&mut self.samples)
    }
}

/// Formats a frame and its quad bounds on one line.
pub fn describe(frame: &Frame) -> String {
    let ndc = Quad::from_frame(frame).ndc_bounds();
    format!(
        "draw_rect={} ndc=({:.3}, {:.3})..({:.3}, {:.3})",
        frame.draw_rect, ndc.x0, ndc.y0, ndc.x1, ndc.y1
    )
}
