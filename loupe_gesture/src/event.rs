// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// One-finger drag sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    /// Current finger position, used to hit-test the drag.
    pub position: Point,
    /// Displacement since the previous sample.
    pub delta: Vec2,
}

/// One frame of a two-finger pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchEvent {
    /// Midpoint between the two fingers.
    pub anchor: Point,
    /// `true` if the fingers are as far apart as or further apart than on the
    /// previous frame.
    pub growing: bool,
}

/// Two taps close together in time and space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapEvent {
    /// Position of the second tap.
    pub position: Point,
}

/// A classified touch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// One-finger drag.
    Pan(PanEvent),
    /// Two-finger pinch frame.
    Pinch(PinchEvent),
    /// Double tap.
    DoubleTap(DoubleTapEvent),
}

/// Fixed zoom factors applied per pinch frame.
///
/// Every pinch frame zooms by the same step regardless of how far the fingers
/// moved, so zoom speed depends on the frame rate of touch delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchStep {
    /// Factor applied on a growing frame. Greater than `1.0`.
    pub grow: f64,
    /// Factor applied on a shrinking frame. Between `0.0` and `1.0`.
    pub shrink: f64,
}

impl PinchStep {
    /// Returns the factor for a frame in the given direction.
    #[must_use]
    pub fn factor(&self, growing: bool) -> f64 {
        if growing { self.grow } else { self.shrink }
    }

    /// Returns the factor for `event`.
    #[must_use]
    pub fn factor_for(&self, event: &PinchEvent) -> f64 {
        self.factor(event.growing)
    }
}

impl Default for PinchStep {
    fn default() -> Self {
        Self {
            grow: 1.04,
            shrink: 0.96,
        }
    }
}
