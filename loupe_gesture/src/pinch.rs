// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! A pinch is reduced to a direction per frame: the squared distance between
//! the fingers is compared with the previous frame, and the midpoint becomes
//! the zoom anchor. The magnitude of the finger movement is discarded; callers
//! apply a fixed [`crate::PinchStep`] per frame.

use kurbo::Point;

use crate::PinchEvent;

/// Tracks the finger spread of an ongoing pinch.
#[derive(Debug, Clone, Default, Copy)]
pub struct PinchState {
    last_distance_sq: Option<f64>,
}

impl PinchState {
    /// Starts a pinch from the two finger positions.
    pub fn start(&mut self, a: Point, b: Point) {
        self.last_distance_sq = Some(distance_sq(a, b));
    }

    /// Records a new frame and reports its direction.
    ///
    /// A frame whose spread is smaller than the previous one is shrinking;
    /// equal or larger spreads count as growing. Without a prior frame the
    /// spread is only recorded and `None` is returned.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchEvent> {
        let distance = distance_sq(a, b);
        let previous = self.last_distance_sq.replace(distance)?;
        Some(PinchEvent {
            anchor: a.midpoint(b),
            growing: distance >= previous,
        })
    }

    /// Forgets the current pinch.
    pub fn end(&mut self) {
        self.last_distance_sq = None;
    }

    /// Returns `true` while a pinch is being tracked.
    pub fn is_pinching(&self) -> bool {
        self.last_distance_sq.is_some()
    }
}

fn distance_sq(a: Point, b: Point) -> f64 {
    (b - a).hypot2()
}
