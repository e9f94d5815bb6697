// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-finger drag tracking: per-move deltas and the offset since touch-down.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] when the finger goes down.
//! 2) On each move, [`DragState::update`] yields the delta since the last sample.
//! 3) [`DragState::total_offset`] tells how far the finger travelled overall,
//!    which separates taps from drags.
//! 4) Call [`DragState::end`] when the finger lifts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 40.0));
//!
//! assert_eq!(drag.update(Point::new(90.0, 45.0)), Some(Vec2::new(-10.0, 5.0)));
//! assert_eq!(drag.update(Point::new(80.0, 45.0)), Some(Vec2::new(-10.0, 0.0)));
//! assert_eq!(drag.total_offset(Point::new(80.0, 45.0)), Some(Vec2::new(-20.0, 5.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a single finger between touch-down and lift.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Where the finger went down.
    pub start_pos: Option<Point>,
    /// Last sampled finger position.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Starts tracking from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new position, returning the delta since the previous sample.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset from the touch-down position to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Returns `true` if `current_pos` is more than `slop` away from touch-down.
    pub fn moved_beyond(&self, current_pos: Point, slop: f64) -> bool {
        self.total_offset(current_pos)
            .is_some_and(|offset| offset.hypot2() > slop * slop)
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` between [`DragState::start`] and [`DragState::end`].
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
