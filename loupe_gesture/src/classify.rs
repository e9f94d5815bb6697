// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-count based classification of raw touch frames.
//!
//! [`TouchClassifier`] receives every touch frame the platform delivers and
//! turns it into at most one [`Gesture`]:
//! - One pointer: drags become [`Gesture::Pan`], two quick taps a
//!   [`Gesture::DoubleTap`].
//! - Two pointers: each move becomes a [`Gesture::Pinch`] frame.
//! - Any other pointer count is ignored.
//!
//! When a pinch ends with one finger still down, the first one-finger move
//! afterwards is swallowed. Its delta would otherwise span the whole pinch and
//! make the image jump. Only pinch frames that took effect should arm this;
//! a consumer that drops a pinch frame (for example because it missed the
//! image) reports it with [`TouchClassifier::pinch_missed`].

use kurbo::Point;

use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::tap::{TapConfig, TapState};
use crate::{DoubleTapEvent, Gesture, PanEvent};

/// Lifecycle phase of a touch frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger went down.
    Down,
    /// One or more fingers moved.
    Move,
    /// A finger lifted.
    Up,
    /// The platform aborted the touch sequence.
    Cancel,
}

/// Turns raw touch frames into pan, pinch and double-tap gestures.
#[derive(Debug, Clone, Default)]
pub struct TouchClassifier {
    drag: DragState,
    pinch: PinchState,
    taps: TapState,
    skip_next_pan: bool,
    skip_before_pinch: bool,
    tap_candidate: bool,
}

impl TouchClassifier {
    /// Creates a classifier using `tap` to recognize double taps.
    pub fn new(tap: TapConfig) -> Self {
        Self {
            taps: TapState::new(tap),
            ..Self::default()
        }
    }

    /// Classifies one touch frame.
    ///
    /// `pointers` holds the positions of all fingers currently on the surface,
    /// including a finger that is lifting on [`TouchPhase::Up`].
    /// `time_ms` is a monotonic timestamp used for double-tap timing.
    pub fn on_touch(
        &mut self,
        phase: TouchPhase,
        pointers: &[Point],
        time_ms: u64,
    ) -> Option<Gesture> {
        if phase == TouchPhase::Cancel {
            self.reset();
            return None;
        }
        match *pointers {
            [pos] => self.one_finger(phase, pos, time_ms),
            [a, b] => self.two_fingers(phase, a, b),
            _ => {
                log::trace!("ignoring touch frame with {} pointers", pointers.len());
                None
            }
        }
    }

    /// Drops all tracking state.
    pub fn reset(&mut self) {
        self.drag.end();
        self.pinch.end();
        self.taps.reset();
        self.skip_next_pan = false;
        self.skip_before_pinch = false;
        self.tap_candidate = false;
    }

    /// Withdraws the pan skip armed by the last pinch frame.
    ///
    /// Call this when the most recent [`Gesture::Pinch`] was not applied. The
    /// skip flag returns to what it was before that frame, so an earlier pinch
    /// frame that did apply still swallows the next pan.
    pub fn pinch_missed(&mut self) {
        self.skip_next_pan = self.skip_before_pinch;
    }

    /// Returns `true` while a pinch is being tracked.
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_pinching()
    }

    fn one_finger(&mut self, phase: TouchPhase, pos: Point, time_ms: u64) -> Option<Gesture> {
        match phase {
            TouchPhase::Down => {
                self.drag.start(pos);
                self.pinch.end();
                self.tap_candidate = true;
                None
            }
            TouchPhase::Move => {
                if !self.drag.is_dragging() {
                    self.drag.start(pos);
                    return None;
                }
                if self.drag.moved_beyond(pos, self.taps.config().slop) {
                    self.tap_candidate = false;
                }
                let delta = self.drag.update(pos)?;
                if self.skip_next_pan {
                    self.skip_next_pan = false;
                    log::debug!("swallowing first pan after pinch: {delta:?}");
                    return None;
                }
                Some(Gesture::Pan(PanEvent {
                    position: pos,
                    delta,
                }))
            }
            TouchPhase::Up => {
                let is_tap =
                    self.tap_candidate && !self.drag.moved_beyond(pos, self.taps.config().slop);
                self.drag.end();
                self.pinch.end();
                self.tap_candidate = false;
                self.skip_next_pan = false;
                (is_tap && self.taps.on_tap(pos, time_ms))
                    .then_some(Gesture::DoubleTap(DoubleTapEvent { position: pos }))
            }
            TouchPhase::Cancel => None,
        }
    }

    fn two_fingers(&mut self, phase: TouchPhase, a: Point, b: Point) -> Option<Gesture> {
        self.tap_candidate = false;
        self.taps.reset();
        match phase {
            TouchPhase::Down => {
                self.pinch.start(a, b);
                None
            }
            TouchPhase::Move => {
                let event = self.pinch.update(a, b)?;
                self.skip_before_pinch = self.skip_next_pan;
                self.skip_next_pan = true;
                Some(Gesture::Pinch(event))
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                self.pinch.end();
                None
            }
        }
    }
}
