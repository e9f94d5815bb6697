// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_gesture --heading-base-level=0

//! Loupe Gesture: touch classification for a pan/pinch image viewer.
//!
//! This crate turns raw multi-touch frames into the small set of typed
//! gestures a texture viewport understands. Each module handles one piece:
//!
//! - [`drag`]: One-finger position tracking with per-move deltas
//! - [`pinch`]: Two-finger spread tracking reduced to a per-frame direction
//! - [`tap`]: Double-tap recognition with time and distance tolerance
//! - [`classify`]: Pointer-count dispatch over the three trackers
//!
//! The crate does not hit-test or move anything. Gestures carry touch-space
//! positions so the consumer can decide whether they landed on the image,
//! and pinch frames carry a direction rather than a magnitude; the consumer
//! maps that to a zoom factor with [`PinchStep`].
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::{Gesture, PinchStep};
//! use loupe_gesture::classify::{TouchClassifier, TouchPhase};
//!
//! let mut touches = TouchClassifier::default();
//! let step = PinchStep::default();
//!
//! let first = Point::new(100.0, 200.0);
//! let second = Point::new(300.0, 200.0);
//! touches.on_touch(TouchPhase::Down, &[first], 0);
//! touches.on_touch(TouchPhase::Down, &[first, second], 10);
//!
//! // Fingers spread apart: a growing pinch frame anchored at their midpoint.
//! let spread = [Point::new(90.0, 200.0), Point::new(310.0, 200.0)];
//! match touches.on_touch(TouchPhase::Move, &spread, 26) {
//!     Some(Gesture::Pinch(pinch)) => {
//!         assert_eq!(pinch.anchor, Point::new(200.0, 200.0));
//!         assert_eq!(step.factor_for(&pinch), 1.04);
//!     }
//!     other => panic!("expected a pinch frame, got {other:?}"),
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod classify;
pub mod drag;
mod event;
pub mod pinch;
pub mod tap;

pub use event::{DoubleTapEvent, Gesture, PanEvent, PinchEvent, PinchStep};
