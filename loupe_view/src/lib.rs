// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_view --heading-base-level=0

//! Loupe View: placement of a single texture inside a fixed viewport.
//!
//! This crate provides a small, headless model of an image shown in a
//! viewport that can be panned and pinch-zoomed. It focuses on:
//! - Integer pixel geometry with aspect-fit and centering helpers.
//! - The *draw rect*: where the scaled texture sits in viewport pixels.
//! - Pan that never lets an image edge recede past the viewport edge.
//! - Zoom around an anchor point, bounded below by the fit scale and above
//!   by a configurable maximum.
//!
//! It does **not** decode images, own GPU resources, or classify touches.
//! Callers are expected to:
//! - Turn raw touches into pan deltas and pinch steps at a higher layer (see
//!   `loupe_gesture`).
//! - Gate those gestures on [`ViewportState::hit_test`].
//! - Read a [`Frame`] each frame and turn it into vertex data (see
//!   `loupe_quad`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_view::{PixelPoint, PixelSize, ScaleLimits, ViewportState};
//!
//! // 800x480 landscape viewport showing a 400x300 texture.
//! let mut view = ViewportState::new(
//!     PixelSize::new(800, 480),
//!     PixelSize::new(400, 300),
//!     ScaleLimits::default(),
//! )
//! .unwrap();
//!
//! // Fitted by height and centered horizontally.
//! assert_eq!(view.draw_rect().size, PixelSize::new(640, 480));
//! assert_eq!(view.draw_rect().origin, PixelPoint::new(80, 0));
//!
//! // Zoom in around the touched texel, then drag.
//! if let Some(anchor) = view.hit_test(Point::new(400.0, 240.0)) {
//!     view.zoom(1.04, anchor);
//!     view.pan(Vec2::new(-12.0, 4.0));
//! }
//! assert!(view.current_scale() > view.fit_scale());
//! ```
//!
//! ## Design notes
//!
//! - Scaling is uniform; the current scale is the draw-rect width divided by
//!   the texture width.
//! - Fitting matches the viewport's height when it is wider than tall and
//!   its width otherwise. Extreme aspect ratios can therefore overflow the
//!   other axis; such axes are clamped like any zoomed-in axis.
//! - A state is built for one viewport/texture pair. Resizing means building
//!   a new one.
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod limits;
mod viewport;

pub use geometry::{PixelPoint, PixelRect, PixelSize};
pub use limits::ScaleLimits;
pub use viewport::{Frame, ViewportDebugInfo, ViewportState};
