// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe --heading-base-level=0

//! Loupe: a pan and pinch-zoom image viewer core.
//!
//! This crate ties the Loupe pieces together for applications that read
//! touch input on one thread and render on another:
//!
//! - [`SharedViewport`]: a mutex-guarded [`ViewportState`] that both threads
//!   hold. Renderers read a consistent [`Frame`] with [`SharedViewport::frame`].
//! - [`Viewer`]: owns the touch classifier and turns touches and lifecycle
//!   events ([`ViewerEvent`]) into viewport operations.
//! - [`ViewerConfig`]: zoom limits, pinch step and double-tap behavior,
//!   loadable from JSON.
//!
//! The building blocks are re-exported: [`loupe_view`] for the transform
//! engine, [`loupe_gesture`] for touch classification and [`loupe_quad`]
//! for vertex data.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe::{TouchPhase, Viewer, ViewerConfig, ViewerEvent};
//! use loupe::view::PixelSize;
//!
//! let config = ViewerConfig::from_json_str(r#"{ "max_scale": 4.0 }"#).unwrap();
//! let mut viewer = Viewer::new(config);
//! viewer.apply(ViewerEvent::Resize(PixelSize::new(800, 480)));
//! viewer.apply(ViewerEvent::TextureLoaded(PixelSize::new(400, 300)));
//!
//! // Render thread side.
//! let shared = viewer.shared().clone();
//! assert_eq!(shared.frame().unwrap().draw_rect.size, PixelSize::new(640, 480));
//!
//! // Input thread side: spread two fingers over the image.
//! let (a, b) = (Point::new(300.0, 240.0), Point::new(500.0, 240.0));
//! viewer.handle_touch(TouchPhase::Down, &[a], 0);
//! viewer.handle_touch(TouchPhase::Down, &[a, b], 5);
//! let spread = [Point::new(290.0, 240.0), Point::new(510.0, 240.0)];
//! assert!(viewer.handle_touch(TouchPhase::Move, &spread, 21));
//!
//! assert_eq!(shared.frame().unwrap().draw_rect.size, PixelSize::new(666, 499));
//! assert!(viewer.render_quad().is_some());
//! ```

mod config;
mod error;
mod shared;
mod viewer;

pub use loupe_gesture as gesture;
pub use loupe_quad as quad;
pub use loupe_view as view;

pub use config::{DoubleTapAction, ViewerConfig};
pub use error::ConfigError;
pub use loupe_gesture::classify::TouchPhase;
pub use loupe_quad::Quad;
pub use loupe_view::{Frame, ViewportDebugInfo, ViewportState};
pub use shared::SharedViewport;
pub use viewer::{Viewer, ViewerEvent};
