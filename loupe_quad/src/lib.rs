// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_quad --heading-base-level=0

//! Loupe Quad: vertex data for drawing a texture into its draw rect.
//!
//! A [`Frame`] describes where the scaled texture sits in viewport pixels.
//! This crate converts it into the four vertices of a textured quad:
//! - Positions in normalized device coordinates, `x' = 2x/width - 1`, with the
//!   Y axis flipped so that viewport row `0` maps to `+1`.
//! - Texture coordinates `u = x/texture_width`, `v = y/texture_height`.
//!
//! Vertices are ordered top-left, bottom-left, top-right, bottom-right, which
//! draws as a two-triangle strip. Nothing here talks to a graphics API; upload
//! [`Quad::positions`] and [`Quad::tex_coords`] (or [`Quad::interleaved`])
//! with whatever backend is in use.
//!
//! ## Example
//!
//! ```rust
//! use loupe_quad::Quad;
//! use loupe_view::{PixelSize, ScaleLimits, ViewportState};
//!
//! let view = ViewportState::new(
//!     PixelSize::new(800, 480),
//!     PixelSize::new(400, 300),
//!     ScaleLimits::default(),
//! )
//! .unwrap();
//!
//! let quad = Quad::from_frame(&view.frame());
//! // The fitted image spans the full height and 80% of the width.
//! assert_eq!(quad.positions[0], [-0.8, 1.0, 0.0]);
//! assert_eq!(quad.positions[3], [0.8, -1.0, 0.0]);
//! assert_eq!(quad.tex_coords[3], [1.0, 1.0]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Rect;
use loupe_view::{Frame, PixelRect, PixelSize};

/// Number of vertices in a [`Quad`].
pub const QUAD_VERTEX_COUNT: usize = 4;

/// A textured quad ready to be drawn as a triangle strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// Vertex positions in normalized device coordinates, `z = 0`.
    pub positions: [[f32; 3]; QUAD_VERTEX_COUNT],
    /// Texture coordinates matching [`Quad::positions`].
    pub tex_coords: [[f32; 2]; QUAD_VERTEX_COUNT],
}

impl Quad {
    /// Builds the quad that maps the whole texture onto the frame's draw rect.
    #[must_use]
    pub fn from_frame(frame: &Frame) -> Self {
        let texture = PixelRect::from_size(frame.texture_size);
        Self::from_parts(frame.draw_rect, frame.viewport.size, texture, frame.texture_size)
    }

    /// Builds a quad mapping `region` of a texture onto `draw_rect`.
    ///
    /// `viewport` and `texture_size` must not have zero dimensions.
    #[must_use]
    pub fn from_parts(
        draw_rect: PixelRect,
        viewport: PixelSize,
        region: PixelRect,
        texture_size: PixelSize,
    ) -> Self {
        let ndc = ndc_rect(draw_rect, viewport);
        let uv = uv_rect(region, texture_size);
        Self {
            positions: corners(ndc).map(|[x, y]| [x, y, 0.0]),
            tex_coords: corners(uv),
        }
    }

    /// Bounding rect of the positions in normalized device coordinates.
    ///
    /// `y0` is the top edge, so `y0 > y1` for any non-empty quad.
    #[must_use]
    pub fn ndc_bounds(&self) -> Rect {
        let [top_left, _, _, bottom_right] = self.positions;
        Rect::new(
            f64::from(top_left[0]),
            f64::from(top_left[1]),
            f64::from(bottom_right[0]),
            f64::from(bottom_right[1]),
        )
    }

    /// Bounding rect of the texture coordinates.
    #[must_use]
    pub fn uv_bounds(&self) -> Rect {
        let [top_left, _, _, bottom_right] = self.tex_coords;
        Rect::new(
            f64::from(top_left[0]),
            f64::from(top_left[1]),
            f64::from(bottom_right[0]),
            f64::from(bottom_right[1]),
        )
    }

    /// Vertices as `x, y, z, u, v` runs, in strip order.
    #[must_use]
    pub fn interleaved(&self) -> [f32; QUAD_VERTEX_COUNT * 5] {
        let mut out = [0.0; QUAD_VERTEX_COUNT * 5];
        for (i, (pos, uv)) in self.positions.iter().zip(&self.tex_coords).enumerate() {
            out[i * 5..i * 5 + 3].copy_from_slice(pos);
            out[i * 5 + 3..i * 5 + 5].copy_from_slice(uv);
        }
        out
    }
}

/// Maps a viewport-pixel X coordinate to normalized device space.
#[must_use]
pub fn ndc_x(x: f64, viewport_width: f64) -> f64 {
    2.0 * x / viewport_width - 1.0
}

/// Maps a viewport-pixel Y coordinate to normalized device space.
///
/// Viewport rows grow downward while device Y grows upward.
#[must_use]
pub fn ndc_y(y: f64, viewport_height: f64) -> f64 {
    -(2.0 * y / viewport_height - 1.0)
}

/// `draw_rect` in normalized device coordinates, top edge in `y0`.
fn ndc_rect(draw_rect: PixelRect, viewport: PixelSize) -> Rect {
    let (w, h) = (f64::from(viewport.width), f64::from(viewport.height));
    let r = draw_rect.to_kurbo();
    Rect::new(ndc_x(r.x0, w), ndc_y(r.y0, h), ndc_x(r.x1, w), ndc_y(r.y1, h))
}

/// `region` in normalized texture coordinates.
fn uv_rect(region: PixelRect, texture_size: PixelSize) -> Rect {
    let texture = texture_size.to_kurbo();
    let r = region.to_kurbo();
    Rect::new(
        r.x0 / texture.width,
        r.y0 / texture.height,
        r.x1 / texture.width,
        r.y1 / texture.height,
    )
}

/// Corners of `r` in strip order, treating `(x0, y0)` as the top-left corner.
fn corners(r: Rect) -> [[f32; 2]; QUAD_VERTEX_COUNT] {
    [
        [to_f32(r.x0), to_f32(r.y0)],
        [to_f32(r.x0), to_f32(r.y1)],
        [to_f32(r.x1), to_f32(r.y0)],
        [to_f32(r.x1), to_f32(r.y1)],
    ]
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "vertex buffers consume f32; precision loss from f64 geometry is acceptable"
)]
fn to_f32(v: f64) -> f32 {
    v as f32
}
