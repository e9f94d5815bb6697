// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::geometry::{PixelPoint, PixelRect, PixelSize, round_to_pixel, signed};
use crate::limits::ScaleLimits;

/// Placement of a texture inside a fixed viewport.
///
/// `ViewportState` tracks the rectangle, in viewport pixels, that the scaled
/// texture currently occupies (the *draw rect*) together with the scale
/// factors that bound it. It can be used to:
/// - Fit and center the whole texture ([`ViewportState::reset_to_fit`]).
/// - Pan the draw rect without letting an image edge recede past the
///   viewport edge ([`ViewportState::pan`]).
/// - Zoom around an anchor point between the fit scale and the maximum
///   scale ([`ViewportState::zoom`]).
/// - Map touch points onto the texture ([`ViewportState::hit_test`]).
///
/// The viewport and texture sizes are fixed for the lifetime of a value;
/// build a new state when either changes.
#[derive(Clone, Debug)]
pub struct ViewportState {
    viewport: PixelRect,
    texture_size: PixelSize,
    draw_rect: PixelRect,
    fit_scale: f64,
    current_scale: f64,
    limits: ScaleLimits,
}

impl ViewportState {
    /// Creates a state with the texture fitted and centered in the viewport.
    ///
    /// Returns `None` if either size has a zero dimension; there is no
    /// meaningful fit for a degenerate viewport or texture.
    #[must_use]
    pub fn new(
        viewport_size: PixelSize,
        texture_size: PixelSize,
        limits: ScaleLimits,
    ) -> Option<Self> {
        if viewport_size.is_empty() || texture_size.is_empty() {
            return None;
        }
        let mut state = Self {
            viewport: PixelRect::from_size(viewport_size),
            texture_size,
            draw_rect: PixelRect::default(),
            fit_scale: 1.0,
            current_scale: 1.0,
            limits,
        };
        state.reset_to_fit();
        Some(state)
    }

    /// Returns the viewport rectangle. Its origin is always `(0, 0)`.
    #[must_use]
    pub fn viewport(&self) -> PixelRect {
        self.viewport
    }

    /// Returns the texture size in texels.
    #[must_use]
    pub fn texture_size(&self) -> PixelSize {
        self.texture_size
    }

    /// Returns the rectangle the scaled texture occupies, in viewport pixels.
    #[must_use]
    pub fn draw_rect(&self) -> PixelRect {
        self.draw_rect
    }

    /// Returns the scale at which the whole texture fits the viewport.
    #[must_use]
    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    /// Returns the current ratio of draw-rect width to texture width.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.current_scale
    }

    /// Returns the largest scale zooming can reach for this configuration.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.limits.effective_max(self.fit_scale)
    }

    /// Returns `true` while the texture is shown at its fit scale.
    #[must_use]
    pub fn is_at_fit(&self) -> bool {
        self.current_scale <= self.fit_scale
    }

    /// Consistent snapshot of everything a renderer needs for one frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            viewport: self.viewport,
            texture_size: self.texture_size,
            draw_rect: self.draw_rect,
        }
    }

    /// Fits the whole texture into the viewport and centers it.
    ///
    /// Calling this repeatedly yields the same state.
    pub fn reset_to_fit(&mut self) {
        let size = self.viewport.aspect_fit_size(self.texture_size);
        self.draw_rect = self.viewport.centered(size);
        self.fit_scale = self.viewport.aspect_fit_scale(self.texture_size);
        self.current_scale = self.fit_scale;
        log::debug!(
            "reset to fit: draw_rect={} fit_scale={}",
            self.draw_rect,
            self.fit_scale
        );
    }

    /// Shows the texture at the maximum scale, centered in the viewport.
    pub fn zoom_to_max_centered(&mut self) {
        let max_scale = self.max_scale();
        let size = self.texture_size.rescale(max_scale);
        self.draw_rect = self.viewport.centered(size);
        self.current_scale = max_scale;
        log::debug!(
            "zoom to max: draw_rect={} scale={}",
            self.draw_rect,
            self.current_scale
        );
    }

    /// Maps a touch point onto draw-rect-local pixel coordinates.
    ///
    /// The point is snapped to the pixel containing it. Returns `None` if that
    /// pixel lies outside the draw rect; edges count as inside.
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<PixelPoint> {
        let px = PixelPoint::from_touch(pt);
        self.draw_rect
            .contains(px)
            .then(|| px - self.draw_rect.origin)
    }

    /// Pans the draw rect by a delta in viewport pixels.
    ///
    /// Each axis is handled independently:
    /// - An axis whose origin is positive is left untouched for this call.
    /// - An axis where the draw rect overflows the viewport is clamped so the
    ///   image edge never recedes past the viewport edge.
    /// - An axis where the draw rect fits is pinned to `0`. A centered axis
    ///   that reaches this branch is already at `0`; a growing zoom anchored
    ///   near an edge can leave a fitting axis at a negative origin.
    pub fn pan(&mut self, delta: Vec2) {
        let origin = self.draw_rect.origin;
        let x = pan_axis(
            origin.x,
            round_to_pixel(delta.x),
            self.draw_rect.size.width,
            self.viewport.size.width,
        );
        let y = pan_axis(
            origin.y,
            round_to_pixel(delta.y),
            self.draw_rect.size.height,
            self.viewport.size.height,
        );
        self.draw_rect.origin = PixelPoint::new(x, y);
        log::trace!("pan {delta:?}: draw_rect={}", self.draw_rect);
    }

    /// Scales the draw rect by `scale_delta` around `anchor`.
    ///
    /// `anchor` is in draw-rect-local pixels (as returned by
    /// [`ViewportState::hit_test`]); the texel under it keeps its viewport
    /// position as far as rounding and the limits allow.
    ///
    /// The result snaps back to the fit state once the implied scale drops to
    /// the fit scale, and is capped at [`ViewportState::max_scale`]. While
    /// shrinking, overflowing axes are clamped so no gap opens at an edge.
    /// Growing does not re-clamp, so a grown rect may briefly sit past an edge.
    ///
    /// Non-finite or non-positive deltas are ignored.
    pub fn zoom(&mut self, scale_delta: f64, anchor: PixelPoint) {
        if !scale_delta.is_finite() || scale_delta <= 0.0 {
            return;
        }
        let old = self.draw_rect;
        let max_scale = self.max_scale();
        let mut new_size = old.size.rescale(scale_delta);
        let implied = f64::from(new_size.width) / f64::from(self.texture_size.width);

        let (new_origin, final_scale) = if implied <= self.fit_scale {
            new_size = self.viewport.aspect_fit_size(self.texture_size);
            (self.viewport.center_origin(new_size), self.fit_scale)
        } else if implied > max_scale {
            new_size = self.texture_size.rescale(max_scale);
            (anchored_origin(old, new_size, anchor, scale_delta), max_scale)
        } else {
            (anchored_origin(old, new_size, anchor, scale_delta), implied)
        };

        let centered = self.viewport.center_origin(new_size);
        let x = self.settle_axis(
            new_origin.x,
            new_size.width,
            self.viewport.size.width,
            centered.x,
            final_scale,
        );
        let y = self.settle_axis(
            new_origin.y,
            new_size.height,
            self.viewport.size.height,
            centered.y,
            final_scale,
        );

        self.draw_rect = PixelRect::new(PixelPoint::new(x, y), new_size);
        self.current_scale = final_scale;
        log::trace!(
            "zoom x{scale_delta} at {anchor}: draw_rect={} scale={}",
            self.draw_rect,
            self.current_scale
        );
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            viewport: self.viewport,
            texture_size: self.texture_size,
            draw_rect: self.draw_rect,
            fit_scale: self.fit_scale,
            current_scale: self.current_scale,
            max_scale: self.max_scale(),
        }
    }

    fn settle_axis(&self, origin: i32, size: u32, view: u32, centered: i32, scale: f64) -> i32 {
        let (size, view) = (signed(size), signed(view));
        if size <= view {
            if scale <= self.fit_scale {
                centered
            } else {
                origin
            }
        } else if scale < self.current_scale {
            origin.clamp(-(size - view), 0)
        } else {
            origin
        }
    }
}

fn pan_axis(origin: i32, delta: i32, size: u32, view: u32) -> i32 {
    if origin > 0 {
        return origin;
    }
    let (size, view) = (signed(size), signed(view));
    if size <= view {
        return 0;
    }
    origin.saturating_add(delta).clamp(-(size - view), 0)
}

/// Origin that keeps `anchor` fixed while `old` grows or shrinks to `new_size`.
fn anchored_origin(
    old: PixelRect,
    new_size: PixelSize,
    anchor: PixelPoint,
    fallback: f64,
) -> PixelPoint {
    let local_scale = if old.size.width == 0 {
        fallback
    } else {
        f64::from(new_size.width) / f64::from(old.size.width)
    };
    let shift = |origin: i32, anchor: i32| {
        let anchor = f64::from(anchor);
        round_to_pixel(f64::from(origin) + (anchor - anchor * local_scale))
    };
    PixelPoint::new(shift(old.origin.x, anchor.x), shift(old.origin.y, anchor.y))
}

/// Everything a renderer reads for one frame.
///
/// Taking the three fields together from one [`ViewportState`] guarantees
/// they describe the same committed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Viewport rectangle, origin `(0, 0)`.
    pub viewport: PixelRect,
    /// Texture size in texels.
    pub texture_size: PixelSize,
    /// Rectangle occupied by the scaled texture, in viewport pixels.
    pub draw_rect: PixelRect,
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Viewport rectangle.
    pub viewport: PixelRect,
    /// Texture size in texels.
    pub texture_size: PixelSize,
    /// Current draw rect.
    pub draw_rect: PixelRect,
    /// Scale at which the whole texture fits.
    pub fit_scale: f64,
    /// Current scale.
    pub current_scale: f64,
    /// Effective maximum scale.
    pub max_scale: f64,
}
