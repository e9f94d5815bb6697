// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry: sizes, points and rectangles.
//!
//! Draw rects live on the pixel grid, so these types use integers rather than
//! Kurbo's `f64` geometry. Each type converts into its Kurbo counterpart for
//! callers that want to keep working in floating point.

use core::fmt;
use core::ops::{Add, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

/// A non-negative integer size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a size from a width and a height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `width / height`.
    ///
    /// The result is infinite or NaN for a zero height.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Returns the center of a rect of this size placed at the origin.
    ///
    /// Uses truncating integer division, so odd sizes round toward zero.
    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(signed(self.width) / 2, signed(self.height) / 2)
    }

    /// Scales both dimensions by `factor`, rounding to the nearest pixel.
    #[must_use]
    pub fn rescale(self, factor: f64) -> Self {
        Self::new(
            scale_dimension(self.width, factor),
            scale_dimension(self.height, factor),
        )
    }

    /// Converts into a Kurbo size.
    #[must_use]
    pub fn to_kurbo(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An integer point in pixel space.
///
/// Coordinates are signed: a draw rect larger than the viewport has a
/// negative origin once it is panned or zoomed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl PixelPoint {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snaps a touch-space point onto the pixel grid containing it.
    #[must_use]
    pub fn from_touch(pt: Point) -> Self {
        Self::new(round_to_pixel(pt.x.floor()), round_to_pixel(pt.y.floor()))
    }

    /// Converts into a Kurbo point.
    #[must_use]
    pub fn to_kurbo(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for PixelPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for PixelPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle on the pixel grid.
///
/// `origin` is the top-left corner in the containing coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Top-left corner.
    pub origin: PixelPoint,
    /// Extent from the origin.
    pub size: PixelSize,
}

impl PixelRect {
    /// Creates a rect from an origin and a size.
    #[must_use]
    pub const fn new(origin: PixelPoint, size: PixelSize) -> Self {
        Self { origin, size }
    }

    /// Creates a rect of the given size anchored at `(0, 0)`.
    #[must_use]
    pub const fn from_size(size: PixelSize) -> Self {
        Self::new(PixelPoint::ZERO, size)
    }

    /// Right edge, inclusive of the last pixel boundary.
    #[must_use]
    pub fn max_x(&self) -> i32 {
        self.origin.x.saturating_add(signed(self.size.width))
    }

    /// Bottom edge, inclusive of the last pixel boundary.
    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.origin.y.saturating_add(signed(self.size.height))
    }

    /// Returns `true` if `pt` lies inside the rect, edges included.
    #[must_use]
    pub fn contains(&self, pt: PixelPoint) -> bool {
        (self.origin.x..=self.max_x()).contains(&pt.x)
            && (self.origin.y..=self.max_y()).contains(&pt.y)
    }

    /// Scale factor that makes `content` fit this rect.
    ///
    /// A landscape rect (wider than tall) fits by height and anything else fits
    /// by width. The comparison is on this rect's raw pixel dimensions, not on
    /// the smaller of the two ratios, so sufficiently extreme content can end
    /// up overflowing the other axis.
    ///
    /// `content` must not have a zero dimension on the axis being matched.
    #[must_use]
    pub fn aspect_fit_scale(&self, content: PixelSize) -> f64 {
        if self.size.width > self.size.height {
            f64::from(self.size.height) / f64::from(content.height)
        } else {
            f64::from(self.size.width) / f64::from(content.width)
        }
    }

    /// Size of `content` after scaling it by [`PixelRect::aspect_fit_scale`].
    #[must_use]
    pub fn aspect_fit_size(&self, content: PixelSize) -> PixelSize {
        content.rescale(self.aspect_fit_scale(content))
    }

    /// Origin that centers a rect of size `inner` inside this rect.
    ///
    /// Offsets use truncating division; an `inner` larger than this rect yields
    /// an origin before this rect's own.
    #[must_use]
    pub fn center_origin(&self, inner: PixelSize) -> PixelPoint {
        let dx = (signed(self.size.width) - signed(inner.width)) / 2;
        let dy = (signed(self.size.height) - signed(inner.height)) / 2;
        self.origin + PixelPoint::new(dx, dy)
    }

    /// A rect of size `inner` centered inside this rect.
    #[must_use]
    pub fn centered(&self, inner: PixelSize) -> Self {
        Self::new(self.center_origin(inner), inner)
    }

    /// Converts into a Kurbo rect.
    #[must_use]
    pub fn to_kurbo(&self) -> Rect {
        Rect::from_origin_size(self.origin.to_kurbo(), self.size.to_kurbo())
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.size)
    }
}

/// Converts an unsigned extent into signed pixel space, saturating at `i32::MAX`.
pub(crate) fn signed(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "value is rounded and clamped to the i32 range before casting"
)]
pub(crate) fn round_to_pixel(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to the u32 range before casting"
)]
fn scale_dimension(v: u32, factor: f64) -> u32 {
    let scaled = (f64::from(v) * factor).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, f64::from(u32::MAX)) as u32
}
