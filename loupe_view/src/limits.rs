// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Upper bound on magnification for a [`crate::ViewportState`].
///
/// The lower bound is not configurable: it is always the fit scale of the
/// current viewport/texture pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    /// Largest allowed ratio of draw-rect width to texture width.
    pub max: f64,
}

impl ScaleLimits {
    /// Default maximum magnification.
    pub const DEFAULT_MAX: f64 = 3.0;

    /// Creates limits with the given maximum scale.
    ///
    /// Non-finite or non-positive values fall back to [`Self::DEFAULT_MAX`].
    #[must_use]
    pub fn new(max: f64) -> Self {
        if max.is_finite() && max > 0.0 {
            Self { max }
        } else {
            Self::default()
        }
    }

    /// Maximum scale once the fit scale is known.
    ///
    /// Under the viewport's fit rule the fit scale can exceed `max`; the
    /// effective maximum is then raised to the fit scale so that the scale
    /// range is never empty.
    #[must_use]
    pub fn effective_max(&self, fit_scale: f64) -> f64 {
        self.max.max(fit_scale)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            max: Self::DEFAULT_MAX,
        }
    }
}
