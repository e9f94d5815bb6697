// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_gesture::PinchStep;
use loupe_gesture::tap::TapConfig;
use loupe_view::ScaleLimits;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// What a double tap on the image does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleTapAction {
    /// Double taps are recognized but have no effect.
    Ignore,
    /// Return to the fitted, centered view.
    #[default]
    ResetToFit,
    /// Jump to maximum magnification when fitted, otherwise back to fit.
    ToggleFitMax,
}

/// Tunables for a [`crate::Viewer`].
///
/// Missing fields take their defaults when deserializing, so a config file
/// only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Maximum ratio of draw-rect width to texture width.
    pub max_scale: f64,
    /// Zoom factor applied for each growing pinch frame.
    pub pinch_grow: f64,
    /// Zoom factor applied for each shrinking pinch frame.
    pub pinch_shrink: f64,
    /// Reaction to a double tap on the image.
    pub double_tap: DoubleTapAction,
    /// Longest gap between the taps of a double tap.
    pub double_tap_interval_ms: u64,
    /// Largest distance between the taps of a double tap, in touch pixels.
    pub double_tap_slop: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let step = PinchStep::default();
        let tap = TapConfig::default();
        Self {
            max_scale: ScaleLimits::DEFAULT_MAX,
            pinch_grow: step.grow,
            pinch_shrink: step.shrink,
            double_tap: DoubleTapAction::default(),
            double_tap_interval_ms: tap.max_interval_ms,
            double_tap_slop: tap.slop,
        }
    }
}

impl ViewerConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            return Err(ConfigError::InvalidMaxScale(self.max_scale));
        }
        if !(self.pinch_grow.is_finite() && self.pinch_grow > 1.0) {
            return Err(ConfigError::InvalidGrowStep(self.pinch_grow));
        }
        if !(self.pinch_shrink > 0.0 && self.pinch_shrink < 1.0) {
            return Err(ConfigError::InvalidShrinkStep(self.pinch_shrink));
        }
        if self.double_tap_interval_ms == 0 {
            return Err(ConfigError::InvalidTapInterval);
        }
        if !(self.double_tap_slop.is_finite() && self.double_tap_slop >= 0.0) {
            return Err(ConfigError::InvalidTapSlop(self.double_tap_slop));
        }
        Ok(())
    }

    /// Scale limits for viewport states built under this config.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.max_scale)
    }

    /// Per-frame pinch zoom factors.
    #[must_use]
    pub fn pinch_step(&self) -> PinchStep {
        PinchStep {
            grow: self.pinch_grow,
            shrink: self.pinch_shrink,
        }
    }

    /// Double-tap tolerances for the touch classifier.
    #[must_use]
    pub fn tap_config(&self) -> TapConfig {
        TapConfig {
            max_interval_ms: self.double_tap_interval_ms,
            slop: self.double_tap_slop,
        }
    }
}
