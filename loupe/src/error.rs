// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Reasons a [`crate::ViewerConfig`] is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON text could not be read as a config.
    #[error("malformed viewer config: {0}")]
    Parse(#[from] serde_json::Error),

    /// `max_scale` is zero, negative, or not finite.
    #[error("max_scale must be a positive finite number, got {0}")]
    InvalidMaxScale(f64),

    /// `pinch_grow` would not enlarge the image.
    #[error("pinch_grow must be a finite number greater than 1, got {0}")]
    InvalidGrowStep(f64),

    /// `pinch_shrink` would not shrink the image.
    #[error("pinch_shrink must be between 0 and 1 (exclusive), got {0}")]
    InvalidShrinkStep(f64),

    /// `double_tap_interval_ms` is zero.
    #[error("double_tap_interval_ms must be greater than 0")]
    InvalidTapInterval,

    /// `double_tap_slop` is negative or not finite.
    #[error("double_tap_slop must be a non-negative finite number, got {0}")]
    InvalidTapSlop(f64),
}
