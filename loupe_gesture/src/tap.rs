// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition with temporal and spatial tolerance.
//!
//! ```
//! use kurbo::Point;
//! use loupe_gesture::tap::{TapConfig, TapState};
//!
//! let mut taps = TapState::new(TapConfig::default());
//! assert!(!taps.on_tap(Point::new(100.0, 100.0), 1_000));
//! assert!(taps.on_tap(Point::new(104.0, 98.0), 1_180));
//!
//! // A completed double tap does not chain into the next one.
//! assert!(!taps.on_tap(Point::new(104.0, 98.0), 1_300));
//! ```

use kurbo::Point;

/// Tolerances for pairing two taps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapConfig {
    /// Longest gap between the two taps, in milliseconds.
    pub max_interval_ms: u64,
    /// Largest distance between the two taps, in touch-space pixels.
    pub slop: f64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            max_interval_ms: 300,
            slop: 24.0,
        }
    }
}

/// Pairs consecutive taps into double taps.
#[derive(Debug, Clone, Copy, Default)]
pub struct TapState {
    config: TapConfig,
    pending: Option<(Point, u64)>,
}

impl TapState {
    /// Creates a recognizer with the given tolerances.
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    /// Returns the tolerances in use.
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Registers a completed tap at `pos`, returning `true` if it finishes a
    /// double tap.
    ///
    /// Timestamps are expected to be monotonic; a timestamp earlier than the
    /// pending tap starts a new pair.
    pub fn on_tap(&mut self, pos: Point, time_ms: u64) -> bool {
        if let Some((first_pos, first_time)) = self.pending.take()
            && let Some(elapsed) = time_ms.checked_sub(first_time)
            && elapsed <= self.config.max_interval_ms
            && (pos - first_pos).hypot2() <= self.config.slop * self.config.slop
        {
            return true;
        }
        self.pending = Some((pos, time_ms));
        false
    }

    /// Drops any pending first tap.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
