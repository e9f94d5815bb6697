// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport state shared between the input and render threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kurbo::{Point, Vec2};
use loupe_view::{Frame, PixelPoint, PixelSize, ScaleLimits, ViewportDebugInfo, ViewportState};

/// A cloneable handle to one viewport, guarded by a single mutex.
///
/// Every mutation and every read happens inside one critical section, so a
/// renderer calling [`SharedViewport::frame`] sees a draw rect, viewport and
/// texture size that belong together.
///
/// The viewport state exists once both a viewport size and a texture size
/// have been reported. Until then input operations do nothing and return
/// `false`, and reads return `None`.
#[derive(Clone, Debug, Default)]
pub struct SharedViewport(Arc<Mutex<Slot>>);

#[derive(Debug, Default)]
struct Slot {
    viewport: Option<PixelSize>,
    texture: Option<PixelSize>,
    limits: ScaleLimits,
    state: Option<ViewportState>,
}

impl Slot {
    fn rebuild(&mut self) {
        let (Some(viewport), Some(texture)) = (self.viewport, self.texture) else {
            self.state = None;
            return;
        };
        self.state = ViewportState::new(viewport, texture, self.limits);
        match &self.state {
            Some(state) => log::debug!(
                "viewport rebuilt: viewport={viewport} texture={texture} draw_rect={}",
                state.draw_rect()
            ),
            None => log::warn!(
                "cannot fit texture {texture} into viewport {viewport}; view left empty"
            ),
        }
    }
}

impl SharedViewport {
    /// Creates an empty viewport that will use `limits` once initialized.
    pub fn new(limits: ScaleLimits) -> Self {
        Self(Arc::new(Mutex::new(Slot {
            limits,
            ..Slot::default()
        })))
    }

    /// Records a new viewport size and refits the texture.
    pub fn resize(&self, viewport: PixelSize) {
        let mut slot = self.lock();
        slot.viewport = Some(viewport);
        slot.rebuild();
    }

    /// Records the size of a newly loaded texture and refits it.
    pub fn texture_loaded(&self, texture: PixelSize) {
        let mut slot = self.lock();
        slot.texture = Some(texture);
        slot.rebuild();
    }

    /// Returns `true` once the viewport and texture sizes are both usable.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lock().state.is_some()
    }

    /// Maps a touch point to draw-rect-local pixels. See
    /// [`ViewportState::hit_test`].
    #[must_use]
    pub fn hit_test(&self, position: Point) -> Option<PixelPoint> {
        self.lock().state.as_ref()?.hit_test(position)
    }

    /// Pans by `delta` if `position` lands on the image.
    ///
    /// The hit test and the pan share one critical section. Returns whether
    /// the pan was applied.
    pub fn pan_at(&self, position: Point, delta: Vec2) -> bool {
        self.update_at(position, |state, _| state.pan(delta))
    }

    /// Zooms by `factor` around `position` if it lands on the image.
    ///
    /// Returns whether the zoom was applied.
    pub fn zoom_at(&self, position: Point, factor: f64) -> bool {
        self.update_at(position, |state, anchor| state.zoom(factor, anchor))
    }

    /// Returns to the fitted, centered view.
    pub fn reset_to_fit(&self) -> bool {
        self.update(ViewportState::reset_to_fit)
    }

    /// Jumps to the maximum scale when fitted, otherwise back to fit.
    pub fn toggle_fit_max(&self) -> bool {
        self.update(|state| {
            if state.is_at_fit() {
                state.zoom_to_max_centered();
            } else {
                state.reset_to_fit();
            }
        })
    }

    /// Everything the renderer needs for one frame, read atomically.
    #[must_use]
    pub fn frame(&self) -> Option<Frame> {
        self.lock().state.as_ref().map(ViewportState::frame)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Option<ViewportDebugInfo> {
        self.lock().state.as_ref().map(ViewportState::debug_info)
    }

    fn update(&self, f: impl FnOnce(&mut ViewportState)) -> bool {
        match self.lock().state.as_mut() {
            Some(state) => {
                f(state);
                true
            }
            None => false,
        }
    }

    fn update_at(&self, position: Point, f: impl FnOnce(&mut ViewportState, PixelPoint)) -> bool {
        let mut slot = self.lock();
        let Some(state) = slot.state.as_mut() else {
            return false;
        };
        match state.hit_test(position) {
            Some(anchor) => {
                f(state, anchor);
                true
            }
            None => false,
        }
    }

    /// Poisoning is ignored; operations only store fully computed results.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
