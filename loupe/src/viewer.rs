// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use loupe_gesture::classify::{TouchClassifier, TouchPhase};
use loupe_gesture::{DoubleTapEvent, Gesture, PanEvent, PinchEvent};
use loupe_quad::Quad;
use loupe_view::PixelSize;

use crate::{DoubleTapAction, SharedViewport, ViewerConfig};

/// Everything that can change what the viewer shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerEvent {
    /// The drawing surface changed size.
    Resize(PixelSize),
    /// A texture finished loading.
    TextureLoaded(PixelSize),
    /// One-finger drag frame.
    Pan(PanEvent),
    /// Two-finger pinch frame.
    Pinch(PinchEvent),
    /// Two quick taps.
    DoubleTap(DoubleTapEvent),
}

impl From<Gesture> for ViewerEvent {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Pan(pan) => Self::Pan(pan),
            Gesture::Pinch(pinch) => Self::Pinch(pinch),
            Gesture::DoubleTap(tap) => Self::DoubleTap(tap),
        }
    }
}

/// Input side of an image viewer.
///
/// A `Viewer` owns the touch classifier and applies events to a
/// [`SharedViewport`]. Hand a clone of [`Viewer::shared`] to the render
/// thread; it only needs [`SharedViewport::frame`].
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    shared: SharedViewport,
    touches: TouchClassifier,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    /// Creates a viewer with no viewport or texture yet.
    ///
    /// The config is used as given; call [`ViewerConfig::validate`] first
    /// when it comes from outside the program.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            shared: SharedViewport::new(config.scale_limits()),
            touches: TouchClassifier::new(config.tap_config()),
            config,
        }
    }

    /// The config this viewer was created with.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The viewport state this viewer drives.
    pub fn shared(&self) -> &SharedViewport {
        &self.shared
    }

    /// Applies one event. Returns whether the view may have changed.
    ///
    /// Gestures that do not land on the image are dropped.
    pub fn apply(&self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::Resize(size) => {
                self.shared.resize(size);
                true
            }
            ViewerEvent::TextureLoaded(size) => {
                self.shared.texture_loaded(size);
                true
            }
            ViewerEvent::Pan(pan) => self.shared.pan_at(pan.position, pan.delta),
            ViewerEvent::Pinch(pinch) => self
                .shared
                .zoom_at(pinch.anchor, self.config.pinch_step().factor_for(&pinch)),
            ViewerEvent::DoubleTap(tap) => self.double_tap(tap.position),
        }
    }

    /// Classifies a raw touch frame and applies the resulting gesture.
    ///
    /// See [`TouchClassifier::on_touch`] for the meaning of the arguments.
    /// A pinch frame off the image does not suppress the pan that follows it.
    pub fn handle_touch(&mut self, phase: TouchPhase, pointers: &[Point], time_ms: u64) -> bool {
        let Some(gesture) = self.touches.on_touch(phase, pointers, time_ms) else {
            return false;
        };
        let applied = self.apply(gesture.into());
        if !applied && matches!(gesture, Gesture::Pinch(_)) {
            self.touches.pinch_missed();
        }
        applied
    }

    /// The quad to draw for the current frame, if the view is initialized.
    pub fn render_quad(&self) -> Option<Quad> {
        self.shared.frame().map(|frame| Quad::from_frame(&frame))
    }

    fn double_tap(&self, position: Point) -> bool {
        if self.shared.hit_test(position).is_none() {
            return false;
        }
        match self.config.double_tap {
            DoubleTapAction::Ignore => false,
            DoubleTapAction::ResetToFit => self.shared.reset_to_fit(),
            DoubleTapAction::ToggleFitMax => self.shared.toggle_fit_max(),
        }
    }
}
