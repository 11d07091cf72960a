// SPDX-License-Identifier: GPL-3.0-only

//! Reference image overlay
//!
//! The overlay is a user-selected picture drawn semi-transparently over the
//! live preview so it can be lined up with the camera image. [`OverlayModel`]
//! owns its [`TransformState`] and folds [`OverlayMessage`]s into it.

pub mod transform;

pub use transform::{
    GestureEvent, TransformState, apply, apply_all, apply_reporting, set_opacity, set_rotation,
    try_set_opacity, try_set_rotation, wrap_degrees,
};

use crate::backends::camera::types::Resolution;
use crate::config::Config;
use tracing::{debug, info};

/// Input to the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayMessage {
    /// One tick from the pan/zoom/rotate recognizer
    Gesture(GestureEvent),
    /// Rotation slider moved
    SetRotation(f32),
    /// Transparency slider moved
    SetOpacity(f32),
    /// Switch between rotation-aware and plain panning
    SetRotationAware(bool),
    /// Put the image back where it started, keeping the opacity
    Reset,
}

/// Overlay state owned by the viewfinder screen
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayModel {
    pub transform: TransformState,
    pub rotation_aware: bool,
    /// Size of the selected image; `None` until the user picks one
    pub image_size: Option<Resolution>,
}

impl Default for OverlayModel {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl OverlayModel {
    pub fn from_config(config: &Config) -> Self {
        Self {
            transform: TransformState::with_opacity(config.default_opacity),
            rotation_aware: config.rotation_aware_pan,
            image_size: None,
        }
    }

    /// Check whether an image is currently shown
    pub fn has_image(&self) -> bool {
        self.image_size.is_some()
    }

    /// Show a newly selected image, starting from an untransformed layout
    pub fn select_image(&mut self, size: Resolution) {
        info!(size = %size, "Overlay image selected");
        self.image_size = Some(size);
        self.reset();
    }

    /// Remove the overlay image
    pub fn clear_image(&mut self) {
        info!("Overlay image cleared");
        self.image_size = None;
    }

    pub fn update(&mut self, message: OverlayMessage) {
        match message {
            OverlayMessage::Gesture(event) => self.handle_gesture(event),
            OverlayMessage::SetRotation(degrees) => {
                self.transform = set_rotation(self.transform, degrees);
            }
            OverlayMessage::SetOpacity(opacity) => {
                self.transform = set_opacity(self.transform, opacity);
            }
            OverlayMessage::SetRotationAware(enabled) => {
                debug!(enabled, "Rotation-aware panning toggled");
                self.rotation_aware = enabled;
            }
            OverlayMessage::Reset => self.reset(),
        }
    }

    fn handle_gesture(&mut self, event: GestureEvent) {
        // Gestures are only recognized on a visible image
        if !self.has_image() {
            debug!("Ignoring gesture without overlay image");
            return;
        }
        self.transform = apply(self.transform, event, self.rotation_aware);
    }

    fn reset(&mut self) {
        self.transform = TransformState::with_opacity(self.transform.opacity);
    }
}
