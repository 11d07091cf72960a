// SPDX-License-Identifier: GPL-3.0-only

//! Viewfinder screen logic
//!
//! Everything the screen computes between the camera layer and the drawing
//! layer: which preview size to stream, how to lay the preview out, and where
//! the reference overlay sits.
//!
//! # Module Structure
//!
//! - `camera_preview`: Preview buffer to view mapping
//! - `format_picker`: Preview size selection policies
//! - `overlay`: Overlay image state and gesture handling
//! - `utils`: Argument parsing helpers

pub mod camera_preview;
pub mod format_picker;
pub mod overlay;
pub mod utils;

pub use camera_preview::{PreviewTransform, preview_transform};
pub use format_picker::SelectionPolicy;
pub use overlay::{GestureEvent, OverlayMessage, OverlayModel, TransformState};
