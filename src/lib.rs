// SPDX-License-Identifier: GPL-3.0-only

//! Eyepiece - camera viewfinder with a reference image overlay
//!
//! A reference picture is drawn semi-transparently over the live camera
//! preview so a drawing or a subject can be lined up against it. This crate
//! holds the platform-independent part of that screen.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Preview size selection, preview layout and overlay gestures
//! - [`backends`]: Camera device model and capture session lifecycle
//! - [`geometry`]: 2D affine matrices
//! - [`config`]: User configuration handling
//!
//! # Example
//!
//! ```
//! use eyepiece::app::format_picker::select_optimal;
//! use eyepiece::backends::camera::Resolution;
//!
//! let sizes = [Resolution::new(640, 480), Resolution::new(1920, 1080)];
//! let preview = select_optimal(&sizes, 16.0 / 9.0, 0.1).unwrap();
//! assert_eq!(preview, Resolution::new(1920, 1080));
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod geometry;

// Re-export commonly used types
pub use app::{GestureEvent, OverlayMessage, OverlayModel, SelectionPolicy, TransformState};
pub use backends::camera::{CameraManager, Resolution};
pub use config::Config;
pub use errors::{AppError, AppResult};
