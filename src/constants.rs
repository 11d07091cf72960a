// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Maximum absolute difference between a candidate's aspect ratio and the
/// target ratio for the candidate to count as matching
pub const DEFAULT_ASPECT_TOLERANCE: f32 = 0.1;

/// Smallest scale the overlay can be zoomed down to
pub const MIN_OVERLAY_SCALE: f32 = 1e-3;

/// Overlay opacity when an image is first selected (half transparent)
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.5;

/// Opacity slider range
pub const MIN_OVERLAY_OPACITY: f32 = 0.0;
pub const MAX_OVERLAY_OPACITY: f32 = 1.0;

/// Rotation slider range (upper bound exclusive after wrapping)
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Directory name under the user's config dir
pub const CONFIG_DIR_NAME: &str = "eyepiece";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application version, from `git describe` at build time
pub fn app_version() -> &'static str {
    env!("GIT_VERSION")
}
