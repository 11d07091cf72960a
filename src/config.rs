// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Stored as pretty-printed JSON in `<config dir>/eyepiece/config.json`.
//! Missing fields fall back to their defaults, so older files keep loading.

use crate::app::format_picker::SelectionPolicy;
use crate::backends::camera::types::LensFacing;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ASPECT_TOLERANCE, DEFAULT_OVERLAY_OPACITY,
    MAX_OVERLAY_OPACITY, MIN_OVERLAY_OPACITY,
};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How the preview size is picked from the camera's output sizes
    pub selection_policy: SelectionPolicy,
    /// Aspect ratio tolerance used by the preview size selection
    pub aspect_tolerance: f32,
    /// Rotate pan gestures by the overlay's current rotation
    pub rotation_aware_pan: bool,
    /// Overlay opacity for a newly selected image
    pub default_opacity: f32,
    /// Camera opened at startup
    pub lens_facing: LensFacing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::default(),
            aspect_tolerance: DEFAULT_ASPECT_TOLERANCE,
            rotation_aware_pan: true,
            default_opacity: DEFAULT_OVERLAY_OPACITY,
            lens_facing: LensFacing::default(),
        }
    }
}

impl Config {
    /// Copy with out-of-range values replaced
    ///
    /// Opacity is clamped to [0, 1]; a negative or non-finite tolerance or
    /// opacity falls back to the default.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let aspect_tolerance = if self.aspect_tolerance.is_finite() && self.aspect_tolerance >= 0.0
        {
            self.aspect_tolerance
        } else {
            DEFAULT_ASPECT_TOLERANCE
        };
        let default_opacity = if self.default_opacity.is_finite() {
            self.default_opacity
                .clamp(MIN_OVERLAY_OPACITY, MAX_OVERLAY_OPACITY)
        } else {
            DEFAULT_OVERLAY_OPACITY
        };
        Self {
            aspect_tolerance,
            default_opacity,
            ..self.clone()
        }
    }
}

/// Default config file location, `None` when the platform has no config dir
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the configuration, falling back to defaults
///
/// A missing file is normal on first start; an unreadable one is logged.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), "Failed to load config, using defaults: {}", err);
            Config::default()
        }
    }
}

/// Load and sanitize configuration from a specific path
pub fn load_from_path(path: &Path) -> AppResult<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config.sanitized())
}

/// Save the configuration to the default location
pub fn save(config: &Config) -> AppResult<()> {
    match config_path() {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Save configuration to a specific path, creating parent directories
pub fn save_to_path(config: &Config, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    debug!(path = %path.display(), "Config saved");
    Ok(())
}
