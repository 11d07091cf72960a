// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! This module provides command-line access to:
//! - Preview size selection
//! - Overlay gesture folding
//! - Preview layout computation
//! - A simulated camera session
//! - Showing and writing the configuration

use eyepiece::app::format_picker::SelectionPolicy;
use eyepiece::app::overlay::{GestureEvent, TransformState, apply_all};
use eyepiece::app::preview_transform;
use eyepiece::app::utils::{parse_resolution, parse_resolution_list};
use eyepiece::backends::camera::{CameraManager, DisplayRotation, Resolution, StaticBackend};
use eyepiece::config::{self, Config};
use std::path::Path;
use tracing::info;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load the config from `path`, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(config::load_from_path(path)?),
        None => Ok(config::load()),
    }
}

fn resolution_arg(value: &str) -> Result<Resolution, Box<dyn std::error::Error>> {
    parse_resolution(value).ok_or_else(|| format!("invalid resolution '{}'", value).into())
}

/// Select a preview size and print it
pub fn select_size(
    config: &Config,
    sizes: &str,
    ratio: Option<f32>,
    display: Option<&str>,
    height: Option<u32>,
    tolerance: Option<f32>,
) -> CliResult {
    let candidates = parse_resolution_list(sizes)?;

    let target_ratio = match (ratio, display) {
        (Some(ratio), _) => ratio,
        (None, Some(display)) => resolution_arg(display)?.aspect_ratio(),
        (None, None) => return Err("either --ratio or --display is required".into()),
    };

    let policy = match height {
        Some(target_height) => SelectionPolicy::ClosestHeight { target_height },
        None => config.selection_policy,
    };
    let tolerance = tolerance.unwrap_or(config.aspect_tolerance);

    info!(%policy, target_ratio, tolerance, "Selecting preview size");
    let selected = policy.select(&candidates, target_ratio, tolerance)?;
    println!("{}", selected);
    Ok(())
}

/// Apply every gesture event in a JSON file and print the final transform
pub fn fold_gestures(config: &Config, events: &Path, rotation_aware: Option<bool>) -> CliResult {
    let content = std::fs::read_to_string(events)?;
    let events: Vec<GestureEvent> = serde_json::from_str(&content)?;

    let rotation_aware = rotation_aware.unwrap_or(config.rotation_aware_pan);
    let initial = TransformState::with_opacity(config.default_opacity);

    info!(count = events.len(), rotation_aware, "Folding gestures");
    let transform = apply_all(initial, events, rotation_aware);

    println!("{}", serde_json::to_string_pretty(&transform)?);
    Ok(())
}

/// Print the preview layout transform
pub fn preview_layout(view: &str, preview: &str, rotation: i32) -> CliResult {
    let view = resolution_arg(view)?;
    let preview = resolution_arg(preview)?;
    let rotation = DisplayRotation::from_degrees(rotation).ok_or_else(|| {
        format!("invalid rotation {}, expected a multiple of 90", rotation)
    })?;

    let transform = preview_transform(view.width as f32, view.height as f32, preview, rotation);
    println!("{}", serde_json::to_string_pretty(&transform)?);
    Ok(())
}

/// Run the camera manager against a simulated rear and front camera
pub fn simulate(config: &Config, display: &str) -> CliResult {
    let display = resolution_arg(display)?;
    let mut manager = CameraManager::new(StaticBackend::with_default_devices(), config);

    manager.open_camera()?;
    print_state(&manager);
    manager.on_opened()?;
    print_state(&manager);
    manager.configure_preview(display)?;
    print_state(&manager);

    manager.switch_camera()?;
    print_state(&manager);
    manager.on_opened()?;
    manager.configure_preview(display)?;
    print_state(&manager);

    manager.close();
    print_state(&manager);
    Ok(())
}

fn print_state(manager: &CameraManager<StaticBackend>) {
    let state = manager.state();
    let device = manager
        .current_device()
        .map(|d| d.name.as_str())
        .unwrap_or("-");
    match state.preview_size() {
        Some(size) => println!("{:<20} {:<14} preview {}", state.name(), device, size),
        None => println!("{:<20} {}", state.name(), device),
    }
}

/// Print the effective configuration, optionally writing it back to disk
///
/// Writing fills in defaults for missing fields and stores sanitized values.
pub fn show_config(config: &Config, path: Option<&Path>, save: bool) -> CliResult {
    println!("{}", serde_json::to_string_pretty(config)?);
    if save {
        match path {
            Some(path) => config::save_to_path(config, path)?,
            None => config::save(config)?,
        }
        info!("Configuration written");
    }
    Ok(())
}
