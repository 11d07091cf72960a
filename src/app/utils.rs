// SPDX-License-Identifier: GPL-3.0-only

//! Utility functions for argument parsing and common operations

use crate::backends::camera::types::Resolution;

/// Parse resolution string in format "WIDTHxHEIGHT"
///
/// Zero dimensions are rejected.
pub fn parse_resolution(resolution_str: &str) -> Option<Resolution> {
    let (width, height) = resolution_str.trim().split_once(['x', 'X'])?;
    let resolution = Resolution::new(width.trim().parse().ok()?, height.trim().parse().ok()?);
    resolution.is_valid().then_some(resolution)
}

/// Parse a comma separated list of resolutions ("640x480,1280x720")
pub fn parse_resolution_list(list: &str) -> Result<Vec<Resolution>, String> {
    list.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_resolution(part).ok_or_else(|| format!("invalid resolution '{}'", part.trim())))
        .collect()
}
