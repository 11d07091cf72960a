// SPDX-License-Identifier: GPL-3.0-only

//! Preview size selection and preference logic

use crate::backends::camera::types::Resolution;
use crate::errors::SelectionError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a preview size is chosen among the sizes a camera supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Largest pixel area among aspect-ratio matches
    #[default]
    MaxArea,
    /// Height closest to `target_height` among aspect-ratio matches
    ClosestHeight { target_height: u32 },
}

impl SelectionPolicy {
    /// Run the selection mode this policy names
    pub fn select(
        &self,
        candidates: &[Resolution],
        target_aspect_ratio: f32,
        tolerance: f32,
    ) -> Result<Resolution, SelectionError> {
        match *self {
            SelectionPolicy::MaxArea => select_optimal(candidates, target_aspect_ratio, tolerance),
            SelectionPolicy::ClosestHeight { target_height } => select_closest_by_height(
                candidates,
                target_aspect_ratio,
                target_height,
                tolerance,
            ),
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPolicy::MaxArea => write!(f, "max-area"),
            SelectionPolicy::ClosestHeight { target_height } => {
                write!(f, "closest-height({})", target_height)
            }
        }
    }
}

/// Check whether a resolution's aspect ratio is within `tolerance` of the target
///
/// The comparison is an absolute difference of ratios and is strict, so a
/// tolerance of zero (or a negative / NaN one) matches nothing.
pub fn matches_aspect_ratio(resolution: &Resolution, target_aspect_ratio: f32, tolerance: f32) -> bool {
    (resolution.aspect_ratio() - target_aspect_ratio).abs() < tolerance
}

/// Select the largest preview size matching the target aspect ratio
///
/// 1. Keep candidates within `tolerance` of `target_aspect_ratio`.
/// 2. Return the one with the largest pixel area; the first one wins ties.
/// 3. With no match, return the largest candidate overall.
///
/// Fails with [`SelectionError::NotFound`] only when `candidates` is empty.
pub fn select_optimal(
    candidates: &[Resolution],
    target_aspect_ratio: f32,
    tolerance: f32,
) -> Result<Resolution, SelectionError> {
    let matching = largest_area(
        candidates
            .iter()
            .filter(|r| matches_aspect_ratio(r, target_aspect_ratio, tolerance)),
    );

    if let Some(selected) = matching {
        debug!(
            selected = %selected,
            target_ratio = target_aspect_ratio,
            "Selected largest preview size matching aspect ratio"
        );
        return Ok(selected);
    }

    // No aspect-ratio match, fall back to the largest size overall
    let fallback = largest_area(candidates.iter()).ok_or(SelectionError::NotFound)?;
    debug!(
        selected = %fallback,
        target_ratio = target_aspect_ratio,
        "No preview size matches aspect ratio, using largest available"
    );
    Ok(fallback)
}

/// Select the preview size whose height is closest to `target_height`
///
/// Candidates matching the aspect ratio are preferred; without any match the
/// closest height over all candidates is used. The first one wins ties.
pub fn select_closest_by_height(
    candidates: &[Resolution],
    target_aspect_ratio: f32,
    target_height: u32,
    tolerance: f32,
) -> Result<Resolution, SelectionError> {
    let matching = closest_height(
        candidates
            .iter()
            .filter(|r| matches_aspect_ratio(r, target_aspect_ratio, tolerance)),
        target_height,
    );

    if let Some(selected) = matching {
        debug!(
            selected = %selected,
            target_height,
            "Selected preview size closest to target height"
        );
        return Ok(selected);
    }

    let fallback = closest_height(candidates.iter(), target_height).ok_or(SelectionError::NotFound)?;
    debug!(
        selected = %fallback,
        target_height,
        "No preview size matches aspect ratio, using closest height overall"
    );
    Ok(fallback)
}

/// Select a preview size for a display, using the display's own aspect ratio
pub fn select_for_display(
    candidates: &[Resolution],
    display: Resolution,
    policy: SelectionPolicy,
    tolerance: f32,
) -> Result<Resolution, SelectionError> {
    policy.select(candidates, display.aspect_ratio(), tolerance)
}

// `Iterator::max_by_key` keeps the last maximum; preview selection keeps the first.
fn largest_area<'a>(sizes: impl Iterator<Item = &'a Resolution>) -> Option<Resolution> {
    sizes
        .copied()
        .reduce(|best, r| if r.area() > best.area() { r } else { best })
}

fn closest_height<'a>(
    sizes: impl Iterator<Item = &'a Resolution>,
    target_height: u32,
) -> Option<Resolution> {
    sizes
        .copied()
        .min_by_key(|r| r.height.abs_diff(target_height))
}
