// SPDX-License-Identifier: GPL-3.0-only

//! Preview buffer to view mapping
//!
//! Camera sensors stream landscape buffers. The view may be portrait and the
//! display may be turned, so the buffer is centred on the view, stretched to
//! cover it and, on 90°/270° displays, turned back upright.

use crate::backends::camera::types::{DisplayRotation, Resolution};
use crate::geometry::{Affine2, Rect};
use serde::Serialize;
use tracing::debug;

/// Matrix the host applies to the preview surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewTransform {
    pub matrix: Affine2,
    /// Uniform scale that makes the buffer cover the whole view
    pub fill_scale: f32,
    /// Extra rotation for turned displays (−90, 0 or 90)
    pub rotation_degrees: f32,
}

impl PreviewTransform {
    pub fn identity() -> Self {
        Self {
            matrix: Affine2::IDENTITY,
            fill_scale: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

impl Default for PreviewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Compute the preview transform for a view of `view_width` × `view_height`
///
/// Returns the identity when either the view or the preview has no area.
pub fn preview_transform(
    view_width: f32,
    view_height: f32,
    preview: Resolution,
    rotation: DisplayRotation,
) -> PreviewTransform {
    if !preview.is_valid() || !(view_width > 0.0 && view_height > 0.0) {
        debug!(
            view_width,
            view_height,
            preview = %preview,
            "Degenerate preview geometry, using identity transform"
        );
        return PreviewTransform::identity();
    }

    let view_rect = Rect::from_size(view_width, view_height);
    let (cx, cy) = view_rect.center();

    // Sensor buffer is landscape: its height runs along the view's width
    let buffer = preview.transposed();
    let buffer_w = buffer.width as f32;
    let buffer_h = buffer.height as f32;
    let buffer_rect = Rect::from_size(buffer_w, buffer_h).centered_on(cx, cy);

    let Some(fill) = Affine2::rect_to_rect_fill(&view_rect, &buffer_rect) else {
        return PreviewTransform::identity();
    };

    let fill_scale = (view_width / buffer_w).max(view_height / buffer_h);
    let mut matrix = fill.then(&Affine2::scale_about(fill_scale, fill_scale, cx, cy));

    let rotation_degrees = if rotation.swaps_dimensions() {
        90.0 * (rotation.index() - 2) as f32
    } else {
        0.0
    };
    if rotation_degrees != 0.0 {
        matrix = matrix.then(&Affine2::rotate_about(rotation_degrees, cx, cy));
    }

    debug!(
        preview = %preview,
        rotation = %rotation,
        fill_scale,
        rotation_degrees,
        "Computed preview transform"
    );

    PreviewTransform {
        matrix,
        fill_scale,
        rotation_degrees,
    }
}
