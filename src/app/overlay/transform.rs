// SPDX-License-Identifier: GPL-3.0-only

//! Gesture-to-transform accumulation for the overlay image
//!
//! Every function here takes the current [`TransformState`] by value and
//! returns a new one. Nothing is kept between calls, so the functions can be
//! driven once per gesture tick from whichever thread delivers touch input.
//!
//! Invalid numeric input (NaN, infinities, a non-positive zoom factor) is
//! dropped field by field: the rejected field keeps its old value and the
//! rest of the update still applies.

use crate::constants::{
    DEFAULT_OVERLAY_OPACITY, FULL_TURN_DEGREES, MAX_OVERLAY_OPACITY, MIN_OVERLAY_OPACITY,
    MIN_OVERLAY_SCALE,
};
use crate::errors::{InputError, TransformField};
use crate::geometry::Affine2;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the overlay image is drawn relative to its container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformState {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Always finite and at least [`MIN_OVERLAY_SCALE`]
    pub scale: f32,
    /// Always in [0, 360)
    pub rotation_degrees: f32,
    /// Always in [0, 1]
    pub opacity: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation_degrees: 0.0,
            opacity: DEFAULT_OVERLAY_OPACITY,
        }
    }
}

impl TransformState {
    /// Untransformed overlay with the given opacity (clamped)
    pub fn with_opacity(opacity: f32) -> Self {
        set_opacity(Self::default(), opacity)
    }

    /// Draw matrix for the overlay
    ///
    /// Scales and rotates about `(pivot_x, pivot_y)` (normally the centre of
    /// the overlay's layer), then translates. Opacity is not part of the
    /// matrix.
    pub fn to_affine(&self, pivot_x: f32, pivot_y: f32) -> Affine2 {
        Affine2::scale_about(self.scale, self.scale, pivot_x, pivot_y)
            .then(&Affine2::rotate_about(self.rotation_degrees, pivot_x, pivot_y))
            .then(&Affine2::translate(self.translate_x, self.translate_y))
    }
}

/// One incremental update from the gesture recognizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureEvent {
    pub pan_x: f32,
    pub pan_y: f32,
    /// Multiplicative; 1.0 leaves the scale alone
    pub zoom_factor: f32,
    pub rotation_delta_degrees: f32,
}

impl Default for GestureEvent {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GestureEvent {
    /// Event that changes nothing
    pub const IDENTITY: Self = Self {
        pan_x: 0.0,
        pan_y: 0.0,
        zoom_factor: 1.0,
        rotation_delta_degrees: 0.0,
    };

    pub fn pan(pan_x: f32, pan_y: f32) -> Self {
        Self {
            pan_x,
            pan_y,
            ..Self::IDENTITY
        }
    }

    pub fn zoom(zoom_factor: f32) -> Self {
        Self {
            zoom_factor,
            ..Self::IDENTITY
        }
    }

    pub fn rotate(rotation_delta_degrees: f32) -> Self {
        Self {
            rotation_delta_degrees,
            ..Self::IDENTITY
        }
    }
}

/// Wrap an angle into [0, 360)
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Fold one gesture event into the overlay transform
///
/// With `rotation_aware` the pan vector is first rotated by the current
/// rotation so that dragging follows the visually rotated image, and the
/// event's rotation delta is applied. Without it, pan is added as-is and the
/// rotation only changes through [`set_rotation`].
pub fn apply(current: TransformState, event: GestureEvent, rotation_aware: bool) -> TransformState {
    let (next, rejected) = apply_reporting(current, event, rotation_aware);
    for err in &rejected {
        warn!(field = err.field.name(), value = err.value, "Ignoring invalid gesture input");
    }
    next
}

/// Same as [`apply`], also returning the inputs that were dropped
pub fn apply_reporting(
    current: TransformState,
    event: GestureEvent,
    rotation_aware: bool,
) -> (TransformState, Vec<InputError>) {
    let mut rejected = Vec::new();
    let mut next = current;

    let pan_x = accept_finite(event.pan_x, TransformField::PanX, &mut rejected);
    let pan_y = accept_finite(event.pan_y, TransformField::PanY, &mut rejected);

    let (dx, dy) = match (rotation_aware, pan_x, pan_y) {
        (false, px, py) => (px, py),
        (true, None, None) => (None, None),
        (true, px, py) => {
            let px = px.unwrap_or(0.0);
            let py = py.unwrap_or(0.0);
            let (sin, cos) = current.rotation_degrees.to_radians().sin_cos();
            (Some(px * cos - py * sin), Some(px * sin + py * cos))
        }
    };
    if let Some(dx) = dx {
        let moved = current.translate_x + dx;
        if moved.is_finite() {
            next.translate_x = moved;
        } else {
            rejected.push(InputError::new(TransformField::PanX, event.pan_x));
        }
    }
    if let Some(dy) = dy {
        let moved = current.translate_y + dy;
        if moved.is_finite() {
            next.translate_y = moved;
        } else {
            rejected.push(InputError::new(TransformField::PanY, event.pan_y));
        }
    }

    if event.zoom_factor.is_finite() && event.zoom_factor > 0.0 {
        let scaled = current.scale * event.zoom_factor;
        if scaled.is_finite() {
            next.scale = scaled.max(MIN_OVERLAY_SCALE);
        } else {
            rejected.push(InputError::new(TransformField::ZoomFactor, event.zoom_factor));
        }
    } else {
        rejected.push(InputError::new(TransformField::ZoomFactor, event.zoom_factor));
    }

    if rotation_aware {
        if let Some(delta) = accept_finite(
            event.rotation_delta_degrees,
            TransformField::RotationDelta,
            &mut rejected,
        ) {
            next.rotation_degrees = wrap_degrees(current.rotation_degrees + delta);
        }
    }

    (next, rejected)
}

/// Fold a sequence of gesture events, starting from `initial`
pub fn apply_all<I>(initial: TransformState, events: I, rotation_aware: bool) -> TransformState
where
    I: IntoIterator<Item = GestureEvent>,
{
    events
        .into_iter()
        .fold(initial, |state, event| apply(state, event, rotation_aware))
}

/// Set the rotation directly (rotation slider), wrapped into [0, 360)
///
/// A non-finite angle is logged and leaves the state unchanged.
pub fn set_rotation(current: TransformState, degrees: f32) -> TransformState {
    try_set_rotation(current, degrees).unwrap_or_else(|err| {
        warn!(field = err.field.name(), value = err.value, "Ignoring invalid rotation");
        current
    })
}

/// Same as [`set_rotation`], returning the rejected angle as an error
pub fn try_set_rotation(
    current: TransformState,
    degrees: f32,
) -> Result<TransformState, InputError> {
    if !degrees.is_finite() {
        return Err(InputError::new(TransformField::Rotation, degrees));
    }
    Ok(TransformState {
        rotation_degrees: wrap_degrees(degrees),
        ..current
    })
}

/// Set the opacity directly (transparency slider), clamped to [0, 1]
pub fn set_opacity(current: TransformState, opacity: f32) -> TransformState {
    try_set_opacity(current, opacity).unwrap_or_else(|err| {
        warn!(field = err.field.name(), value = err.value, "Ignoring invalid opacity");
        current
    })
}

/// Same as [`set_opacity`], returning a non-finite opacity as an error
pub fn try_set_opacity(
    current: TransformState,
    opacity: f32,
) -> Result<TransformState, InputError> {
    if !opacity.is_finite() {
        return Err(InputError::new(TransformField::Opacity, opacity));
    }
    Ok(TransformState {
        opacity: opacity.clamp(MIN_OVERLAY_OPACITY, MAX_OVERLAY_OPACITY),
        ..current
    })
}

fn accept_finite(value: f32, field: TransformField, rejected: &mut Vec<InputError>) -> Option<f32> {
    if value.is_finite() {
        Some(value)
    } else {
        rejected.push(InputError::new(field, value));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_plain_pan_and_zoom() {
        let start = TransformState::with_opacity(1.0);
        let event = GestureEvent {
            pan_x: 10.0,
            pan_y: 0.0,
            zoom_factor: 2.0,
            rotation_delta_degrees: 0.0,
        };
        let next = apply(start, event, false);
        assert_eq!(
            next,
            TransformState {
                translate_x: 10.0,
                translate_y: 0.0,
                scale: 2.0,
                rotation_degrees: 0.0,
                opacity: 1.0,
            }
        );
    }

    #[test]
    fn test_plain_mode_ignores_rotation_delta() {
        let next = apply(TransformState::default(), GestureEvent::rotate(45.0), false);
        assert_eq!(next.rotation_degrees, 0.0);
    }

    #[test]
    fn test_rotation_aware_pan_follows_rotation() {
        let start = set_rotation(TransformState::default(), 90.0);
        let next = apply(start, GestureEvent::pan(10.0, 0.0), true);
        assert!(approx(next.translate_x, 0.0));
        assert!(approx(next.translate_y, 10.0));
        assert_eq!(next.rotation_degrees, 90.0);
    }

    #[test]
    fn test_rotation_aware_uses_rotation_before_delta() {
        let event = GestureEvent {
            pan_x: 0.0,
            pan_y: 5.0,
            zoom_factor: 1.0,
            rotation_delta_degrees: 90.0,
        };
        let next = apply(TransformState::default(), event, true);
        // Pan is rotated by the old angle (0°), not the new one
        assert!(approx(next.translate_x, 0.0));
        assert!(approx(next.translate_y, 5.0));
        assert_eq!(next.rotation_degrees, 90.0);
    }

    #[test]
    fn test_rotation_wraps() {
        let next = apply(
            set_rotation(TransformState::default(), 350.0),
            GestureEvent::rotate(20.0),
            true,
        );
        assert!(approx(next.rotation_degrees, 10.0));

        let next = apply(TransformState::default(), GestureEvent::rotate(-90.0), true);
        assert!(approx(next.rotation_degrees, 270.0));
    }

    #[test]
    fn test_wrap_degrees_never_returns_full_turn() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert!(wrap_degrees(-1e-7) < 360.0);
        assert!(approx(wrap_degrees(-450.0), 270.0));
    }

    #[test]
    fn test_scale_has_positive_floor() {
        let next = apply(TransformState::default(), GestureEvent::zoom(1e-9), false);
        assert_eq!(next.scale, MIN_OVERLAY_SCALE);
    }

    #[test]
    fn test_non_positive_zoom_is_ignored() {
        for zoom in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let (next, rejected) = apply_reporting(
                TransformState::default(),
                GestureEvent {
                    pan_x: 3.0,
                    ..GestureEvent::zoom(zoom)
                },
                false,
            );
            assert_eq!(next.scale, 1.0);
            // Pan still applied
            assert_eq!(next.translate_x, 3.0);
            assert_eq!(rejected.len(), 1);
            assert_eq!(rejected[0].field, TransformField::ZoomFactor);
        }
    }

    #[test]
    fn test_overflowing_zoom_keeps_previous_scale() {
        let start = TransformState {
            scale: f32::MAX / 2.0,
            ..TransformState::default()
        };
        let next = apply(start, GestureEvent::zoom(4.0), false);
        assert_eq!(next.scale, start.scale);
    }

    #[test]
    fn test_non_finite_pan_only_drops_that_axis() {
        let event = GestureEvent {
            pan_x: f32::NAN,
            pan_y: 4.0,
            zoom_factor: 2.0,
            rotation_delta_degrees: 0.0,
        };
        let (next, rejected) = apply_reporting(TransformState::default(), event, false);
        assert_eq!(next.translate_x, 0.0);
        assert_eq!(next.translate_y, 4.0);
        assert_eq!(next.scale, 2.0);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].field, TransformField::PanX);
        assert!(rejected[0].value.is_nan());
    }

    #[test]
    fn test_rotation_aware_pan_with_one_bad_axis() {
        let start = set_rotation(TransformState::default(), 90.0);
        let event = GestureEvent {
            pan_x: f32::NAN,
            pan_y: 5.0,
            zoom_factor: 1.0,
            rotation_delta_degrees: 0.0,
        };
        let (next, rejected) = apply_reporting(start, event, true);
        // Remaining axis is still rotated: (0, 5) at 90° moves along -x
        assert!(approx(next.translate_x, -5.0));
        assert!(approx(next.translate_y, 0.0));
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].field, TransformField::PanX);
    }

    #[test]
    fn test_overflowing_pan_is_reported() {
        let start = TransformState {
            translate_x: f32::MAX,
            ..TransformState::default()
        };
        let (next, rejected) = apply_reporting(start, GestureEvent::pan(f32::MAX, 1.0), false);
        assert_eq!(next.translate_x, f32::MAX);
        assert_eq!(next.translate_y, 1.0);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].field, TransformField::PanX);
        assert_eq!(rejected[0].value, f32::MAX);
    }

    #[test]
    fn test_non_finite_rotation_delta_is_ignored() {
        let (next, rejected) = apply_reporting(
            TransformState::default(),
            GestureEvent {
                pan_x: 1.0,
                ..GestureEvent::rotate(f32::INFINITY)
            },
            true,
        );
        assert_eq!(next.rotation_degrees, 0.0);
        assert!(approx(next.translate_x, 1.0));
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].field, TransformField::RotationDelta);
    }

    #[test]
    fn test_identity_event_changes_nothing() {
        let start = TransformState {
            translate_x: -12.5,
            translate_y: 40.0,
            scale: 0.75,
            rotation_degrees: 123.0,
            opacity: 0.3,
        };
        assert_eq!(apply(start, GestureEvent::IDENTITY, false), start);
        assert_eq!(apply(start, GestureEvent::IDENTITY, true), start);
    }

    #[test]
    fn test_set_rotation_wraps_and_rejects_nan() {
        let state = set_rotation(TransformState::default(), 370.0);
        assert!(approx(state.rotation_degrees, 10.0));
        assert_eq!(set_rotation(state, f32::NAN), state);
    }

    #[test]
    fn test_try_setters_report_rejected_field() {
        let state = TransformState::default();
        let err = try_set_rotation(state, f32::INFINITY).unwrap_err();
        assert_eq!(err.field, TransformField::Rotation);
        let err = try_set_opacity(state, f32::NAN).unwrap_err();
        assert_eq!(err.field, TransformField::Opacity);
        assert_eq!(try_set_opacity(state, 2.0).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_set_opacity_clamps() {
        let state = TransformState::default();
        assert_eq!(set_opacity(state, 1.5).opacity, 1.0);
        assert_eq!(set_opacity(state, -0.2).opacity, 0.0);
        assert_eq!(set_opacity(state, 0.25).opacity, 0.25);
        assert_eq!(set_opacity(state, f32::NAN).opacity, state.opacity);
    }

    #[test]
    fn test_gestures_never_change_opacity() {
        let start = TransformState::with_opacity(0.8);
        let event = GestureEvent {
            pan_x: 5.0,
            pan_y: -3.0,
            zoom_factor: 1.5,
            rotation_delta_degrees: 30.0,
        };
        assert_eq!(apply(start, event, true).opacity, 0.8);
    }

    #[test]
    fn test_affine_maps_pivot_to_translated_pivot() {
        let state = TransformState {
            translate_x: 10.0,
            translate_y: 20.0,
            scale: 2.0,
            rotation_degrees: 45.0,
            opacity: 1.0,
        };
        let m = state.to_affine(100.0, 50.0);
        let (x, y) = m.map_point(100.0, 50.0);
        assert!(approx(x, 110.0));
        assert!(approx(y, 70.0));

        // A point one unit right of the pivot ends up scaled and rotated
        let (x, y) = m.map_point(101.0, 50.0);
        let expected = 2.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(x - 110.0, expected));
        assert!(approx(y - 70.0, expected));
    }
}
