// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use eyepiece::constants::{
    DEFAULT_ASPECT_TOLERANCE, DEFAULT_OVERLAY_OPACITY, MAX_OVERLAY_OPACITY, MIN_OVERLAY_OPACITY,
    MIN_OVERLAY_SCALE, app_version,
};

#[test]
fn test_default_opacity_within_slider_range() {
    assert!(DEFAULT_OVERLAY_OPACITY >= MIN_OVERLAY_OPACITY);
    assert!(DEFAULT_OVERLAY_OPACITY <= MAX_OVERLAY_OPACITY);
}

#[test]
fn test_min_scale_is_small_positive() {
    assert!(MIN_OVERLAY_SCALE > 0.0);
    assert!(MIN_OVERLAY_SCALE < 1.0);
}

#[test]
fn test_aspect_tolerance_separates_common_ratios() {
    // 4:3 and 16:9 must not match each other at the default tolerance
    let four_three = 4.0_f32 / 3.0;
    let sixteen_nine = 16.0_f32 / 9.0;
    assert!((four_three - sixteen_nine).abs() > DEFAULT_ASPECT_TOLERANCE);
}

#[test]
fn test_version_is_set() {
    assert!(!app_version().is_empty());
}
