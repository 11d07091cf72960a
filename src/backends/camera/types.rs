// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera backends

use serde::{Deserialize, Serialize};

/// Output resolution reported by the camera hardware
///
/// Value type: two resolutions are the same if their dimensions match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    ///
    /// A zero height yields a non-finite ratio, which never matches any
    /// aspect-ratio tolerance check.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Total pixel count
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Same resolution with width and height swapped
    pub fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Check that both dimensions are non-zero
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Direction a camera lens faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LensFacing {
    /// Rear camera (the default for tracing)
    #[default]
    Back,
    /// Selfie camera
    Front,
    /// USB or otherwise detachable camera
    External,
}

impl LensFacing {
    /// The facing selected by the "switch camera" action
    ///
    /// Back and front swap; an external camera switches back to the rear one.
    pub fn toggled(self) -> Self {
        match self {
            LensFacing::Back => LensFacing::Front,
            LensFacing::Front | LensFacing::External => LensFacing::Back,
        }
    }
}

impl std::fmt::Display for LensFacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LensFacing::Back => write!(f, "back"),
            LensFacing::Front => write!(f, "front"),
            LensFacing::External => write!(f, "external"),
        }
    }
}

/// Rotation of the display relative to its natural orientation
///
/// Mirrors the four surface rotations a window manager reports. The index
/// (0..=3) is what the preview transform arithmetic works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayRotation {
    /// Natural orientation
    #[default]
    Rotation0,
    /// Rotated 90 degrees
    Rotation90,
    /// Upside down
    Rotation180,
    /// Rotated 270 degrees
    Rotation270,
}

impl DisplayRotation {
    /// Create rotation from an integer degree value (normalised to 0-360).
    ///
    /// Returns `None` for values that are not a multiple of 90.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(DisplayRotation::Rotation0),
            90 => Some(DisplayRotation::Rotation90),
            180 => Some(DisplayRotation::Rotation180),
            270 => Some(DisplayRotation::Rotation270),
            _ => None,
        }
    }

    /// Surface rotation index (0=0°, 1=90°, 2=180°, 3=270°)
    pub fn index(&self) -> i32 {
        match self {
            DisplayRotation::Rotation0 => 0,
            DisplayRotation::Rotation90 => 1,
            DisplayRotation::Rotation180 => 2,
            DisplayRotation::Rotation270 => 3,
        }
    }

    /// Get the rotation in degrees
    pub fn degrees(&self) -> u32 {
        self.index() as u32 * 90
    }

    /// Check if rotation swaps width and height
    pub fn swaps_dimensions(&self) -> bool {
        matches!(
            self,
            DisplayRotation::Rotation90 | DisplayRotation::Rotation270
        )
    }
}

impl std::fmt::Display for DisplayRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Represents a camera device
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDevice {
    pub id: String,
    pub name: String,
    pub facing: LensFacing,
    pub output_sizes: Vec<Resolution>, // Sizes the device can stream for preview
}

impl CameraDevice {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        facing: LensFacing,
        output_sizes: Vec<Resolution>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            facing,
            output_sizes,
        }
    }
}

impl std::fmt::Display for CameraDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.id, self.facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_area_does_not_overflow() {
        let res = Resolution::new(u32::MAX, 2);
        assert_eq!(res.area(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn test_resolution_aspect_ratio() {
        let res = Resolution::new(1920, 1080);
        assert!((res.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
        assert!(!Resolution::new(640, 0).aspect_ratio().is_finite());
    }

    #[test]
    fn test_resolution_transposed() {
        assert_eq!(
            Resolution::new(1920, 1080).transposed(),
            Resolution::new(1080, 1920)
        );
    }

    #[test]
    fn test_lens_facing_toggle() {
        assert_eq!(LensFacing::Back.toggled(), LensFacing::Front);
        assert_eq!(LensFacing::Front.toggled(), LensFacing::Back);
        assert_eq!(LensFacing::External.toggled(), LensFacing::Back);
    }

    #[test]
    fn test_display_rotation_from_degrees() {
        assert_eq!(
            DisplayRotation::from_degrees(-90),
            Some(DisplayRotation::Rotation270)
        );
        assert_eq!(
            DisplayRotation::from_degrees(450),
            Some(DisplayRotation::Rotation90)
        );
        assert_eq!(DisplayRotation::from_degrees(45), None);
        assert_eq!(DisplayRotation::from_degrees(-1), None);
        assert!(DisplayRotation::Rotation270.swaps_dimensions());
        assert!(!DisplayRotation::Rotation180.swaps_dimensions());
    }
}
