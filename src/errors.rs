// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the overlay viewfinder

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Preview size selection errors
    Selection(SelectionError),
    /// Camera-related errors
    Camera(CameraError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Io(String),
}

/// Preview size selection errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// No candidate resolutions were supplied
    NotFound,
}

/// Field of the overlay transform an input value was destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformField {
    PanX,
    PanY,
    ZoomFactor,
    RotationDelta,
    Rotation,
    Opacity,
}

impl TransformField {
    pub fn name(&self) -> &'static str {
        match self {
            TransformField::PanX => "pan_x",
            TransformField::PanY => "pan_y",
            TransformField::ZoomFactor => "zoom_factor",
            TransformField::RotationDelta => "rotation_delta_degrees",
            TransformField::Rotation => "rotation_degrees",
            TransformField::Opacity => "opacity",
        }
    }
}

/// Non-finite or out-of-domain numeric input
///
/// The affected field is left unchanged; the rest of the update still applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputError {
    pub field: TransformField,
    pub value: f32,
}

impl InputError {
    pub fn new(field: TransformField, value: f32) -> Self {
        Self { field, value }
    }
}

/// Camera-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// No camera device with the requested facing
    NoCameraFound,
    /// The backend refused to open the device
    OpenFailed(String),
    /// Device reported an error code
    DeviceError(i32),
    /// Capture session could not be configured
    ConfigureFailed(String),
    /// Event not valid in the current session state
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Selection(e) => write!(f, "Selection error: {}", e),
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NotFound => write!(f, "No candidate resolutions available"),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {} for {}", self.value, self.field.name())
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoCameraFound => write!(f, "Camera not found"),
            CameraError::OpenFailed(msg) => write!(f, "Failed to open camera: {}", msg),
            CameraError::DeviceError(code) => write!(f, "Camera device error {}", code),
            CameraError::ConfigureFailed(msg) => {
                write!(f, "Failed to configure camera session: {}", msg)
            }
            CameraError::InvalidTransition { from, event } => {
                write!(f, "Cannot handle '{}' while {}", event, from)
            }
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for SelectionError {}
impl std::error::Error for InputError {}
impl std::error::Error for CameraError {}

// Conversions from sub-errors to AppError
impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        AppError::Selection(err)
    }
}

impl From<CameraError> for AppError {
    fn from(err: CameraError) -> Self {
        AppError::Camera(err)
    }
}

// Conversions for I/O and serialization errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err: AppError = SelectionError::NotFound.into();
        assert_eq!(
            err.to_string(),
            "Selection error: No candidate resolutions available"
        );

        let err = InputError::new(TransformField::ZoomFactor, -1.0);
        assert_eq!(err.to_string(), "invalid value -1 for zoom_factor");

        let err = CameraError::InvalidTransition {
            from: "closed",
            event: "configure",
        };
        assert_eq!(err.to_string(), "Cannot handle 'configure' while closed");
    }

    #[test]
    fn test_io_error_converts_to_app_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(AppError::from(io), AppError::Io(msg) if msg == "missing"));
    }
}
