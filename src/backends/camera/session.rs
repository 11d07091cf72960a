// SPDX-License-Identifier: GPL-3.0-only

//! Capture session state machine
//!
//! ```text
//! Closed ──open──▶ Opening ──opened──▶ Open ──configured──▶ SessionConfigured
//!    ▲                │                  │                        │
//!    └── close / disconnect ◀────────────┴────────────────────────┘
//!                     │ error / configure failed
//!                     ▼
//!                   Error ──open──▶ Opening
//! ```

use super::types::Resolution;
use crate::errors::CameraError;

/// Lifecycle of one camera device and its preview session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No device held
    #[default]
    Closed,
    /// Open requested, waiting for the device callback
    Opening { camera_id: String },
    /// Device open, no preview session yet
    Open { camera_id: String },
    /// Preview streaming at the selected size
    SessionConfigured {
        camera_id: String,
        preview_size: Resolution,
    },
    /// Device or session failed; can be reopened
    Error {
        camera_id: String,
        error: CameraError,
    },
}

impl SessionState {
    /// Short state name for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Closed => "closed",
            SessionState::Opening { .. } => "opening",
            SessionState::Open { .. } => "open",
            SessionState::SessionConfigured { .. } => "session configured",
            SessionState::Error { .. } => "in error",
        }
    }

    /// Camera this state refers to, if any
    pub fn camera_id(&self) -> Option<&str> {
        match self {
            SessionState::Closed => None,
            SessionState::Opening { camera_id }
            | SessionState::Open { camera_id }
            | SessionState::SessionConfigured { camera_id, .. }
            | SessionState::Error { camera_id, .. } => Some(camera_id),
        }
    }

    /// Check whether a device is held (open or streaming)
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            SessionState::Open { .. } | SessionState::SessionConfigured { .. }
        )
    }

    /// Check if the preview is streaming
    pub fn is_streaming(&self) -> bool {
        matches!(self, SessionState::SessionConfigured { .. })
    }

    /// Selected preview size while streaming
    pub fn preview_size(&self) -> Option<Resolution> {
        match self {
            SessionState::SessionConfigured { preview_size, .. } => Some(*preview_size),
            _ => None,
        }
    }

    /// Request the device be opened
    pub fn open(&self, camera_id: &str) -> Result<SessionState, CameraError> {
        match self {
            SessionState::Closed | SessionState::Error { .. } => Ok(SessionState::Opening {
                camera_id: camera_id.to_string(),
            }),
            _ => Err(self.invalid("open")),
        }
    }

    /// Device open callback
    pub fn opened(&self) -> Result<SessionState, CameraError> {
        match self {
            SessionState::Opening { camera_id } => Ok(SessionState::Open {
                camera_id: camera_id.clone(),
            }),
            _ => Err(self.invalid("opened")),
        }
    }

    /// Session configured callback
    pub fn configured(&self, preview_size: Resolution) -> Result<SessionState, CameraError> {
        match self {
            SessionState::Open { camera_id }
            | SessionState::SessionConfigured { camera_id, .. } => {
                Ok(SessionState::SessionConfigured {
                    camera_id: camera_id.clone(),
                    preview_size,
                })
            }
            _ => Err(self.invalid("configured")),
        }
    }

    /// Enter the error state with `error`
    ///
    /// From `Closed` there is no device to fail, so the event is rejected.
    pub fn failed(&self, error: CameraError) -> Result<SessionState, CameraError> {
        match self.camera_id() {
            Some(camera_id) => Ok(SessionState::Error {
                camera_id: camera_id.to_string(),
                error,
            }),
            None => Err(self.invalid("failed")),
        }
    }

    /// Device disconnected or closed; always succeeds
    pub fn closed(&self) -> SessionState {
        SessionState::Closed
    }

    fn invalid(&self, event: &'static str) -> CameraError {
        CameraError::InvalidTransition {
            from: self.name(),
            event,
        }
    }
}
