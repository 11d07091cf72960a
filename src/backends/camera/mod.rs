// SPDX-License-Identifier: GPL-3.0-only

//! Camera backend abstraction
//!
//! The host platform owns the real camera stack. This module only describes
//! the seam it plugs into and the state kept on this side of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │   UI Layer (App)    │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │    CameraManager    │  ← Session state, preview size selection
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  CameraBackend Trait│  ← Implemented by the host platform
//! └─────────────────────┘
//! ```

pub mod manager;
pub mod session;
pub mod types;

pub use manager::CameraManager;
pub use session::SessionState;
pub use types::*;

use crate::errors::CameraError;
use std::collections::HashSet;
use tracing::debug;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, CameraError>;

/// Camera backend trait
///
/// Opening is asynchronous on real hardware: `open` only starts the request,
/// and the host reports completion through [`CameraManager::on_opened`] or
/// [`CameraManager::on_error`].
pub trait CameraBackend {
    /// Enumerate available cameras
    fn enumerate_cameras(&self) -> Vec<CameraDevice>;

    /// Start opening a camera device
    fn open(&mut self, device: &CameraDevice) -> BackendResult<()>;

    /// Release a camera device; closing an unopened device is a no-op
    fn close(&mut self, device_id: &str);
}

/// Find the first camera facing `facing`
pub fn find_camera(devices: &[CameraDevice], facing: LensFacing) -> BackendResult<&CameraDevice> {
    devices
        .iter()
        .find(|d| d.facing == facing)
        .ok_or(CameraError::NoCameraFound)
}

/// Backend over a fixed list of devices
///
/// Used where no platform camera stack is available (CLI simulation, tests).
/// Opening always succeeds unless the device id is unknown.
#[derive(Debug, Clone, Default)]
pub struct StaticBackend {
    devices: Vec<CameraDevice>,
    open_devices: HashSet<String>,
}

impl StaticBackend {
    pub fn new(devices: Vec<CameraDevice>) -> Self {
        Self {
            devices,
            open_devices: HashSet::new(),
        }
    }

    /// A phone-like pair: 4:3 rear camera and 16:9-capable front camera
    pub fn with_default_devices() -> Self {
        Self::new(vec![
            CameraDevice::new(
                "0",
                "Rear camera",
                LensFacing::Back,
                vec![
                    Resolution::new(4032, 3024),
                    Resolution::new(1920, 1080),
                    Resolution::new(1280, 720),
                    Resolution::new(640, 480),
                ],
            ),
            CameraDevice::new(
                "1",
                "Front camera",
                LensFacing::Front,
                vec![
                    Resolution::new(2592, 1944),
                    Resolution::new(1280, 720),
                    Resolution::new(640, 480),
                ],
            ),
        ])
    }

    /// Check if a device is currently open
    pub fn is_open(&self, device_id: &str) -> bool {
        self.open_devices.contains(device_id)
    }
}

impl CameraBackend for StaticBackend {
    fn enumerate_cameras(&self) -> Vec<CameraDevice> {
        self.devices.clone()
    }

    fn open(&mut self, device: &CameraDevice) -> BackendResult<()> {
        if !self.devices.iter().any(|d| d.id == device.id) {
            return Err(CameraError::OpenFailed(format!(
                "unknown camera id {}",
                device.id
            )));
        }
        debug!(device = %device, "Opening static camera");
        self.open_devices.insert(device.id.clone());
        Ok(())
    }

    fn close(&mut self, device_id: &str) {
        if self.open_devices.remove(device_id) {
            debug!(device_id, "Closed static camera");
        }
    }
}
