// SPDX-License-Identifier: GPL-3.0-only

//! Camera lifecycle manager
//!
//! The manager provides:
//! - Camera lookup by lens facing and front/back switching
//! - Session state tracking across the host's open/configure callbacks
//! - Preview size selection when the session is configured

use super::session::SessionState;
use super::types::*;
use super::{BackendResult, CameraBackend, find_camera};
use crate::app::format_picker::{SelectionPolicy, select_for_display};
use crate::config::Config;
use crate::errors::CameraError;
use tracing::{error, info, warn};

/// Camera manager
///
/// Owns the backend and the session state. Not shared: the host feeds its
/// camera callbacks in order on one thread.
#[derive(Debug)]
pub struct CameraManager<B: CameraBackend> {
    backend: B,
    facing: LensFacing,
    state: SessionState,
    current_device: Option<CameraDevice>,
    policy: SelectionPolicy,
    tolerance: f32,
}

impl<B: CameraBackend> CameraManager<B> {
    /// Create a new manager using the facing and selection settings from `config`
    pub fn new(backend: B, config: &Config) -> Self {
        info!(
            facing = %config.lens_facing,
            policy = %config.selection_policy,
            "Creating camera manager"
        );
        Self {
            backend,
            facing: config.lens_facing,
            state: SessionState::Closed,
            current_device: None,
            policy: config.selection_policy,
            tolerance: config.aspect_tolerance,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn facing(&self) -> LensFacing {
        self.facing
    }

    pub fn current_device(&self) -> Option<&CameraDevice> {
        self.current_device.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Change the preview selection policy for the next configure
    pub fn set_policy(&mut self, policy: SelectionPolicy) {
        self.policy = policy;
    }

    /// Open the first camera with the current facing
    ///
    /// Any previously held camera is released first.
    pub fn open_camera(&mut self) -> BackendResult<()> {
        self.release_device();

        let devices = self.backend.enumerate_cameras();
        let device = match find_camera(&devices, self.facing) {
            Ok(device) => device.clone(),
            Err(err) => {
                error!(facing = %self.facing, "Failed to open camera: {}", err);
                return Err(err);
            }
        };

        self.state = self.state.open(&device.id)?;
        info!(device = %device, "Opening camera");

        if let Err(err) = self.backend.open(&device) {
            error!(device = %device, "Failed to open camera: {}", err);
            self.state = self.state.failed(err.clone())?;
            return Err(err);
        }

        self.current_device = Some(device);
        Ok(())
    }

    /// Host callback: the device finished opening
    pub fn on_opened(&mut self) -> BackendResult<()> {
        self.state = self.state.opened()?;
        info!(camera_id = ?self.state.camera_id(), "Camera opened");
        Ok(())
    }

    /// Pick a preview size for `display_size` and configure the session with it
    ///
    /// Fails, and moves the session into the error state, when the device
    /// reports no output sizes.
    pub fn configure_preview(&mut self, display_size: Resolution) -> BackendResult<Resolution> {
        if !self.state.is_open() {
            return Err(CameraError::InvalidTransition {
                from: self.state.name(),
                event: "configure",
            });
        }
        let Some(device) = self.current_device.as_ref() else {
            return Err(CameraError::InvalidTransition {
                from: self.state.name(),
                event: "configure",
            });
        };

        match select_for_display(&device.output_sizes, display_size, self.policy, self.tolerance) {
            Ok(size) => {
                self.state = self.state.configured(size)?;
                info!(preview = %size, display = %display_size, "Preview session configured");
                Ok(size)
            }
            Err(err) => {
                let err = CameraError::ConfigureFailed(err.to_string());
                self.on_configure_failed(err.clone())?;
                Err(err)
            }
        }
    }

    /// Host callback: the capture session could not be configured
    pub fn on_configure_failed(&mut self, err: CameraError) -> BackendResult<()> {
        error!("Failed to configure camera session: {}", err);
        self.state = self.state.failed(err)?;
        Ok(())
    }

    /// Host callback: the device went away
    pub fn on_disconnected(&mut self) {
        warn!(camera_id = ?self.state.camera_id(), "Camera disconnected");
        self.release_device();
    }

    /// Host callback: the device reported an error
    ///
    /// The device is released; the session stays in the error state until
    /// reopened.
    pub fn on_error(&mut self, code: i32) -> BackendResult<()> {
        error!(code, camera_id = ?self.state.camera_id(), "Camera error");
        let failed = self.state.failed(CameraError::DeviceError(code))?;
        if let Some(device) = self.current_device.take() {
            self.backend.close(&device.id);
        }
        self.state = failed;
        Ok(())
    }

    /// Switch between the rear and front camera
    ///
    /// The facing flips even when no camera with the new facing exists, so a
    /// second switch goes back.
    pub fn switch_camera(&mut self) -> BackendResult<()> {
        self.release_device();
        self.facing = self.facing.toggled();
        info!(facing = %self.facing, "Switching camera");
        self.open_camera()
    }

    /// Release the camera
    pub fn close(&mut self) {
        self.release_device();
    }

    fn release_device(&mut self) {
        if let Some(device) = self.current_device.take() {
            self.backend.close(&device.id);
        }
        self.state = self.state.closed();
    }
}

#[cfg(test)]
mod tests {
    use super::super::StaticBackend;
    use super::*;

    fn manager() -> CameraManager<StaticBackend> {
        CameraManager::new(StaticBackend::with_default_devices(), &Config::default())
    }

    #[test]
    fn test_open_and_configure() {
        let mut mgr = manager();
        mgr.open_camera().unwrap();
        assert!(matches!(mgr.state(), SessionState::Opening { .. }));
        assert!(mgr.backend().is_open("0"));

        mgr.on_opened().unwrap();
        let size = mgr.configure_preview(Resolution::new(1920, 1080)).unwrap();
        assert_eq!(size, Resolution::new(1920, 1080));
        assert!(mgr.state().is_streaming());
    }

    #[test]
    fn test_configure_requires_open_device() {
        let mut mgr = manager();
        assert!(matches!(
            mgr.configure_preview(Resolution::new(1920, 1080)),
            Err(CameraError::InvalidTransition { .. })
        ));

        mgr.open_camera().unwrap();
        // Still opening
        assert!(mgr.configure_preview(Resolution::new(1920, 1080)).is_err());
    }

    #[test]
    fn test_switch_camera_toggles_facing() {
        let mut mgr = manager();
        mgr.open_camera().unwrap();
        mgr.on_opened().unwrap();

        mgr.switch_camera().unwrap();
        assert_eq!(mgr.facing(), LensFacing::Front);
        assert_eq!(mgr.current_device().map(|d| d.id.as_str()), Some("1"));
        assert!(!mgr.backend().is_open("0"));
        assert!(mgr.backend().is_open("1"));

        mgr.switch_camera().unwrap();
        assert_eq!(mgr.facing(), LensFacing::Back);
    }

    #[test]
    fn test_switch_to_missing_facing_fails_closed() {
        let backend = StaticBackend::new(vec![CameraDevice::new(
            "0",
            "Only camera",
            LensFacing::Back,
            vec![Resolution::new(640, 480)],
        )]);
        let mut mgr = CameraManager::new(backend, &Config::default());
        mgr.open_camera().unwrap();

        assert_eq!(mgr.switch_camera(), Err(CameraError::NoCameraFound));
        assert_eq!(mgr.facing(), LensFacing::Front);
        assert_eq!(mgr.state(), &SessionState::Closed);

        mgr.switch_camera().unwrap();
        assert_eq!(mgr.facing(), LensFacing::Back);
    }

    #[test]
    fn test_device_error_and_recovery() {
        let mut mgr = manager();
        mgr.open_camera().unwrap();
        mgr.on_opened().unwrap();
        mgr.on_error(4).unwrap();

        assert!(matches!(
            mgr.state(),
            SessionState::Error {
                error: CameraError::DeviceError(4),
                ..
            }
        ));
        assert!(!mgr.backend().is_open("0"));

        mgr.open_camera().unwrap();
        mgr.on_opened().unwrap();
        assert!(mgr.state().is_open());
    }

    #[test]
    fn test_disconnect_closes() {
        let mut mgr = manager();
        mgr.open_camera().unwrap();
        mgr.on_opened().unwrap();
        mgr.on_disconnected();
        assert_eq!(mgr.state(), &SessionState::Closed);
        assert!(mgr.current_device().is_none());
    }

    #[test]
    fn test_no_output_sizes_fails_configure() {
        let backend = StaticBackend::new(vec![CameraDevice::new(
            "0",
            "Broken",
            LensFacing::Back,
            vec![],
        )]);
        let mut mgr = CameraManager::new(backend, &Config::default());
        mgr.open_camera().unwrap();
        mgr.on_opened().unwrap();

        assert!(matches!(
            mgr.configure_preview(Resolution::new(1920, 1080)),
            Err(CameraError::ConfigureFailed(_))
        ));
        assert_eq!(mgr.state().name(), "in error");
    }

    #[test]
    fn test_closest_height_policy() {
        let mut mgr = manager();
        mgr.set_policy(SelectionPolicy::ClosestHeight { target_height: 700 });
        mgr.open_camera().unwrap();
        mgr.on_opened().unwrap();
        let size = mgr.configure_preview(Resolution::new(1920, 1080)).unwrap();
        assert_eq!(size, Resolution::new(1280, 720));
    }
}
