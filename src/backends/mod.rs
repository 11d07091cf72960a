// SPDX-License-Identifier: GPL-3.0-only

//! Backend abstraction layer for camera access
//!
//! # Modules
//!
//! - [`camera`]: Camera device model, session state machine and manager

pub mod camera;
