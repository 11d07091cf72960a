// SPDX-License-Identifier: GPL-3.0-only

//! Camera preview module
//!
//! This module computes how the camera buffer is laid out in the preview view.
//! Drawing itself is left to the host UI, which applies the resulting matrix.

pub mod transform;

// Re-export for convenience
pub use transform::{PreviewTransform, preview_transform};
