// SPDX-License-Identifier: GPL-3.0-only

//! Preview size picker
//!
//! Chooses which of a camera's output sizes is streamed to the viewfinder.

pub mod preferences;

pub use preferences::{
    SelectionPolicy, matches_aspect_ratio, select_closest_by_height, select_for_display,
    select_optimal,
};
