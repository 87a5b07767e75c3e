// SPDX-License-Identifier: MPL-2.0
//! Lightbox domain types.
//!
//! Pure state of the media viewer: which item is shown, where the ends of
//! the collection are, and how a touch gesture turns into a step.

pub mod state;
pub mod swipe;

pub use state::{Boundary, Direction, LightboxError, ViewerState};
pub use swipe::{SwipeTracker, SWIPE_THRESHOLD};
