// SPDX-License-Identifier: MPL-2.0
//! Toolkit-neutral input understood by the lightbox.
//!
//! The host maps its raw keyboard and touch events onto these values; the
//! controller never sees toolkit types.

/// Keys with a meaning inside the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    /// Previous item.
    ArrowLeft,
    /// Next item.
    ArrowRight,
    /// Close the viewer.
    Escape,
}

/// Phase of a single-finger touch, with its horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchPhase {
    Started { x: f32 },
    Moved { x: f32 },
    Ended,
    /// The platform lost track of the finger; the gesture is dropped.
    Cancelled,
}
