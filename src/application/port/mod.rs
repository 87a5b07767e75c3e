// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the host implements.
//! These traits use only domain types, ensuring the application layer remains
//! independent of the GUI toolkit.
//!
//! # Available Ports
//!
//! - [`history`]: Platform back/forward stack used to close the lightbox on
//!   a back gesture

pub mod history;

pub use history::{HistoryMarker, NavigationStack, NoHistory, RecordingHistory};
