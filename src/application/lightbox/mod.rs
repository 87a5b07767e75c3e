// SPDX-License-Identifier: MPL-2.0
//! Lightbox use case: a full-screen viewer over one product's media.
//!
//! The [`Controller`] follows the same State/Message/Effect shape as the
//! UI sub-components: the host forwards a [`Message`], the controller
//! updates its own state and answers with an [`Effect`] the host may act on.

mod controller;
mod input;
mod snapshot;

pub use controller::{Controller, Effect, Message};
pub use input::{LightboxKey, TouchPhase};
pub use snapshot::{MediaElement, Snapshot};
