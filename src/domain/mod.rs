// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`catalog`]: Products and store data ([`Product`](catalog::Product),
//!   [`Price`](catalog::Price), [`StoreInfo`](catalog::StoreInfo))
//! - [`lightbox`]: Viewer state machine ([`ViewerState`](lightbox::ViewerState),
//!   [`Boundary`](lightbox::Boundary), [`SwipeTracker`](lightbox::SwipeTracker))
//! - [`media`]: Media types ([`MediaKind`](media::MediaKind),
//!   [`MediaItem`](media::MediaItem), [`MediaCollection`](media::MediaCollection))

pub mod catalog;
pub mod lightbox;
pub mod media;
