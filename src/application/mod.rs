// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`lightbox`]: The media lightbox use case
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The GUI host implements application layer ports
//! - Presentation layer drives application layer components through messages
//!
//! # Example
//!
//! ```
//! use clock_catalog::application::lightbox::{Controller, Effect, Message};
//! use clock_catalog::application::port::RecordingHistory;
//! use clock_catalog::domain::media::MediaCollection;
//!
//! let collection = MediaCollection::images_then_videos(["a.jpg", "b.jpg"], ["c.mp4"]);
//! let mut controller = Controller::new(collection);
//! let mut history = RecordingHistory::default();
//!
//! assert_eq!(
//!     controller.handle(Message::Open(2), &mut history),
//!     Effect::Opened { index: 2 }
//! );
//! ```

pub mod lightbox;
pub mod port;
