// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each page
//! exposes a `ViewContext`, a `Message` type and, when it owns state, an
//! `update` returning an event for the application root.
//!
//! # Pages
//!
//! - [`home`] - Banner and product card grid
//! - [`product_detail`] - Product hero, media tabs and the lightbox
//! - [`lightbox`] - Full-window media overlay
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] / [`footer`] - Page chrome
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`icons`] - Glyph icons
//! - [`media`] - Image handles for catalog sources

pub mod design_tokens;
pub mod footer;
pub mod home;
pub mod icons;
pub mod lightbox;
pub mod media;
pub mod navbar;
pub mod product_detail;
pub mod styles;
pub mod theming;
