// SPDX-License-Identifier: MPL-2.0
//! `clock_catalog` is a desktop product catalog for a small clock store,
//! built with the Iced GUI framework.
//!
//! Each product page carries a media lightbox that browses the product's
//! images and videos with buttons, keys, swipes and back-navigation.
//!
//! # Layers
//!
//! - [`domain`] - Pure types: media items, viewer state, products
//! - [`application`] - The lightbox controller and its history port
//! - [`catalog`] - Built-in and file-based product catalogs
//! - [`app`] - Iced application root, routing, config
//! - [`ui`] - Page views, styles and design tokens
//! - [`i18n`] - Fluent localization

pub mod app;
pub mod application;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
