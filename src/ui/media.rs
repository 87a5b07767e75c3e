// SPDX-License-Identifier: MPL-2.0
//! Image handles for catalog media.

use crate::app::paths;
use iced::widget::image::Handle;
use std::path::Path;

/// Image handle for a media source resolved under `media_root`.
///
/// Handles built from the same path share the renderer's cache entry, so
/// views can call this on every frame.
#[must_use]
pub fn image_handle(media_root: &Path, source: &str) -> Handle {
    Handle::from_path(paths::resolve_media_source(media_root, source))
}
