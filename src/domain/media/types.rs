// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::sync::Arc;

/// Suffix that marks a source locator as a video.
pub const VIDEO_SUFFIX: &str = ".mp4";

/// Kind of a media item, which decides the element used to present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Static image.
    Image,
    /// Video with native transport controls.
    Video,
}

impl MediaKind {
    /// Classifies a source locator by its literal suffix.
    ///
    /// Only a source ending in `.mp4` is a video. File content and MIME
    /// type are never inspected.
    ///
    /// # Example
    ///
    /// ```
    /// use clock_catalog::domain::media::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_source("foo/bar.mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_source("foo/bar.jpeg"), MediaKind::Image);
    /// ```
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        if source.ends_with(VIDEO_SUFFIX) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// Returns the i18n key for the kind label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MediaKind::Image => "media-kind-image",
            MediaKind::Video => "media-kind-video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// A single entry of a gallery: where it lives and how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    source: String,
    kind: MediaKind,
}

impl MediaItem {
    /// Creates an item whose kind is derived from the source suffix.
    #[must_use]
    pub fn from_source(source: impl Into<String>) -> Self {
        let source = source.into();
        let kind = MediaKind::from_source(&source);
        Self { source, kind }
    }

    /// Creates an item with an explicit kind.
    #[must_use]
    pub fn with_kind(source: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            source: source.into(),
            kind,
        }
    }

    /// Returns the source locator.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the media kind.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Returns the last path segment of the source, for labels.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.source
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.source)
    }
}

/// Ordered, immutable sequence of media items for one product view.
///
/// The order defines the navigation sequence of the lightbox. Cloning is
/// cheap: the items are shared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaCollection {
    items: Arc<[MediaItem]>,
}

impl MediaCollection {
    /// Creates a collection from items in their navigation order.
    #[must_use]
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Builds a collection as images followed by videos.
    ///
    /// Every kind is derived from the source suffix, so a video locator
    /// listed among images is still shown as a video.
    #[must_use]
    pub fn images_then_videos<I, V>(images: I, videos: V) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        let items = images
            .into_iter()
            .map(|s| MediaItem::from_source(s.as_ref()))
            .chain(videos.into_iter().map(|s| MediaItem::from_source(s.as_ref())))
            .collect();
        Self::new(items)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter()
    }
}

impl FromIterator<MediaItem> for MediaCollection {
    fn from_iter<T: IntoIterator<Item = MediaItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
