// SPDX-License-Identifier: MPL-2.0
//! Read-only view of an open lightbox for the renderer.

use crate::domain::lightbox::Boundary;
use crate::domain::media::{MediaItem, MediaKind};

/// Element the renderer paints for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaElement<'a> {
    /// Static image display.
    Image { source: &'a str },
    /// Video playback surface.
    Video {
        source: &'a str,
        /// Playback starts as soon as the element is displayed.
        autoplay: bool,
        /// Native transport controls are exposed.
        controls: bool,
    },
}

impl<'a> MediaElement<'a> {
    /// Chooses the element for `item` from its kind.
    #[must_use]
    pub fn for_item(item: &'a MediaItem) -> Self {
        match item.kind() {
            MediaKind::Image => MediaElement::Image {
                source: item.source(),
            },
            MediaKind::Video => MediaElement::Video {
                source: item.source(),
                autoplay: true,
                controls: true,
            },
        }
    }

    #[must_use]
    pub fn source(&self) -> &'a str {
        match self {
            MediaElement::Image { source } | MediaElement::Video { source, .. } => source,
        }
    }
}

/// Everything the renderer needs to paint an open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Item currently displayed.
    pub item: &'a MediaItem,
    /// Zero-based index of `item`.
    pub index: usize,
    /// Number of items in the collection.
    pub total: usize,
    /// Ends of the collection reached by `index`.
    pub boundary: Boundary,
}

impl<'a> Snapshot<'a> {
    /// One-based position for the counter.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Counter text, e.g. `1 / 3`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.position(), self.total)
    }

    /// "Previous" is offered only away from the first item.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.boundary.at_start
    }

    /// "Next" is offered only away from the last item.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.boundary.at_end
    }

    #[must_use]
    pub fn element(&self) -> MediaElement<'a> {
        MediaElement::for_item(self.item)
    }
}
