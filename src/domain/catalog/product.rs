// SPDX-License-Identifier: MPL-2.0
//! Products and store information.

use super::price::Price;
use crate::domain::media::MediaCollection;

/// A product shown on the home grid and on its own detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Identifier used in the `/product/<id>` route.
    pub id: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    /// Cover image used by the card and the detail hero.
    pub cover: String,
    /// Gallery images, in display order.
    pub images: Vec<String>,
    /// Gallery videos, in display order.
    pub videos: Vec<String>,
    pub features: Vec<String>,
}

impl Product {
    /// The lightbox collection of this product: images, then videos.
    #[must_use]
    pub fn media_collection(&self) -> MediaCollection {
        MediaCollection::images_then_videos(&self.images, &self.videos)
    }

    /// Collection index of the `position`-th video.
    #[must_use]
    pub fn video_index(&self, position: usize) -> usize {
        self.images.len() + position
    }
}

/// Store-wide information shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub name: String,
    pub tagline: String,
    pub phones: Vec<String>,
    /// Flat delivery charge added to every order.
    pub delivery_charge: Price,
    /// Path of the logo image, resolved like any media source.
    pub logo: Option<String>,
}
