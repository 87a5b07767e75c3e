// SPDX-License-Identifier: MPL-2.0
//! The IND-TECH clock collection shipped with the application.

use super::Catalog;
use crate::domain::catalog::{Price, Product, StoreInfo};

struct Spec {
    id: &'static str,
    name: &'static str,
    price: u32,
    description: &'static str,
    image_count: usize,
    video_count: usize,
    features: [&'static str; 3],
}

const PRODUCTS: [Spec; 3] = [
    Spec {
        id: "small",
        name: "Small Clock",
        price: 13_000,
        description: "Compact and elegant timepiece perfect for any space",
        image_count: 17,
        video_count: 1,
        features: ["Compact Design", "Easy Installation", "Quality Materials"],
    },
    Spec {
        id: "black",
        name: "Black Clock",
        price: 23_000,
        description: "Sophisticated black finish with premium craftsmanship",
        image_count: 8,
        video_count: 2,
        features: [
            "Premium Black Finish",
            "Modern Aesthetic",
            "Durable Construction",
        ],
    },
    Spec {
        id: "big",
        name: "Big Clock",
        price: 33_000,
        description: "Statement piece with impressive presence and detail",
        image_count: 29,
        video_count: 2,
        features: [
            "Large Display",
            "Premium Quality",
            "Architectural Statement",
        ],
    },
];

impl Spec {
    fn product(&self) -> Product {
        let id = self.id;
        Product {
            id: id.to_string(),
            name: self.name.to_string(),
            price: Price::new(self.price),
            description: self.description.to_string(),
            cover: format!("/assets/images/{id}/{id}.jpeg"),
            images: (1..=self.image_count)
                .map(|n| format!("/assets/images/{id}/{id}{n}.jpeg"))
                .collect(),
            videos: (1..=self.video_count)
                .map(|n| format!("/assets/videos/{id}/{id}v{n}.mp4"))
                .collect(),
            features: self.features.iter().map(ToString::to_string).collect(),
        }
    }
}

fn store() -> StoreInfo {
    StoreInfo {
        name: "IND-TECH".to_string(),
        tagline: "Premium clock solutions for your space".to_string(),
        phones: vec!["9842133104".to_string(), "9843077896".to_string()],
        delivery_charge: Price::new(1_000),
        logo: Some("/assets/imgs/logow.png".to_string()),
    }
}

/// The built-in catalog.
#[must_use]
pub fn builtin() -> Catalog {
    Catalog {
        store: store(),
        products: PRODUCTS.iter().map(Spec::product).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaKind;

    #[test]
    fn has_three_clocks_in_order() {
        let ids: Vec<_> = builtin().products.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["small", "black", "big"]);
    }

    #[test]
    fn media_counts_match_collection() {
        let catalog = builtin();
        let counts: Vec<_> = catalog
            .products
            .iter()
            .map(|p| (p.images.len(), p.videos.len()))
            .collect();
        assert_eq!(counts, [(17, 1), (8, 2), (29, 2)]);
    }

    #[test]
    fn sources_follow_asset_layout() {
        let catalog = builtin();
        let black = catalog.find("black").expect("black clock");

        assert_eq!(black.cover, "/assets/images/black/black.jpeg");
        assert_eq!(black.images[0], "/assets/images/black/black1.jpeg");
        assert_eq!(black.videos[1], "/assets/videos/black/blackv2.mp4");
        assert_eq!(black.price.to_string(), "₹23,000");
    }

    #[test]
    fn videos_follow_images_in_collection() {
        let catalog = builtin();
        let small = catalog.find("small").expect("small clock");
        let collection = small.media_collection();

        assert_eq!(collection.len(), 18);
        assert_eq!(collection.get(16).map(|i| i.kind()), Some(MediaKind::Image));
        assert_eq!(collection.get(17).map(|i| i.kind()), Some(MediaKind::Video));
    }

    #[test]
    fn store_details() {
        let store = builtin().store;
        assert_eq!(store.name, "IND-TECH");
        assert_eq!(store.delivery_charge.to_string(), "₹1,000");
        assert_eq!(store.phones.len(), 2);
    }
}
