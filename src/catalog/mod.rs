// SPDX-License-Identifier: MPL-2.0
//! Product catalog: the built-in clock collection or a TOML catalog file.
//!
//! # File format
//!
//! ```toml
//! [store]
//! name = "IND-TECH"
//! tagline = "Premium clock solutions for your space"
//! phones = ["9842133104"]
//! delivery_charge = 1000
//!
//! [[products]]
//! id = "small"
//! name = "Small Clock"
//! price = 13000
//! description = "Compact and elegant timepiece"
//! cover = "/assets/images/small/small.jpeg"
//! images = ["/assets/images/small/small1.jpeg"]
//! videos = ["/assets/videos/small/smallv1.mp4"]
//! features = ["Compact Design"]
//! ```

mod builtin;

pub use builtin::builtin;

use crate::domain::catalog::{Price, Product, StoreInfo};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Store information plus its products, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub store: StoreInfo,
    pub products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting ids that cannot appear in a
    /// `/product/<id>` route or that are used twice.
    pub fn new(store: StoreInfo, products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.id.is_empty() || product.id.contains('/') {
                return Err(Error::Catalog(format!(
                    "invalid product id `{}`",
                    product.id
                )));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate product id `{}`",
                    product.id
                )));
            }
        }
        Ok(Self { store, products })
    }

    /// Product with the given route id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    store: StoreEntry,
    #[serde(default)]
    products: Vec<ProductEntry>,
}

#[derive(Debug, Deserialize)]
struct StoreEntry {
    name: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    delivery_charge: u32,
    #[serde(default)]
    logo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductEntry {
    id: String,
    name: String,
    price: u32,
    #[serde(default)]
    description: String,
    cover: String,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    videos: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
}

impl From<StoreEntry> for StoreInfo {
    fn from(entry: StoreEntry) -> Self {
        StoreInfo {
            name: entry.name,
            tagline: entry.tagline,
            phones: entry.phones,
            delivery_charge: Price::new(entry.delivery_charge),
            logo: entry.logo,
        }
    }
}

impl From<ProductEntry> for Product {
    fn from(entry: ProductEntry) -> Self {
        Product {
            id: entry.id,
            name: entry.name,
            price: Price::new(entry.price),
            description: entry.description,
            cover: entry.cover,
            images: entry.images,
            videos: entry.videos,
            features: entry.features,
        }
    }
}

/// Parses a catalog from TOML text.
pub fn parse(content: &str) -> Result<Catalog> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
    Catalog::new(
        file.store.into(),
        file.products.into_iter().map(Product::from).collect(),
    )
}

/// Loads a catalog file.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Loads `path` when given, otherwise the built-in catalog.
///
/// A file that cannot be loaded falls back to the built-in catalog and
/// yields a warning key.
pub fn load_or_builtin(path: Option<&Path>) -> (Catalog, Option<String>) {
    let Some(path) = path else {
        return (builtin(), None);
    };
    match load_from_path(path) {
        Ok(catalog) => {
            tracing::info!(
                path = %path.display(),
                products = catalog.products.len(),
                "catalog loaded"
            );
            (catalog, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "using built-in catalog");
            (
                builtin(),
                Some("notification-catalog-load-error".to_string()),
            )
        }
    }
}
