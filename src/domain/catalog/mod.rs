// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types: products, prices and store information.

pub mod price;
pub mod product;

pub use price::{Price, CURRENCY_SYMBOL};
pub use product::{Product, StoreInfo};
