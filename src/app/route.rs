// SPDX-License-Identifier: MPL-2.0
//! Page routes addressed by web-style paths.

use std::fmt;

const PRODUCT_PREFIX: &str = "/product/";

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Detail page of the product with this id. The id may name no product.
    Product(String),
}

impl Route {
    /// Parses a path. Anything unrecognised is the home page.
    ///
    /// ```
    /// use clock_catalog::app::Route;
    ///
    /// assert_eq!(Route::parse("/"), Route::Home);
    /// assert_eq!(Route::parse("/product/big"), Route::Product("big".into()));
    /// assert_eq!(Route::parse("/about"), Route::Home);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path.is_empty() || path == "/" {
            return Route::Home;
        }
        if path.starts_with(PRODUCT_PREFIX) {
            // Only the second segment is the id; deeper segments are dropped.
            let id = path.split('/').nth(2).unwrap_or_default();
            return Route::Product(id.to_string());
        }
        Route::Home
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Product(id) => format!("{PRODUCT_PREFIX}{id}"),
        }
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_root_are_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/"), Route::Home);
    }

    #[test]
    fn product_takes_second_segment() {
        assert_eq!(Route::parse("/product/small"), Route::Product("small".into()));
        assert_eq!(
            Route::parse("/product/small/extra"),
            Route::Product("small".into())
        );
    }

    #[test]
    fn bare_product_prefix_has_empty_id() {
        assert_eq!(Route::parse("/product/"), Route::Product(String::new()));
    }

    #[test]
    fn other_paths_fall_back_home() {
        assert_eq!(Route::parse("/product"), Route::Home);
        assert_eq!(Route::parse("/contact"), Route::Home);
        assert_eq!(Route::parse("product/small"), Route::Home);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Home, Route::Product("black".into())] {
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::Product("big".into()).to_string(), "/product/big");
    }
}
