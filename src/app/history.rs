// SPDX-License-Identifier: MPL-2.0
//! In-app back/forward stack.
//!
//! Route changes push entries; the lightbox pushes a marker entry for the
//! current route so that the next back-navigation closes it instead of
//! leaving the page.

use super::route::Route;
use crate::application::port::history::{HistoryMarker, NavigationStack};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    route: Route,
    marker: Option<HistoryMarker>,
}

/// Result of a back-navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popped {
    /// Marker carried by the entry that was left, if any.
    pub marker: Option<HistoryMarker>,
    /// Route of the entry that is now current.
    pub route: Route,
}

/// Application history. Never empty.
#[derive(Debug, Clone)]
pub struct AppHistory {
    entries: Vec<Entry>,
}

impl AppHistory {
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![Entry {
                route: initial,
                marker: None,
            }],
        }
    }

    /// Route of the top entry.
    #[must_use]
    pub fn current(&self) -> &Route {
        // `entries` always holds the initial entry.
        &self.entries[self.entries.len() - 1].route
    }

    /// Pushes `route` unless it is already current. Returns whether an
    /// entry was pushed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if *self.current() == route {
            return false;
        }
        self.entries.push(Entry {
            route,
            marker: None,
        });
        true
    }

    /// Pops the top entry. Returns `None` on the initial entry.
    pub fn back(&mut self) -> Option<Popped> {
        if self.entries.len() <= 1 {
            return None;
        }
        let left = self.entries.pop()?;
        Some(Popped {
            marker: left.marker,
            route: self.current().clone(),
        })
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AppHistory {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl NavigationStack for AppHistory {
    fn push_marker(&mut self, marker: HistoryMarker) -> bool {
        let route = self.current().clone();
        self.entries.push(Entry {
            route,
            marker: Some(marker),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Route {
        Route::Product(id.to_string())
    }

    #[test]
    fn starts_at_initial_route() {
        let history = AppHistory::new(product("big"));
        assert_eq!(history.current(), &product("big"));
        assert!(!history.can_go_back());
    }

    #[test]
    fn navigating_to_current_route_is_ignored() {
        let mut history = AppHistory::default();
        assert!(!history.navigate(Route::Home));
        assert!(history.navigate(product("small")));
        assert!(!history.navigate(product("small")));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn back_returns_previous_route() {
        let mut history = AppHistory::default();
        history.navigate(product("small"));

        let popped = history.back().expect("one entry to pop");
        assert_eq!(popped.route, Route::Home);
        assert_eq!(popped.marker, None);
        assert!(history.back().is_none());
        assert_eq!(history.current(), &Route::Home);
    }

    #[test]
    fn marker_keeps_route_and_reports_on_back() {
        let mut history = AppHistory::default();
        history.navigate(product("black"));
        assert!(history.push_marker(HistoryMarker::ModalOpen));
        assert_eq!(history.current(), &product("black"));

        let popped = history.back().expect("marker entry");
        assert_eq!(popped.marker, Some(HistoryMarker::ModalOpen));
        assert_eq!(popped.route, product("black"));

        let popped = history.back().expect("product entry");
        assert_eq!(popped.marker, None);
        assert_eq!(popped.route, Route::Home);
    }
}
