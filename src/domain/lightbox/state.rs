// SPDX-License-Identifier: MPL-2.0
//! Viewer state and its pure transitions.
//!
//! Every transition consumes the current [`ViewerState`] and returns the
//! next one. The renderer repaints from the returned value instead of
//! mutating anything in place.

use std::fmt;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One item back (delta `-1`).
    Previous,
    /// One item forward (delta `+1`).
    Next,
}

impl Direction {
    /// Maps a signed step onto a direction. Only `-1` and `+1` are steps.
    #[must_use]
    pub fn from_delta(delta: isize) -> Option<Self> {
        match delta {
            -1 => Some(Direction::Previous),
            1 => Some(Direction::Next),
            _ => None,
        }
    }

    /// Returns the signed step of this direction.
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Error raised when the lightbox is asked to open outside its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxError {
    /// The requested index does not address an item of the collection.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Collection length at the time of the request.
        len: usize,
    },
}

impl fmt::Display for LightboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightboxError::IndexOutOfRange { index, len } => {
                write!(f, "media index {index} is out of range for {len} item(s)")
            }
        }
    }
}

impl std::error::Error for LightboxError {}

/// Which ends of the collection the current index touches.
///
/// Both flags are set for a single-item collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boundary {
    /// The current index is the first one: "Previous" is unavailable.
    pub at_start: bool,
    /// The current index is the last one: "Next" is unavailable.
    pub at_end: bool,
}

impl Boundary {
    /// Computes the boundary flags for `index` in a collection of `len` items.
    #[must_use]
    pub fn of(index: usize, len: usize) -> Self {
        Self {
            at_start: index == 0,
            at_end: index + 1 >= len,
        }
    }

    /// Whether a step in `direction` would leave the collection.
    #[must_use]
    pub fn blocks(self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.at_start,
            Direction::Next => self.at_end,
        }
    }
}

/// State of one lightbox session.
///
/// `is_open()` holds exactly when a current index is present, and a present
/// index always addresses an item of the collection the state was opened
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    current_index: Option<usize>,
}

impl ViewerState {
    /// The closed viewer.
    pub const CLOSED: Self = Self {
        current_index: None,
    };

    /// Opens the viewer at `index` of a collection of `len` items.
    ///
    /// # Errors
    ///
    /// Returns [`LightboxError::IndexOutOfRange`] when `index >= len`. Out of
    /// range requests are rejected rather than clamped.
    pub fn open(len: usize, index: usize) -> Result<Self, LightboxError> {
        if index < len {
            Ok(Self {
                current_index: Some(index),
            })
        } else {
            Err(LightboxError::IndexOutOfRange { index, len })
        }
    }

    /// Returns the closed state. Closing a closed viewer yields the same state.
    #[must_use]
    pub fn close(self) -> Self {
        Self::CLOSED
    }

    /// Moves one step in `direction` when the target stays inside `[0, len)`.
    ///
    /// Steps past either end, and steps on a closed viewer, return the
    /// state unchanged. There is no wrap-around.
    #[must_use]
    pub fn navigate(self, direction: Direction, len: usize) -> Self {
        let Some(index) = self.current_index else {
            return self;
        };

        let target = match direction {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => index.checked_add(1).filter(|&next| next < len),
        };

        match target {
            Some(next) => Self {
                current_index: Some(next),
            },
            None => self,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.current_index.is_some()
    }

    #[must_use]
    pub fn current_index(self) -> Option<usize> {
        self.current_index
    }

    /// Boundary flags of the current index, or `None` when closed.
    #[must_use]
    pub fn boundary(self, len: usize) -> Option<Boundary> {
        self.current_index.map(|index| Boundary::of(index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sets_index() {
        for index in 0..4 {
            let state = ViewerState::open(4, index).expect("index in range");
            assert!(state.is_open());
            assert_eq!(state.current_index(), Some(index));
        }
    }

    #[test]
    fn open_rejects_out_of_range_index() {
        assert_eq!(
            ViewerState::open(3, 3),
            Err(LightboxError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(ViewerState::open(0, 0).is_err());
    }

    #[test]
    fn close_is_idempotent() {
        let open = ViewerState::open(3, 1).expect("index in range");
        let closed = open.close();
        assert!(!closed.is_open());
        assert_eq!(closed.current_index(), None);
        assert_eq!(closed.close(), closed);
        assert_eq!(closed, ViewerState::CLOSED);
    }

    #[test]
    fn navigate_round_trip_in_the_middle() {
        let len = 5;
        for index in 1..len - 1 {
            let state = ViewerState::open(len, index).expect("index in range");
            let back = state
                .navigate(Direction::Next, len)
                .navigate(Direction::Previous, len);
            assert_eq!(back.current_index(), Some(index));
        }
    }

    #[test]
    fn navigate_stops_at_both_ends() {
        let first = ViewerState::open(3, 0).expect("index in range");
        assert_eq!(
            first.navigate(Direction::Previous, 3).current_index(),
            Some(0)
        );

        let last = ViewerState::open(3, 2).expect("index in range");
        assert_eq!(last.navigate(Direction::Next, 3).current_index(), Some(2));
    }

    #[test]
    fn navigate_on_closed_viewer_is_ignored() {
        let state = ViewerState::CLOSED.navigate(Direction::Next, 3);
        assert_eq!(state, ViewerState::CLOSED);
    }

    #[test]
    fn boundary_flags_follow_index() {
        assert_eq!(
            Boundary::of(0, 3),
            Boundary {
                at_start: true,
                at_end: false
            }
        );
        assert_eq!(
            Boundary::of(1, 3),
            Boundary {
                at_start: false,
                at_end: false
            }
        );
        assert_eq!(
            Boundary::of(2, 3),
            Boundary {
                at_start: false,
                at_end: true
            }
        );
    }

    #[test]
    fn single_item_touches_both_ends() {
        let boundary = Boundary::of(0, 1);
        assert!(boundary.at_start && boundary.at_end);
        assert!(boundary.blocks(Direction::Previous));
        assert!(boundary.blocks(Direction::Next));
    }

    #[test]
    fn boundary_is_none_when_closed() {
        assert!(ViewerState::CLOSED.boundary(3).is_none());
    }

    #[test]
    fn delta_mapping() {
        assert_eq!(Direction::from_delta(-1), Some(Direction::Previous));
        assert_eq!(Direction::from_delta(1), Some(Direction::Next));
        assert_eq!(Direction::from_delta(0), None);
        assert_eq!(Direction::from_delta(2), None);
        assert_eq!(Direction::Next.delta(), 1);
    }

    #[test]
    fn error_message_names_index_and_len() {
        let err = LightboxError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "media index 7 is out of range for 3 item(s)"
        );
    }
}
