// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe gesture tracking.
//!
//! A gesture records where the touch started and where it was last seen.
//! Only the end of the gesture is evaluated; intermediate moves just update
//! the tracked end coordinate.

use super::state::Direction;

/// Minimum horizontal travel, in logical pixels, for a swipe to navigate.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Tracks the horizontal coordinates of the gesture in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeTracker {
    /// Starts a new gesture, discarding any unfinished one.
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    /// Records the latest position of the gesture in progress.
    pub fn move_to(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    /// Ends the gesture and returns the navigation it asks for, if any.
    ///
    /// Swiping left (finger travels towards smaller x) moves to the next
    /// item, swiping right to the previous one. The tracker is reset
    /// whatever the outcome.
    pub fn finish(&mut self) -> Option<Direction> {
        let start = self.start_x.take();
        let end = self.end_x.take();

        let travel = start? - end?;
        if travel >= SWIPE_THRESHOLD {
            Some(Direction::Next)
        } else if -travel >= SWIPE_THRESHOLD {
            Some(Direction::Previous)
        } else {
            None
        }
    }

    /// Drops the gesture in progress without evaluating it.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
