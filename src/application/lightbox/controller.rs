// SPDX-License-Identifier: MPL-2.0
//! Media lightbox controller.
//!
//! Reconciles clicks, keys, swipes and platform back-navigation into moves
//! of a single [`ViewerState`]. Each input is handled synchronously and in
//! delivery order; there is no debouncing and no precedence between input
//! channels.

use super::input::{LightboxKey, TouchPhase};
use super::snapshot::Snapshot;
use crate::application::port::history::{HistoryMarker, NavigationStack};
use crate::domain::lightbox::{Direction, LightboxError, SwipeTracker, ViewerState};
use crate::domain::media::MediaCollection;

/// Messages for the lightbox controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A thumbnail at this collection index was activated.
    Open(usize),
    /// The close affordance was activated.
    Close,
    /// A previous/next control was activated.
    Navigate(Direction),
    /// A key was pressed while the page had focus.
    KeyPressed(LightboxKey),
    /// Touch input on the viewer.
    Touch(TouchPhase),
    /// The platform navigated back.
    BackNavigated,
    /// The dimmed area around the media was clicked.
    BackdropPressed,
    /// The media area itself was clicked.
    ContentPressed,
}

/// Effects produced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing observable changed.
    None,
    /// The viewer opened (or re-opened) at `index`.
    Opened { index: usize },
    /// The displayed item changed to `index`.
    Navigated { index: usize },
    /// The viewer closed.
    Closed,
    /// A back-navigation consumed the pending marker while the viewer was
    /// already closed.
    MarkerConsumed,
    /// The back-navigation did not belong to the viewer; the host should
    /// apply its own back behaviour.
    BackUnhandled,
    /// An open request addressed no item. The state is unchanged.
    Rejected(LightboxError),
}

/// Lightbox state owned by one product detail view.
#[derive(Debug, Clone)]
pub struct Controller {
    collection: MediaCollection,
    viewer: ViewerState,
    /// A marker entry sits on the host stack and no back-navigation has
    /// consumed it yet.
    marker_pending: bool,
    swipe: SwipeTracker,
}

impl Controller {
    /// Creates a closed controller for `collection`.
    #[must_use]
    pub fn new(collection: MediaCollection) -> Self {
        Self {
            collection,
            viewer: ViewerState::CLOSED,
            marker_pending: false,
            swipe: SwipeTracker::default(),
        }
    }

    /// Handle a lightbox message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, history: &mut dyn NavigationStack) -> Effect {
        match msg {
            Message::Open(index) => match self.open(index, history) {
                Ok(()) => Effect::Opened { index },
                Err(err) => Effect::Rejected(err),
            },
            Message::Close | Message::BackdropPressed => self.close(),
            Message::ContentPressed => Effect::None,
            Message::Navigate(direction) => self.navigate(direction),
            Message::KeyPressed(key) => match key {
                LightboxKey::Escape => self.close(),
                LightboxKey::ArrowLeft if self.viewer.is_open() => {
                    self.navigate(Direction::Previous)
                }
                LightboxKey::ArrowRight if self.viewer.is_open() => {
                    self.navigate(Direction::Next)
                }
                LightboxKey::ArrowLeft | LightboxKey::ArrowRight => Effect::None,
            },
            Message::Touch(phase) => self.touch(phase),
            Message::BackNavigated => self.back_navigated(),
        }
    }

    /// Opens the viewer at `index`.
    ///
    /// The first open of a session pushes one [`HistoryMarker::ModalOpen`]
    /// entry; later opens and index changes push nothing until a
    /// back-navigation has consumed it.
    ///
    /// # Errors
    ///
    /// Returns [`LightboxError::IndexOutOfRange`] when `index` addresses no
    /// item. The state is left untouched.
    pub fn open(
        &mut self,
        index: usize,
        history: &mut dyn NavigationStack,
    ) -> Result<(), LightboxError> {
        let next = ViewerState::open(self.collection.len(), index).inspect_err(|err| {
            tracing::warn!(%err, "rejected lightbox open");
        })?;

        if !self.marker_pending {
            self.marker_pending = history.push_marker(HistoryMarker::ModalOpen);
        }
        self.viewer = next;
        tracing::debug!(index, total = self.collection.len(), "lightbox opened");
        Ok(())
    }

    /// Closes the viewer. Closing a closed viewer is a no-op.
    ///
    /// A pending marker stays on the host stack.
    pub fn close(&mut self) -> Effect {
        if !self.viewer.is_open() {
            return Effect::None;
        }
        self.viewer = self.viewer.close();
        self.swipe.cancel();
        tracing::debug!("lightbox closed");
        Effect::Closed
    }

    /// Moves one item in `direction`. Steps past either end are ignored.
    pub fn navigate(&mut self, direction: Direction) -> Effect {
        let next = self.viewer.navigate(direction, self.collection.len());
        if next == self.viewer {
            return Effect::None;
        }
        self.viewer = next;
        match next.current_index() {
            Some(index) => {
                tracing::debug!(index, ?direction, "lightbox navigated");
                Effect::Navigated { index }
            }
            None => Effect::None,
        }
    }

    fn touch(&mut self, phase: TouchPhase) -> Effect {
        match phase {
            TouchPhase::Started { x } => {
                if self.viewer.is_open() {
                    self.swipe.start(x);
                }
                Effect::None
            }
            TouchPhase::Moved { x } => {
                self.swipe.move_to(x);
                Effect::None
            }
            TouchPhase::Ended => match self.swipe.finish() {
                Some(direction) => self.navigate(direction),
                None => Effect::None,
            },
            TouchPhase::Cancelled => {
                self.swipe.cancel();
                Effect::None
            }
        }
    }

    fn back_navigated(&mut self) -> Effect {
        if !self.marker_pending {
            return Effect::BackUnhandled;
        }
        self.marker_pending = false;
        match self.close() {
            Effect::Closed => Effect::Closed,
            _ => Effect::MarkerConsumed,
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewerState {
        self.viewer
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn collection(&self) -> &MediaCollection {
        &self.collection
    }

    /// Whether a marker pushed by this session is still on the host stack.
    #[must_use]
    pub fn marker_pending(&self) -> bool {
        self.marker_pending
    }

    /// Rendering snapshot, or `None` while closed.
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        let index = self.viewer.current_index()?;
        let item = self.collection.get(index)?;
        let total = self.collection.len();
        Some(Snapshot {
            item,
            index,
            total,
            boundary: self.viewer.boundary(total)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::history::{NoHistory, RecordingHistory};

    fn three_images() -> Controller {
        Controller::new(MediaCollection::images_then_videos(
            ["a.jpg", "b.jpg", "c.jpg"],
            Vec::<&str>::new(),
        ))
    }

    #[test]
    fn starts_closed() {
        let controller = three_images();
        assert!(!controller.is_open());
        assert!(controller.snapshot().is_none());
        assert!(!controller.marker_pending());
    }

    #[test]
    fn open_pushes_marker_once() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();

        let effect = controller.handle(Message::Open(0), &mut history);
        assert_eq!(effect, Effect::Opened { index: 0 });
        controller.handle(Message::Navigate(Direction::Next), &mut history);
        controller.handle(Message::Close, &mut history);
        controller.handle(Message::Open(2), &mut history);

        assert_eq!(history.markers, vec![HistoryMarker::ModalOpen]);
        assert!(controller.marker_pending());
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();

        let effect = controller.handle(Message::Open(3), &mut history);
        assert_eq!(
            effect,
            Effect::Rejected(LightboxError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(!controller.is_open());
        assert!(history.markers.is_empty());
    }

    #[test]
    fn host_without_history_never_marks() {
        let mut controller = three_images();
        controller.handle(Message::Open(1), &mut NoHistory);
        assert!(controller.is_open());
        assert!(!controller.marker_pending());

        let effect = controller.handle(Message::BackNavigated, &mut NoHistory);
        assert_eq!(effect, Effect::BackUnhandled);
        assert!(controller.is_open());
    }

    #[test]
    fn counter_and_controls_follow_navigation() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(0), &mut history);

        let snapshot = controller.snapshot().expect("open");
        assert_eq!(snapshot.counter_label(), "1 / 3");
        assert!(!snapshot.can_go_previous());
        assert!(snapshot.can_go_next());

        controller.handle(Message::Navigate(Direction::Next), &mut history);
        controller.handle(Message::Navigate(Direction::Next), &mut history);

        let snapshot = controller.snapshot().expect("open");
        assert_eq!(snapshot.index, 2);
        assert_eq!(snapshot.counter_label(), "3 / 3");
        assert!(snapshot.can_go_previous());
        assert!(!snapshot.can_go_next());
    }

    #[test]
    fn navigation_past_ends_is_silent() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(0), &mut history);

        let effect = controller.handle(Message::Navigate(Direction::Previous), &mut history);
        assert_eq!(effect, Effect::None);
        assert_eq!(controller.state().current_index(), Some(0));

        controller.handle(Message::Open(2), &mut history);
        let effect = controller.handle(Message::Navigate(Direction::Next), &mut history);
        assert_eq!(effect, Effect::None);
        assert_eq!(controller.state().current_index(), Some(2));
    }

    #[test]
    fn arrow_keys_navigate_only_when_open() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();

        let effect = controller.handle(Message::KeyPressed(LightboxKey::ArrowRight), &mut history);
        assert_eq!(effect, Effect::None);
        assert!(!controller.is_open());

        controller.handle(Message::Open(1), &mut history);
        let effect = controller.handle(Message::KeyPressed(LightboxKey::ArrowRight), &mut history);
        assert_eq!(effect, Effect::Navigated { index: 2 });
        let effect = controller.handle(Message::KeyPressed(LightboxKey::ArrowLeft), &mut history);
        assert_eq!(effect, Effect::Navigated { index: 1 });
    }

    #[test]
    fn escape_closes_and_repeats_harmlessly() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(1), &mut history);

        let effect = controller.handle(Message::KeyPressed(LightboxKey::Escape), &mut history);
        assert_eq!(effect, Effect::Closed);
        let effect = controller.handle(Message::KeyPressed(LightboxKey::Escape), &mut history);
        assert_eq!(effect, Effect::None);
        assert_eq!(controller.state(), ViewerState::CLOSED);
    }

    #[test]
    fn backdrop_closes_but_content_does_not() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(1), &mut history);

        assert_eq!(
            controller.handle(Message::ContentPressed, &mut history),
            Effect::None
        );
        assert!(controller.is_open());

        assert_eq!(
            controller.handle(Message::BackdropPressed, &mut history),
            Effect::Closed
        );
        assert!(!controller.is_open());
    }

    #[test]
    fn long_swipe_left_goes_next() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(0), &mut history);

        controller.handle(Message::Touch(TouchPhase::Started { x: 200.0 }), &mut history);
        let moved = controller.handle(Message::Touch(TouchPhase::Moved { x: 140.0 }), &mut history);
        assert_eq!(moved, Effect::None);
        let ended = controller.handle(Message::Touch(TouchPhase::Ended), &mut history);

        assert_eq!(ended, Effect::Navigated { index: 1 });
    }

    #[test]
    fn short_swipe_keeps_index() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(1), &mut history);

        controller.handle(Message::Touch(TouchPhase::Started { x: 200.0 }), &mut history);
        controller.handle(Message::Touch(TouchPhase::Moved { x: 180.0 }), &mut history);
        let ended = controller.handle(Message::Touch(TouchPhase::Ended), &mut history);

        assert_eq!(ended, Effect::None);
        assert_eq!(controller.state().current_index(), Some(1));
    }

    #[test]
    fn swipe_right_goes_previous() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(2), &mut history);

        controller.handle(Message::Touch(TouchPhase::Started { x: 40.0 }), &mut history);
        controller.handle(Message::Touch(TouchPhase::Moved { x: 160.0 }), &mut history);
        let ended = controller.handle(Message::Touch(TouchPhase::Ended), &mut history);

        assert_eq!(ended, Effect::Navigated { index: 1 });
    }

    #[test]
    fn touch_while_closed_is_not_tracked() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();

        controller.handle(Message::Touch(TouchPhase::Started { x: 200.0 }), &mut history);
        controller.handle(Message::Open(0), &mut history);
        controller.handle(Message::Touch(TouchPhase::Moved { x: 100.0 }), &mut history);
        let ended = controller.handle(Message::Touch(TouchPhase::Ended), &mut history);

        assert_eq!(ended, Effect::None);
        assert_eq!(controller.state().current_index(), Some(0));
    }

    #[test]
    fn cancelled_touch_does_not_navigate() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(0), &mut history);

        controller.handle(Message::Touch(TouchPhase::Started { x: 200.0 }), &mut history);
        controller.handle(Message::Touch(TouchPhase::Moved { x: 20.0 }), &mut history);
        controller.handle(Message::Touch(TouchPhase::Cancelled), &mut history);
        let ended = controller.handle(Message::Touch(TouchPhase::Ended), &mut history);

        assert_eq!(ended, Effect::None);
        assert_eq!(controller.state().current_index(), Some(0));
    }

    #[test]
    fn back_closes_once_then_is_unhandled() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(2), &mut history);

        let first = controller.handle(Message::BackNavigated, &mut history);
        assert_eq!(first, Effect::Closed);
        assert!(!controller.is_open());
        assert!(!controller.marker_pending());

        let second = controller.handle(Message::BackNavigated, &mut history);
        assert_eq!(second, Effect::BackUnhandled);
    }

    #[test]
    fn back_after_manual_close_consumes_marker() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(0), &mut history);
        controller.handle(Message::Close, &mut history);

        let effect = controller.handle(Message::BackNavigated, &mut history);
        assert_eq!(effect, Effect::MarkerConsumed);
        assert!(!controller.marker_pending());
    }

    #[test]
    fn reopen_after_back_pushes_fresh_marker() {
        let mut controller = three_images();
        let mut history = RecordingHistory::default();
        controller.handle(Message::Open(0), &mut history);
        controller.handle(Message::BackNavigated, &mut history);
        controller.handle(Message::Open(1), &mut history);

        assert_eq!(history.markers.len(), 2);
        assert!(controller.marker_pending());
    }
}
