// SPDX-License-Identifier: MPL-2.0
//! End-to-end lightbox behaviour through the public API, with the
//! application history stack as the platform.

use clock_catalog::app::{AppHistory, Route};
use clock_catalog::application::lightbox::{Controller, Effect, LightboxKey, Message, TouchPhase};
use clock_catalog::application::port::{HistoryMarker, RecordingHistory};
use clock_catalog::catalog;
use clock_catalog::domain::lightbox::{Direction, LightboxError};
use clock_catalog::domain::media::{MediaCollection, MediaKind};

fn three_images() -> Controller {
    Controller::new(MediaCollection::images_then_videos(
        ["a.jpg", "b.jpg", "c.jpg"],
        Vec::<&str>::new(),
    ))
}

fn current(controller: &Controller) -> Option<usize> {
    controller.state().current_index()
}

#[test]
fn open_shows_requested_item_for_every_index() {
    let product = catalog::builtin().find("big").cloned().expect("big clock");
    let collection = product.media_collection();

    for index in 0..collection.len() {
        let mut controller = Controller::new(collection.clone());
        assert_eq!(
            controller.handle(Message::Open(index), &mut RecordingHistory::default()),
            Effect::Opened { index }
        );
        assert!(controller.is_open());
        assert_eq!(current(&controller), Some(index));
    }
}

#[test]
fn three_image_walkthrough() {
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
    assert!(!snapshot.can_go_next());
    assert!(snapshot.can_go_previous());
}

#[test]
fn round_trip_returns_to_interior_index() {
    let product = catalog::builtin().find("small").cloned().expect("small clock");
    let len = product.media_collection().len();

    for index in 1..len - 1 {
        let mut controller = Controller::new(product.media_collection());
        controller.handle(Message::Open(index), &mut RecordingHistory::default());
        controller.navigate(Direction::Next);
        controller.navigate(Direction::Previous);
        assert_eq!(current(&controller), Some(index));
    }
}

#[test]
fn close_is_idempotent() {
    let mut controller = three_images();
    controller.handle(Message::Open(1), &mut RecordingHistory::default());

    assert_eq!(controller.close(), Effect::Closed);
    let closed = controller.state();
    assert_eq!(controller.close(), Effect::None);
    assert_eq!(controller.state(), closed);
    assert_eq!(current(&controller), None);
}

#[test]
fn swipe_scenarios() {
    let mut controller = three_images();
    let mut history = RecordingHistory::default();
    controller.handle(Message::Open(0), &mut history);

    for phase in [
        TouchPhase::Started { x: 200.0 },
        TouchPhase::Moved { x: 140.0 },
        TouchPhase::Ended,
    ] {
        controller.handle(Message::Touch(phase), &mut history);
    }
    assert_eq!(current(&controller), Some(1));

    for phase in [
        TouchPhase::Started { x: 200.0 },
        TouchPhase::Moved { x: 180.0 },
        TouchPhase::Ended,
    ] {
        controller.handle(Message::Touch(phase), &mut history);
    }
    assert_eq!(current(&controller), Some(1));
}

#[test]
fn out_of_range_open_is_rejected() {
    let mut controller = three_images();
    assert_eq!(
        controller.handle(Message::Open(3), &mut RecordingHistory::default()),
        Effect::Rejected(LightboxError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert!(!controller.is_open());
}

#[test]
fn back_navigation_through_app_history() {
    let product = catalog::builtin().find("small").cloned().expect("small clock");
    let mut history = AppHistory::new(Route::Home);
    history.navigate(Route::Product(product.id.clone()));

    let mut controller = Controller::new(product.media_collection());
    controller.handle(Message::Open(17), &mut history);
    assert_eq!(history.len(), 3);
    assert_eq!(
        controller.snapshot().map(|s| s.item.kind()),
        Some(MediaKind::Video)
    );

    // Changing items does not add entries.
    controller.handle(Message::KeyPressed(LightboxKey::ArrowLeft), &mut history);
    assert_eq!(history.len(), 3);

    let popped = history.back().expect("marker entry");
    assert_eq!(popped.marker, Some(HistoryMarker::ModalOpen));
    assert_eq!(popped.route, Route::Product("small".into()));
    assert_eq!(
        controller.handle(Message::BackNavigated, &mut history),
        Effect::Closed
    );

    // The next back belongs to the page, not the viewer.
    let popped = history.back().expect("product entry");
    assert_eq!(popped.marker, None);
    assert_eq!(popped.route, Route::Home);
    assert_eq!(
        controller.handle(Message::BackNavigated, &mut history),
        Effect::BackUnhandled
    );
    assert!(!controller.is_open());
}
