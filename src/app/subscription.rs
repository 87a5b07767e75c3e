// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, mouse, touch and window events are translated here into
//! toolkit-neutral [`InputEvent`]s. Keyboard shortcuts are only honoured when
//! no widget captured the event; touch input is always forwarded so that a
//! swipe starting on a control still counts.

use super::Message;
use crate::application::lightbox::{LightboxKey, TouchPhase};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, mouse, touch, window, Event, Subscription};

/// Platform input the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key meaningful to the lightbox.
    Key(LightboxKey),
    /// Platform back-navigation.
    Back,
    Touch(TouchPhase),
}

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| translate(&event, status))
}

/// Maps a native event to an application message.
#[must_use]
pub fn translate(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match status {
            event::Status::Ignored => key_input(key, *modifiers).map(Message::Input),
            event::Status::Captured => None,
        },
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Back)) => {
            Some(Message::Input(InputEvent::Back))
        }
        Event::Touch(touch_event) => {
            touch_input(touch_event).map(|phase| Message::Input(InputEvent::Touch(phase)))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size.width)),
        Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size.width))
        }
        _ => None,
    }
}

/// Maps a key press to an input event.
///
/// `Alt+ArrowLeft` is back-navigation and takes precedence over the plain
/// arrow key.
#[must_use]
pub fn key_input(key: &Key, modifiers: Modifiers) -> Option<InputEvent> {
    match key {
        Key::Named(Named::ArrowLeft) if modifiers.alt() => Some(InputEvent::Back),
        Key::Named(Named::Backspace) => Some(InputEvent::Back),
        Key::Named(Named::ArrowLeft) => Some(InputEvent::Key(LightboxKey::ArrowLeft)),
        Key::Named(Named::ArrowRight) => Some(InputEvent::Key(LightboxKey::ArrowRight)),
        Key::Named(Named::Escape) => Some(InputEvent::Key(LightboxKey::Escape)),
        _ => None,
    }
}

fn touch_input(event: &touch::Event) -> Option<TouchPhase> {
    match event {
        touch::Event::FingerPressed { position, .. } => Some(TouchPhase::Started { x: position.x }),
        touch::Event::FingerMoved { position, .. } => Some(TouchPhase::Moved { x: position.x }),
        touch::Event::FingerLifted { .. } => Some(TouchPhase::Ended),
        touch::Event::FingerLost { .. } => Some(TouchPhase::Cancelled),
    }
}
