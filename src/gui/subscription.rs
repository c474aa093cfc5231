//! gui/subscription.rs
//! Periodic playback polling + global keyboard shortcuts.

use std::time::Duration;

use iced::event::{self, Event};
use iced::keyboard::{self, key::Named};
use iced::{Subscription, time};

use super::state::{Message, Resona};

pub(crate) fn subscription(state: &Resona) -> Subscription<Message> {
    let keys = event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key.as_ref() {
            keyboard::Key::Named(Named::Space) => Some(Message::TogglePlayPause),
            keyboard::Key::Named(Named::ArrowRight) => Some(Message::Next),
            keyboard::Key::Named(Named::ArrowLeft) => Some(Message::Prev),
            keyboard::Key::Named(Named::Escape) => Some(Message::Stop),
            keyboard::Key::Character("m") => Some(Message::ToggleMute),
            _ => None,
        },
        _ => None,
    });

    // No engine yet = nothing to poll.
    let tick = if state.playback_events.is_some() {
        time::every(Duration::from_millis(200)).map(|_| Message::TickPlayback)
    } else {
        Subscription::none()
    };

    Subscription::batch([keys, tick])
}
