// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events to application messages:
//! window open/resize events refresh the window metrics, and the Left/Right
//! arrow keys page through the gallery when no widget captured them.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => navigation_for_key(&key).map(Message::Gallery),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Maps a pressed key to a gallery navigation message.
pub fn navigation_for_key(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_navigate() {
        assert_eq!(
            navigation_for_key(&Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::Previous)
        );
        assert_eq!(
            navigation_for_key(&Key::Named(Named::ArrowRight)),
            Some(gallery::Message::Next)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(navigation_for_key(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(navigation_for_key(&Key::Character("n".into())), None);
    }
}
