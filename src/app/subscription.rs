// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window events (file drops, file hovering, resizes) and the
//! global left-button release all arrive here and are routed into
//! top-level messages. A periodic tick runs only while notifications
//! are on screen, to drive their auto-dismiss timers.

use super::Message;
use crate::ui::drag;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Creates the subscription routing native events into messages.
///
/// The button release is listened to globally rather than per-widget so
/// a drag gesture resolves no matter where the cursor ends up.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Drag(drag::Message::Released))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
