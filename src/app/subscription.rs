// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Each screen only listens to what it needs: animation ticks on the splash
//! and scanning screens, preview ticks on the camera, and the Escape key while
//! a scan can be cancelled.

use super::{Message, Screen};
use crate::app::config::{ANIMATION_FRAME_INTERVAL_MS, PREVIEW_FRAME_INTERVAL_MS};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the clock driving the current screen, if it needs one.
pub fn create_tick_subscription(screen: Screen) -> Subscription<Message> {
    let interval = match screen {
        Screen::Splash | Screen::Scanning => ANIMATION_FRAME_INTERVAL_MS,
        Screen::Camera => PREVIEW_FRAME_INTERVAL_MS,
        Screen::Onboarding | Screen::Main | Screen::Detail => return Subscription::none(),
    };
    time::every(Duration::from_millis(interval)).map(Message::Tick)
}

/// Routes keyboard events the current screen reacts to.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Scanning => event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                _ => None,
            }
        }),
        _ => Subscription::none(),
    }
}
