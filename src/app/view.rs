// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ColorScheme;
use crate::ui::{camera, detail, home, onboarding, scanning, splash};
use iced::{
    widget::{Container, Space},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub colors: &'a ColorScheme,
    pub splash: &'a splash::State,
    pub onboarding: &'a onboarding::State,
    pub main: &'a home::State,
    pub camera: Option<&'a camera::State>,
    pub scanning: Option<&'a scanning::State>,
    pub detail: Option<&'a detail::State>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Splash => view_splash(ctx.splash, ctx.i18n, ctx.colors),
        Screen::Onboarding => view_onboarding(ctx.onboarding, ctx.i18n, ctx.colors),
        Screen::Main => view_main(ctx.main, ctx.i18n, ctx.colors),
        Screen::Camera => view_camera(ctx.camera, ctx.i18n),
        Screen::Scanning => view_scanning(ctx.scanning, ctx.i18n),
        Screen::Detail => view_detail(ctx.detail, ctx.i18n, ctx.colors),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_splash<'a>(
    state: &'a splash::State,
    i18n: &'a I18n,
    colors: &'a ColorScheme,
) -> Element<'a, Message> {
    splash::view(splash::ViewContext {
        state,
        colors,
        subtitle: i18n.tr("splash-subtitle"),
    })
    .map(Message::Splash)
}

fn view_onboarding<'a>(
    state: &'a onboarding::State,
    i18n: &'a I18n,
    colors: &'a ColorScheme,
) -> Element<'a, Message> {
    onboarding::view(onboarding::ViewContext {
        i18n,
        state,
        colors,
    })
    .map(Message::Onboarding)
}

fn view_main<'a>(
    state: &'a home::State,
    i18n: &'a I18n,
    colors: &'a ColorScheme,
) -> Element<'a, Message> {
    home::view(home::ViewContext {
        i18n,
        state,
        colors,
    })
    .map(Message::Main)
}

fn view_camera<'a>(state: Option<&'a camera::State>, i18n: &'a I18n) -> Element<'a, Message> {
    match state {
        Some(state) => camera::view(camera::ViewContext { i18n, state }).map(Message::Camera),
        None => blank(),
    }
}

fn view_scanning<'a>(state: Option<&'a scanning::State>, i18n: &'a I18n) -> Element<'a, Message> {
    match state {
        Some(state) => {
            scanning::view(scanning::ViewContext { i18n, state }).map(Message::Scanning)
        }
        None => blank(),
    }
}

fn view_detail<'a>(
    state: Option<&'a detail::State>,
    i18n: &'a I18n,
    colors: &'a ColorScheme,
) -> Element<'a, Message> {
    match state {
        Some(state) => detail::view(detail::ViewContext {
            i18n,
            state,
            colors,
        })
        .map(Message::Detail),
        None => blank(),
    }
}

/// Shown for a screen whose state was not built. Only reachable through a
/// flow bug, which is logged when it happens.
fn blank<'a>() -> Element<'a, Message> {
    Space::new().width(Length::Fill).height(Length::Fill).into()
}
