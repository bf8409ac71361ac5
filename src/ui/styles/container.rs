// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-screen background.
pub fn screen(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let text_color = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Rounded card on the screen background (health, about, details).
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Small outlined tag under the plant name.
pub fn care_tag(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let outline = colors.border_subtle;
    let text_color = colors.text_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// "PRO" badge on the home header.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Translucent strip behind text drawn over the camera feed.
pub fn overlay_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page indicator dot.
pub fn dot(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if active {
            palette::PRIMARY_500
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            }
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Solid black backdrop for the camera and scanning screens.
pub fn camera_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
