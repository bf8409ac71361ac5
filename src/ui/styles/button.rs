// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Green pill used for the main call to action of a screen.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless text button (Skip, See all, back arrows).
pub fn ghost(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
            _ => opacity::OPAQUE,
        };

        button::Style {
            background: None,
            text_color: Color { a: alpha, ..text_color },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round translucent control floating over the camera feed.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// White shutter disc with a ring.
pub fn shutter(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Pressed => palette::GRAY_100,
        button::Status::Disabled => palette::GRAY_200,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::PRIMARY_500,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
            width: 4.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Elevated green camera button in the centre of the navigation bar.
pub fn camera_fab(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: WHITE,
        border: Border {
            color: WHITE,
            width: 4.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Tab in the bottom navigation bar or a segmented selector.
///
/// The selected item is drawn in `active`, the others in `idle`.
pub fn tab(
    selected: bool,
    active: Color,
    idle: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if selected || status == button::Status::Hovered {
            active
        } else {
            idle
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Pill in the Identify / Diagnose selector over the camera feed.
pub fn mode_chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if selected {
            (Some(Background::Color(WHITE)), palette::PRIMARY_800)
        } else {
            let alpha = if status == button::Status::Hovered {
                opacity::OVERLAY_SUBTLE
            } else {
                opacity::TRANSPARENT
            };
            (Some(Background::Color(Color { a: alpha, ..WHITE })), WHITE)
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clickable card surface (home feature cards, accordion headers).
pub fn card(surface: Color, text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(surface)),
        text_color,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            button::Status::Pressed => shadow::NONE,
            _ => shadow::SM,
        },
        snap: true,
    }
}
