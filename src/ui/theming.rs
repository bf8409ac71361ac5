// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system-following color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    /// Headline color for plant names and onboarding titles.
    pub brand_text: Color,

    // Borders
    pub border_subtle: Color,

    // Overlay colors (camera and scanning screens)
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::NEUTRAL_50,
            surface_secondary: palette::WHITE,
            surface_tertiary: palette::PRIMARY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,
            brand_text: palette::PRIMARY_800,

            border_subtle: Color {
                a: opacity::BORDER_SUBTLE,
                ..palette::BLACK
            },

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_tertiary: Color::from_rgb(0.12, 0.22, 0.18),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,
            brand_text: palette::PRIMARY_200,

            border_subtle: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if ThemeMode::System.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Resolved theme: the user's mode plus the colors it maps to.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors resolve to light
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Built-in Iced theme used for widgets without a custom style.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.colors == ColorScheme::dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2); // Close to black
    }

    #[test]
    fn both_themes_have_green_brand() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        assert!(light.brand_primary.g > light.brand_primary.r);
        assert!(dark.brand_primary.g > dark.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_builtin_themes() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
    }
}
