// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    Onboarding,
    /// Tab shell with the bottom navigation bar.
    Main,
    Camera,
    Scanning,
    Detail,
}

impl Screen {
    /// Fluent key of the name shown in the window title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Splash => "screen-splash",
            Screen::Onboarding => "screen-onboarding",
            Screen::Main => "screen-main",
            Screen::Camera => "screen-camera",
            Screen::Scanning => "screen-scanning",
            Screen::Detail => "screen-detail",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Splash => "splash",
            Screen::Onboarding => "onboarding",
            Screen::Main => "main",
            Screen::Camera => "camera",
            Screen::Scanning => "scanning",
            Screen::Detail => "detail",
        };
        f.write_str(name)
    }
}
