// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`splash`] - Animated "Plant identifier" title
//! - [`onboarding`] - Six introduction pages with Skip
//! - [`home`] - Tab shell with bottom navigation (Home, Diagnose, Experts, Garden)
//! - [`garden`] - "My Garden" tab with its two empty lists
//! - [`camera`] - Live preview, capture and library import
//! - [`scanning`] - Simulated analysis over the chosen photo
//! - [`detail`] - Care sheet for the identified plant
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Canvas widgets (framing brackets, step indicator)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph icons

pub mod camera;
pub mod design_tokens;
pub mod detail;
pub mod garden;
pub mod home;
pub mod icons;
pub mod onboarding;
pub mod scanning;
pub mod splash;
pub mod styles;
pub mod theming;
pub mod widgets;
