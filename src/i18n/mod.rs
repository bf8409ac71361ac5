// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded in the binary at build time
//! - Fallback to `en-US` when no preferred locale is bundled
//!
//! UI chrome is translated. The sample plant record in [`crate::catalog`] is
//! literal content and is not routed through Fluent.

pub mod fluent;
