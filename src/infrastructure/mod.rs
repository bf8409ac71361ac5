// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`camera`]: Procedural camera (implements [`CameraBackend`])
//! - [`picker`]: Native file chooser via `rfd` (implements [`PhotoPicker`])
//!
//! [`CameraBackend`]: crate::application::port::CameraBackend
//! [`PhotoPicker`]: crate::application::port::PhotoPicker

pub mod camera;
pub mod picker;

pub use camera::{PermissionMode, SyntheticCamera};
pub use picker::RfdPicker;
