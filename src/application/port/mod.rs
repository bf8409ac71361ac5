// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the platform collaborators.
//!
//! The application layer talks to camera hardware and the photo library only
//! through these traits, so the session and screen logic can be exercised
//! without a device attached.
//!
//! # Available Ports
//!
//! - [`camera`]: Camera authorization, pipeline construction and still capture
//! - [`picker`]: Single-image selection from the user's photo library
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared with background workers
//! - Methods are blocking; callers wrap them in Iced `Task`s
//! - Methods return `Result` with port-level error enums

pub mod camera;
pub mod picker;

pub use camera::{
    Authorization, CameraBackend, CameraError, CameraInput, Facing, FlashMode, PhotoOutput,
    PhotoSettings,
};
pub use picker::{PhotoPicker, PickerError};
