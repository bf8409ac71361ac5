// SPDX-License-Identifier: MPL-2.0
//! Camera port definition.
//!
//! This module defines the [`CameraBackend`] trait that hardware adapters
//! implement. A backend only knows how to answer permission queries, open a
//! single input for a given facing, open a photo output, and produce frames.
//! Pipeline bookkeeping (which input is attached, whether a capture is in
//! flight, the flash flag) lives in [`crate::camera::CaptureSession`].

use image_rs::RgbaImage;
use std::fmt;
use std::time::Duration;

// =============================================================================
// Facing / Authorization
// =============================================================================

/// Physical direction a camera points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    Back,
    Front,
}

impl Facing {
    /// Returns the opposite facing.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::Back => write!(f, "back"),
            Facing::Front => write!(f, "front"),
        }
    }
}

/// Camera authorization status as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// The user already granted access.
    Authorized,
    /// The user has not been asked yet.
    NotDetermined,
    /// The user refused access.
    Denied,
    /// Access is blocked by policy (parental controls, MDM...).
    Restricted,
}

// =============================================================================
// Pipeline pieces
// =============================================================================

/// A camera device attached to the capture pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInput {
    /// Human readable device name.
    pub name: String,
    /// Which way the device points.
    pub facing: Facing,
    /// Whether the device has a usable flash.
    pub has_flash: bool,
}

/// Still-photo output of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoOutput {
    /// Width of produced photos in pixels.
    pub width: u32,
    /// Height of produced photos in pixels.
    pub height: u32,
}

/// Flash mode for a single capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    #[default]
    Off,
    On,
}

/// Per-capture settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhotoSettings {
    pub flash: FlashMode,
}

// =============================================================================
// CameraError
// =============================================================================

/// Errors reported by camera backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The user denied or the platform restricted camera access.
    PermissionDenied,
    /// No device exists for the requested facing.
    DeviceUnavailable(Facing),
    /// The device exists but could not be attached to the pipeline.
    InputRejected(String),
    /// The photo output could not be attached to the pipeline.
    OutputRejected(String),
    /// The encoder failed to produce a photo.
    CaptureFailed(String),
    /// The background worker running a blocking call died.
    WorkerFailed(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::PermissionDenied => write!(f, "Camera permission denied"),
            CameraError::DeviceUnavailable(facing) => {
                write!(f, "No {facing} camera available")
            }
            CameraError::InputRejected(msg) => write!(f, "Camera input rejected: {msg}"),
            CameraError::OutputRejected(msg) => write!(f, "Photo output rejected: {msg}"),
            CameraError::CaptureFailed(msg) => write!(f, "Photo capture failed: {msg}"),
            CameraError::WorkerFailed(msg) => write!(f, "Camera worker failed: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

// =============================================================================
// CameraBackend Trait
// =============================================================================

/// Port for camera hardware access.
///
/// All methods may block; callers run them on a background worker and
/// marshal results back to the UI loop.
pub trait CameraBackend: Send + Sync {
    /// Returns the current authorization status without prompting.
    fn authorization(&self) -> Authorization;

    /// Prompts the user for access and returns whether it was granted.
    fn request_access(&self) -> bool;

    /// Opens the device pointing in `facing`.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DeviceUnavailable`] when no such device exists.
    fn open_input(&self, facing: Facing) -> Result<CameraInput, CameraError>;

    /// Opens the still-photo output.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::OutputRejected`] when the output cannot be added.
    fn open_photo_output(&self) -> Result<PhotoOutput, CameraError>;

    /// Captures one still photo from `input`.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::CaptureFailed`] when the encoder fails.
    fn capture_still(
        &self,
        input: &CameraInput,
        output: &PhotoOutput,
        settings: &PhotoSettings,
    ) -> Result<RgbaImage, CameraError>;

    /// Returns the live preview frame for `input` at `elapsed` since the
    /// session started, or `None` when no frame is ready.
    fn preview_frame(&self, input: &CameraInput, elapsed: Duration) -> Option<RgbaImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Facing::Back.opposite(), Facing::Front);
        assert_eq!(Facing::Back.opposite().opposite(), Facing::Back);
    }

    #[test]
    fn errors_have_readable_messages() {
        assert_eq!(
            CameraError::DeviceUnavailable(Facing::Back).to_string(),
            "No back camera available"
        );
        assert!(CameraError::CaptureFailed("encoder".into())
            .to_string()
            .contains("encoder"));
    }
}
