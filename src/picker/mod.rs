// SPDX-License-Identifier: MPL-2.0
//! Picker bridge: photo library selection into a [`CapturedImage`].
//!
//! The chooser itself is a [`PhotoPicker`] port. This module runs it, then
//! decodes the single chosen file on the blocking pool. A dismissed chooser
//! is not an error and yields `None`.

use crate::application::port::picker::{PhotoPicker, PickerError};
use crate::camera::{CapturedImage, ImageSource};
use std::path::{Path, PathBuf};

/// Outcome of one chooser session.
pub type PickResult = Option<Result<CapturedImage, PickerError>>;

/// Shows the chooser and decodes the selection.
pub async fn pick_image<P: PhotoPicker>(picker: P) -> PickResult {
    let path = picker.pick().await?;
    Some(load_in_background(path).await)
}

async fn load_in_background(path: PathBuf) -> Result<CapturedImage, PickerError> {
    tokio::task::spawn_blocking(move || load_picked(&path))
        .await
        .unwrap_or_else(|err| Err(PickerError::Io(err.to_string())))
}

/// Decodes the file at `path` into an active image.
///
/// # Errors
///
/// Returns [`PickerError::Io`] if the file cannot be read and
/// [`PickerError::Decode`] if it is not a supported image.
pub fn load_picked(path: &Path) -> Result<CapturedImage, PickerError> {
    let bytes = std::fs::read(path).map_err(|err| PickerError::Io(err.to_string()))?;
    let decoded =
        image_rs::load_from_memory(&bytes).map_err(|err| PickerError::Decode(err.to_string()))?;
    Ok(CapturedImage::new(decoded.to_rgba8(), ImageSource::Library))
}
