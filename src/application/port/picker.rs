// SPDX-License-Identifier: MPL-2.0
//! Photo library picker port.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while bringing a picked photo into the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The chosen file could not be read.
    Io(String),
    /// The chosen file is not a decodable image.
    Decode(String),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::Io(msg) => write!(f, "Could not read picked photo: {msg}"),
            PickerError::Decode(msg) => write!(f, "Picked file is not an image: {msg}"),
        }
    }
}

impl std::error::Error for PickerError {}

/// Port for the platform photo-library chooser.
///
/// Implementations present a chooser limited to images with a selection
/// limit of one. `None` means the user dismissed the chooser.
pub trait PhotoPicker: Send + Sync {
    /// Shows the chooser and returns the selected file, if any.
    fn pick(&self) -> impl std::future::Future<Output = Option<PathBuf>> + Send;
}
