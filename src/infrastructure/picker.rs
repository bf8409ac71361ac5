// SPDX-License-Identifier: MPL-2.0
//! Native file chooser adapter built on `rfd`.

use crate::application::port::picker::PhotoPicker;
use std::path::PathBuf;

/// Extensions offered by the chooser.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "JPG", "JPEG", "PNG",
];

/// Opens the platform chooser restricted to images, one file at a time.
#[derive(Debug, Clone, Default)]
pub struct RfdPicker {
    title: Option<String>,
}

impl RfdPicker {
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

impl PhotoPicker for RfdPicker {
    fn pick(&self) -> impl std::future::Future<Output = Option<PathBuf>> + Send {
        let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);
        if let Some(title) = &self.title {
            dialog = dialog.set_title(title);
        }
        async move { dialog.pick_file().await.map(|handle| handle.path().to_path_buf()) }
    }
}
