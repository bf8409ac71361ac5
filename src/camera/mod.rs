// SPDX-License-Identifier: MPL-2.0
//! Capture device session.
//!
//! [`CaptureSession`] owns the single-input, single-output capture pipeline
//! built on a [`CameraBackend`]. Blocking backend work (permission prompts,
//! opening the pipeline, encoding a still) is returned as `'static` futures
//! that run on tokio's blocking pool; their results are handed back to the
//! session on the UI loop through [`CaptureSession::install`] and
//! [`CaptureSession::finish_capture`].
//!
//! Failures never reach the user. They are written to diagnostics and the
//! session keeps going in whatever state it was left in.

pub mod preview;

use crate::application::port::camera::{
    Authorization, CameraBackend, CameraError, CameraInput, Facing, FlashMode, PhotoOutput,
    PhotoSettings,
};
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle};
use iced::widget::image;
use image_rs::RgbaImage;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Where an active image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Library,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Camera => write!(f, "camera"),
            ImageSource::Library => write!(f, "library"),
        }
    }
}

/// A photo held in memory together with its render handle.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pixels: Arc<RgbaImage>,
    handle: image::Handle,
    source: ImageSource,
}

impl CapturedImage {
    #[must_use]
    pub fn new(pixels: RgbaImage, source: ImageSource) -> Self {
        let handle = image::Handle::from_rgba(
            pixels.width(),
            pixels.height(),
            pixels.as_raw().clone(),
        );
        Self {
            pixels: Arc::new(pixels),
            handle,
            source,
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    #[must_use]
    pub fn source(&self) -> ImageSource {
        self.source
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// Input and output opened by a configuration job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub input: CameraInput,
    pub output: PhotoOutput,
}

/// Identifies one run of a capture session.
///
/// Generations are unique for the whole process. Configuration and capture
/// results carry the generation that started them and are discarded once the
/// session has been stopped, reconfigured or replaced by a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

impl Generation {
    fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }
}

/// Camera pipeline state owned by the camera screen.
pub struct CaptureSession {
    backend: Arc<dyn CameraBackend>,
    diagnostics: DiagnosticsHandle,
    input: Option<CameraInput>,
    output: Option<PhotoOutput>,
    facing: Facing,
    flash_enabled: bool,
    capture_in_flight: bool,
    running: bool,
    started_at: Option<Instant>,
    generation: Generation,
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("facing", &self.facing)
            .field("flash_enabled", &self.flash_enabled)
            .field("capture_in_flight", &self.capture_in_flight)
            .field("running", &self.running)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl CaptureSession {
    pub fn new(
        backend: Arc<dyn CameraBackend>,
        diagnostics: DiagnosticsHandle,
        facing: Facing,
        flash_enabled: bool,
    ) -> Self {
        Self {
            backend,
            diagnostics,
            input: None,
            output: None,
            facing,
            flash_enabled,
            capture_in_flight: false,
            running: false,
            started_at: None,
            generation: Generation::next(),
        }
    }

    /// Starts permission checks and pipeline construction.
    ///
    /// If access was never asked for, the user is prompted. The returned
    /// future does the blocking work off the UI thread; feed its output to
    /// [`install`](Self::install).
    pub fn request_permission_and_configure(
        &mut self,
    ) -> impl Future<Output = (Generation, Result<Pipeline, CameraError>)> + Send + 'static {
        self.generation = Generation::next();
        let generation = self.generation;
        let backend = Arc::clone(&self.backend);
        let facing = self.facing;

        async move {
            let result = tokio::task::spawn_blocking(move || configure(backend.as_ref(), facing))
                .await
                .unwrap_or_else(|err| Err(CameraError::WorkerFailed(err.to_string())));
            (generation, result)
        }
    }

    /// Installs the result of a configuration job on the UI thread.
    ///
    /// Returns `true` if the session is now configured and running.
    pub fn install(&mut self, generation: Generation, result: Result<Pipeline, CameraError>) -> bool {
        if generation != self.generation {
            self.diagnostics
                .log_warning("Discarding camera configuration for a stopped session");
            return false;
        }

        match result {
            Ok(pipeline) => {
                self.diagnostics.log_state(AppStateEvent::CameraConfigured {
                    facing: pipeline.input.facing.to_string(),
                });
                self.facing = pipeline.input.facing;
                self.input = Some(pipeline.input);
                self.output = Some(pipeline.output);
                self.running = true;
                self.started_at = Some(Instant::now());
                true
            }
            Err(err) => {
                self.diagnostics.log_error(format!("Camera setup failed: {err}"));
                false
            }
        }
    }

    /// Requests one still photo.
    ///
    /// Returns `None` (and logs) when the pipeline is not configured or a
    /// capture is already in flight. Otherwise the returned future produces
    /// the photo; pass its output to [`finish_capture`](Self::finish_capture).
    pub fn capture(
        &mut self,
    ) -> Option<impl Future<Output = (Generation, Result<RgbaImage, CameraError>)> + Send + 'static>
    {
        let (Some(input), Some(output)) = (self.input.clone(), self.output) else {
            self.diagnostics
                .log_warning("Capture requested without a configured camera");
            return None;
        };
        if self.capture_in_flight {
            self.diagnostics
                .log_warning("Capture already in progress, ignoring request");
            return None;
        }

        let settings = self.photo_settings();
        self.capture_in_flight = true;
        let generation = self.generation;
        let backend = Arc::clone(&self.backend);

        Some(async move {
            let result = tokio::task::spawn_blocking(move || {
                backend.capture_still(&input, &output, &settings)
            })
            .await
            .unwrap_or_else(|err| Err(CameraError::WorkerFailed(err.to_string())));
            (generation, result)
        })
    }

    /// Settings for the next capture. Flash fires only when enabled and the
    /// active input has one.
    #[must_use]
    pub fn photo_settings(&self) -> PhotoSettings {
        let has_flash = self.input.as_ref().is_some_and(|input| input.has_flash);
        PhotoSettings {
            flash: if self.flash_enabled && has_flash {
                FlashMode::On
            } else {
                FlashMode::Off
            },
        }
    }

    /// Completes a capture started by [`capture`](Self::capture).
    ///
    /// A result from another generation, or one that arrives while no
    /// capture is in flight, is discarded.
    pub fn finish_capture(
        &mut self,
        generation: Generation,
        result: Result<RgbaImage, CameraError>,
    ) -> Option<CapturedImage> {
        if generation != self.generation || !self.capture_in_flight {
            self.diagnostics
                .log_warning("Discarding capture result for a stopped session");
            return None;
        }

        self.capture_in_flight = false;
        match result {
            Ok(pixels) => Some(CapturedImage::new(pixels, ImageSource::Camera)),
            Err(err) => {
                self.diagnostics.log_error(format!("Capture failed: {err}"));
                None
            }
        }
    }

    /// Replaces the input with the opposite-facing camera.
    ///
    /// The old input is removed first. If the new one cannot be opened the
    /// session is left without an input and the facing is unchanged.
    pub fn switch_facing(&mut self) {
        if self.output.is_none() {
            self.diagnostics
                .log_warning("Camera switch requested before configuration");
            return;
        }

        let target = self.facing.opposite();
        self.input = None;
        match self.backend.open_input(target) {
            Ok(input) => {
                self.facing = target;
                self.input = Some(input);
            }
            Err(err) => {
                self.diagnostics
                    .log_error(format!("Could not switch to {target} camera: {err}"));
            }
        }
    }

    pub fn toggle_flash(&mut self) {
        self.flash_enabled = !self.flash_enabled;
    }

    /// Stops the session. Pending configuration and capture results will be
    /// discarded.
    pub fn stop(&mut self) {
        self.running = false;
        self.started_at = None;
        self.capture_in_flight = false;
        self.generation = Generation::next();
    }

    /// Current preview frame, if the session is running with an input.
    ///
    /// Returns a future so frame rendering stays off the UI thread.
    pub fn preview_frame(&self) -> Option<impl Future<Output = Option<RgbaImage>> + Send + 'static> {
        if !self.running {
            return None;
        }
        let input = self.input.clone()?;
        let elapsed = self.started_at?.elapsed();
        let backend = Arc::clone(&self.backend);
        Some(async move {
            tokio::task::spawn_blocking(move || backend.preview_frame(&input, elapsed))
                .await
                .ok()
                .flatten()
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.output.is_some()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[must_use]
    pub fn input(&self) -> Option<&CameraInput> {
        self.input.as_ref()
    }

    #[must_use]
    pub fn flash_enabled(&self) -> bool {
        self.flash_enabled
    }

    #[must_use]
    pub fn capture_in_flight(&self) -> bool {
        self.capture_in_flight
    }

    /// Generation that results started now will be tagged with.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// Permission check and pipeline construction. Runs on a blocking worker.
fn configure(backend: &dyn CameraBackend, facing: Facing) -> Result<Pipeline, CameraError> {
    match backend.authorization() {
        Authorization::Authorized => {}
        Authorization::NotDetermined => {
            if !backend.request_access() {
                return Err(CameraError::PermissionDenied);
            }
        }
        Authorization::Denied | Authorization::Restricted => {
            return Err(CameraError::PermissionDenied);
        }
    }

    let input = backend.open_input(facing)?;
    let output = backend.open_photo_output()?;
    Ok(Pipeline { input, output })
}
