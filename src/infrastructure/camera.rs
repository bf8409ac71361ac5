// SPDX-License-Identifier: MPL-2.0
//! Procedural camera adapter.
//!
//! Desktop builds have no camera binding, so this backend paints frames with
//! the `image` crate: a leaf drifting over a gradient. The back camera has a
//! flash, the front one does not. Permission behaviour is configurable so the
//! denied and first-launch paths can be exercised from the command line.

use crate::application::port::camera::{
    Authorization, CameraBackend, CameraError, CameraInput, Facing, FlashMode, PhotoOutput,
    PhotoSettings,
};
use image_rs::{Rgba, RgbaImage};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::{Duration, Instant};

/// Preview frame size (portrait).
pub const PREVIEW_WIDTH: u32 = 270;
pub const PREVIEW_HEIGHT: u32 = 480;

/// Still photo size (portrait).
pub const PHOTO_WIDTH: u32 = 540;
pub const PHOTO_HEIGHT: u32 = 960;

/// How the simulated platform answers permission queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionMode {
    /// Access was granted on a previous launch.
    #[default]
    Granted,
    /// Access was refused on a previous launch.
    Denied,
    /// First launch: the user is asked and accepts.
    Prompt,
}

impl FromStr for PermissionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "prompt" => Ok(Self::Prompt),
            other => Err(format!("unknown camera permission mode: {other}")),
        }
    }
}

const STATUS_NOT_DETERMINED: u8 = 0;
const STATUS_AUTHORIZED: u8 = 1;
const STATUS_DENIED: u8 = 2;

/// Camera backend that renders synthetic frames.
#[derive(Debug)]
pub struct SyntheticCamera {
    status: AtomicU8,
    devices: Vec<Facing>,
    started: Instant,
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new(PermissionMode::default())
    }
}

impl SyntheticCamera {
    #[must_use]
    pub fn new(mode: PermissionMode) -> Self {
        let status = match mode {
            PermissionMode::Granted => STATUS_AUTHORIZED,
            PermissionMode::Denied => STATUS_DENIED,
            PermissionMode::Prompt => STATUS_NOT_DETERMINED,
        };
        Self {
            status: AtomicU8::new(status),
            devices: vec![Facing::Back, Facing::Front],
            started: Instant::now(),
        }
    }

    /// Restricts the attached devices, e.g. to simulate a missing front camera.
    #[must_use]
    pub fn with_devices(mut self, devices: Vec<Facing>) -> Self {
        self.devices = devices;
        self
    }
}

impl CameraBackend for SyntheticCamera {
    fn authorization(&self) -> Authorization {
        match self.status.load(Ordering::SeqCst) {
            STATUS_AUTHORIZED => Authorization::Authorized,
            STATUS_DENIED => Authorization::Denied,
            _ => Authorization::NotDetermined,
        }
    }

    fn request_access(&self) -> bool {
        // The simulated user accepts the first prompt. Earlier answers stick.
        let _ = self.status.compare_exchange(
            STATUS_NOT_DETERMINED,
            STATUS_AUTHORIZED,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        self.status.load(Ordering::SeqCst) == STATUS_AUTHORIZED
    }

    fn open_input(&self, facing: Facing) -> Result<CameraInput, CameraError> {
        if self.authorization() != Authorization::Authorized {
            return Err(CameraError::PermissionDenied);
        }
        if !self.devices.contains(&facing) {
            return Err(CameraError::DeviceUnavailable(facing));
        }
        let name = match facing {
            Facing::Back => "Synthetic Back Camera",
            Facing::Front => "Synthetic Front Camera",
        };
        Ok(CameraInput {
            name: name.to_string(),
            facing,
            has_flash: facing == Facing::Back,
        })
    }

    fn open_photo_output(&self) -> Result<PhotoOutput, CameraError> {
        Ok(PhotoOutput {
            width: PHOTO_WIDTH,
            height: PHOTO_HEIGHT,
        })
    }

    fn capture_still(
        &self,
        input: &CameraInput,
        output: &PhotoOutput,
        settings: &PhotoSettings,
    ) -> Result<RgbaImage, CameraError> {
        if !self.devices.contains(&input.facing) {
            return Err(CameraError::CaptureFailed(format!(
                "{} disconnected",
                input.name
            )));
        }
        let flash = settings.flash == FlashMode::On && input.has_flash;
        Ok(render_frame(
            output.width,
            output.height,
            input.facing,
            self.started.elapsed(),
            flash,
        ))
    }

    fn preview_frame(&self, input: &CameraInput, elapsed: Duration) -> Option<RgbaImage> {
        self.devices.contains(&input.facing).then(|| {
            render_frame(PREVIEW_WIDTH, PREVIEW_HEIGHT, input.facing, elapsed, false)
        })
    }
}

/// Paints one frame: gradient background with a slowly drifting leaf.
fn render_frame(
    width: u32,
    height: u32,
    facing: Facing,
    elapsed: Duration,
    flash: bool,
) -> RgbaImage {
    let t = elapsed.as_secs_f32();
    let (w, h) = (width as f32, height as f32);

    let (top, bottom) = match facing {
        Facing::Back => ([0.62, 0.78, 0.66], [0.18, 0.32, 0.22]),
        Facing::Front => ([0.86, 0.74, 0.64], [0.42, 0.30, 0.26]),
    };
    let leaf = [0.10, 0.55, 0.30];
    let vein = [0.70, 0.86, 0.62];

    let cx = w * (0.5 + 0.06 * (t * 0.9).sin());
    let cy = h * (0.45 + 0.03 * (t * 1.3).cos());
    let (rx, ry) = (w * 0.28, h * 0.10);
    let angle = -0.6 + 0.08 * (t * 0.7).sin();
    let (sin_a, cos_a) = angle.sin_cos();
    let gain = if flash { 1.35 } else { 1.0 };

    RgbaImage::from_fn(width, height, |x, y| {
        let fy = y as f32 / h;
        let mut rgb = [
            top[0] + (bottom[0] - top[0]) * fy,
            top[1] + (bottom[1] - top[1]) * fy,
            top[2] + (bottom[2] - top[2]) * fy,
        ];

        // Leaf-local coordinates.
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let u = dx * cos_a + dy * sin_a;
        let v = -dx * sin_a + dy * cos_a;
        let inside = (u / rx).powi(2) + (v / ry).powi(2) <= 1.0;
        if inside {
            rgb = if v.abs() < 1.5 { vein } else { leaf };
        }

        let channel = |c: f32| ((c * gain).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_modes_map_to_authorization() {
        assert_eq!(
            SyntheticCamera::new(PermissionMode::Granted).authorization(),
            Authorization::Authorized
        );
        assert_eq!(
            SyntheticCamera::new(PermissionMode::Denied).authorization(),
            Authorization::Denied
        );
        assert_eq!(
            SyntheticCamera::new(PermissionMode::Prompt).authorization(),
            Authorization::NotDetermined
        );
    }

    #[test]
    fn prompt_mode_grants_on_request() {
        let camera = SyntheticCamera::new(PermissionMode::Prompt);
        assert!(camera.request_access());
        assert_eq!(camera.authorization(), Authorization::Authorized);
    }

    #[test]
    fn denied_mode_stays_denied() {
        let camera = SyntheticCamera::new(PermissionMode::Denied);
        assert!(!camera.request_access());
        assert_eq!(
            camera.open_input(Facing::Back),
            Err(CameraError::PermissionDenied)
        );
    }

    #[test]
    fn missing_device_is_unavailable() {
        let camera = SyntheticCamera::default().with_devices(vec![Facing::Back]);
        assert_eq!(
            camera.open_input(Facing::Front),
            Err(CameraError::DeviceUnavailable(Facing::Front))
        );
    }

    #[test]
    fn only_back_camera_has_flash() {
        let camera = SyntheticCamera::default();
        assert!(camera.open_input(Facing::Back).unwrap().has_flash);
        assert!(!camera.open_input(Facing::Front).unwrap().has_flash);
    }

    #[test]
    fn capture_uses_output_dimensions() {
        let camera = SyntheticCamera::default();
        let input = camera.open_input(Facing::Back).unwrap();
        let output = camera.open_photo_output().unwrap();
        let photo = camera
            .capture_still(&input, &output, &PhotoSettings::default())
            .unwrap();
        assert_eq!(photo.dimensions(), (PHOTO_WIDTH, PHOTO_HEIGHT));
    }

    #[test]
    fn flash_brightens_capture() {
        let camera = SyntheticCamera::default();
        let input = camera.open_input(Facing::Back).unwrap();
        let output = PhotoOutput {
            width: 8,
            height: 8,
        };
        let plain = camera
            .capture_still(&input, &output, &PhotoSettings::default())
            .unwrap();
        let lit = camera
            .capture_still(
                &input,
                &output,
                &PhotoSettings {
                    flash: FlashMode::On,
                },
            )
            .unwrap();
        let corner = |img: &RgbaImage| img.get_pixel(0, 7).0[1];
        assert!(corner(&lit) > corner(&plain));
    }

    #[test]
    fn preview_frames_have_preview_size() {
        let camera = SyntheticCamera::default();
        let input = camera.open_input(Facing::Front).unwrap();
        let frame = camera
            .preview_frame(&input, Duration::from_millis(500))
            .unwrap();
        assert_eq!(frame.dimensions(), (PREVIEW_WIDTH, PREVIEW_HEIGHT));
    }

    #[test]
    fn permission_mode_parses_case_insensitively() {
        assert_eq!(
            "Denied".parse::<PermissionMode>(),
            Ok(PermissionMode::Denied)
        );
        assert!("maybe".parse::<PermissionMode>().is_err());
    }
}
