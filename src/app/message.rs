// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::infrastructure::camera::PermissionMode;
use crate::ui::{camera, detail, home, onboarding, scanning, splash};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Splash(splash::Message),
    Onboarding(onboarding::Message),
    Main(home::Message),
    Camera(camera::Message),
    Scanning(scanning::Message),
    Detail(detail::Message),
    /// Animation and preview clock, routed to the active screen.
    Tick(Instant),
    /// Escape key not captured by a widget.
    EscapePressed,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// How the simulated camera answers permission requests.
    pub camera_permission: PermissionMode,
}
