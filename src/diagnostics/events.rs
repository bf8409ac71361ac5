// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the various types of events that can be captured
//! during application usage for diagnostic purposes.

use std::fmt;
use std::time::Instant;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    // ==========================================================================
    // Onboarding
    // ==========================================================================
    /// Advance to the next onboarding page.
    NextOnboardingPage,

    /// Skip the remaining onboarding pages.
    SkipOnboarding,

    /// Press "Let's Go!" on the last onboarding page.
    FinishOnboarding,

    // ==========================================================================
    // Main shell
    // ==========================================================================
    /// Select a bottom navigation tab.
    SelectTab {
        /// Tab name.
        tab: String,
    },

    /// Open the camera from the home shell.
    OpenCamera,

    // ==========================================================================
    // Camera
    // ==========================================================================
    /// Press the shutter button.
    CapturePhoto,

    /// Switch between front and back camera.
    SwitchCamera,

    /// Toggle the flash.
    ToggleFlash,

    /// Open the photo library chooser.
    PickFromGallery,

    /// Close the camera screen.
    CloseCamera,

    // ==========================================================================
    // Scanning / Detail
    // ==========================================================================
    /// Abort a running scan.
    CancelScan,

    /// Leave the detail screen.
    DismissDetail,
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::NextOnboardingPage => write!(f, "next onboarding page"),
            UserAction::SkipOnboarding => write!(f, "skip onboarding"),
            UserAction::FinishOnboarding => write!(f, "finish onboarding"),
            UserAction::SelectTab { tab } => write!(f, "select tab {tab}"),
            UserAction::OpenCamera => write!(f, "open camera"),
            UserAction::CapturePhoto => write!(f, "capture photo"),
            UserAction::SwitchCamera => write!(f, "switch camera"),
            UserAction::ToggleFlash => write!(f, "toggle flash"),
            UserAction::PickFromGallery => write!(f, "pick from gallery"),
            UserAction::CloseCamera => write!(f, "close camera"),
            UserAction::CancelScan => write!(f, "cancel scan"),
            UserAction::DismissDetail => write!(f, "dismiss detail"),
        }
    }
}

/// Application state changes worth recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStateEvent {
    /// The visible screen changed.
    ScreenChanged { from: String, to: String },

    /// A screen transition was refused by the flow controller.
    TransitionRejected { from: String, event: String },

    /// The capture pipeline was installed.
    CameraConfigured { facing: String },

    /// A new image became the active image.
    ImageReady { source: String },

    /// A scanning milestone was applied.
    ScanMilestone { milestone: String },

    /// The scanning sequence finished.
    ScanCompleted,
}

impl fmt::Display for AppStateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppStateEvent::ScreenChanged { from, to } => write!(f, "screen {from} -> {to}"),
            AppStateEvent::TransitionRejected { from, event } => {
                write!(f, "rejected {event} while on {from}")
            }
            AppStateEvent::CameraConfigured { facing } => {
                write!(f, "camera configured ({facing})")
            }
            AppStateEvent::ImageReady { source } => write!(f, "image ready from {source}"),
            AppStateEvent::ScanMilestone { milestone } => write!(f, "scan milestone {milestone}"),
            AppStateEvent::ScanCompleted => write!(f, "scan completed"),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred.
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction { action: UserAction },

    /// Application state change.
    AppState { state: AppStateEvent },

    /// Non-critical warning.
    Warning { message: String },

    /// Failed operation. Never shown to the user.
    Error { message: String },
}

impl DiagnosticEventKind {
    /// Forwards the event to the `log` facade at a matching level.
    pub(crate) fn emit(&self) {
        match self {
            DiagnosticEventKind::UserAction { action } => {
                log::info!(target: "plant_identifier::action", "{action}");
            }
            DiagnosticEventKind::AppState { state } => {
                log::debug!(target: "plant_identifier::state", "{state}");
            }
            DiagnosticEventKind::Warning { message } => log::warn!("{message}"),
            DiagnosticEventKind::Error { message } => log::error!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "late".into(),
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn diagnostic_event_with_timestamp_uses_provided_timestamp() {
        let timestamp = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::UserAction {
                action: UserAction::CapturePhoto,
            },
            timestamp,
        );

        assert_eq!(event.timestamp, timestamp);
    }

    #[test]
    fn actions_and_states_render_for_logs() {
        assert_eq!(
            UserAction::SelectTab {
                tab: "garden".into()
            }
            .to_string(),
            "select tab garden"
        );
        assert_eq!(
            AppStateEvent::ScreenChanged {
                from: "Camera".into(),
                to: "Scanning".into()
            }
            .to_string(),
            "screen Camera -> Scanning"
        );
    }
}
