// SPDX-License-Identifier: MPL-2.0
//! Screen flow.
//!
//! Every navigation goes through [`transition`], which knows the only legal
//! moves between screens. An event that makes no sense on the current screen
//! yields `None` and the caller leaves the screen unchanged.

use super::Screen;
use std::fmt;

/// Something that happened which may move the user to another screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    SplashElapsed,
    OnboardingSkipped,
    OnboardingFinished,
    CameraRequested,
    CameraDismissed,
    /// A photo was captured or picked and confirmed.
    ImageReady,
    ScanCompleted,
    ScanCancelled,
    DetailDismissed,
}

impl fmt::Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowEvent::SplashElapsed => "splash_elapsed",
            FlowEvent::OnboardingSkipped => "onboarding_skipped",
            FlowEvent::OnboardingFinished => "onboarding_finished",
            FlowEvent::CameraRequested => "camera_requested",
            FlowEvent::CameraDismissed => "camera_dismissed",
            FlowEvent::ImageReady => "image_ready",
            FlowEvent::ScanCompleted => "scan_completed",
            FlowEvent::ScanCancelled => "scan_cancelled",
            FlowEvent::DetailDismissed => "detail_dismissed",
        };
        f.write_str(name)
    }
}

/// Returns the screen reached from `from` on `event`, or `None` if the event
/// is not valid there.
#[must_use]
pub fn transition(from: Screen, event: FlowEvent) -> Option<Screen> {
    match (from, event) {
        (Screen::Splash, FlowEvent::SplashElapsed) => Some(Screen::Onboarding),
        (Screen::Onboarding, FlowEvent::OnboardingSkipped | FlowEvent::OnboardingFinished) => {
            Some(Screen::Main)
        }
        (Screen::Main, FlowEvent::CameraRequested) => Some(Screen::Camera),
        (Screen::Camera, FlowEvent::CameraDismissed) => Some(Screen::Main),
        (Screen::Camera, FlowEvent::ImageReady) => Some(Screen::Scanning),
        (Screen::Scanning, FlowEvent::ScanCompleted) => Some(Screen::Detail),
        (Screen::Scanning, FlowEvent::ScanCancelled) | (Screen::Detail, FlowEvent::DetailDismissed) => {
            Some(Screen::Camera)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SCREENS: [Screen; 6] = [
        Screen::Splash,
        Screen::Onboarding,
        Screen::Main,
        Screen::Camera,
        Screen::Scanning,
        Screen::Detail,
    ];

    const ALL_EVENTS: [FlowEvent; 9] = [
        FlowEvent::SplashElapsed,
        FlowEvent::OnboardingSkipped,
        FlowEvent::OnboardingFinished,
        FlowEvent::CameraRequested,
        FlowEvent::CameraDismissed,
        FlowEvent::ImageReady,
        FlowEvent::ScanCompleted,
        FlowEvent::ScanCancelled,
        FlowEvent::DetailDismissed,
    ];

    #[test]
    fn happy_path_reaches_detail_and_back() {
        let mut screen = Screen::Splash;
        for event in [
            FlowEvent::SplashElapsed,
            FlowEvent::OnboardingFinished,
            FlowEvent::CameraRequested,
            FlowEvent::ImageReady,
            FlowEvent::ScanCompleted,
            FlowEvent::DetailDismissed,
        ] {
            screen = transition(screen, event).expect("legal move");
        }
        assert_eq!(screen, Screen::Camera);
        assert_eq!(transition(screen, FlowEvent::CameraDismissed), Some(Screen::Main));
    }

    #[test]
    fn skip_and_finish_both_land_on_main() {
        assert_eq!(
            transition(Screen::Onboarding, FlowEvent::OnboardingSkipped),
            Some(Screen::Main)
        );
        assert_eq!(
            transition(Screen::Onboarding, FlowEvent::OnboardingFinished),
            Some(Screen::Main)
        );
    }

    #[test]
    fn cancelled_scan_returns_to_camera() {
        assert_eq!(
            transition(Screen::Scanning, FlowEvent::ScanCancelled),
            Some(Screen::Camera)
        );
    }

    #[test]
    fn onboarding_is_never_reentered() {
        for screen in ALL_SCREENS {
            for event in ALL_EVENTS {
                let next = transition(screen, event);
                assert_ne!(next, Some(Screen::Splash));
                if next == Some(Screen::Onboarding) {
                    assert_eq!(screen, Screen::Splash);
                }
            }
        }
    }

    #[test]
    fn only_nine_moves_are_legal() {
        let legal = ALL_SCREENS
            .iter()
            .flat_map(|screen| ALL_EVENTS.iter().map(move |event| (*screen, *event)))
            .filter(|(screen, event)| transition(*screen, *event).is_some())
            .count();
        assert_eq!(legal, 9);
    }

    #[test]
    fn camera_is_only_reachable_from_main_with_a_request() {
        assert_eq!(transition(Screen::Splash, FlowEvent::CameraRequested), None);
        assert_eq!(transition(Screen::Onboarding, FlowEvent::CameraRequested), None);
        assert_eq!(transition(Screen::Detail, FlowEvent::CameraRequested), None);
    }
}
