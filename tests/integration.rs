// SPDX-License-Identifier: MPL-2.0
use futures_util::StreamExt;
use plant_identifier::app::config::{self, Config};
use plant_identifier::app::flow::{transition, FlowEvent};
use plant_identifier::app::Screen;
use plant_identifier::application::port::Facing;
use plant_identifier::camera::{CaptureSession, ImageSource};
use plant_identifier::catalog::BLUE_SAGE;
use plant_identifier::diagnostics::DiagnosticsCollector;
use plant_identifier::i18n::fluent::I18n;
use plant_identifier::infrastructure::{PermissionMode, SyntheticCamera};
use plant_identifier::picker;
use plant_identifier::scan::{self, Advance, ScanSequencer, ScanStage, ScanTimeline};
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("onboarding-skip"), "Passer");
}

#[test]
fn test_camera_preferences_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut prefs = Config::default();
    prefs.camera.default_facing = Some(Facing::Front);
    prefs.camera.flash = Some(true);
    prefs.splash.timeout_ms = Some(1_000);
    config::save_to_path(&prefs, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, prefs);
    assert_eq!(loaded.splash.timeout().as_millis(), 1_000);
}

#[tokio::test]
async fn test_capture_then_scan_yields_sample_record() {
    let mut collector = DiagnosticsCollector::default();
    let mut session = CaptureSession::new(
        Arc::new(SyntheticCamera::new(PermissionMode::Prompt)),
        collector.handle(),
        Facing::Back,
        false,
    );
    let (generation, result) = session.request_permission_and_configure().await;
    assert!(session.install(generation, result));

    let job = session.capture().expect("capture should start");
    let (generation, result) = job.await;
    let image = session.finish_capture(generation, result).expect("captured image");
    assert_eq!(image.source(), ImageSource::Camera);

    let mut sequencer = ScanSequencer::new();
    let ticket = sequencer.start();
    let timeline = ScanTimeline {
        step_delay: std::time::Duration::ZERO,
        settle_delay: std::time::Duration::ZERO,
    };
    let outcomes: Vec<_> = scan::milestones(ticket, timeline)
        .map(|(ticket, milestone)| sequencer.advance(ticket, milestone))
        .collect()
        .await;

    assert_eq!(outcomes.last(), Some(&Advance::Completed));
    assert_eq!(sequencer.stage(), ScanStage::Done);
    assert_eq!(scan::identify(image.pixels()), &BLUE_SAGE);

    collector.process_pending();
    assert!(!collector.is_empty());
}

#[test]
fn test_library_photo_is_decoded() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("leaf.png");
    image_rs::RgbaImage::from_pixel(6, 4, image_rs::Rgba([40, 160, 80, 255]))
        .save(&path)
        .expect("write png");

    let image = picker::load_picked(&path).expect("decode");
    assert_eq!(image.dimensions(), (6, 4));
    assert_eq!(image.source(), ImageSource::Library);
}

#[test]
fn test_unreadable_library_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("notes.png");
    std::fs::write(&path, b"not an image").expect("write file");

    assert!(picker::load_picked(&path).is_err());
}

#[test]
fn test_cancelled_scan_returns_to_camera() {
    let screen = [
        FlowEvent::SplashElapsed,
        FlowEvent::OnboardingSkipped,
        FlowEvent::CameraRequested,
        FlowEvent::ImageReady,
        FlowEvent::ScanCancelled,
    ]
    .into_iter()
    .try_fold(Screen::Splash, transition);

    assert_eq!(screen, Some(Screen::Camera));
}
