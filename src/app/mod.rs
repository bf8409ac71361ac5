// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns every screen state, the camera backend and the
//! diagnostics collector. Navigation policy lives in [`flow`]; the handlers in
//! `update` apply it and start async work.

pub mod config;
pub mod flow;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::camera::CameraBackend;
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::infrastructure::camera::SyntheticCamera;
use crate::ui::design_tokens::sizing;
use crate::ui::theming::AppTheme;
use crate::ui::{camera, detail, home, onboarding, scanning, splash};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    screen: Screen,
    splash: splash::State,
    onboarding: onboarding::State,
    main: home::State,
    /// Built when the camera opens, dropped when it closes.
    camera: Option<camera::State>,
    /// Built for each scan; dropping it aborts the scan timeline.
    scanning: Option<scanning::State>,
    detail: Option<detail::State>,
    backend: Arc<dyn CameraBackend>,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_camera", &self.camera.is_some())
            .field("has_scan", &self.scanning.is_some())
            .field("has_detail", &self.detail.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings. The window is phone-shaped.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::WINDOW_MIN_WIDTH,
            sizing::WINDOW_MIN_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and starts on the splash screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let backend: Arc<dyn CameraBackend> =
            Arc::new(SyntheticCamera::new(flags.camera_permission));
        let mut app = Self::with_parts(config, i18n, backend);

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.diagnostics.log_warning(message);
        }

        (app, Task::none())
    }

    /// Assembles an app from already-loaded parts.
    fn with_parts(config: Config, i18n: I18n, backend: Arc<dyn CameraBackend>) -> Self {
        let splash = splash::State::new(Instant::now(), config.splash.timeout());
        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            config,
            screen: Screen::Splash,
            splash,
            onboarding: onboarding::State::new(),
            main: home::State::new(),
            camera: None,
            scanning: None,
            detail: None,
            backend,
            diagnostics: DiagnosticsCollector::default(),
        }
    }

    fn title(&self) -> String {
        if self.screen == Screen::Splash {
            return self.i18n.tr("window-title");
        }
        let screen = self.i18n.tr(self.screen.title_key());
        self.i18n
            .tr_with_args("window-title-screen", &[("screen", screen.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(self.screen);

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if self.diagnostics.process_pending() {
            self.diagnostics.dump_to_log();
        }

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            backend: &self.backend,
            screen: &mut self.screen,
            splash: &mut self.splash,
            onboarding: &mut self.onboarding,
            main: &mut self.main,
            camera: &mut self.camera,
            scanning: &mut self.scanning,
            detail: &mut self.detail,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Splash(message) => update::handle_splash_message(&mut ctx, message),
            Message::Onboarding(message) => update::handle_onboarding_message(&mut ctx, message),
            Message::Main(message) => update::handle_main_message(&mut ctx, message),
            Message::Camera(message) => update::handle_camera_message(&mut ctx, message),
            Message::Scanning(message) => update::handle_scanning_message(&mut ctx, message),
            Message::Detail(message) => update::handle_detail_message(&mut ctx, message),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            colors: &self.theme.colors,
            splash: &self.splash,
            onboarding: &self.onboarding,
            main: &self.main,
            camera: self.camera.as_ref(),
            scanning: self.scanning.as_ref(),
            detail: self.detail.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::camera::Facing;
    use crate::camera::{CapturedImage, Generation, ImageSource, Pipeline};
    use crate::catalog::{CardAction, BLUE_SAGE};
    use crate::diagnostics::{AppStateEvent, DiagnosticEventKind};
    use crate::infrastructure::camera::PermissionMode;
    use crate::scan::{ScanMilestone, ScanStage};
    use futures_util::StreamExt;
    use image_rs::RgbaImage;
    use std::time::Duration;

    fn test_app() -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".into()), &config);
        App::with_parts(config, i18n, Arc::new(SyntheticCamera::new(PermissionMode::Granted)))
    }

    fn app_on_main_from_splash() -> App {
        let mut app = test_app();
        let later = Instant::now() + app.config.splash.timeout() + Duration::from_millis(10);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.screen, Screen::Onboarding);
        let _ = app.update(Message::Onboarding(onboarding::Message::Skip));
        app
    }

    fn app_with_selected_image() -> App {
        let mut app = app_on_main_from_splash();
        let _ = app.update(Message::Main(home::Message::CameraPressed));
        let image = CapturedImage::new(RgbaImage::new(8, 8), ImageSource::Library);
        let generation = camera_generation(&app);
        let _ = app.update(Message::Camera(camera::Message::Picked(generation, Some(Ok(image)))));
        app
    }

    fn camera_generation(app: &App) -> Generation {
        app.camera
            .as_ref()
            .map(|state| state.session().generation())
            .expect("camera open")
    }

    fn pipeline(app: &App) -> Pipeline {
        Pipeline {
            input: app.backend.open_input(Facing::Back).expect("input"),
            output: app.backend.open_photo_output().expect("output"),
        }
    }

    /// Delivers a configuration result for the open camera.
    fn configure_camera(app: &mut App) -> Generation {
        let generation = camera_generation(app);
        let pipeline = pipeline(app);
        let _ = app.update(Message::Camera(camera::Message::Configured(generation, Ok(pipeline))));
        generation
    }

    fn transitions(app: &mut App) -> Vec<(String, String)> {
        app.diagnostics.process_pending();
        app.diagnostics
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::ScreenChanged { from, to },
                } => Some((from.clone(), to.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_on_splash_with_app_name_title() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Splash);
        assert_eq!(app.title(), "Plant Identifier");
    }

    #[test]
    fn splash_ticks_before_timeout_do_not_navigate() {
        let mut app = test_app();
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.screen, Screen::Splash);
    }

    #[test]
    fn onboarding_messages_are_ignored_during_splash() {
        let mut app = test_app();
        let _ = app.update(Message::Onboarding(onboarding::Message::Skip));
        assert_eq!(app.screen, Screen::Splash);
    }

    #[test]
    fn skip_goes_straight_to_main() {
        let mut app = app_on_main_from_splash();
        assert_eq!(app.screen, Screen::Main);
        assert_eq!(app.title(), "Home - Plant Identifier");
        assert_eq!(
            transitions(&mut app),
            vec![
                ("splash".to_string(), "onboarding".to_string()),
                ("onboarding".to_string(), "main".to_string()),
            ]
        );
    }

    #[test]
    fn identify_card_opens_camera_with_session() {
        let mut app = app_on_main_from_splash();
        let _ = app.update(Message::Main(home::Message::FeatureCard(CardAction::Identify)));
        assert_eq!(app.screen, Screen::Camera);
        assert!(app.camera.is_some());
    }

    #[test]
    fn closing_camera_returns_home_and_drops_session() {
        let mut app = app_on_main_from_splash();
        let _ = app.update(Message::Main(home::Message::CameraPressed));
        let _ = app.update(Message::Camera(camera::Message::Close));
        assert_eq!(app.screen, Screen::Main);
        assert!(app.camera.is_none());
    }

    #[test]
    fn late_results_from_a_closed_camera_are_dropped() {
        let mut app = app_on_main_from_splash();
        let _ = app.update(Message::Main(home::Message::CameraPressed));
        let closed = configure_camera(&mut app);
        let _ = app.update(Message::Camera(camera::Message::Shutter));
        assert!(app.camera.as_ref().is_some_and(|c| c.session().capture_in_flight()));
        let _ = app.update(Message::Camera(camera::Message::Close));

        let _ = app.update(Message::Main(home::Message::CameraPressed));
        assert_eq!(app.screen, Screen::Camera);

        let stale_pipeline = pipeline(&app);
        let _ = app.update(Message::Camera(camera::Message::Configured(closed, Ok(stale_pipeline))));
        assert!(app.camera.as_ref().is_some_and(|c| !c.session().is_configured()));

        let photo = Ok(RgbaImage::new(8, 8));
        let _ = app.update(Message::Camera(camera::Message::Captured(closed, photo)));
        let image = CapturedImage::new(RgbaImage::new(8, 8), ImageSource::Library);
        let _ = app.update(Message::Camera(camera::Message::Picked(closed, Some(Ok(image)))));

        assert_eq!(app.screen, Screen::Camera);
        assert!(app.scanning.is_none());
        assert!(app.camera.as_ref().is_some_and(|c| c.selected().is_none()));
    }

    #[test]
    fn late_capture_after_reconfigure_is_dropped() {
        let mut app = app_on_main_from_splash();
        let _ = app.update(Message::Main(home::Message::CameraPressed));
        let closed = configure_camera(&mut app);
        let _ = app.update(Message::Camera(camera::Message::Close));

        let _ = app.update(Message::Main(home::Message::CameraPressed));
        configure_camera(&mut app);
        let _ = app.update(Message::Camera(camera::Message::Shutter));

        let photo = Ok(RgbaImage::new(8, 8));
        let _ = app.update(Message::Camera(camera::Message::Captured(closed, photo)));
        assert_eq!(app.screen, Screen::Camera);
        assert!(app.camera.as_ref().is_some_and(|c| c.session().capture_in_flight()));
    }

    #[test]
    fn picked_image_starts_scanning() {
        let app = app_with_selected_image();
        assert_eq!(app.screen, Screen::Scanning);
        let scan = app.scanning.as_ref().expect("scan state");
        assert!(scan.sequencer().is_running());
        assert_eq!(scan.image().source(), ImageSource::Library);
    }

    #[test]
    fn escape_cancels_scan_back_to_camera_keeping_image() {
        let mut app = app_with_selected_image();
        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Camera);
        assert!(app.scanning.is_none());
        assert!(app.camera.as_ref().and_then(|c| c.selected()).is_some());
    }

    #[test]
    fn escape_is_ignored_outside_scanning() {
        let mut app = app_on_main_from_splash();
        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Main);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_scan_shows_detail_then_returns_to_camera() {
        let mut app = app_with_selected_image();
        let ticket = app
            .scanning
            .as_ref()
            .and_then(|s| s.sequencer().ticket())
            .expect("running scan");

        // Replay the milestones the timeline task would deliver.
        let milestones: Vec<_> = crate::scan::milestones(ticket, crate::scan::ScanTimeline::default())
            .collect()
            .await;
        for (ticket, milestone) in milestones {
            let _ = app.update(Message::Scanning(scanning::Message::Milestone(ticket, milestone)));
        }

        assert_eq!(app.screen, Screen::Detail);
        assert!(app.scanning.is_none());
        assert_eq!(app.detail.as_ref().map(|d| d.record()), Some(&BLUE_SAGE));

        let _ = app.update(Message::Detail(detail::Message::Close));
        assert_eq!(app.screen, Screen::Camera);
        assert!(app.detail.is_none());
    }

    #[test]
    fn stale_milestones_after_cancel_do_not_navigate() {
        let mut app = app_with_selected_image();
        let ticket = app
            .scanning
            .as_ref()
            .and_then(|s| s.sequencer().ticket())
            .expect("running scan");
        let _ = app.update(Message::Scanning(scanning::Message::Cancel));
        let _ = app.update(Message::Scanning(scanning::Message::Milestone(
            ticket,
            ScanMilestone::Finished,
        )));
        assert_eq!(app.screen, Screen::Camera);
        assert!(app.detail.is_none());
    }

    #[test]
    fn scanning_state_tracks_stage() {
        let app = app_with_selected_image();
        assert_eq!(
            app.scanning.as_ref().map(|s| s.sequencer().stage()),
            Some(ScanStage::Analyzing)
        );
    }
}
