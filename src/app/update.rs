// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens report [`Event`](crate::ui::camera::Event)s; the handlers here log
//! user actions, start async work as [`Task`]s and move between screens
//! through [`flow::transition`].

use super::flow::{self, FlowEvent};
use super::{Message, Screen};
use crate::app::config::{Config, DEFAULT_FLASH_ENABLED, SCAN_LINE_SWEEP_MS};
use crate::application::port::camera::CameraBackend;
use crate::camera::CaptureSession;
use crate::catalog::PlantRecord;
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, UserAction};
use crate::i18n::fluent::I18n;
use crate::infrastructure::picker::RfdPicker;
use crate::picker;
use crate::scan::ScanTimeline;
use crate::ui::camera::{self, Event as CameraEvent};
use crate::ui::detail::{self, Event as DetailEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::onboarding::{self, Event as OnboardingEvent};
use crate::ui::scanning::{self, Event as ScanningEvent};
use crate::ui::splash::{self, Event as SplashEvent};
use iced::Task;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Mutable application state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub backend: &'a Arc<dyn CameraBackend>,
    pub screen: &'a mut Screen,
    pub splash: &'a mut splash::State,
    pub onboarding: &'a mut onboarding::State,
    pub main: &'a mut home::State,
    pub camera: &'a mut Option<camera::State>,
    pub scanning: &'a mut Option<scanning::State>,
    pub detail: &'a mut Option<detail::State>,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

/// Routes the clock to whichever screen is animating.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    match *ctx.screen {
        Screen::Splash => handle_splash_message(ctx, splash::Message::Tick(now)),
        Screen::Camera => handle_camera_message(ctx, camera::Message::Tick(now)),
        Screen::Scanning => handle_scanning_message(ctx, scanning::Message::Tick(now)),
        Screen::Onboarding | Screen::Main | Screen::Detail => Task::none(),
    }
}

/// Escape cancels a running scan. Other screens ignore it.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen == Screen::Scanning {
        handle_scanning_message(ctx, scanning::Message::Cancel)
    } else {
        Task::none()
    }
}

pub fn handle_splash_message(ctx: &mut UpdateContext<'_>, message: splash::Message) -> Task<Message> {
    match splash::update(ctx.splash, message) {
        SplashEvent::None => Task::none(),
        SplashEvent::Elapsed => {
            if navigate(ctx, FlowEvent::SplashElapsed) {
                *ctx.onboarding = onboarding::State::new();
            }
            Task::none()
        }
    }
}

pub fn handle_onboarding_message(
    ctx: &mut UpdateContext<'_>,
    message: onboarding::Message,
) -> Task<Message> {
    match onboarding::update(ctx.onboarding, message) {
        OnboardingEvent::None => {}
        OnboardingEvent::PageChanged(_) => {
            ctx.diagnostics.log_action(UserAction::NextOnboardingPage);
        }
        OnboardingEvent::Skipped => {
            ctx.diagnostics.log_action(UserAction::SkipOnboarding);
            enter_main(ctx, FlowEvent::OnboardingSkipped);
        }
        OnboardingEvent::Finished => {
            ctx.diagnostics.log_action(UserAction::FinishOnboarding);
            enter_main(ctx, FlowEvent::OnboardingFinished);
        }
    }
    Task::none()
}

fn enter_main(ctx: &mut UpdateContext<'_>, event: FlowEvent) {
    if navigate(ctx, event) {
        *ctx.main = home::State::new();
    }
}

pub fn handle_main_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(ctx.main, message) {
        HomeEvent::None => Task::none(),
        HomeEvent::TabSelected(tab) => {
            ctx.diagnostics.log_action(UserAction::SelectTab {
                tab: tab.to_string(),
            });
            Task::none()
        }
        HomeEvent::OpenCamera => {
            ctx.diagnostics.log_action(UserAction::OpenCamera);
            open_camera(ctx)
        }
    }
}

/// Builds a fresh capture session and starts configuring it.
fn open_camera(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !navigate(ctx, FlowEvent::CameraRequested) {
        return Task::none();
    }

    let facing = ctx.config.camera.default_facing.unwrap_or_default();
    let flash = ctx.config.camera.flash.unwrap_or(DEFAULT_FLASH_ENABLED);
    let session = CaptureSession::new(
        Arc::clone(ctx.backend),
        ctx.diagnostics.handle(),
        facing,
        flash,
    );
    let mut state = camera::State::new(session, ctx.diagnostics.handle());
    let job = state.configure();
    let (task, handle) = Task::perform(job, |(generation, result)| {
        Message::Camera(camera::Message::Configured(generation, result))
    })
    .abortable();
    state.attach(camera::Job::Configure, handle);
    *ctx.camera = Some(state);
    task
}

pub fn handle_camera_message(ctx: &mut UpdateContext<'_>, message: camera::Message) -> Task<Message> {
    let Some(state) = ctx.camera.as_mut() else {
        return Task::none();
    };

    if let Some(action) = camera_action(&message) {
        ctx.diagnostics.log_action(action);
    }

    match camera::update(state, message) {
        CameraEvent::None => Task::none(),
        CameraEvent::CaptureRequested => match state.capture() {
            Some(job) => {
                let (task, handle) = Task::perform(job, |(generation, result)| {
                    Message::Camera(camera::Message::Captured(generation, result))
                })
                .abortable();
                state.attach(camera::Job::Capture, handle);
                task
            }
            None => Task::none(),
        },
        CameraEvent::PreviewFrameRequested => match state.request_preview_frame() {
            Some(job) => Task::perform(job, |frame| {
                Message::Camera(camera::Message::PreviewFrame(frame))
            }),
            None => Task::none(),
        },
        CameraEvent::OpenGallery => {
            let generation = state.session().generation();
            let chooser = RfdPicker::with_title(ctx.i18n.tr("picker-title"));
            let (task, handle) = Task::perform(picker::pick_image(chooser), move |result| {
                Message::Camera(camera::Message::Picked(generation, result))
            })
            .abortable();
            state.attach(camera::Job::Pick, handle);
            task
        }
        CameraEvent::ImageReady => start_scan(ctx),
        CameraEvent::Closed => {
            if navigate(ctx, FlowEvent::CameraDismissed) {
                if let Some(mut state) = ctx.camera.take() {
                    state.stop();
                }
            }
            Task::none()
        }
    }
}

fn camera_action(message: &camera::Message) -> Option<UserAction> {
    match message {
        camera::Message::Shutter => Some(UserAction::CapturePhoto),
        camera::Message::SwitchCamera => Some(UserAction::SwitchCamera),
        camera::Message::ToggleFlash => Some(UserAction::ToggleFlash),
        camera::Message::Gallery => Some(UserAction::PickFromGallery),
        camera::Message::Close => Some(UserAction::CloseCamera),
        _ => None,
    }
}

/// Moves the selected image to the scanning screen and starts the timeline.
fn start_scan(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(image) = ctx
        .camera
        .as_ref()
        .and_then(|state| state.selected())
        .cloned()
    else {
        return Task::none();
    };
    if !navigate(ctx, FlowEvent::ImageReady) {
        return Task::none();
    }

    let timeline = ScanTimeline {
        step_delay: ctx.config.scan.step_delay(),
        settle_delay: ctx.config.scan.settle_delay(),
    };
    let mut state = scanning::State::new(
        image,
        Instant::now(),
        Duration::from_millis(SCAN_LINE_SWEEP_MS),
        ctx.diagnostics.handle(),
    );
    let stream = state.begin(timeline);
    let (task, handle) = Task::run(stream, |(ticket, milestone)| {
        Message::Scanning(scanning::Message::Milestone(ticket, milestone))
    })
    .abortable();
    state.attach(handle);
    *ctx.scanning = Some(state);
    task
}

pub fn handle_scanning_message(
    ctx: &mut UpdateContext<'_>,
    message: scanning::Message,
) -> Task<Message> {
    let Some(state) = ctx.scanning.as_mut() else {
        return Task::none();
    };

    if matches!(message, scanning::Message::Cancel) {
        ctx.diagnostics.log_action(UserAction::CancelScan);
    }

    match scanning::update(state, message) {
        ScanningEvent::None => {}
        ScanningEvent::Completed(record) => show_detail(ctx, record),
        ScanningEvent::Cancelled => {
            if navigate(ctx, FlowEvent::ScanCancelled) {
                *ctx.scanning = None;
            }
        }
    }
    Task::none()
}

fn show_detail(ctx: &mut UpdateContext<'_>, record: &'static PlantRecord) {
    if !navigate(ctx, FlowEvent::ScanCompleted) {
        return;
    }
    if let Some(scan) = ctx.scanning.take() {
        *ctx.detail = Some(detail::State::new(record, scan.image().clone()));
    }
}

pub fn handle_detail_message(ctx: &mut UpdateContext<'_>, message: detail::Message) -> Task<Message> {
    let Some(state) = ctx.detail.as_mut() else {
        return Task::none();
    };

    match detail::update(state, message) {
        DetailEvent::None => {}
        DetailEvent::Dismissed => {
            ctx.diagnostics.log_action(UserAction::DismissDetail);
            if navigate(ctx, FlowEvent::DetailDismissed) {
                *ctx.detail = None;
            }
        }
    }
    Task::none()
}

/// Applies `event` to the current screen. Returns `false` and logs the
/// rejection if the move is not allowed.
fn navigate(ctx: &mut UpdateContext<'_>, event: FlowEvent) -> bool {
    let from = *ctx.screen;
    match flow::transition(from, event) {
        Some(to) => {
            ctx.diagnostics.log_state(AppStateEvent::ScreenChanged {
                from: from.to_string(),
                to: to.to_string(),
            });
            log::debug!("screen {from} -> {to} on {event}");
            *ctx.screen = to;
            true
        }
        None => {
            ctx.diagnostics.log_state(AppStateEvent::TransitionRejected {
                from: from.to_string(),
                event: event.to_string(),
            });
            log::warn!("ignored {event} on {from} screen");
            false
        }
    }
}
