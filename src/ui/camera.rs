// SPDX-License-Identifier: MPL-2.0
//! Camera screen: live preview, framing brackets and capture controls.
//!
//! The screen owns the [`CaptureSession`] and the single active image. A
//! photo taken with the shutter or chosen from the library replaces the
//! active image and is reported as [`Event::ImageReady`] so scanning starts
//! right away. Pressing the shutter again while an image is active rescans it
//! instead of taking a new photo.
//!
//! Configuration, capture and library picks run as abortable tasks whose
//! handles live in [`State`]. Their results carry the session [`Generation`],
//! so anything that arrives after the screen was closed is dropped.

use crate::application::port::camera::CameraError;
use crate::camera::preview::PreviewSurface;
use crate::camera::{CaptureSession, CapturedImage, Generation, Pipeline};
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::picker::PickResult;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::FramingOverlay;
use iced::{
    alignment::{Horizontal, Vertical},
    task,
    widget::{button, image, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};
use image_rs::RgbaImage;
use std::future::Future;
use std::time::Instant;

/// Capture mode chosen in the selector above the shutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Identify,
    Diagnose,
}

impl Mode {
    const ALL: [Mode; 2] = [Mode::Identify, Mode::Diagnose];

    fn label_key(self) -> &'static str {
        match self {
            Mode::Identify => "camera-mode-identify",
            Mode::Diagnose => "camera-mode-diagnose",
        }
    }
}

/// Background work owned by the camera screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Configure,
    Capture,
    Pick,
}

#[derive(Default)]
struct Jobs {
    configure: Option<task::Handle>,
    capture: Option<task::Handle>,
    pick: Option<task::Handle>,
}

/// Camera screen state, created each time the camera opens.
pub struct State {
    session: CaptureSession,
    preview: PreviewSurface,
    selected: Option<CapturedImage>,
    mode: Mode,
    jobs: Jobs,
    diagnostics: DiagnosticsHandle,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("session", &self.session)
            .field("selected", &self.selected.is_some())
            .field("mode", &self.mode)
            .field("has_pick", &self.jobs.pick.is_some())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(session: CaptureSession, diagnostics: DiagnosticsHandle) -> Self {
        Self {
            session,
            preview: PreviewSurface::new(),
            selected: None,
            mode: Mode::default(),
            jobs: Jobs::default(),
            diagnostics,
        }
    }

    /// Starts the permission check and pipeline setup.
    pub fn configure(
        &mut self,
    ) -> impl Future<Output = (Generation, Result<Pipeline, CameraError>)> + Send + 'static {
        self.session.request_permission_and_configure()
    }

    /// Starts a still capture, or returns `None` if the session refused it.
    pub fn capture(
        &mut self,
    ) -> Option<impl Future<Output = (Generation, Result<RgbaImage, CameraError>)> + Send + 'static>
    {
        self.session.capture()
    }

    /// Keeps the task running `job`. It is aborted when the screen stops or
    /// the same job is started again.
    pub fn attach(&mut self, job: Job, handle: task::Handle) {
        let slot = match job {
            Job::Configure => &mut self.jobs.configure,
            Job::Capture => &mut self.jobs.capture,
            Job::Pick => &mut self.jobs.pick,
        };
        *slot = Some(handle.abort_on_drop());
    }

    /// Starts rendering the next preview frame unless one is already pending
    /// or the session has nothing to show.
    pub fn request_preview_frame(
        &mut self,
    ) -> Option<impl Future<Output = Option<RgbaImage>> + Send + 'static> {
        if !self.preview.begin_request() {
            return None;
        }
        let job = self.session.preview_frame();
        if job.is_none() {
            self.preview.present(None);
        }
        job
    }

    /// Stops the session, aborts pending jobs and drops the preview. Called
    /// when the screen closes.
    pub fn stop(&mut self) {
        self.session.stop();
        self.jobs = Jobs::default();
        self.preview.clear();
    }

    #[must_use]
    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewSurface {
        &self.preview
    }

    /// The active image, if one was captured or picked.
    #[must_use]
    pub fn selected(&self) -> Option<&CapturedImage> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn select(&mut self, image: CapturedImage) -> Event {
        self.diagnostics.log_state(AppStateEvent::ImageReady {
            source: image.source().to_string(),
        });
        self.selected = Some(image);
        Event::ImageReady
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Configured(Generation, Result<Pipeline, CameraError>),
    Captured(Generation, Result<RgbaImage, CameraError>),
    PreviewFrame(Option<RgbaImage>),
    Picked(Generation, PickResult),
    Tick(Instant),
    Shutter,
    SwitchCamera,
    ToggleFlash,
    Gallery,
    SelectMode(Mode),
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The shutter was pressed with no active image.
    CaptureRequested,
    /// The preview wants its next frame.
    PreviewFrameRequested,
    OpenGallery,
    /// An active image is ready to be scanned.
    ImageReady,
    Closed,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Configured(generation, result) => {
            state.session.install(generation, result);
            Event::None
        }
        Message::Captured(generation, result) => {
            match state.session.finish_capture(generation, result) {
                Some(image) => state.select(image),
                None => Event::None,
            }
        }
        Message::PreviewFrame(frame) => {
            state.preview.present(frame);
            Event::None
        }
        Message::Picked(generation, _) if generation != state.session.generation() => {
            state
                .diagnostics
                .log_warning("Discarding library pick for a closed camera");
            Event::None
        }
        Message::Picked(_, Some(Ok(image))) => state.select(image),
        Message::Picked(_, Some(Err(err))) => {
            state.diagnostics.log_error(Error::from(err).to_string());
            Event::None
        }
        Message::Picked(_, None) => Event::None,
        Message::Tick(_) => {
            if state.selected.is_none() && state.session.is_running() {
                Event::PreviewFrameRequested
            } else {
                Event::None
            }
        }
        Message::Shutter => {
            if state.selected.is_some() {
                Event::ImageReady
            } else {
                Event::CaptureRequested
            }
        }
        Message::SwitchCamera => {
            state.session.switch_facing();
            state.preview.clear();
            Event::None
        }
        Message::ToggleFlash => {
            state.session.toggle_flash();
            Event::None
        }
        Message::Gallery => Event::OpenGallery,
        Message::SelectMode(mode) => {
            state.mode = mode;
            Event::None
        }
        Message::Close => Event::Closed,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let feed: Element<'_, Message> = match (ctx.state.selected(), ctx.state.preview.frame()) {
        (Some(selected), _) => fill_image(selected.handle().clone()),
        (None, Some(frame)) => fill_image(frame.clone()),
        (None, None) => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let controls = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .push(build_top_bar(&ctx))
        .push(Space::new().height(Length::Fill))
        .push(build_mode_selector(&ctx))
        .push(Space::new().height(Length::Fixed(spacing::LG)))
        .push(build_capture_row())
        .push(Space::new().height(Length::Fixed(spacing::XL)));

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(feed)
        .push(FramingOverlay::camera().into_element::<Message>())
        .push(controls);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::camera_backdrop)
        .into()
}

fn fill_image<'a>(handle: image::Handle) -> Element<'a, Message> {
    image(handle)
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn round_control<'a>(icon: Text<'static>, diameter: f32, message: Message) -> Element<'a, Message> {
    button(
        Container::new(icons::sized(icon, diameter * 0.45))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(diameter))
    .height(Length::Fixed(diameter))
    .padding(0)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .on_press(message)
    .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let flash_icon = if ctx.state.session.flash_enabled() {
        icons::bolt()
    } else {
        icons::bolt_slash()
    };

    Row::new()
        .align_y(Vertical::Center)
        .push(round_control(icons::cross(), sizing::ROUND_CONTROL, Message::Close))
        .push(Space::new().width(Length::Fill))
        .push(round_control(flash_icon, sizing::ROUND_CONTROL, Message::ToggleFlash))
        .into()
}

fn build_mode_selector<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let chips = Mode::ALL.into_iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |row, mode| {
            row.push(
                button(Text::new(ctx.i18n.tr(mode.label_key())).size(typography::BODY))
                    .padding([spacing::XS - 2.0, spacing::MD])
                    .style(styles::button::mode_chip(ctx.state.mode == mode))
                    .on_press(Message::SelectMode(mode)),
            )
        },
    );

    Container::new(
        Container::new(chips)
            .padding(spacing::XXS)
            .style(styles::container::overlay_panel),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

fn build_capture_row<'a>() -> Element<'a, Message> {
    let side = sizing::ROUND_CONTROL + spacing::XS;

    let shutter = button(Space::new())
        .width(Length::Fixed(sizing::SHUTTER_BUTTON))
        .height(Length::Fixed(sizing::SHUTTER_BUTTON))
        .style(styles::button::shutter)
        .on_press(Message::Shutter);

    Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(round_control(icons::photos(), side, Message::Gallery))
        .push(Space::new().width(Length::Fill))
        .push(shutter)
        .push(Space::new().width(Length::Fill))
        .push(round_control(icons::rotate(), side, Message::SwitchCamera))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::camera::Facing;
    use crate::application::port::picker::PickerError;
    use crate::camera::ImageSource;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::infrastructure::camera::{PermissionMode, SyntheticCamera};
    use std::sync::Arc;

    fn state_with(camera: SyntheticCamera) -> (State, DiagnosticsCollector) {
        let collector = DiagnosticsCollector::default();
        let session = CaptureSession::new(Arc::new(camera), collector.handle(), Facing::Back, false);
        (State::new(session, collector.handle()), collector)
    }

    async fn configured_state() -> State {
        let (mut state, _) = state_with(SyntheticCamera::default());
        let (generation, result) = state.configure().await;
        update(&mut state, Message::Configured(generation, result));
        state
    }

    fn picked(width: u32, height: u32) -> CapturedImage {
        CapturedImage::new(RgbaImage::new(width, height), ImageSource::Library)
    }

    fn pick(state: &State, result: PickResult) -> Message {
        Message::Picked(state.session().generation(), result)
    }

    #[tokio::test]
    async fn shutter_captures_then_rescans() {
        let mut state = configured_state().await;
        assert_eq!(update(&mut state, Message::Shutter), Event::CaptureRequested);

        let job = state.capture().expect("capture should start");
        let (generation, result) = job.await;
        let event = update(&mut state, Message::Captured(generation, result));
        assert_eq!(event, Event::ImageReady);
        assert_eq!(state.selected().map(CapturedImage::source), Some(ImageSource::Camera));

        assert_eq!(update(&mut state, Message::Shutter), Event::ImageReady);
    }

    #[test]
    fn picked_image_becomes_the_only_active_image() {
        let (mut state, _) = state_with(SyntheticCamera::default());

        let first = pick(&state, Some(Ok(picked(2, 2))));
        assert_eq!(update(&mut state, first), Event::ImageReady);

        let second = pick(&state, Some(Ok(picked(4, 3))));
        let event = update(&mut state, second);
        assert_eq!(event, Event::ImageReady);
        assert_eq!(state.selected().map(CapturedImage::dimensions), Some((4, 3)));
    }

    #[test]
    fn dismissed_or_failed_pick_keeps_current_image() {
        let (mut state, mut collector) = state_with(SyntheticCamera::default());
        let chosen = pick(&state, Some(Ok(picked(2, 2))));
        update(&mut state, chosen);

        let dismissed = pick(&state, None);
        assert_eq!(update(&mut state, dismissed), Event::None);
        let failed = pick(&state, Some(Err(PickerError::Decode("truncated".into()))));
        assert_eq!(update(&mut state, failed), Event::None);
        assert_eq!(state.selected().map(CapturedImage::dimensions), Some((2, 2)));

        collector.process_pending();
        assert!(collector.iter().count() >= 2);
    }

    #[tokio::test]
    async fn results_from_a_closed_camera_are_dropped() {
        let mut closed = configured_state().await;
        let capture = closed.capture().expect("capture should start");
        let pick_generation = closed.session().generation();
        let (mut reopened, _) = state_with(SyntheticCamera::default());
        let configure = closed.configure();
        closed.stop();

        let (generation, result) = configure.await;
        update(&mut reopened, Message::Configured(generation, result));
        assert!(!reopened.session().is_configured());

        let (generation, result) = capture.await;
        assert_eq!(update(&mut reopened, Message::Captured(generation, result)), Event::None);

        let late_pick = Message::Picked(pick_generation, Some(Ok(picked(2, 2))));
        assert_eq!(update(&mut reopened, late_pick), Event::None);
        assert!(reopened.selected().is_none());
    }

    #[tokio::test]
    async fn denied_camera_never_requests_preview_frames() {
        let (mut state, _) = state_with(SyntheticCamera::new(PermissionMode::Denied));
        let (generation, result) = state.configure().await;
        update(&mut state, Message::Configured(generation, result));

        assert_eq!(update(&mut state, Message::Tick(Instant::now())), Event::None);
        assert!(state.capture().is_none());
    }

    #[tokio::test]
    async fn preview_requests_do_not_pile_up() {
        let mut state = configured_state().await;
        assert_eq!(
            update(&mut state, Message::Tick(Instant::now())),
            Event::PreviewFrameRequested
        );

        let job = state.request_preview_frame().expect("first request");
        assert!(state.request_preview_frame().is_none());

        update(&mut state, Message::PreviewFrame(job.await));
        assert!(state.preview().frame().is_some());
        assert!(state.request_preview_frame().is_some());
    }

    #[tokio::test]
    async fn stop_clears_preview() {
        let mut state = configured_state().await;
        let job = state.request_preview_frame().expect("request");
        update(&mut state, Message::PreviewFrame(job.await));

        state.stop();
        assert!(state.preview().frame().is_none());
        assert!(!state.session().is_running());
    }

    #[test]
    fn mode_selector_switches_mode() {
        let (mut state, _) = state_with(SyntheticCamera::default());
        assert_eq!(state.mode(), Mode::Identify);
        update(&mut state, Message::SelectMode(Mode::Diagnose));
        assert_eq!(state.mode(), Mode::Diagnose);
    }

    #[test]
    fn close_reports_closed() {
        let (mut state, _) = state_with(SyntheticCamera::default());
        assert_eq!(update(&mut state, Message::Close), Event::Closed);
    }
}
