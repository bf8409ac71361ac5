// SPDX-License-Identifier: MPL-2.0
//! Scanning screen shown while the simulated analysis runs.
//!
//! The milestone stream is started by the application as an abortable task;
//! its handle is stored here with abort-on-drop, so leaving the screen in any
//! way stops the timeline. Milestones from an older run are rejected by the
//! [`ScanSequencer`] ticket check.

use crate::camera::CapturedImage;
use crate::catalog::PlantRecord;
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle};
use crate::i18n::fluent::I18n;
use crate::scan::{self, Advance, ScanMilestone, ScanSequencer, ScanTicket, ScanTimeline};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::{step_indicator, FramingOverlay, StepIndicator};
use futures_util::Stream;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    task,
    widget::{button, image, Column, Container, Row, Space, Stack, Text},
    Color, ContentFit, Element, Font, Length,
};
use std::time::{Duration, Instant};

/// Fluent keys of the three step rows, in order.
const STEP_KEYS: [&str; 3] = [
    "scanning-step-analyzing",
    "scanning-step-leaves",
    "scanning-step-identifying",
];

/// Scanning screen state, created for each scan.
pub struct State {
    sequencer: ScanSequencer,
    image: CapturedImage,
    started_at: Instant,
    elapsed: Duration,
    sweep: Duration,
    task: Option<task::Handle>,
    diagnostics: DiagnosticsHandle,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("stage", &self.sequencer.stage())
            .field("elapsed", &self.elapsed)
            .field("has_task", &self.task.is_some())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(
        image: CapturedImage,
        started_at: Instant,
        sweep: Duration,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            sequencer: ScanSequencer::new(),
            image,
            started_at,
            elapsed: Duration::ZERO,
            sweep,
            task: None,
            diagnostics,
        }
    }

    /// Starts a run and returns its milestone stream.
    pub fn begin(
        &mut self,
        timeline: ScanTimeline,
    ) -> impl Stream<Item = (ScanTicket, ScanMilestone)> + Send + 'static {
        let ticket = self.sequencer.start();
        scan::milestones(ticket, timeline)
    }

    /// Keeps the task running the milestone stream. It is aborted when this
    /// state is dropped or the scan is cancelled.
    pub fn attach(&mut self, handle: task::Handle) {
        self.task = Some(handle.abort_on_drop());
    }

    #[must_use]
    pub fn sequencer(&self) -> &ScanSequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn image(&self) -> &CapturedImage {
        &self.image
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn stop_task(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Milestone(ScanTicket, ScanMilestone),
    Tick(Instant),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The run finished with this result.
    Completed(&'static PlantRecord),
    Cancelled,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Milestone(ticket, milestone) => {
            match state.sequencer.advance(ticket, milestone) {
                Advance::Ignored => Event::None,
                Advance::Progressed => {
                    state.diagnostics.log_state(AppStateEvent::ScanMilestone {
                        milestone: milestone.to_string(),
                    });
                    Event::None
                }
                Advance::Completed => {
                    state.diagnostics.log_state(AppStateEvent::ScanCompleted);
                    state.stop_task();
                    Event::Completed(scan::identify(state.image.pixels()))
                }
            }
        }
        Message::Tick(now) => {
            state.elapsed = now.saturating_duration_since(state.started_at);
            Event::None
        }
        Message::Cancel => {
            state.sequencer.cancel();
            state.stop_task();
            Event::Cancelled
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let photo = image(ctx.state.image.handle().clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = FramingOverlay::scanning(ctx.state.elapsed, ctx.state.sweep);

    let close = button(
        Container::new(icons::sized(icons::cross(), sizing::ICON_SM + 2.0))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::ROUND_CONTROL))
    .height(Length::Fixed(sizing::ROUND_CONTROL))
    .padding(0)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .on_press(Message::Cancel);

    let controls = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(iced::Padding {
            top: spacing::MD,
            left: spacing::LG,
            right: spacing::LG,
            bottom: spacing::XXL * 2.0 + spacing::XXS,
        })
        .push(close)
        .push(Space::new().height(Length::Fill))
        .push(build_status(&ctx));

    Container::new(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(photo)
            .push(overlay.into_element::<Message>())
            .push(controls),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::camera_backdrop)
    .into()
}

fn build_status<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let soft_white = Color {
        a: opacity::OVERLAY_PRESSED,
        ..palette::WHITE
    };
    let medium = Font {
        weight: Weight::Medium,
        ..Font::default()
    };

    let progress = ctx.state.sequencer.progress();
    let rotation = step_indicator::rotation_at(ctx.state.elapsed);
    let steps = STEP_KEYS
        .iter()
        .zip(1u8..)
        .fold(Column::new().spacing(spacing::SM), |column, (key, step)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(
                        StepIndicator::new(progress.step_status(step), palette::WHITE)
                            .with_rotation(rotation)
                            .into_element(),
                    )
                    .push(
                        Text::new(ctx.i18n.tr(key))
                            .size(typography::BODY_LG)
                            .font(medium)
                            .color(palette::WHITE),
                    ),
            )
        });

    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("scanning-title"))
                .size(typography::DISPLAY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::WHITE),
        )
        .push(
            Text::new(ctx.i18n.tr("scanning-subtitle"))
                .size(typography::BODY_LG)
                .font(medium)
                .color(soft_white),
        )
        .push(
            Text::new(ctx.i18n.tr("scanning-hint"))
                .size(typography::BODY_LG)
                .font(medium)
                .color(soft_white),
        )
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(steps)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ImageSource;
    use crate::catalog::BLUE_SAGE;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::scan::{ScanStage, StepStatus};
    use futures_util::StreamExt;
    use image_rs::RgbaImage;

    fn new_state() -> (State, DiagnosticsCollector) {
        let collector = DiagnosticsCollector::default();
        let image = CapturedImage::new(RgbaImage::new(4, 4), ImageSource::Camera);
        let state = State::new(
            image,
            Instant::now(),
            Duration::from_millis(1500),
            collector.handle(),
        );
        (state, collector)
    }

    #[tokio::test(start_paused = true)]
    async fn full_run_completes_once_with_sample_record() {
        let (mut state, _) = new_state();
        let milestones: Vec<_> = state.begin(ScanTimeline::default()).collect().await;

        let mut completions = 0;
        for (ticket, milestone) in milestones.iter().copied() {
            if let Event::Completed(record) = update(&mut state, Message::Milestone(ticket, milestone)) {
                assert_eq!(record, &BLUE_SAGE);
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(state.sequencer().stage(), ScanStage::Done);

        // Replaying the same milestones changes nothing.
        for (ticket, milestone) in milestones {
            assert_eq!(update(&mut state, Message::Milestone(ticket, milestone)), Event::None);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_run_ignores_late_milestones() {
        let (mut state, _) = new_state();
        let stale: Vec<_> = state.begin(ScanTimeline::default()).collect().await;

        assert_eq!(update(&mut state, Message::Cancel), Event::Cancelled);
        for (ticket, milestone) in stale {
            assert_eq!(update(&mut state, Message::Milestone(ticket, milestone)), Event::None);
        }
        assert_eq!(state.sequencer().stage(), ScanStage::Idle);
        assert!(!state.sequencer().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn steps_report_loading_then_completed() {
        let (mut state, mut collector) = new_state();
        let mut stream = Box::pin(state.begin(ScanTimeline::default()));

        assert_eq!(state.sequencer().progress().step_status(1), StepStatus::Loading);
        assert_eq!(state.sequencer().progress().step_status(2), StepStatus::Pending);

        let (ticket, milestone) = stream.next().await.expect("first milestone");
        update(&mut state, Message::Milestone(ticket, milestone));
        assert_eq!(state.sequencer().progress().step_status(1), StepStatus::Completed);
        assert_eq!(state.sequencer().progress().step_status(2), StepStatus::Loading);

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn ticks_drive_the_animation_clock() {
        let (mut state, _) = new_state();
        let later = state.started_at + Duration::from_millis(750);
        update(&mut state, Message::Tick(later));
        assert_eq!(state.elapsed(), Duration::from_millis(750));
    }
}
