// SPDX-License-Identifier: MPL-2.0
//! Splash screen with a typed-out wordmark.
//!
//! What is visible is a pure function of the time since the splash appeared,
//! see [`SplashReveal::at`]. The screen only advances on ticks, so nothing
//! keeps running once it is gone.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{container, Column, Container, Row, Space, Text},
    Element, Font, Length,
};
use std::time::{Duration, Instant};

const INITIAL: &str = "P";
const LANT: &str = "LANT";
const IDENTIFIER: &str = "identifier";

/// When the initial letter appears.
const INITIAL_AT_MS: u64 = 200;
/// Interval between typed characters.
const TYPE_TICK_MS: u64 = 120;
/// Pause between the end of "LANT" and the start of "identifier".
const WORD_GAP_MS: u64 = 200;
/// Pause between the end of "identifier" and the subtitle.
const SUBTITLE_GAP_MS: u64 = 300;

/// Characters typed by a ticker started at `start_ms` that reveals one
/// character per tick. Returns the count and the time of its final tick, the
/// one after the last character.
fn typed(elapsed_ms: u64, start_ms: u64, len: usize) -> (usize, u64) {
    let ticks = elapsed_ms.saturating_sub(start_ms) / TYPE_TICK_MS;
    let shown = usize::try_from(ticks).map_or(len, |ticks| ticks.min(len));
    let final_tick = start_ms + TYPE_TICK_MS * (len as u64 + 1);
    (shown, final_tick)
}

/// Visible parts of the wordmark at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplashReveal {
    pub initial: bool,
    /// Characters of "LANT" shown.
    pub lant: usize,
    /// Characters of "identifier" shown.
    pub identifier: usize,
    pub subtitle: bool,
}

impl SplashReveal {
    /// Reveal state `elapsed` after the splash appeared.
    ///
    /// "LANT" starts typing when "P" appears; "identifier" starts a short
    /// pause after the LANT ticker's final tick; the subtitle follows the
    /// identifier ticker's final tick.
    #[must_use]
    pub fn at(elapsed: Duration) -> Self {
        let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if ms < INITIAL_AT_MS {
            return Self::default();
        }

        let (lant, lant_done) = typed(ms, INITIAL_AT_MS, LANT.len());
        let identifier_start = lant_done + WORD_GAP_MS;
        let (identifier, identifier_done) = typed(ms, identifier_start, IDENTIFIER.len());

        Self {
            initial: true,
            lant,
            identifier,
            subtitle: ms >= identifier_done + SUBTITLE_GAP_MS,
        }
    }

    /// True once every part is on screen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.initial && self.lant == LANT.len() && self.identifier == IDENTIFIER.len() && self.subtitle
    }
}

/// Splash screen state.
#[derive(Debug, Clone)]
pub struct State {
    started_at: Instant,
    elapsed: Duration,
    timeout: Duration,
}

impl State {
    #[must_use]
    pub fn new(started_at: Instant, timeout: Duration) -> Self {
        Self {
            started_at,
            elapsed: Duration::ZERO,
            timeout,
        }
    }

    #[must_use]
    pub fn reveal(&self) -> SplashReveal {
        SplashReveal::at(self.elapsed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Messages emitted by the splash screen.
#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Elapsed,
}

/// Advances the animation clock. Reports [`Event::Elapsed`] once the timeout
/// has passed.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Tick(now) => {
            state.elapsed = now.saturating_duration_since(state.started_at);
            if state.elapsed >= state.timeout {
                Event::Elapsed
            } else {
                Event::None
            }
        }
    }
}

/// Contextual data needed to render the splash screen.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub colors: &'a ColorScheme,
    pub subtitle: String,
}

/// Render the splash screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let reveal = ctx.state.reveal();
    let ink = ctx.colors.text_primary;
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };
    let semibold = Font {
        weight: Weight::Semibold,
        ..Font::default()
    };

    let initial = Text::new(if reveal.initial { INITIAL } else { "" })
        .size(typography::DISPLAY_XL)
        .font(bold)
        .color(ink);

    let words = Column::new()
        .push(Space::new().height(Length::Fixed(spacing::MD + spacing::XXS)))
        .push(
            Text::new(&LANT[..reveal.lant])
                .size(typography::DISPLAY)
                .font(semibold)
                .color(ink),
        )
        .push(
            Text::new(&IDENTIFIER[..reveal.identifier])
                .size(typography::DISPLAY)
                .font(semibold)
                .color(ink),
        );

    let wordmark = Row::new()
        .align_y(Vertical::Top)
        .spacing(spacing::XS)
        .push(initial)
        .push(words);

    let subtitle = Text::new(if reveal.subtitle {
        ctx.subtitle
    } else {
        String::new()
    })
    .size(typography::BODY)
    .color(ink);

    let block = Column::new()
        .align_x(Horizontal::Left)
        .push(wordmark)
        .push(subtitle);

    let content = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .push(Space::new().height(Length::Fixed(320.0)))
        .push(container(block).padding([0.0, spacing::XL - 2.0]));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors))
        .into()
}
