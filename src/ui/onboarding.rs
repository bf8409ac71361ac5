// SPDX-License-Identifier: MPL-2.0
//! Onboarding pages shown once after the splash.
//!
//! Pages only change through the buttons. Skip is available on every page
//! and leaves onboarding immediately.

use crate::catalog::{OnboardingPage, ONBOARDING_PAGES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Font, Length, Theme,
};

/// Index of the final "Welcome!" page.
pub const LAST_PAGE: usize = ONBOARDING_PAGES.len() - 1;

/// Onboarding screen state.
#[derive(Debug, Clone, Default)]
pub struct State {
    page: usize,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page >= LAST_PAGE
    }
}

/// Messages emitted by the onboarding screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Skip,
    LetsGo,
    OpenTerms,
    OpenPrivacy,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    PageChanged(usize),
    Skipped,
    Finished,
}

/// Process an onboarding message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Next => {
            if state.page < LAST_PAGE {
                state.page += 1;
                Event::PageChanged(state.page)
            } else {
                Event::None
            }
        }
        Message::Skip => Event::Skipped,
        Message::LetsGo if state.is_last_page() => Event::Finished,
        // Legal links have no destination yet
        Message::LetsGo | Message::OpenTerms | Message::OpenPrivacy => Event::None,
    }
}

/// Contextual data needed to render the onboarding screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub colors: &'a ColorScheme,
}

/// Render the onboarding screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let skip = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("onboarding-skip")).size(typography::BODY_LG))
                .style(styles::button::ghost(ctx.colors.text_primary))
                .on_press(Message::Skip),
        )
        .padding([spacing::MD + spacing::XXS, spacing::MD + spacing::XXS]);

    let page = ONBOARDING_PAGES
        .get(ctx.state.page())
        .copied()
        .unwrap_or(OnboardingPage::Illustration);

    let body = Container::new(build_page(&ctx, page))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let footer = if ctx.state.is_last_page() {
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::MD + spacing::XXS)
            .push(cta_button(ctx.i18n.tr("onboarding-lets-go"), Message::LetsGo))
            .push(build_legal(&ctx))
            .padding([0.0, spacing::XL])
    } else {
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XL - 2.0)
            .push(cta_button(ctx.i18n.tr("onboarding-next"), Message::Next))
            .push(build_page_dots(ctx.state.page()))
            .padding(iced::Padding {
                top: spacing::XL - 2.0,
                bottom: spacing::XXL + 2.0,
                ..iced::Padding::ZERO
            })
    };

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(skip)
        .push(body)
        .push(footer);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors))
        .into()
}

fn build_page<'a>(ctx: &ViewContext<'a>, page: OnboardingPage) -> Element<'a, Message> {
    match page {
        OnboardingPage::Headline {
            title_key,
            subtitle_key,
        } => {
            let mut column = Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XS)
                .push(
                    Text::new(ctx.i18n.tr(title_key))
                        .size(typography::TITLE_LG)
                        .font(Font {
                            weight: Weight::Bold,
                            ..Font::default()
                        })
                        .color(ctx.colors.brand_text),
                );
            if let Some(key) = subtitle_key {
                column = column.push(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::BODY_LG)
                        .color(ctx.colors.text_secondary),
                );
            }
            column.into()
        }
        OnboardingPage::Illustration => Container::new(Space::new())
            .width(Length::Fixed(sizing::ONBOARDING_BUTTON_WIDTH - spacing::XXL))
            .height(Length::Fixed(sizing::ONBOARDING_BUTTON_WIDTH))
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::PRIMARY_100.into()),
                border: Border {
                    radius: radius::LG.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
    }
}

fn cta_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(
        Container::new(Text::new(label).size(typography::TITLE_MD - 2.0))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::ONBOARDING_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT + 2.0))
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press(message)
    .into()
}

/// Five-dot indicator; the active page is drawn as a wider pill.
fn build_page_dots<'a>(active: usize) -> Element<'a, Message> {
    (0..LAST_PAGE)
        .fold(Row::new().spacing(spacing::XS + 2.0), |row, index| {
            let is_active = index == active;
            let width = if is_active {
                sizing::PAGE_DOT_ACTIVE_WIDTH
            } else {
                sizing::PAGE_DOT
            };
            row.push(
                Container::new(Space::new())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(sizing::PAGE_DOT))
                    .style(styles::container::dot(is_active)),
            )
        })
        .into()
}

fn build_legal<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let muted = ctx.colors.text_tertiary;
    let link = |label: String, message: Message| {
        button(Text::new(label).size(typography::CAPTION))
            .padding(0)
            .style(styles::button::ghost(palette::PRIMARY_600))
            .on_press(message)
    };

    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .padding(iced::Padding {
            top: spacing::MD + spacing::XXS,
            bottom: spacing::XL + spacing::XS,
            ..iced::Padding::ZERO
        })
        .push(
            Text::new(ctx.i18n.tr("onboarding-legal-intro"))
                .size(typography::CAPTION)
                .color(muted),
        )
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(link(ctx.i18n.tr("onboarding-legal-terms"), Message::OpenTerms))
                .push(
                    Text::new(ctx.i18n.tr("onboarding-legal-and"))
                        .size(typography::CAPTION)
                        .color(muted),
                )
                .push(link(
                    ctx.i18n.tr("onboarding-legal-privacy"),
                    Message::OpenPrivacy,
                )),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_every_page_and_stops_at_the_last() {
        let mut state = State::new();
        for expected in 1..=LAST_PAGE {
            assert_eq!(update(&mut state, Message::Next), Event::PageChanged(expected));
        }
        assert_eq!(update(&mut state, Message::Next), Event::None);
        assert_eq!(state.page(), LAST_PAGE);
    }

    #[test]
    fn skip_leaves_from_any_page() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::Skip), Event::Skipped);

        update(&mut state, Message::Next);
        update(&mut state, Message::Next);
        assert_eq!(update(&mut state, Message::Skip), Event::Skipped);
    }

    #[test]
    fn lets_go_only_finishes_on_the_welcome_page() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::LetsGo), Event::None);

        while !state.is_last_page() {
            update(&mut state, Message::Next);
        }
        assert_eq!(update(&mut state, Message::LetsGo), Event::Finished);
    }

    #[test]
    fn legal_links_are_inert() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::OpenTerms), Event::None);
        assert_eq!(update(&mut state, Message::OpenPrivacy), Event::None);
        assert_eq!(state.page(), 0);
    }
}
