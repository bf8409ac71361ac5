// SPDX-License-Identifier: MPL-2.0
//! Main shell: tab content above the bottom navigation bar.
//!
//! The bar has four tabs split around an elevated camera button. Only the
//! Home and Garden tabs have content; Diagnose and Experts are placeholders.

use crate::catalog::{CardAction, FeatureCard, CARE_TOOLS, FEATURE_CARDS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, shadow, sizing, spacing, typography};
use crate::ui::garden;
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{
        button, container,
        scrollable::{Direction, Scrollbar},
        Column, Container, Row, Scrollable, Space, Stack, Text,
    },
    Background, Color, Element, Font, Length, Theme,
};
use std::fmt;

/// Tabs of the bottom navigation bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Diagnose,
    Experts,
    Garden,
}

impl Tab {
    /// Tabs left of the camera button, then right of it.
    const LEADING: [Tab; 2] = [Tab::Home, Tab::Diagnose];
    const TRAILING: [Tab; 2] = [Tab::Experts, Tab::Garden];

    fn label_key(self) -> &'static str {
        match self {
            Tab::Home => "tab-home",
            Tab::Diagnose => "tab-diagnose",
            Tab::Experts => "tab-experts",
            Tab::Garden => "tab-garden",
        }
    }

    fn icon<'a>(self) -> Text<'a> {
        match self {
            Tab::Home => icons::house(),
            Tab::Diagnose => icons::stethoscope(),
            Tab::Experts => icons::person(),
            Tab::Garden => icons::flower(),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Home => write!(f, "home"),
            Tab::Diagnose => write!(f, "diagnose"),
            Tab::Experts => write!(f, "experts"),
            Tab::Garden => write!(f, "garden"),
        }
    }
}

/// Main shell state. Rebuilt whenever the shell is entered.
#[derive(Debug, Clone, Default)]
pub struct State {
    tab: Tab,
    garden: garden::State,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn garden(&self) -> &garden::State {
        &self.garden
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectTab(Tab),
    CameraPressed,
    FeatureCard(CardAction),
    CareTool(usize),
    Search,
    Pro,
    Garden(garden::Message),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    TabSelected(Tab),
    OpenCamera,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectTab(tab) if tab != state.tab => {
            state.tab = tab;
            Event::TabSelected(tab)
        }
        Message::CameraPressed | Message::FeatureCard(CardAction::Identify) => Event::OpenCamera,
        Message::Garden(message) => {
            garden::update(&mut state.garden, message);
            Event::None
        }
        Message::SelectTab(_)
        | Message::FeatureCard(CardAction::Inert)
        | Message::CareTool(_)
        | Message::Search
        | Message::Pro => Event::None,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub colors: &'a ColorScheme,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.state.tab {
        Tab::Home => build_home(&ctx),
        Tab::Diagnose => build_placeholder(&ctx, "placeholder-diagnose"),
        Tab::Experts => build_placeholder(&ctx, "placeholder-experts"),
        Tab::Garden => garden::view(garden::ViewContext {
            i18n: ctx.i18n,
            state: &ctx.state.garden,
            colors: ctx.colors,
        })
        .map(Message::Garden),
    };

    let layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(content).width(Length::Fill).height(Length::Fill))
        .push(build_nav_bar(&ctx));

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors))
        .into()
}

// =============================================================================
// Home tab
// =============================================================================

fn build_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let pro = button(
        Container::new(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(icons::sized(icons::star(), typography::CAPTION))
                .push(Text::new(ctx.i18n.tr("home-pro")).size(typography::CAPTION).font(bold)),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge),
    )
    .padding(0)
    .style(styles::button::ghost(palette::WHITE))
    .on_press(Message::Pro);

    let header = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(
            Text::new(ctx.i18n.tr("home-title"))
                .size(typography::TITLE_MD)
                .font(bold)
                .color(ctx.colors.text_primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(pro)
        .push(
            button(icons::magnifier())
                .padding(spacing::XXS)
                .style(styles::button::ghost(ctx.colors.text_primary))
                .on_press(Message::Search),
        );

    let cards = FEATURE_CARDS
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, card| {
            row.push(build_feature_card(ctx, card))
        });

    let tools = CARE_TOOLS
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, key)| {
            row.push(build_care_tool(ctx, index, key))
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding([spacing::MD, spacing::MD + spacing::XXS])
        .push(header)
        .push(horizontal(cards))
        .push(
            Text::new(ctx.i18n.tr("home-care-tools"))
                .size(typography::TITLE_MD + 2.0)
                .font(bold)
                .color(ctx.colors.brand_text),
        )
        .push(horizontal(tools));

    Scrollable::new(content)
        .direction(Direction::Vertical(Scrollbar::new()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn horizontal<'a>(row: Row<'a, Message>) -> Element<'a, Message> {
    Scrollable::new(row)
        .direction(Direction::Horizontal(Scrollbar::new().width(0.0).scroller_width(0.0)))
        .width(Length::Fill)
        .into()
}

fn build_feature_card<'a>(ctx: &ViewContext<'a>, card: &FeatureCard) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Space::new().height(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr(card.title_key))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(ctx.i18n.tr(card.subtitle_key)).size(typography::BODY_SM));

    button(body)
        .width(Length::Fixed(sizing::FEATURE_CARD_WIDTH))
        .height(Length::Fixed(sizing::FEATURE_CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::button::card(palette::PRIMARY_500, palette::WHITE))
        .on_press(Message::FeatureCard(card.action))
        .into()
}

fn build_care_tool<'a>(ctx: &ViewContext<'a>, index: usize, key: &str) -> Element<'a, Message> {
    let icon = match index {
        0 => icons::bell(),
        1 => icons::bulb(),
        _ => icons::droplet(),
    };

    let body = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(icons::sized(icon, sizing::ICON_LG).color(ctx.colors.brand_primary))
        .push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(ctx.colors.text_primary),
        );

    button(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::FEATURE_CARD_WIDTH - spacing::LG))
    .height(Length::Fixed(sizing::FEATURE_CARD_WIDTH - spacing::XL))
    .style(styles::button::card(
        ctx.colors.surface_secondary,
        ctx.colors.text_primary,
    ))
    .on_press(Message::CareTool(index))
    .into()
}

fn build_placeholder<'a>(ctx: &ViewContext<'a>, key: &str) -> Element<'a, Message> {
    Container::new(
        Text::new(ctx.i18n.tr(key))
            .size(typography::TITLE_MD + 2.0)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            })
            .color(ctx.colors.text_primary),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

// =============================================================================
// Navigation bar
// =============================================================================

fn build_nav_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let lift = sizing::CAMERA_BUTTON / 2.0;
    let active = palette::PRIMARY_800;
    let idle = Color {
        a: opacity::NAV_IDLE,
        ..palette::PRIMARY_800
    };

    let item = |tab: Tab| -> Element<'a, Message> {
        let selected = ctx.state.tab == tab;
        let body = Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XXS)
            .push(tab.icon())
            .push(
                Text::new(ctx.i18n.tr(tab.label_key()))
                    .size(typography::CAPTION)
                    .font(Font {
                        weight: Weight::Semibold,
                        ..Font::default()
                    }),
            );

        button(Container::new(body).width(Length::Fill).align_x(Horizontal::Center))
            .width(Length::Fill)
            .padding([spacing::XS, 0.0])
            .style(styles::button::tab(selected, active, idle))
            .on_press(Message::SelectTab(tab))
            .into()
    };

    let leading = Tab::LEADING
        .into_iter()
        .fold(Row::new(), |row, tab| row.push(item(tab)))
        .push(Space::new().width(Length::Fixed(sizing::CAMERA_BUTTON)));
    let items = Tab::TRAILING
        .into_iter()
        .fold(leading, |row, tab| row.push(item(tab)))
        .align_y(Vertical::Center)
        .width(Length::Fill);

    let bar = Column::new()
        .push(Space::new().height(Length::Fixed(lift)))
        .push(
            Container::new(items)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::NAV_BAR_HEIGHT))
                .align_y(Vertical::Center)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(palette::WHITE)),
                    shadow: shadow::SM,
                    ..Default::default()
                }),
        );

    let camera = Container::new(
        button(
            Container::new(icons::sized(icons::camera(), sizing::ICON_LG))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(sizing::CAMERA_BUTTON))
        .height(Length::Fixed(sizing::CAMERA_BUTTON))
        .padding(0)
        .style(styles::button::camera_fab)
        .on_press(Message::CameraPressed),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAV_BAR_HEIGHT + lift))
        .push(bar)
        .push(camera)
        .into()
}
