// SPDX-License-Identifier: MPL-2.0
//! "My Garden" tab with its two sub-tabs.
//!
//! Nothing is stored, so both sub-tabs only ever show their empty state.

use crate::catalog::{EmptyState, NO_PLANTS, NO_REMINDERS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, Column, Container, Row, Space, Text},
    Background, Color, Element, Font, Length, Theme,
};
use std::fmt;

/// Sub-tabs of the garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GardenTab {
    #[default]
    MyPlants,
    Reminders,
}

impl GardenTab {
    pub const ALL: [GardenTab; 2] = [GardenTab::MyPlants, GardenTab::Reminders];

    fn label_key(self) -> &'static str {
        match self {
            GardenTab::MyPlants => "garden-tab-my-plants",
            GardenTab::Reminders => "garden-tab-reminders",
        }
    }

    fn empty_state(self) -> &'static EmptyState {
        match self {
            GardenTab::MyPlants => &NO_PLANTS,
            GardenTab::Reminders => &NO_REMINDERS,
        }
    }
}

impl fmt::Display for GardenTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GardenTab::MyPlants => write!(f, "my-plants"),
            GardenTab::Reminders => write!(f, "reminders"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    tab: GardenTab,
}

impl State {
    #[must_use]
    pub fn tab(&self) -> GardenTab {
        self.tab
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectTab(GardenTab),
    Search,
    More,
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    TabSelected(GardenTab),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectTab(tab) if tab != state.tab => {
            state.tab = tab;
            Event::TabSelected(tab)
        }
        // Header buttons and "Add" have no destination yet
        Message::SelectTab(_) | Message::Search | Message::More | Message::Add => Event::None,
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
    let header = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("garden-title"))
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(ctx.colors.text_primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(header_button(icons::magnifier(), Message::Search, ctx.colors))
        .push(header_button(icons::ellipsis(), Message::More, ctx.colors));

    let tabs = GardenTab::ALL
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, &tab| {
            row.push(build_tab(&ctx, tab))
        });

    let empty = Container::new(build_empty_state(&ctx, ctx.state.tab.empty_state()))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::MD)
        .padding([spacing::MD, spacing::MD + spacing::XXS])
        .push(header)
        .push(tabs)
        .push(empty)
        .into()
}

fn header_button<'a>(
    icon: Text<'static>,
    message: Message,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    button(icons::sized(icon, sizing::ICON_MD - 2.0))
        .padding(spacing::XXS)
        .style(styles::button::ghost(colors.text_primary))
        .on_press(message)
        .into()
}

/// Sub-tab label with an underline under the selected one.
fn build_tab<'a>(ctx: &ViewContext<'a>, tab: GardenTab) -> Element<'a, Message> {
    let selected = ctx.state.tab == tab;
    let underline_color = if selected {
        palette::PRIMARY_500
    } else {
        Color::TRANSPARENT
    };

    let label = button(
        Text::new(ctx.i18n.tr(tab.label_key()))
            .size(typography::BODY_LG)
            .font(Font {
                weight: if selected {
                    Weight::Semibold
                } else {
                    Weight::Normal
                },
                ..Font::default()
            }),
    )
    .padding([spacing::XXS, 0.0])
    .style(styles::button::tab(
        selected,
        palette::PRIMARY_500,
        ctx.colors.text_tertiary,
    ))
    .on_press(Message::SelectTab(tab));

    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(label)
        .push(
            Container::new(Space::new())
                .width(Length::Fixed(spacing::XL))
                .height(Length::Fixed(border::WIDTH_MD))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(underline_color)),
                    ..Default::default()
                }),
        )
        .into()
}

fn build_empty_state<'a>(ctx: &ViewContext<'a>, empty: &EmptyState) -> Element<'a, Message> {
    let add = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::plus(), typography::BODY_LG))
            .push(Text::new(ctx.i18n.tr(empty.action_key)).size(typography::BODY_LG)),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::Add);

    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(icons::sized(icons::leaf(), sizing::ICON_XL).color(palette::PRIMARY_200))
        .push(
            Text::new(ctx.i18n.tr(empty.title_key))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                })
                .color(ctx.colors.text_primary),
        )
        .push(
            Text::new(ctx.i18n.tr(empty.hint_key))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(add)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_my_plants() {
        assert_eq!(State::default().tab(), GardenTab::MyPlants);
    }

    #[test]
    fn selecting_a_new_tab_reports_it_once() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::SelectTab(GardenTab::Reminders)),
            Event::TabSelected(GardenTab::Reminders)
        );
        assert_eq!(
            update(&mut state, Message::SelectTab(GardenTab::Reminders)),
            Event::None
        );
        assert_eq!(state.tab(), GardenTab::Reminders);
    }

    #[test]
    fn each_tab_has_its_own_empty_state() {
        assert_eq!(GardenTab::MyPlants.empty_state().action_key, "garden-add-plant");
        assert_eq!(
            GardenTab::Reminders.empty_state().action_key,
            "garden-add-reminder"
        );
    }
}
