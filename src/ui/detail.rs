// SPDX-License-Identifier: MPL-2.0
//! Plant detail screen.
//!
//! Renders a [`PlantRecord`] below the scanned photo. The "Common Problems"
//! and "FAQ" lists are accordions that keep at most one entry open each.
//! Buttons other than back, close and the accordion headers have no
//! destination yet.

use crate::camera::CapturedImage;
use crate::catalog::{DetailKind, DetailRow, Faq, PlantRecord, Problem, ProblemId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::{Style as FontStyle, Weight},
    widget::{
        button, image,
        scrollable::{Direction, Scrollbar},
        Column, Container, Row, Scrollable, Space, Stack, Text,
    },
    ContentFit, Element, Font, Length,
};

/// Buttons on the detail screen that do nothing yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InertAction {
    NotYourPlant,
    Diagnose,
    ReadMore,
    Calculate,
    StartChat,
    Camera,
    AddToMyPlants,
}

#[derive(Debug, Clone)]
pub struct State {
    record: &'static PlantRecord,
    image: CapturedImage,
    expanded_problem: Option<ProblemId>,
    expanded_faq: Option<usize>,
}

impl State {
    /// Opens the record with "Wilting Leaves" expanded and every FAQ closed.
    #[must_use]
    pub fn new(record: &'static PlantRecord, image: CapturedImage) -> Self {
        Self {
            record,
            image,
            expanded_problem: Some(ProblemId::WiltingLeaves),
            expanded_faq: None,
        }
    }

    #[must_use]
    pub fn record(&self) -> &'static PlantRecord {
        self.record
    }

    #[must_use]
    pub fn expanded_problem(&self) -> Option<ProblemId> {
        self.expanded_problem
    }

    #[must_use]
    pub fn expanded_faq(&self) -> Option<usize> {
        self.expanded_faq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Back,
    Close,
    ToggleProblem(ProblemId),
    ToggleFaq(usize),
    Inert(InertAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Dismissed,
}

/// Opens `item` and closes the others, or closes it if it was open.
fn toggle<T: PartialEq>(slot: &mut Option<T>, item: T) {
    if slot.as_ref() == Some(&item) {
        *slot = None;
    } else {
        *slot = Some(item);
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back | Message::Close => Event::Dismissed,
        Message::ToggleProblem(id) => {
            toggle(&mut state.expanded_problem, id);
            Event::None
        }
        Message::ToggleFaq(index) => {
            if index < state.record.faqs.len() {
                toggle(&mut state.expanded_faq, index);
            }
            Event::None
        }
        Message::Inert(_) => Event::None,
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
    let record = ctx.state.record;

    let body = Column::new()
        .spacing(spacing::MD)
        .padding([spacing::MD, spacing::MD + spacing::XXS])
        .push(build_identity(&ctx, record))
        .push(build_health(&ctx, record))
        .push(build_about(&ctx, record))
        .push(build_details(&ctx, record))
        .push(build_problems(&ctx, record))
        .push(build_botanist(&ctx))
        .push(build_faqs(&ctx, record))
        .push(build_fun_facts(&ctx, record))
        .push(Space::new().height(Length::Fixed(spacing::MD)));

    let page = Column::new().push(build_header(&ctx)).push(body);

    let scroll = Scrollable::new(page)
        .direction(Direction::Vertical(Scrollbar::new()))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(scroll)
            .push(build_action_bar(&ctx)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::screen(ctx.colors))
    .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

fn section_title<'a>(ctx: &ViewContext<'a>, key: &str) -> Text<'a> {
    Text::new(ctx.i18n.tr(key))
        .size(typography::TITLE_SM)
        .font(bold())
        .color(ctx.colors.text_primary)
}

fn card<'a>(ctx: &ViewContext<'a>, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card(ctx.colors))
        .into()
}

fn pill_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS - 2.0, spacing::MD])
        .style(styles::button::primary)
        .on_press(message)
        .into()
}

fn link_button<'a>(ctx: &ViewContext<'a>, key: &str, message: Message) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_SM))
        .padding(0)
        .style(styles::button::ghost(ctx.colors.brand_primary))
        .on_press(message)
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let nav = |icon: Text<'static>, message: Message| {
        button(
            Container::new(icons::sized(icon, sizing::ICON_SM + 2.0))
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
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(message)
    };

    let buttons = Row::new()
        .padding([spacing::MD, spacing::MD + spacing::XXS])
        .push(nav(icons::chevron_left(), Message::Back))
        .push(Space::new().width(Length::Fill))
        .push(nav(icons::cross(), Message::Close));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DETAIL_HEADER_HEIGHT))
        .push(
            image(ctx.state.image.handle().clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(buttons)
        .into()
}

fn build_identity<'a>(ctx: &ViewContext<'a>, record: &'static PlantRecord) -> Element<'a, Message> {
    let tags = record
        .care_tags
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tag| {
            row.push(
                Container::new(Text::new(*tag).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::care_tag(ctx.colors)),
            )
        });

    let names = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(record.category)
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .push(
            Text::new(record.scientific_name)
                .size(typography::BODY)
                .font(Font {
                    style: FontStyle::Italic,
                    ..Font::default()
                })
                .color(ctx.colors.text_secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(link_button(
            ctx,
            "detail-not-your-plant",
            Message::Inert(InertAction::NotYourPlant),
        ));

    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(record.common_name)
                .size(typography::TITLE_LG)
                .font(bold())
                .color(ctx.colors.brand_text),
        )
        .push(names)
        .push(tags)
        .into()
}

fn build_health<'a>(ctx: &ViewContext<'a>, record: &'static PlantRecord) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::leaf(), sizing::ICON_LG).color(palette::WARNING_500))
        .push(
            Text::new(record.health_summary)
                .size(typography::BODY_LG)
                .font(bold())
                .color(ctx.colors.text_primary)
                .width(Length::Fill),
        )
        .push(pill_button(
            ctx.i18n.tr("detail-diagnose"),
            Message::Inert(InertAction::Diagnose),
        ));

    card(ctx, content)
}

fn build_about<'a>(ctx: &ViewContext<'a>, record: &'static PlantRecord) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(section_title(ctx, "detail-about"))
        .push(
            Text::new(record.about)
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(link_button(
                    ctx,
                    "detail-read-more",
                    Message::Inert(InertAction::ReadMore),
                ))
                .push(
                    icons::sized(icons::chevron_down(), typography::BODY_SM)
                        .color(ctx.colors.brand_primary),
                ),
        );

    card(ctx, content)
}

fn build_detail_row<'a>(ctx: &ViewContext<'a>, row: &'static DetailRow) -> Element<'a, Message> {
    let mut line = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(icons::sized(icons::detail(row.kind), sizing::ICON_SM + 2.0))
                .width(Length::Fixed(sizing::ICON_MD))
                .align_x(Horizontal::Center),
        )
        .push(
            Column::new()
                .width(Length::Fill)
                .push(
                    Text::new(ctx.i18n.tr(row.label_key))
                        .size(typography::CAPTION)
                        .color(ctx.colors.text_tertiary),
                )
                .push(
                    Text::new(row.value)
                        .size(typography::BODY)
                        .color(ctx.colors.text_primary),
                ),
        );

    if row.kind == DetailKind::Water {
        line = line.push(link_button(
            ctx,
            "detail-calculate",
            Message::Inert(InertAction::Calculate),
        ));
    }

    line.into()
}

fn build_details<'a>(ctx: &ViewContext<'a>, record: &'static PlantRecord) -> Element<'a, Message> {
    let rows = record
        .details
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, row| {
            column.push(build_detail_row(ctx, row))
        });

    card(
        ctx,
        Column::new()
            .spacing(spacing::SM)
            .push(section_title(ctx, "detail-details"))
            .push(rows),
    )
}

/// Accordion header shared by problems and FAQ entries.
fn accordion_header<'a>(
    ctx: &ViewContext<'a>,
    title: &'static str,
    expanded: bool,
    message: Message,
) -> Element<'a, Message> {
    let chevron = if expanded {
        icons::chevron_up()
    } else {
        icons::chevron_down()
    };

    button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Text::new(title)
                    .size(typography::BODY_LG)
                    .font(Font {
                        weight: Weight::Semibold,
                        ..Font::default()
                    })
                    .width(Length::Fill),
            )
            .push(icons::sized(chevron, typography::BODY)),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::MD])
    .style(styles::button::card(
        ctx.colors.surface_secondary,
        ctx.colors.text_primary,
    ))
    .on_press(message)
    .into()
}

fn build_problem<'a>(ctx: &ViewContext<'a>, problem: &'static Problem) -> Element<'a, Message> {
    let expanded = ctx.state.expanded_problem == Some(problem.id);
    let mut entry = Column::new().spacing(spacing::XS).push(accordion_header(
        ctx,
        problem.title,
        expanded,
        Message::ToggleProblem(problem.id),
    ));

    if expanded {
        let paragraph = |key: &str, text: &'static str| {
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::BODY)
                        .font(bold())
                        .color(ctx.colors.text_primary),
                )
                .push(
                    Text::new(text)
                        .size(typography::BODY)
                        .color(ctx.colors.text_secondary),
                )
        };

        entry = entry.push(
            Column::new()
                .spacing(spacing::SM)
                .padding([0.0, spacing::MD])
                .push(paragraph("detail-about", problem.about))
                .push(paragraph("detail-how-to-care", problem.how_to_care)),
        );
    }

    entry.into()
}

fn build_problems<'a>(ctx: &ViewContext<'a>, record: &'static PlantRecord) -> Element<'a, Message> {
    let entries = record
        .problems
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, problem| {
            column.push(build_problem(ctx, problem))
        });

    let prompt = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("detail-problems-hint"))
                .size(typography::BODY_SM)
                .color(ctx.colors.text_secondary)
                .width(Length::Fill),
        )
        .push(pill_button(
            ctx.i18n.tr("detail-diagnose"),
            Message::Inert(InertAction::Diagnose),
        ));

    Column::new()
        .spacing(spacing::SM)
        .push(section_title(ctx, "detail-problems"))
        .push(entries)
        .push(card(ctx, prompt))
        .into()
}

fn build_botanist<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Column::new()
                .width(Length::Fill)
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr("detail-botanist-title"))
                        .size(typography::BODY_LG)
                        .font(bold())
                        .color(ctx.colors.text_primary),
                )
                .push(
                    Text::new(ctx.i18n.tr("detail-botanist-subtitle"))
                        .size(typography::BODY_SM)
                        .color(ctx.colors.text_secondary),
                ),
        )
        .push(pill_button(
            ctx.i18n.tr("detail-start-chat"),
            Message::Inert(InertAction::StartChat),
        ));

    card(ctx, content)
}

fn build_faq<'a>(ctx: &ViewContext<'a>, index: usize, faq: &'static Faq) -> Element<'a, Message> {
    let expanded = ctx.state.expanded_faq == Some(index);
    let mut entry = Column::new().spacing(spacing::XS).push(accordion_header(
        ctx,
        faq.question,
        expanded,
        Message::ToggleFaq(index),
    ));

    if expanded {
        entry = entry.push(
            Container::new(
                Text::new(faq.answer)
                    .size(typography::BODY)
                    .color(ctx.colors.text_secondary),
            )
            .padding([0.0, spacing::MD]),
        );
    }

    entry.into()
}

fn build_faqs<'a>(ctx: &ViewContext<'a>, record: &'static PlantRecord) -> Element<'a, Message> {
    record.faqs.iter().enumerate().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(section_title(ctx, "detail-faq")),
        |column, (index, faq)| column.push(build_faq(ctx, index, faq)),
    )
    .into()
}

fn build_fun_facts<'a>(ctx: &ViewContext<'a>, record: &'static PlantRecord) -> Element<'a, Message> {
    record
        .fun_facts
        .iter()
        .fold(
            Column::new()
                .spacing(spacing::XS)
                .push(section_title(ctx, "detail-fun-facts")),
            |column, fact| {
                column.push(card(
                    ctx,
                    Row::new()
                        .spacing(spacing::SM)
                        .push(icons::sized(icons::sparkles(), sizing::ICON_MD).color(palette::PRIMARY_400))
                        .push(
                            Text::new(*fact)
                                .size(typography::BODY)
                                .color(ctx.colors.text_primary)
                                .width(Length::Fill),
                        ),
                ))
            },
        )
        .into()
}

fn build_action_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let camera = button(
        Container::new(icons::sized(icons::camera(), sizing::ICON_MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::BUTTON_HEIGHT))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(0)
    .style(styles::button::card(palette::PRIMARY_100, palette::PRIMARY_800))
    .on_press(Message::Inert(InertAction::Camera));

    let add = button(
        Container::new(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::sized(icons::leaf(), typography::BODY_LG))
                .push(Text::new(ctx.i18n.tr("detail-add-to-my-plants")).size(typography::BODY_LG)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(0)
    .style(styles::button::primary)
    .on_press(Message::Inert(InertAction::AddToMyPlants));

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(camera)
            .push(add),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::MD + spacing::XXS])
    .style(styles::container::card(ctx.colors))
    .into()
}
