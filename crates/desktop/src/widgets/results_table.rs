use std::collections::HashSet;

use iced::border::Border;
use iced::widget::{column, container, row, text, Column, Space};
use iced::{Color, Element, Length, Theme};

use facelog_core::presentation::results_table::{EmptyState, ResultsTable, TableRow};

use crate::app::{scaled, Message};
use crate::theme::{border_color, muted_color, surface_alt_color, surface_color, tertiary_color};
use crate::widgets::toggle_button::toggle_button;

const CORNER_RADIUS: f32 = 8.0;
const AVATAR_SIZE: f32 = 24.0;
const NAME_COLUMN_PORTION: u16 = 1;
const TIMESTAMP_COLUMN_PORTION: u16 = 1;

pub fn view<'a>(
    table: &ResultsTable,
    fs: f32,
    theme: &Theme,
    hovered: &HashSet<String>,
) -> Element<'a, Message> {
    let border = border_color(theme);
    let surface = surface_color(theme);

    let mut body = Column::new()
        .push(header(table, fs, theme))
        .push(heading_row(table, fs, theme));

    for table_row in &table.rows {
        body = body.push(divider(border));
        body = body.push(body_row(
            table_row,
            fs,
            theme,
            hovered.contains(&table_row.label),
        ));
    }

    if let Some(empty) = &table.empty_state {
        body = body.push(divider(border));
        body = body.push(empty_state(empty, fs, theme));
    }

    container(body)
        .width(Length::Fill)
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(surface.into()),
            border: Border {
                color: border,
                width: 1.0,
                radius: CORNER_RADIUS.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn header<'a>(table: &ResultsTable, fs: f32, theme: &Theme) -> Element<'a, Message> {
    let success = theme.palette().success;
    let muted = muted_color(theme);
    let alt = surface_alt_color(theme);

    let title = row![
        text("\u{2714}").size(scaled(14.0, fs)).color(success),
        text(table.title)
            .size(scaled(15.0, fs))
            .font(iced::Font {
                weight: iced::font::Weight::Medium,
                ..iced::Font::DEFAULT
            }),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    container(column![
        title,
        Space::new().height(4),
        text(table.summary.clone())
            .size(scaled(12.0, fs))
            .color(muted),
    ])
    .padding([12, 16])
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(alt.into()),
        ..container::Style::default()
    })
    .into()
}

fn heading_row<'a>(table: &ResultsTable, fs: f32, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let [name, timestamp] = table.headings;

    let heading = |icon: &'static str, label: &'static str| {
        row![
            text(icon).size(scaled(11.0, fs)).color(muted),
            text(label.to_uppercase())
                .size(scaled(11.0, fs))
                .color(muted)
                .font(iced::Font {
                    weight: iced::font::Weight::Medium,
                    ..iced::Font::DEFAULT
                }),
        ]
        .spacing(4)
        .align_y(iced::Alignment::Center)
    };

    container(row![
        heading("\u{1F464}", name).width(Length::FillPortion(NAME_COLUMN_PORTION)),
        heading("\u{23F1}", timestamp).width(Length::FillPortion(TIMESTAMP_COLUMN_PORTION)),
    ])
    .padding([8, 16])
    .width(Length::Fill)
    .into()
}

fn body_row<'a>(
    table_row: &TableRow,
    fs: f32,
    theme: &Theme,
    hovered: bool,
) -> Element<'a, Message> {
    let primary = theme.palette().primary;
    let muted = muted_color(theme);
    let tertiary = tertiary_color(theme);
    let hover_bg = surface_alt_color(theme);

    let avatar = container(
        text("\u{1F464}")
            .size(scaled(11.0, fs))
            .color(Color::WHITE),
    )
    .width(AVATAR_SIZE)
    .height(AVATAR_SIZE)
    .center_x(AVATAR_SIZE)
    .center_y(AVATAR_SIZE)
    .style(move |_theme: &Theme| container::Style {
        background: Some(primary.into()),
        border: Border {
            radius: (AVATAR_SIZE / 2.0).into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    let name_cell = row![
        avatar,
        column![
            text(table_row.label.clone())
                .size(scaled(14.0, fs))
                .font(iced::Font {
                    weight: iced::font::Weight::Medium,
                    ..iced::Font::DEFAULT
                }),
            text(table_row.status).size(scaled(12.0, fs)).color(muted),
        ],
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .width(Length::FillPortion(NAME_COLUMN_PORTION));

    let label = table_row.label.clone();
    let hover_label = table_row.label.clone();
    let mut timestamp_cell = Column::new().push(toggle_button(
        table_row.toggle_caption,
        scaled(12.0, fs),
        Message::ToggleExpand(label),
        hovered,
        move |h| Message::ToggleHover(hover_label.clone(), h),
    ));

    if table_row.expanded {
        let list = table_row.timestamps.iter().fold(
            Column::new().spacing(2).padding(iced::Padding {
                left: 24.0,
                top: 6.0,
                ..iced::Padding::ZERO
            }),
            |list, ts| list.push(text(ts.clone()).size(scaled(12.0, fs)).color(tertiary)),
        );
        timestamp_cell = timestamp_cell.push(list);
    }

    container(
        row![
            name_cell,
            timestamp_cell.width(Length::FillPortion(TIMESTAMP_COLUMN_PORTION)),
        ]
        .align_y(iced::Alignment::Start),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: hovered.then(|| hover_bg.into()),
        ..container::Style::default()
    })
    .into()
}

fn empty_state<'a>(empty: &EmptyState, fs: f32, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    container(
        column![
            text("\u{1F464}").size(scaled(28.0, fs)).color(tertiary),
            Space::new().height(8),
            text(empty.title).size(scaled(14.0, fs)).font(iced::Font {
                weight: iced::font::Weight::Medium,
                ..iced::Font::DEFAULT
            }),
            Space::new().height(4),
            text(empty.message).size(scaled(12.0, fs)).color(tertiary),
        ]
        .align_x(iced::Alignment::Center),
    )
    .padding([24, 16])
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn divider<'a>(color: Color) -> Element<'a, Message> {
    container(Space::new().height(1))
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(color.into()),
            ..container::Style::default()
        })
        .into()
}
