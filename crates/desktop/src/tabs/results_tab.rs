use std::collections::HashSet;
use std::path::Path;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length, Theme};

use facelog_core::presentation::results_table::ResultsTable;

use crate::app::{scaled, LoadState, Message};
use crate::theme::tertiary_color;
use crate::widgets::results_table;

pub fn view<'a>(
    fs: f32,
    source_path: Option<&Path>,
    load_state: &LoadState,
    table: Option<&ResultsTable>,
    hovered: &HashSet<String>,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let body: Element<'a, Message> = match (load_state, table) {
        (LoadState::Loading, _) => centered(
            text("Loading results\u{2026}")
                .size(scaled(14.0, fs))
                .color(tertiary)
                .into(),
        ),
        (LoadState::Error(e), _) => error_state(fs, tertiary, e),
        (LoadState::Idle, Some(table)) => results_table::view(table, fs, theme, hovered),
        (LoadState::Idle, None) => prompt(fs, tertiary),
    };

    let clearable = clear_enabled(load_state, table.is_some());
    column![toolbar(fs, source_path, clearable, tertiary), Space::new().height(16), body]
        .width(Length::Fill)
        .into()
}

/// Clear dismisses either a displayed table or a load error.
fn clear_enabled(load_state: &LoadState, showing_table: bool) -> bool {
    match load_state {
        LoadState::Loading => false,
        LoadState::Error(_) => true,
        LoadState::Idle => showing_table,
    }
}

fn toolbar<'a>(
    fs: f32,
    source_path: Option<&Path>,
    clearable: bool,
    tertiary: iced::Color,
) -> Element<'a, Message> {
    let file_label = source_path
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "No results file".to_string());

    let clear = button(text("Clear").size(scaled(13.0, fs))).style(button::secondary);
    let clear = if clearable {
        clear.on_press(Message::ClearResults)
    } else {
        clear
    };

    row![
        text(file_label).size(scaled(13.0, fs)).color(tertiary),
        Space::new().width(Length::Fill),
        clear,
        button(text("Open Results\u{2026}").size(scaled(13.0, fs)))
            .on_press(Message::SelectResults)
            .padding([6, 14]),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .into()
}

fn prompt<'a>(fs: f32, tertiary: iced::Color) -> Element<'a, Message> {
    centered(
        column![
            text("No results loaded").size(scaled(17.0, fs)),
            Space::new().height(6),
            text("Open a recognition results file (.json) to see who was found and when.")
                .size(scaled(13.0, fs))
                .color(tertiary),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    )
}

fn error_state<'a>(fs: f32, tertiary: iced::Color, error: &str) -> Element<'a, Message> {
    centered(
        column![
            text("Could not load results").size(scaled(18.0, fs)),
            Space::new().height(8),
            text(error.to_owned())
                .size(scaled(13.0, fs))
                .color(tertiary),
            Space::new().height(20),
            button(text("Choose Another File").size(scaled(14.0, fs)))
                .on_press(Message::SelectResults)
                .padding([10, 20]),
        ]
        .align_x(iced::Alignment::Center)
        .width(320)
        .into(),
    )
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([40, 0])
        .into()
}
