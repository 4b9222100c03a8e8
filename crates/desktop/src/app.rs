use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use facelog_core::presentation::results_table::ResultsTable;
use facelog_core::recognition::domain::expansion_state::ExpansionState;
use facelog_core::recognition::domain::recognition_result::RecognitionResult;
use facelog_core::recognition::domain::result_reader::ResultReader;
use facelog_core::recognition::infrastructure::json_result_reader::JsonResultReader;
use facelog_core::shared::constants::RESULT_EXTENSIONS;

use crate::settings::{Appearance, Settings};
use crate::tabs;
use crate::theme;

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Results,
    Appearance,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Results, Tab::Appearance];

    fn label(self) -> &'static str {
        match self {
            Tab::Results => "Results",
            Tab::Appearance => "Appearance",
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SelectResults,
    ResultsSelected(Option<PathBuf>),
    ResultsLoaded(PathBuf, Result<RecognitionResult, String>),
    ClearResults,
    ToggleExpand(String),
    ToggleHover(String, bool),
    AppearanceChanged(Appearance),
    HighContrastChanged(bool),
    FontScaleChanged(f32),
    RestoreDefaults,
    PollSystemTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Error(String),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    pub source_path: Option<PathBuf>,
    pub result: Option<RecognitionResult>,
    /// False after "Clear"; the loaded result is kept but not displayed.
    pub visible: bool,
    pub expansion: ExpansionState,
    pub load_state: LoadState,
    hovered: HashSet<String>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (Self::with_settings(Settings::load()), Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            active_tab: Tab::Results,
            settings,
            source_path: None,
            result: None,
            visible: false,
            expansion: ExpansionState::new(),
            load_state: LoadState::Idle,
            hovered: HashSet::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::SelectResults => {
                let start_dir = self.settings.last_directory.clone();
                return Task::perform(
                    async move {
                        let mut dialog = rfd::AsyncFileDialog::new()
                            .set_title("Open recognition results")
                            .add_filter("Recognition Results", RESULT_EXTENSIONS);
                        if let Some(dir) = start_dir {
                            dialog = dialog.set_directory(dir);
                        }
                        dialog.pick_file().await.map(|h| h.path().to_path_buf())
                    },
                    Message::ResultsSelected,
                );
            }
            Message::ResultsSelected(Some(path)) => {
                self.settings.last_directory = path.parent().map(|d| d.to_path_buf());
                self.settings.save();
                self.source_path = Some(path.clone());
                self.load_state = LoadState::Loading;
                return Task::perform(
                    async move {
                        let loaded = JsonResultReader::new()
                            .read(&path)
                            .map_err(|e| e.to_string());
                        (path, loaded)
                    },
                    |(path, loaded)| Message::ResultsLoaded(path, loaded),
                );
            }
            Message::ResultsSelected(None) => {}
            Message::ResultsLoaded(path, _) if self.source_path.as_ref() != Some(&path) => {
                log::debug!("Discarding stale results from {}", path.display());
            }
            Message::ResultsLoaded(_, Ok(result)) => {
                self.show_result(result);
            }
            Message::ResultsLoaded(path, Err(e)) => {
                log::warn!("Failed to load results from {}: {e}", path.display());
                self.load_state = LoadState::Error(e);
            }
            Message::ClearResults => {
                self.visible = false;
                self.hovered.clear();
                self.load_state = LoadState::Idle;
            }
            Message::ToggleExpand(label) => {
                self.expansion.toggle(&label);
            }
            Message::ToggleHover(label, true) => {
                self.hovered.insert(label);
            }
            Message::ToggleHover(label, false) => {
                self.hovered.remove(&label);
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::HighContrastChanged(enabled) => {
                self.settings.high_contrast = enabled;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::RestoreDefaults => {
                let defaults = Settings::default();
                self.settings.appearance = defaults.appearance;
                self.settings.high_contrast = defaults.high_contrast;
                self.settings.font_scale = defaults.font_scale;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    /// A newly displayed result set always starts fully collapsed.
    fn show_result(&mut self, result: RecognitionResult) {
        self.result = Some(result);
        self.visible = true;
        self.expansion.reset();
        self.hovered.clear();
        self.load_state = LoadState::Idle;
    }

    pub fn table(&self) -> Option<ResultsTable> {
        ResultsTable::build(self.result.as_ref(), self.visible, &self.expansion)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;
        let theme = self.theme();

        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let content: Element<'_, Message> = match self.active_tab {
            Tab::Results => {
                let table = self.table();
                tabs::results_tab::view(
                    fs,
                    self.source_path.as_deref(),
                    &self.load_state,
                    table.as_ref(),
                    &self.hovered,
                    &theme,
                )
            }
            Tab::Appearance => tabs::appearance_tab::view(&self.settings),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance, self.settings.high_contrast)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.settings.appearance == Appearance::System {
            iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme)
        } else {
            Subscription::none()
        }
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
