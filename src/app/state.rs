//! Explicit application state plus the pure reducer that advances it. The
//! controller owns one `AppState` and routes every UI event through
//! [`AppState::reduce`], which keeps the whole surface testable without a DOM.
//!
//! Oracle responses carry the generation token handed out by
//! [`AppState::begin_request`]; responses from a superseded generation are
//! dropped, so the most recently *issued* request always wins over a slow
//! straggler.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::presets::{CUSTOM_PRESET_ID, DifficultyLevel};
use crate::sheet::{CharacterEntry, GridStyle, PracticeMode, SheetSettings};

/// Which main view is shown: the printable sheet or interactive practice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewTab {
    #[default]
    Print,
    Practice,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub input_text: String,
    pub entries: Vec<CharacterEntry>,
    pub loading: bool,
    pub active_tab: ViewTab,
    pub selected_preset: String,
    pub difficulty: DifficultyLevel,
    /// Textbook unit ids ticked in the multi-unit merge panel.
    pub selected_units: BTreeSet<String>,
    pub settings: SheetSettings,
    /// Index into `entries` for the practice view.
    pub practice_index: usize,
    /// Monotonic token for in-flight oracle requests.
    pub generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input_text: "你好世界".into(),
            entries: Vec::new(),
            loading: false,
            active_tab: ViewTab::Print,
            selected_preset: CUSTOM_PRESET_ID.into(),
            difficulty: DifficultyLevel::Any,
            selected_units: BTreeSet::new(),
            settings: SheetSettings::default(),
            practice_index: 0,
            generation: 0,
        }
    }
}

/// Every state transition the UI can trigger.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetInputText(String),
    SetActiveTab(ViewTab),
    SelectPreset(String),
    SetDifficulty(DifficultyLevel),
    ToggleUnit(String),
    SetGridStyle(GridStyle),
    SetGridColor(String),
    SetPracticeMode(PracticeMode),
    SetTitle(String),
    TogglePinyinRuleLines,
    SelectPracticeChar(usize),
    /// Suggested vocabulary arrived; becomes the new input text if current.
    VocabularyLoaded { generation: u64, text: String },
    /// Annotated entries arrived; replaces the sheet content if current.
    EntriesLoaded {
        generation: u64,
        entries: Vec<CharacterEntry>,
    },
    /// The request chain for `generation` ended without a final result.
    RequestSettled { generation: u64 },
}

impl AppState {
    /// Mark a new oracle request chain as started and return its token.
    /// Any response still in flight for an older token becomes stale.
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::SetInputText(text) => self.input_text = text,
            Action::SetActiveTab(tab) => self.active_tab = tab,
            Action::SelectPreset(id) => {
                if id == CUSTOM_PRESET_ID {
                    self.input_text.clear();
                }
                self.selected_preset = id;
            }
            Action::SetDifficulty(level) => self.difficulty = level,
            Action::ToggleUnit(id) => {
                if !self.selected_units.remove(&id) {
                    self.selected_units.insert(id);
                }
            }
            Action::SetGridStyle(style) => self.settings.grid_style = style,
            Action::SetGridColor(color) => self.settings.grid_color = color,
            Action::SetPracticeMode(mode) => self.settings.practice_mode = mode,
            Action::SetTitle(title) => self.settings.title = title,
            Action::TogglePinyinRuleLines => {
                self.settings.show_pinyin_rule_lines = !self.settings.show_pinyin_rule_lines;
            }
            Action::SelectPracticeChar(index) => {
                if index < self.entries.len() {
                    self.practice_index = index;
                }
            }
            Action::VocabularyLoaded { generation, text } => {
                if self.is_current(generation) {
                    self.input_text = text;
                }
            }
            Action::EntriesLoaded {
                generation,
                entries,
            } => {
                if self.is_current(generation) {
                    self.entries = entries;
                    self.practice_index = 0;
                    self.loading = false;
                }
            }
            Action::RequestSettled { generation } => {
                if self.is_current(generation) {
                    self.loading = false;
                }
            }
        }
    }
}
