// Native tests for the application reducer, including the stale-response
// guard on oracle request generations.

use hanzi_copybook::app::state::{Action, AppState, ViewTab};
use hanzi_copybook::presets::DifficultyLevel;
use hanzi_copybook::sheet::{CharacterEntry, GridStyle, PracticeMode};

fn loaded(generation: u64, chars: &str) -> Action {
    Action::EntriesLoaded {
        generation,
        entries: chars
            .chars()
            .map(|c| CharacterEntry::new(c, ""))
            .collect(),
    }
}

#[test]
fn defaults_match_first_render() {
    let state = AppState::default();
    assert_eq!(state.input_text, "你好世界");
    assert_eq!(state.active_tab, ViewTab::Print);
    assert_eq!(state.selected_preset, "custom");
    assert_eq!(state.difficulty, DifficultyLevel::Any);
    assert!(state.entries.is_empty());
    assert!(!state.loading);
    assert!(state.settings.show_pinyin_rule_lines);
    assert_eq!(state.settings.practice_mode, PracticeMode::Trace);
    assert_eq!(state.settings.grid_style, GridStyle::MiZi);
}

#[test]
fn stale_entries_are_dropped() {
    let mut state = AppState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    assert!(state.loading);

    // the slow first response loses even though it resolves later
    state.reduce(loaded(first, "天地人"));
    assert!(state.entries.is_empty());
    assert!(state.loading, "older generation must not settle the request");

    state.reduce(loaded(second, "你好"));
    assert_eq!(state.entries.len(), 2);
    assert!(!state.loading);
}

#[test]
fn stale_vocabulary_does_not_overwrite_input() {
    let mut state = AppState::default();
    let first = state.begin_request();
    let _second = state.begin_request();
    state.reduce(Action::VocabularyLoaded {
        generation: first,
        text: "金木水火土".into(),
    });
    assert_eq!(state.input_text, "你好世界");
}

#[test]
fn request_settled_clears_loading_only_when_current() {
    let mut state = AppState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    state.reduce(Action::RequestSettled { generation: first });
    assert!(state.loading);
    state.reduce(Action::RequestSettled { generation: second });
    assert!(!state.loading);
}

#[test]
fn entries_loaded_resets_practice_selection() {
    let mut state = AppState::default();
    let token = state.begin_request();
    state.reduce(loaded(token, "天地人你我他"));
    state.reduce(Action::SelectPracticeChar(4));
    assert_eq!(state.practice_index, 4);

    let token = state.begin_request();
    state.reduce(loaded(token, "山水"));
    assert_eq!(state.practice_index, 0);
}

#[test]
fn practice_selection_ignores_out_of_range() {
    let mut state = AppState::default();
    let token = state.begin_request();
    state.reduce(loaded(token, "山水"));
    state.reduce(Action::SelectPracticeChar(7));
    assert_eq!(state.practice_index, 0);
}

#[test]
fn selecting_custom_preset_clears_input() {
    let mut state = AppState::default();
    state.reduce(Action::SelectPreset("nature".into()));
    assert_eq!(state.selected_preset, "nature");
    assert_eq!(state.input_text, "你好世界");

    state.reduce(Action::SelectPreset("custom".into()));
    assert_eq!(state.selected_preset, "custom");
    assert!(state.input_text.is_empty());
}

#[test]
fn unit_toggle_flips_membership() {
    let mut state = AppState::default();
    state.reduce(Action::ToggleUnit("ren_jiao_1_1".into()));
    state.reduce(Action::ToggleUnit("ren_jiao_1_2".into()));
    assert_eq!(state.selected_units.len(), 2);
    state.reduce(Action::ToggleUnit("ren_jiao_1_1".into()));
    assert_eq!(state.selected_units.len(), 1);
    assert!(state.selected_units.contains("ren_jiao_1_2"));
}

#[test]
fn settings_actions_update_in_place() {
    let mut state = AppState::default();
    state.reduce(Action::SetGridStyle(GridStyle::Square));
    state.reduce(Action::SetGridColor("#3b82f6".into()));
    state.reduce(Action::SetPracticeMode(PracticeMode::Fill));
    state.reduce(Action::SetTitle("寒假练字".into()));
    state.reduce(Action::TogglePinyinRuleLines);
    assert_eq!(state.settings.grid_style, GridStyle::Square);
    assert_eq!(state.settings.grid_color, "#3b82f6");
    assert_eq!(state.settings.practice_mode, PracticeMode::Fill);
    assert_eq!(state.settings.title, "寒假练字");
    assert!(!state.settings.show_pinyin_rule_lines);
}

#[test]
fn state_round_trips_through_serde() {
    let mut state = AppState::default();
    let token = state.begin_request();
    state.reduce(loaded(token, "你好"));
    state.reduce(Action::SetActiveTab(ViewTab::Practice));
    let json = serde_json::to_string(&state).expect("serialize");
    let restored: AppState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);
}
