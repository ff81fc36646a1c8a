// Integration tests for the static content catalog and prompt shaping.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use hanzi_copybook::ai::{
    FALLBACK_VOCABULARY, FALLBACK_VOCABULARY_EXTENDED, feedback_prompt, merged_units_context,
    pinyin_prompt, suggestion_prompt,
};
use hanzi_copybook::practice::FeedbackRequest;
use hanzi_copybook::presets::{
    CUSTOM_PRESET_ID, DifficultyLevel, MULTI_TEXTBOOK_ID, PRESETS, PresetCategory, preset_by_id,
};
use hanzi_copybook::sheet::extract_hanzi;

#[test]
fn preset_ids_are_unique_and_named() {
    let mut seen = HashSet::new();
    for preset in PRESETS {
        assert!(seen.insert(preset.id), "duplicate preset id '{}'", preset.id);
        assert!(!preset.display_name.is_empty(), "preset '{}' has no name", preset.id);
    }
    // the multi-unit pseudo entry is a dropdown-only id, never a catalog entry
    assert!(preset_by_id(MULTI_TEXTBOOK_ID).is_none());
}

#[test]
fn only_the_custom_preset_lacks_a_prompt_context() {
    for preset in PRESETS {
        if preset.id == CUSTOM_PRESET_ID {
            assert!(preset.prompt_context.is_empty());
        } else {
            assert!(
                !preset.prompt_context.is_empty(),
                "preset '{}' needs a prompt context",
                preset.id
            );
        }
    }
}

#[test]
fn textbook_units_exist_for_the_merge_panel() {
    let units: Vec<_> = PRESETS
        .iter()
        .filter(|p| p.category == PresetCategory::Textbook)
        .collect();
    assert!(units.len() >= 4, "expected the four RenJiao units");
}

#[test]
fn difficulty_ids_round_trip() {
    for level in [
        DifficultyLevel::Any,
        DifficultyLevel::Simple,
        DifficultyLevel::Medium,
        DifficultyLevel::Complex,
        DifficultyLevel::StrokeFocus,
    ] {
        assert_eq!(DifficultyLevel::from_id(level.id()), Some(level));
        assert!(!level.label().is_empty());
        assert!(!level.prompt_constraint().is_empty());
    }
    assert_eq!(DifficultyLevel::from_id("nope"), None);
}

#[test]
fn difficulty_constraints_are_distinct() {
    let constraints: HashSet<&str> = [
        DifficultyLevel::Any,
        DifficultyLevel::Simple,
        DifficultyLevel::Medium,
        DifficultyLevel::Complex,
        DifficultyLevel::StrokeFocus,
    ]
    .into_iter()
    .map(|l| l.prompt_constraint())
    .collect();
    assert_eq!(constraints.len(), 5);
}

#[test]
fn fallback_vocabulary_is_pure_hanzi() {
    for fallback in [FALLBACK_VOCABULARY, FALLBACK_VOCABULARY_EXTENDED] {
        let hanzi = extract_hanzi(fallback);
        assert_eq!(hanzi.len(), fallback.chars().count(), "fallback '{fallback}' must be all hanzi");
    }
    // the request-failure fallback extends the empty-payload one
    assert!(FALLBACK_VOCABULARY_EXTENDED.starts_with(FALLBACK_VOCABULARY));
}

#[test]
fn suggestion_prompt_splices_context_and_constraint() {
    let prompt = suggestion_prompt("List simple characters for animals.", DifficultyLevel::Simple);
    assert!(prompt.contains("List simple characters for animals."));
    assert!(prompt.contains("5 strokes or fewer"));
    assert!(prompt.contains("Grade 1"));

    // an empty context falls back to the generic request
    let prompt = suggestion_prompt("", DifficultyLevel::Any);
    assert!(prompt.contains("10-15 distinct, common Chinese characters"));
}

#[test]
fn merged_context_names_every_unit() {
    let units: Vec<_> = PRESETS
        .iter()
        .filter(|p| p.category == PresetCategory::Textbook)
        .take(2)
        .collect();
    let context = merged_units_context(&units);
    for unit in &units {
        assert!(context.contains(unit.display_name));
        assert!(context.contains(unit.prompt_context));
    }
    assert!(context.contains("20-30 characters"));
    assert!(context.contains("duplicates are removed"));
}

#[test]
fn pinyin_prompt_embeds_the_cleaned_text() {
    let prompt = pinyin_prompt("你好");
    assert!(prompt.contains("\"你好\""));
    assert!(prompt.contains("tone marks"));
}

#[test]
fn feedback_prompt_reports_one_based_stroke_indices() {
    let prompt = feedback_prompt(&FeedbackRequest {
        character: '好',
        total_mistakes: 3,
        missed_strokes: vec![0, 4],
    });
    assert!(prompt.contains("\"好\""));
    assert!(prompt.contains("Total Mistakes: 3"));
    assert!(prompt.contains("[1, 5]"));
}
