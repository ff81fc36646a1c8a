//! Static content catalog: textbook/fun presets and the difficulty filter
//! applied to vocabulary-suggestion prompts.

use serde::{Deserialize, Serialize};

/// Rough grouping used to build the preset dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetCategory {
    Textbook,
    Structure,
    Fun,
}

/// A canned vocabulary source. `prompt_context` is the English context sent to
/// the suggestion oracle; the empty context marks the free-input preset.
pub struct ContentPreset {
    pub id: &'static str,
    pub display_name: &'static str,
    pub prompt_context: &'static str,
    pub category: PresetCategory,
}

/// Preset id for free text input.
pub const CUSTOM_PRESET_ID: &str = "custom";

/// Pseudo preset id for the "combine several textbook units" mode. Not part of
/// [`PRESETS`]; it only exists as a dropdown entry.
pub const MULTI_TEXTBOOK_ID: &str = "multi_textbook";

pub const PRESETS: &[ContentPreset] = &[
    ContentPreset {
        id: CUSTOM_PRESET_ID,
        display_name: "自定义输入",
        prompt_context: "",
        category: PresetCategory::Fun,
    },
    ContentPreset {
        id: "ren_jiao_1_1",
        display_name: "人教版一年级上册 (第一单元)",
        prompt_context: "Create a list of characters from the People's Education Press (RenJiao) Grade 1 Book 1, Unit 1.",
        category: PresetCategory::Textbook,
    },
    ContentPreset {
        id: "ren_jiao_1_2",
        display_name: "人教版一年级上册 (第二单元)",
        prompt_context: "Create a list of characters from the People's Education Press (RenJiao) Grade 1 Book 1, Unit 2.",
        category: PresetCategory::Textbook,
    },
    ContentPreset {
        id: "ren_jiao_1_3",
        display_name: "人教版一年级上册 (第三单元)",
        prompt_context: "Create a list of characters from the People's Education Press (RenJiao) Grade 1 Book 1, Unit 3.",
        category: PresetCategory::Textbook,
    },
    ContentPreset {
        id: "ren_jiao_1_4",
        display_name: "人教版一年级上册 (第四单元)",
        prompt_context: "Create a list of characters from the People's Education Press (RenJiao) Grade 1 Book 1, Unit 4.",
        category: PresetCategory::Textbook,
    },
    ContentPreset {
        id: "radicals_basic",
        display_name: "基础偏旁部首",
        prompt_context: "List common Chinese radicals (Bu Shou) suitable for beginners.",
        category: PresetCategory::Structure,
    },
    ContentPreset {
        id: "measure_words",
        display_name: "常用量词 (Common Measure Words)",
        prompt_context: "List common Chinese measure words suitable for Grade 1 students.",
        category: PresetCategory::Structure,
    },
    ContentPreset {
        id: "nature",
        display_name: "大自然 (日月水火)",
        prompt_context: "List simple characters related to nature, elements, and weather.",
        category: PresetCategory::Fun,
    },
    ContentPreset {
        id: "animals",
        display_name: "可爱动物",
        prompt_context: "List simple characters for animals.",
        category: PresetCategory::Fun,
    },
];

pub fn preset_by_id(id: &str) -> Option<&'static ContentPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Stroke-count filter appended to suggestion prompts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    #[default]
    Any,
    Simple,
    Medium,
    Complex,
    StrokeFocus,
}

impl DifficultyLevel {
    /// Dropdown value, also accepted by [`DifficultyLevel::from_id`].
    pub fn id(self) -> &'static str {
        match self {
            DifficultyLevel::Any => "any",
            DifficultyLevel::Simple => "simple",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Complex => "complex",
            DifficultyLevel::StrokeFocus => "stroke_focus",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "any" => Some(DifficultyLevel::Any),
            "simple" => Some(DifficultyLevel::Simple),
            "medium" => Some(DifficultyLevel::Medium),
            "complex" => Some(DifficultyLevel::Complex),
            "stroke_focus" => Some(DifficultyLevel::StrokeFocus),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Any => "混合难度 (默认)",
            DifficultyLevel::Simple => "简单 (5画以内)",
            DifficultyLevel::Medium => "进阶 (5-8画)",
            DifficultyLevel::Complex => "挑战 (9画以上)",
            DifficultyLevel::StrokeFocus => "专项: 撇捺练习",
        }
    }

    /// Natural-language constraint spliced into the suggestion prompt.
    pub fn prompt_constraint(self) -> &'static str {
        match self {
            DifficultyLevel::Simple => "Strictly limit to characters with 5 strokes or fewer.",
            DifficultyLevel::Medium => "Select characters with 5 to 9 strokes.",
            DifficultyLevel::Complex => "Select characters with 9 or more strokes.",
            DifficultyLevel::StrokeFocus => {
                "Select characters that strongly feature 'Pie' (撇) and 'Na' (捺) strokes."
            }
            DifficultyLevel::Any => "Mix simple and slightly challenging characters.",
        }
    }
}
