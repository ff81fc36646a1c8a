//! Worksheet layout logic: character entries, sheet settings, pagination and
//! per-cell visibility. Everything in this module is pure and native-testable;
//! DOM output lives in the `render` submodule.

use serde::{Deserialize, Serialize};

pub mod render;

/// Columns per practice row. The first column is the worked example (header).
pub const COLUMNS: usize = 8;

/// Rows per printed A4 page. Sized for an 80px box plus the pinyin four-line
/// grid above it (row ≈ 136px ≈ 36mm against ~232mm of usable page height).
pub const ROWS_PER_PAGE: usize = 6;

/// Opacity used for traceable (描红) glyphs and their pinyin.
pub const TRACE_OPACITY: f64 = 0.3;

/// In fill (渐隐) mode, how many non-header columns keep the trace guide
/// before the row fades to empty boxes.
pub const FILL_TRACE_COLUMNS: usize = 3;

/// One character row on the sheet: the glyph plus its pinyin annotation.
/// Pinyin may be empty when the annotation oracle was unreachable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub character: char,
    pub pinyin: String,
}

impl CharacterEntry {
    pub fn new(character: char, pinyin: impl Into<String>) -> Self {
        Self {
            character,
            pinyin: pinyin.into(),
        }
    }
}

/// Practice grid line work: 米字格, 田字格 or plain box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridStyle {
    MiZi,
    TianZi,
    Square,
}

/// How much scaffolding each practice cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PracticeMode {
    /// 描红: light glyph to trace over.
    Trace,
    /// 临摹: empty box, copy from the header.
    Copy,
    /// 渐隐: first columns trace, the rest empty.
    Fill,
}

/// User-tunable sheet appearance. Lives only in memory; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSettings {
    pub grid_style: GridStyle,
    pub grid_color: String,
    pub glyph_color: String,
    pub title: String,
    pub practice_mode: PracticeMode,
    pub show_pinyin_rule_lines: bool,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            grid_style: GridStyle::MiZi,
            grid_color: "#ef4444".into(),
            glyph_color: "#1f2937".into(),
            title: "一年级语文生字练习".into(),
            practice_mode: PracticeMode::Trace,
            show_pinyin_rule_lines: true,
        }
    }
}

/// Keep only CJK Unified Ideographs (U+4E00..=U+9FA5); everything else in the
/// user's input (latin, digits, punctuation, whitespace) is dropped before the
/// text reaches the annotation oracle.
pub fn extract_hanzi(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| ('\u{4e00}'..='\u{9fa5}').contains(c))
        .collect()
}

/// Split `entries` into consecutive pages of `rows_per_page` rows, the last
/// page holding the remainder. An empty entry list yields a single empty page
/// so the UI can render its placeholder.
///
/// Pure view over the input: order preserved, nothing dropped or duplicated.
/// `rows_per_page` must be positive.
pub fn paginate(entries: &[CharacterEntry], rows_per_page: usize) -> Vec<&[CharacterEntry]> {
    assert!(rows_per_page > 0, "rows_per_page must be positive");
    if entries.is_empty() {
        return vec![&entries[..0]];
    }
    entries.chunks(rows_per_page).collect()
}

/// What a single practice cell shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVisibility {
    pub show_glyph: bool,
    pub glyph_opacity: f64,
    pub show_pinyin: bool,
    pub pinyin_opacity: f64,
}

impl CellVisibility {
    const FULL: Self = Self {
        show_glyph: true,
        glyph_opacity: 1.0,
        show_pinyin: true,
        pinyin_opacity: 1.0,
    };

    const EMPTY: Self = Self {
        show_glyph: false,
        glyph_opacity: 1.0,
        show_pinyin: false,
        pinyin_opacity: 1.0,
    };
}

/// Visibility of glyph and pinyin for one cell.
///
/// The header column is the worked example and is always fully visible.
/// `column_index` counts non-header cells from 0 and only matters in fill
/// mode, where the first [`FILL_TRACE_COLUMNS`] cells keep the trace guide.
/// Pinyin in trace cells appears only when the four-line pinyin grid is on;
/// without the rule lines the practice columns stay clean.
pub fn cell_visibility(
    mode: PracticeMode,
    is_header: bool,
    column_index: usize,
    show_pinyin_rule_lines: bool,
) -> CellVisibility {
    if is_header {
        return CellVisibility::FULL;
    }
    let effective = match mode {
        PracticeMode::Fill if column_index < FILL_TRACE_COLUMNS => PracticeMode::Trace,
        PracticeMode::Fill => PracticeMode::Copy,
        other => other,
    };
    match effective {
        PracticeMode::Trace => CellVisibility {
            show_glyph: true,
            glyph_opacity: TRACE_OPACITY,
            show_pinyin: show_pinyin_rule_lines,
            pinyin_opacity: TRACE_OPACITY,
        },
        PracticeMode::Copy => CellVisibility::EMPTY,
        PracticeMode::Fill => unreachable!("fill resolved above"),
    }
}
