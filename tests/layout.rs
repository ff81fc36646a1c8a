// Native tests for worksheet layout logic: hanzi extraction, pagination and
// per-cell visibility. These avoid wasm/browser APIs and run on the host.

use hanzi_copybook::sheet::{
    CharacterEntry, COLUMNS, FILL_TRACE_COLUMNS, PracticeMode, ROWS_PER_PAGE, TRACE_OPACITY,
    cell_visibility, extract_hanzi, paginate,
};

fn entries(chars: &str) -> Vec<CharacterEntry> {
    chars
        .chars()
        .map(|c| CharacterEntry::new(c, format!("py-{c}")))
        .collect()
}

#[test]
fn extract_keeps_only_cjk() {
    assert_eq!(extract_hanzi("你好世界"), vec!['你', '好', '世', '界']);
    assert_eq!(extract_hanzi("a你1好!世 界\n"), vec!['你', '好', '世', '界']);
    assert!(extract_hanzi("hello 123 !").is_empty());
    assert!(extract_hanzi("").is_empty());
}

#[test]
fn paginate_empty_yields_single_empty_page() {
    let empty: Vec<CharacterEntry> = Vec::new();
    let pages = paginate(&empty, ROWS_PER_PAGE);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_empty());
}

#[test]
fn paginate_chunks_and_reconstructs() {
    for count in 1..=20 {
        let pool: String = "天地人你我他金木水火土日月山川".chars().cycle().take(count).collect();
        let data = entries(&pool);
        for rows in 1..=8 {
            let pages = paginate(&data, rows);
            assert_eq!(
                pages.len(),
                count.div_ceil(rows),
                "page count for {count} entries at {rows} rows/page"
            );
            // every page except possibly the last is exactly full
            for page in &pages[..pages.len() - 1] {
                assert_eq!(page.len(), rows);
            }
            assert!(!pages[pages.len() - 1].is_empty());
            assert!(pages[pages.len() - 1].len() <= rows);
            // concatenation reconstructs the input in order
            let flat: Vec<CharacterEntry> = pages.iter().flat_map(|p| p.iter().cloned()).collect();
            assert_eq!(flat, data);
        }
    }
}

#[test]
#[should_panic(expected = "rows_per_page")]
fn paginate_rejects_zero_rows() {
    let data = entries("你好");
    let _ = paginate(&data, 0);
}

#[test]
fn header_cell_is_fully_visible_in_every_mode() {
    for mode in [PracticeMode::Trace, PracticeMode::Copy, PracticeMode::Fill] {
        for rule_lines in [false, true] {
            let vis = cell_visibility(mode, true, 0, rule_lines);
            assert!(vis.show_glyph);
            assert_eq!(vis.glyph_opacity, 1.0);
            assert!(vis.show_pinyin);
            assert_eq!(vis.pinyin_opacity, 1.0);
        }
    }
}

#[test]
fn trace_cells_show_light_glyph() {
    let vis = cell_visibility(PracticeMode::Trace, false, 0, true);
    assert!(vis.show_glyph);
    assert_eq!(vis.glyph_opacity, TRACE_OPACITY);
    assert!(vis.show_pinyin);
    assert_eq!(vis.pinyin_opacity, TRACE_OPACITY);

    // without the pinyin rule lines the practice pinyin disappears
    let vis = cell_visibility(PracticeMode::Trace, false, 0, false);
    assert!(vis.show_glyph);
    assert!(!vis.show_pinyin);
}

#[test]
fn copy_cells_are_empty() {
    for col in 0..COLUMNS {
        for rule_lines in [false, true] {
            let vis = cell_visibility(PracticeMode::Copy, false, col, rule_lines);
            assert!(!vis.show_glyph, "copy glyph hidden at col {col}");
            assert!(!vis.show_pinyin, "copy pinyin hidden at col {col}");
        }
    }
}

#[test]
fn fill_mode_fades_from_trace_to_copy() {
    for col in 0..FILL_TRACE_COLUMNS {
        let vis = cell_visibility(PracticeMode::Fill, false, col, true);
        assert!(vis.show_glyph, "fill col {col} should trace");
        assert_eq!(vis.glyph_opacity, TRACE_OPACITY);
    }
    for col in FILL_TRACE_COLUMNS..COLUMNS {
        let vis = cell_visibility(PracticeMode::Fill, false, col, true);
        assert!(!vis.show_glyph, "fill col {col} should be empty");
        assert!(!vis.show_pinyin);
    }
}

// End-to-end shape check: the default input produces 4 rows on one page even
// when the annotation oracle degraded every pinyin to empty.
#[test]
fn default_input_fits_one_page_even_degraded() {
    let hanzi = extract_hanzi("你好世界");
    assert_eq!(hanzi.len(), 4);
    let degraded: Vec<CharacterEntry> = hanzi
        .into_iter()
        .map(|c| CharacterEntry::new(c, ""))
        .collect();
    assert!(degraded.iter().all(|e| e.pinyin.is_empty()));
    let pages = paginate(&degraded, ROWS_PER_PAGE);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].len(), 4);
}
