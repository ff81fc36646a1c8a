//! DOM output for the printable worksheet: A4 pages of practice rows built
//! from the pure layout logic in the parent module. Styling is inlined so the
//! pages print correctly without an external stylesheet.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{
    CharacterEntry, COLUMNS, CellVisibility, GridStyle, ROWS_PER_PAGE, SheetSettings,
    cell_visibility, paginate,
};

const PAGE_STYLE: &str = "background:#fff; width:210mm; min-height:297mm; padding:15mm; \
    box-sizing:border-box; margin:0 auto 24px auto; position:relative; \
    box-shadow:0 4px 24px rgba(0,0,0,0.12); break-after:page; page-break-after:always;";

const CELL_WIDTH_PX: u32 = 80;

/// Replace `container`'s children with the paginated worksheet.
pub fn render_worksheet(
    doc: &Document,
    container: &Element,
    entries: &[CharacterEntry],
    settings: &SheetSettings,
) -> Result<(), JsValue> {
    container.set_inner_html("");
    let pages = paginate(entries, ROWS_PER_PAGE);
    let page_count = pages.len();

    for (page_index, page) in pages.iter().enumerate() {
        let page_el = doc.create_element("div")?;
        page_el.set_class_name("cb-page");
        page_el.set_attribute("style", PAGE_STYLE)?;

        page_el.append_child(&title_header(doc, settings)?.into())?;

        let rows_el = doc.create_element("div")?;
        rows_el.set_attribute("style", "display:flex; flex-direction:column; gap:24px;")?;

        if page.is_empty() && page_index == 0 {
            let placeholder = doc.create_element("div")?;
            placeholder.set_attribute(
                "style",
                "text-align:center; color:#d1d5db; padding:80px 0; font-size:20px; \
                 border:2px dashed #e5e7eb; border-radius:12px; margin:32px;",
            )?;
            placeholder.set_inner_html("在此处预览字帖内容... <br/> (请在左侧输入文字或选择预设)");
            rows_el.append_child(&placeholder)?;
        }

        for entry in page.iter() {
            rows_el.append_child(&practice_row(doc, entry, settings)?.into())?;
        }
        page_el.append_child(&rows_el)?;

        let footer = doc.create_element("div")?;
        footer.set_attribute(
            "style",
            "position:absolute; bottom:24px; left:0; width:100%; text-align:center; \
             font-size:12px; color:#9ca3af;",
        )?;
        footer.set_text_content(Some(&format!(
            "第 {} 页 / 共 {} 页",
            page_index + 1,
            page_count
        )));
        page_el.append_child(&footer)?;

        container.append_child(&page_el)?;
    }
    Ok(())
}

fn title_header(doc: &Document, settings: &SheetSettings) -> Result<Element, JsValue> {
    let header = doc.create_element("div")?;
    header.set_attribute(
        "style",
        "text-align:center; border-bottom:2px solid #1e293b; padding-bottom:16px; \
         margin-bottom:24px;",
    )?;

    let title = doc.create_element("h1")?;
    title.set_attribute(
        "style",
        "font-size:30px; font-weight:bold; letter-spacing:0.2em; color:#0f172a; margin:0;",
    )?;
    let text = if settings.title.is_empty() {
        "一年级语文生字练习"
    } else {
        &settings.title
    };
    title.set_text_content(Some(text));
    header.append_child(&title)?;

    let info = doc.create_element("div")?;
    info.set_attribute(
        "style",
        "display:flex; justify-content:space-between; margin-top:8px; font-size:14px; \
         color:#64748b;",
    )?;
    info.set_inner_html(
        "<span>班级: __________</span><span>姓名: __________</span>\
         <span>日期: __________</span><span>评分: __________</span>",
    );
    header.append_child(&info)?;
    Ok(header)
}

/// One character row: a header (worked example) cell followed by practice
/// cells whose scaffolding follows the active practice mode.
fn practice_row(
    doc: &Document,
    entry: &CharacterEntry,
    settings: &SheetSettings,
) -> Result<Element, JsValue> {
    let row = doc.create_element("div")?;
    row.set_attribute(
        "style",
        "display:flex; flex-direction:row; justify-content:space-between; align-items:flex-end;",
    )?;
    for col in 0..COLUMNS {
        let is_header = col == 0;
        // Practice columns count from 0 for the fill-mode fade.
        let column_index = col.saturating_sub(1);
        let visibility = cell_visibility(
            settings.practice_mode,
            is_header,
            column_index,
            settings.show_pinyin_rule_lines,
        );
        row.append_child(&grid_cell(doc, entry, settings, visibility)?.into())?;
    }
    Ok(row)
}

fn grid_cell(
    doc: &Document,
    entry: &CharacterEntry,
    settings: &SheetSettings,
    visibility: CellVisibility,
) -> Result<Element, JsValue> {
    let cell = doc.create_element("div")?;
    cell.set_attribute(
        "style",
        &format!(
            "display:flex; flex-direction:column; align-items:center; width:{CELL_WIDTH_PX}px;"
        ),
    )?;

    cell.append_child(&pinyin_area(doc, entry, settings, visibility)?.into())?;
    cell.append_child(&glyph_box(doc, entry, settings, visibility)?.into())?;
    Ok(cell)
}

/// Pinyin strip above the box: either the four-line three-space grid
/// (四线三格) or a plain caption that only the header column fills in.
fn pinyin_area(
    doc: &Document,
    entry: &CharacterEntry,
    settings: &SheetSettings,
    visibility: CellVisibility,
) -> Result<Element, JsValue> {
    let area = doc.create_element("div")?;
    if settings.show_pinyin_rule_lines {
        area.set_attribute(
            "style",
            "width:100%; height:40px; position:relative; margin-bottom:4px; display:flex; \
             align-items:center; justify-content:center;",
        )?;
        let color = &settings.grid_color;
        for (offset, dashed, opacity) in [
            ("top:0", false, 0.6),
            ("top:33%", true, 0.4),
            ("top:66%", true, 0.4),
            ("bottom:0", false, 0.6),
        ] {
            let line = doc.create_element("div")?;
            let dash = if dashed { "dashed" } else { "solid" };
            line.set_attribute(
                "style",
                &format!(
                    "position:absolute; {offset}; width:100%; border-top:1px {dash} {color}; \
                     opacity:{opacity};"
                ),
            )?;
            area.append_child(&line)?;
        }
        if visibility.show_pinyin {
            let text = doc.create_element("span")?;
            text.set_attribute(
                "style",
                &format!(
                    "position:relative; z-index:1; font-size:18px; letter-spacing:0.05em; \
                     margin-top:-4px; color:{}; opacity:{};",
                    settings.glyph_color, visibility.pinyin_opacity
                ),
            )?;
            text.set_text_content(Some(&entry.pinyin));
            area.append_child(&text)?;
        }
    } else {
        area.set_attribute(
            "style",
            "height:24px; width:100%; display:flex; align-items:flex-end; \
             justify-content:center; font-size:14px; margin-bottom:2px; color:#4b5563;",
        )?;
        // Without rule lines only the worked example keeps its caption.
        if visibility.show_pinyin && visibility.pinyin_opacity >= 1.0 {
            area.set_text_content(Some(&entry.pinyin));
        }
    }
    Ok(area)
}

fn glyph_box(
    doc: &Document,
    entry: &CharacterEntry,
    settings: &SheetSettings,
    visibility: CellVisibility,
) -> Result<Element, JsValue> {
    let color = &settings.grid_color;
    let boxed = doc.create_element("div")?;
    boxed.set_attribute(
        "style",
        &format!(
            "position:relative; width:{CELL_WIDTH_PX}px; height:{CELL_WIDTH_PX}px; \
             border:2px solid {color}; display:flex; align-items:center; \
             justify-content:center; overflow:hidden;"
        ),
    )?;

    // Center cross for 田字格 and 米字格; the plain square keeps only its border.
    if matches!(settings.grid_style, GridStyle::TianZi | GridStyle::MiZi) {
        let horizontal = doc.create_element("div")?;
        horizontal.set_attribute(
            "style",
            &format!(
                "position:absolute; top:50%; left:0; width:100%; border-top:1px dashed {color}; \
                 opacity:0.5;"
            ),
        )?;
        boxed.append_child(&horizontal)?;
        let vertical = doc.create_element("div")?;
        vertical.set_attribute(
            "style",
            &format!(
                "position:absolute; left:50%; top:0; height:100%; border-left:1px dashed {color}; \
                 opacity:0.5;"
            ),
        )?;
        boxed.append_child(&vertical)?;
    }

    if settings.grid_style == GridStyle::MiZi {
        let diagonals = doc.create_element("div")?;
        diagonals.set_attribute("style", "position:absolute; inset:0;")?;
        diagonals.set_inner_html(&format!(
            "<svg width='100%' height='100%' style='stroke:{color}; stroke-opacity:0.5;'>\
             <line x1='0' y1='0' x2='100%' y2='100%' stroke-dasharray='4' stroke-width='1'/>\
             <line x1='100%' y1='0' x2='0' y2='100%' stroke-dasharray='4' stroke-width='1'/>\
             </svg>"
        ));
        boxed.append_child(&diagonals)?;
    }

    if visibility.show_glyph {
        let glyph = doc.create_element("span")?;
        glyph.set_attribute(
            "style",
            &format!(
                "position:relative; z-index:1; font-size:60px; line-height:1; margin-top:-4px; \
                 user-select:none; color:{}; opacity:{};",
                settings.glyph_color, visibility.glyph_opacity
            ),
        )?;
        glyph.set_text_content(Some(&entry.character.to_string()));
        boxed.append_child(&glyph)?;
    }
    Ok(boxed)
}
