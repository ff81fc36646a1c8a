//! Application controller: owns the single `AppState`, routes UI events
//! through the reducer and re-renders the sidebar and active view. DOM
//! construction follows the create-element / inline-style / `Closure` +
//! `forget` pattern throughout.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, window};

use crate::ai;
use crate::practice;
use crate::presets::{
    CUSTOM_PRESET_ID, DifficultyLevel, MULTI_TEXTBOOK_ID, PRESETS, PresetCategory, preset_by_id,
};
use crate::sheet::{self, GridStyle, PracticeMode};

pub mod state;

use state::{Action, AppState, ViewTab};

pub const GRID_COLOR_CHOICES: [&str; 4] = ["#ef4444", "#22c55e", "#3b82f6", "#94a3b8"];

thread_local! {
    static APP_STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Build the page skeleton, render the initial state and kick off pinyin
/// annotation for the default input.
pub fn start_app() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let root = doc.create_element("div")?;
    root.set_id("cb-root");
    root.set_attribute(
        "style",
        "display:flex; flex-direction:row; min-height:100vh; font-family:sans-serif; \
         color:#1e293b; background:#f1f5f9;",
    )?;

    let sidebar = doc.create_element("aside")?;
    sidebar.set_id("cb-sidebar");
    sidebar.set_class_name("no-print");
    sidebar.set_attribute(
        "style",
        "width:320px; background:#fff; border-right:1px solid #e2e8f0; padding:24px; \
         display:flex; flex-direction:column; gap:24px; height:100vh; overflow-y:auto; \
         position:sticky; top:0; box-shadow:0 2px 12px rgba(0,0,0,0.08);",
    )?;
    root.append_child(&sidebar)?;

    let main = doc.create_element("main")?;
    main.set_id("cb-main");
    main.set_attribute(
        "style",
        "flex:1; padding:32px; overflow:auto; display:flex; justify-content:center; \
         align-items:flex-start;",
    )?;
    root.append_child(&main)?;
    body.append_child(&root)?;

    render();

    let text = APP_STATE.with(|s| s.borrow().input_text.clone());
    spawn_annotate(text);
    Ok(())
}

/// Advance the state and repaint.
fn dispatch(action: Action) {
    APP_STATE.with(|s| s.borrow_mut().reduce(action));
    render();
}

/// Advance the state without repainting (used for text inputs, where a
/// rebuild would steal focus mid-edit).
fn dispatch_silent(action: Action) {
    APP_STATE.with(|s| s.borrow_mut().reduce(action));
}

fn render() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let snapshot = APP_STATE.with(|s| s.borrow().clone());
    if let Some(sidebar) = doc.get_element_by_id("cb-sidebar") {
        let _ = render_sidebar(&doc, &sidebar, &snapshot);
    }
    if let Some(main) = doc.get_element_by_id("cb-main") {
        let _ = render_main(&doc, &main, &snapshot);
    }
}

fn render_main(doc: &Document, main: &Element, state: &AppState) -> Result<(), JsValue> {
    match state.active_tab {
        ViewTab::Print => {
            main.set_inner_html("");
            let container = doc.create_element("div")?;
            container.set_id("cb-worksheet");
            container.set_attribute("style", "width:100%;")?;
            sheet::render::render_worksheet(doc, &container, &state.entries, &state.settings)?;
            main.append_child(&container)?;
        }
        ViewTab::Practice => {
            practice::view::mount(
                doc,
                main,
                &state.entries,
                state.practice_index,
                Rc::new(|index| dispatch(Action::SelectPracticeChar(index))),
            )?;
        }
    }
    Ok(())
}

// --- Oracle request chains ---------------------------------------------------
//
// Each chain takes one generation token up front; responses carry it back and
// the reducer drops anything a newer chain has superseded.

/// Annotate `text` with pinyin and replace the sheet content.
fn spawn_annotate(text: String) {
    let token = APP_STATE.with(|s| s.borrow_mut().begin_request());
    render();
    spawn_local(async move {
        let entries = ai::annotate_pinyin(&text).await;
        dispatch(Action::EntriesLoaded {
            generation: token,
            entries,
        });
    });
}

/// Ask the oracle for vocabulary, then annotate the result.
fn spawn_generate(prompt_context: String) {
    let (token, difficulty) = APP_STATE.with(|s| {
        let mut s = s.borrow_mut();
        let token = s.begin_request();
        (token, s.difficulty)
    });
    render();
    spawn_local(async move {
        let text = ai::suggest_vocabulary(&prompt_context, difficulty).await;
        dispatch(Action::VocabularyLoaded {
            generation: token,
            text: text.clone(),
        });
        let entries = ai::annotate_pinyin(&text).await;
        dispatch(Action::EntriesLoaded {
            generation: token,
            entries,
        });
    });
}

fn regenerate_for_preset(preset_id: &str) {
    if let Some(preset) = preset_by_id(preset_id)
        && preset.id != CUSTOM_PRESET_ID
    {
        spawn_generate(preset.prompt_context.to_string());
    }
}

fn generate_merged_units() {
    let selected: Vec<_> = APP_STATE.with(|s| {
        let s = s.borrow();
        PRESETS
            .iter()
            .filter(|p| s.selected_units.contains(p.id))
            .collect()
    });
    if selected.is_empty() {
        return;
    }
    spawn_generate(ai::merged_units_context(&selected));
}

// --- Sidebar -----------------------------------------------------------------

fn render_sidebar(doc: &Document, sidebar: &Element, state: &AppState) -> Result<(), JsValue> {
    sidebar.set_inner_html("");

    let brand = doc.create_element("div")?;
    brand.set_inner_html(
        "<h1 style='font-size:24px; font-weight:bold; margin:0; display:flex; \
         align-items:center; gap:8px;'><span style='background:#ef4444; color:#fff; \
         padding:2px 6px; border-radius:4px;'>笔</span>字帖生成器</h1>\
         <p style='font-size:12px; color:#94a3b8; margin:4px 0 0 0;'>Grade 1 Chinese Practice</p>",
    );
    sidebar.append_child(&brand)?;

    sidebar.append_child(&tab_toggle(doc, state)?.into())?;
    sidebar.append_child(&content_section(doc, state)?.into())?;

    let divider = doc.create_element("hr")?;
    divider.set_attribute("style", "border:none; border-top:1px solid #f1f5f9; width:100%;")?;
    sidebar.append_child(&divider)?;

    sidebar.append_child(&appearance_section(doc, state)?.into())?;

    if state.active_tab == ViewTab::Print {
        let print_btn = doc.create_element("button")?;
        print_btn.set_attribute(
            "style",
            "margin-top:auto; width:100%; background:#dc2626; color:#fff; font-weight:bold; \
             padding:12px 16px; border:none; border-radius:12px; cursor:pointer; \
             box-shadow:0 4px 12px rgba(220,38,38,0.3);",
        )?;
        print_btn.set_text_content(Some("打印字帖"));
        on_click(&print_btn, || {
            if let Some(win) = window() {
                let _ = win.print();
            }
        })?;
        sidebar.append_child(&print_btn)?;
    }
    Ok(())
}

fn tab_toggle(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let wrap = doc.create_element("div")?;
    wrap.set_attribute(
        "style",
        "display:flex; background:#f1f5f9; padding:4px; border-radius:8px; gap:4px;",
    )?;
    for (tab, label) in [(ViewTab::Print, "打印视图"), (ViewTab::Practice, "互动练习")] {
        let button = doc.create_element("button")?;
        let accent = if state.active_tab == tab {
            "background:#fff; box-shadow:0 1px 3px rgba(0,0,0,0.15); color:#1e293b;"
        } else {
            "background:none; color:#64748b;"
        };
        button.set_attribute(
            "style",
            &format!(
                "flex:1; padding:6px 0; font-size:14px; font-weight:500; border:none; \
                 border-radius:6px; cursor:pointer; {accent}"
            ),
        )?;
        button.set_text_content(Some(label));
        on_click(&button, move || dispatch(Action::SetActiveTab(tab)))?;
        wrap.append_child(&button)?;
    }
    Ok(wrap)
}

fn content_section(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let section = doc.create_element("div")?;
    section.set_attribute("style", "display:flex; flex-direction:column; gap:16px;")?;

    let heading = doc.create_element("div")?;
    heading.set_attribute("style", "font-size:14px; font-weight:600; color:#334155;")?;
    heading.set_text_content(Some("内容设置"));
    section.append_child(&heading)?;

    section.append_child(&preset_selector(doc, state)?.into())?;
    if state.selected_preset == MULTI_TEXTBOOK_ID {
        section.append_child(&multi_unit_panel(doc, state)?.into())?;
    }
    section.append_child(&difficulty_selector(doc, state)?.into())?;
    if state.selected_preset == CUSTOM_PRESET_ID {
        section.append_child(&custom_input(doc, state)?.into())?;
    }
    Ok(section)
}

fn preset_selector(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let wrap = doc.create_element("div")?;
    wrap.append_child(&field_label(doc, "选择教材/分类")?.into())?;

    let select: web_sys::HtmlSelectElement = doc.create_element("select")?.dyn_into()?;
    select.set_attribute(
        "style",
        "width:100%; padding:8px; border:1px solid #cbd5e1; border-radius:8px; \
         font-size:14px; background:#fff;",
    )?;

    let mut html = String::from("<optgroup label='自由输入'>");
    for preset in PRESETS.iter().filter(|p| p.id == CUSTOM_PRESET_ID) {
        html.push_str(&option_html(preset.id, preset.display_name, state));
    }
    html.push_str("</optgroup><optgroup label='教材同步'>");
    for preset in PRESETS
        .iter()
        .filter(|p| p.category == PresetCategory::Textbook)
    {
        html.push_str(&option_html(preset.id, preset.display_name, state));
    }
    html.push_str(&option_html(MULTI_TEXTBOOK_ID, "📚 组合选择多个单元...", state));
    html.push_str("</optgroup><optgroup label='趣味分类'>");
    for preset in PRESETS
        .iter()
        .filter(|p| p.category != PresetCategory::Textbook && p.id != CUSTOM_PRESET_ID)
    {
        html.push_str(&option_html(preset.id, preset.display_name, state));
    }
    html.push_str("</optgroup>");
    select.set_inner_html(&html);
    select.set_value(&state.selected_preset);
    if state.loading {
        select.set_disabled(true);
    }

    let select_for_read = select.clone();
    on_event(&select, "change", move || {
        let id = select_for_read.value();
        dispatch(Action::SelectPreset(id.clone()));
        if id != CUSTOM_PRESET_ID && id != MULTI_TEXTBOOK_ID {
            regenerate_for_preset(&id);
        }
    })?;
    wrap.append_child(&select)?;
    Ok(wrap)
}

fn option_html(id: &str, label: &str, state: &AppState) -> String {
    let selected = if state.selected_preset == id {
        " selected"
    } else {
        ""
    };
    format!("<option value='{id}'{selected}>{label}</option>")
}

fn multi_unit_panel(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let panel = doc.create_element("div")?;
    panel.set_attribute(
        "style",
        "background:#f8fafc; border:1px solid #e2e8f0; border-radius:8px; padding:12px;",
    )?;

    let heading = doc.create_element("div")?;
    heading.set_attribute(
        "style",
        "font-size:12px; font-weight:bold; color:#64748b; margin-bottom:8px;",
    )?;
    heading.set_text_content(Some("勾选需要合并的单元:"));
    panel.append_child(&heading)?;

    let list = doc.create_element("div")?;
    list.set_attribute(
        "style",
        "display:flex; flex-direction:column; gap:6px; max-height:160px; overflow-y:auto;",
    )?;
    for preset in PRESETS
        .iter()
        .filter(|p| p.category == PresetCategory::Textbook)
    {
        let row = doc.create_element("label")?;
        row.set_attribute(
            "style",
            "display:flex; align-items:flex-start; gap:8px; font-size:12px; cursor:pointer; \
             padding:6px; border-radius:4px;",
        )?;
        let checkbox: web_sys::HtmlInputElement = doc.create_element("input")?.dyn_into()?;
        checkbox.set_type("checkbox");
        checkbox.set_checked(state.selected_units.contains(preset.id));
        let id = preset.id.to_string();
        on_event(&checkbox, "change", move || {
            dispatch(Action::ToggleUnit(id.clone()));
        })?;
        row.append_child(&checkbox)?;

        let name = doc.create_element("span")?;
        let accent = if state.selected_units.contains(preset.id) {
            "color:#1e293b; font-weight:500;"
        } else {
            "color:#64748b;"
        };
        name.set_attribute("style", &format!("line-height:1.3; {accent}"))?;
        name.set_text_content(Some(preset.display_name));
        row.append_child(&name)?;
        list.append_child(&row)?;
    }
    panel.append_child(&list)?;

    let generate = doc.create_element("button")?;
    let disabled = state.selected_units.is_empty() || state.loading;
    let accent = if disabled {
        "background:#cbd5e1; cursor:default;"
    } else {
        "background:#4f46e5; cursor:pointer;"
    };
    generate.set_attribute(
        "style",
        &format!(
            "width:100%; margin-top:12px; color:#fff; padding:6px 0; border:none; \
             border-radius:4px; font-size:12px; font-weight:bold; {accent}"
        ),
    )?;
    let label = if state.loading {
        "正在合并生成...".to_string()
    } else {
        format!("生成 ({})", state.selected_units.len())
    };
    generate.set_text_content(Some(&label));
    if !disabled {
        on_click(&generate, generate_merged_units)?;
    }
    panel.append_child(&generate)?;
    Ok(panel)
}

fn difficulty_selector(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let wrap = doc.create_element("div")?;
    wrap.append_child(&field_label(doc, "难度/筛选")?.into())?;

    let select: web_sys::HtmlSelectElement = doc.create_element("select")?.dyn_into()?;
    select.set_attribute(
        "style",
        "width:100%; padding:8px; border:1px solid #cbd5e1; border-radius:8px; \
         font-size:14px; background:#fff;",
    )?;
    let mut html = String::new();
    for level in [
        DifficultyLevel::Any,
        DifficultyLevel::Simple,
        DifficultyLevel::Medium,
        DifficultyLevel::Complex,
        DifficultyLevel::StrokeFocus,
    ] {
        let selected = if state.difficulty == level {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value='{}'{selected}>{}</option>",
            level.id(),
            level.label()
        ));
    }
    select.set_inner_html(&html);
    select.set_value(state.difficulty.id());
    if state.loading {
        select.set_disabled(true);
    }

    let select_for_read = select.clone();
    on_event(&select, "change", move || {
        let Some(level) = DifficultyLevel::from_id(&select_for_read.value()) else {
            return;
        };
        dispatch(Action::SetDifficulty(level));
        // Multi-unit merges regenerate only on an explicit click, to avoid
        // firing a heavy request per difficulty change.
        let preset = APP_STATE.with(|s| s.borrow().selected_preset.clone());
        if preset != CUSTOM_PRESET_ID && preset != MULTI_TEXTBOOK_ID {
            regenerate_for_preset(&preset);
        }
    })?;
    wrap.append_child(&select)?;
    Ok(wrap)
}

fn custom_input(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let wrap = doc.create_element("div")?;
    wrap.set_attribute("style", "display:flex; flex-direction:column; gap:8px;")?;
    wrap.append_child(&field_label(doc, "自定义内容")?.into())?;

    let textarea: web_sys::HtmlTextAreaElement = doc.create_element("textarea")?.dyn_into()?;
    textarea.set_id("cb-input-text");
    textarea.set_attribute(
        "style",
        "width:100%; height:96px; padding:8px; font-size:18px; border:1px solid #cbd5e1; \
         border-radius:8px; resize:none; box-sizing:border-box;",
    )?;
    textarea.set_attribute("placeholder", "输入汉字...")?;
    textarea.set_value(&state.input_text);
    let textarea_for_read = textarea.clone();
    on_event(&textarea, "change", move || {
        dispatch_silent(Action::SetInputText(textarea_for_read.value()));
    })?;
    wrap.append_child(&textarea)?;

    let buttons = doc.create_element("div")?;
    buttons.set_attribute("style", "display:flex; gap:8px;")?;

    let update = doc.create_element("button")?;
    update.set_attribute(
        "style",
        "flex:1; background:#1e293b; color:#fff; padding:6px 0; border:none; \
         border-radius:4px; font-size:14px; cursor:pointer;",
    )?;
    update.set_text_content(Some(if state.loading { "生成中..." } else { "更新" }));
    on_click(&update, || {
        let text = current_textarea_value();
        dispatch_silent(Action::SetInputText(text.clone()));
        spawn_annotate(text);
    })?;
    buttons.append_child(&update)?;

    let smart = doc.create_element("button")?;
    smart.set_attribute(
        "style",
        "padding:6px 12px; background:#f3e8ff; color:#7e22ce; border:none; border-radius:4px; \
         cursor:pointer;",
    )?;
    smart.set_attribute("title", "AI 帮我想几个字")?;
    smart.set_text_content(Some("✨"));
    on_click(&smart, || {
        spawn_generate(ai::SMART_GENERATE_CONTEXT.to_string());
    })?;
    buttons.append_child(&smart)?;

    wrap.append_child(&buttons)?;
    Ok(wrap)
}

fn current_textarea_value() -> String {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("cb-input-text"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

fn appearance_section(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let section = doc.create_element("div")?;
    section.set_attribute("style", "display:flex; flex-direction:column; gap:16px;")?;

    let heading = doc.create_element("div")?;
    heading.set_attribute("style", "font-size:14px; font-weight:600; color:#334155;")?;
    heading.set_text_content(Some("外观设置"));
    section.append_child(&heading)?;

    if state.active_tab == ViewTab::Print {
        section.append_child(&pinyin_toggle_row(doc, state)?.into())?;
        section.append_child(&choice_row(
            doc,
            "练习模式",
            &[
                (PracticeMode::Trace, "描红"),
                (PracticeMode::Fill, "渐隐"),
                (PracticeMode::Copy, "临摹"),
            ],
            state.settings.practice_mode,
            "#3b82f6",
            |mode| dispatch(Action::SetPracticeMode(mode)),
        )?.into())?;
    }

    section.append_child(&choice_row(
        doc,
        "格线类型",
        &[
            (GridStyle::MiZi, "米字格"),
            (GridStyle::TianZi, "田字格"),
            (GridStyle::Square, "方格"),
        ],
        state.settings.grid_style,
        "#ef4444",
        |style| dispatch(Action::SetGridStyle(style)),
    )?.into())?;

    if state.active_tab == ViewTab::Print {
        let title_wrap = doc.create_element("div")?;
        title_wrap.append_child(&field_label(doc, "字帖标题")?.into())?;
        let title_input: web_sys::HtmlInputElement = doc.create_element("input")?.dyn_into()?;
        title_input.set_type("text");
        title_input.set_attribute(
            "style",
            "width:100%; padding:4px 8px; border:1px solid #cbd5e1; border-radius:4px; \
             font-size:14px; box-sizing:border-box;",
        )?;
        title_input.set_value(&state.settings.title);
        let input_for_read = title_input.clone();
        on_event(&title_input, "change", move || {
            dispatch(Action::SetTitle(input_for_read.value()));
        })?;
        title_wrap.append_child(&title_input)?;
        section.append_child(&title_wrap)?;
    }

    section.append_child(&grid_color_row(doc, state)?.into())?;
    Ok(section)
}

fn pinyin_toggle_row(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let row = doc.create_element("div")?;
    row.set_attribute(
        "style",
        "display:flex; align-items:center; justify-content:space-between;",
    )?;
    let label = doc.create_element("span")?;
    label.set_attribute("style", "font-size:14px; font-weight:500; color:#334155;")?;
    label.set_text_content(Some("显示拼音四线格"));
    row.append_child(&label)?;

    let on = state.settings.show_pinyin_rule_lines;
    let toggle = doc.create_element("button")?;
    let (track, knob_offset) = if on {
        ("#ef4444", "translateX(22px)")
    } else {
        ("#e2e8f0", "translateX(2px)")
    };
    toggle.set_attribute(
        "style",
        &format!(
            "position:relative; width:44px; height:24px; border-radius:9999px; border:none; \
             cursor:pointer; background:{track};"
        ),
    )?;
    toggle.set_inner_html(&format!(
        "<span style='position:absolute; top:4px; left:0; width:16px; height:16px; \
         border-radius:9999px; background:#fff; transform:{knob_offset};'></span>"
    ));
    on_click(&toggle, || dispatch(Action::TogglePinyinRuleLines))?;
    row.append_child(&toggle)?;
    Ok(row)
}

/// Three-way button row used for practice mode and grid style.
fn choice_row<T: Copy + PartialEq + 'static>(
    doc: &Document,
    label: &str,
    choices: &[(T, &str)],
    active: T,
    accent: &str,
    on_choose: fn(T),
) -> Result<Element, JsValue> {
    let wrap = doc.create_element("div")?;
    wrap.append_child(&field_label(doc, label)?.into())?;
    let row = doc.create_element("div")?;
    row.set_attribute(
        "style",
        "display:grid; grid-template-columns:repeat(3, 1fr); gap:8px;",
    )?;
    for &(value, text) in choices {
        let button = doc.create_element("button")?;
        let style = if value == active {
            format!(
                "font-size:12px; padding:6px 0; border-radius:4px; cursor:pointer; \
                 border:1px solid {accent}; color:{accent}; background:#fff; font-weight:500;"
            )
        } else {
            "font-size:12px; padding:6px 0; border-radius:4px; cursor:pointer; \
             border:1px solid #e2e8f0; color:#475569; background:#fff;"
                .into()
        };
        button.set_attribute("style", &style)?;
        button.set_text_content(Some(text));
        on_click(&button, move || on_choose(value))?;
        row.append_child(&button)?;
    }
    wrap.append_child(&row)?;
    Ok(wrap)
}

fn grid_color_row(doc: &Document, state: &AppState) -> Result<Element, JsValue> {
    let wrap = doc.create_element("div")?;
    wrap.append_child(&field_label(doc, "格线颜色")?.into())?;
    let row = doc.create_element("div")?;
    row.set_attribute("style", "display:flex; gap:8px;")?;
    for color in GRID_COLOR_CHOICES {
        let swatch = doc.create_element("button")?;
        let ring = if state.settings.grid_color == color {
            "border:2px solid #1e293b; transform:scale(1.1);"
        } else {
            "border:2px solid transparent;"
        };
        swatch.set_attribute(
            "style",
            &format!(
                "width:24px; height:24px; border-radius:9999px; cursor:pointer; \
                 background:{color}; {ring}"
            ),
        )?;
        on_click(&swatch, move || {
            dispatch(Action::SetGridColor(color.to_string()));
        })?;
        row.append_child(&swatch)?;
    }
    wrap.append_child(&row)?;
    Ok(wrap)
}

fn field_label(doc: &Document, text: &str) -> Result<Element, JsValue> {
    let label = doc.create_element("label")?;
    label.set_attribute(
        "style",
        "display:block; font-size:12px; color:#64748b; margin-bottom:4px;",
    )?;
    label.set_text_content(Some(text));
    Ok(label)
}

// --- Listener helpers --------------------------------------------------------

fn on_click(target: &Element, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    on_event(target, "click", handler)
}

fn on_event(
    target: &web_sys::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let closure =
        Closure::wrap(Box::new(move |_evt: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
