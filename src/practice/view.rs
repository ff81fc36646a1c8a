//! Interactive practice panel: character picker, stroke-order demo (plain or
//! rainbow) and the tracing quiz with oracle feedback. Drives the external
//! engine exclusively through the [`StrokeAnimator`] trait.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::writer::{HanziWriterEngine, QuizHooks, StrokeAnimator};
use super::{INK_COLOR, PracticePhase, PracticeSession, rainbow_color};
use crate::ai;
use crate::sheet::CharacterEntry;

struct Panel {
    session: PracticeSession,
    engine: Rc<HanziWriterEngine>,
}

thread_local! {
    static PANEL: RefCell<Option<Panel>> = const { RefCell::new(None) };
}

/// Build the practice view into `container`. `on_select` is called with the
/// picked entry index; the controller owns re-rendering.
pub fn mount(
    doc: &Document,
    container: &Element,
    entries: &[CharacterEntry],
    practice_index: usize,
    on_select: Rc<dyn Fn(usize)>,
) -> Result<(), JsValue> {
    container.set_inner_html("");
    PANEL.with(|cell| cell.replace(None));

    if entries.is_empty() {
        let placeholder = doc.create_element("div")?;
        placeholder.set_attribute(
            "style",
            "display:flex; flex-direction:column; align-items:center; justify-content:center; \
             height:384px; color:#94a3b8;",
        )?;
        placeholder.set_text_content(Some("请先在左侧输入或生成生字内容..."));
        container.append_child(&placeholder)?;
        return Ok(());
    }

    let index = practice_index.min(entries.len() - 1);
    let layout = doc.create_element("div")?;
    layout.set_attribute(
        "style",
        "display:flex; flex-direction:row; gap:32px; align-items:flex-start; width:100%; \
         max-width:896px;",
    )?;
    layout.append_child(&picker(doc, entries, index, on_select)?.into())?;
    layout.append_child(&player(doc, entries[index].character)?.into())?;
    container.append_child(&layout)?;

    refresh_panel();
    Ok(())
}

fn picker(
    doc: &Document,
    entries: &[CharacterEntry],
    active: usize,
    on_select: Rc<dyn Fn(usize)>,
) -> Result<Element, JsValue> {
    let list = doc.create_element("div")?;
    list.set_attribute(
        "style",
        "width:33%; background:#fff; border-radius:12px; box-shadow:0 1px 6px rgba(0,0,0,0.1); \
         padding:16px; max-height:600px; overflow-y:auto;",
    )?;

    let heading = doc.create_element("h3")?;
    heading.set_attribute(
        "style",
        "font-weight:bold; color:#334155; margin:0 0 16px 0; font-size:16px;",
    )?;
    heading.set_text_content(Some("选择生字"));
    list.append_child(&heading)?;

    let grid = doc.create_element("div")?;
    grid.set_attribute(
        "style",
        "display:grid; grid-template-columns:repeat(4, 1fr); gap:8px;",
    )?;

    for (i, entry) in entries.iter().enumerate() {
        let button = doc.create_element("button")?;
        let accent = if i == active {
            "border:2px solid #3b82f6; background:#eff6ff; color:#1d4ed8; font-weight:bold;"
        } else {
            "border:2px solid transparent; background:none; color:#475569;"
        };
        button.set_attribute(
            "style",
            &format!(
                "aspect-ratio:1; display:flex; flex-direction:column; align-items:center; \
                 justify-content:center; border-radius:6px; font-size:20px; cursor:pointer; {accent}"
            ),
        )?;
        button.set_inner_html(&format!(
            "<span style='font-size:12px; color:#9ca3af;'>{}</span>{}",
            entry.pinyin, entry.character
        ));

        let on_select = on_select.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            on_select(i);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        grid.append_child(&button)?;
    }
    list.append_child(&grid)?;
    Ok(list)
}

fn player(doc: &Document, character: char) -> Result<Element, JsValue> {
    let panel = doc.create_element("div")?;
    panel.set_attribute(
        "style",
        "flex:1; display:flex; flex-direction:column; align-items:center; background:#fff; \
         padding:24px; border-radius:16px; border:1px solid #f1f5f9; \
         box-shadow:0 1px 4px rgba(0,0,0,0.06);",
    )?;

    let head = doc.create_element("div")?;
    head.set_attribute(
        "style",
        "display:flex; justify-content:space-between; width:100%; align-items:center; \
         margin-bottom:16px;",
    )?;
    head.set_inner_html(&format!(
        "<h3 style='font-size:24px; font-weight:bold; color:#1e293b; margin:0;'>汉字演示: \
         <span style='color:#dc2626; font-size:30px;'>{character}</span></h3>\
         <div id='cb-score' style='display:none; font-weight:bold;'></div>"
    ));
    panel.append_child(&head)?;

    // Writer board with a faint 田字格 backdrop behind the SVG.
    let board = doc.create_element("div")?;
    board.set_attribute(
        "style",
        "position:relative; background:#f8fafc; border:2px solid #ef4444; border-radius:8px; \
         margin-bottom:24px; box-shadow:inset 0 2px 6px rgba(0,0,0,0.08);",
    )?;
    let backdrop = doc.create_element("div")?;
    backdrop.set_attribute(
        "style",
        "position:absolute; inset:0; pointer-events:none; opacity:0.2;",
    )?;
    backdrop.set_inner_html(
        "<div style='position:absolute; top:50%; left:0; width:100%; border-top:1px dashed #ef4444;'></div>\
         <div style='position:absolute; left:50%; top:0; height:100%; border-left:1px dashed #ef4444;'></div>",
    );
    board.append_child(&backdrop)?;
    let target = doc.create_element("div")?;
    target.set_id("cb-writer-target");
    board.append_child(&target)?;
    panel.append_child(&board)?;

    let feedback = doc.create_element("div")?;
    feedback.set_attribute(
        "style",
        "width:100%; min-height:64px; margin-bottom:16px; background:#fefce8; \
         border:1px solid #fef3c7; border-radius:12px; padding:12px;",
    )?;
    feedback.set_inner_html(
        "<h4 style='font-size:12px; font-weight:bold; color:#a16207; margin:0 0 2px 0;'>老师点评</h4>\
         <p id='cb-feedback' style='font-size:14px; color:#334155; margin:0; line-height:1.6;'></p>",
    );
    panel.append_child(&feedback)?;

    let rainbow_row = doc.create_element("div")?;
    rainbow_row.set_attribute(
        "style",
        "display:flex; justify-content:flex-end; width:100%; margin-bottom:12px;",
    )?;
    let rainbow_btn = doc.create_element("button")?;
    rainbow_btn.set_id("cb-rainbow");
    rainbow_btn.set_attribute(
        "style",
        "font-size:12px; padding:4px 8px; border-radius:9999px; border:none; cursor:pointer; \
         background:#f3e8ff; color:#7e22ce;",
    )?;
    let rainbow_click = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        PANEL.with(|cell| {
            if let Some(panel) = cell.borrow_mut().as_mut() {
                panel.session.toggle_rainbow();
            }
        });
        refresh_panel();
    }) as Box<dyn FnMut(_)>);
    rainbow_btn.add_event_listener_with_callback("click", rainbow_click.as_ref().unchecked_ref())?;
    rainbow_click.forget();
    rainbow_row.append_child(&rainbow_btn)?;
    panel.append_child(&rainbow_row)?;

    let controls = doc.create_element("div")?;
    controls.set_attribute("style", "display:flex; gap:16px; width:100%;")?;
    let demo_btn = action_button(doc, "cb-demo-btn", "演示")?;
    let demo_click = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        start_demo();
    }) as Box<dyn FnMut(_)>);
    demo_btn.add_event_listener_with_callback("click", demo_click.as_ref().unchecked_ref())?;
    demo_click.forget();
    controls.append_child(&demo_btn)?;

    let quiz_btn = action_button(doc, "cb-quiz-btn", "描红")?;
    let quiz_click = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        start_quiz();
    }) as Box<dyn FnMut(_)>);
    quiz_btn.add_event_listener_with_callback("click", quiz_click.as_ref().unchecked_ref())?;
    quiz_click.forget();
    controls.append_child(&quiz_btn)?;
    panel.append_child(&controls)?;

    // Engine + session for the picked character; the load callback reports
    // the stroke count once character data arrives.
    let engine = Rc::new(HanziWriterEngine::create(&target, character, |count| {
        PANEL.with(|cell| {
            if let Some(panel) = cell.borrow_mut().as_mut() {
                panel.session.set_stroke_count(count);
            }
        });
    }));
    engine.animate_character();
    PANEL.with(|cell| {
        cell.replace(Some(Panel {
            session: PracticeSession::new(character),
            engine,
        }))
    });

    Ok(panel)
}

fn action_button(doc: &Document, id: &str, label: &str) -> Result<Element, JsValue> {
    let button = doc.create_element("button")?;
    button.set_id(id);
    button.set_attribute(
        "style",
        "flex:1; padding:12px 16px; border-radius:12px; font-weight:600; font-size:14px; \
         cursor:pointer; background:#fff; border:1px solid #e2e8f0; color:#475569;",
    )?;
    button.set_text_content(Some(label));
    Ok(button)
}

/// Stroke-order demo. Rainbow mode reveals strokes one at a time, shifting
/// the global ink color per stroke (earlier strokes re-color along with it,
/// which is the intended look). Plain mode replays the engine's own
/// character animation.
fn start_demo() {
    let Some((engine, rainbow, stroke_count)) = PANEL.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let panel = borrow.as_mut()?;
        panel.session.begin_demo();
        Some((
            panel.engine.clone(),
            panel.session.rainbow(),
            panel.session.stroke_count(),
        ))
    }) else {
        return;
    };
    refresh_panel();

    if rainbow && stroke_count > 0 {
        spawn_local(async move {
            engine.hide_character();
            engine.show_outline();
            for i in 0..stroke_count {
                engine.update_color("strokeColor", rainbow_color(i));
                engine.animate_stroke(i).await;
            }
            PANEL.with(|cell| {
                if let Some(panel) = cell.borrow_mut().as_mut() {
                    panel.session.finish_demo();
                }
            });
            refresh_panel();
        });
    } else {
        engine.update_color("strokeColor", INK_COLOR);
        engine.show_character();
        engine.show_outline();
        engine.animate_character();
        // animateCharacter exposes no completion signal; the engine owns its
        // timing loop, so the session returns to idle right away.
        PANEL.with(|cell| {
            if let Some(panel) = cell.borrow_mut().as_mut() {
                panel.session.finish_demo();
            }
        });
    }
}

/// Tracing quiz: outline only, mistakes tracked by the engine. Completion
/// computes the score and asks the oracle for a teacher comment.
fn start_quiz() {
    let Some(engine) = PANEL.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let panel = borrow.as_mut()?;
        panel.session.begin_quiz();
        Some(panel.engine.clone())
    }) else {
        return;
    };
    refresh_panel();

    engine.update_color("strokeColor", INK_COLOR);
    engine.hide_character();
    engine.show_outline();
    engine.quiz(QuizHooks {
        on_mistake: None,
        on_correct_stroke: None,
        on_complete: Box::new(|summary| {
            let request = PANEL.with(|cell| {
                cell.borrow_mut()
                    .as_mut()
                    .map(|panel| panel.session.complete_quiz(&summary))
            });
            refresh_panel();
            if let Some(request) = request {
                spawn_local(async move {
                    let comment = ai::critique_handwriting(&request).await;
                    PANEL.with(|cell| {
                        if let Some(panel) = cell.borrow_mut().as_mut() {
                            panel.session.apply_feedback(comment);
                        }
                    });
                    refresh_panel();
                });
            }
        }),
    });
}

/// Sync the score badge, feedback box, rainbow label and button accents with
/// the current session.
fn refresh_panel() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    PANEL.with(|cell| {
        let borrow = cell.borrow();
        let Some(panel) = borrow.as_ref() else {
            return;
        };
        let session = &panel.session;

        if let Some(el) = doc.get_element_by_id("cb-score") {
            match session.score() {
                Some(score) => {
                    let color = if score > 80 { "#16a34a" } else { "#f97316" };
                    el.set_attribute(
                        "style",
                        &format!("display:block; font-weight:bold; color:{color};"),
                    )
                    .ok();
                    el.set_text_content(Some(&format!("{score}分")));
                }
                None => {
                    el.set_attribute("style", "display:none;").ok();
                }
            }
        }

        if let Some(el) = doc.get_element_by_id("cb-feedback") {
            let text = match session.phase() {
                PracticePhase::Evaluating => "老师正在仔细看你的字...",
                PracticePhase::Quiz => session.feedback().unwrap_or("加油！认真写好每一笔。"),
                _ => session.feedback().unwrap_or("点击“演示笔顺”观看动画"),
            };
            el.set_text_content(Some(text));
        }

        if let Some(el) = doc.get_element_by_id("cb-rainbow") {
            let (label, style) = if session.rainbow() {
                (
                    "彩虹笔顺: 开启",
                    "font-size:12px; padding:4px 8px; border-radius:9999px; border:none; \
                     cursor:pointer; background:#f3e8ff; color:#7e22ce;",
                )
            } else {
                (
                    "彩虹笔顺: 关闭",
                    "font-size:12px; padding:4px 8px; border-radius:9999px; border:none; \
                     cursor:pointer; background:none; color:#94a3b8;",
                )
            };
            el.set_text_content(Some(label));
            el.set_attribute("style", style).ok();
        }

        let demo_active = session.phase() == PracticePhase::Demo;
        let quiz_active = matches!(
            session.phase(),
            PracticePhase::Quiz | PracticePhase::Evaluating
        );
        if let Some(el) = doc.get_element_by_id("cb-demo-btn") {
            el.set_attribute("style", &toggle_style(demo_active, "#1e293b")).ok();
        }
        if let Some(el) = doc.get_element_by_id("cb-quiz-btn") {
            el.set_attribute("style", &toggle_style(quiz_active, "#ef4444")).ok();
        }
    });
}

fn toggle_style(active: bool, accent: &str) -> String {
    if active {
        format!(
            "flex:1; padding:12px 16px; border-radius:12px; font-weight:600; font-size:14px; \
             cursor:pointer; background:{accent}; color:#fff; border:1px solid {accent}; \
             box-shadow:0 4px 12px rgba(0,0,0,0.18);"
        )
    } else {
        "flex:1; padding:12px 16px; border-radius:12px; font-weight:600; font-size:14px; \
         cursor:pointer; background:#fff; border:1px solid #e2e8f0; color:#475569;"
            .into()
    }
}
