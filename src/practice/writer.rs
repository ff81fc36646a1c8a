//! Capability seam for the external stroke animation/quiz engine, plus the
//! concrete binding to the HanziWriter JS library. Orchestration code talks to
//! [`StrokeAnimator`] only, so tests can substitute a recording mock.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::QuizSummary;

/// Quiz callbacks. Per-stroke hooks are optional; the engine always reports a
/// completion summary.
pub struct QuizHooks {
    pub on_mistake: Option<Box<dyn FnMut()>>,
    pub on_correct_stroke: Option<Box<dyn FnMut()>>,
    pub on_complete: Box<dyn FnOnce(QuizSummary)>,
}

/// Operations the practice view needs from a stroke engine. Timing between
/// strokes is the engine's own business; we only sequence calls.
pub trait StrokeAnimator {
    /// Animate the whole character with the engine's internal pacing.
    fn animate_character(&self);
    /// Animate one stroke; resolves when the stroke finishes drawing.
    async fn animate_stroke(&self, index: usize);
    fn show_character(&self);
    fn hide_character(&self);
    fn show_outline(&self);
    /// Update a color channel (e.g. `"strokeColor"`). Applies globally, so
    /// already-drawn strokes re-color too.
    fn update_color(&self, channel: &str, color: &str);
    /// Hand the board to the engine's quiz mode.
    fn quiz(&self, hooks: QuizHooks);
}

#[wasm_bindgen]
extern "C" {
    /// The `HanziWriter` global loaded from the page's script tag.
    #[wasm_bindgen(js_name = HanziWriter)]
    type JsHanziWriter;

    #[wasm_bindgen(static_method_of = JsHanziWriter, js_class = "HanziWriter", js_name = create)]
    fn create(target: &web_sys::Element, character: &str, options: &JsValue) -> JsHanziWriter;

    #[wasm_bindgen(method, js_name = animateCharacter)]
    fn animate_character(this: &JsHanziWriter);

    #[wasm_bindgen(method, js_name = animateStroke)]
    fn animate_stroke(this: &JsHanziWriter, index: u32) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = showCharacter)]
    fn show_character(this: &JsHanziWriter);

    #[wasm_bindgen(method, js_name = hideCharacter)]
    fn hide_character(this: &JsHanziWriter);

    #[wasm_bindgen(method, js_name = showOutline)]
    fn show_outline(this: &JsHanziWriter);

    #[wasm_bindgen(method, js_name = updateColor)]
    fn update_color(this: &JsHanziWriter, channel: &str, color: &str);

    #[wasm_bindgen(method, js_name = quiz)]
    fn quiz(this: &JsHanziWriter, options: &JsValue);
}

fn set_prop(target: &js_sys::Object, key: &str, value: &JsValue) {
    // Reflect::set only fails on frozen objects; ours are freshly built.
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}

/// HanziWriter-backed engine. Creation options mirror the product defaults:
/// kid-sized drawing width, green radicals, hint after three misses.
pub struct HanziWriterEngine {
    writer: JsHanziWriter,
    // Kept alive for the writer's lifetime; it calls back on char data load.
    _on_load: Closure<dyn FnMut(JsValue)>,
}

impl HanziWriterEngine {
    pub fn create(
        target: &web_sys::Element,
        character: char,
        mut on_stroke_count: impl FnMut(usize) + 'static,
    ) -> Self {
        let on_load = Closure::wrap(Box::new(move |data: JsValue| {
            let count = js_sys::Reflect::get(&data, &JsValue::from_str("strokes"))
                .ok()
                .and_then(|strokes| {
                    js_sys::Reflect::get(&strokes, &JsValue::from_str("length")).ok()
                })
                .and_then(|len| len.as_f64())
                .unwrap_or(0.0) as usize;
            on_stroke_count(count);
        }) as Box<dyn FnMut(JsValue)>);

        let options = js_sys::Object::new();
        set_prop(&options, "width", &260.into());
        set_prop(&options, "height", &260.into());
        set_prop(&options, "padding", &10.into());
        set_prop(&options, "showOutline", &true.into());
        set_prop(&options, "strokeAnimationSpeed", &1.into());
        set_prop(&options, "delayBetweenStrokes", &200.into());
        set_prop(&options, "strokeColor", &JsValue::from_str(super::INK_COLOR));
        set_prop(&options, "radicalColor", &JsValue::from_str("#166534"));
        set_prop(&options, "outlineColor", &JsValue::from_str("#DDD"));
        set_prop(&options, "drawingWidth", &20.into());
        set_prop(&options, "showCharacter", &true.into());
        set_prop(&options, "showHintAfterMisses", &3.into());
        set_prop(&options, "highlightOnComplete", &true.into());
        set_prop(&options, "onLoadCharDataSuccess", on_load.as_ref());

        let writer = JsHanziWriter::create(target, &character.to_string(), &options);
        Self {
            writer,
            _on_load: on_load,
        }
    }
}

impl StrokeAnimator for HanziWriterEngine {
    fn animate_character(&self) {
        self.writer.animate_character();
    }

    async fn animate_stroke(&self, index: usize) {
        // The promise only rejects if the writer was torn down mid-animation;
        // nothing to do about it either way.
        let _ = JsFuture::from(self.writer.animate_stroke(index as u32)).await;
    }

    fn show_character(&self) {
        self.writer.show_character();
    }

    fn hide_character(&self) {
        self.writer.hide_character();
    }

    fn show_outline(&self) {
        self.writer.show_outline();
    }

    fn update_color(&self, channel: &str, color: &str) {
        self.writer.update_color(channel, color);
    }

    fn quiz(&self, hooks: QuizHooks) {
        let options = js_sys::Object::new();

        if let Some(mut on_mistake) = hooks.on_mistake {
            let cb = Closure::wrap(Box::new(move |_stroke: JsValue| on_mistake())
                as Box<dyn FnMut(JsValue)>);
            set_prop(&options, "onMistake", cb.as_ref());
            cb.forget();
        }
        if let Some(mut on_correct) = hooks.on_correct_stroke {
            let cb = Closure::wrap(Box::new(move |_stroke: JsValue| on_correct())
                as Box<dyn FnMut(JsValue)>);
            set_prop(&options, "onCorrectStroke", cb.as_ref());
            cb.forget();
        }

        let on_complete = std::cell::Cell::new(Some(hooks.on_complete));
        let cb = Closure::wrap(Box::new(move |summary: JsValue| {
            if let Some(hook) = on_complete.take() {
                hook(parse_summary(&summary));
            }
        }) as Box<dyn FnMut(JsValue)>);
        set_prop(&options, "onComplete", cb.as_ref());
        cb.forget();

        self.writer.quiz(&options);
    }
}

/// Pull the completion summary out of the engine's callback payload:
/// `totalMistakes` plus the `mistakesOnStroke` index→count map.
fn parse_summary(summary: &JsValue) -> QuizSummary {
    let total_mistakes = js_sys::Reflect::get(summary, &JsValue::from_str("totalMistakes"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;

    let mut mistakes_on_stroke = Vec::new();
    if let Ok(map) = js_sys::Reflect::get(summary, &JsValue::from_str("mistakesOnStroke"))
        && map.is_object()
    {
        let entries = js_sys::Object::entries(&map.unchecked_into());
        for entry in entries.iter() {
            let pair: js_sys::Array = entry.unchecked_into();
            let index = pair.get(0).as_string().and_then(|s| s.parse::<usize>().ok());
            let count = pair.get(1).as_f64().map(|c| c as u32);
            if let (Some(index), Some(count)) = (index, count) {
                mistakes_on_stroke.push((index, count));
            }
        }
    }

    QuizSummary {
        total_mistakes,
        mistakes_on_stroke,
    }
}
