//! Client for the generative-AI text oracle (Gemini `generateContent` REST
//! endpoint). Three operations: pinyin annotation, vocabulary suggestion and
//! handwriting feedback. Each is a single fetch with no retry or timeout;
//! failures are logged to the console and fall closed to fixed strings so the
//! UI degrades instead of erroring.
//!
//! Prompt builders and payload shapes are plain Rust (native-testable); only
//! the fetch itself touches the browser.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::practice::FeedbackRequest;
use crate::presets::{ContentPreset, DifficultyLevel};
use crate::sheet::{CharacterEntry, extract_hanzi};

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Suggestion context when none is given (free "smart generate" without a
/// preset uses its own context, see [`SMART_GENERATE_CONTEXT`]).
pub const DEFAULT_SUGGESTION_CONTEXT: &str =
    "Generate a list of 10-15 distinct, common Chinese characters";

/// Context for the sidebar's one-click "AI 帮我想几个字" button.
pub const SMART_GENERATE_CONTEXT: &str = "Generate random interesting words";

/// Vocabulary returned when the oracle answers but with an empty payload.
pub const FALLBACK_VOCABULARY: &str = "天地人你我他";

/// Vocabulary returned when the suggestion request itself fails.
pub const FALLBACK_VOCABULARY_EXTENDED: &str = "天地人你我他金木水火土";

/// Feedback used when the oracle answers with an empty payload.
pub fn empty_payload_feedback(total_mistakes: u32) -> &'static str {
    if total_mistakes == 0 {
        "写得真棒！笔画非常流畅。"
    } else {
        "继续加油，注意笔顺哦！"
    }
}

/// Feedback used when the feedback request fails outright.
pub fn fallback_feedback(total_mistakes: u32) -> &'static str {
    if total_mistakes == 0 {
        "太棒了！你的笔顺完全正确。"
    } else {
        "没关系，再试一次，注意观察红色的笔画提示。"
    }
}

// --- Prompt builders ---------------------------------------------------------

pub fn pinyin_prompt(clean_text: &str) -> String {
    format!(
        "Provide the Pinyin (with tone marks) for the following Chinese characters: \"{clean_text}\". Return a JSON array."
    )
}

pub fn suggestion_prompt(prompt_context: &str, difficulty: DifficultyLevel) -> String {
    let context = if prompt_context.is_empty() {
        DEFAULT_SUGGESTION_CONTEXT
    } else {
        prompt_context
    };
    format!(
        "{context}. {} Suitable for a Grade 1 primary school student. Return them as a single string of characters without punctuation.",
        difficulty.prompt_constraint()
    )
}

/// Composite context for merging several textbook units into one sheet.
/// Overrides the default 10-15 character count with a comprehensive list.
pub fn merged_units_context(units: &[&ContentPreset]) -> String {
    let names: Vec<&str> = units.iter().map(|p| p.display_name).collect();
    let contexts: Vec<&str> = units.iter().map(|p| p.prompt_context).collect();
    format!(
        "Generate a comprehensive vocabulary list (20-30 characters) that covers content from the following Grade 1 textbook units: {}. Contexts: {}. Ensure the list is merged and duplicates are removed.",
        names.join(", "),
        contexts.join(" ")
    )
}

pub fn feedback_prompt(request: &FeedbackRequest) -> String {
    let indices: Vec<String> = request
        .missed_strokes
        .iter()
        .map(|i| (i + 1).to_string())
        .collect();
    format!(
        "Role: A supportive Chinese calligraphy teacher for Grade 1 students.\n\
         Task: Evaluate the student's handwriting practice for the character \"{}\".\n\
         Data:\n\
         - Total Mistakes: {}\n\
         - Problematic Stroke Indices (1-based): [{}]\n\n\
         Requirements:\n\
         1. Language: Chinese (Simplified).\n\
         2. Tone: Warm, encouraging, simple (suitable for a 6-year-old).\n\
         3. Content:\n\
            - If perfect (0 mistakes): Praise their stroke order accuracy and give a tip on character structure/balance (e.g., \"Left narrow, right wide\").\n\
            - If mistakes exist: Identify the likely stroke type (e.g., Heng, Shu, Pie, Na) corresponding to the problematic indices and give specific advice (e.g., \"Note that the 3rd stroke is a Horizontal stroke, try to keep it straight\").\n\
         4. Length: Max 2 sentences.",
        request.character,
        request.total_mistakes,
        indices.join(", ")
    )
}

// --- Response schemas (the oracle is asked for constrained JSON) -------------

fn pinyin_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "char": { "type": "STRING", "description": "The Chinese character" },
                "pinyin": { "type": "STRING", "description": "The Pinyin with tone marks" }
            },
            "required": ["char", "pinyin"]
        }
    })
}

fn suggestion_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "words": {
                "type": "STRING",
                "description": "A string of characters suitable for Grade 1 practice, no spaces or punctuation."
            }
        }
    })
}

fn feedback_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "comment": {
                "type": "STRING",
                "description": "Encouraging feedback in Chinese, under 50 words."
            }
        }
    })
}

// --- Wire shapes -------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct AnnotatedChar {
    #[serde(rename = "char")]
    character: String,
    #[serde(default)]
    pinyin: String,
}

#[derive(Deserialize)]
struct SuggestedWords {
    #[serde(default)]
    words: String,
}

#[derive(Deserialize)]
struct FeedbackComment {
    #[serde(default)]
    comment: String,
}

// --- Transport ---------------------------------------------------------------

fn api_key() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    js_sys::Reflect::get(&window, &JsValue::from_str("GEMINI_API_KEY"))?
        .as_string()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| JsValue::from_str("GEMINI_API_KEY not set on window"))
}

/// POST one prompt and return the model's text part (itself a JSON document,
/// per the response schema). `Err` covers network, HTTP and envelope-shape
/// failures alike; callers map all of them to their fallback.
async fn generate_content(prompt: String, schema: Value) -> Result<String, JsValue> {
    let key = api_key()?;
    let url = format!("{ENDPOINT_BASE}/{MODEL}:generateContent?key={key}");

    let payload = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: schema,
        },
    };
    let body = serde_json::to_string(&payload)
        .map_err(|e| JsValue::from_str(&format!("encode request: {e}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "oracle returned HTTP {}",
            response.status()
        )));
    }
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))?;

    let envelope: GenerateResponse = serde_json::from_str(&text)
        .map_err(|e| JsValue::from_str(&format!("decode envelope: {e}")))?;
    let inner = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default();
    Ok(inner)
}

fn warn(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(context), err);
}

// --- Operations --------------------------------------------------------------

/// Annotate each hanzi in `text` with pinyin. Non-CJK input is stripped first;
/// nothing left means no request and an empty result. On any failure every
/// character comes back with empty pinyin so the sheet still renders.
pub async fn annotate_pinyin(text: &str) -> Vec<CharacterEntry> {
    let hanzi = extract_hanzi(text);
    if hanzi.is_empty() {
        return Vec::new();
    }
    let clean: String = hanzi.iter().collect();

    match generate_content(pinyin_prompt(&clean), pinyin_schema()).await {
        Ok(inner) => match serde_json::from_str::<Vec<AnnotatedChar>>(&inner) {
            Ok(items) => items
                .into_iter()
                .filter_map(|item| {
                    let c = item.character.chars().next()?;
                    Some(CharacterEntry::new(c, item.pinyin))
                })
                .collect(),
            Err(e) => {
                warn("pinyin payload malformed", &JsValue::from_str(&e.to_string()));
                hanzi
                    .into_iter()
                    .map(|c| CharacterEntry::new(c, ""))
                    .collect()
            }
        },
        Err(e) => {
            warn("pinyin annotation failed", &e);
            hanzi
                .into_iter()
                .map(|c| CharacterEntry::new(c, ""))
                .collect()
        }
    }
}

/// Ask the oracle for a string of practice characters. Empty payload and
/// request failure fall back to the two fixed default strings.
pub async fn suggest_vocabulary(prompt_context: &str, difficulty: DifficultyLevel) -> String {
    match generate_content(
        suggestion_prompt(prompt_context, difficulty),
        suggestion_schema(),
    )
    .await
    {
        Ok(inner) => {
            let words = serde_json::from_str::<SuggestedWords>(&inner)
                .map(|s| s.words)
                .unwrap_or_default();
            if words.is_empty() {
                FALLBACK_VOCABULARY.into()
            } else {
                words
            }
        }
        Err(e) => {
            warn("vocabulary suggestion failed", &e);
            FALLBACK_VOCABULARY_EXTENDED.into()
        }
    }
}

/// Turn a quiz result into a short teacher comment. Two canned fallbacks,
/// both keyed on whether the run was mistake-free.
pub async fn critique_handwriting(request: &FeedbackRequest) -> String {
    match generate_content(feedback_prompt(request), feedback_schema()).await {
        Ok(inner) => {
            let comment = serde_json::from_str::<FeedbackComment>(&inner)
                .map(|f| f.comment)
                .unwrap_or_default();
            if comment.is_empty() {
                empty_payload_feedback(request.total_mistakes).into()
            } else {
                comment
            }
        }
        Err(e) => {
            warn("handwriting feedback failed", &e);
            fallback_feedback(request.total_mistakes).into()
        }
    }
}
