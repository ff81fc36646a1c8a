//! Hanzi Copybook core crate.
//!
//! Browser-based generator for printable Grade-1 Chinese handwriting
//! worksheets (字帖), plus an interactive stroke-order practice view.
//! Vocabulary suggestions, pinyin annotation and handwriting feedback come
//! from a generative-AI text oracle; stroke animation and quizzing delegate
//! to the external HanziWriter engine behind a capability trait.
//!
//! All worksheet layout and practice-session logic is pure Rust and runs
//! under native `cargo test`; DOM, fetch and JS-engine plumbing is confined
//! to the render and view modules.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod app;
pub mod practice;
pub mod presets;
pub mod sheet;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the copybook application into the page body.
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    app::start_app()
}
