//! WASM bindings for untag-core.
//!
//! Exposes `transform` and `transformStrict` as `#[wasm_bindgen]` functions
//! callable from JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p untag-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/untag_wasm.wasm
//! ```

use untag_core::TransformOptions;
use wasm_bindgen::prelude::*;

/// Convert a type-tagged JSON document into compact plain JSON.
///
/// Throws a JS error if the input is not valid JSON or not an object.
#[wasm_bindgen]
pub fn transform(json: &str) -> std::result::Result<String, JsValue> {
    untag_core::transform(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Like `transform`, but only accepts nodes holding exactly one discriminator.
#[wasm_bindgen(js_name = transformStrict)]
pub fn transform_strict(json: &str) -> std::result::Result<String, JsValue> {
    untag_core::transform_with(json, &TransformOptions::strict())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
