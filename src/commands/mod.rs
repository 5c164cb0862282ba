//! Browser Commands
//!
//! Frontend glue to browser facilities, organized by concern.

mod document;
mod storage;

use wasm_bindgen::JsValue;

// Re-export all public items
pub use document::*;
pub use storage::*;

/// Readable message out of a thrown JS value
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
