//! Backend Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod project;
mod task;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Stringify a backend rejection payload for the error banner
fn error_message(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&err)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| "backend request failed".to_string())
}

// Re-export all public items
pub use project::*;
pub use task::*;
