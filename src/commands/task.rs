//! Task Commands
//!
//! Frontend bindings for task-related backend commands. Sub-task
//! updates go through the same item endpoint as tasks.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{error_message, invoke};
use crate::models::Task;

#[derive(Serialize)]
struct UpdateItemFieldArgs<'a> {
    id: u32,
    field: &'a str,
    value: &'a str,
}

/// Fetch the full task snapshot for the active section
pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("list_tasks", JsValue::NULL)
        .await
        .map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Update a single field on a task or sub-task
pub async fn update_item_field(id: u32, field: &str, value: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateItemFieldArgs { id, field, value })
        .map_err(|e| e.to_string())?;
    invoke("update_item_field", js_args)
        .await
        .map_err(error_message)?;
    Ok(())
}
