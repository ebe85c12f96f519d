//! Project Commands
//!
//! Frontend bindings for project-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{error_message, invoke};
use crate::models::Project;

#[derive(Serialize)]
struct UpdateProjectFieldArgs<'a> {
    id: u32,
    field: &'a str,
    value: &'a str,
}

/// Fetch the full project snapshot
pub async fn list_projects() -> Result<Vec<Project>, String> {
    let result = invoke("list_projects", JsValue::NULL)
        .await
        .map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Update a single field on a project. Callers refetch the project
/// collection right after, success or not.
pub async fn update_project_field(id: u32, field: &str, value: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateProjectFieldArgs { id, field, value })
        .map_err(|e| e.to_string())?;
    invoke("update_project_field", js_args)
        .await
        .map_err(error_message)?;
    Ok(())
}
