//! Import/Export Service
//!
//! Serializes prompt sets and projects to pretty-printed JSON and
//! imports them back with tolerant minimal-shape validation. Imported
//! top-level ids are discarded and regenerated to avoid collisions.

use serde_json::Value;
use uuid::Uuid;

use crate::models::project::Project;
use crate::models::prompt_set::PromptSet;
use crate::utils::error::{AppError, AppResult};

/// Serialize a prompt set to pretty-printed JSON suitable for re-import
pub fn export_prompt_set(set: &PromptSet) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(set)?)
}

/// Serialize a project to pretty-printed JSON suitable for re-import
pub fn export_project(project: &Project) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(project)?)
}

/// Parse and validate a prompt set, append it to `project` under a
/// fresh id.
///
/// Validation checks only the minimal shape: a non-empty string `id`, a
/// non-empty string `name`, and array-typed `variables` and `prompts`.
/// Unknown fields are ignored and missing view preferences default. On
/// any failure the error describes the mismatch and `project` is left
/// untouched.
pub fn import_prompt_set(project: &Project, raw: &str) -> AppResult<Project> {
    let value = parse_object(raw, "prompt set")?;
    require_shape(&value, "prompt set", &["variables", "prompts"])?;

    let mut set: PromptSet = serde_json::from_value(value).map_err(|e| {
        AppError::validation(format!("prompt set JSON does not match the expected shape: {e}"))
    })?;
    set.id = Uuid::new_v4().to_string();

    let mut prompt_sets = project.prompt_sets.clone();
    prompt_sets.push(set);
    Ok(Project {
        prompt_sets,
        ..project.clone()
    })
}

/// Parse and validate a project, append it to the root collection under
/// a fresh id. Analogous to [`import_prompt_set`].
pub fn import_project(projects: &[Project], raw: &str) -> AppResult<Vec<Project>> {
    let value = parse_object(raw, "project")?;
    require_shape(&value, "project", &["promptSets"])?;

    let mut project: Project = serde_json::from_value(value).map_err(|e| {
        AppError::validation(format!("project JSON does not match the expected shape: {e}"))
    })?;
    project.id = Uuid::new_v4().to_string();

    let mut result = projects.to_vec();
    result.push(project);
    Ok(result)
}

fn parse_object(raw: &str, kind: &str) -> AppResult<Value> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::validation(format!("{kind} input is not valid JSON: {e}")))?;
    if !value.is_object() {
        return Err(AppError::validation(format!(
            "{kind} input must be a JSON object"
        )));
    }
    Ok(value)
}

fn require_shape(value: &Value, kind: &str, array_fields: &[&str]) -> AppResult<()> {
    for field in ["id", "name"] {
        match value.get(field).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => {}
            _ => {
                return Err(AppError::validation(format!(
                    "{kind} JSON is missing a non-empty `{field}` field"
                )))
            }
        }
    }

    for field in array_fields {
        if !value.get(field).map(Value::is_array).unwrap_or(false) {
            return Err(AppError::validation(format!(
                "{kind} JSON is missing an array-typed `{field}` field"
            )));
        }
    }

    Ok(())
}
