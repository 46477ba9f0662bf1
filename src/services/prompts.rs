//! Prompt Collection Operations
//!
//! Copy-on-write operations over the ordered prompts of one prompt set.
//! Mirrors the variable store operations for `{id, content}` entries.

use crate::models::prompt_set::Prompt;
use crate::services::ordering::move_item;

/// Default content given to a freshly added prompt
pub const DEFAULT_PROMPT_CONTENT: &str = "New prompt";

/// Append a new prompt with a fresh id and default content
pub fn add(prompts: &[Prompt]) -> Vec<Prompt> {
    let mut result = prompts.to_vec();
    result.push(Prompt::new(DEFAULT_PROMPT_CONTENT));
    result
}

/// Replace the content of the prompt matching `id` verbatim.
///
/// No validation: empty content and malformed placeholders are allowed.
pub fn update(prompts: &[Prompt], id: &str, new_content: &str) -> Vec<Prompt> {
    prompts
        .iter()
        .map(|prompt| {
            if prompt.id == id {
                Prompt {
                    content: new_content.to_string(),
                    ..prompt.clone()
                }
            } else {
                prompt.clone()
            }
        })
        .collect()
}

/// Delete the prompt matching `id`; emptying the collection is allowed
pub fn remove(prompts: &[Prompt], id: &str) -> Vec<Prompt> {
    prompts
        .iter()
        .filter(|prompt| prompt.id != id)
        .cloned()
        .collect()
}

/// Move one prompt to a new position; see [`move_item`] for bounds rules
pub fn reorder(prompts: &[Prompt], from: usize, to: usize) -> Vec<Prompt> {
    move_item(prompts, from, to)
}
