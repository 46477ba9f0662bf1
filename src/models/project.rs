//! Project Models
//!
//! The top-level container of prompt sets, and the starter workspace
//! seeded on first launch.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::prompt_set::{Prompt, PromptSet, Variable};

/// A user-owned container of prompt sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque identifier, globally unique
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered prompt sets; user deletion never empties this
    pub prompt_sets: Vec<PromptSet>,
}

impl Project {
    /// Create a project with a fresh id and one starter prompt set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            prompt_sets: vec![PromptSet::new("New Set 1")],
        }
    }
}

/// Build the default workspace seeded when the store holds no snapshot:
/// one project with two sample sets exercising `{name}` placeholders.
pub fn starter_projects() -> Vec<Project> {
    let first_set = PromptSet {
        id: Uuid::new_v4().to_string(),
        name: "Prompt Set".to_string(),
        variables: vec![
            Variable::new("name", "Ana"),
            Variable::new("role", "guide"),
            Variable::new("task", "draft a marketing plan"),
        ],
        prompts: vec![
            Prompt::new("Hello {name}\nYou are {role}\nplease help me with {task}"),
            Prompt::new("Now, as a {role}, for the {task}"),
        ],
        view_preferences: Default::default(),
    };

    let second_set = PromptSet {
        id: Uuid::new_v4().to_string(),
        name: "Prompt Set 2".to_string(),
        variables: vec![
            Variable::new("name", "Maria"),
            Variable::new("role", "expert"),
        ],
        prompts: vec![Prompt::new("Hi {name}, as a {role}, could you help me out?")],
        view_preferences: Default::default(),
    };

    vec![Project {
        id: Uuid::new_v4().to_string(),
        name: "My First Project".to_string(),
        prompt_sets: vec![first_set, second_set],
    }]
}
