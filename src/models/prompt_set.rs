//! Prompt Set Models
//!
//! Data structures for prompt sets: variables, prompts, and per-set
//! view preferences. These shapes double as the import/export wire format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lower bound for the variables/prompts split ratio (percent)
pub const SPLIT_RATIO_MIN: f32 = 20.0;
/// Upper bound for the variables/prompts split ratio (percent)
pub const SPLIT_RATIO_MAX: f32 = 80.0;

/// A named string binding used to fill `{name}` placeholders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Opaque identifier, unique within its prompt set
    pub id: String,
    /// Placeholder key (non-empty)
    pub name: String,
    /// Bound value; empty is valid
    pub value: String,
}

impl Variable {
    /// Create a variable with a freshly synthesized id
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A template string with `{name}`-style placeholders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Opaque identifier, unique within its prompt set
    pub id: String,
    /// Template body; may be empty or contain malformed placeholders
    pub content: String,
}

impl Prompt {
    /// Create a prompt with a freshly synthesized id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
        }
    }
}

/// Per-set view preferences persisted alongside the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPreferences {
    /// Variables panel width as a percentage, clamped to [20, 80]
    pub split_ratio: f32,
    /// Whether the variables panel is shown
    pub variables_panel_visible: bool,
    /// Card view instead of list view
    pub card_view: bool,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            split_ratio: 50.0,
            variables_panel_visible: true,
            card_view: false,
        }
    }
}

/// View preferences update request (partial update)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPreferencesUpdate {
    pub split_ratio: Option<f32>,
    pub variables_panel_visible: Option<bool>,
    pub card_view: Option<bool>,
}

impl ViewPreferences {
    /// Apply a partial update, clamping the split ratio to its bounds
    pub fn apply_update(&mut self, update: ViewPreferencesUpdate) {
        if let Some(ratio) = update.split_ratio {
            self.split_ratio = ratio.clamp(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX);
        }
        if let Some(visible) = update.variables_panel_visible {
            self.variables_panel_visible = visible;
        }
        if let Some(card_view) = update.card_view {
            self.card_view = card_view;
        }
    }
}

/// A named bundle of variables and prompts sharing a substitution context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSet {
    /// Opaque identifier, unique within its project
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered variable bindings
    pub variables: Vec<Variable>,
    /// Ordered prompt templates
    pub prompts: Vec<Prompt>,
    /// View preferences; defaults applied when absent from imports
    #[serde(default)]
    pub view_preferences: ViewPreferences,
}

impl PromptSet {
    /// Create a prompt set with a fresh id, no variables, and one default prompt
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            variables: Vec::new(),
            prompts: vec![Prompt::new("New prompt")],
            view_preferences: ViewPreferences::default(),
        }
    }
}
