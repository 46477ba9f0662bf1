//! Promptdeck - Prompt Template Manager Core
//!
//! This library provides the data-model core of a prompt template
//! manager. It includes:
//! - A hierarchical workspace model (projects, prompt sets, variables, prompts)
//! - Copy-on-write mutation services with last-element deletion guards
//! - A literal `{name}` template substitution engine
//! - JSON import/export with tolerant shape validation
//! - Snapshot persistence behind an injected key-value store (SQLite or in-memory)

pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::project::{starter_projects, Project};
pub use models::prompt_set::{
    Prompt, PromptSet, Variable, ViewPreferences, ViewPreferencesUpdate,
};
pub use services::gesture::{DragGesture, DragState, PendingDrop};
pub use services::template::{placeholders, render};
pub use state::{AppState, STORAGE_KEY};
pub use storage::{Database, MemoryStore, SnapshotStore};
pub use utils::error::{AppError, AppResult};
