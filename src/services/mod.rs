//! Services
//!
//! Business logic for the prompt manager core. Every mutation here is
//! copy-on-write: it takes the current collection and returns a new
//! snapshot, leaving the input untouched.

pub mod export;
pub mod gesture;
pub mod ordering;
pub mod project;
pub mod prompts;
pub mod template;
pub mod variables;

pub use export::{export_project, export_prompt_set, import_project, import_prompt_set};
pub use gesture::{DragGesture, DragState, PendingDrop};
pub use template::{placeholders, render};
