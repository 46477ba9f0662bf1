//! Application State
//!
//! Owns the current workspace snapshot (the ordered collection of
//! projects) and exposes an entry point for every mutation the
//! presentation layer can dispatch. Each mutation computes a complete
//! new snapshot through the service functions, replaces the old one,
//! and schedules a best-effort durable write through the injected
//! store. Write failures are logged and never roll back memory.

use crate::models::project::{starter_projects, Project};
use crate::models::prompt_set::{PromptSet, ViewPreferencesUpdate};
use crate::services::gesture::PendingDrop;
use crate::services::{export, project as project_ops, prompts, template, variables};
use crate::storage::{Database, SnapshotStore};
use crate::utils::error::{AppError, AppResult};

/// Fixed key identifying the root workspace snapshot in the store
pub const STORAGE_KEY: &str = "projects";

/// Workspace state: one snapshot cell plus its persistence observer
pub struct AppState {
    projects: Vec<Project>,
    store: Box<dyn SnapshotStore>,
}

impl AppState {
    /// Create a state over an injected store, loading the persisted
    /// snapshot or seeding the starter workspace when none is readable.
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        let projects = match store.load(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(projects) => projects,
                Err(e) => {
                    tracing::warn!("Stored workspace snapshot is unreadable, seeding starter: {}", e);
                    starter_projects()
                }
            },
            Ok(None) => starter_projects(),
            Err(e) => {
                tracing::warn!("Failed to load workspace snapshot, seeding starter: {}", e);
                starter_projects()
            }
        };

        let state = Self { projects, store };
        state.persist();
        state
    }

    /// Create a state over the default on-disk database
    /// (`~/.promptdeck/data.db`)
    pub fn open_default() -> AppResult<Self> {
        Ok(Self::new(Box::new(Database::new()?)))
    }

    /// The current snapshot
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by id
    pub fn get_project(&self, project_id: &str) -> AppResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| AppError::not_found(format!("project {}", project_id)))
    }

    /// Look up a prompt set by id within a project
    pub fn get_prompt_set(&self, project_id: &str, set_id: &str) -> AppResult<&PromptSet> {
        self.get_project(project_id)?
            .prompt_sets
            .iter()
            .find(|s| s.id == set_id)
            .ok_or_else(|| AppError::not_found(format!("prompt set {}", set_id)))
    }

    /// Render a prompt with its set's variable bindings
    pub fn render_prompt(
        &self,
        project_id: &str,
        set_id: &str,
        prompt_id: &str,
    ) -> AppResult<String> {
        let set = self.get_prompt_set(project_id, set_id)?;
        let prompt = set
            .prompts
            .iter()
            .find(|p| p.id == prompt_id)
            .ok_or_else(|| AppError::not_found(format!("prompt {}", prompt_id)))?;
        Ok(template::render(&prompt.content, &set.variables))
    }

    // ------------------------------------------------------------------
    // Variable store operations
    // ------------------------------------------------------------------

    pub fn add_variable(&mut self, project_id: &str, set_id: &str) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            variables: variables::add(&set.variables),
            ..set.clone()
        })
    }

    pub fn rename_variable(
        &mut self,
        project_id: &str,
        set_id: &str,
        variable_id: &str,
        new_name: &str,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            variables: variables::rename(&set.variables, variable_id, new_name),
            ..set.clone()
        })
    }

    pub fn set_variable_value(
        &mut self,
        project_id: &str,
        set_id: &str,
        variable_id: &str,
        new_value: &str,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            variables: variables::set_value(&set.variables, variable_id, new_value),
            ..set.clone()
        })
    }

    pub fn remove_variable(
        &mut self,
        project_id: &str,
        set_id: &str,
        variable_id: &str,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            variables: variables::remove(&set.variables, variable_id),
            ..set.clone()
        })
    }

    pub fn clear_variable_values(&mut self, project_id: &str, set_id: &str) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            variables: variables::clear_all_values(&set.variables),
            ..set.clone()
        })
    }

    pub fn reorder_variables(
        &mut self,
        project_id: &str,
        set_id: &str,
        from: usize,
        to: usize,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            variables: variables::reorder(&set.variables, from, to),
            ..set.clone()
        })
    }

    /// Apply a completed variable drag. The origin index is resolved
    /// from the dragged id; a stale drop whose origin has vanished
    /// leaves the order unchanged.
    pub fn apply_variable_drop(
        &mut self,
        project_id: &str,
        set_id: &str,
        drop: &PendingDrop,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| {
            match set.variables.iter().position(|v| v.id == drop.origin_id) {
                Some(from) => PromptSet {
                    variables: variables::reorder(&set.variables, from, drop.target_index),
                    ..set.clone()
                },
                None => set.clone(),
            }
        })
    }

    // ------------------------------------------------------------------
    // Prompt collection operations
    // ------------------------------------------------------------------

    pub fn add_prompt(&mut self, project_id: &str, set_id: &str) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            prompts: prompts::add(&set.prompts),
            ..set.clone()
        })
    }

    pub fn update_prompt(
        &mut self,
        project_id: &str,
        set_id: &str,
        prompt_id: &str,
        new_content: &str,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            prompts: prompts::update(&set.prompts, prompt_id, new_content),
            ..set.clone()
        })
    }

    pub fn remove_prompt(
        &mut self,
        project_id: &str,
        set_id: &str,
        prompt_id: &str,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            prompts: prompts::remove(&set.prompts, prompt_id),
            ..set.clone()
        })
    }

    pub fn reorder_prompts(
        &mut self,
        project_id: &str,
        set_id: &str,
        from: usize,
        to: usize,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| PromptSet {
            prompts: prompts::reorder(&set.prompts, from, to),
            ..set.clone()
        })
    }

    /// Apply a completed prompt drag; see [`AppState::apply_variable_drop`]
    pub fn apply_prompt_drop(
        &mut self,
        project_id: &str,
        set_id: &str,
        drop: &PendingDrop,
    ) -> &[Project] {
        self.update_set(project_id, set_id, |set| {
            match set.prompts.iter().position(|p| p.id == drop.origin_id) {
                Some(from) => PromptSet {
                    prompts: prompts::reorder(&set.prompts, from, drop.target_index),
                    ..set.clone()
                },
                None => set.clone(),
            }
        })
    }

    // ------------------------------------------------------------------
    // Prompt set operations
    // ------------------------------------------------------------------

    pub fn add_prompt_set(&mut self, project_id: &str) -> &[Project] {
        self.update_project(project_id, |p| project_ops::add_prompt_set(p))
    }

    pub fn delete_prompt_set(&mut self, project_id: &str, set_id: &str) -> &[Project] {
        self.update_project(project_id, |p| project_ops::delete_prompt_set(p, set_id))
    }

    pub fn rename_prompt_set(
        &mut self,
        project_id: &str,
        set_id: &str,
        name: &str,
    ) -> &[Project] {
        self.update_project(project_id, |p| {
            project_ops::rename_prompt_set(p, set_id, name)
        })
    }

    pub fn update_view_preferences(
        &mut self,
        project_id: &str,
        set_id: &str,
        update: ViewPreferencesUpdate,
    ) -> &[Project] {
        self.update_project(project_id, |p| {
            project_ops::update_view_preferences(p, set_id, update)
        })
    }

    pub fn reorder_prompt_sets(
        &mut self,
        project_id: &str,
        from: usize,
        to: usize,
    ) -> &[Project] {
        self.update_project(project_id, |p| {
            project_ops::reorder_prompt_sets(p, from, to)
        })
    }

    // ------------------------------------------------------------------
    // Project operations
    // ------------------------------------------------------------------

    pub fn add_project(&mut self) -> &[Project] {
        let next = project_ops::add_project(&self.projects);
        self.commit(next)
    }

    pub fn delete_project(&mut self, project_id: &str) -> &[Project] {
        let next = project_ops::delete_project(&self.projects, project_id);
        self.commit(next)
    }

    pub fn rename_project(&mut self, project_id: &str, name: &str) -> &[Project] {
        let next = project_ops::rename_project(&self.projects, project_id, name);
        self.commit(next)
    }

    pub fn reorder_projects(&mut self, from: usize, to: usize) -> &[Project] {
        let next = project_ops::reorder_projects(&self.projects, from, to);
        self.commit(next)
    }

    // ------------------------------------------------------------------
    // Import / export
    // ------------------------------------------------------------------

    /// Serialize a prompt set for export
    pub fn export_prompt_set(&self, project_id: &str, set_id: &str) -> AppResult<String> {
        export::export_prompt_set(self.get_prompt_set(project_id, set_id)?)
    }

    /// Serialize a project for export
    pub fn export_project(&self, project_id: &str) -> AppResult<String> {
        export::export_project(self.get_project(project_id)?)
    }

    /// Import a prompt set into a project from raw JSON.
    ///
    /// Validation failures surface as errors with the snapshot
    /// untouched; a missing target project is a silent no-op.
    pub fn import_prompt_set(&mut self, project_id: &str, raw: &str) -> AppResult<&[Project]> {
        let next = match self.projects.iter().find(|p| p.id == project_id) {
            Some(project) => {
                let updated = export::import_prompt_set(project, raw)?;
                project_ops::with_project(&self.projects, project_id, |_| updated)
            }
            None => {
                tracing::debug!("Import target project {} not found, skipping", project_id);
                return Ok(&self.projects);
            }
        };
        Ok(self.commit(next))
    }

    /// Import a project into the root collection from raw JSON
    pub fn import_project(&mut self, raw: &str) -> AppResult<&[Project]> {
        let next = export::import_project(&self.projects, raw)?;
        Ok(self.commit(next))
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn update_project(
        &mut self,
        project_id: &str,
        f: impl FnOnce(&Project) -> Project,
    ) -> &[Project] {
        let next = project_ops::with_project(&self.projects, project_id, f);
        self.commit(next)
    }

    fn update_set(
        &mut self,
        project_id: &str,
        set_id: &str,
        f: impl FnOnce(&PromptSet) -> PromptSet,
    ) -> &[Project] {
        let next = project_ops::with_project(&self.projects, project_id, |project| {
            project_ops::with_prompt_set(project, set_id, f)
        });
        self.commit(next)
    }

    /// Replace the snapshot and schedule a best-effort durable write
    fn commit(&mut self, next: Vec<Project>) -> &[Project] {
        self.projects = next;
        self.persist();
        &self.projects
    }

    fn persist(&self) {
        match serde_json::to_string(&self.projects) {
            Ok(raw) => {
                if let Err(e) = self.store.save(STORAGE_KEY, &raw) {
                    tracing::warn!("Failed to persist workspace snapshot: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize workspace snapshot: {}", e),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("projects", &self.projects.len())
            .finish()
    }
}
