//! Project Orchestration
//!
//! Copy-on-write operations at the prompt-set-within-project and
//! project-within-root levels, including the last-element deletion
//! guards. Operations referencing a missing id are silent no-ops.

use crate::models::project::Project;
use crate::models::prompt_set::{PromptSet, ViewPreferencesUpdate};
use crate::services::ordering::move_item;

/// Map the prompt set matching `set_id` through `f`, leaving siblings
/// untouched. No-op if the id is not found.
pub fn with_prompt_set(
    project: &Project,
    set_id: &str,
    f: impl FnOnce(&PromptSet) -> PromptSet,
) -> Project {
    let mut f = Some(f);
    Project {
        prompt_sets: project
            .prompt_sets
            .iter()
            .map(|set| {
                if set.id == set_id {
                    match f.take() {
                        Some(f) => f(set),
                        None => set.clone(),
                    }
                } else {
                    set.clone()
                }
            })
            .collect(),
        ..project.clone()
    }
}

/// Map the project matching `project_id` through `f`, leaving siblings
/// untouched. No-op if the id is not found.
pub fn with_project(
    projects: &[Project],
    project_id: &str,
    f: impl FnOnce(&Project) -> Project,
) -> Vec<Project> {
    let mut f = Some(f);
    projects
        .iter()
        .map(|project| {
            if project.id == project_id {
                match f.take() {
                    Some(f) => f(project),
                    None => project.clone(),
                }
            } else {
                project.clone()
            }
        })
        .collect()
}

/// Append a new prompt set named `"New Set {n}"` (n = count + 1)
pub fn add_prompt_set(project: &Project) -> Project {
    let name = format!("New Set {}", project.prompt_sets.len() + 1);
    let mut prompt_sets = project.prompt_sets.clone();
    prompt_sets.push(PromptSet::new(name));
    Project {
        prompt_sets,
        ..project.clone()
    }
}

/// Remove the prompt set matching `id`.
///
/// Deleting the last remaining set is silently rejected; the project is
/// returned unchanged.
pub fn delete_prompt_set(project: &Project, id: &str) -> Project {
    if project.prompt_sets.len() <= 1 {
        return project.clone();
    }

    Project {
        prompt_sets: project
            .prompt_sets
            .iter()
            .filter(|set| set.id != id)
            .cloned()
            .collect(),
        ..project.clone()
    }
}

/// Replace the name of the prompt set matching `id` verbatim
pub fn rename_prompt_set(project: &Project, id: &str, name: &str) -> Project {
    with_prompt_set(project, id, |set| PromptSet {
        name: name.to_string(),
        ..set.clone()
    })
}

/// Apply a partial view-preference update to the prompt set matching `set_id`
pub fn update_view_preferences(
    project: &Project,
    set_id: &str,
    update: ViewPreferencesUpdate,
) -> Project {
    with_prompt_set(project, set_id, |set| {
        let mut view_preferences = set.view_preferences.clone();
        view_preferences.apply_update(update);
        PromptSet {
            view_preferences,
            ..set.clone()
        }
    })
}

/// Move one prompt set to a new position within the project
pub fn reorder_prompt_sets(project: &Project, from: usize, to: usize) -> Project {
    Project {
        prompt_sets: move_item(&project.prompt_sets, from, to),
        ..project.clone()
    }
}

/// Append a new project named `"New Project {n}"` (n = count + 1)
pub fn add_project(projects: &[Project]) -> Vec<Project> {
    let mut result = projects.to_vec();
    result.push(Project::new(format!("New Project {}", projects.len() + 1)));
    result
}

/// Remove the project matching `id`.
///
/// Deleting the last remaining project is silently rejected; the root
/// collection is returned unchanged.
pub fn delete_project(projects: &[Project], id: &str) -> Vec<Project> {
    if projects.len() <= 1 {
        return projects.to_vec();
    }

    projects
        .iter()
        .filter(|project| project.id != id)
        .cloned()
        .collect()
}

/// Replace the name of the project matching `id` verbatim
pub fn rename_project(projects: &[Project], id: &str, name: &str) -> Vec<Project> {
    with_project(projects, id, |project| Project {
        name: name.to_string(),
        ..project.clone()
    })
}

/// Move one project to a new position within the root collection
pub fn reorder_projects(projects: &[Project], from: usize, to: usize) -> Vec<Project> {
    move_item(projects, from, to)
}
