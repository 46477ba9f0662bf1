//! Workspace Editing Integration Tests
//!
//! Drives full editing flows through AppState the way a presentation
//! layer would: create, rename, reorder, and delete entities at every
//! level of the tree, then render prompts against the edited bindings.

use promptdeck::{AppState, DragGesture, MemoryStore};

// ============================================================================
// Helpers
// ============================================================================

fn fresh_state() -> AppState {
    AppState::new(Box::new(MemoryStore::new()))
}

fn first_ids(state: &AppState) -> (String, String) {
    let project = &state.projects()[0];
    (project.id.clone(), project.prompt_sets[0].id.clone())
}

// ============================================================================
// Project and prompt set lifecycle
// ============================================================================

#[test]
fn test_add_rename_delete_project() {
    let mut state = fresh_state();
    state.add_project();
    assert_eq!(state.projects().len(), 2);
    assert_eq!(state.projects()[1].name, "New Project 2");

    let new_id = state.projects()[1].id.clone();
    state.rename_project(&new_id, "Research");
    assert_eq!(state.projects()[1].name, "Research");

    state.delete_project(&new_id);
    assert_eq!(state.projects().len(), 1);
}

#[test]
fn test_last_project_and_last_set_are_protected() {
    let mut state = fresh_state();
    let (pid, _) = first_ids(&state);

    state.delete_project(&pid);
    assert_eq!(state.projects().len(), 1);

    // Reduce the first project to a single set, then try to delete it.
    let set_ids: Vec<_> = state.projects()[0]
        .prompt_sets
        .iter()
        .map(|s| s.id.clone())
        .collect();
    for set_id in &set_ids[1..] {
        state.delete_prompt_set(&pid, set_id);
    }
    assert_eq!(state.projects()[0].prompt_sets.len(), 1);

    state.delete_prompt_set(&pid, &set_ids[0]);
    assert_eq!(state.projects()[0].prompt_sets.len(), 1);
}

#[test]
fn test_prompt_set_naming_follows_count() {
    let mut state = fresh_state();
    let (pid, _) = first_ids(&state);

    state.add_prompt_set(&pid);
    let sets = &state.projects()[0].prompt_sets;
    assert_eq!(sets.last().unwrap().name, "New Set 3");
}

#[test]
fn test_reorder_prompt_sets_and_projects() {
    let mut state = fresh_state();
    state.add_project();
    state.add_project();
    let ids: Vec<_> = state.projects().iter().map(|p| p.id.clone()).collect();

    state.reorder_projects(0, 2);
    let reordered: Vec<_> = state.projects().iter().map(|p| p.id.clone()).collect();
    assert_eq!(reordered, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);

    // The starter project carries two sets; swap them.
    let pid = ids[0].clone();
    let set_ids: Vec<_> = state
        .get_project(&pid)
        .unwrap()
        .prompt_sets
        .iter()
        .map(|s| s.id.clone())
        .collect();
    state.reorder_prompt_sets(&pid, 1, 0);
    let after: Vec<_> = state
        .get_project(&pid)
        .unwrap()
        .prompt_sets
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(after[0], set_ids[1]);
    assert_eq!(after[1], set_ids[0]);
}

// ============================================================================
// Editing and rendering flow
// ============================================================================

#[test]
fn test_full_editing_and_render_flow() {
    let mut state = fresh_state();
    let (pid, sid) = first_ids(&state);

    // Add a variable, give it a real name and value.
    state.add_variable(&pid, &sid);
    let var_id = state
        .get_prompt_set(&pid, &sid)
        .unwrap()
        .variables
        .last()
        .unwrap()
        .id
        .clone();
    state.rename_variable(&pid, &sid, &var_id, "audience");
    state.set_variable_value(&pid, &sid, &var_id, "students");

    // Add a prompt that uses it.
    state.add_prompt(&pid, &sid);
    let prompt_id = state
        .get_prompt_set(&pid, &sid)
        .unwrap()
        .prompts
        .last()
        .unwrap()
        .id
        .clone();
    state.update_prompt(&pid, &sid, &prompt_id, "Explain {task} to {audience}");

    let rendered = state.render_prompt(&pid, &sid, &prompt_id).unwrap();
    assert_eq!(rendered, "Explain draft a marketing plan to students");

    // Clearing values leaves placeholders that no longer match bindings.
    state.clear_variable_values(&pid, &sid);
    let rendered = state.render_prompt(&pid, &sid, &prompt_id).unwrap();
    assert_eq!(rendered, "Explain  to ");
}

#[test]
fn test_view_preferences_update_via_state() {
    let mut state = fresh_state();
    let (pid, sid) = first_ids(&state);

    state.update_view_preferences(
        &pid,
        &sid,
        promptdeck::ViewPreferencesUpdate {
            split_ratio: Some(10.0),
            variables_panel_visible: Some(false),
            card_view: Some(true),
        },
    );

    let prefs = &state.get_prompt_set(&pid, &sid).unwrap().view_preferences;
    assert_eq!(prefs.split_ratio, 20.0);
    assert!(!prefs.variables_panel_visible);
    assert!(prefs.card_view);
}

// ============================================================================
// Drag gesture to reorder
// ============================================================================

#[test]
fn test_drag_gesture_drives_prompt_reorder() {
    let mut state = fresh_state();
    let (pid, sid) = first_ids(&state);
    let prompt_ids: Vec<_> = state
        .get_prompt_set(&pid, &sid)
        .unwrap()
        .prompts
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert!(prompt_ids.len() >= 2);

    let mut gesture = DragGesture::new();
    gesture.begin(prompt_ids[1].clone());
    gesture.hover(0);
    let drop = gesture.finish().unwrap();

    state.apply_prompt_drop(&pid, &sid, &drop);
    let after: Vec<_> = state
        .get_prompt_set(&pid, &sid)
        .unwrap()
        .prompts
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(after[0], prompt_ids[1]);
    assert_eq!(after[1], prompt_ids[0]);
}

#[test]
fn test_interrupted_gesture_never_mutates() {
    let mut state = fresh_state();
    let (pid, sid) = first_ids(&state);
    let before = state.get_prompt_set(&pid, &sid).unwrap().clone();

    // End without a matching start.
    let mut gesture = DragGesture::new();
    assert!(gesture.finish().is_none());

    // Start then cancel.
    gesture.begin(before.prompts[0].id.clone());
    gesture.hover(1);
    gesture.cancel();
    assert!(gesture.finish().is_none());

    assert_eq!(state.get_prompt_set(&pid, &sid).unwrap(), &before);
}

#[test]
fn test_stale_drop_for_removed_entry_is_noop() {
    let mut state = fresh_state();
    let (pid, sid) = first_ids(&state);
    let victim = state.get_prompt_set(&pid, &sid).unwrap().prompts[0]
        .id
        .clone();

    let mut gesture = DragGesture::new();
    gesture.begin(victim.clone());
    gesture.hover(1);

    // The dragged prompt disappears mid-gesture.
    state.remove_prompt(&pid, &sid, &victim);
    let before = state.get_prompt_set(&pid, &sid).unwrap().clone();

    let drop = gesture.finish().unwrap();
    state.apply_prompt_drop(&pid, &sid, &drop);
    assert_eq!(state.get_prompt_set(&pid, &sid).unwrap(), &before);
}
