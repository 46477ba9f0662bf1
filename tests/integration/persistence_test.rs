//! Persistence Integration Tests
//!
//! Verifies that every mutation reaching AppState is durably written
//! through the store, and that a reopened database yields the same
//! workspace.

use tempfile::TempDir;

use promptdeck::{AppState, Database, SnapshotStore, STORAGE_KEY};

fn open_state(dir: &TempDir) -> AppState {
    let db = Database::open(dir.path().join("data.db")).unwrap();
    AppState::new(Box::new(db))
}

#[test]
fn test_first_open_seeds_and_persists_starter() {
    let dir = TempDir::new().unwrap();
    let state = open_state(&dir);
    assert_eq!(state.projects()[0].name, "My First Project");

    // The seed is written back immediately.
    let db = Database::open(dir.path().join("data.db")).unwrap();
    let raw = db.load(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("My First Project"));
}

#[test]
fn test_edits_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let (pid, sid);

    {
        let mut state = open_state(&dir);
        pid = state.projects()[0].id.clone();
        sid = state.projects()[0].prompt_sets[0].id.clone();

        state.rename_project(&pid, "Field Notes");
        state.add_variable(&pid, &sid);
        let var_id = state
            .get_prompt_set(&pid, &sid)
            .unwrap()
            .variables
            .last()
            .unwrap()
            .id
            .clone();
        state.rename_variable(&pid, &sid, &var_id, "topic");
        state.set_variable_value(&pid, &sid, &var_id, "soil chemistry");
    }

    let state = open_state(&dir);
    assert_eq!(state.projects()[0].name, "Field Notes");
    let set = state.get_prompt_set(&pid, &sid).unwrap();
    let topic = set.variables.last().unwrap();
    assert_eq!(topic.name, "topic");
    assert_eq!(topic.value, "soil chemistry");
}

#[test]
fn test_guarded_deletes_do_not_alter_persisted_snapshot() {
    let dir = TempDir::new().unwrap();
    let pid;

    {
        let mut state = open_state(&dir);
        pid = state.projects()[0].id.clone();
        state.delete_project(&pid);
    }

    let state = open_state(&dir);
    assert_eq!(state.projects().len(), 1);
    assert_eq!(state.projects()[0].id, pid);
}

#[test]
fn test_imported_data_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut state = open_state(&dir);
        let pid = state.projects()[0].id.clone();
        let json = state.export_project(&pid).unwrap();
        state.import_project(&json).unwrap();
    }

    let state = open_state(&dir);
    assert_eq!(state.projects().len(), 2);
    assert_eq!(state.projects()[1].name, "My First Project");
}
