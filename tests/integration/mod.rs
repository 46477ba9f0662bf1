//! Integration Tests Module
//!
//! Cross-module tests for the prompt manager core. Tests cover full
//! workspace editing flows through AppState, import/export round trips,
//! and snapshot durability across database reopens.

// Workspace editing flows (state + services)
mod workspace_test;


// Snapshot durability across store reopens
mod persistence_test;
