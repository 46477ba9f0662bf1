//! Variable Store Operations
//!
//! Copy-on-write operations over the ordered variable bindings of one
//! prompt set. Every function returns a new collection; the input is
//! never mutated. Operations referencing a missing id are silent no-ops.

use crate::models::prompt_set::Variable;
use crate::services::ordering::move_item;

/// Default name given to a freshly added variable
pub const DEFAULT_VARIABLE_NAME: &str = "new_variable";

/// Append a new variable with a fresh id, default name, and empty value
pub fn add(variables: &[Variable]) -> Vec<Variable> {
    let mut result = variables.to_vec();
    result.push(Variable::new(DEFAULT_VARIABLE_NAME, ""));
    result
}

/// Rename the variable matching `id`.
///
/// A blank `new_name` (empty or whitespace-only) is rejected silently
/// and the prior name retained.
pub fn rename(variables: &[Variable], id: &str, new_name: &str) -> Vec<Variable> {
    if new_name.trim().is_empty() {
        return variables.to_vec();
    }

    variables
        .iter()
        .map(|variable| {
            if variable.id == id {
                Variable {
                    name: new_name.to_string(),
                    ..variable.clone()
                }
            } else {
                variable.clone()
            }
        })
        .collect()
}

/// Replace the value of the variable matching `id`; empty is valid
pub fn set_value(variables: &[Variable], id: &str, new_value: &str) -> Vec<Variable> {
    variables
        .iter()
        .map(|variable| {
            if variable.id == id {
                Variable {
                    value: new_value.to_string(),
                    ..variable.clone()
                }
            } else {
                variable.clone()
            }
        })
        .collect()
}

/// Delete the variable matching `id`; emptying the store is allowed
pub fn remove(variables: &[Variable], id: &str) -> Vec<Variable> {
    variables
        .iter()
        .filter(|variable| variable.id != id)
        .cloned()
        .collect()
}

/// Set every value to the empty string, preserving ids, names, and order
pub fn clear_all_values(variables: &[Variable]) -> Vec<Variable> {
    variables
        .iter()
        .map(|variable| Variable {
            value: String::new(),
            ..variable.clone()
        })
        .collect()
}

/// Move one variable to a new position; see [`move_item`] for bounds rules
pub fn reorder(variables: &[Variable], from: usize, to: usize) -> Vec<Variable> {
    move_item(variables, from, to)
}
