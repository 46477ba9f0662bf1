//! Template Substitution Engine
//!
//! Pure text substitution of `{name}` placeholders. Bindings apply in
//! sequence order, each pass replacing literally against the text the
//! previous passes produced. Duplicate names therefore resolve by
//! position, not by map lookup.

use regex::Regex;

use crate::models::prompt_set::Variable;

/// Render a template by substituting every binding in sequence order.
///
/// Matching is a literal, case-sensitive search for `{` + name + `}`;
/// there is no escaping and no nested-brace handling. Placeholders with
/// no matching binding pass through verbatim. Empty-name bindings are
/// skipped. Never fails.
pub fn render(template: &str, bindings: &[Variable]) -> String {
    let mut result = template.to_string();
    for binding in bindings {
        if binding.name.is_empty() {
            continue;
        }
        let placeholder = format!("{{{}}}", binding.name);
        result = result.replace(&placeholder, &binding.value);
    }
    result
}

/// Extract distinct `{word}` placeholder names in first-occurrence order.
///
/// A presentation aid for highlighting unbound placeholders; `render`
/// does not consult it.
pub fn placeholders(template: &str) -> Vec<String> {
    let re = Regex::new(r"\{(\w+)\}").unwrap();
    let mut names: Vec<String> = Vec::new();
    for capture in re.captures_iter(template) {
        let name = capture[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
