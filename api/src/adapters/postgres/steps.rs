//! Storage encoding for ingredient and instruction lists
//!
//! The recipes table keeps each list in a single text column, items joined
//! with `|`. An empty list is stored as the empty string, so a step may be
//! neither empty nor contain the separator.

use crate::domain::entities::{is_storable_step, STEP_SEPARATOR};
use crate::error::DomainError;

/// Join steps for storage. Steps that would not split back are rejected.
pub fn flatten_steps(steps: &[String]) -> Result<String, DomainError> {
    if let Some(step) = steps.iter().find(|s| !is_storable_step(s)) {
        return Err(DomainError::Validation(format!(
            "'{}' is empty or contains '{}'",
            step, STEP_SEPARATOR
        )));
    }

    Ok(steps.join(STEP_SEPARATOR))
}

/// Split a stored column back into its steps
pub fn split_steps(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }

    stored.split(STEP_SEPARATOR).map(str::to_string).collect()
}
