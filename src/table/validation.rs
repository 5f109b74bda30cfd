//! Branch table validation.
//!
//! # Responsibilities
//! - Reject tables that can never resolve anything
//! - Reject blank keys
//! - Check that required keys are covered when there is no default
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: (BranchTable, required keys) → Result<(), Vec<ValidationError>>

use thiserror::Error;

use super::schema::BranchTable;

/// A semantic problem with a branch table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No entries and no default.
    #[error("table has no entries and no _default")]
    EmptyTable,

    /// Entry key is empty or only whitespace.
    #[error("table contains a blank key: {0:?}")]
    BlankKey(String),

    /// A required key has no entry and there is no default to fall back on.
    #[error("required key {0:?} has no entry and the table has no _default")]
    Uncovered(String),
}

/// Validate `table`, requiring each of `required` unless the table has a default.
pub fn validate_table<V>(table: &BranchTable<V>, required: &[&str]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if table.is_empty() && !table.has_default() {
        errors.push(ValidationError::EmptyTable);
    }

    errors.extend(
        table
            .keys()
            .filter(|key| key.trim().is_empty())
            .map(|key| ValidationError::BlankKey(key.to_string())),
    );

    if !table.has_default() {
        errors.extend(
            required
                .iter()
                .filter(|key| table.get(key).is_none())
                .map(|key| ValidationError::Uncovered(key.to_string())),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
