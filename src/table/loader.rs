//! Branch table loading from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::schema::{BranchTable, DEFAULT_KEY};
use super::validation::{validate_table, ValidationError};

/// Error type for branch table loading.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a branch table from TOML text.
pub fn parse_table<V: DeserializeOwned>(content: &str) -> Result<BranchTable<V>, TableError> {
    parse_table_covering(content, &[])
}

/// Load and validate a branch table from a TOML file.
pub fn load_table<V: DeserializeOwned>(path: &Path) -> Result<BranchTable<V>, TableError> {
    load_table_covering(path, &[])
}

/// Load a branch table that must cover `required` unless it has a default.
pub fn load_table_covering<V: DeserializeOwned>(
    path: &Path,
    required: &[&str],
) -> Result<BranchTable<V>, TableError> {
    let content = fs::read_to_string(path)?;
    let table = parse_table_covering(content.as_str(), required)?;

    tracing::debug!(
        path = %path.display(),
        entries = table.len(),
        has_default = table.has_default(),
        "Loaded branch table"
    );

    Ok(table)
}

fn parse_table_covering<V: DeserializeOwned>(
    content: &str,
    required: &[&str],
) -> Result<BranchTable<V>, TableError> {
    let table: BranchTable<V> = toml::from_str(content)?;

    if let Err(errors) = validate_table(&table, required) {
        tracing::warn!(errors = errors.len(), default_key = DEFAULT_KEY, "Branch table rejected");
        return Err(TableError::Validation(errors));
    }

    Ok(table)
}
