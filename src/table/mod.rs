//! Branch tables loaded from configuration.
//!
//! # Data Flow
//! ```text
//! table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, required keys)
//!     → BranchTable<V> (literal branches + optional `_default`)
//!     → resolve(key) or into_parts() → typed Branches
//! ```
//!
//! # Design Decisions
//! - Only literal branches; producers are added in code via `into_parts`
//! - The reserved default key is `_default`
//! - Validation separates syntactic (serde) from semantic checks and returns
//!   every error, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_table, load_table_covering, parse_table, TableError};
pub use schema::{BranchTable, DEFAULT_KEY};
pub use validation::{validate_table, ValidationError};
