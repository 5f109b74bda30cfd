//! Key-based branch matching.
//!
//! A `switch`/`match` expression as an ordinary function call: a key selects one
//! of several branches, each either a literal result or a zero-argument producer
//! invoked only when selected, with an optional default branch.
//!
//! ```
//! use keymatch::{match_key, Branches};
//!
//! let role = match_key("admin", Branches::new().on("admin", 30).on_with("guest", || 0));
//! assert_eq!(role, Ok(30));
//! ```

pub mod matching;
pub mod table;

pub use matching::{
    match_key, Branch, Branches, Defaulted, KeySpace, MatchError, MatchResult, Partial, Symbol, Total,
};
pub use table::{BranchTable, TableError};
