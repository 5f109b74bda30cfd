//! Matcher subsystem.
//!
//! # Data Flow
//! ```text
//! Caller
//!     → branches.rs (build arms, optional default, coverage marker)
//!     → match_key / resolve (look up key)
//!         found, not absent → that branch
//!         otherwise         → default branch
//!         neither           → MatchError::UnmatchedKey
//!     → branch.rs (return literal or invoke producer once)
//! ```
//!
//! # Design Decisions
//! - Resolution consumes the branch set, so producers are `FnOnce` and literals
//!   are moved out without `Clone`
//! - An absent branch behaves exactly like a missing key
//! - Nothing is awaited; a producer returning a future hands that future back as is

pub mod branch;
pub mod branches;
pub mod error;
pub mod key_space;
mod macros;
pub mod symbol;

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

pub use branch::{Branch, Producer};
pub use branches::{Branches, Coverage, Defaulted, Open, Partial, Total};
pub use error::{MatchError, MatchResult};
pub use key_space::KeySpace;
pub use symbol::Symbol;

/// Resolve `key` against `branches`.
///
/// Returns the matching branch's result, invoking it if it is a producer. Falls
/// back to the default when the key has no present branch, and fails with
/// [`MatchError::UnmatchedKey`] when there is no default either.
///
/// ```
/// use keymatch::{match_key, Branches};
///
/// let result = match_key("c", Branches::new().on("a", "v1").on("b", "v2").otherwise("d"));
/// assert_eq!(result, Ok("d"));
/// ```
pub fn match_key<'a, K, Q, R, C>(key: &Q, branches: Branches<'a, K, R, C>) -> MatchResult<R>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + Debug + ?Sized,
    C: Coverage<'a, R>,
{
    branches.try_resolve(key)
}

/// Pick between a looked-up arm and a fallback, then resolve the winner.
pub(crate) fn select<'a, Q, R>(
    key: &Q,
    arm: Option<Branch<'a, R>>,
    fallback: Option<Branch<'a, R>>,
) -> MatchResult<R>
where
    Q: Debug + ?Sized,
{
    let branch = match arm.and_then(Branch::present) {
        Some(branch) => {
            tracing::trace!(key = ?key, producer = branch.is_producer(), "matched branch");
            branch
        }
        None => match fallback.and_then(Branch::present) {
            Some(branch) => {
                tracing::trace!(key = ?key, producer = branch.is_producer(), "no branch for key, using default");
                branch
            }
            None => {
                tracing::debug!(key = ?key, "no branch for key and no default");
                return Err(MatchError::unmatched(key));
            }
        },
    };

    branch.resolve().ok_or_else(|| MatchError::unmatched(key))
}
