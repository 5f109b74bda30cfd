//! Branch sets.
//!
//! # Responsibilities
//! - Collect keyed branches and an optional default
//! - Track coverage in the type: `Partial`, `Defaulted` or `Total`
//! - Resolve a key, consuming the set
//!
//! # Design Decisions
//! - Coverage is a type parameter so that infallible `resolve` only exists when a
//!   default is present or every key of a finite key space has a branch
//! - Arms can only be added while the set is `Partial` or `Defaulted`; a `Total`
//!   set is frozen so its coverage cannot be undone
//! - Inserting an existing key replaces the earlier branch (last wins)

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::branch::Branch;
use super::error::{MatchError, MatchResult};
use super::key_space::KeySpace;

mod sealed {
    pub trait Sealed {}
}

/// What is known about a branch set's coverage.
pub trait Coverage<'a, R>: sealed::Sealed {
    fn has_fallback(&self) -> bool;

    fn into_fallback(self) -> Option<Branch<'a, R>>;
}

/// Coverage markers that still accept new arms.
pub trait Open: sealed::Sealed {}

/// No default and no proven coverage. Resolution may fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Partial;

/// Every key of a [`KeySpace`] has a present branch.
#[derive(Debug, Clone, Copy)]
pub struct Total;

/// A default branch exists. It is never [`Branch::Absent`].
pub struct Defaulted<'a, R> {
    fallback: Branch<'a, R>,
}

impl sealed::Sealed for Partial {}
impl sealed::Sealed for Total {}
impl<R> sealed::Sealed for Defaulted<'_, R> {}

impl Open for Partial {}
impl<R> Open for Defaulted<'_, R> {}

impl<'a, R> Coverage<'a, R> for Partial {
    fn has_fallback(&self) -> bool {
        false
    }

    fn into_fallback(self) -> Option<Branch<'a, R>> {
        None
    }
}

impl<'a, R> Coverage<'a, R> for Total {
    fn has_fallback(&self) -> bool {
        false
    }

    fn into_fallback(self) -> Option<Branch<'a, R>> {
        None
    }
}

impl<'a, R> Coverage<'a, R> for Defaulted<'a, R> {
    fn has_fallback(&self) -> bool {
        true
    }

    fn into_fallback(self) -> Option<Branch<'a, R>> {
        Some(self.fallback)
    }
}

/// A set of keyed branches plus, depending on `C`, a default.
pub struct Branches<'a, K, R, C = Partial> {
    arms: HashMap<K, Branch<'a, R>>,
    coverage: C,
}

impl<'a, K, R> Branches<'a, K, R, Partial>
where
    K: Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            arms: HashMap::new(),
            coverage: Partial,
        }
    }

    /// Add a literal default branch.
    pub fn otherwise(self, value: R) -> Branches<'a, K, R, Defaulted<'a, R>> {
        self.with_fallback(Branch::Value(value))
    }

    /// Add a lazily evaluated default branch.
    pub fn otherwise_with<F>(self, producer: F) -> Branches<'a, K, R, Defaulted<'a, R>>
    where
        F: FnOnce() -> R + 'a,
    {
        self.with_fallback(Branch::lazy(producer))
    }

    fn with_fallback(self, fallback: Branch<'a, R>) -> Branches<'a, K, R, Defaulted<'a, R>> {
        Branches {
            arms: self.arms,
            coverage: Defaulted { fallback },
        }
    }

    /// Check that every key of the key space has a present branch.
    ///
    /// All uncovered keys are reported, not just the first.
    pub fn exhaustive(self) -> MatchResult<Branches<'a, K, R, Total>>
    where
        K: KeySpace,
    {
        let missing: Vec<String> = K::ALL
            .iter()
            .filter(|key| !self.contains_key(*key))
            .map(|key| format!("{key:?}"))
            .collect();

        if !missing.is_empty() {
            tracing::debug!(missing = ?missing, "branch set does not cover its key space");
            return Err(MatchError::MissingBranches { keys: missing });
        }

        Ok(Branches {
            arms: self.arms,
            coverage: Total,
        })
    }
}

impl<K, R> Default for Branches<'_, K, R, Partial>
where
    K: Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, R, C> Branches<'a, K, R, C>
where
    K: Eq + Hash + fmt::Debug,
    C: Open,
{
    /// Add a literal branch.
    pub fn on(self, key: K, value: R) -> Self {
        self.on_branch(key, Branch::Value(value))
    }

    /// Add a lazily evaluated branch.
    pub fn on_with<F>(self, key: K, producer: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.on_branch(key, Branch::lazy(producer))
    }

    /// Add an explicitly absent branch. Looking it up falls through to the default.
    pub fn absent(self, key: K) -> Self {
        self.on_branch(key, Branch::Absent)
    }

    pub fn on_branch(mut self, key: K, branch: Branch<'a, R>) -> Self {
        if self.arms.contains_key(&key) {
            tracing::warn!(key = ?key, "branch replaced by a later arm with the same key");
        }
        self.arms.insert(key, branch);
        self
    }
}

impl<'a, K, R, C> Branches<'a, K, R, C>
where
    K: Eq + Hash,
    C: Coverage<'a, R>,
{
    /// Number of arms, absent ones included. The default is not counted.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Whether `key` has a present (non-absent) branch.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.arms.get(key).is_some_and(|branch| !branch.is_absent())
    }

    pub fn has_default(&self) -> bool {
        self.coverage.has_fallback()
    }

    /// Resolve `key`, failing with [`MatchError::UnmatchedKey`] when neither a
    /// present branch nor a default exists.
    pub fn try_resolve<Q>(mut self, key: &Q) -> MatchResult<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let arm = self.arms.remove(key);
        super::select(key, arm, self.coverage.into_fallback())
    }
}

impl<'a, K, R> Branches<'a, K, R, Defaulted<'a, R>>
where
    K: Eq + Hash,
{
    /// Resolve `key`, taking the default when it has no present branch.
    pub fn resolve<Q>(self, key: &Q) -> R
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        match self.try_resolve(key) {
            Ok(value) => value,
            Err(err) => unreachable!("{err}: a defaulted branch set always has a fallback"),
        }
    }
}

impl<'a, K, R> Branches<'a, K, R, Total>
where
    K: KeySpace,
{
    /// Resolve `key` in a set proven to cover its key space.
    ///
    /// Use [`Branches::try_resolve`] when the key may come from outside the key
    /// space.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not listed in [`KeySpace::ALL`], which means the key
    /// space implementation is incomplete.
    pub fn resolve<Q>(self, key: &Q) -> R
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        if !K::ALL.iter().any(|listed| <K as Borrow<Q>>::borrow(listed) == key) {
            panic!(
                "key {key:?} is not listed in {}::ALL",
                std::any::type_name::<K>()
            );
        }

        match self.try_resolve(key) {
            Ok(value) => value,
            Err(err) => unreachable!("{err}: exhaustive coverage was checked"),
        }
    }
}

impl<'a, K, R, C> fmt::Debug for Branches<'a, K, R, C>
where
    K: Eq + Hash + fmt::Debug,
    C: Coverage<'a, R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branches")
            .field("keys", &self.arms.keys().collect::<Vec<_>>())
            .field("has_default", &self.has_default())
            .finish()
    }
}
