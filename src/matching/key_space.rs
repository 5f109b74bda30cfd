//! Finite key spaces.
//!
//! A key type that can list every one of its values lets a branch set without a
//! default prove, once and before resolution, that no lookup can go unmatched.

use std::fmt::Debug;
use std::hash::Hash;

/// A key type with a finite, known set of values.
///
/// ```
/// use keymatch::KeySpace;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Light {
///     Red,
///     Amber,
///     Green,
/// }
///
/// impl KeySpace for Light {
///     const ALL: &'static [Self] = &[Light::Red, Light::Amber, Light::Green];
/// }
/// ```
pub trait KeySpace: Eq + Hash + Debug + Sized + 'static {
    /// Every value of the key type.
    const ALL: &'static [Self];
}

impl KeySpace for bool {
    const ALL: &'static [Self] = &[false, true];
}
