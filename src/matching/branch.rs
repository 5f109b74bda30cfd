//! Branch values: a literal result or a deferred producer.

use std::fmt;

/// Boxed zero-argument producer stored in a [`Branch`].
pub type Producer<'a, R> = Box<dyn FnOnce() -> R + 'a>;

/// One branch of a branch set.
pub enum Branch<'a, R> {
    /// Literal result, returned as is.
    Value(R),
    /// Producer invoked once, only when this branch is selected.
    Producer(Producer<'a, R>),
    /// Explicitly absent. Resolution treats it exactly like a missing key.
    Absent,
}

impl<'a, R> Branch<'a, R> {
    /// Literal branch.
    pub fn value(value: R) -> Self {
        Self::Value(value)
    }

    /// Lazily evaluated branch.
    pub fn lazy<F>(producer: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        Self::Producer(Box::new(producer))
    }

    pub fn is_producer(&self) -> bool {
        matches!(self, Self::Producer(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// `None` for [`Branch::Absent`], the branch otherwise.
    pub(crate) fn present(self) -> Option<Self> {
        match self {
            Self::Absent => None,
            branch => Some(branch),
        }
    }

    /// Produce the result, invoking the producer if there is one.
    ///
    /// Returns `None` for [`Branch::Absent`].
    pub fn resolve(self) -> Option<R> {
        match self {
            Self::Value(value) => Some(value),
            Self::Producer(producer) => Some(producer()),
            Self::Absent => None,
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Branch<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_value_resolves_directly() {
        assert_eq!(Branch::value(7).resolve(), Some(7));
    }

    #[test]
    fn test_producer_runs_only_on_resolve() {
        let calls = Cell::new(0);
        let branch = Branch::lazy(|| {
            calls.set(calls.get() + 1);
            "computed"
        });

        assert!(branch.is_producer());
        assert_eq!(calls.get(), 0);
        assert_eq!(branch.resolve(), Some("computed"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_absent() {
        let branch: Branch<'_, u8> = Branch::Absent;
        assert!(branch.is_absent());
        assert!(Branch::<u8>::Absent.present().is_none());
        assert_eq!(branch.resolve(), None);
    }

    #[test]
    fn test_debug_hides_producer() {
        assert_eq!(format!("{:?}", Branch::value(1)), "Value(1)");
        assert_eq!(format!("{:?}", Branch::lazy(|| 1)), "Producer(..)");
    }
}
