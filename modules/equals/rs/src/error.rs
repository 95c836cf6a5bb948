use derive_more::{Constructor, Display, Error};

/// A required argument of a comparison was absent.
/// Raised before any element is accessed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, Error, Constructor)]
#[display("{argument} mustn't be absent")]
pub struct InvalidArgument {
    argument: &'static str,
}

impl InvalidArgument {
    /// Name of the absent argument.
    pub fn argument(&self) -> &'static str {
        self.argument
    }
}

/// Returns the check or raises `InvalidArgument` naming it.
pub(crate) fn require<E>(check: Option<E>, argument: &'static str) -> eyre::Result<E> {
    check.ok_or_else(|| InvalidArgument::new(argument).into())
}
