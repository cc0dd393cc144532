use crate::error::FixedFixedError;
use crate::index::{Entry, MatrixIndex};

pub(crate) trait Validate {
    fn validate<F: FnOnce(String) -> FixedFixedError>(&self, err: F)
        -> Result<(), FixedFixedError>;
}

/// Indexed access to a matrix.
///
/// An index is either a full selector pair, `(.., ..)`,
/// giving the whole matrix, or a concrete `(row, column)`
/// pair giving the value stored there.
/// Every other form is a
/// [`FixedFixedError::MatrixIndexError`](crate::FixedFixedError::MatrixIndexError).
pub trait IndexAccess {
    /// Look up `index`.
    fn entry<I>(&self, index: I) -> Result<Entry<'_>, FixedFixedError>
    where
        I: Into<MatrixIndex>;
}
