use sprs::CsMat;
use std::ops::RangeFull;

/// Selection along one axis of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Every row (or column), written `..`.
    All,
    /// A single row (or column).
    At(usize),
}

impl From<usize> for Selector {
    fn from(value: usize) -> Self {
        Self::At(value)
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

/// An index into a matrix.
///
/// Conversions exist from a single selector (`0` or `..`)
/// and from pairs of selectors (`(0, 1)`, `(.., ..)`, `(.., 2)`),
/// so any of these can be passed to
/// [`IndexAccess::entry`](crate::IndexAccess::entry).
/// Only `(.., ..)` and `(row, column)` are supported lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixIndex {
    /// One selector.
    Single(Selector),
    /// A (row, column) pair of selectors.
    Pair(Selector, Selector),
}

impl From<usize> for MatrixIndex {
    fn from(value: usize) -> Self {
        Self::Single(value.into())
    }
}

impl From<RangeFull> for MatrixIndex {
    fn from(value: RangeFull) -> Self {
        Self::Single(value.into())
    }
}

macro_rules! impl_pair_index {
    ($row: ty, $column: ty) => {
        impl From<($row, $column)> for MatrixIndex {
            fn from(value: ($row, $column)) -> Self {
                Self::Pair(value.0.into(), value.1.into())
            }
        }
    };
}

impl_pair_index!(usize, usize);
impl_pair_index!(RangeFull, RangeFull);
impl_pair_index!(usize, RangeFull);
impl_pair_index!(RangeFull, usize);

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::All => write!(f, ":"),
            Selector::At(i) => write!(f, "{i}"),
        }
    }
}

impl std::fmt::Display for MatrixIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixIndex::Single(s) => write!(f, "[{s}]"),
            MatrixIndex::Pair(r, c) => write!(f, "[{r}, {c}]"),
        }
    }
}

/// Result of a successful matrix lookup.
#[derive(Debug, Clone)]
pub enum Entry<'a> {
    /// The whole underlying matrix.
    Matrix(&'a CsMat<f64>),
    /// The value stored at one position.
    Scalar(f64),
}

impl<'a> Entry<'a> {
    /// The scalar, if this entry is one.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Entry::Scalar(value) => Some(*value),
            Entry::Matrix(_) => None,
        }
    }

    /// The matrix, if this entry is one.
    pub fn matrix(&self) -> Option<&'a CsMat<f64>> {
        match self {
            Entry::Matrix(matrix) => Some(*matrix),
            Entry::Scalar(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(MatrixIndex::from(3), MatrixIndex::Single(Selector::At(3)));
        assert_eq!(MatrixIndex::from(..), MatrixIndex::Single(Selector::All));
        assert_eq!(
            MatrixIndex::from((.., ..)),
            MatrixIndex::Pair(Selector::All, Selector::All)
        );
        assert_eq!(
            MatrixIndex::from((1, ..)),
            MatrixIndex::Pair(Selector::At(1), Selector::All)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MatrixIndex::from((.., 2)).to_string(), "[:, 2]");
        assert_eq!(MatrixIndex::from(0).to_string(), "[0]");
    }
}
