use crate::error::FixedFixedError;
use crate::traits::Validate;

/// The smallest row count of a [`FixedFixed`](crate::FixedFixed) matrix.
pub const MIN_DIMENSION: usize = 2;

/// The row (and column) count of a [`FixedFixed`](crate::FixedFixed) matrix.
///
/// This is a newtype wrapper for [`usize`](std::primitive::usize).
///
/// # Examples
///
/// ```
/// let n = delacourse::Dimension::try_from(3_usize).unwrap();
/// assert_eq!(n, 3);
/// assert!(delacourse::Dimension::try_from(1_usize).is_err());
/// assert!(delacourse::Dimension::try_from(-4_i64).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Dimension(usize);

impl Validate for Dimension {
    fn validate<F: FnOnce(String) -> FixedFixedError>(
        &self,
        err: F,
    ) -> Result<(), FixedFixedError> {
        if self.0 < MIN_DIMENSION {
            Err(err(invalid_dimension_message(self.0)))
        } else {
            Ok(())
        }
    }
}

fn invalid_dimension_message<T: std::fmt::Display>(value: T) -> String {
    format!("FixedFixed dimension must be n >= {MIN_DIMENSION}, got: {value}")
}

impl TryFrom<usize> for Dimension {
    type Error = FixedFixedError;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let rv = Self(value);
        rv.validate(FixedFixedError::DimensionError)?;
        Ok(rv)
    }
}

impl TryFrom<i64> for Dimension {
    type Error = FixedFixedError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match usize::try_from(value) {
            Ok(n) => Self::try_from(n),
            Err(_) => Err(FixedFixedError::DimensionError(
                invalid_dimension_message(value),
            )),
        }
    }
}

impl_newtype_traits!(Dimension);
