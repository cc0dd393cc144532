#![macro_use]

macro_rules! impl_newtype_traits {
    ($type: ty) => {
        impl From<$type> for usize {
            fn from(value: $type) -> usize {
                value.0
            }
        }

        impl PartialEq<usize> for $type {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$type> for usize {
            fn eq(&self, other: &$type) -> bool {
                *self == other.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($type), self.0)
            }
        }
    };
}
