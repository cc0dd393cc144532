//! # Special matrices from differential equations and linear algebra.
//!
//! The fixed-fixed matrix `K` is the second-difference matrix
//! of a system held fixed at both ends.
//!
//! ```
//! use delacourse::{FixedFixed, IndexAccess};
//!
//! let mut k = FixedFixed::new(3).unwrap();
//! assert_eq!(k.n().unwrap(), 3);
//! assert_eq!(k.entry((0, 0)).unwrap().scalar(), Some(2.0));
//! assert_eq!(k.entry((0, 1)).unwrap().scalar(), Some(-1.0));
//!
//! let x = k.solve_unit().unwrap();
//! assert!((x[0] - 1.5).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod macros;

pub mod bands;
mod dimension;
mod error;
mod fixed_fixed;
mod index;
mod logging;
mod traits;

pub use dimension::{Dimension, MIN_DIMENSION};
pub use error::FixedFixedError;
pub use fixed_fixed::FixedFixed;
pub use index::{Entry, MatrixIndex, Selector};
pub use logging::{LogLevel, LogLocation, LoggerConfig, PROJECT_TARGET};
pub use traits::IndexAccess;
