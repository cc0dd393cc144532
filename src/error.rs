use thiserror::Error;

/// Error type for this crate.
///
/// # Example
///
/// A fixed-fixed matrix needs at least two rows.
///
/// ```
/// let result = delacourse::FixedFixed::new(1);
/// assert!(matches!(
///     result,
///     Err(delacourse::FixedFixedError::DimensionError(_))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FixedFixedError {
    /// Invalid requested dimension, or a
    /// non-square matrix found at access time.
    #[error("{0:?}")]
    DimensionError(String),
    /// Unsupported form of matrix index.
    #[error("{0:?}")]
    MatrixIndexError(String),
    /// The coefficient matrix could not be factored.
    #[error("{0:?}")]
    LinearAlgebraError(String),
    /// Unknown logging level name or value.
    #[error("{0:?}")]
    LogLevelError(String),
    /// The project logger could not be installed.
    #[error("{0:?}")]
    LoggerError(String),
    #[error(transparent)]
    /// Errors opening log destinations.
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}
