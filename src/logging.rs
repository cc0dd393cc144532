//! Project logger configuration.
//!
//! The library only emits [`tracing`] events.
//! Nothing is recorded until a caller builds a
//! [`Dispatch`] from a [`LoggerConfig`] and either
//! scopes it with [`tracing::dispatcher::with_default`]
//! or installs it with [`LoggerConfig::init`].
//!
//! # Example
//!
//! ```
//! let yaml = "
//! level: debug
//! locations: [stderr]
//! ";
//! let config = delacourse::LoggerConfig::from_yaml(yaml).unwrap();
//! let dispatch = config.dispatch().unwrap();
//! tracing::dispatcher::with_default(&dispatch, || {
//!     delacourse::FixedFixed::new(4).unwrap();
//! });
//! ```

use crate::error::FixedFixedError;
use serde::Deserialize;
use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Level};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, Layer, Registry};

/// Events are recorded only for this target and its children.
pub const PROJECT_TARGET: &str = "delacourse";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Verbosity of the project logger.
///
/// Parsed from a level name or from a numeric level
/// (`10` debug, `20` info, `30` warning, `40` and up error,
/// below `10` trace).
///
/// ```
/// use delacourse::LogLevel;
///
/// let by_name = LogLevel::try_from("warning").unwrap();
/// let by_value = LogLevel::try_from(30_i64).unwrap();
/// assert_eq!(by_name, by_value);
/// assert!(LogLevel::try_from("loud").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLevel")]
pub struct LogLevel(Level);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Value(i64),
    Name(String),
}

impl TryFrom<RawLevel> for LogLevel {
    type Error = FixedFixedError;

    fn try_from(value: RawLevel) -> Result<Self, Self::Error> {
        match value {
            RawLevel::Value(v) => Self::try_from(v),
            RawLevel::Name(name) => Self::try_from(name.as_str()),
        }
    }
}

impl TryFrom<&str> for LogLevel {
    type Error = FixedFixedError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let level = match value.trim().to_ascii_lowercase().as_str() {
            "trace" | "notset" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" | "critical" | "fatal" => Level::ERROR,
            _ => {
                return Err(FixedFixedError::LogLevelError(format!(
                    "unknown logging level name: {value}"
                )))
            }
        };
        Ok(Self(level))
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = FixedFixedError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let level = match value {
            i64::MIN..=-1 => {
                return Err(FixedFixedError::LogLevelError(format!(
                    "logging level values must be non-negative, got: {value}"
                )))
            }
            0..=9 => Level::TRACE,
            10..=19 => Level::DEBUG,
            20..=29 => Level::INFO,
            30..=39 => Level::WARN,
            _ => Level::ERROR,
        };
        Ok(Self(level))
    }
}

impl From<Level> for LogLevel {
    fn from(value: Level) -> Self {
        Self(value)
    }
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        value.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(Level::WARN)
    }
}

/// Where log lines are written.
///
/// The string `"stderr"` selects standard error;
/// any other string is a file path.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LogLocation {
    /// Standard error.
    Stderr,
    /// A file, truncated when the logger is built.
    File(PathBuf),
}

impl From<&str> for LogLocation {
    fn from(value: &str) -> Self {
        if value == "stderr" {
            Self::Stderr
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl From<String> for LogLocation {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PathBuf> for LogLocation {
    fn from(value: PathBuf) -> Self {
        Self::File(value)
    }
}

impl LogLocation {
    fn layer(&self) -> Result<BoxedLayer, FixedFixedError> {
        let layer: BoxedLayer = match self {
            LogLocation::Stderr => fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .boxed(),
            LogLocation::File(path) => fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(Mutex::new(create_log_file(path)?))
                .boxed(),
        };
        Ok(layer)
    }
}

fn create_log_file(path: &Path) -> Result<File, FixedFixedError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

/// Settings for the project logger.
///
/// # Examples
///
/// ```
/// use delacourse::{LogLevel, LogLocation, LoggerConfig};
///
/// let config = LoggerConfig::from_yaml("level: 20").unwrap();
/// assert_eq!(config.level, LogLevel::from(tracing::Level::INFO));
/// assert!(config.locations.is_empty());
///
/// let config = LoggerConfig::new(tracing::Level::DEBUG, vec![LogLocation::Stderr]);
/// assert!(config.dispatch().is_ok());
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Most verbose level recorded.
    #[serde(default)]
    pub level: LogLevel,
    /// Destinations. Empty means standard error.
    #[serde(default)]
    pub locations: Vec<LogLocation>,
}

impl LoggerConfig {
    /// Constructor
    pub fn new<L: Into<LogLevel>>(level: L, locations: Vec<LogLocation>) -> Self {
        Self {
            level: level.into(),
            locations,
        }
    }

    /// Read settings from a `YAML` record.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixedFixedError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read settings from a `JSON` record.
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub fn from_json(json: &str) -> Result<Self, FixedFixedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a subscriber writing to every location.
    ///
    /// File locations are created (with missing parent
    /// directories) and truncated here.
    pub fn dispatch(&self) -> Result<Dispatch, FixedFixedError> {
        let layers = if self.locations.is_empty() {
            vec![LogLocation::Stderr.layer()?]
        } else {
            self.locations
                .iter()
                .map(LogLocation::layer)
                .collect::<Result<Vec<_>, _>>()?
        };
        let filter =
            Targets::new().with_target(PROJECT_TARGET, LevelFilter::from_level(self.level.0));
        let subscriber = Registry::default().with(layers).with(filter);
        Ok(Dispatch::new(subscriber))
    }

    /// Install the project logger as the global default.
    ///
    /// # Errors
    ///
    /// [`FixedFixedError::LoggerError`] if a global
    /// default has already been set.
    pub fn init(&self) -> Result<(), FixedFixedError> {
        let dispatch = self.dispatch()?;
        tracing::dispatcher::set_global_default(dispatch)
            .map_err(|e| FixedFixedError::LoggerError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_values() {
        assert_eq!(LogLevel::try_from(0_i64).unwrap(), Level::TRACE.into());
        assert_eq!(LogLevel::try_from(10_i64).unwrap(), Level::DEBUG.into());
        assert_eq!(LogLevel::try_from(25_i64).unwrap(), Level::INFO.into());
        assert_eq!(LogLevel::try_from(50_i64).unwrap(), Level::ERROR.into());
        assert!(matches!(
            LogLevel::try_from(-10_i64),
            Err(FixedFixedError::LogLevelError(_))
        ));
    }

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::try_from("DEBUG").unwrap(), Level::DEBUG.into());
        assert_eq!(LogLevel::try_from("Critical").unwrap(), Level::ERROR.into());
        assert_eq!(LogLevel::try_from(" warn ").unwrap(), Level::WARN.into());
    }

    #[test]
    fn test_locations() {
        assert_eq!(LogLocation::from("stderr"), LogLocation::Stderr);
        assert_eq!(
            LogLocation::from("logs/run.log"),
            LogLocation::File(PathBuf::from("logs/run.log"))
        );
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            LoggerConfig::from_yaml("level: info\ncolour: true"),
            Err(FixedFixedError::YamlError(_))
        ));
    }

    #[test]
    fn test_bad_level_in_yaml() {
        assert!(LoggerConfig::from_yaml("level: chatty").is_err());
    }
}
