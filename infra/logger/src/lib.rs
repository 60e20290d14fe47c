//! # Logger
//!
//! Logging bootstrap for the `parkhub` binaries.
//!
//! Console logs are written to **stderr** so that stdout stays reserved for
//! command responses. Optional file output uses a rolling, non-blocking appender.
//! A non-empty `RUST_LOG` always takes precedence over the configured level and
//! over any explicit filter directive.
//!
//! ## Example
//!
//! ```rust
//! # use phub_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::WARN,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available; it
/// prefixes rolling log files (`parkhub.2026-10-19.log`).
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    settings: LoggerSettings,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { settings: self.settings, name: WithName(name.into()) }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    /// Minimum level emitted when `RUST_LOG` is not set.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds an explicit filter directive (e.g., `phub_parking=debug`).
    ///
    /// Ignored when `RUST_LOG` is set. Invalid directives cause
    /// [`LoggerBuilder::init`] to fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the stderr layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes rolling log files into `directory`, creating it when needed.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.settings.directory = Some(directory.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Formats file output as JSON lines. Console output stays human-readable.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }
}

impl LoggerBuilder<WithName> {
    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; keep it
    /// alive until shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, zero
    /// `max_files`, a bad filter directive, or when no layer is enabled.
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate(&self.settings, &self.name.0)?;

        let env_filter = build_env_filter(&self.settings)?;
        let mut layers = Vec::new();

        if self.settings.console {
            let ansi = std::io::stderr().is_terminal();
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(ansi).boxed());
        }

        let guard = if let Some(directory) = self.settings.directory {
            fs::create_dir_all(&directory).map_err(|source| LoggerError::Io {
                source,
                context: Some(format!("Failed to create {}", directory.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(self.settings.rotation)
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.settings.max_files)
                .build(&directory)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if self.settings.json {
                file_layer.json().boxed()
            } else {
                file_layer.boxed()
            });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid(
                "No logging layers enabled. Enable console or file output.",
            ));
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background writer guard. Drop it only when the process is
/// shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: NoName }
    }

    /// Returns the file writer guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name (`warn`, `DEBUG`, `off`, ..) as used in configuration files.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim())
        .map_err(|e| LoggerError::invalid(format!("Invalid log level '{level}': {e}")))
}

fn validate(settings: &LoggerSettings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::invalid("Logger name cannot be empty"));
    }
    if settings.max_files == 0 {
        return Err(LoggerError::invalid("max_files must be greater than zero"));
    }
    Ok(())
}

fn build_env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_env_filter(settings, from_env.as_deref())
}

/// `from_env` wins when non-empty; otherwise the explicit filter, then the level alone.
fn resolve_env_filter(
    settings: &LoggerSettings,
    from_env: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());

    if let Some(directives) = from_env.filter(|d| !d.trim().is_empty()) {
        return Ok(builder.parse_lossy(directives));
    }

    match &settings.env_filter {
        Some(filter) => builder
            .parse(filter)
            .map_err(|e| LoggerError::invalid(format!("Invalid env filter '{filter}': {e}"))),
        None => Ok(builder.parse_lossy("")),
    }
}
