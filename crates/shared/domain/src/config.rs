use serde::Deserialize;
use std::path::PathBuf;

/// Upper bound on the number of slots a console session may create.
pub const DEFAULT_MAX_CAPACITY: usize = 10_000;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub lot: LotConfig,
    pub logging: LoggingConfig,
}

/// Parking lot settings applied by the session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    /// When set, a lot of this size exists before the first command is read.
    pub capacity: Option<usize>,
    /// Largest capacity `create_parking_lot` accepts.
    pub max_capacity: usize,
}

/// Log output settings. Console logs always go to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Directory for rolling log files; no file output when absent.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for LotConfig {
    fn default() -> Self {
        Self { capacity: None, max_capacity: DEFAULT_MAX_CAPACITY }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false, max_files: 7 }
    }
}
