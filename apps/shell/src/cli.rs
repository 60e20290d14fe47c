//! Command-line arguments of the `parkhub` console.

use clap::Parser;
use phub_domain::config::AppConfig;
use std::path::PathBuf;

/// Parking lot console. Reads commands from FILE, or from stdin when omitted.
#[derive(Debug, Parser)]
#[command(name = "parkhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fixed-capacity parking lot console")]
pub(crate) struct Cli {
    /// Command file to execute instead of reading stdin
    pub(crate) file: Option<PathBuf>,

    /// Configuration file (defaults to an optional `parkhub.*` in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Log level (`error`, `warn`, `info`, `debug`, `trace`, `off`), overriding `logging.level`
    #[arg(long, value_name = "LEVEL")]
    pub(crate) log_level: Option<String>,

    /// Directory for rolling log files, overriding `logging.directory`
    #[arg(long, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub(crate) fn apply(&self, config: &mut AppConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(directory) = &self.log_dir {
            config.logging.directory = Some(directory.clone());
        }
    }
}
