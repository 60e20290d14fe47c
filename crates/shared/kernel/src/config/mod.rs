mod error;

pub use self::error::{ConfigError, ConfigErrorExt};

use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides (`PHUB__LOT__MAX_CAPACITY`).
pub const ENV_PREFIX: &str = "PHUB";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Base name of the optional configuration file looked up in the working directory.
pub const DEFAULT_FILE_STEM: &str = "parkhub";

/// Builder for the layered configuration strategy.
///
/// Layers, lowest priority first:
/// 1. **Defaults**: whatever `#[serde(default)]` provides on the target type.
/// 2. **File**: an explicit file (required) or `parkhub.{toml,json,yaml,..}` (optional).
/// 3. **Environment**: variables prefixed with `PHUB__`, nested with `__`
///    (e.g., `PHUB__LOGGING__LEVEL` maps to `logging.level`).
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` instead of the optional default file. The file must exist.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Builds every layer and deserializes the result into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::FileNotFound`] if an explicit path does not exist,
    /// and [`ConfigError::Config`] if a source is malformed or does not match `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let file = match &self.path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound {
                        message: path.display().to_string().into(),
                        context: Some("Explicit config path".into()),
                    });
                }
                info!("Loading config from {}", path.display());
                File::from(path.as_path()).required(true)
            },
            None => {
                debug!("Looking for optional config file '{DEFAULT_FILE_STEM}.*'");
                File::with_name(DEFAULT_FILE_STEM).required(false)
            },
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(self.env);

        Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Loads `T` from an optional file path plus `PHUB__*` environment overrides.
///
/// # Errors
/// See [`ConfigLoader::load`].
///
/// # Example
/// ```rust
/// use phub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    let loader = match path {
        Some(p) => loader.path(p.as_ref()),
        None => loader,
    };
    loader.load()
}
