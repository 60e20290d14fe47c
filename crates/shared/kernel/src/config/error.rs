use std::borrow::Cow;

/// Errors raised while assembling the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Config file not found{}: {message}", format_context(context))]
    FileNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds a human-readable context to a configuration failure.
pub trait ConfigErrorExt<T> {
    /// Wraps the error with `context`.
    ///
    /// # Errors
    /// Returns the original error, now carrying the context.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
