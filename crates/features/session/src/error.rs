use crate::command::ParseError;
use phub_parking::ParkingError;
use std::borrow::Cow;

/// Everything a session can answer with instead of a result.
///
/// Except for [`SessionError::Io`], these are informational: the session prints
/// the message and keeps reading commands.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Parking lot is not created yet")]
    LotNotInitialized,

    #[error("Capacity {capacity} exceeds the configured maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },

    #[error(transparent)]
    Parking(#[from] ParkingError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Reading commands or writing replies failed; the session stops.
    #[error("Console I/O error{}: {source}", format_context(context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl SessionError {
    pub(crate) fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { source, context: Some(Cow::Borrowed(context)) }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
