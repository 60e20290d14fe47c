use crate::error::SessionError;
use crate::session::{Reply, Session};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Totals of one [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read and executed, including the final `exit`.
    pub commands: usize,
    /// `true` when `exit` ended the run, `false` on end of input.
    pub exited: bool,
}

/// Feeds `input` line by line into `session`, writing every reply line to `output`.
///
/// Stops at `exit` or end of input. Output is flushed after each command so an
/// interactive operator sees replies immediately.
///
/// # Errors
/// Returns [`SessionError::Io`] if reading a line or writing a reply fails.
pub fn run<R, W>(session: &mut Session, input: R, mut output: W) -> Result<RunSummary, SessionError>
where
    R: BufRead,
    W: Write,
{
    info!("Session started");
    let mut summary = RunSummary::default();

    for line in input.lines() {
        let line = line.map_err(SessionError::io("Failed to read command"))?;
        let line = line.trim_end_matches('\r');
        summary.commands += 1;
        debug!(line, "Command received");

        match session.execute_line(line) {
            Reply::Exit => {
                summary.exited = true;
                break;
            },
            Reply::Lines(lines) => {
                for reply in lines {
                    writeln!(output, "{reply}").map_err(SessionError::io("Failed to write reply"))?;
                }
                output.flush().map_err(SessionError::io("Failed to flush output"))?;
            },
        }
    }

    info!(commands = summary.commands, exited = summary.exited, "Session finished");
    Ok(summary)
}
