//! Headless session driver: newline-delimited JSON intents in, console lines out.

use std::io::{BufRead, Write};

use crate::app::{Intent, Playground};
use crate::error::{AppError, AppResult};
use crate::event_log::LogEntryId;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub dispatched: usize,
    pub rejected: usize,
}

/// Dispatch every intent line from `input` and echo new console entries to
/// `output`. Lines that do not parse are skipped with a warning.
pub fn run_session<R: BufRead, W: Write>(
    playground: &mut Playground,
    input: R,
    mut output: W,
) -> AppResult<SessionReport> {
    let mut report = SessionReport::default();
    let mut last_seen: Option<LogEntryId> = playground.state().log().last().map(|e| e.id);

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(AppError::ReadInput)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let intent = match serde_json::from_str::<Intent>(trimmed) {
            Ok(intent) => intent,
            Err(err) => {
                tracing::warn!(line = index + 1, %err, "skipping unparseable intent");
                report.rejected += 1;
                continue;
            }
        };

        playground.dispatch(intent);
        report.dispatched += 1;

        for entry in playground.state().log().since(last_seen) {
            writeln!(output, "{entry}").map_err(AppError::WriteOutput)?;
        }
        last_seen = playground.state().log().last().map(|e| e.id);
    }

    output.flush().map_err(AppError::WriteOutput)?;
    tracing::info!(
        dispatched = report.dispatched,
        rejected = report.rejected,
        "session input exhausted"
    );
    Ok(report)
}
