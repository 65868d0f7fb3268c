use std::cell::RefCell;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::rc::Rc;

use thiserror::Error;

const WL_COPY_COMMAND: &str = "wl-copy";
const MIME_TEXT_PLAIN_UTF8: &str = "text/plain;charset=utf-8";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to run clipboard command: {command}")]
    CommandIo {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write clipboard payload to {command}: {source}")]
    WritePayload {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command} exited with non-zero status: {status}")]
    CommandFailed { command: String, status: String },
}

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardBackend {
    fn copy_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Pipes text into `wl-copy` on Wayland sessions.
#[derive(Debug, Clone)]
pub struct WlCopyBackend {
    command: String,
}

impl WlCopyBackend {
    /// Run `command` with the `wl-copy` arguments instead of `wl-copy` itself.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for WlCopyBackend {
    fn default() -> Self {
        Self::with_command(WL_COPY_COMMAND)
    }
}

impl ClipboardBackend for WlCopyBackend {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        let mut child = Command::new(&self.command)
            .arg("--type")
            .arg(MIME_TEXT_PLAIN_UTF8)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::CommandIo {
                command: self.command.clone(),
                source,
            })?;

        // The pipe is closed when `stdin` drops so the child sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Always reap the child, even when the payload could not be written.
        let status = child.wait().map_err(|source| ClipboardError::CommandIo {
            command: self.command.clone(),
            source,
        })?;
        if !status.success() {
            if let Err(err) = &written {
                tracing::debug!(command = %self.command, %err, "payload write failed before exit");
            }
            return Err(ClipboardError::CommandFailed {
                command: self.command.clone(),
                status: status.to_string(),
            });
        }

        written.map_err(|source| ClipboardError::WritePayload {
            command: self.command.clone(),
            source,
        })
    }
}

/// Keeps the last copied text in memory. Clones share the same slot.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
