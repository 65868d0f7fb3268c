use std::io;

use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read intents from input")]
    ReadInput(#[source] io::Error),
    #[error("failed to write session output")]
    WriteOutput(#[source] io::Error),
}
