//! Error types for the voice command subsystem.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Recognizer error: {0}")]
    Recognizer(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] pitchpipe_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
