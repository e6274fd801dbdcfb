//! Centralized error type for the pitchpipe umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] pitchpipe_core::Error),

    #[cfg(feature = "voice")]
    #[error("Voice: {0}")]
    Voice(#[from] pitchpipe_voice::Error),

    #[error("No signal sink configured")]
    NoSink,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
