//! Integration test modules for PitchPipe
//!
//! - engine: Engine lifecycle, initialization, reference pitch
//! - commands: Command dispatch from every input source
//! - signal: Rendered audio
//! - voice: Voice command flow through the umbrella API

pub mod commands;
pub mod engine;
pub mod signal;
#[cfg(feature = "voice")]
pub mod voice;
