//! # PitchPipe - Real-time Reference Tone
//!
//! A single sine tone whose pitch moves in equal-tempered semitone steps
//! around a tunable reference frequency, controlled from a UI and by voice.
//!
//! ## Architecture
//!
//! PitchPipe is an umbrella crate that coordinates:
//! - **pitchpipe-core** - Pitch model, tone engine, signal sinks, command dispatch
//! - **pitchpipe-voice** - Speech recognizer interface and voice command adapter
//!
//! ## Quick Start
//!
//! ```ignore
//! use pitchpipe::prelude::*;
//!
//! // Plays through the default output device (feature "output")
//! let pipe = PitchPipe::builder()
//!     .reference_frequency(440.0)
//!     .build()?;
//!
//! pipe.play();
//! pipe.step_up(); // 466.16 Hz
//! pipe.set_reference_frequency(442.0)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Tone engine and voice commands
//! - `voice` - Voice command subsystem
//! - `output` - CPAL audio output
//! - `full` - Everything enabled

/// Re-export of pitchpipe-core for direct access
pub use pitchpipe_core as core;

pub use pitchpipe_core::{
    compute_frequency, Command, CommandDispatcher, OfflineHandle, OfflineSink, SignalSink,
    ToneConfig, ToneEngine, ToneSnapshot, DEFAULT_REFERENCE_FREQUENCY, VOCABULARY,
};

#[cfg(feature = "output")]
pub use pitchpipe_core::CpalSink;

// Voice subsystem
#[cfg(feature = "voice")]
pub use pitchpipe_voice as voice;

#[cfg(feature = "voice")]
pub use pitchpipe_voice::{
    commands_in, Grammar, RecognitionConfig, RecognitionEvent, Recognizer, VoiceCommandAdapter,
};

mod builder;
mod engine;
mod error;

pub use builder::PitchPipeBuilder;
pub use engine::PitchPipe;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{PitchPipe, PitchPipeBuilder};

    pub use crate::core::{Command, OfflineSink, SignalSink, ToneConfig, ToneSnapshot};

    #[cfg(feature = "output")]
    pub use crate::core::CpalSink;

    #[cfg(feature = "voice")]
    pub use crate::voice::{RecognitionEvent, Recognizer, VoiceCommandAdapter};
}
