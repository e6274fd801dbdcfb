//! Tone engine kernel: equal-temperament pitch model, live signal path and
//! command dispatch.
//!
//! # Primary API
//!
//! - [`ToneEngine`]: owns the oscillator and gain, single source of truth for
//!   interval, reference frequency and playback state
//! - [`CommandDispatcher`]: maps [`Command`]s and vocabulary tokens onto the engine
//! - [`compute_frequency`]: `reference * 2^(interval / 12)`
//! - [`SignalSink`]: where the rendered voice goes ([`OfflineSink`], or
//!   [`CpalSink`] with the `output` feature)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pitchpipe_core::{CommandDispatcher, OfflineSink, ToneConfig, ToneEngine};
//!
//! let engine = Arc::new(ToneEngine::new(ToneConfig::default(), OfflineSink::new())?);
//! let commands = CommandDispatcher::new(engine.clone());
//!
//! commands.dispatch_all("start up up up stop".split_whitespace());
//! assert_eq!(engine.interval(), 3);
//! assert!(!engine.is_playing());
//! # Ok::<(), pitchpipe_core::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::{ToneConfig, DEFAULT_REFERENCE_FREQUENCY};

pub mod pitch;
pub use pitch::{compute_frequency, SEMITONES_PER_OCTAVE, SEMITONE_RATIO};

mod signal;
pub use signal::{SignalSink, Voice};

mod offline;
pub use offline::{OfflineHandle, OfflineSink};

#[cfg(feature = "output")]
mod output;
#[cfg(feature = "output")]
pub use output::CpalSink;

mod tone;
pub use tone::{ToneEngine, ToneSnapshot};

pub mod command;
pub use command::{Command, CommandDispatcher, VOCABULARY};

pub mod dsp {
    //! Re-export of fundsp::prelude for custom sinks and voices.
    pub use fundsp::prelude::*;
}
