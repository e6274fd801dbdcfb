//! Voice command subsystem.
//!
//! Turns transcripts from a platform speech recognizer into tone engine
//! commands:
//!
//! - [`Recognizer`]: the speech-to-text collaborator, configured with a
//!   [`RecognitionConfig`] constrained to the command [`Grammar`]
//! - [`RecognitionEvent`]: results, end of speech and errors coming back
//! - [`VoiceCommandAdapter`]: filters transcripts to the command vocabulary,
//!   dispatches them in spoken order and keeps listening between utterances
//!
//! # Example
//!
//! ```ignore
//! let (tx, rx) = crossbeam_channel::unbounded();
//! let mut adapter = VoiceCommandAdapter::new(my_recognizer(tx), dispatcher)?;
//! adapter.arm()?;
//! let listener = adapter.spawn(rx)?;
//! ```

mod adapter;
mod config;
mod error;
mod recognizer;

pub use adapter::{commands_in, VoiceCommandAdapter};
pub use config::{Grammar, RecognitionConfig};
pub use error::{Error, Result};
pub use recognizer::{RecognitionEvent, Recognizer};
