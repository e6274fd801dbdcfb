//! Speech recognizer collaborator interface.

use crate::config::RecognitionConfig;
use crate::Result;

/// Events a recognizer delivers back to the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// Final transcript of one utterance (best alternative).
    Result(String),
    /// The user stopped speaking; the session has ended.
    SpeechEnd,
    /// The recognizer reported a problem.
    Error(String),
}

/// A platform speech-to-text engine.
///
/// Implementations forward their platform callbacks as [`RecognitionEvent`]s,
/// typically through a channel drained by
/// [`VoiceCommandAdapter::listen`](crate::VoiceCommandAdapter::listen).
pub trait Recognizer: Send {
    /// Apply session settings. Called once, before the first `start`.
    fn configure(&mut self, config: &RecognitionConfig) -> Result<()>;

    /// Begin a listening session.
    fn start(&mut self) -> Result<()>;

    /// End the current listening session, if any.
    fn stop(&mut self) {}
}

impl<R: Recognizer + ?Sized> Recognizer for Box<R> {
    fn configure(&mut self, config: &RecognitionConfig) -> Result<()> {
        (**self).configure(config)
    }

    fn start(&mut self) -> Result<()> {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}
