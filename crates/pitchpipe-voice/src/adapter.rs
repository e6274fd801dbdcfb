//! Voice command adapter: recognized speech in, dispatched commands out.

use crate::config::RecognitionConfig;
use crate::recognizer::{RecognitionEvent, Recognizer};
use crate::Result;
use crossbeam_channel::Receiver;
use pitchpipe_core::{Command, CommandDispatcher};
use std::thread::{self, JoinHandle};
use tracing::{debug, trace, warn};

/// Vocabulary tokens in `transcript`, in spoken order.
///
/// Splits on whitespace and drops every word that is not a command.
///
/// ```
/// let tokens: Vec<_> = pitchpipe_voice::commands_in(" up  please up start ").collect();
/// assert_eq!(tokens, ["up", "up", "start"]);
/// ```
pub fn commands_in(transcript: &str) -> impl Iterator<Item = &str> + '_ {
    transcript
        .split_whitespace()
        .filter(|token| Command::parse(token).is_some())
}

/// Connects a [`Recognizer`] to a [`CommandDispatcher`].
///
/// Every command word of an utterance is dispatched, in order, before the
/// next event is looked at. Listening restarts automatically after each end
/// of speech, and recognizer errors are logged without stopping the loop.
pub struct VoiceCommandAdapter {
    recognizer: Box<dyn Recognizer>,
    dispatcher: CommandDispatcher,
    listening: bool,
}

impl VoiceCommandAdapter {
    /// Configure `recognizer` with [`RecognitionConfig::default`].
    pub fn new(recognizer: impl Recognizer + 'static, dispatcher: CommandDispatcher) -> Result<Self> {
        Self::with_config(recognizer, dispatcher, &RecognitionConfig::default())
    }

    pub fn with_config(
        recognizer: impl Recognizer + 'static,
        dispatcher: CommandDispatcher,
        config: &RecognitionConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut recognizer: Box<dyn Recognizer> = Box::new(recognizer);
        recognizer.configure(config)?;

        Ok(Self {
            recognizer,
            dispatcher,
            listening: false,
        })
    }

    /// Start listening. Does nothing if a session is already open.
    pub fn arm(&mut self) -> Result<()> {
        if self.listening {
            return Ok(());
        }
        self.recognizer.start()?;
        self.listening = true;
        debug!("voice commands armed");
        Ok(())
    }

    /// Whether a listening session is open.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Route one recognizer event.
    pub fn handle(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Result(transcript) => {
                self.on_recognized(&transcript);
            }
            RecognitionEvent::SpeechEnd => self.on_speech_end(),
            RecognitionEvent::Error(details) => self.on_error(&details),
        }
    }

    /// Dispatch every command word in `transcript`, in order.
    ///
    /// Returns the number of commands applied.
    pub fn on_recognized(&self, transcript: &str) -> usize {
        let applied = self.dispatcher.dispatch_all(commands_in(transcript.trim()));
        debug!(transcript, applied, "recognized");
        applied
    }

    /// Re-arm after the user stops speaking so the next utterance is heard
    /// without manual intervention.
    ///
    /// Ignored while not listening; only [`arm`](Self::arm) opens a session.
    pub fn on_speech_end(&mut self) {
        if !self.listening {
            trace!("speech end while not listening");
            return;
        }
        self.recognizer.stop();
        self.listening = false;
        match self.recognizer.start() {
            Ok(()) => {
                self.listening = true;
                debug!("listening restarted");
            }
            Err(e) => warn!(error = %e, "could not restart listening"),
        }
    }

    /// Report a recognizer error. Listening state is left as it is.
    pub fn on_error(&self, details: &str) {
        warn!(details, "speech recognition error");
    }

    /// Handle events until every sender of `events` is dropped.
    pub fn listen(&mut self, events: &Receiver<RecognitionEvent>) {
        for event in events.iter() {
            self.handle(event);
        }
        debug!("recognition event channel closed");
    }

    /// Run [`listen`](Self::listen) on a background thread.
    ///
    /// The adapter is handed back when the channel closes.
    pub fn spawn(mut self, events: Receiver<RecognitionEvent>) -> Result<JoinHandle<Self>> {
        let handle = thread::Builder::new()
            .name("pitchpipe-voice".to_string())
            .spawn(move || {
                self.listen(&events);
                self
            })?;
        Ok(handle)
    }
}
