//! PitchPipe: tone engine, command dispatch and voice control wired together.

use crate::core::{Command, CommandDispatcher, ToneEngine, ToneSnapshot};
use crate::Result;
use crossbeam_channel::Receiver;
use std::sync::Arc;

#[cfg(feature = "voice")]
use crate::voice::{RecognitionEvent, Recognizer, VoiceCommandAdapter};
#[cfg(feature = "voice")]
use parking_lot::Mutex;
#[cfg(feature = "voice")]
use tracing::warn;

/// A reference tone with interval stepping, driven from a control surface
/// and, with the `voice` feature, by spoken commands.
///
/// The [`ToneEngine`] is the single source of truth. Buttons, sliders and the
/// voice adapter all go through the same [`CommandDispatcher`], so whichever
/// input arrives last wins.
///
/// # Example
///
/// ```
/// use pitchpipe::prelude::*;
///
/// let pipe = PitchPipe::builder().sink(OfflineSink::new()).build()?;
///
/// pipe.step_up();
/// pipe.toggle();
/// assert!(pipe.is_playing());
/// assert!((pipe.frequency() - 466.16).abs() < 0.01);
/// # Ok::<(), pitchpipe::Error>(())
/// ```
pub struct PitchPipe {
    engine: Arc<ToneEngine>,
    dispatcher: CommandDispatcher,

    /// Attached voice adapter, armed on the first toggle to playing
    #[cfg(feature = "voice")]
    voice: Mutex<Option<VoiceCommandAdapter>>,
}

impl PitchPipe {
    /// Create a new builder
    pub fn builder() -> crate::PitchPipeBuilder {
        crate::PitchPipeBuilder::default()
    }

    pub(crate) fn from_engine(engine: ToneEngine) -> Self {
        let engine = Arc::new(engine);
        Self {
            dispatcher: CommandDispatcher::new(engine.clone()),
            engine,
            #[cfg(feature = "voice")]
            voice: Mutex::new(None),
        }
    }

    /// The shared tone engine.
    pub fn engine(&self) -> &Arc<ToneEngine> {
        &self.engine
    }

    /// Dispatcher bound to this engine. Clone it to hand to other input sources.
    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn play(&self) {
        self.execute(Command::Start);
    }

    pub fn pause(&self) {
        self.execute(Command::Stop);
    }

    pub fn step_up(&self) {
        self.execute(Command::Up);
    }

    pub fn step_down(&self) {
        self.execute(Command::Down);
    }

    /// Retune around a new reference pitch, keeping interval and playback.
    pub fn set_reference_frequency(&self, hz: f64) -> Result<()> {
        Ok(self.engine.set_reference_frequency(hz)?)
    }

    /// Apply a typed command.
    pub fn execute(&self, command: Command) {
        self.dispatcher.execute(command);
    }

    /// Apply a vocabulary token; unknown tokens are ignored.
    pub fn dispatch(&self, token: &str) -> Option<Command> {
        self.dispatcher.dispatch(token)
    }

    /// Play/stop button: pause when playing, otherwise play and start
    /// listening for voice commands. Returns the new playing state.
    pub fn toggle(&self) -> bool {
        if self.engine.is_playing() {
            self.pause();
        } else {
            self.play();
            #[cfg(feature = "voice")]
            self.arm_voice();
        }
        self.engine.is_playing()
    }

    pub fn frequency(&self) -> f64 {
        self.engine.frequency()
    }

    pub fn interval(&self) -> i32 {
        self.engine.interval()
    }

    pub fn reference_frequency(&self) -> f64 {
        self.engine.reference_frequency()
    }

    pub fn is_playing(&self) -> bool {
        self.engine.is_playing()
    }

    pub fn snapshot(&self) -> ToneSnapshot {
        self.engine.snapshot()
    }

    /// Snapshot after every change, from any input source.
    pub fn subscribe(&self) -> Receiver<ToneSnapshot> {
        self.engine.subscribe()
    }

    /// Attach a recognizer, replacing any previous one.
    ///
    /// The recognizer is configured now and starts listening on the next
    /// [`toggle`](Self::toggle) to playing, or on [`arm_voice`](Self::arm_voice).
    #[cfg(feature = "voice")]
    pub fn attach_voice(&self, recognizer: impl Recognizer + 'static) -> Result<()> {
        let adapter = self.voice_adapter(recognizer)?;
        *self.voice.lock() = Some(adapter);
        Ok(())
    }

    /// A voice adapter bound to this engine that the caller drives itself,
    /// e.g. with [`VoiceCommandAdapter::spawn`].
    #[cfg(feature = "voice")]
    pub fn voice_adapter(
        &self,
        recognizer: impl Recognizer + 'static,
    ) -> Result<VoiceCommandAdapter> {
        Ok(VoiceCommandAdapter::new(recognizer, self.dispatcher.clone())?)
    }

    /// Start listening with the attached recognizer, if any.
    ///
    /// Failures are logged; the tone keeps working without voice control.
    #[cfg(feature = "voice")]
    pub fn arm_voice(&self) {
        if let Some(adapter) = self.voice.lock().as_mut() {
            if let Err(e) = adapter.arm() {
                warn!(error = %e, "voice commands unavailable");
            }
        }
    }

    /// Feed a recognizer event to the attached adapter.
    ///
    /// Returns `false` when no recognizer is attached.
    #[cfg(feature = "voice")]
    pub fn voice_event(&self, event: RecognitionEvent) -> bool {
        match self.voice.lock().as_mut() {
            Some(adapter) => {
                adapter.handle(event);
                true
            }
            None => false,
        }
    }

    #[cfg(feature = "voice")]
    pub fn is_listening(&self) -> bool {
        self.voice
            .lock()
            .as_ref()
            .is_some_and(VoiceCommandAdapter::is_listening)
    }

    /// Detach the voice adapter, e.g. to move it onto a listener thread.
    #[cfg(feature = "voice")]
    pub fn take_voice(&self) -> Option<VoiceCommandAdapter> {
        self.voice.lock().take()
    }
}
