//! Signal path: one sine oscillator feeding one gain stage.
//!
//! The control side ([`SignalPath`]) and the render side (the voice handed to
//! a [`SignalSink`]) share two lock-free parameters. A parameter write is a
//! single atomic store, so the next sample the sink renders already uses the
//! new value: changes are applied at "now" with no ramp.

use crate::Result;
use fundsp::prelude::*;

/// Render side of the signal path, ready to be pulled one sample at a time.
pub type Voice = Box<dyn AudioUnit + Send>;

/// Destination that turns a voice into continuous output.
///
/// Implemented by [`CpalSink`](crate::CpalSink) for real devices and by
/// [`OfflineSink`](crate::OfflineSink) for rendering into memory.
pub trait SignalSink: Send {
    /// Take ownership of `voice` and start rendering it continuously.
    ///
    /// Called at most once per engine after it succeeds. An error (device
    /// missing, access denied) leaves the engine without a signal path and
    /// the next `play` retries with a fresh voice.
    fn start(&mut self, voice: Voice) -> Result<()>;
}

/// Control handles for the live oscillator and gain.
///
/// Created only by the tone engine; nothing outside it writes these
/// parameters.
pub(crate) struct SignalPath {
    frequency: Shared,
    gain: Shared,
}

impl SignalPath {
    /// New path at `frequency` Hz, silent until the gain is raised.
    pub(crate) fn new(frequency: f32) -> Self {
        Self {
            frequency: shared(frequency),
            gain: shared(0.0),
        }
    }

    /// Build the render graph `sine(frequency) * gain` bound to this path.
    pub(crate) fn voice(&self, sample_rate: f64) -> Voice {
        let mut voice: Voice =
            Box::new((var(&self.frequency) >> sine::<f32>()) * var(&self.gain));
        voice.set_sample_rate(sample_rate);
        voice
    }

    #[inline]
    pub(crate) fn set_frequency(&self, hz: f32) {
        self.frequency.set_value(hz);
    }

    #[inline]
    pub(crate) fn set_gain(&self, gain: f32) {
        self.gain.set_value(gain);
    }

    #[inline]
    pub(crate) fn frequency(&self) -> f32 {
        self.frequency.value()
    }

    #[inline]
    pub(crate) fn gain(&self) -> f32 {
        self.gain.value()
    }
}
