//! Builder for configuring and constructing a `PitchPipe`.

use crate::core::{SignalSink, ToneConfig, ToneEngine};
use crate::{PitchPipe, Result};

/// Without an explicit [`sink`](Self::sink) the tone plays through the
/// default CPAL output device (feature `output`); with neither, `build`
/// fails with [`Error::NoSink`].
///
/// # Example
///
/// ```
/// use pitchpipe::prelude::*;
///
/// let pipe = PitchPipe::builder()
///     .reference_frequency(442.0)
///     .sink(OfflineSink::new())
///     .build()?;
///
/// assert_eq!(pipe.frequency(), 442.0);
/// # Ok::<(), pitchpipe::Error>(())
/// ```
#[derive(Default)]
pub struct PitchPipeBuilder {
    config: ToneConfig,
    sink: Option<Box<dyn SignalSink>>,
    #[cfg_attr(not(feature = "output"), allow(dead_code))]
    output_device: Option<usize>,
}

impl PitchPipeBuilder {
    /// Replace the whole tone configuration.
    pub fn config(mut self, config: ToneConfig) -> Self {
        self.config = config;
        self
    }

    /// Default: 440 Hz
    pub fn reference_frequency(mut self, hz: f64) -> Self {
        self.config.reference_frequency = hz;
        self
    }

    /// Gain while playing. Default: 1.0
    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.config.amplitude = amplitude;
        self
    }

    /// Sample rate the voice starts with; device sinks override it with the
    /// device rate. Default: 44100
    pub fn sample_rate(mut self, rate: f64) -> Self {
        self.config.sample_rate = rate;
        self
    }

    /// Render through `sink` instead of the system output.
    pub fn sink(mut self, sink: impl SignalSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Output device index for the default CPAL sink.
    #[cfg(feature = "output")]
    pub fn output_device(mut self, index: usize) -> Self {
        self.output_device = Some(index);
        self
    }

    pub fn build(self) -> Result<PitchPipe> {
        let sink = match self.sink {
            Some(sink) => sink,
            None => default_sink(self.output_device)?,
        };

        let engine = ToneEngine::with_boxed_sink(self.config, sink)?;
        Ok(PitchPipe::from_engine(engine))
    }
}

#[cfg(feature = "output")]
fn default_sink(device: Option<usize>) -> Result<Box<dyn SignalSink>> {
    use crate::core::CpalSink;

    Ok(Box::new(match device {
        Some(index) => CpalSink::with_device(index),
        None => CpalSink::new(),
    }))
}

#[cfg(not(feature = "output"))]
fn default_sink(_device: Option<usize>) -> Result<Box<dyn SignalSink>> {
    Err(crate::Error::NoSink)
}
