//! CPAL audio output sink.

use crate::signal::{SignalSink, Voice};
use crate::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use fundsp::prelude::AudioUnit;
use tracing::{debug, warn};

/// Wrapper to hold a `cpal::Stream` in a `Send` context.
///
/// `cpal::Stream` is `!Send` due to platform internals. The sink is only
/// reached through the tone engine's lock, so the stream is never touched
/// from two threads at once, and it lives until the sink is dropped.
struct StreamHandle(#[allow(dead_code)] cpal::Stream);

// SAFETY: see `StreamHandle`; access is serialized by the engine lock.
unsafe impl Send for StreamHandle {}

/// Signal sink writing to a CPAL output device.
///
/// The voice is rendered as mono and copied to every device channel.
#[derive(Default)]
pub struct CpalSink {
    device_index: Option<usize>,
    sample_rate: Option<f64>,
    stream: Option<StreamHandle>,
}

impl CpalSink {
    /// Sink for the default output device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink for the output device at `index` in [`list_output_devices`](Self::list_output_devices).
    pub fn with_device(index: usize) -> Self {
        Self {
            device_index: Some(index),
            ..Self::default()
        }
    }

    /// Whether a stream is playing.
    pub fn is_running(&self) -> bool {
        self.stream.is_some()
    }

    /// Device sample rate, known once the stream started.
    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    /// List available output devices as `"index: name"`.
    pub fn list_output_devices() -> Result<Vec<String>> {
        cpal::default_host()
            .output_devices()?
            .enumerate()
            .map(|(i, d)| Ok(format!("{i}: {}", d.name()?)))
            .collect()
    }

    /// Name of the device this sink opens.
    pub fn device_name(&self) -> Result<String> {
        Ok(get_device(self.device_index)?.name()?)
    }
}

impl SignalSink for CpalSink {
    fn start(&mut self, mut voice: Voice) -> Result<()> {
        if self.stream.is_some() {
            return Ok(());
        }

        let device = get_device(self.device_index)?;
        let config = device.default_output_config()?;
        let sample_rate = config.sample_rate().0 as f64;
        voice.set_sample_rate(sample_rate);

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), voice)?,
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), voice)?,
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), voice)?,
            format => {
                return Err(Error::InvalidConfig(format!(
                    "Unsupported sample format: {format:?}"
                )));
            }
        };

        stream.play()?;
        debug!(sample_rate, "output stream playing");
        self.sample_rate = Some(sample_rate);
        self.stream = Some(StreamHandle(stream));
        Ok(())
    }
}

fn get_device(index: Option<usize>) -> Result<cpal::Device> {
    let host = cpal::default_host();

    match index {
        Some(i) => {
            let devices: Vec<_> = host.output_devices()?.collect();
            let count = devices.len();
            devices.into_iter().nth(i).ok_or_else(|| {
                Error::InvalidDevice(format!("Device index {i} out of range ({count} available)"))
            })
        }
        None => host
            .default_output_device()
            .ok_or_else(|| Error::InvalidDevice("No output device available".into())),
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut voice: Voice,
) -> Result<cpal::Stream>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                write_frames(data, channels, &mut voice);
            }));

            if result.is_err() {
                output_silence(data);
            }
        },
        |err| warn!(error = %err, "audio stream error"),
        None,
    )?;

    Ok(stream)
}

/// Pull one mono sample per frame and copy it to every channel.
#[inline]
fn write_frames<T: cpal::SizedSample + cpal::FromSample<f32>>(
    data: &mut [T],
    channels: usize,
    voice: &mut Voice,
) {
    for frame in data.chunks_mut(channels) {
        let value = T::from_sample(voice.get_mono());
        frame.fill(value);
    }
}

/// Output silence (panic recovery).
#[inline]
fn output_silence<T: cpal::SizedSample + cpal::FromSample<f32>>(data: &mut [T]) {
    for sample in data.iter_mut() {
        *sample = T::from_sample(0.0);
    }
}
