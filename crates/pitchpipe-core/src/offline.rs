//! In-memory signal sink.
//!
//! Holds the voice instead of handing it to a device and renders it on
//! demand. Used for tests and for hosts that pull samples themselves.

use crate::signal::{SignalSink, Voice};
use crate::{Error, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Signal sink that renders into buffers instead of a device.
///
/// # Example
///
/// ```
/// use pitchpipe_core::{OfflineSink, ToneConfig, ToneEngine};
///
/// let sink = OfflineSink::new();
/// let output = sink.handle();
/// let engine = ToneEngine::new(ToneConfig::default(), sink).unwrap();
///
/// engine.play();
/// assert!(output.render(256).iter().any(|s| s.abs() > 0.1));
/// ```
pub struct OfflineSink {
    shared: Arc<OfflineShared>,
    failures: usize,
}

#[derive(Default)]
struct OfflineShared {
    voice: Mutex<Option<Voice>>,
    attempts: AtomicUsize,
}

impl OfflineSink {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(OfflineShared::default()),
            failures: 0,
        }
    }

    /// Refuse the first `count` start attempts, as a device that denies
    /// access would.
    pub fn failing(mut self, count: usize) -> Self {
        self.failures = count;
        self
    }

    /// Handle for rendering and inspecting the sink after it moved into an engine.
    pub fn handle(&self) -> OfflineHandle {
        OfflineHandle {
            shared: self.shared.clone(),
        }
    }
}

impl Default for OfflineSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSink for OfflineSink {
    fn start(&mut self, voice: Voice) -> Result<()> {
        let attempt = self.shared.attempts.fetch_add(1, Ordering::AcqRel) + 1;
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::SinkUnavailable(format!(
                "offline sink refused start attempt {attempt}"
            )));
        }
        *self.shared.voice.lock() = Some(voice);
        Ok(())
    }
}

/// Cloneable view of an [`OfflineSink`].
#[derive(Clone)]
pub struct OfflineHandle {
    shared: Arc<OfflineShared>,
}

impl OfflineHandle {
    /// Render the next `frames` mono samples. Silence until the sink started.
    pub fn render(&self, frames: usize) -> Vec<f32> {
        let mut output = vec![0.0; frames];
        self.render_into(&mut output);
        output
    }

    /// Render into an existing buffer.
    pub fn render_into(&self, output: &mut [f32]) {
        match self.shared.voice.lock().as_mut() {
            Some(voice) => {
                for sample in output.iter_mut() {
                    *sample = voice.get_mono();
                }
            }
            None => output.fill(0.0),
        }
    }

    /// Whether a voice was accepted.
    pub fn is_started(&self) -> bool {
        self.shared.voice.lock().is_some()
    }

    /// Number of start attempts, successful or not.
    pub fn start_attempts(&self) -> usize {
        self.shared.attempts.load(Ordering::Acquire)
    }
}
