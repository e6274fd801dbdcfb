//! Tone engine: the single source of truth for pitch and playback state.

use crate::config::{validate_reference_frequency, ToneConfig};
use crate::pitch::compute_frequency;
use crate::signal::{SignalPath, SignalSink};
use crate::{Error, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Observable engine state at the end of one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSnapshot {
    /// Current output frequency in Hz.
    pub frequency: f64,
    /// Semitone offset from the reference.
    pub interval: i32,
    /// Frequency in Hz of interval 0.
    pub reference_frequency: f64,
    pub playing: bool,
}

/// Owns the signal path and applies interval, reference and playback
/// changes to it.
///
/// Every operation takes `&self` and runs to completion under one lock, so
/// the engine can be shared through an `Arc` between the control surface and
/// the voice adapter: whichever event arrives last wins, and getters never
/// observe a half-applied change.
///
/// The signal path is created lazily on the first [`play`](Self::play) and
/// exactly once per engine. Until then interval and reference changes are
/// tracked but nothing is written to a sink.
///
/// # Example
///
/// ```
/// use pitchpipe_core::{OfflineSink, ToneConfig, ToneEngine};
///
/// let engine = ToneEngine::new(ToneConfig::default(), OfflineSink::new()).unwrap();
/// engine.step_up();
/// engine.play();
/// assert_eq!(engine.interval(), 1);
/// assert!(engine.is_playing());
/// ```
pub struct ToneEngine {
    state: Mutex<ToneState>,
    subscribers: Mutex<Vec<Sender<ToneSnapshot>>>,
}

struct ToneState {
    sink: Box<dyn SignalSink>,
    path: Option<SignalPath>,
    sample_rate: f64,
    amplitude: f32,
    playing: bool,
    interval: i32,
    reference_frequency: f64,
    frequency: f64,
}

impl ToneState {
    fn snapshot(&self) -> ToneSnapshot {
        ToneSnapshot {
            frequency: self.frequency,
            interval: self.interval,
            reference_frequency: self.reference_frequency,
            playing: self.playing,
        }
    }

    /// Create and start the signal path unless it already exists.
    fn ensure_ready(&mut self) -> Result<()> {
        if self.path.is_some() {
            return Ok(());
        }

        let start = if is_renderable(self.frequency) {
            self.frequency
        } else {
            self.reference_frequency
        };
        let path = SignalPath::new(start as f32);
        self.sink.start(path.voice(self.sample_rate))?;
        info!(frequency = self.frequency, "signal path started");
        self.path = Some(path);
        Ok(())
    }

    /// Recompute the frequency. The oscillator keeps its last pitch when the
    /// new one has no finite positive `f32` value.
    fn retune(&mut self) {
        self.frequency = compute_frequency(self.reference_frequency, self.interval);
        if !is_renderable(self.frequency) {
            warn!(
                interval = self.interval,
                frequency = self.frequency,
                "frequency out of oscillator range; pitch held"
            );
            return;
        }
        if let Some(path) = &self.path {
            path.set_frequency(self.frequency as f32);
        }
    }
}

/// Whether the oscillator can sound `hz`.
fn is_renderable(hz: f64) -> bool {
    let hz = hz as f32;
    hz.is_finite() && hz > 0.0
}

impl ToneEngine {
    /// Create an engine rendering through `sink`. No audio is started until
    /// the first [`play`](Self::play).
    pub fn new(config: ToneConfig, sink: impl SignalSink + 'static) -> Result<Self> {
        Self::with_boxed_sink(config, Box::new(sink))
    }

    /// Same as [`new`](Self::new) for an already boxed sink.
    pub fn with_boxed_sink(config: ToneConfig, sink: Box<dyn SignalSink>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            state: Mutex::new(ToneState {
                sink,
                path: None,
                sample_rate: config.sample_rate,
                amplitude: config.amplitude,
                playing: false,
                interval: 0,
                reference_frequency: config.reference_frequency,
                frequency: compute_frequency(config.reference_frequency, 0),
            }),
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// Create the signal path if it does not exist yet.
    ///
    /// [`play`](Self::play) calls this itself and only logs a failure; call
    /// it directly to get the error instead.
    pub fn ensure_ready(&self) -> Result<()> {
        self.state.lock().ensure_ready()
    }

    /// Make the tone audible.
    ///
    /// If the signal path cannot be started the failure is logged, the engine
    /// stays silent and not playing, and the next call tries again.
    pub fn play(&self) {
        let snapshot = {
            let mut state = self.state.lock();
            if let Err(e) = state.ensure_ready() {
                warn!(error = %e, "could not start signal path; tone stays silent");
                return;
            }
            state.playing = true;
            if let Some(path) = &state.path {
                path.set_gain(state.amplitude);
            }
            self.notify(&state)
        };
        debug!(frequency = snapshot.frequency, "play");
    }

    /// Silence the tone. Interval and frequency are kept.
    pub fn pause(&self) {
        let snapshot = {
            let mut state = self.state.lock();
            state.playing = false;
            if let Some(path) = &state.path {
                path.set_gain(0.0);
            }
            self.notify(&state)
        };
        debug!(interval = snapshot.interval, "pause");
    }

    /// Move the interval by `delta` semitones and retune immediately.
    ///
    /// The interval is unbounded; it saturates at the `i32` limits.
    pub fn step_interval(&self, delta: i32) {
        let snapshot = {
            let mut state = self.state.lock();
            state.interval = state.interval.saturating_add(delta);
            state.retune();
            self.notify(&state)
        };
        debug!(
            interval = snapshot.interval,
            frequency = snapshot.frequency,
            "step interval"
        );
    }

    /// One semitone up.
    pub fn step_up(&self) {
        self.step_interval(1);
    }

    /// One semitone down.
    pub fn step_down(&self) {
        self.step_interval(-1);
    }

    /// Replace the reference frequency and retune from the current interval.
    ///
    /// Playback state and interval are left untouched. Non-finite or
    /// non-positive values are rejected with
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter).
    pub fn set_reference_frequency(&self, hz: f64) -> Result<()> {
        validate_reference_frequency(hz)?;

        let snapshot = {
            let mut state = self.state.lock();
            let frequency = compute_frequency(hz, state.interval);
            if !is_renderable(frequency) {
                return Err(Error::InvalidParameter {
                    name: "reference_frequency",
                    value: hz,
                });
            }
            state.reference_frequency = hz;
            state.retune();
            self.notify(&state)
        };
        debug!(
            reference = hz,
            frequency = snapshot.frequency,
            "set reference frequency"
        );
        Ok(())
    }

    /// Current output frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.state.lock().frequency
    }

    /// Current semitone offset from the reference.
    pub fn interval(&self) -> i32 {
        self.state.lock().interval
    }

    pub fn reference_frequency(&self) -> f64 {
        self.state.lock().reference_frequency
    }

    pub fn is_playing(&self) -> bool {
        self.state.lock().playing
    }

    /// Whether the signal path exists.
    pub fn is_ready(&self) -> bool {
        self.state.lock().path.is_some()
    }

    /// Gain currently applied to the live signal path (0 before it exists).
    pub fn gain(&self) -> f32 {
        self.state.lock().path.as_ref().map_or(0.0, |p| p.gain())
    }

    /// All observable fields read under one lock.
    pub fn snapshot(&self) -> ToneSnapshot {
        self.state.lock().snapshot()
    }

    /// Receive a snapshot after every completed mutation.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<ToneSnapshot> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Broadcast the state of a finished mutation.
    ///
    /// Called with the state lock held, and always takes `subscribers` after
    /// `state`, so subscribers receive snapshots in mutation order.
    fn notify(&self, state: &ToneState) -> ToneSnapshot {
        let snapshot = state.snapshot();
        self.subscribers
            .lock()
            .retain(|tx| tx.send(snapshot).is_ok());
        snapshot
    }
}
