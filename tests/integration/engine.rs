//! Engine lifecycle integration tests
//!
//! Tests construction, the lazily created signal path, failure recovery and
//! reference pitch changes.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use approx::assert_relative_eq;
use pitchpipe::prelude::*;
use pitchpipe::Error;

/// Walk through the basic control surface session.
#[test]
fn test_basic_session() {
    let (pipe, _output) = test_pipe();
    assert_eq!(pipe.frequency(), 440.0);
    assert_eq!(pipe.interval(), 0);

    pipe.step_up();
    assert_relative_eq!(pipe.frequency(), 466.16, epsilon = DISPLAY_TOLERANCE_HZ);

    pipe.step_down();
    assert_eq!(pipe.frequency(), 440.0);

    pipe.play();
    assert!(pipe.is_playing());

    pipe.pause();
    assert!(!pipe.is_playing());
    assert_eq!(pipe.frequency(), 440.0);
}

/// The signal path is only created by the first play.
#[test]
fn test_lazy_signal_path() {
    let (pipe, output) = test_pipe();

    pipe.step_up();
    pipe.set_reference_frequency(430.0).unwrap();
    pipe.pause();
    assert!(!pipe.engine().is_ready());
    assert_eq!(output.start_attempts(), 0);

    pipe.play();
    assert!(pipe.engine().is_ready());
    assert_eq!(output.start_attempts(), 1);
}

/// Rapid repeated plays never build a second signal path.
#[test]
fn test_repeated_play_single_path() {
    let (pipe, output) = test_pipe();
    for _ in 0..10 {
        pipe.play();
    }
    assert_eq!(output.start_attempts(), 1);
    assert_eq!(pipe.engine().gain(), 1.0);
}

/// A sink that refuses to start leaves the engine silent but usable.
#[test]
fn test_denied_output_then_retry() {
    let sink = OfflineSink::new().failing(2);
    let output = sink.handle();
    let pipe = PitchPipe::builder().sink(sink).build().unwrap();

    pipe.play();
    pipe.play();
    assert!(!pipe.is_playing());
    assert!(!output.is_started());

    pipe.step_up();
    assert_eq!(pipe.interval(), 1);

    pipe.play();
    assert!(pipe.is_playing());
    assert!(output.is_started());
    assert_eq!(output.start_attempts(), 3);
}

/// Changing the reference keeps the interval and playback state.
#[test]
fn test_reference_change_keeps_interval() {
    let (pipe, _output) = test_pipe();
    pipe.play();
    for _ in 0..12 {
        pipe.step_up();
    }
    assert_eq!(pipe.frequency(), 880.0);

    pipe.set_reference_frequency(220.0).unwrap();
    assert_eq!(pipe.frequency(), 440.0);
    assert_eq!(pipe.interval(), 12);
    assert!(pipe.is_playing());
}

/// Sweep the reference across the usual slider range.
#[test]
fn test_reference_sweep() {
    let (pipe, _output) = test_pipe();
    pipe.step_down();
    for hz in (420..=460).map(f64::from) {
        pipe.set_reference_frequency(hz).unwrap();
        let expected = hz * 2f64.powf(-1.0 / 12.0);
        assert_relative_eq!(pipe.frequency(), expected, max_relative = PITCH_EPSILON);
    }
}

/// Non-finite and non-positive references are rejected without side effects.
#[test]
fn test_invalid_reference() {
    let (pipe, _output) = test_pipe();
    let before = pipe.snapshot();

    let err = pipe.set_reference_frequency(f64::NAN).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(pitchpipe::core::Error::InvalidParameter { .. })
    ));
    assert!(pipe.set_reference_frequency(-440.0).is_err());
    assert!(pipe.set_reference_frequency(0.0).is_err());
    assert_eq!(pipe.snapshot(), before);
}

/// Builder validation reports bad configuration.
#[test]
fn test_builder_rejects_invalid_config() {
    let result = PitchPipe::builder()
        .reference_frequency(f64::INFINITY)
        .sink(OfflineSink::new())
        .build();
    assert!(result.is_err());

    let result = PitchPipe::builder()
        .amplitude(1.5)
        .sink(OfflineSink::new())
        .build();
    assert!(result.is_err());
}

/// Without the `output` feature there is no default sink.
#[cfg(not(feature = "output"))]
#[test]
fn test_builder_requires_sink() {
    assert!(matches!(PitchPipe::builder().build(), Err(Error::NoSink)));
}

/// Observers get every change as a snapshot.
#[test]
fn test_change_notifications() {
    let (pipe, _output) = test_pipe();
    let updates = pipe.subscribe();

    pipe.toggle();
    pipe.step_up();
    pipe.set_reference_frequency(432.0).unwrap();
    pipe.toggle();

    let seen: Vec<ToneSnapshot> = updates.try_iter().collect();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen.last(), Some(&pipe.snapshot()));
    assert!(!seen[3].playing);
    assert_eq!(seen[3].interval, 1);
    assert_eq!(seen[3].reference_frequency, 432.0);
}
