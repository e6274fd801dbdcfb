//! Voice command integration tests
//!
//! Recognizer events flow through the umbrella into the same engine the UI
//! drives.

use crate::helpers::*;
use pitchpipe::prelude::*;

#[test]
fn test_toggle_arms_attached_recognizer() {
    let (pipe, _output) = test_pipe();
    let recognizer = RecordingRecognizer::default();
    let calls = recognizer.calls.clone();

    pipe.attach_voice(recognizer).unwrap();
    assert!(!pipe.is_listening());
    assert_eq!(*calls.lock(), ["configure"]);

    pipe.toggle();
    pipe.toggle();
    pipe.toggle();
    assert!(pipe.is_listening());
    assert_eq!(*calls.lock(), ["configure", "start"]);
}

#[test]
fn test_transcript_drives_engine() {
    let (pipe, _output) = test_pipe();
    pipe.attach_voice(RecordingRecognizer::default()).unwrap();

    assert!(pipe.voice_event(RecognitionEvent::Result(
        "start up up up stop".to_string()
    )));
    assert!(!pipe.is_playing());
    assert_eq!(pipe.interval(), 3);
}

#[test]
fn test_speech_end_keeps_listening() {
    let (pipe, _output) = test_pipe();
    let recognizer = RecordingRecognizer::default();
    let calls = recognizer.calls.clone();
    pipe.attach_voice(recognizer).unwrap();
    pipe.arm_voice();

    pipe.voice_event(RecognitionEvent::Result("up".into()));
    pipe.voice_event(RecognitionEvent::SpeechEnd);
    pipe.voice_event(RecognitionEvent::Error("aborted".into()));
    pipe.voice_event(RecognitionEvent::Result("up".into()));

    assert!(pipe.is_listening());
    assert_eq!(pipe.interval(), 2);
    assert_eq!(*calls.lock(), ["configure", "start", "stop", "start"]);
}

#[test]
fn test_events_without_recognizer_are_dropped() {
    let (pipe, _output) = test_pipe();
    assert!(!pipe.voice_event(RecognitionEvent::Result("up".into())));
    assert_eq!(pipe.interval(), 0);
    assert!(!pipe.is_listening());
}

#[test]
fn test_voice_and_buttons_share_state() {
    let (pipe, _output) = test_pipe();
    pipe.attach_voice(RecordingRecognizer::default()).unwrap();

    pipe.step_up();
    pipe.voice_event(RecognitionEvent::Result("up start".into()));
    pipe.step_down();
    pipe.voice_event(RecognitionEvent::Result("down down".into()));

    assert_eq!(pipe.interval(), -1);
    assert!(pipe.is_playing());
}

#[test]
fn test_detached_adapter_on_listener_thread() {
    let (pipe, _output) = test_pipe();
    pipe.attach_voice(RecordingRecognizer::default()).unwrap();
    let adapter = pipe.take_voice().unwrap();

    let (tx, rx) = crossbeam_channel::unbounded();
    let listener = adapter.spawn(rx).unwrap();
    tx.send(RecognitionEvent::Result("up up".into())).unwrap();
    drop(tx);
    listener.join().unwrap();

    assert_eq!(pipe.interval(), 2);
    assert!(!pipe.voice_event(RecognitionEvent::SpeechEnd));
}
