//! Command dispatch integration tests
//!
//! UI clicks and speech tokens share one dispatcher and one engine.

use crate::helpers::*;
use pitchpipe::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_order_within_one_utterance() {
    let (pipe, _output) = test_pipe();
    let applied = pipe.dispatcher().dispatch_all(["up", "up", "down"]);
    assert_eq!(applied, 3);
    assert_eq!(pipe.interval(), 1);
}

#[test]
fn test_start_up_up_up_stop() {
    let (pipe, _output) = test_pipe();
    pipe.dispatcher()
        .dispatch_all("start up up up stop".split_whitespace());
    assert!(!pipe.is_playing());
    assert_eq!(pipe.interval(), 3);
}

#[test]
fn test_unknown_token_is_ignored() {
    let (pipe, _output) = test_pipe();
    pipe.play();
    pipe.step_up();
    let before = pipe.snapshot();

    assert_eq!(pipe.dispatch("banana"), None);
    assert_eq!(pipe.dispatch("UP"), None);
    assert_eq!(pipe.snapshot(), before);
}

#[test]
fn test_ui_and_dispatcher_interleave() {
    let (pipe, _output) = test_pipe();
    let speech = pipe.dispatcher().clone();

    pipe.step_up();
    speech.dispatch("up");
    pipe.execute(Command::Down);
    speech.dispatch("start");
    pipe.pause();

    assert_eq!(pipe.interval(), 1);
    assert!(!pipe.is_playing());
}

/// Last writer wins across sources; no update is lost.
#[test]
fn test_concurrent_sources_lose_no_steps() {
    let (pipe, _output) = test_pipe();
    let engine = Arc::clone(pipe.engine());

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let dispatcher = pipe.dispatcher().clone();
            thread::spawn(move || {
                let token = if i % 2 == 0 { "up" } else { "down" };
                for _ in 0..250 {
                    dispatcher.dispatch(token);
                    dispatcher.dispatch("up");
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(engine.interval(), 1000);
    let expected = pitchpipe::compute_frequency(440.0, 1000);
    assert_eq!(engine.frequency(), expected);
}

#[test]
fn test_toggle_matches_play_stop_button() {
    let (pipe, _output) = test_pipe();
    assert!(pipe.toggle());
    assert!(pipe.is_playing());
    assert!(!pipe.toggle());
    assert!(!pipe.is_playing());
}
