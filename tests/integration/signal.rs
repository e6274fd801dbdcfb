//! Rendered signal integration tests
//!
//! Pulls audio out of the offline sink and checks what a listener would hear.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_silent_before_play() {
    let (pipe, output) = test_pipe();
    pipe.step_up();
    assert_silence(&output.render(1024), SILENCE_THRESHOLD);
}

#[test]
fn test_play_sounds_reference_pitch() {
    let (pipe, output) = test_pipe();
    pipe.play();

    let audio = output.render(ONE_SECOND);
    assert_has_audio(&audio, 0.5);
    assert_abs_diff_eq!(
        estimate_frequency(&audio, TEST_SAMPLE_RATE),
        440.0,
        epsilon = ESTIMATE_TOLERANCE_HZ
    );
}

#[test]
fn test_step_retunes_running_tone() {
    let (pipe, output) = test_pipe();
    pipe.play();
    output.render(4800);

    pipe.step_up();
    let audio = output.render(ONE_SECOND);
    assert_abs_diff_eq!(
        estimate_frequency(&audio, TEST_SAMPLE_RATE),
        466.16,
        epsilon = ESTIMATE_TOLERANCE_HZ
    );

    for _ in 0..11 {
        pipe.step_up();
    }
    let audio = output.render(ONE_SECOND);
    assert_abs_diff_eq!(
        estimate_frequency(&audio, TEST_SAMPLE_RATE),
        880.0,
        epsilon = ESTIMATE_TOLERANCE_HZ
    );
}

#[test]
fn test_pause_silences_immediately() {
    let (pipe, output) = test_pipe();
    pipe.play();
    assert_has_audio(&output.render(4800), 0.5);

    pipe.pause();
    assert_silence(&output.render(4800), SILENCE_THRESHOLD);

    pipe.play();
    assert_has_audio(&output.render(4800), 0.5);
}

#[test]
fn test_steps_while_paused_apply_on_resume() {
    let (pipe, output) = test_pipe();
    pipe.play();
    pipe.pause();
    pipe.step_down();
    pipe.step_down();
    pipe.step_down();
    assert_silence(&output.render(1024), SILENCE_THRESHOLD);

    pipe.play();
    let audio = output.render(ONE_SECOND);
    assert_abs_diff_eq!(
        estimate_frequency(&audio, TEST_SAMPLE_RATE),
        369.99,
        epsilon = ESTIMATE_TOLERANCE_HZ
    );
}

#[test]
fn test_reference_change_retunes_output() {
    let (pipe, output) = test_pipe();
    pipe.play();
    pipe.set_reference_frequency(220.0).unwrap();

    let audio = output.render(ONE_SECOND);
    assert_abs_diff_eq!(
        estimate_frequency(&audio, TEST_SAMPLE_RATE),
        220.0,
        epsilon = ESTIMATE_TOLERANCE_HZ
    );
}
