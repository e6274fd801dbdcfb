//! # Interactive reference tone
//!
//! Terminal control surface for the tone engine. Typed lines stand in for
//! both the buttons and the speech recognizer.
//!
//! **Concepts:** interval stepping, reference pitch, play/stop toggle,
//! voice commands through a recognizer
//!
//! ```bash
//! RUST_LOG=pitchpipe=debug cargo run --example interactive --features full
//! ```

use crossbeam_channel::{unbounded, Sender};
use pitchpipe::prelude::*;
use pitchpipe::RecognitionConfig;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Recognizer fed from the keyboard: `say <words>` becomes one utterance.
struct TypedRecognizer {
    events: Sender<RecognitionEvent>,
}

impl Recognizer for TypedRecognizer {
    fn configure(&mut self, config: &RecognitionConfig) -> pitchpipe::voice::Result<()> {
        println!("  (listening for: {})", config.grammar.source);
        Ok(())
    }

    fn start(&mut self) -> pitchpipe::voice::Result<()> {
        Ok(())
    }
}

fn main() -> pitchpipe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pipe = PitchPipe::builder().build()?;

    let (tx, rx) = unbounded();
    let typed = tx.clone();
    let mut adapter = pipe.voice_adapter(TypedRecognizer { events: tx })?;
    adapter.arm()?;
    let _listener = adapter.spawn(rx)?;

    let updates = pipe.subscribe();
    std::thread::spawn(move || {
        for s in updates.iter() {
            print!(
                "\r[{:8.2} Hz | interval {:+3} | ref {:.0} Hz | {}] > ",
                s.frequency,
                s.interval,
                s.reference_frequency,
                if s.playing { "playing" } else { "stopped" }
            );
            let _ = io::stdout().flush();
        }
    });

    println!("Reference tone:");
    println!("  p=play/stop  u=up  d=down  r <hz>=reference  say <words>  q=quit");
    print!("> ");
    io::stdout().flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim().split_once(' ') {
            Some(("r", hz)) => match hz.trim().parse::<f64>() {
                Ok(hz) => {
                    if let Err(e) = pipe.set_reference_frequency(hz) {
                        println!("  {e}");
                    }
                }
                Err(_) => println!("  not a number: {hz}"),
            },
            Some(("say", words)) => {
                let _ = typed.send(RecognitionEvent::Result(words.to_string()));
                let _ = typed.send(RecognitionEvent::SpeechEnd);
            }
            _ => match line.trim() {
                "p" => {
                    pipe.toggle();
                }
                "u" => pipe.step_up(),
                "d" => pipe.step_down(),
                "q" => break,
                _ => {}
            },
        }
    }

    pipe.pause();
    Ok(())
}
