//! Command dispatch: one entry point for every input source.
//!
//! Button clicks and recognized speech tokens are both reduced to the same
//! four [`Command`]s and applied to the shared [`ToneEngine`].

use crate::tone::ToneEngine;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace};

/// Tokens that map to a command, in [`Command::ALL`] order.
pub const VOCABULARY: [&str; 4] = ["up", "down", "start", "stop"];

/// The closed set of actions any input source can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// One semitone up.
    Up,
    /// One semitone down.
    Down,
    /// Make the tone audible.
    Start,
    /// Silence the tone.
    Stop,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Up, Command::Down, Command::Start, Command::Stop];

    /// The vocabulary token for this command.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Start => "start",
            Command::Stop => "stop",
        }
    }

    /// Look up an exact vocabulary token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Command::Up),
            "down" => Some(Command::Down),
            "start" => Some(Command::Start),
            "stop" => Some(Command::Stop),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s).ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies commands to a shared [`ToneEngine`].
///
/// Cheap to clone; every clone drives the same engine.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pitchpipe_core::{CommandDispatcher, OfflineSink, ToneConfig, ToneEngine};
///
/// let engine = Arc::new(ToneEngine::new(ToneConfig::default(), OfflineSink::new()).unwrap());
/// let dispatcher = CommandDispatcher::new(engine.clone());
///
/// dispatcher.dispatch("up");
/// dispatcher.dispatch("banana");
/// assert_eq!(engine.interval(), 1);
/// ```
#[derive(Clone)]
pub struct CommandDispatcher {
    engine: Arc<ToneEngine>,
}

impl CommandDispatcher {
    pub fn new(engine: Arc<ToneEngine>) -> Self {
        Self { engine }
    }

    /// The engine commands are applied to.
    pub fn engine(&self) -> &Arc<ToneEngine> {
        &self.engine
    }

    /// Apply a typed command.
    pub fn execute(&self, command: Command) {
        debug!(%command, "dispatch");
        match command {
            Command::Up => self.engine.step_interval(1),
            Command::Down => self.engine.step_interval(-1),
            Command::Start => self.engine.play(),
            Command::Stop => self.engine.pause(),
        }
    }

    /// Apply the command named by `token`.
    ///
    /// Tokens outside the vocabulary are ignored; the return value says which
    /// command, if any, was applied.
    pub fn dispatch(&self, token: &str) -> Option<Command> {
        let Some(command) = Command::parse(token) else {
            trace!(token, "ignoring unknown command token");
            return None;
        };
        self.execute(command);
        Some(command)
    }

    /// Dispatch tokens one after another, in order. Returns how many were applied.
    pub fn dispatch_all<'a, I>(&self, tokens: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut applied = 0;
        for token in tokens {
            if self.dispatch(token).is_some() {
                applied += 1;
            }
        }
        applied
    }
}
