//! Recognition session configuration.

use crate::{Error, Result};
use pitchpipe_core::VOCABULARY;
use serde::{Deserialize, Serialize};

/// Weighted JSGF grammar constraining what the recognizer listens for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    pub source: String,
    pub weight: f32,
}

impl Grammar {
    /// Grammar accepting exactly one of `words` per rule match.
    pub fn from_words<'a>(name: &str, words: impl IntoIterator<Item = &'a str>) -> Self {
        let alternatives: Vec<&str> = words.into_iter().collect();
        Self {
            source: format!(
                "#JSGF V1.0; grammar {name}; public <command> = {};",
                alternatives.join(" | ")
            ),
            weight: 1.0,
        }
    }

    /// Grammar for the four command words.
    pub fn commands() -> Self {
        Self::from_words("commands", VOCABULARY)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::commands()
    }
}

/// Settings applied to a recognizer before it is armed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Keep the session open across results.
    pub continuous: bool,
    /// Deliver partial transcripts while the user is still speaking.
    pub interim_results: bool,
    pub max_alternatives: u32,
    /// BCP 47 language tag.
    pub lang: String,
    pub grammar: Grammar,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: false,
            max_alternatives: 1,
            lang: "en-US".to_string(),
            grammar: Grammar::commands(),
        }
    }
}

impl RecognitionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_alternatives == 0 {
            return Err(Error::InvalidConfig(
                "max_alternatives must be at least 1".to_string(),
            ));
        }
        if self.lang.trim().is_empty() {
            return Err(Error::InvalidConfig("lang must not be empty".to_string()));
        }
        Ok(())
    }
}
