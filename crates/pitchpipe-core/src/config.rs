//! Tone engine configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Concert pitch used when no reference frequency is given.
pub const DEFAULT_REFERENCE_FREQUENCY: f64 = 440.0;

/// Configuration for the tone engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Frequency in Hz that interval 0 sounds at.
    pub reference_frequency: f64,
    /// Sample rate the voice is prepared with before a sink takes it over.
    pub sample_rate: f64,
    /// Gain written to the signal path on `play`.
    pub amplitude: f32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            reference_frequency: DEFAULT_REFERENCE_FREQUENCY,
            sample_rate: 44100.0,
            amplitude: 1.0,
        }
    }
}

impl ToneConfig {
    pub fn validate(&self) -> Result<()> {
        validate_reference_frequency(self.reference_frequency)?;
        if !(8000.0..=384000.0).contains(&self.sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} out of range (8000-384000 Hz)",
                self.sample_rate
            )));
        }
        if !(self.amplitude > 0.0 && self.amplitude <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "amplitude {} out of range (0-1]",
                self.amplitude
            )));
        }
        Ok(())
    }
}

/// Any positive value the oscillator can sound is accepted; no musical range
/// is imposed.
pub(crate) fn validate_reference_frequency(hz: f64) -> Result<()> {
    if hz > 0.0 && (hz as f32).is_finite() && hz as f32 > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "reference_frequency",
            value: hz,
        })
    }
}
