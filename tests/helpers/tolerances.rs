//! Tolerance constants for tone testing.
//!
//! Different checks need different precision levels.

/// Floating point rounding errors in the pitch model (relative).
pub const PITCH_EPSILON: f64 = 1e-9;

/// Frequency estimated from a rendered buffer, in Hz.
/// Zero-crossing counting over one second is accurate to about one cycle.
pub const ESTIMATE_TOLERANCE_HZ: f64 = 2.0;

/// Frequencies compared at display precision (two decimals).
pub const DISPLAY_TOLERANCE_HZ: f64 = 0.01;

/// Silence threshold (~-80dB).
/// Values below this are considered silent.
pub const SILENCE_THRESHOLD: f32 = 0.0001;
