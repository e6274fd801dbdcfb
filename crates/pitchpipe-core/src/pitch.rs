//! Equal-temperament pitch model.
//!
//! Maps a reference frequency and a signed semitone interval to the frequency
//! the oscillator should sound at. Twelve semitones make one octave, so every
//! step multiplies the frequency by `2^(1/12)`.

/// Semitones per octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Frequency ratio of a single equal-tempered semitone.
pub const SEMITONE_RATIO: f64 = 1.059_463_094_359_295_3;

/// Frequency in Hz of `interval` semitones away from `reference_frequency`.
///
/// Pure and total: no clamping is applied to either argument. Whole octaves
/// are applied as exact powers of two so that `interval + 12` doubles the
/// result without rounding drift.
///
/// ```
/// use pitchpipe_core::compute_frequency;
/// assert_eq!(compute_frequency(440.0, 0), 440.0);
/// assert_eq!(compute_frequency(440.0, 12), 880.0);
/// assert_eq!(compute_frequency(440.0, -12), 220.0);
/// ```
#[inline]
pub fn compute_frequency(reference_frequency: f64, interval: i32) -> f64 {
    let octaves = interval.div_euclid(SEMITONES_PER_OCTAVE);
    let semitones = interval.rem_euclid(SEMITONES_PER_OCTAVE);
    let fraction = (semitones as f64 / SEMITONES_PER_OCTAVE as f64).exp2();
    reference_frequency * 2f64.powi(octaves) * fraction
}
