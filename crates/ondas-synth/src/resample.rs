//! Cyclic index remapping from the reference period to a target frequency.
//!
//! The reference period holds exactly one cycle across the output window.
//! Reading it back at stride `cycles = frequency · duration` (modulo its
//! length) reconstructs the same waveform at the target frequency without
//! re-evaluating the trigonometric sum; the read-only period buffer acts
//! as a wavetable.
//!
//! Rounding `i · cycles` to the nearest integer index quantizes the
//! source position by up to half a sample, a phase error proportional to
//! `cycles / n_samples`. For target frequencies approaching the sample
//! count this drift becomes audible; it is a documented property of the
//! technique, not a defect, and is bounded by tolerance in tests.

/// Resample one reference period to `frequency`.
///
/// `output[i] = period[round(i · frequency · duration) mod n_samples]`.
/// The output has the same length as `period`.
pub fn remap(period: &[f64], frequency: f64, duration: f64) -> Vec<f64> {
    let n_samples = period.len();
    let cycles = frequency * duration;
    (0..n_samples)
        .map(|i| period[(i as f64 * cycles).round() as usize % n_samples])
        .collect()
}
