//! Truncated Fourier partial sums over one reference period.
//!
//! [`reference_period`] evaluates a component as if its fundamental were
//! exactly `1/duration`, one full cycle across the output window. The
//! requested frequency is applied afterwards by cyclic remapping (see
//! [`crate::resample`]), so this O(n_samples · n_max) evaluation is paid
//! once per distinct `(shape, amplitude, phase, duration, n_max)` tuple,
//! not once per target frequency.

use crate::wave::WaveShape;
use std::f64::consts::PI;

/// Angular frequency `ω_n = 2π n f` of harmonic `n`.
pub fn angular_frequency(n: u32, frequency: f64) -> f64 {
    2.0 * PI * f64::from(n) * frequency
}

/// Sum the first `n_max` series terms for a single point in time.
///
/// Computes `Σ_{n=1..n_max} b_n · sin(ω_n t + n · radians(phase))`.
/// Harmonics with a zero coefficient contribute nothing and are skipped.
pub fn partial_sum(
    shape: WaveShape,
    t: f64,
    frequency: f64,
    phase_degrees: f64,
    n_max: u32,
) -> f64 {
    let phase = phase_degrees.to_radians();
    let mut sum = 0.0;
    for n in 1..=n_max {
        let b = shape.coefficient(n);
        if b == 0.0 {
            continue;
        }
        sum += b * (angular_frequency(n, frequency) * t + f64::from(n) * phase).sin();
    }
    sum
}

/// Sample times `t_i = i · duration / n_samples`, spanning `[0, duration)`.
///
/// The end point is excluded so consecutive periods tile seamlessly.
pub fn time_grid(duration: f64, n_samples: usize) -> Vec<f64> {
    (0..n_samples)
        .map(|i| i as f64 * duration / n_samples as f64)
        .collect()
}

/// Evaluate one component over the reference period.
///
/// Returns `amplitude · partial_sum(...)` at every grid point, with the
/// fundamental pinned to `1/duration`. This is the hot loop the component
/// cache exists to avoid re-running.
pub fn reference_period(
    shape: WaveShape,
    amplitude: f64,
    phase_degrees: f64,
    duration: f64,
    time_grid: &[f64],
    n_max: u32,
) -> Vec<f64> {
    let fundamental = 1.0 / duration;
    time_grid
        .iter()
        .map(|&t| amplitude * partial_sum(shape, t, fundamental, phase_degrees, n_max))
        .collect()
}
