//! One-sided amplitude and power spectra.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// One spectral bin selected by a peak query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// Bin index into the one-sided spectrum.
    pub bin: usize,
    /// Bin center frequency in Hz.
    pub frequency: f64,
    /// Bin value (amplitude or power, depending on the source spectrum).
    pub value: f64,
}

fn one_sided_magnitudes(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&s| Complex::new(s, 0.0)).collect();

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    // Non-negative frequencies only: bins 0 ..= n/2.
    buffer.iter().take(n / 2 + 1).map(|c| c.norm()).collect()
}

/// Center frequencies for the one-sided spectrum of an `n`-sample signal.
fn bin_frequencies(n: usize, sample_rate: u32) -> impl Iterator<Item = f64> {
    let step = f64::from(sample_rate) / n as f64;
    (0..=n / 2).map(move |k| k as f64 * step)
}

/// One-sided amplitude spectrum: `2 · |X_k| / n` per bin.
///
/// A unit-amplitude sine whose frequency falls exactly on a bin reports
/// amplitude 1 there. Returns `(frequencies, amplitudes)`.
pub fn amplitude_spectrum(signal: &[f64], sample_rate: u32) -> (Vec<f64>, Vec<f64>) {
    let n = signal.len();
    let amplitudes = one_sided_magnitudes(signal)
        .into_iter()
        .map(|m| 2.0 * m / n as f64)
        .collect();
    (bin_frequencies(n, sample_rate).collect(), amplitudes)
}

/// One-sided power spectrum: `2 · (|X_k| / n)²` per bin.
///
/// Returns `(frequencies, powers)`.
pub fn power_spectrum(signal: &[f64], sample_rate: u32) -> (Vec<f64>, Vec<f64>) {
    let n = signal.len();
    let powers = one_sided_magnitudes(signal)
        .into_iter()
        .map(|m| 2.0 * (m / n as f64).powi(2))
        .collect();
    (bin_frequencies(n, sample_rate).collect(), powers)
}

/// The bin with the largest value, skipping DC.
///
/// Returns `None` for signals shorter than two samples.
pub fn dominant_peak(frequencies: &[f64], values: &[f64]) -> Option<SpectralPeak> {
    frequencies
        .iter()
        .zip(values)
        .enumerate()
        .skip(1) // DC offset is not a tone
        .max_by(|(_, (_, a)), (_, (_, b))| a.total_cmp(b))
        .map(|(bin, (&frequency, &value))| SpectralPeak {
            bin,
            frequency,
            value,
        })
}

/// All bins at or above `threshold_ratio` of the spectrum maximum,
/// in ascending frequency order.
pub fn peaks_above(
    frequencies: &[f64],
    values: &[f64],
    threshold_ratio: f64,
) -> Vec<SpectralPeak> {
    let max = values.iter().fold(0.0f64, |m, &v| m.max(v));
    if max <= 0.0 {
        return Vec::new();
    }
    let threshold = threshold_ratio * max;
    frequencies
        .iter()
        .zip(values)
        .enumerate()
        .filter(|&(_, (_, &value))| value >= threshold)
        .map(|(bin, (&frequency, &value))| SpectralPeak {
            bin,
            frequency,
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const SR: u32 = 8192;

    fn sine(freq: f64, amplitude: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| amplitude * (2.0 * PI * freq * i as f64 / f64::from(SR)).sin())
            .collect()
    }

    #[test]
    fn unit_sine_on_a_bin_has_unit_amplitude() {
        // 1 s at 8192 Hz: bin width 1 Hz, 440 Hz lands exactly on bin 440.
        let signal = sine(440.0, 1.0, SR as usize);
        let (freqs, amps) = amplitude_spectrum(&signal, SR);

        let peak = dominant_peak(&freqs, &amps).unwrap();
        assert_eq!(peak.bin, 440);
        assert!((peak.frequency - 440.0).abs() < 1e-9);
        assert!((peak.value - 1.0).abs() < 1e-9, "amplitude {}", peak.value);
    }

    #[test]
    fn power_is_amplitude_squared_over_two() {
        let signal = sine(100.0, 0.5, SR as usize);
        let (_, amps) = amplitude_spectrum(&signal, SR);
        let (_, pows) = power_spectrum(&signal, SR);
        // 2·(m/n)² = (2m/n)²/2
        for (a, p) in amps.iter().zip(&pows) {
            assert!((p - a * a / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn spectrum_length_is_one_sided() {
        let signal = sine(10.0, 1.0, 1000);
        let (freqs, amps) = amplitude_spectrum(&signal, SR);
        assert_eq!(freqs.len(), 501);
        assert_eq!(amps.len(), 501);
        assert_eq!(freqs[0], 0.0);
    }

    #[test]
    fn peaks_above_picks_both_tones() {
        let n = SR as usize;
        let mut signal = sine(200.0, 1.0, n);
        for (s, v) in signal.iter_mut().zip(sine(300.0, 0.5, n)) {
            *s += v;
        }
        let (freqs, pows) = power_spectrum(&signal, SR);

        // Powers are 0.5 and 0.125; the weak tone sits at 25% of max,
        // above a 10% threshold.
        let peaks = peaks_above(&freqs, &pows, 0.1);
        let found: Vec<usize> = peaks.iter().map(|p| p.bin).collect();
        assert_eq!(found, vec![200, 300]);
    }

    #[test]
    fn peaks_above_on_silence_is_empty() {
        let silence = vec![0.0; 1024];
        let (freqs, pows) = power_spectrum(&silence, SR);
        assert!(peaks_above(&freqs, &pows, 0.1).is_empty());
    }

    #[test]
    fn dominant_peak_skips_dc() {
        // A constant signal has all its energy at DC.
        let constant = vec![1.0; 1024];
        let (freqs, amps) = amplitude_spectrum(&constant, SR);
        let peak = dominant_peak(&freqs, &amps).unwrap();
        assert!(peak.bin >= 1);
    }
}
