//! Spectral analysis helpers for ondas signals.
//!
//! A thin rustfft wrapper producing one-sided amplitude and power spectra
//! with the conventions the rest of the workspace expects: bin `k` maps to
//! `k · sample_rate / n` Hz, a unit-amplitude sine on an exact bin reports
//! amplitude 1, and `power = 2 · (|X| / n)²`.

mod spectrum;

pub use spectrum::{
    SpectralPeak, amplitude_spectrum, dominant_peak, peaks_above, power_spectrum,
};
