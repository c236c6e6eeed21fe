//! Export → reload → spectrum round trip across the workspace.

use ondas_analysis::{amplitude_spectrum, dominant_peak};
use ondas_cache::ComponentCache;
use ondas_io::{BitDepth, read_wav, write_signal};
use ondas_synth::{SignalBuilder, WaveShape};
use std::f64::consts::PI;
use tempfile::tempdir;

const SR: u32 = 44100;

#[test]
fn exported_sine_reloads_with_peak_at_432_hz() {
    let builder =
        SignalBuilder::new(&[432.0], &[1.0], None, &[WaveShape::Sine], 100, 1.0, SR).unwrap();
    let signal = builder.build(&mut ComponentCache::in_memory());

    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_signal(&path, &signal, BitDepth::ThirtyTwo).unwrap();

    let (loaded, info) = read_wav(&path).unwrap();
    assert_eq!(info.sample_rate, SR);
    assert_eq!(loaded.len(), SR as usize);

    let (freqs, amps) = amplitude_spectrum(&loaded, SR);
    let peak = dominant_peak(&freqs, &amps).unwrap();

    // 1 s at 44100 Hz → 1 Hz bins; 432 Hz is an exact bin.
    assert!(
        (peak.frequency - 432.0).abs() <= 1.0,
        "peak at {} Hz",
        peak.frequency
    );

    // The expected amplitude is 1/peak-of-the-sampled-sine: normalization
    // divides by the grid maximum, which is slightly below 1.
    let sampled_peak = (0..SR as usize)
        .map(|i| (2.0 * PI * 432.0 * f64::from(i as u32) / f64::from(SR)).sin().abs())
        .fold(0.0f64, f64::max);
    let expected = 1.0 / sampled_peak;
    assert!(
        (peak.value - expected).abs() < 1e-4,
        "amplitude {} vs expected {expected}",
        peak.value
    );
}

#[test]
fn two_component_export_keeps_relative_loudness() {
    let builder = SignalBuilder::new(
        &[300.0, 600.0],
        &[1.0, 0.5],
        None,
        &[WaveShape::Sine, WaveShape::Sine],
        50,
        1.0,
        SR,
    )
    .unwrap();
    let signal = builder.build(&mut ComponentCache::in_memory());

    let dir = tempdir().unwrap();
    let path = dir.path().join("dyad.wav");
    write_signal(&path, &signal, BitDepth::ThirtyTwo).unwrap();
    let (loaded, _) = read_wav(&path).unwrap();

    let (_, amps) = amplitude_spectrum(&loaded, SR);
    // Normalization rescales both components identically, so the 2:1
    // amplitude ratio survives the export.
    let ratio = amps[300] / amps[600];
    assert!((ratio - 2.0).abs() < 1e-2, "ratio {ratio}");
}
