//! Spectral peak report for WAV files.

use anyhow::Context;
use clap::Args;
use ondas_analysis::{peaks_above, power_spectrum};
use ondas_io::read_wav;
use std::path::PathBuf;

/// Arguments for `ondas analyze`.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Report peaks at or above this fraction of the maximum power
    #[arg(long, default_value_t = 0.1)]
    threshold: f64,
}

/// Load the WAV file and print its spectral peaks.
pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let (samples, info) = read_wav(&args.input)
        .with_context(|| format!("reading '{}'", args.input.display()))?;

    println!(
        "{}: {} Hz, {}-bit, {} channel(s), {:.2} s",
        args.input.display(),
        info.sample_rate,
        info.bits_per_sample,
        info.channels,
        info.duration_secs
    );

    let (frequencies, powers) = power_spectrum(&samples, info.sample_rate);
    let peaks = peaks_above(&frequencies, &powers, args.threshold);
    if peaks.is_empty() {
        println!("no spectral peaks above threshold");
        return Ok(());
    }

    println!(
        "peaks at ≥ {:.0}% of maximum power:",
        args.threshold * 100.0
    );
    for peak in peaks {
        println!("{:>12.2} Hz  power {:.6}", peak.frequency, peak.value);
    }
    Ok(())
}
