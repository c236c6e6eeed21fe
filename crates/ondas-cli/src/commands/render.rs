//! Signal rendering command.

use crate::preset::RenderPreset;
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ondas_cache::ComponentCache;
use ondas_io::{BitDepth, write_signal};
use ondas_synth::{SignalBuilder, WaveComponent, WaveShape};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for `ondas render`.
#[derive(Args)]
pub struct RenderArgs {
    /// Wave component as FREQ:AMP[:PHASE[:SHAPE]], repeatable
    /// (e.g. -c 432:1 -c 864:0.5:90:triangle)
    #[arg(
        short = 'c',
        long = "component",
        value_name = "SPEC",
        value_parser = parse_component,
        required_unless_present = "preset"
    )]
    components: Vec<WaveComponent>,

    /// TOML patch file describing the whole render (replaces -c and the
    /// scalar options below)
    #[arg(long, value_name = "FILE", conflicts_with = "components")]
    preset: Option<PathBuf>,

    /// Output WAV file
    #[arg(short, long, default_value = "out.wav")]
    out: PathBuf,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = 44100)]
    sample_rate: u32,

    /// Duration in seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f64,

    /// Fourier terms per component
    #[arg(short = 'n', long, default_value_t = 100)]
    n_max: u32,

    /// Output bit depth (8, 16, 24, or 32)
    #[arg(long, default_value_t = 16)]
    bit_depth: u16,

    /// Component cache file (defaults to the user cache directory)
    #[arg(long, value_name = "FILE")]
    cache: Option<PathBuf>,

    /// Skip the on-disk component cache for this run
    #[arg(long)]
    no_cache: bool,
}

/// Parse a `FREQ:AMP[:PHASE[:SHAPE]]` component spec.
fn parse_component(s: &str) -> Result<WaveComponent, String> {
    let fields: Vec<&str> = s.split(':').collect();
    if fields.len() > 4 {
        return Err(format!(
            "invalid component '{s}' (expected FREQ:AMP[:PHASE[:SHAPE]])"
        ));
    }

    let number = |field: &str, name: &str| -> Result<f64, String> {
        field
            .parse::<f64>()
            .map_err(|_| format!("invalid {name} '{field}' in component '{s}'"))
    };

    let frequency = number(fields[0], "frequency")?;
    let amplitude = fields.get(1).map_or(Ok(1.0), |f| number(f, "amplitude"))?;
    let phase_degrees = fields.get(2).map_or(Ok(0.0), |f| number(f, "phase"))?;
    let shape = fields
        .get(3)
        .map_or(Ok(WaveShape::Sine), |f| {
            f.parse::<WaveShape>().map_err(|e| e.to_string())
        })?;

    Ok(WaveComponent {
        frequency,
        amplitude,
        phase_degrees,
        shape,
    })
}

/// Render the requested components and write the WAV file.
pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let (components, n_max, duration, sample_rate) = match &args.preset {
        Some(path) => {
            let preset = RenderPreset::load(path)
                .with_context(|| format!("loading patch file '{}'", path.display()))?;
            (
                preset.wave_components()?,
                preset.n_max,
                preset.duration,
                preset.sample_rate,
            )
        }
        None => (
            args.components.clone(),
            args.n_max,
            args.duration,
            args.sample_rate,
        ),
    };

    let bit_depth = BitDepth::try_from(args.bit_depth)?;
    let builder = SignalBuilder::from_components(&components, n_max, duration, sample_rate)?;

    let mut cache = if args.no_cache {
        ComponentCache::in_memory()
    } else if let Some(path) = &args.cache {
        ComponentCache::open(path)
    } else {
        ComponentCache::at_default_location()
    };

    let spinner = ProgressBar::new_spinner().with_message(format!(
        "rendering {} component(s), {duration} s at {sample_rate} Hz",
        components.len()
    ));
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    tracing::info!("building signal");
    let signal = builder.build(&mut cache);
    spinner.finish_and_clear();

    tracing::info!("exporting signal");
    write_signal(&args.out, &signal, bit_depth)
        .with_context(|| format!("writing '{}'", args.out.display()))?;
    println!("Saved audio on {}", args.out.display());
    Ok(())
}
