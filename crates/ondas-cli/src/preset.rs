//! TOML patch files describing a full render.
//!
//! A patch file replaces the `-c` flags and scalar options:
//!
//! ```toml
//! duration = 1.0
//! sample_rate = 44100
//! n_max = 1000
//!
//! [[component]]
//! frequency = 432.0
//! amplitude = 1.0
//! shape = "sine"
//!
//! [[component]]
//! frequency = 864.0
//! amplitude = 0.5
//! phase = 90.0
//! shape = "triangle"
//! ```

use anyhow::Context;
use ondas_synth::{DEFAULT_SAMPLE_RATE, WaveComponent};
use serde::Deserialize;
use std::path::Path;

fn default_duration() -> f64 {
    1.0
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_n_max() -> u32 {
    100
}

fn default_amplitude() -> f64 {
    1.0
}

fn default_shape() -> String {
    String::from("sine")
}

/// One `[[component]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetComponent {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Linear amplitude.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Phase in degrees.
    #[serde(default)]
    pub phase: f64,
    /// Wave shape name.
    #[serde(default = "default_shape")]
    pub shape: String,
}

/// A parsed patch file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderPreset {
    /// Duration in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Fourier terms per component.
    #[serde(default = "default_n_max")]
    pub n_max: u32,
    /// Components, in render order.
    #[serde(rename = "component")]
    pub components: Vec<PresetComponent>,
}

impl RenderPreset {
    /// Load and parse a patch file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).context("invalid patch file")
    }

    /// Resolve the component tables, parsing shape names.
    pub fn wave_components(&self) -> anyhow::Result<Vec<WaveComponent>> {
        self.components
            .iter()
            .map(|c| {
                Ok(WaveComponent {
                    frequency: c.frequency,
                    amplitude: c.amplitude,
                    phase_degrees: c.phase,
                    shape: c.shape.parse()?,
                })
            })
            .collect()
    }
}
