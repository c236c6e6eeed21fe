//! Multi-component signal assembly and validation.

use crate::error::SynthError;
use crate::resample::remap;
use crate::series::{reference_period, time_grid};
use crate::wave::WaveShape;
use ondas_cache::ComponentCache;
use std::collections::HashSet;

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default harmonic truncation order.
pub const DEFAULT_N_MAX: u32 = 1000;

/// One periodic component of a synthesis request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveComponent {
    /// Target frequency in Hz, strictly positive.
    pub frequency: f64,
    /// Linear amplitude. Only relative scale survives peak normalization.
    pub amplitude: f64,
    /// Phase offset in degrees.
    pub phase_degrees: f64,
    /// Wave shape.
    pub shape: WaveShape,
}

impl WaveComponent {
    /// Deterministic cache key for this component under the given render
    /// configuration.
    ///
    /// The full parameter tuple is concatenated in a fixed order; f64
    /// fields use Rust's shortest-round-trip formatting, so distinct
    /// parameter values always map to distinct keys.
    pub fn fingerprint(&self, n_max: u32, sample_rate: u32, duration: f64) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}:{}",
            self.frequency,
            self.amplitude,
            self.phase_degrees,
            self.shape,
            n_max,
            sample_rate,
            duration
        )
    }
}

/// A rendered signal: peak-normalized samples plus render configuration.
///
/// Built once by [`SignalBuilder::build`], normalized once, immutable
/// thereafter.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: u32,
    duration: f64,
}

impl Signal {
    /// Sample buffer, peak-normalized to unit amplitude.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the signal, returning the sample buffer.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of samples, `floor(duration · sample_rate)`.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum absolute sample value (1 after normalization, unless the
    /// signal is all zeros).
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |m, &v| m.max(v.abs()))
    }
}

/// Create a [`Signal`] from a Fourier-series description.
///
/// Validation is fail-fast: every invariant is checked at construction,
/// before any synthesis cost is incurred. [`build`](Self::build) then
/// obtains each component through the [`ComponentCache`] (a miss runs the
/// reference-period evaluation and cyclic remap), sums the components, and
/// peak-normalizes the result.
///
/// ```rust
/// use ondas_cache::ComponentCache;
/// use ondas_synth::{SignalBuilder, WaveShape};
///
/// let builder = SignalBuilder::new(
///     &[432.0, 864.0],
///     &[1.0, 0.5],
///     None,
///     &[WaveShape::Sine, WaveShape::Triangle],
///     100,
///     1.0,
///     44100,
/// )?;
/// let signal = builder.build(&mut ComponentCache::in_memory());
/// assert_eq!(signal.len(), 44100);
/// # Ok::<(), ondas_synth::SynthError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SignalBuilder {
    components: Vec<WaveComponent>,
    n_max: u32,
    duration: f64,
    sample_rate: u32,
}

impl SignalBuilder {
    /// Validate a batch request given as parallel arrays.
    ///
    /// `phases = None` means zero phase for every component.
    pub fn new(
        frequencies: &[f64],
        amplitudes: &[f64],
        phases: Option<&[f64]>,
        shapes: &[WaveShape],
        n_max: u32,
        duration: f64,
        sample_rate: u32,
    ) -> Result<Self, SynthError> {
        let zero_phases;
        let phases = match phases {
            Some(p) => p,
            None => {
                zero_phases = vec![0.0; frequencies.len()];
                &zero_phases
            }
        };

        check_duplicate_frequencies(frequencies)?;
        if frequencies.len() != amplitudes.len()
            || frequencies.len() != phases.len()
            || frequencies.len() != shapes.len()
        {
            return Err(SynthError::ProvidedInput(String::from(
                "provided frequencies, amplitudes, phases, and wave shapes \
                 need to be equal in number",
            )));
        }
        if [frequencies, amplitudes, phases]
            .iter()
            .any(|values| values.iter().any(|v| !v.is_finite()))
        {
            return Err(SynthError::ProvidedInput(String::from(
                "use only finite real numbers for frequencies, amplitudes, and phases",
            )));
        }
        if frequencies.iter().any(|&f| f <= 0.0) {
            return Err(SynthError::ProvidedInput(String::from(
                "frequencies must be positive",
            )));
        }
        check_render_config(n_max, duration, sample_rate)?;

        let components = frequencies
            .iter()
            .zip(amplitudes)
            .zip(phases)
            .zip(shapes)
            .map(|(((&frequency, &amplitude), &phase_degrees), &shape)| WaveComponent {
                frequency,
                amplitude,
                phase_degrees,
                shape,
            })
            .collect();

        Ok(Self {
            components,
            n_max,
            duration,
            sample_rate,
        })
    }

    /// Validate a request given as a component list.
    pub fn from_components(
        components: &[WaveComponent],
        n_max: u32,
        duration: f64,
        sample_rate: u32,
    ) -> Result<Self, SynthError> {
        let frequencies: Vec<f64> = components.iter().map(|c| c.frequency).collect();
        let amplitudes: Vec<f64> = components.iter().map(|c| c.amplitude).collect();
        let phases: Vec<f64> = components.iter().map(|c| c.phase_degrees).collect();
        let shapes: Vec<WaveShape> = components.iter().map(|c| c.shape).collect();
        Self::new(
            &frequencies,
            &amplitudes,
            Some(&phases),
            &shapes,
            n_max,
            duration,
            sample_rate,
        )
    }

    /// The validated components, in request order.
    pub fn components(&self) -> &[WaveComponent] {
        &self.components
    }

    /// Number of output samples, `floor(duration · sample_rate)`.
    pub fn n_samples(&self) -> usize {
        (self.duration * f64::from(self.sample_rate)) as usize
    }

    /// Sum all components and peak-normalize.
    ///
    /// Each component is fetched through `cache`; a hit skips the
    /// trigonometric evaluation entirely. The summed buffer is divided by
    /// its own maximum absolute value, so the output has unit peak and
    /// only the components' *relative* loudness survives. An all-zero sum
    /// is returned as-is.
    pub fn build(&self, cache: &mut ComponentCache) -> Signal {
        let n_samples = self.n_samples();
        let grid = time_grid(self.duration, n_samples);
        let mut samples = vec![0.0f64; n_samples];

        for component in &self.components {
            tracing::info!(
                shape = %component.shape,
                frequency = component.frequency,
                "adding component"
            );
            let key = component.fingerprint(self.n_max, self.sample_rate, self.duration);
            let rendered = cache.get_or_compute(&key, || {
                let period = reference_period(
                    component.shape,
                    component.amplitude,
                    component.phase_degrees,
                    self.duration,
                    &grid,
                    self.n_max,
                );
                remap(&period, component.frequency, self.duration)
            });
            for (acc, &value) in samples.iter_mut().zip(rendered) {
                *acc += value;
            }
        }

        let peak = samples.iter().fold(0.0f64, |m, &v| m.max(v.abs()));
        if peak > 0.0 {
            for value in &mut samples {
                *value /= peak;
            }
        }

        Signal {
            samples,
            sample_rate: self.sample_rate,
            duration: self.duration,
        }
    }
}

/// Frequencies must be pairwise distinct (bit-exact comparison; NaN is
/// rejected by the finiteness check).
fn check_duplicate_frequencies(frequencies: &[f64]) -> Result<(), SynthError> {
    let mut seen = HashSet::with_capacity(frequencies.len());
    for frequency in frequencies {
        if !seen.insert(frequency.to_bits()) {
            return Err(SynthError::IdenticalFrequencies);
        }
    }
    Ok(())
}

fn check_render_config(n_max: u32, duration: f64, sample_rate: u32) -> Result<(), SynthError> {
    if n_max == 0 {
        return Err(SynthError::ProvidedInput(String::from(
            "n_max must be at least 1",
        )));
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SynthError::ProvidedInput(String::from(
            "duration must be a positive finite number of seconds",
        )));
    }
    if sample_rate == 0 {
        return Err(SynthError::ProvidedInput(String::from(
            "sample rate must be at least 1 Hz",
        )));
    }
    Ok(())
}
