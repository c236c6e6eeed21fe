//! Fourier-series signal synthesis engine.
//!
//! Builds audio signals as sums of band-limited periodic components
//! (sine, square, sawtooth, triangle), each a truncated Fourier series
//! parameterized by frequency, amplitude, phase, and harmonic order.
//!
//! # How a component is rendered
//!
//! 1. [`series::reference_period`] evaluates the partial sum once, with
//!    the fundamental pinned to `1/duration`, one cycle across the
//!    output window. This is the O(n_samples · n_max) bottleneck.
//! 2. [`resample::remap`] stretches that period to the target frequency
//!    by cyclic index remapping, an O(n_samples) table read.
//! 3. [`ondas_cache::ComponentCache`] memoizes the result across calls
//!    and process lifetimes, keyed by the full parameter tuple.
//!
//! [`SignalBuilder`] validates a batch request (parallel arrays of
//! frequencies, amplitudes, phases, and shapes), assembles the components
//! through the cache, and peak-normalizes the sum:
//!
//! ```rust
//! use ondas_cache::ComponentCache;
//! use ondas_synth::{SignalBuilder, WaveShape};
//!
//! let builder = SignalBuilder::new(
//!     &[432.0],
//!     &[1.0],
//!     None,
//!     &[WaveShape::Sine],
//!     100,   // n_max
//!     1.0,   // duration (s)
//!     44100, // sample rate (Hz)
//! )?;
//!
//! let mut cache = ComponentCache::in_memory();
//! let signal = builder.build(&mut cache);
//! assert_eq!(signal.len(), 44100);
//! assert!((signal.peak() - 1.0).abs() < 1e-12);
//! # Ok::<(), ondas_synth::SynthError>(())
//! ```
//!
//! Execution is single-threaded and fully synchronous; one `build` call
//! runs on one call stack with no cancellation. The engine performs no
//! file I/O of its own; WAV encoding lives in `ondas-io`, and the cache
//! owns its backing file.

mod builder;
mod error;
pub mod resample;
pub mod series;
mod wave;

pub use builder::{DEFAULT_N_MAX, DEFAULT_SAMPLE_RATE, Signal, SignalBuilder, WaveComponent};
pub use error::SynthError;
pub use wave::{SUPPORTED_SHAPES, WaveShape};
