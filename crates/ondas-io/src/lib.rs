//! WAV encode/decode boundary for the ondas synthesis engine.
//!
//! The engine hands a peak-normalized [`Signal`](ondas_synth::Signal) to
//! this crate; [`write_signal`] (or the lower-level [`write_wav`]) encodes
//! it as a mono PCM or IEEE-float WAV file at 8, 16, 24, or 32 bits.
//! [`read_wav`] loads a file back as f64 samples, mixing multi-channel
//! audio down to mono, for the analysis tooling.
//!
//! ```rust,ignore
//! use ondas_io::{BitDepth, write_signal};
//!
//! let signal = builder.build(&mut cache);
//! write_signal("out.wav", &signal, BitDepth::Sixteen)?;
//! ```

mod wav;

pub use wav::{BitDepth, WavInfo, read_wav, read_wav_info, write_signal, write_wav};

/// Error types for WAV I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV encode/decode error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Bit depth outside the supported set.
    #[error("unsupported bit depth: {0} (supported: 8, 16, 24, 32)")]
    UnsupportedBitDepth(u16),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for WAV I/O.
pub type Result<T> = std::result::Result<T, Error>;
