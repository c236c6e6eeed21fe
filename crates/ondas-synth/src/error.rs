//! Error types for signal synthesis.

use crate::wave::SUPPORTED_SHAPES;
use thiserror::Error;

/// Errors raised while validating a synthesis request.
///
/// All variants are deterministic functions of the input, raised before
/// any synthesis work is done. None are worth retrying.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The same frequency appeared more than once in one request.
    #[error("found duplicate frequency value in provided input")]
    IdenticalFrequencies,

    /// Malformed input: mismatched array lengths or non-finite values.
    #[error("{0}")]
    ProvidedInput(String),

    /// A wave-shape name outside the supported set.
    #[error("'{shape}' wave shape not supported, must be one of {supported:?}")]
    UnsupportedShape {
        /// The offending name.
        shape: String,
        /// The supported shape names.
        supported: [&'static str; 4],
    },
}

impl SynthError {
    pub(crate) fn unsupported_shape(shape: impl Into<String>) -> Self {
        SynthError::UnsupportedShape {
            shape: shape.into(),
            supported: SUPPORTED_SHAPES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_shape_names_offender_and_supported_set() {
        let msg = SynthError::unsupported_shape("pulse").to_string();
        assert!(msg.contains("'pulse'"), "got: {msg}");
        for name in SUPPORTED_SHAPES {
            assert!(msg.contains(name), "missing '{name}' in: {msg}");
        }
    }

    #[test]
    fn identical_frequencies_display() {
        let msg = SynthError::IdenticalFrequencies.to_string();
        assert_eq!(msg, "found duplicate frequency value in provided input");
    }
}
