//! Error types for the wavebars crate.

use std::fmt;

/// Errors that can occur during sequence normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An empty input was given where a nonzero-length output was requested.
    ///
    /// The resampler pads undershoot with the last input element, so there is
    /// no meaningful result for an empty input and a nonzero target.
    EmptyInput,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::EmptyInput => {
                write!(f, "cannot resample an empty sequence to a nonzero length")
            }
        }
    }
}

impl std::error::Error for SequenceError {}
