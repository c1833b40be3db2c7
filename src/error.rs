// src/error.rs
//
// Error types shared across the analysis pipeline.

use thiserror::Error;

/// Errors produced by the analysis engine and its decoding front-end
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Interference analysis requires both spectra on a common sample rate
    #[error("sample rate mismatch: track 1 is {left} Hz, track 2 is {right} Hz")]
    SampleRateMismatch { left: u32, right: u32 },

    /// Analysis was stopped through its cancellation token
    #[error("analysis cancelled")]
    Cancelled,

    /// The decoding front-end could not produce samples
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::SampleRateMismatch {
            left: 44100,
            right: 48000,
        };
        assert!(err.to_string().contains("44100"));
        assert!(err.to_string().contains("48000"));

        let err = AnalysisError::Cancelled;
        assert_eq!(err.to_string(), "analysis cancelled");
    }
}
