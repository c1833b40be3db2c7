// src/core/analysis/envelope.rs
//
// Windowed RMS loudness envelope.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisParams;
use crate::core::cancel::CancelToken;
use crate::core::dsp::stats::rms;
use crate::error::Result;

/// RMS loudness curve over fixed, non-overlapping windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RmsEnvelope {
    /// One RMS value per window
    pub values: Vec<f32>,
    /// Window length in seconds; value `i` starts at `i * window_secs`
    pub window_secs: f64,
}

impl RmsEnvelope {
    /// Start time of window `i` in seconds
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.window_secs
    }
}

/// Compute the RMS envelope with contiguous non-overlapping windows.
///
/// The trailing partial window is measured over the samples that remain;
/// nothing is zero-padded. Empty input yields an empty envelope.
pub fn compute_rms_envelope(
    samples: &[f32],
    sample_rate: u32,
    params: &AnalysisParams,
    cancel: &CancelToken,
) -> Result<RmsEnvelope> {
    let window_len =
        ((sample_rate as f64 * params.envelope_window_secs).round() as usize).max(1);
    let mut values = Vec::with_capacity(samples.len() / window_len + 1);

    for chunk in samples.chunks(window_len) {
        cancel.check()?;
        values.push(rms(chunk));
    }

    Ok(RmsEnvelope {
        values,
        window_secs: params.envelope_window_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AnalysisParams {
        AnalysisParams::default()
    }

    #[test]
    fn test_silence_yields_zero_envelope() {
        // 1s at 44100 Hz with 20ms windows: exactly 50 windows, all zero
        let samples = vec![0.0f32; 44100];
        let envelope =
            compute_rms_envelope(&samples, 44100, &params(), &CancelToken::new()).unwrap();

        assert_eq!(envelope.values.len(), 50);
        assert!(envelope.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_trailing_partial_window() {
        // 1000 samples at window length 882: one full window plus 118 leftover
        let samples = vec![0.5f32; 1000];
        let envelope =
            compute_rms_envelope(&samples, 44100, &params(), &CancelToken::new()).unwrap();

        assert_eq!(envelope.values.len(), 2);
        assert!((envelope.values[0] - 0.5).abs() < 1e-6);
        assert!((envelope.values[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_input() {
        let envelope = compute_rms_envelope(&[], 44100, &params(), &CancelToken::new()).unwrap();
        assert!(envelope.values.is_empty());
    }

    #[test]
    fn test_window_times() {
        let envelope = RmsEnvelope {
            values: vec![0.0; 3],
            window_secs: 0.02,
        };
        assert!((envelope.time_at(2) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_cancellation() {
        let token = CancelToken::new();
        token.cancel();
        let samples = vec![0.0f32; 44100];
        assert!(compute_rms_envelope(&samples, 44100, &params(), &token).is_err());
    }
}
