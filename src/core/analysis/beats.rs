// src/core/analysis/beats.rs
//
// Beat onset detection over the RMS envelope.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisParams;

use super::envelope::RmsEnvelope;

/// A detected beat onset
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Beat {
    /// Onset time in seconds
    pub time: f64,
    /// Detection confidence in [0, 1]
    pub confidence: f32,
}

/// Find local loudness maxima that clear the beat threshold.
///
/// Candidates are interior envelope windows that rise strictly above the
/// previous window and are not exceeded by the next one, so the first window
/// of a flat plateau wins. Candidates closer than the minimum gap to the
/// last accepted beat are suppressed regardless of strength. Returned beats
/// are strictly increasing in time.
pub fn detect_beats(envelope: &RmsEnvelope, params: &AnalysisParams) -> Vec<Beat> {
    let values = &envelope.values;
    if values.len() < 3 {
        return Vec::new();
    }

    let min_gap = ((params.min_beat_gap_secs / envelope.window_secs).round() as usize).max(1);
    let mut beats = Vec::new();
    let mut last_accepted: Option<usize> = None;

    for i in 1..values.len() - 1 {
        let v = values[i];
        if v <= params.beat_threshold || v <= values[i - 1] || v < values[i + 1] {
            continue;
        }
        if let Some(last) = last_accepted {
            if i - last < min_gap {
                continue;
            }
        }
        beats.push(Beat {
            time: envelope.time_at(i),
            confidence: (v * 5.0).min(1.0),
        });
        last_accepted = Some(i);
    }

    beats
}
