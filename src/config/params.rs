// src/config/params.rs
//
// Tunable analysis parameters with their documented defaults.

/// Knobs for the single-track analysis pipeline. Callers pass these
/// explicitly; nothing is read from the environment or from disk.
#[derive(Debug, Clone)]
pub struct AnalysisParams {
    /// RMS envelope window length in seconds
    pub envelope_window_secs: f64,
    /// Minimum RMS for a window to qualify as a beat candidate
    pub beat_threshold: f32,
    /// Minimum spacing between accepted beats in seconds
    pub min_beat_gap_secs: f64,
    /// STFT window length in samples
    pub fft_size: usize,
    /// STFT hop in samples
    pub hop_size: usize,
    /// Spectral peaks quieter than this (dB) are ignored
    pub peak_floor_db: f32,
    /// Global cap on retained peaks per analysis
    pub max_peaks: usize,
    /// Strongest peaks kept per content kind when building segments
    pub markers_per_kind: usize,
    /// Seconds a segment extends past its final marker
    pub marker_tail_secs: f64,
    /// Markers closer together than this merge into one segment
    pub segment_merge_gap_secs: f64,
    /// Lower bound of the speech frequency range in Hz
    pub speech_min_hz: f32,
    /// Upper bound of the speech frequency range in Hz
    pub speech_max_hz: f32,
    /// Beats required before rhythm can form a music segment
    pub min_beats_for_music: usize,
    /// Beat density (beats per second) required for a music segment
    pub music_density_threshold: f64,
    /// Inter-beat intervals above this (seconds) are discarded as implausible
    pub max_plausible_beat_interval: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            envelope_window_secs: 0.02,
            beat_threshold: 0.05,
            min_beat_gap_secs: 0.01,
            fft_size: 2048,
            hop_size: 512,
            peak_floor_db: -50.0,
            max_peaks: 100,
            markers_per_kind: 5,
            marker_tail_secs: 0.1,
            segment_merge_gap_secs: 0.5,
            speech_min_hz: 300.0,
            speech_max_hz: 3000.0,
            min_beats_for_music: 10,
            music_density_threshold: 0.5,
            max_plausible_beat_interval: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = AnalysisParams::default();
        assert_eq!(params.fft_size, 2048);
        assert_eq!(params.hop_size, 512);
        assert!((params.envelope_window_secs - 0.02).abs() < 1e-12);
        assert!((params.beat_threshold - 0.05).abs() < 1e-6);
    }
}
