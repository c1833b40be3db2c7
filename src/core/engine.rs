// src/core/engine.rs
//
// Single-track analysis pipeline. The envelope and spectral passes run in
// parallel over the same immutable buffer, then beat detection,
// classification, and summary generation run in sequence.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisParams;
use crate::core::analysis::{
    classify_content, compute_rms_envelope, detect_beats, generate_summary, Beat, ContentProfile,
    FrequencyRange, RhythmProfile, RmsEnvelope, SpectralAnalyzer, SpectralData, TimeSegment,
};
use crate::core::buffer::SampleBuffer;
use crate::core::cancel::CancelToken;
use crate::error::Result;

/// Serializable result of one single-track analysis. Contains no handles and
/// no timestamps; the same input always serializes to the same bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioAnalysis {
    pub has_speech: bool,
    pub has_music_elements: bool,
    pub has_environmental_sounds: bool,
    pub speech_segments: Vec<TimeSegment>,
    pub music_segments: Vec<TimeSegment>,
    pub environmental_segments: Vec<TimeSegment>,
    /// All seven bands in ascending frequency order
    pub dominant_ranges: Vec<FrequencyRange>,
    /// Deterministic plain-text description
    pub summary: String,
}

impl AudioAnalysis {
    fn from_profile(profile: ContentProfile, summary: String) -> Self {
        AudioAnalysis {
            has_speech: !profile.speech_segments.is_empty(),
            has_music_elements: !profile.music_segments.is_empty(),
            has_environmental_sounds: !profile.environmental_segments.is_empty(),
            speech_segments: profile.speech_segments,
            music_segments: profile.music_segments,
            environmental_segments: profile.environmental_segments,
            dominant_ranges: profile.dominant_ranges,
            summary,
        }
    }
}

/// Analysis record plus every intermediate the pipeline produced. The CLI
/// uses the intermediates for reporting, spectrogram rendering, and
/// dual-track comparison.
#[derive(Debug, Clone)]
pub struct TrackAnalysis {
    pub analysis: AudioAnalysis,
    pub envelope: RmsEnvelope,
    pub beats: Vec<Beat>,
    pub spectral: SpectralData,
    pub rhythm: RhythmProfile,
}

/// Run the full single-track pipeline and return the serializable record.
pub fn analyze_track(
    buffer: &SampleBuffer,
    params: &AnalysisParams,
    cancel: &CancelToken,
) -> Result<AudioAnalysis> {
    Ok(analyze_track_full(buffer, params, cancel)?.analysis)
}

/// Run the full single-track pipeline, keeping the intermediate passes.
pub fn analyze_track_full(
    buffer: &SampleBuffer,
    params: &AnalysisParams,
    cancel: &CancelToken,
) -> Result<TrackAnalysis> {
    let samples = buffer.primary();
    let duration = buffer.duration_secs();
    log::info!(
        "analyzing {:.2} s of audio at {} Hz ({} samples)",
        duration,
        buffer.sample_rate,
        samples.len()
    );

    // Envelope and spectral passes share only the immutable samples
    let (envelope, spectral) = {
        let (envelope_res, spectral_res) = rayon::join(
            || compute_rms_envelope(samples, buffer.sample_rate, params, cancel),
            || {
                let mut analyzer = SpectralAnalyzer::new(params, buffer.sample_rate);
                analyzer.analyze(samples, cancel)
            },
        );
        (envelope_res?, spectral_res?)
    };
    cancel.check()?;

    let beats = detect_beats(&envelope, params);
    log::debug!(
        "envelope windows: {}, spectral frames: {}, peaks: {}, beats: {}",
        envelope.values.len(),
        spectral.frames.len(),
        spectral.peaks.len(),
        beats.len()
    );

    let profile = classify_content(&spectral.peaks, &beats, duration, params);
    let summary = generate_summary(&profile, duration);
    let rhythm = profile.rhythm.clone();

    Ok(TrackAnalysis {
        analysis: AudioAnalysis::from_profile(profile, summary),
        envelope,
        beats,
        spectral,
        rhythm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen;

    #[test]
    fn test_silence_yields_neutral_analysis() {
        let buffer = SampleBuffer::from_mono(testgen::silence(1.0, 44100), 44100);
        let analysis =
            analyze_track(&buffer, &AnalysisParams::default(), &CancelToken::new()).unwrap();

        assert!(!analysis.has_speech);
        assert!(!analysis.has_music_elements);
        assert!(!analysis.has_environmental_sounds);
        assert!(analysis
            .summary
            .contains("no easily identifiable speech, music, or environmental sounds"));
    }

    #[test]
    fn test_empty_buffer_is_valid_input() {
        let buffer = SampleBuffer::from_mono(Vec::new(), 44100);
        let result = analyze_track_full(&buffer, &AnalysisParams::default(), &CancelToken::new());

        let track = result.unwrap();
        assert!(track.envelope.values.is_empty());
        assert!(track.beats.is_empty());
        assert!(track.spectral.frames.is_empty());
    }

    #[test]
    fn test_click_track_reads_as_music() {
        let samples = testgen::click_track(12, 0.4, 0.4, 6.0, 44100);
        let buffer = SampleBuffer::from_mono(samples, 44100);
        let track =
            analyze_track_full(&buffer, &AnalysisParams::default(), &CancelToken::new()).unwrap();

        assert!(track.beats.len() >= 12);
        assert!(track.analysis.has_music_elements);
        assert_eq!(track.analysis.music_segments.len(), 1);
        assert!((track.analysis.music_segments[0].confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_cancelled_before_start() {
        let buffer = SampleBuffer::from_mono(testgen::sine(440.0, 0.5, 1.0, 44100), 44100);
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = analyze_track(&buffer, &AnalysisParams::default(), &cancel);
        assert!(matches!(result, Err(crate::error::AnalysisError::Cancelled)));
    }
}
