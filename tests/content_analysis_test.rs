// tests/content_analysis_test.rs
//
// End-to-end single-track pipeline tests over synthesized signals.
// Every input is generated in memory with known content, so expectations
// are exact rather than statistical.

use mixprobe::config::AnalysisParams;
use mixprobe::core::{analyze_track, analyze_track_full, CancelToken, SampleBuffer};
use mixprobe::testgen;
use mixprobe::{AnalysisError, BandLabel};

const SILENCE_PHRASE: &str = "no easily identifiable speech, music, or environmental sounds";

fn analyze(samples: Vec<f32>, sample_rate: u32) -> mixprobe::TrackAnalysis {
    let buffer = SampleBuffer::from_mono(samples, sample_rate);
    analyze_track_full(&buffer, &AnalysisParams::default(), &CancelToken::new())
        .expect("analysis should succeed")
}

#[test]
fn silence_produces_neutral_report() {
    let track = analyze(testgen::silence(1.0, 44100), 44100);

    // 1 s at 44100 Hz with 20 ms windows is exactly 50 envelope values
    assert_eq!(track.envelope.values.len(), 50);
    assert!(track.envelope.values.iter().all(|&v| v == 0.0));
    assert!(track.beats.is_empty());
    assert!(track.spectral.peaks.is_empty());

    let analysis = &track.analysis;
    assert!(!analysis.has_speech);
    assert!(!analysis.has_music_elements);
    assert!(!analysis.has_environmental_sounds);
    assert!(analysis.summary.contains(SILENCE_PHRASE));
}

#[test]
fn input_shorter_than_fft_window_is_not_an_error() {
    // 500 samples cannot fill a 2048-sample FFT window
    let track = analyze(vec![0.1; 500], 44100);

    assert!(track.spectral.frames.is_empty());
    assert!(track.spectral.peaks.is_empty());
    // The envelope still sees the samples
    assert!(!track.envelope.values.is_empty());
}

#[test]
fn click_track_forms_one_music_segment() {
    // 12 clicks spaced 0.4 s starting at 0.4 s, inside 6 s of silence
    let track = analyze(testgen::click_track(12, 0.4, 0.4, 6.0, 44100), 44100);

    assert_eq!(track.beats.len(), 12);
    assert!((track.beats[0].time - 0.4).abs() < 1e-9);
    assert!((track.beats[11].time - 4.8).abs() < 1e-9);

    assert!(track.analysis.has_music_elements);
    assert_eq!(track.analysis.music_segments.len(), 1);
    let seg = &track.analysis.music_segments[0];
    assert!((seg.start - 0.4).abs() < 1e-9);
    assert!((seg.end - 4.8).abs() < 1e-9);
    assert!((seg.confidence - 0.7).abs() < 1e-6);

    assert_eq!(track.rhythm.beat_count, 12);
    assert!((track.rhythm.beat_density - 2.0).abs() < 1e-9);
    assert!((track.rhythm.mean_beat_interval.unwrap() - 0.4).abs() < 1e-6);
}

#[test]
fn beat_times_strictly_increase_with_bounded_confidence() {
    let track = analyze(testgen::click_track(12, 0.4, 0.4, 6.0, 44100), 44100);

    assert!(!track.beats.is_empty());
    for pair in track.beats.windows(2) {
        assert!(pair[0].time < pair[1].time);
    }
    for beat in &track.beats {
        assert!((0.0..=1.0).contains(&beat.confidence));
    }
}

#[test]
fn steady_tone_reads_as_speech_band_content() {
    // 440 Hz sits in the speech range and in the Low Mid band
    let track = analyze(testgen::sine(440.0, 0.5, 2.0, 44100), 44100);

    assert!(!track.spectral.frames.is_empty());
    assert!(!track.spectral.peaks.is_empty());
    assert!(track.analysis.has_speech);
    assert!(!track.analysis.has_environmental_sounds);

    let low_mid = track
        .analysis
        .dominant_ranges
        .iter()
        .find(|r| r.band == BandLabel::LowMid)
        .expect("all seven bands are always present");
    assert!((low_mid.intensity - 1.0).abs() < 1e-6);
}

#[test]
fn same_kind_segments_are_disjoint_and_ordered() {
    let track = analyze(testgen::sine(440.0, 0.5, 2.0, 44100), 44100);

    for segments in [
        &track.analysis.speech_segments,
        &track.analysis.music_segments,
        &track.analysis.environmental_segments,
    ] {
        for pair in segments.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
        for seg in segments.iter() {
            assert!(seg.start < seg.end);
            assert!((0.0..=1.0).contains(&seg.confidence));
        }
    }
}

#[test]
fn repeated_analysis_serializes_identically() {
    let samples = testgen::white_noise(3, 0.5, 1.0, 44100);
    let buffer = SampleBuffer::from_mono(samples, 44100);
    let params = AnalysisParams::default();

    let first = analyze_track(&buffer, &params, &CancelToken::new()).unwrap();
    let second = analyze_track(&buffer, &params, &CancelToken::new()).unwrap();

    let json_first = serde_json::to_string(&first).unwrap();
    let json_second = serde_json::to_string(&second).unwrap();
    assert_eq!(json_first, json_second);
}

#[test]
fn cancelled_token_aborts_analysis() {
    let buffer = SampleBuffer::from_mono(testgen::sine(440.0, 0.5, 2.0, 44100), 44100);
    let cancel = CancelToken::new();
    cancel.cancel();

    let result = analyze_track(&buffer, &AnalysisParams::default(), &cancel);
    assert!(matches!(result, Err(AnalysisError::Cancelled)));
}
