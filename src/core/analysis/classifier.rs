// src/core/analysis/classifier.rs
//
// Heuristic content classification from spectral peaks and beat events.
// Speech and environmental segments come from frequency-placed peak
// markers; music segments come from rhythm, not from peaks.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisParams;
use crate::core::bands::BandLabel;
use crate::core::dsp::{DB_CEILING, DB_FLOOR};

use super::beats::Beat;
use super::spectral::FrequencyPeak;

/// Confidence assigned to the rhythm-derived music segment
const MUSIC_SEGMENT_CONFIDENCE: f32 = 0.7;

/// Content categories the classifier reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Speech,
    Music,
    Environmental,
}

/// A labelled span of the track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSegment {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds, always greater than `start`
    pub end: f64,
    pub kind: SegmentKind,
    /// Confidence in [0, 1]
    pub confidence: f32,
}

/// Normalized energy presence of one frequency band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyRange {
    pub band: BandLabel,
    pub min_hz: f32,
    pub max_hz: f32,
    /// In [0, 1], normalized against the strongest band of this analysis
    pub intensity: f32,
}

/// Beat statistics gathered during classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhythmProfile {
    pub beat_count: usize,
    /// Beats per second over the full duration
    pub beat_density: f64,
    /// Mean interval between consecutive beats, restricted to (0, 2] s
    pub mean_beat_interval: Option<f64>,
}

/// Classification output, consumed by the summary generator and the
/// final analysis record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentProfile {
    pub speech_segments: Vec<TimeSegment>,
    pub music_segments: Vec<TimeSegment>,
    pub environmental_segments: Vec<TimeSegment>,
    /// All seven bands in ascending frequency order
    pub dominant_ranges: Vec<FrequencyRange>,
    pub rhythm: RhythmProfile,
}

/// A peak reduced to its time and normalized strength
#[derive(Debug, Clone, Copy)]
struct Marker {
    time: f64,
    confidence: f32,
}

/// Classify track content from ranked spectral peaks and detected beats.
///
/// `peaks` must be sorted by magnitude descending, as `SpectralAnalyzer`
/// produces them.
pub fn classify_content(
    peaks: &[FrequencyPeak],
    beats: &[Beat],
    duration_secs: f64,
    params: &AnalysisParams,
) -> ContentProfile {
    let speech_markers = strongest_markers(peaks, SegmentKind::Speech, params);
    let env_markers = strongest_markers(peaks, SegmentKind::Environmental, params);

    let rhythm = rhythm_profile(beats, duration_secs, params);

    ContentProfile {
        speech_segments: merge_markers(&speech_markers, SegmentKind::Speech, params),
        music_segments: music_segment(beats, &rhythm, params),
        environmental_segments: merge_markers(&env_markers, SegmentKind::Environmental, params),
        dominant_ranges: band_profile(peaks),
        rhythm,
    }
}

/// Assign a content kind to a peak by frequency alone
fn peak_kind(frequency: f32, params: &AnalysisParams) -> SegmentKind {
    if frequency < params.speech_min_hz {
        SegmentKind::Environmental
    } else if frequency <= params.speech_max_hz {
        SegmentKind::Speech
    } else {
        SegmentKind::Music
    }
}

/// Normalized peak strength: the dB range mapped onto [0, 1]
fn peak_weight(magnitude_db: f32) -> f32 {
    ((magnitude_db - DB_FLOOR) / (DB_CEILING - DB_FLOOR)).clamp(0.0, 1.0)
}

/// The strongest markers of one kind, sorted by time. The peak list is
/// already magnitude-ranked, so the first matches are the strongest.
fn strongest_markers(
    peaks: &[FrequencyPeak],
    kind: SegmentKind,
    params: &AnalysisParams,
) -> Vec<Marker> {
    let mut markers: Vec<Marker> = peaks
        .iter()
        .filter(|p| peak_kind(p.frequency, params) == kind)
        .take(params.markers_per_kind)
        .map(|p| Marker {
            time: p.time,
            confidence: peak_weight(p.magnitude),
        })
        .collect();

    markers.sort_by(|a, b| {
        a.time
            .partial_cmp(&b.time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    markers
}

/// Merge time-ordered markers into segments. A marker within the merge gap
/// extends the open segment to `marker.time + tail`; a larger gap closes
/// the segment and opens a new one. Segment confidence is the mean of its
/// markers' confidences.
fn merge_markers(markers: &[Marker], kind: SegmentKind, params: &AnalysisParams) -> Vec<TimeSegment> {
    let mut segments = Vec::new();
    if markers.is_empty() {
        return segments;
    }

    let mut start = markers[0].time;
    let mut end = markers[0].time + params.marker_tail_secs;
    let mut conf_sum = markers[0].confidence;
    let mut count = 1u32;
    let mut last_time = markers[0].time;

    for marker in &markers[1..] {
        if marker.time - last_time < params.segment_merge_gap_secs {
            end = marker.time + params.marker_tail_secs;
            conf_sum += marker.confidence;
            count += 1;
        } else {
            segments.push(TimeSegment {
                start,
                end,
                kind,
                confidence: (conf_sum / count as f32).clamp(0.0, 1.0),
            });
            start = marker.time;
            end = marker.time + params.marker_tail_secs;
            conf_sum = marker.confidence;
            count = 1;
        }
        last_time = marker.time;
    }

    segments.push(TimeSegment {
        start,
        end,
        kind,
        confidence: (conf_sum / count as f32).clamp(0.0, 1.0),
    });
    segments
}

fn rhythm_profile(beats: &[Beat], duration_secs: f64, params: &AnalysisParams) -> RhythmProfile {
    let beat_density = if duration_secs > 0.0 {
        beats.len() as f64 / duration_secs
    } else {
        0.0
    };

    let mut interval_sum = 0.0;
    let mut interval_count = 0usize;
    for pair in beats.windows(2) {
        let dt = pair[1].time - pair[0].time;
        if dt > 0.0 && dt <= params.max_plausible_beat_interval {
            interval_sum += dt;
            interval_count += 1;
        }
    }

    let mean_beat_interval = if interval_count > 0 {
        Some(interval_sum / interval_count as f64)
    } else {
        None
    };

    RhythmProfile {
        beat_count: beats.len(),
        beat_density,
        mean_beat_interval,
    }
}

/// At most one music segment, spanning the first to the last beat, emitted
/// only when enough beats arrive densely enough to read as rhythm.
fn music_segment(beats: &[Beat], rhythm: &RhythmProfile, params: &AnalysisParams) -> Vec<TimeSegment> {
    if beats.len() < params.min_beats_for_music
        || rhythm.beat_density <= params.music_density_threshold
    {
        return Vec::new();
    }

    let start = beats[0].time;
    let end = beats[beats.len() - 1].time;
    if end <= start {
        return Vec::new();
    }

    vec![TimeSegment {
        start,
        end,
        kind: SegmentKind::Music,
        confidence: MUSIC_SEGMENT_CONFIDENCE,
    }]
}

/// Accumulate normalized peak strength per band, then scale all seven by
/// the maximum. Tracks with no in-band peaks report all-zero intensities.
fn band_profile(peaks: &[FrequencyPeak]) -> Vec<FrequencyRange> {
    let totals: Vec<f32> = BandLabel::all()
        .iter()
        .map(|&band| {
            peaks
                .iter()
                .filter(|p| BandLabel::containing(p.frequency) == Some(band))
                .map(|p| peak_weight(p.magnitude))
                .sum()
        })
        .collect();

    let max = totals.iter().cloned().fold(0.0f32, f32::max);

    BandLabel::all()
        .iter()
        .zip(totals)
        .map(|(&band, total)| {
            let (min_hz, max_hz) = band.range_hz();
            FrequencyRange {
                band,
                min_hz,
                max_hz,
                intensity: if max > 0.0 { total / max } else { 0.0 },
            }
        })
        .collect()
}
