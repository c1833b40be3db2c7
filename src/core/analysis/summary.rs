// src/core/analysis/summary.rs
//
// Deterministic plain-text description of an analyzed track. The same
// profile always produces the same string; no randomness, no timestamps.

use super::classifier::{ContentProfile, FrequencyRange, TimeSegment};

const NO_CONTENT_PHRASE: &str = "no easily identifiable speech, music, or environmental sounds";

/// Tempo estimates at or below this are too vague to report
const MIN_REPORTED_BPM: f64 = 40.0;
/// Bands weaker than this are left out of the dominant-band listing
const MIN_REPORTED_INTENSITY: f32 = 0.3;
const MAX_REPORTED_BANDS: usize = 3;

/// Low/mid/treble boundaries for the closing interpretation, in Hz
const LOW_END_MAX_HZ: f32 = 250.0;
const MIDRANGE_MAX_HZ: f32 = 2000.0;

/// Generate the human-readable summary for a classified track.
pub fn generate_summary(profile: &ContentProfile, duration_secs: f64) -> String {
    let mut parts: Vec<String> = Vec::new();

    let has_speech = !profile.speech_segments.is_empty();
    let has_music = !profile.music_segments.is_empty();
    let has_environmental = !profile.environmental_segments.is_empty();

    if !has_speech && !has_music && !has_environmental {
        parts.push(format!("The recording contains {}.", NO_CONTENT_PHRASE));
    } else {
        if has_speech {
            parts.push(format!(
                "Speech is present in {} segment{} covering {:.0}% of the track.",
                profile.speech_segments.len(),
                plural(profile.speech_segments.len()),
                coverage_percent(&profile.speech_segments, duration_secs),
            ));
        }
        if has_music {
            let bpm = profile.rhythm.beat_density * 60.0;
            if bpm > MIN_REPORTED_BPM {
                parts.push(format!(
                    "Rhythmic musical content covers {:.0}% of the track at roughly {:.0} BPM.",
                    coverage_percent(&profile.music_segments, duration_secs),
                    bpm,
                ));
            } else {
                parts.push(format!(
                    "Rhythmic musical content covers {:.0}% of the track.",
                    coverage_percent(&profile.music_segments, duration_secs),
                ));
            }
        }
        if has_environmental {
            parts.push(format!(
                "Low-frequency environmental sound appears in {} segment{} covering {:.0}% of the track.",
                profile.environmental_segments.len(),
                plural(profile.environmental_segments.len()),
                coverage_percent(&profile.environmental_segments, duration_secs),
            ));
        }
    }

    let prominent = prominent_bands(&profile.dominant_ranges);
    if !prominent.is_empty() {
        let names: Vec<String> = prominent
            .iter()
            .map(|r| format!("{} ({:.0}-{:.0} Hz)", r.band.name(), r.min_hz, r.max_hz))
            .collect();
        parts.push(format!("Dominant energy sits in {}.", names.join(", ")));
    }

    if let Some(strongest) = strongest_band(&profile.dominant_ranges) {
        let center = strongest.band.center_hz();
        let lean = if center < LOW_END_MAX_HZ {
            "the low end"
        } else if center <= MIDRANGE_MAX_HZ {
            "the midrange"
        } else {
            "the treble"
        };
        parts.push(format!("The overall balance leans toward {}.", lean));
    }

    parts.join(" ")
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Percentage of the duration covered by the given segments
fn coverage_percent(segments: &[TimeSegment], duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 {
        return 0.0;
    }
    let covered: f64 = segments.iter().map(|s| s.end - s.start).sum();
    (covered / duration_secs * 100.0).clamp(0.0, 100.0)
}

/// Up to three bands above the reporting threshold, strongest first
fn prominent_bands(ranges: &[FrequencyRange]) -> Vec<&FrequencyRange> {
    let mut bands: Vec<&FrequencyRange> = ranges
        .iter()
        .filter(|r| r.intensity > MIN_REPORTED_INTENSITY)
        .collect();
    bands.sort_by(|a, b| {
        b.intensity
            .partial_cmp(&a.intensity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    bands.truncate(MAX_REPORTED_BANDS);
    bands
}

/// The single strongest band with any energy; the first wins a tie so the
/// output stays deterministic
fn strongest_band(ranges: &[FrequencyRange]) -> Option<&FrequencyRange> {
    let mut strongest: Option<&FrequencyRange> = None;
    for range in ranges {
        if range.intensity <= 0.0 {
            continue;
        }
        match strongest {
            Some(best) if best.intensity >= range.intensity => {}
            _ => strongest = Some(range),
        }
    }
    strongest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::classifier::{RhythmProfile, SegmentKind};
    use crate::core::bands::BandLabel;

    fn empty_profile() -> ContentProfile {
        ContentProfile {
            speech_segments: Vec::new(),
            music_segments: Vec::new(),
            environmental_segments: Vec::new(),
            dominant_ranges: BandLabel::all()
                .iter()
                .map(|&band| {
                    let (min_hz, max_hz) = band.range_hz();
                    FrequencyRange {
                        band,
                        min_hz,
                        max_hz,
                        intensity: 0.0,
                    }
                })
                .collect(),
            rhythm: RhythmProfile {
                beat_count: 0,
                beat_density: 0.0,
                mean_beat_interval: None,
            },
        }
    }

    fn segment(start: f64, end: f64, kind: SegmentKind) -> TimeSegment {
        TimeSegment {
            start,
            end,
            kind,
            confidence: 0.8,
        }
    }

    fn set_intensity(profile: &mut ContentProfile, band: BandLabel, intensity: f32) {
        for range in &mut profile.dominant_ranges {
            if range.band == band {
                range.intensity = intensity;
            }
        }
    }

    #[test]
    fn test_silent_track_phrase() {
        let summary = generate_summary(&empty_profile(), 10.0);
        assert!(summary.contains(NO_CONTENT_PHRASE));
    }

    #[test]
    fn test_speech_coverage_reported() {
        let mut profile = empty_profile();
        profile
            .speech_segments
            .push(segment(0.0, 2.0, SegmentKind::Speech));
        profile
            .speech_segments
            .push(segment(5.0, 8.0, SegmentKind::Speech));

        let summary = generate_summary(&profile, 10.0);
        assert!(summary.contains("Speech is present in 2 segments"));
        assert!(summary.contains("50%"));
        assert!(!summary.contains(NO_CONTENT_PHRASE));
    }

    #[test]
    fn test_music_bpm_reported_when_fast_enough() {
        let mut profile = empty_profile();
        profile
            .music_segments
            .push(segment(0.4, 4.8, SegmentKind::Music));
        profile.rhythm = RhythmProfile {
            beat_count: 12,
            beat_density: 2.0,
            mean_beat_interval: Some(0.4),
        };

        let summary = generate_summary(&profile, 6.0);
        assert!(summary.contains("120 BPM"));
    }

    #[test]
    fn test_slow_tempo_suppressed() {
        let mut profile = empty_profile();
        profile
            .music_segments
            .push(segment(0.0, 20.0, SegmentKind::Music));
        profile.rhythm = RhythmProfile {
            beat_count: 12,
            beat_density: 0.6,
            mean_beat_interval: Some(1.7),
        };

        let summary = generate_summary(&profile, 20.0);
        // 36 BPM estimate is below the reporting cutoff
        assert!(!summary.contains("BPM"));
        assert!(summary.contains("Rhythmic musical content"));
    }

    #[test]
    fn test_dominant_bands_listed_strongest_first() {
        let mut profile = empty_profile();
        set_intensity(&mut profile, BandLabel::Bass, 0.9);
        set_intensity(&mut profile, BandLabel::Mid, 1.0);
        set_intensity(&mut profile, BandLabel::Presence, 0.4);
        set_intensity(&mut profile, BandLabel::SubBass, 0.2); // below cutoff

        let summary = generate_summary(&profile, 10.0);
        assert!(summary.contains("Mid (500-2000 Hz)"));
        assert!(summary.contains("Bass (60-250 Hz)"));
        assert!(summary.contains("Presence (4000-6000 Hz)"));
        assert!(!summary.contains("Sub-Bass"));

        let mid_pos = summary.find("Mid (500").unwrap();
        let bass_pos = summary.find("Bass (60").unwrap();
        assert!(mid_pos < bass_pos);
    }

    #[test]
    fn test_interpretation_tracks_strongest_band() {
        let mut profile = empty_profile();
        set_intensity(&mut profile, BandLabel::Bass, 1.0);
        assert!(generate_summary(&profile, 10.0).contains("low end"));

        let mut profile = empty_profile();
        set_intensity(&mut profile, BandLabel::Mid, 1.0);
        assert!(generate_summary(&profile, 10.0).contains("midrange"));

        let mut profile = empty_profile();
        set_intensity(&mut profile, BandLabel::Brilliance, 1.0);
        assert!(generate_summary(&profile, 10.0).contains("treble"));
    }

    #[test]
    fn test_deterministic() {
        let mut profile = empty_profile();
        profile
            .speech_segments
            .push(segment(1.0, 2.0, SegmentKind::Speech));
        set_intensity(&mut profile, BandLabel::Mid, 1.0);

        assert_eq!(
            generate_summary(&profile, 10.0),
            generate_summary(&profile, 10.0)
        );
    }
}
