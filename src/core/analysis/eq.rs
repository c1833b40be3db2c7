// src/core/analysis/eq.rs
//
// EQ cut suggestions derived from destructive band overlaps. One suggestion
// per qualifying band, no interaction between suggestions.

use serde::{Deserialize, Serialize};

use crate::core::analysis::interference::FrequencyOverlap;
use crate::core::bands::BandLabel;

/// Fixed filter Q, wide enough to act on a whole band
pub const SUGGESTED_Q: f32 = 0.7;
/// dB of cut per unit of summed destructive intensity
const GAIN_PER_INTENSITY_DB: f32 = 12.0;
const MAX_CUT_DB: f32 = -12.0;
const MIN_CUT_DB: f32 = -3.0;

/// A recommended EQ cut on one track in one band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EqSuggestion {
    /// Which track to cut, 1 or 2
    pub track: u8,
    /// Band the cut applies to
    pub band: BandLabel,
    /// Lower band edge in Hz
    pub min_hz: f32,
    /// Upper band edge in Hz
    pub max_hz: f32,
    /// Suggested gain change in dB, always negative
    pub gain_reduction_db: f32,
    /// Suggested filter Q
    pub q: f32,
    /// Human-readable justification
    pub reason: String,
}

/// Rank destructive band overlaps and propose one cut per affected band.
///
/// The louder track in each band takes the cut. Bands with no destructive
/// overlap are skipped entirely. Output is sorted by summed destructive
/// intensity, strongest conflict first; ties keep band order.
pub fn suggest_eq(overlaps: &[FrequencyOverlap]) -> Vec<EqSuggestion> {
    let mut ranked: Vec<(f32, EqSuggestion)> = Vec::new();

    for band in BandLabel::all() {
        let band_overlaps: Vec<&FrequencyOverlap> =
            overlaps.iter().filter(|o| o.band == band).collect();
        if band_overlaps.is_empty() {
            continue;
        }

        let destructive_sum: f32 = band_overlaps
            .iter()
            .filter(|o| !o.is_constructive)
            .map(|o| o.overlap_intensity)
            .sum();
        if destructive_sum <= 0.0 {
            continue;
        }

        let count = band_overlaps.len() as f32;
        let avg1: f32 = band_overlaps.iter().map(|o| o.magnitude1).sum::<f32>() / count;
        let avg2: f32 = band_overlaps.iter().map(|o| o.magnitude2).sum::<f32>() / count;
        let track: u8 = if avg1 >= avg2 { 1 } else { 2 };
        let (louder, quieter) = if track == 1 { (avg1, avg2) } else { (avg2, avg1) };

        let gain = (-destructive_sum * GAIN_PER_INTENSITY_DB).clamp(MAX_CUT_DB, MIN_CUT_DB);
        let gain_reduction_db = (gain * 10.0).round() / 10.0;

        let (min_hz, max_hz) = band.range_hz();
        let reason = format!(
            "Destructive overlap in {} ({:.0}-{:.0} Hz): cut track {} ({:.1} dB vs {:.1} dB)",
            band.name(),
            min_hz,
            max_hz,
            track,
            louder,
            quieter,
        );

        ranked.push((
            destructive_sum,
            EqSuggestion {
                track,
                band,
                min_hz,
                max_hz,
                gain_reduction_db,
                q: SUGGESTED_Q,
                reason,
            },
        ));
    }

    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().map(|(_, suggestion)| suggestion).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(
        band: BandLabel,
        intensity: f32,
        magnitude1: f32,
        magnitude2: f32,
        is_constructive: bool,
    ) -> FrequencyOverlap {
        FrequencyOverlap {
            band,
            frequency: band.center_hz(),
            magnitude1,
            magnitude2,
            overlap_intensity: intensity,
            is_constructive,
            fallback: false,
        }
    }

    #[test]
    fn test_constructive_only_yields_nothing() {
        let overlaps = vec![
            overlap(BandLabel::Mid, 0.9, -20.0, -20.0, true),
            overlap(BandLabel::Presence, 0.8, -25.0, -25.0, true),
        ];
        assert!(suggest_eq(&overlaps).is_empty());
    }

    #[test]
    fn test_destructive_band_generates_cut() {
        let overlaps = vec![overlap(BandLabel::Bass, 0.5, -20.0, -30.0, false)];
        let suggestions = suggest_eq(&overlaps);

        assert_eq!(suggestions.len(), 1);
        let s = &suggestions[0];
        assert_eq!(s.track, 1);
        assert_eq!(s.band, BandLabel::Bass);
        assert_eq!(s.min_hz, 60.0);
        assert_eq!(s.max_hz, 250.0);
        assert!((s.gain_reduction_db + 6.0).abs() < 1e-6);
        assert!((s.q - SUGGESTED_Q).abs() < 1e-6);
        assert!(s.reason.contains("Bass"));
        assert!(s.reason.contains("track 1"));
    }

    #[test]
    fn test_louder_track_takes_the_cut() {
        let overlaps = vec![overlap(BandLabel::SubBass, 0.5, -30.0, -10.0, false)];
        let suggestions = suggest_eq(&overlaps);
        assert_eq!(suggestions[0].track, 2);
        assert!(suggestions[0].reason.contains("track 2"));
    }

    #[test]
    fn test_gain_clamped_to_bounds() {
        // Barely destructive: raw cut -2.52 dB is pulled up to the -3 dB floor
        let gentle = vec![overlap(BandLabel::Bass, 0.21, -20.0, -30.0, false)];
        assert!((suggest_eq(&gentle)[0].gain_reduction_db + 3.0).abs() < 1e-6);

        // Full overlap: raw cut -12 dB sits exactly at the cap
        let strong = vec![overlap(BandLabel::Bass, 1.0, -20.0, -30.0, false)];
        assert!((suggest_eq(&strong)[0].gain_reduction_db + 12.0).abs() < 1e-6);

        // Summed duplicates push past the cap and are clamped back
        let stacked = vec![
            overlap(BandLabel::Bass, 0.7, -20.0, -30.0, false),
            overlap(BandLabel::Bass, 0.7, -20.0, -30.0, false),
        ];
        let suggestions = suggest_eq(&stacked);
        assert_eq!(suggestions.len(), 1);
        assert!((suggestions[0].gain_reduction_db + 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_gain_rounded_to_tenth() {
        let overlaps = vec![overlap(BandLabel::Bass, 0.47, -20.0, -30.0, false)];
        // -0.47 x 12 = -5.64, rounded to -5.6
        assert!((suggest_eq(&overlaps)[0].gain_reduction_db + 5.6).abs() < 1e-6);
    }

    #[test]
    fn test_ranked_by_destructive_sum() {
        let overlaps = vec![
            overlap(BandLabel::SubBass, 0.4, -20.0, -30.0, false),
            overlap(BandLabel::Bass, 0.9, -20.0, -30.0, false),
            overlap(BandLabel::Mid, 0.95, -20.0, -30.0, true),
        ];
        let suggestions = suggest_eq(&overlaps);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].band, BandLabel::Bass);
        assert_eq!(suggestions[1].band, BandLabel::SubBass);
    }

    #[test]
    fn test_fallback_destructive_counts() {
        let mut entry = overlap(BandLabel::SubBass, 0.5, -20.0, -30.0, false);
        entry.fallback = true;
        let suggestions = suggest_eq(&[entry]);

        assert_eq!(suggestions.len(), 1);
        assert!((suggestions[0].gain_reduction_db + 6.0).abs() < 1e-6);
    }
}
