// src/core/analysis/interference.rs
//
// Band-by-band frequency overlap between two independently analyzed tracks.
// Works on averaged magnitude spectra only; phase is long gone by this point,
// so constructive/destructive polarity comes from a fixed per-band table
// instead of a phase computation.

use serde::{Deserialize, Serialize};

use crate::core::analysis::spectral::TrackSpectrum;
use crate::core::bands::BandLabel;
use crate::core::dsp::{stats, DB_FLOOR};
use crate::error::{AnalysisError, Result};

/// Measured ratios at or below this do not count as a real overlap
const REAL_OVERLAP_MIN: f32 = 0.2;
/// Neutral intensity reported when a band has no qualifying overlap
const FALLBACK_INTENSITY: f32 = 0.5;
/// Lower clamp applied to the measured amplitude ratio
const MIN_OVERLAP_RATIO: f32 = 0.3;

/// Overlap measurement for one frequency band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyOverlap {
    /// Band the overlap was measured in
    pub band: BandLabel,
    /// Band center frequency in Hz
    pub frequency: f32,
    /// Track 1 average magnitude over the band in dB
    pub magnitude1: f32,
    /// Track 2 average magnitude over the band in dB
    pub magnitude2: f32,
    /// Overlap intensity in [0, 1]
    pub overlap_intensity: f32,
    /// Polarity from the per-band default table
    pub is_constructive: bool,
    /// True when the neutral intensity was substituted for a weak measurement
    pub fallback: bool,
}

/// Compare two track spectra and report the overlap in each of the seven
/// bands, in band order. Both spectra must share a sample rate.
pub fn analyze_interference(
    track1: &TrackSpectrum,
    track2: &TrackSpectrum,
) -> Result<Vec<FrequencyOverlap>> {
    if track1.sample_rate != track2.sample_rate {
        return Err(AnalysisError::SampleRateMismatch {
            left: track1.sample_rate,
            right: track2.sample_rate,
        });
    }

    let bands = BandLabel::all();
    let mut overlaps = Vec::with_capacity(bands.len());
    for band in bands {
        let avg1 = band_average_linear(track1, band);
        let avg2 = band_average_linear(track2, band);

        let measured = if avg1 > 0.0 && avg2 > 0.0 {
            (avg1.min(avg2) / avg1.max(avg2)).clamp(MIN_OVERLAP_RATIO, 1.0)
        } else {
            0.0
        };

        let (overlap_intensity, fallback) = if measured > REAL_OVERLAP_MIN {
            (measured, false)
        } else {
            (FALLBACK_INTENSITY, true)
        };

        overlaps.push(FrequencyOverlap {
            band,
            frequency: band.center_hz(),
            magnitude1: stats::amplitude_to_db(avg1),
            magnitude2: stats::amplitude_to_db(avg2),
            overlap_intensity,
            is_constructive: !band.default_destructive(),
            fallback,
        });
    }

    Ok(overlaps)
}

/// Mean linear amplitude over the band's bins. Bins at the dB floor count as
/// zero amplitude but still widen the denominator.
fn band_average_linear(spectrum: &TrackSpectrum, band: BandLabel) -> f32 {
    let bin_hz = spectrum.bin_hz();
    if bin_hz <= 0.0 {
        return 0.0;
    }

    let mut sum = 0.0f32;
    let mut count = 0usize;
    for (i, &db) in spectrum.magnitudes_db.iter().enumerate() {
        let freq = i as f32 * bin_hz;
        if BandLabel::containing(freq) != Some(band) {
            continue;
        }
        count += 1;
        if db > DB_FLOOR {
            sum += stats::db_to_amplitude(db);
        }
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}
