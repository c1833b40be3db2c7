// src/core/analysis/spectral.rs
//
// Short-time spectral analysis: dB spectrogram frames plus the prominent
// frequency peaks ranked across the whole track.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisParams;
use crate::core::cancel::CancelToken;
use crate::core::dsp::stats::{amplitude_to_db, db_to_amplitude};
use crate::core::dsp::{FftProcessor, DB_FLOOR};
use crate::error::Result;

/// One spectrogram column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrogramFrame {
    /// Frame start time in seconds
    pub time: f64,
    /// Per-bin magnitudes in dB, clamped to [-100, 0]
    pub magnitudes_db: Vec<f32>,
}

/// A prominent spectral peak
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrequencyPeak {
    /// Peak frequency in Hz
    pub frequency: f32,
    /// Peak magnitude in dB
    pub magnitude: f32,
    /// Start time of the frame containing the peak
    pub time: f64,
}

/// Spectrogram frames plus globally ranked peaks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralData {
    pub frames: Vec<SpectrogramFrame>,
    /// Sorted by magnitude descending, truncated to the configured maximum
    pub peaks: Vec<FrequencyPeak>,
}

/// Hop-based STFT analyzer with a cached window
pub struct SpectralAnalyzer {
    fft: FftProcessor,
    hop_size: usize,
    sample_rate: u32,
    peak_floor_db: f32,
    max_peaks: usize,
}

impl SpectralAnalyzer {
    pub fn new(params: &AnalysisParams, sample_rate: u32) -> Self {
        Self {
            fft: FftProcessor::new(params.fft_size),
            hop_size: params.hop_size.max(1),
            sample_rate,
            peak_floor_db: params.peak_floor_db,
            max_peaks: params.max_peaks,
        }
    }

    /// Analyze `samples`, producing one frame for every hop-aligned offset
    /// with a full FFT window remaining. Input shorter than one window
    /// yields empty frames and peaks, not an error.
    pub fn analyze(&mut self, samples: &[f32], cancel: &CancelToken) -> Result<SpectralData> {
        let fft_size = self.fft.fft_size();
        let mut frames = Vec::new();
        let mut peaks = Vec::new();

        if samples.len() >= fft_size && fft_size > 0 {
            let mut offset = 0;
            while offset + fft_size <= samples.len() {
                cancel.check()?;
                let time = offset as f64 / self.sample_rate as f64;
                let magnitudes_db = self.fft.db_spectrum(&samples[offset..offset + fft_size]);
                self.collect_frame_peaks(&magnitudes_db, time, &mut peaks);
                frames.push(SpectrogramFrame {
                    time,
                    magnitudes_db,
                });
                offset += self.hop_size;
            }
        }

        peaks.sort_by(|a, b| {
            b.magnitude
                .partial_cmp(&a.magnitude)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        peaks.truncate(self.max_peaks);

        Ok(SpectralData { frames, peaks })
    }

    /// Interior bins that clear the peak floor and rise above both neighbors
    fn collect_frame_peaks(&self, magnitudes_db: &[f32], time: f64, out: &mut Vec<FrequencyPeak>) {
        let fft_size = self.fft.fft_size() as f32;
        for bin in 1..magnitudes_db.len().saturating_sub(1) {
            let mag = magnitudes_db[bin];
            if mag > self.peak_floor_db
                && mag > magnitudes_db[bin - 1]
                && mag > magnitudes_db[bin + 1]
            {
                out.push(FrequencyPeak {
                    frequency: bin as f32 * self.sample_rate as f32 / fft_size,
                    magnitude: mag,
                    time,
                });
            }
        }
    }
}

/// Time-averaged magnitude spectrum used for cross-track comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSpectrum {
    /// Per-bin magnitudes in dB, clamped to [-100, 0], spanning 0..Nyquist
    pub magnitudes_db: Vec<f32>,
    pub sample_rate: u32,
}

impl TrackSpectrum {
    /// Average spectrogram frames in the linear domain. Bins at the dB
    /// floor contribute zero energy; an empty frame list yields an empty
    /// spectrum, which interference analysis treats as silence.
    pub fn from_frames(frames: &[SpectrogramFrame], sample_rate: u32) -> Self {
        let bins = frames.first().map(|f| f.magnitudes_db.len()).unwrap_or(0);
        let mut sums = vec![0.0f32; bins];

        for frame in frames {
            for (sum, &db) in sums.iter_mut().zip(&frame.magnitudes_db) {
                if db > DB_FLOOR {
                    *sum += db_to_amplitude(db);
                }
            }
        }

        let count = frames.len() as f32;
        let magnitudes_db = sums
            .into_iter()
            .map(|sum| amplitude_to_db(sum / count))
            .collect();

        Self {
            magnitudes_db,
            sample_rate,
        }
    }

    /// Width of one bin in Hz
    pub fn bin_hz(&self) -> f32 {
        if self.magnitudes_db.is_empty() {
            return 0.0;
        }
        self.sample_rate as f32 / (2.0 * self.magnitudes_db.len() as f32)
    }
}
