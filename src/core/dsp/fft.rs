//! FFT processing with windowing

use rustfft::{num_complex::Complex, FftPlanner};

use super::windows::hann_window;
use super::{DB_CEILING, DB_FLOOR};

/// FFT computation with a cached analysis window
pub struct FftProcessor {
    planner: FftPlanner<f32>,
    window: Vec<f32>,
    fft_size: usize,
}

impl FftProcessor {
    pub fn new(fft_size: usize) -> Self {
        Self {
            planner: FftPlanner::new(),
            window: hann_window(fft_size),
            fft_size,
        }
    }

    /// Compute the Hann-windowed magnitude spectrum of one frame
    pub fn magnitude_spectrum(&mut self, samples: &[f32]) -> Vec<f32> {
        let fft = self.planner.plan_fft_forward(self.fft_size);

        let mut buffer: Vec<Complex<f32>> = samples
            .iter()
            .take(self.fft_size)
            .enumerate()
            .map(|(i, &s)| Complex::new(s * self.window[i], 0.0))
            .collect();

        // Zero-pad if necessary
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        fft.process(&mut buffer);

        buffer[..self.fft_size / 2]
            .iter()
            .map(|c| (c.re * c.re + c.im * c.im).sqrt())
            .collect()
    }

    /// Magnitude spectrum in dB, normalized by the FFT size and clamped to
    /// [DB_FLOOR, DB_CEILING]
    pub fn db_spectrum(&mut self, samples: &[f32]) -> Vec<f32> {
        let size = self.fft_size as f32;
        self.magnitude_spectrum(samples)
            .into_iter()
            .map(|m| {
                if m > 0.0 {
                    (20.0 * (m / size).log10()).clamp(DB_FLOOR, DB_CEILING)
                } else {
                    DB_FLOOR
                }
            })
            .collect()
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}
