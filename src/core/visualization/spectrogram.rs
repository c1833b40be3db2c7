// src/core/visualization/spectrogram.rs
//
// Renders already-computed spectrogram frames to a PNG. Purely a debugging
// aid for inspecting what the spectral pass saw; nothing downstream reads
// these images.

use anyhow::{bail, Result};
use image::{ImageBuffer, Rgb};
use std::path::Path;

use crate::core::analysis::SpectrogramFrame;
use crate::core::dsp::{DB_CEILING, DB_FLOOR};

/// Spectrogram rendering configuration
#[derive(Debug, Clone)]
pub struct SpectrogramConfig {
    pub width: u32,
    pub height: u32,
    pub min_db: f32,
    pub max_db: f32,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 400,
            min_db: DB_FLOOR,
            max_db: DB_CEILING,
        }
    }
}

/// Render the frames of one spectral analysis to a PNG image, low
/// frequencies at the bottom, time left to right.
pub fn render_spectrogram(
    frames: &[SpectrogramFrame],
    config: &SpectrogramConfig,
    output_path: &Path,
) -> Result<()> {
    if frames.is_empty() {
        bail!("No spectrogram frames to render (audio shorter than one FFT window?)");
    }
    let freq_bins = frames[0].magnitudes_db.len();
    if freq_bins == 0 {
        bail!("Spectrogram frames carry no frequency bins");
    }

    let num_frames = frames.len();
    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(config.width, config.height);

    let x_scale = num_frames as f32 / config.width as f32;
    let y_scale = freq_bins as f32 / config.height as f32;

    for y in 0..config.height {
        for x in 0..config.width {
            let frame_idx = ((x as f32 * x_scale) as usize).min(num_frames - 1);
            // Flip Y for display (low frequencies at bottom)
            let bin_idx = (((config.height - 1 - y) as f32 * y_scale) as usize).min(freq_bins - 1);

            let db = frames[frame_idx].magnitudes_db[bin_idx];
            let normalized = (db - config.min_db) / (config.max_db - config.min_db);
            img.put_pixel(x, y, db_to_color(normalized));
        }
    }

    img.save(output_path)?;
    Ok(())
}

fn db_to_color(value: f32) -> Rgb<u8> {
    // Viridis-like colormap
    let v = value.clamp(0.0, 1.0);

    let r = (68.0 + v * (235.0 - 68.0)) as u8;
    let g = (1.0 + v * (237.0 - 1.0)) as u8;
    let b = (84.0 + v * (32.0 - 84.0 + (1.0 - v) * 150.0)) as u8;

    Rgb([r, g, b])
}
