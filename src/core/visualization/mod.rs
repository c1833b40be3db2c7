//! Visualization tools for audio analysis
//!
//! Renders computed spectrogram frames as images for manual inspection.

mod spectrogram;

pub use spectrogram::{render_spectrogram, SpectrogramConfig};
