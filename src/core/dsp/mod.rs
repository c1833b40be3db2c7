//! Digital Signal Processing utilities

pub mod fft;
pub mod stats;
pub mod windows;

pub use fft::FftProcessor;

/// Lower clamp of every dB magnitude the pipeline produces
pub const DB_FLOOR: f32 = -100.0;
/// Upper clamp of every dB magnitude the pipeline produces
pub const DB_CEILING: f32 = 0.0;
