//! Core analysis pipeline modules

pub mod analysis;
pub mod bands;
pub mod buffer;
pub mod cancel;
pub mod decoder;
pub mod dsp;
pub mod engine;
pub mod visualization;

pub use bands::BandLabel;
pub use buffer::SampleBuffer;
pub use cancel::CancelToken;
pub use engine::{analyze_track, analyze_track_full, AudioAnalysis, TrackAnalysis};
