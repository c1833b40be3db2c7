//! Audio content analysis passes
//!
//! Contains the single-track and dual-track analysis stages:
//! - RMS envelope extraction
//! - Beat detection over the envelope
//! - STFT spectral analysis and peak extraction
//! - Content classification (speech / music / environmental)
//! - Plain-text summary generation
//! - Dual-track interference analysis
//! - EQ cut suggestions

mod envelope;
mod beats;
mod spectral;
mod classifier;
mod summary;
mod interference;
mod eq;

// Re-export all analysis modules
pub use envelope::{compute_rms_envelope, RmsEnvelope};
pub use beats::{detect_beats, Beat};
pub use spectral::{
    FrequencyPeak, SpectralAnalyzer, SpectralData, SpectrogramFrame, TrackSpectrum,
};
pub use classifier::{
    classify_content, ContentProfile, FrequencyRange, RhythmProfile, SegmentKind, TimeSegment,
};
pub use summary::generate_summary;
pub use interference::{analyze_interference, FrequencyOverlap};
pub use eq::{suggest_eq, EqSuggestion, SUGGESTED_Q};
