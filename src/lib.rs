//! mixprobe - Audio content analysis and dual-track interference detection
//!
//! Analyzes decoded audio for speech, music, and environmental content, and
//! compares two tracks band by band to find frequency clashes worth fixing
//! with EQ before mixing them together.
//!
//! ## Features
//!
//! - **Content classification**: Speech, rhythm-based music, and low-frequency
//!   environmental segments with per-segment confidence
//! - **Beat detection**: RMS envelope local maxima with minimum-gap suppression
//! - **Spectral analysis**: STFT spectrogram frames plus the 100 strongest
//!   frequency peaks
//! - **Interference analysis**: Per-band overlap intensity between two tracks,
//!   with a fixed constructive/destructive polarity table
//! - **EQ suggestions**: Ranked per-band cuts for the louder track
//! - **Deterministic summaries**: Identical input always produces an identical
//!   report
//!
//! ## Module Structure
//!
//! - `core` - Analysis pipeline, DSP utilities, decoding, visualization
//! - `cli` - Command-line interface (`analyze`, `compare`)
//! - `config` - Analysis parameters
//! - `testgen` - Deterministic test signal synthesis
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mixprobe::config::AnalysisParams;
//! use mixprobe::core::{analyze_track, CancelToken, SampleBuffer};
//!
//! let buffer = SampleBuffer::from_mono(samples, 44100);
//! let analysis = analyze_track(&buffer, &AnalysisParams::default(), &CancelToken::new())?;
//!
//! println!("{}", analysis.summary);
//! ```

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Analysis parameters
pub mod config;

// Error types
pub mod error;

// Deterministic test signal synthesis
pub mod testgen;

// Re-export commonly used types at crate root for convenience
pub use config::AnalysisParams;
pub use core::{analyze_track, analyze_track_full, AudioAnalysis, TrackAnalysis};
pub use core::{BandLabel, CancelToken, SampleBuffer};
pub use error::{AnalysisError, Result};
