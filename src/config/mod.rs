//! Configuration module for mixprobe

mod params;

pub use params::AnalysisParams;
