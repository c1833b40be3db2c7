// src/core/bands.rs
//
// Fixed frequency-band partition used by classification, interference
// analysis, and EQ suggestions.

use serde::{Deserialize, Serialize};

/// The seven analysis bands, together covering 20 Hz - 20 kHz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandLabel {
    SubBass,
    Bass,
    LowMid,
    Mid,
    UpperMid,
    Presence,
    Brilliance,
}

impl BandLabel {
    /// All bands in ascending frequency order
    pub fn all() -> [BandLabel; 7] {
        [
            BandLabel::SubBass,
            BandLabel::Bass,
            BandLabel::LowMid,
            BandLabel::Mid,
            BandLabel::UpperMid,
            BandLabel::Presence,
            BandLabel::Brilliance,
        ]
    }

    /// Human-readable band name
    pub fn name(&self) -> &'static str {
        match self {
            BandLabel::SubBass => "Sub-Bass",
            BandLabel::Bass => "Bass",
            BandLabel::LowMid => "Low Mid",
            BandLabel::Mid => "Mid",
            BandLabel::UpperMid => "Upper Mid",
            BandLabel::Presence => "Presence",
            BandLabel::Brilliance => "Brilliance",
        }
    }

    /// Band edges in Hz. Adjacent bands share an edge; the shared value
    /// belongs to the higher band.
    pub fn range_hz(&self) -> (f32, f32) {
        match self {
            BandLabel::SubBass => (20.0, 60.0),
            BandLabel::Bass => (60.0, 250.0),
            BandLabel::LowMid => (250.0, 500.0),
            BandLabel::Mid => (500.0, 2000.0),
            BandLabel::UpperMid => (2000.0, 4000.0),
            BandLabel::Presence => (4000.0, 6000.0),
            BandLabel::Brilliance => (6000.0, 20000.0),
        }
    }

    /// Band center frequency in Hz
    pub fn center_hz(&self) -> f32 {
        let (lo, hi) = self.range_hz();
        (lo + hi) / 2.0
    }

    /// Whether summed energy in this band tends to cancel rather than stack
    /// when two tracks overlap. Low-frequency content is treated as
    /// phase-sensitive; everything above Bass as additive.
    pub fn default_destructive(&self) -> bool {
        matches!(self, BandLabel::SubBass | BandLabel::Bass)
    }

    /// The band containing `freq`, or `None` outside [20, 20000] Hz
    pub fn containing(freq: f32) -> Option<BandLabel> {
        if !(20.0..=20_000.0).contains(&freq) {
            return None;
        }
        Some(match freq {
            f if f < 60.0 => BandLabel::SubBass,
            f if f < 250.0 => BandLabel::Bass,
            f if f < 500.0 => BandLabel::LowMid,
            f if f < 2000.0 => BandLabel::Mid,
            f if f < 4000.0 => BandLabel::UpperMid,
            f if f < 6000.0 => BandLabel::Presence,
            _ => BandLabel::Brilliance,
        })
    }
}

impl std::fmt::Display for BandLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
