use serde::{Deserialize, Serialize};

/// How strongly chord tones are favored over scale tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordToneDensity {
    Low,
    Medium,
    High,
}

impl ChordToneDensity {
    pub const ALL: [ChordToneDensity; 3] = [
        ChordToneDensity::Low,
        ChordToneDensity::Medium,
        ChordToneDensity::High,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChordToneDensity::Low => "low",
            ChordToneDensity::Medium => "medium",
            ChordToneDensity::High => "high",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            ChordToneDensity::Low => ChordToneDensity::Medium,
            ChordToneDensity::Medium => ChordToneDensity::High,
            ChordToneDensity::High => ChordToneDensity::Low,
        }
    }
}

impl Default for ChordToneDensity {
    fn default() -> Self {
        ChordToneDensity::Medium
    }
}

/// Global brightness settings supplied by the host UI. Immutable for the
/// duration of one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub chord_tone_density: ChordToneDensity,
    /// Enables interval-consonance shading against a reference pitch
    pub passing_tones: bool,
}
