use crate::chart::Palace;
use crate::utils::Polarity;
use serde::{Deserialize, Serialize};

/// Narrative synastry report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynastryReport {
    pub headline: String,
    pub palaces: Vec<PalaceReading>,
}

impl SynastryReport {
    pub fn get(&self, palace: Palace) -> Option<&PalaceReading> {
        self.palaces.iter().find(|p| p.palace == palace)
    }
}

/// Interpretation of one palace of the synastry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalaceReading {
    pub palace: Palace,
    pub raw: f64,
    pub score: f64,
    /// Score rounded for display
    pub display_score: i64,
    pub bucket: String,
    pub polarity: Polarity,
    /// Positive contribution lines, strongest first
    pub highlights: Vec<String>,
    /// Negative contribution lines, strongest first
    pub risks: Vec<String>,
    pub advice: Vec<String>,
    pub one_liner: String,
}

/// Filtering applied when ranking contribution lines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Lines with |contribution| below this are left out
    pub min_abs_effect: f64,
    pub max_items_per_polarity: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { min_abs_effect: 0.3, max_items_per_polarity: None }
    }
}

/// Advice phrases for one palace, per polarity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalaceAdvice {
    pub palace: Palace,
    #[serde(default)]
    pub favorable: Vec<String>,
    #[serde(default)]
    pub adverse: Vec<String>,
    #[serde(default)]
    pub neutral: Vec<String>,
}

impl PalaceAdvice {
    pub fn for_polarity(&self, polarity: Polarity) -> &[String] {
        match polarity {
            Polarity::Favorable => &self.favorable,
            Polarity::Adverse => &self.adverse,
            Polarity::Neutral => &self.neutral,
        }
    }
}
