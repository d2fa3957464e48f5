//! Normalization Utilities
//!
//! Squashes raw synastry sums onto a 0-100 scale with a logistic curve and
//! classifies the result into qualitative buckets.

use serde::{Deserialize, Serialize};

/// Logistic curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    /// Raw value mapped to 50
    pub center: f64,
    /// Raw distance per unit of the logistic exponent
    pub spread: f64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self { center: 4.0, spread: 4.0 }
    }
}

/// `100 / (1 + e^(-(raw - center) / spread))`
///
/// A non-positive spread is treated as 1. Monotonically non-decreasing in
/// `raw`; saturates to 0 or 100 only for extreme inputs.
pub fn logistic_normalize(raw: f64, params: &LogisticParams) -> f64 {
    let spread = if params.spread > 0.0 { params.spread } else { 1.0 };
    100.0 / (1.0 + libm::exp(-(raw - params.center) / spread))
}

/// One `[lower, upper)` range of the bucket table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
}

impl Bucket {
    pub fn new(label: &str, lower: f64, upper: f64) -> Self {
        Self { label: label.to_string(), lower, upper }
    }
}

/// Ordered bucket boundaries plus polarity membership
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketTable {
    pub buckets: Vec<Bucket>,
    /// Returned when no range matches
    pub fallback: String,
    pub favorable: Vec<String>,
    pub adverse: Vec<String>,
}

impl Default for BucketTable {
    fn default() -> Self {
        Self {
            buckets: vec![
                Bucket::new("Clashing", 0.0, 20.0),
                Bucket::new("Tense", 20.0, 40.0),
                Bucket::new("Neutral", 40.0, 55.0),
                Bucket::new("Harmonious", 55.0, 70.0),
                Bucket::new("Strong", 70.0, 85.0),
                Bucket::new("Resonant", 85.0, 100.0),
            ],
            fallback: "Neutral".to_string(),
            favorable: vec!["Harmonious".into(), "Strong".into(), "Resonant".into()],
            adverse: vec!["Tense".into(), "Clashing".into()],
        }
    }
}

/// Sentiment of a bucket label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Favorable,
    Adverse,
    Neutral,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Adverse => "adverse",
            Self::Neutral => "neutral",
        }
    }
}

impl BucketTable {
    /// First bucket whose range holds `score`
    ///
    /// The last bucket is also closed at its upper bound so a fully
    /// saturated 100.0 still lands in it.
    pub fn classify(&self, score: f64) -> &str {
        let last = self.buckets.len().saturating_sub(1);
        self.buckets
            .iter()
            .enumerate()
            .find(|(i, b)| score >= b.lower && (score < b.upper || (*i == last && score <= b.upper)))
            .map(|(_, b)| b.label.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    pub fn polarity(&self, label: &str) -> Polarity {
        if self.favorable.iter().any(|l| l == label) {
            Polarity::Favorable
        } else if self.adverse.iter().any(|l| l == label) {
            Polarity::Adverse
        } else {
            Polarity::Neutral
        }
    }

    /// Buckets are sorted, contiguous and cover [0, 100]
    pub fn is_partition(&self) -> bool {
        let (Some(first), Some(last)) = (self.buckets.first(), self.buckets.last()) else {
            return false;
        };
        first.lower == 0.0
            && last.upper == 100.0
            && self.buckets.iter().all(|b| b.lower < b.upper)
            && self.buckets.windows(2).all(|w| w[0].upper == w[1].lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_fifty() {
        let params = LogisticParams::default();
        assert_relative_eq!(logistic_normalize(4.0, &params), 50.0, epsilon = 1e-12);
        assert!(logistic_normalize(0.0, &params) < 50.0);
        assert!(logistic_normalize(8.0, &params) > 50.0);
    }

    #[test]
    fn test_non_positive_spread_falls_back_to_one() {
        let zero = LogisticParams { center: 0.0, spread: 0.0 };
        let unit = LogisticParams { center: 0.0, spread: 1.0 };
        assert_relative_eq!(logistic_normalize(1.5, &zero), logistic_normalize(1.5, &unit));
        let negative = LogisticParams { center: 0.0, spread: -3.0 };
        assert_relative_eq!(logistic_normalize(-2.0, &negative), logistic_normalize(-2.0, &unit));
    }

    #[test]
    fn test_classify_boundaries() {
        let table = BucketTable::default();
        assert!(table.is_partition());
        assert_eq!(table.classify(0.0), "Clashing");
        assert_eq!(table.classify(19.999), "Clashing");
        assert_eq!(table.classify(20.0), "Tense");
        assert_eq!(table.classify(54.9), "Neutral");
        assert_eq!(table.classify(85.0), "Resonant");
        assert_eq!(table.classify(100.0), "Resonant");
    }

    #[test]
    fn test_classify_falls_back_outside_ranges() {
        let table = BucketTable::default();
        assert_eq!(table.classify(-1.0), "Neutral");
        assert_eq!(table.classify(f64::NAN), "Neutral");

        let gappy = BucketTable {
            buckets: vec![Bucket::new("Low", 0.0, 10.0), Bucket::new("High", 90.0, 100.0)],
            ..BucketTable::default()
        };
        assert!(!gappy.is_partition());
        assert_eq!(gappy.classify(50.0), "Neutral");
    }

    #[test]
    fn test_polarity() {
        let table = BucketTable::default();
        assert_eq!(table.polarity("Strong"), Polarity::Favorable);
        assert_eq!(table.polarity("Clashing"), Polarity::Adverse);
        assert_eq!(table.polarity("Neutral"), Polarity::Neutral);
        assert_eq!(table.polarity("unknown"), Polarity::Neutral);
    }
}
