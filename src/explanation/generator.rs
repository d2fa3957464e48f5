use crate::explanation::tables::{default_advice, default_tones};
use crate::explanation::types::*;
use crate::synastry::{ContributionLine, PalaceScore, SynastryScore};
use crate::utils::{BucketTable, Polarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Renderer configuration: ranking options plus advice and tone text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub options: RenderOptions,
    pub advice: Vec<PalaceAdvice>,
    /// Bucket label → one-line tone
    pub tones: BTreeMap<String, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            options: RenderOptions::default(),
            advice: default_advice(),
            tones: default_tones(),
        }
    }
}

/// Turns per-palace scores into the narrative report
pub struct ExplanationGenerator {
    config: RenderConfig,
}

impl ExplanationGenerator {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Report for B projected onto A, headed "A × B"
    pub fn generate(
        &self,
        a_name: &str,
        b_name: &str,
        score: &SynastryScore,
        buckets: &BucketTable,
    ) -> SynastryReport {
        let palaces = score
            .palaces
            .iter()
            .map(|p| self.read_palace(p, buckets))
            .collect();

        SynastryReport {
            headline: format!("{} × {}", a_name, b_name),
            palaces,
        }
    }

    fn read_palace(&self, palace: &PalaceScore, buckets: &BucketTable) -> PalaceReading {
        let (highlights, risks) = self.rank(&palace.lines);
        let polarity = buckets.polarity(&palace.bucket);
        let advice = self
            .config
            .advice
            .iter()
            .find(|a| a.palace == palace.palace)
            .map(|a| a.for_polarity(polarity).to_vec())
            .unwrap_or_default();

        PalaceReading {
            palace: palace.palace,
            raw: palace.raw,
            score: palace.score,
            display_score: palace.score.round() as i64,
            bucket: palace.bucket.clone(),
            polarity,
            highlights: highlights.iter().map(ToString::to_string).collect(),
            risks: risks.iter().map(ToString::to_string).collect(),
            advice,
            one_liner: self.one_liner(&palace.bucket),
        }
    }

    /// Split lines by sign, strongest first, filtered and capped per options
    ///
    /// The threshold applies to the two-decimal value shown in each line.
    /// The sort is stable, so equal magnitudes keep scoring order.
    pub fn rank<'a>(&self, lines: &'a [ContributionLine]) -> (Vec<&'a ContributionLine>, Vec<&'a ContributionLine>) {
        let options = &self.config.options;
        let kept = lines
            .iter()
            .filter(|l| l.displayed_contribution().abs() >= options.min_abs_effect);

        let mut positive: Vec<&ContributionLine> = kept.clone().filter(|l| l.contribution > 0.0).collect();
        let mut negative: Vec<&ContributionLine> = kept.filter(|l| l.contribution < 0.0).collect();

        for side in [&mut positive, &mut negative] {
            side.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
            if let Some(cap) = options.max_items_per_polarity {
                side.truncate(cap);
            }
        }
        (positive, negative)
    }

    /// Rank externally supplied text lines; lines that do not parse are dropped
    pub fn rank_text<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> (Vec<String>, Vec<String>) {
        let parsed = ContributionLine::parse_lines(lines);
        let (positive, negative) = self.rank(&parsed);
        (
            positive.iter().map(ToString::to_string).collect(),
            negative.iter().map(ToString::to_string).collect(),
        )
    }

    /// Tone for a bucket, always ending in sentence punctuation
    pub fn one_liner(&self, bucket: &str) -> String {
        let tone = self.config.tones.get(bucket).map(String::as_str).unwrap_or("");
        terminate(tone)
    }
}

impl Default for ExplanationGenerator {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

fn terminate(text: &str) -> String {
    let text = text.trim_end();
    if text.ends_with(['.', '!', '?', '。', '！', '？']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}
