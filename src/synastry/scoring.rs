//! Synastry scoring
//!
//! For every palace of chart A, the projected stars and transforms of chart B
//! found in that palace's four-way neighborhood are weighted, summed,
//! squashed onto 0-100 and bucketed.

use super::overlay::{project, ProjectedFrame};
use super::weights::ScoringConfig;
use crate::chart::{four_way, Brightness, ChartIndex, Palace, Relation, TransformKind};
use crate::error::{AnalysisError, Result};
use crate::utils::logistic_normalize;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What produced a contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    Star {
        name: String,
        brightness: Option<Brightness>,
    },
    Transform {
        transform: TransformKind,
    },
}

/// One recorded contribution to a palace's raw score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionLine {
    pub target: Palace,
    pub source: Palace,
    pub subject: Subject,
    pub multiplier: f64,
    pub contribution: f64,
}

impl ContributionLine {
    /// Contribution at the two decimals the text form shows
    pub fn displayed_contribution(&self) -> f64 {
        (self.contribution * 100.0).round() / 100.0
    }
}

/// `Life←Travel: B star[太阳|庙] *0.3 => 0.72`
impl fmt::Display for ContributionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}←{}: B ", self.target, self.source)?;
        match &self.subject {
            Subject::Star { name, brightness: Some(b) } => write!(f, "star[{}|{}]", name, b)?,
            Subject::Star { name, brightness: None } => write!(f, "star[{}]", name)?,
            Subject::Transform { transform } => write!(f, "transform[{}]", transform)?,
        }
        write!(f, " *{:.1} => {:.2}", self.multiplier, self.contribution)
    }
}

impl FromStr for ContributionLine {
    type Err = AnalysisError;

    fn from_str(line: &str) -> Result<Self> {
        let bad = || AnalysisError::validation(format!("Unparseable contribution line '{}'", line));

        let (palaces, rest) = line.split_once(": B ").ok_or_else(bad)?;
        let (target, source) = palaces.split_once('←').ok_or_else(bad)?;
        let (subject, numbers) = rest.split_once("] *").ok_or_else(bad)?;
        let (multiplier, contribution) = numbers.split_once(" => ").ok_or_else(bad)?;

        let subject = if let Some(star) = subject.strip_prefix("star[") {
            match star.split_once('|') {
                Some((name, grade)) => Subject::Star {
                    name: name.to_string(),
                    brightness: Some(Brightness::from_label(grade).ok_or_else(bad)?),
                },
                None => Subject::Star { name: star.to_string(), brightness: None },
            }
        } else if let Some(kind) = subject.strip_prefix("transform[") {
            Subject::Transform { transform: TransformKind::from_label(kind).ok_or_else(bad)? }
        } else {
            return Err(bad());
        };

        Ok(Self {
            target: target.trim().parse()?,
            source: source.trim().parse()?,
            subject,
            multiplier: multiplier.trim().parse().map_err(|_| bad())?,
            contribution: contribution.trim().parse().map_err(|_| bad())?,
        })
    }
}

impl ContributionLine {
    /// Parse text lines, skipping any that do not parse
    pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        lines
            .into_iter()
            .filter_map(|l| match l.parse() {
                Ok(line) => Some(line),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping contribution line");
                    None
                }
            })
            .collect()
    }
}

/// Score of one palace of chart A
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalaceScore {
    pub palace: Palace,
    pub index: usize,
    pub raw: f64,
    pub score: f64,
    pub bucket: String,
    pub lines: Vec<ContributionLine>,
}

/// Directional synastry result: B projected onto A, per palace of A
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynastryScore {
    pub palaces: Vec<PalaceScore>,
}

impl SynastryScore {
    pub fn get(&self, palace: Palace) -> Option<&PalaceScore> {
        self.palaces.iter().find(|p| p.palace == palace)
    }
}

pub struct SynastryScorer {
    config: ScoringConfig,
    star_weights: FxHashMap<String, f64>,
}

impl SynastryScorer {
    pub fn new(config: ScoringConfig) -> Self {
        let star_weights = config.stars.flatten();
        Self { config, star_weights }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score B (`source`) against A's (`target`) palaces
    pub fn score(&self, target: &ChartIndex, source: &ChartIndex) -> SynastryScore {
        let frame = project(target, source);
        self.score_frame(target, &frame)
    }

    /// Score an already projected frame
    pub fn score_frame(&self, target: &ChartIndex, frame: &ProjectedFrame) -> SynastryScore {
        let palaces: Vec<PalaceScore> = target
            .palaces()
            .map(|(palace, i)| self.score_palace(target, frame, palace, i))
            .collect();

        tracing::debug!(
            palaces = palaces.len(),
            lines = palaces.iter().map(|p| p.lines.len()).sum::<usize>(),
            "synastry scoring complete"
        );
        SynastryScore { palaces }
    }

    fn score_palace(&self, target: &ChartIndex, frame: &ProjectedFrame, palace: Palace, i: usize) -> PalaceScore {
        let config = &self.config;
        let mut raw = 0.0;
        let mut lines = Vec::new();

        for (j, relation) in four_way(i).into_iter().zip(Relation::ORDER) {
            let multiplier = config.positions.get(relation);
            let source = target.palace(j);

            for star in frame.stars(j) {
                let Some(&base) = self.star_weights.get(&star.name) else {
                    continue;
                };
                let weight = base * config.brightness.multiplier(base, star.brightness);
                let contribution = weight * multiplier * config.scope_weight;
                if contribution.abs() > config.epsilon {
                    raw += contribution;
                    lines.push(ContributionLine {
                        target: palace,
                        source,
                        subject: Subject::Star { name: star.name.clone(), brightness: star.brightness },
                        multiplier,
                        contribution,
                    });
                }
            }

            for &kind in frame.transforms(j) {
                let contribution = config.transforms.get(kind) * multiplier * config.scope_weight;
                if contribution.abs() > config.epsilon {
                    raw += contribution;
                    lines.push(ContributionLine {
                        target: palace,
                        source,
                        subject: Subject::Transform { transform: kind },
                        multiplier,
                        contribution,
                    });
                }
            }
        }

        let score = logistic_normalize(raw, &config.logistic);
        PalaceScore {
            palace,
            index: i,
            raw,
            score,
            bucket: config.buckets.classify(score).to_string(),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::stars::*;
    use crate::chart::{ChartBuilder, Marker, MarkerCategory};
    use approx::assert_relative_eq;

    fn index(builder: ChartBuilder) -> ChartIndex {
        ChartIndex::build(&builder.build().unwrap())
    }

    #[test]
    fn test_brightness_scales_contribution() {
        let a = index(ChartBuilder::new());
        let b = index(ChartBuilder::new().marker(
            0,
            Marker::new(TAI_YANG, MarkerCategory::Major).with_brightness(Brightness::Miao),
        ));
        let score = SynastryScorer::new(ScoringConfig::default()).score(&a, &b);
        let life = score.get(Palace::Life).unwrap();
        assert_relative_eq!(life.raw, 2.0 * 1.2, epsilon = 1e-12);
        assert_eq!(life.lines.len(), 1);
    }

    #[test]
    fn test_unweighted_star_leaves_no_trace() {
        let a = index(ChartBuilder::new());
        let b = index(ChartBuilder::new().stars(0, &["无名星"]));
        let score = SynastryScorer::new(ScoringConfig::default()).score(&a, &b);
        for p in &score.palaces {
            assert_eq!(p.raw, 0.0);
            assert!(p.lines.is_empty());
        }
    }

    #[test]
    fn test_zero_weight_is_gated() {
        let mut config = ScoringConfig::default();
        config.stars.major.insert(TAI_YANG.to_string(), 0.0);
        let a = index(ChartBuilder::new());
        let b = index(ChartBuilder::new().stars(0, &[TAI_YANG]));
        let score = SynastryScorer::new(config).score(&a, &b);
        assert!(score.get(Palace::Life).unwrap().lines.is_empty());
    }

    #[test]
    fn test_transforms_skip_brightness() {
        let a = index(ChartBuilder::new());
        let b = index(ChartBuilder::new().marker(
            6,
            Marker::new("无名星", MarkerCategory::Adjective)
                .with_brightness(Brightness::Xian)
                .with_transform(TransformKind::Ji),
        ));
        let score = SynastryScorer::new(ScoringConfig::default()).score(&a, &b);
        let life = score.get(Palace::Life).unwrap();
        assert_relative_eq!(life.raw, -2.5 * 0.3, epsilon = 1e-12);
        assert_eq!(life.lines[0].to_string(), "Life←Travel: B transform[忌] *0.3 => -0.75");
    }

    #[test]
    fn test_line_display_and_parse() {
        let line = ContributionLine {
            target: Palace::Life,
            source: Palace::Career,
            subject: Subject::Star { name: TAI_YANG.into(), brightness: Some(Brightness::Miao) },
            multiplier: 0.5,
            contribution: 1.2,
        };
        let text = line.to_string();
        assert_eq!(text, "Life←Career: B star[太阳|庙] *0.5 => 1.20");
        assert_eq!(text.parse::<ContributionLine>().unwrap(), line);
    }

    #[test]
    fn test_parse_lines_drops_garbage() {
        let parsed = ContributionLine::parse_lines([
            "Spouse←Career: B star[左辅] *0.5 => 0.75",
            "nonsense",
            "Spouse←Nowhere: B star[左辅] *0.5 => 0.75",
            "Spouse←Career: B transform[禄] *x => 1",
        ]);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].target, Palace::Spouse);
    }
}
