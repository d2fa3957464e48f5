//! Scoring weight tables
//!
//! Star weights are configured per category and flattened into a single
//! name → weight map before scoring. Stars missing from every table weigh 0
//! and never contribute.

use crate::chart::stars::{self, FLOWER, HELPER, NEGATIVE_ADJECTIVE, POSITIVE_ADJECTIVE};
use crate::chart::{Brightness, Relation, TransformKind};
use crate::utils::{BucketTable, LogisticParams};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stars sharing one weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarGroup {
    pub weight: f64,
    pub stars: Vec<String>,
}

impl StarGroup {
    fn new(weight: f64, stars: &[&str]) -> Self {
        Self { weight, stars: stars.iter().map(|s| s.to_string()).collect() }
    }
}

/// Per-category star weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarWeights {
    /// Principal stars, weighted individually
    pub major: BTreeMap<String, f64>,
    /// Minor stars (soft, tough, Lu Cun, Tian Ma), weighted individually
    pub minor: BTreeMap<String, f64>,
    pub flower: StarGroup,
    pub helper: StarGroup,
    pub positive_adjective: StarGroup,
    pub negative_adjective: StarGroup,
}

impl Default for StarWeights {
    fn default() -> Self {
        let major = [
            (stars::ZI_WEI, 3.0),
            (stars::TIAN_JI, 1.5),
            (stars::TAI_YANG, 2.0),
            (stars::WU_QU, 1.5),
            (stars::TIAN_TONG, 2.0),
            (stars::LIAN_ZHEN, 0.5),
            (stars::TIAN_FU, 2.5),
            (stars::TAI_YIN, 2.0),
            (stars::TAN_LANG, 0.5),
            (stars::JU_MEN, -1.0),
            (stars::TIAN_XIANG, 2.0),
            (stars::TIAN_LIANG, 2.0),
            (stars::QI_SHA, -0.5),
            (stars::PO_JUN, -1.0),
        ];
        let minor = [
            (stars::ZUO_FU, 1.5),
            (stars::YOU_BI, 1.5),
            (stars::TIAN_KUI, 1.5),
            (stars::TIAN_YUE, 1.5),
            (stars::WEN_CHANG, 1.2),
            (stars::WEN_QU, 1.2),
            (stars::LU_CUN, 2.0),
            (stars::TIAN_MA, 0.8),
            (stars::QING_YANG, -2.0),
            (stars::TUO_LUO, -1.5),
            (stars::HUO_XING, -1.5),
            (stars::LING_XING, -1.5),
            (stars::DI_KONG, -1.2),
            (stars::DI_JIE, -1.2),
        ];
        Self {
            major: major.iter().map(|(s, w)| (s.to_string(), *w)).collect(),
            minor: minor.iter().map(|(s, w)| (s.to_string(), *w)).collect(),
            flower: StarGroup::new(0.8, &FLOWER),
            helper: StarGroup::new(0.5, &HELPER),
            positive_adjective: StarGroup::new(0.3, &POSITIVE_ADJECTIVE),
            negative_adjective: StarGroup::new(-0.5, &NEGATIVE_ADJECTIVE),
        }
    }
}

impl StarWeights {
    /// Single name → weight map; later tables override earlier ones
    pub fn flatten(&self) -> FxHashMap<String, f64> {
        let mut map: FxHashMap<String, f64> = FxHashMap::default();
        for group in [&self.flower, &self.helper, &self.positive_adjective, &self.negative_adjective] {
            for star in &group.stars {
                map.insert(star.clone(), group.weight);
            }
        }
        map.extend(self.minor.iter().map(|(s, w)| (s.clone(), *w)));
        map.extend(self.major.iter().map(|(s, w)| (s.clone(), *w)));
        map
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransformWeights {
    pub lu: f64,
    pub quan: f64,
    pub ke: f64,
    pub ji: f64,
}

impl Default for TransformWeights {
    fn default() -> Self {
        Self { lu: 2.0, quan: 1.0, ke: 1.0, ji: -2.5 }
    }
}

impl TransformWeights {
    pub fn get(&self, kind: TransformKind) -> f64 {
        match kind {
            TransformKind::Lu => self.lu,
            TransformKind::Quan => self.quan,
            TransformKind::Ke => self.ke,
            TransformKind::Ji => self.ji,
        }
    }
}

/// Multiplier per four-way relation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionWeights {
    #[serde(rename = "self")]
    pub self_position: f64,
    pub opposite: f64,
    pub trine1: f64,
    pub trine2: f64,
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self { self_position: 1.0, opposite: 0.3, trine1: 0.5, trine2: 0.5 }
    }
}

impl PositionWeights {
    pub fn get(&self, relation: Relation) -> f64 {
        match relation {
            Relation::SelfPosition => self.self_position,
            Relation::Opposite => self.opposite,
            Relation::Trine1 => self.trine1,
            Relation::Trine2 => self.trine2,
        }
    }
}

/// Multiplier per brightness grade
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BrightnessScale {
    pub miao: f64,
    pub wang: f64,
    pub de: f64,
    pub li: f64,
    pub ping: f64,
    pub bu: f64,
    pub xian: f64,
}

impl BrightnessScale {
    pub fn get(&self, grade: Brightness) -> f64 {
        match grade {
            Brightness::Miao => self.miao,
            Brightness::Wang => self.wang,
            Brightness::De => self.de,
            Brightness::Li => self.li,
            Brightness::Ping => self.ping,
            Brightness::Bu => self.bu,
            Brightness::Xian => self.xian,
        }
    }
}

/// Bright stars amplify good weights; for bad weights the scale is inverted
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BrightnessTables {
    pub positive: BrightnessScale,
    pub negative: BrightnessScale,
}

impl Default for BrightnessTables {
    fn default() -> Self {
        Self {
            positive: BrightnessScale { miao: 1.2, wang: 1.1, de: 1.0, li: 1.0, ping: 0.9, bu: 0.8, xian: 0.7 },
            negative: BrightnessScale { miao: 0.7, wang: 0.8, de: 0.9, li: 1.0, ping: 1.0, bu: 1.1, xian: 1.2 },
        }
    }
}

impl BrightnessTables {
    /// Multiplier for a star of `base` weight; 1.0 without a grade
    pub fn multiplier(&self, base: f64, grade: Option<Brightness>) -> f64 {
        match grade {
            Some(g) if base >= 0.0 => self.positive.get(g),
            Some(g) => self.negative.get(g),
            None => 1.0,
        }
    }
}

/// Everything the synastry scorer is parameterized by
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub stars: StarWeights,
    pub transforms: TransformWeights,
    pub positions: PositionWeights,
    pub brightness: BrightnessTables,
    pub logistic: LogisticParams,
    pub buckets: BucketTable,
    /// Contributions with |value| at or below this are dropped
    pub epsilon: f64,
    /// Overall multiplier, applied to every contribution
    pub scope_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stars: StarWeights::default(),
            transforms: TransformWeights::default(),
            positions: PositionWeights::default(),
            brightness: BrightnessTables::default(),
            logistic: LogisticParams::default(),
            buckets: BucketTable::default(),
            epsilon: 1e-9,
            scope_weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flatten_covers_all_categories() {
        let map = StarWeights::default().flatten();
        assert_relative_eq!(map[stars::ZI_WEI], 3.0);
        assert_relative_eq!(map[stars::QING_YANG], -2.0);
        assert_relative_eq!(map["红鸾"], 0.8);
        assert_relative_eq!(map[stars::TAI_FU], 0.5);
        assert_relative_eq!(map["天德"], 0.3);
        assert_relative_eq!(map["天刑"], -0.5);
        assert!(!map.contains_key("不存在"));
    }

    #[test]
    fn test_major_overrides_group() {
        let mut weights = StarWeights::default();
        weights.flower.stars.push(stars::ZI_WEI.to_string());
        assert_relative_eq!(weights.flatten()[stars::ZI_WEI], 3.0);
    }

    #[test]
    fn test_brightness_table_by_sign() {
        let tables = BrightnessTables::default();
        assert_relative_eq!(tables.multiplier(2.0, Some(Brightness::Miao)), 1.2);
        assert_relative_eq!(tables.multiplier(-2.0, Some(Brightness::Miao)), 0.7);
        assert_relative_eq!(tables.multiplier(-2.0, Some(Brightness::Xian)), 1.2);
        assert_relative_eq!(tables.multiplier(0.0, Some(Brightness::Xian)), 0.7);
        assert_relative_eq!(tables.multiplier(2.0, None), 1.0);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"epsilon": 0.01}"#).unwrap();
        assert_relative_eq!(config.epsilon, 0.01);
        assert_relative_eq!(config.positions.opposite, 0.3);
        assert_relative_eq!(config.scope_weight, 1.0);
    }
}
