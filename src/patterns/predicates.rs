//! Predicate primitives shared by the pattern rules
//!
//! A `PatternContext` resolves the life palace and its four-way neighborhood
//! once, then answers the set questions rules are written in terms of.

use crate::chart::stars::{AUSPICIOUS_PAIRS, MAJOR_14, MALEFICS};
use crate::chart::{four_way, left, opposite, right, trines, Branch, ChartIndex, Palace, TransformKind, SECTOR_COUNT};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tunable thresholds for pattern detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Auspicious pairs needed in the life neighborhood for the escalated status match
    pub pair_threshold: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self { pair_threshold: 3 }
    }
}

pub struct PatternContext<'a> {
    index: &'a ChartIndex,
    config: &'a PatternConfig,
    pub life: usize,
    pub wealth: usize,
    pub career: usize,
    pub travel: usize,
}

impl<'a> PatternContext<'a> {
    /// Fails with a lookup error when the chart has no resolvable life palace
    ///
    /// Travel, career and wealth are taken from the ring around life
    /// (opposite, first trine, second trine), not from the sector names, so
    /// every rule reads the same four-way as synastry scoring.
    pub fn new(index: &'a ChartIndex, config: &'a PatternConfig) -> Result<Self> {
        let life = index.index_of(Palace::Life)?;
        let [career, wealth] = trines(life);
        Ok(Self {
            index,
            config,
            life,
            wealth,
            career,
            travel: opposite(life),
        })
    }

    pub fn pair_threshold(&self) -> usize {
        self.config.pair_threshold
    }

    /// Life with its opposite and both trines
    pub fn life_neighborhood(&self) -> [usize; 4] {
        four_way(self.life)
    }

    /// Life, wealth and career (the three sides without the opposite)
    pub fn three_sides(&self) -> [usize; 3] {
        [self.life, self.wealth, self.career]
    }

    pub fn branch(&self, i: usize) -> Branch {
        self.index.branch(i)
    }

    pub fn palace(&self, i: usize) -> Palace {
        self.index.palace(i)
    }

    /// "Life (午)" style label for reasons
    pub fn describe(&self, i: usize) -> String {
        format!("{} ({})", self.palace(i), self.branch(i))
    }

    pub fn has(&self, i: usize, star: &str) -> bool {
        self.index.has(i, star)
    }

    pub fn has_transform(&self, i: usize, kind: TransformKind) -> bool {
        self.index.has_transform(i, kind)
    }

    /// Principal stars in a sector's primary group
    pub fn principals(&self, i: usize) -> BTreeSet<&str> {
        self.index
            .primary(i)
            .iter()
            .map(String::as_str)
            .filter(|s| MAJOR_14.contains(s))
            .collect()
    }

    /// Principal stars of the sector are exactly `target` and its branch is one of `branches`
    pub fn exact_principals(&self, i: usize, target: &[&str], branches: &[Branch]) -> bool {
        let want: BTreeSet<&str> = target.iter().copied().collect();
        self.principals(i) == want && (branches.is_empty() || branches.contains(&self.branch(i)))
    }

    /// All of `stars` co-reside in sector `i`
    pub fn co_resident(&self, i: usize, stars: &[&str]) -> bool {
        stars.iter().all(|s| self.index.has(i, s))
    }

    /// First sector, by index, holding all of `stars` with a branch in `branches` (empty = any)
    pub fn first_co_resident(&self, stars: &[&str], branches: &[Branch]) -> Option<usize> {
        (0..SECTOR_COUNT).find(|&i| {
            self.co_resident(i, stars) && (branches.is_empty() || branches.contains(&self.branch(i)))
        })
    }

    /// Star names present anywhere in `indices`
    pub fn union(&self, indices: &[usize]) -> BTreeSet<&str> {
        indices
            .iter()
            .flat_map(|&i| self.index.stars(i).iter().map(String::as_str))
            .collect()
    }

    pub fn union_has_all(&self, indices: &[usize], stars: &[&str]) -> bool {
        let union = self.union(indices);
        stars.iter().all(|s| union.contains(s))
    }

    pub fn union_has_any(&self, indices: &[usize], stars: &[&str]) -> bool {
        let union = self.union(indices);
        stars.iter().any(|s| union.contains(s))
    }

    /// Stars of sector `i`'s own four-way neighborhood
    pub fn around(&self, i: usize) -> BTreeSet<&str> {
        self.union(&four_way(i))
    }

    pub fn any_transform(&self, indices: &[usize], kind: TransformKind) -> bool {
        indices.iter().any(|&i| self.index.has_transform(i, kind))
    }

    /// No malefic star and no Ji transform in any of `indices`
    pub fn is_unafflicted(&self, indices: &[usize]) -> bool {
        indices.iter().all(|&i| {
            !MALEFICS.iter().any(|m| self.index.has(i, m))
                && !self.index.has_transform(i, TransformKind::Ji)
        })
    }

    /// Number of auspicious pairs fully present across `indices`
    pub fn pair_count(&self, indices: &[usize]) -> usize {
        let union = self.union(indices);
        AUSPICIOUS_PAIRS
            .iter()
            .filter(|(a, b)| union.contains(a) && union.contains(b))
            .count()
    }

    /// `a` and `b` sit in the two sectors adjacent to `i`, either way round
    pub fn flanked_by(&self, i: usize, a: &str, b: &str) -> bool {
        let (l, r) = (left(i), right(i));
        (self.has(l, a) && self.has(r, b)) || (self.has(r, a) && self.has(l, b))
    }
}
