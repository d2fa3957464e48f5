//! Chart adapter
//!
//! Flattens a chart (natal or scoped) into per-index lookup tables. Both the
//! pattern engine and the synastry scorer read charts only through
//! `ChartIndex`, so neither needs to know whether a chart is scoped.

use super::model::{Branch, Brightness, Chart, Palace, Scope, TransformKind, SECTOR_COUNT};
use crate::error::{AnalysisError, Result};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Lookup maps derived from one chart
#[derive(Debug, Clone)]
pub struct ChartIndex {
    stars: [BTreeSet<String>; SECTOR_COUNT],
    transforms: [BTreeSet<TransformKind>; SECTOR_COUNT],
    brightness: [FxHashMap<String, Brightness>; SECTOR_COUNT],
    primary: [Vec<String>; SECTOR_COUNT],
    index_to_branch: [Branch; SECTOR_COUNT],
    branch_to_index: FxHashMap<Branch, usize>,
    index_to_name: [Palace; SECTOR_COUNT],
    name_to_index: FxHashMap<Palace, usize>,
    scope: Scope,
}

impl ChartIndex {
    pub fn build(chart: &Chart) -> Self {
        let mut stars: [BTreeSet<String>; SECTOR_COUNT] = Default::default();
        let mut transforms: [BTreeSet<TransformKind>; SECTOR_COUNT] = Default::default();
        let mut brightness: [FxHashMap<String, Brightness>; SECTOR_COUNT] = Default::default();
        let mut primary: [Vec<String>; SECTOR_COUNT] = Default::default();

        for sector in chart.sectors() {
            let i = sector.index;
            for marker in sector.markers() {
                stars[i].insert(marker.name.clone());
                if let Some(kind) = marker.transform {
                    transforms[i].insert(kind);
                }
                if let Some(grade) = marker.brightness {
                    brightness[i].insert(marker.name.clone(), grade);
                }
            }
            primary[i] = sector.primary.iter().map(|m| m.name.clone()).collect();
        }

        // Scope transforms land on whichever sector carries the named principal star
        if let Some(record) = chart.scope() {
            for (star, kind) in record.transforms() {
                for (i, names) in primary.iter().enumerate() {
                    if names.iter().any(|n| n == star) {
                        transforms[i].insert(kind);
                    }
                }
            }
        }

        let index_to_branch: [Branch; SECTOR_COUNT] =
            std::array::from_fn(|i| chart.sector_at(i).branch);
        let index_to_name: [Palace; SECTOR_COUNT] = std::array::from_fn(|i| chart.palace_name(i));

        let branch_to_index = index_to_branch
            .iter()
            .enumerate()
            .map(|(i, b)| (*b, i))
            .collect();
        let name_to_index = index_to_name
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, i))
            .collect();

        Self {
            stars,
            transforms,
            brightness,
            primary,
            index_to_branch,
            branch_to_index,
            index_to_name,
            name_to_index,
            scope: chart.scope().map_or(Scope::Origin, |r| r.scope),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Star names present at an index
    pub fn stars(&self, index: usize) -> &BTreeSet<String> {
        &self.stars[index % SECTOR_COUNT]
    }

    pub fn transforms(&self, index: usize) -> &BTreeSet<TransformKind> {
        &self.transforms[index % SECTOR_COUNT]
    }

    /// Principal-group star names, in chart order
    pub fn primary(&self, index: usize) -> &[String] {
        &self.primary[index % SECTOR_COUNT]
    }

    pub fn brightness(&self, index: usize, star: &str) -> Option<Brightness> {
        self.brightness[index % SECTOR_COUNT].get(star).copied()
    }

    pub fn brightness_map(&self, index: usize) -> &FxHashMap<String, Brightness> {
        &self.brightness[index % SECTOR_COUNT]
    }

    pub fn has(&self, index: usize, star: &str) -> bool {
        self.stars[index % SECTOR_COUNT].contains(star)
    }

    pub fn has_transform(&self, index: usize, kind: TransformKind) -> bool {
        self.transforms[index % SECTOR_COUNT].contains(&kind)
    }

    pub fn branch(&self, index: usize) -> Branch {
        self.index_to_branch[index % SECTOR_COUNT]
    }

    pub fn index_of_branch(&self, branch: Branch) -> Option<usize> {
        self.branch_to_index.get(&branch).copied()
    }

    pub fn palace(&self, index: usize) -> Palace {
        self.index_to_name[index % SECTOR_COUNT]
    }

    pub fn index_of(&self, palace: Palace) -> Result<usize> {
        self.name_to_index
            .get(&palace)
            .copied()
            .ok_or_else(|| AnalysisError::lookup(format!("Palace {} not found in chart index", palace)))
    }

    /// (palace, index) pairs in canonical palace order
    pub fn palaces(&self) -> impl Iterator<Item = (Palace, usize)> + '_ {
        Palace::ALL
            .iter()
            .filter_map(move |p| self.name_to_index.get(p).map(|i| (*p, *i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;
    use crate::chart::model::{Marker, MarkerCategory, ScopeRecord};
    use crate::chart::stars::{TAI_YANG, TIAN_JI, WEN_CHANG};

    #[test]
    fn test_index_collects_all_groups() {
        let chart = ChartBuilder::new()
            .stars(3, &[TIAN_JI, WEN_CHANG, "天刑"])
            .marker(
                3,
                Marker::new(TAI_YANG, MarkerCategory::Major)
                    .with_brightness(Brightness::Wang)
                    .with_transform(TransformKind::Lu),
            )
            .build()
            .unwrap();
        let index = ChartIndex::build(&chart);

        assert_eq!(index.stars(3).len(), 4);
        assert!(index.has(3, "天刑"));
        assert!(index.has_transform(3, TransformKind::Lu));
        assert_eq!(index.brightness(3, TAI_YANG), Some(Brightness::Wang));
        assert_eq!(index.primary(3), &[TIAN_JI.to_string(), TAI_YANG.to_string()]);
        assert!(index.stars(4).is_empty());
    }

    #[test]
    fn test_branch_maps_are_inverse() {
        let chart = ChartBuilder::new().branch_offset(7).build().unwrap();
        let index = ChartIndex::build(&chart);
        for i in 0..SECTOR_COUNT {
            assert_eq!(index.index_of_branch(index.branch(i)), Some(i));
        }
    }

    #[test]
    fn test_scoped_index_uses_scope_names_and_transforms() {
        let mut names = Palace::ALL.to_vec();
        names.rotate_right(2);
        let chart = ChartBuilder::new()
            .stars(5, &[TIAN_JI])
            .scope(ScopeRecord {
                scope: Scope::Yearly,
                palace_names: names,
                active_transforms: vec![TAI_YANG.into(), TIAN_JI.into()],
            })
            .build()
            .unwrap();
        let index = ChartIndex::build(&chart);

        assert_eq!(index.scope(), Scope::Yearly);
        assert_eq!(index.index_of(Palace::Life).unwrap(), 2);
        assert!(index.has_transform(5, TransformKind::Quan));
        assert!(!index.has_transform(5, TransformKind::Lu));
    }

    #[test]
    fn test_palaces_iterate_in_canonical_order() {
        let chart = ChartBuilder::new().life_at(4).build().unwrap();
        let index = ChartIndex::build(&chart);
        let order: Vec<Palace> = index.palaces().map(|(p, _)| p).collect();
        assert_eq!(order, Palace::ALL.to_vec());
        assert_eq!(index.palaces().next(), Some((Palace::Life, 4)));
    }
}
