//! Programmatic chart construction
//!
//! Used by providers that assemble charts field by field and by tests.
//! Palaces run backwards from the life sector (sector `life - k` holds the
//! k-th palace), which keeps Wealth and Career on the life sector's trines
//! and Travel opposite it.

use super::model::{Branch, Chart, Marker, MarkerCategory, Palace, ScopeRecord, Sector, SECTOR_COUNT};
use super::stars::category_of;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ChartBuilder {
    life_index: usize,
    branches: [Branch; SECTOR_COUNT],
    markers: Vec<(usize, Marker)>,
    scope: Option<ScopeRecord>,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartBuilder {
    /// Life palace at sector 0, sector 0 on 寅 (provider convention)
    pub fn new() -> Self {
        Self {
            life_index: 0,
            branches: std::array::from_fn(|i| Branch::from_ordinal(i + 2)),
            markers: Vec::new(),
            scope: None,
        }
    }

    pub fn life_at(mut self, index: usize) -> Self {
        self.life_index = index % SECTOR_COUNT;
        self
    }

    /// Sector i gets branch ordinal (i + offset)
    pub fn branch_offset(mut self, offset: usize) -> Self {
        self.branches = std::array::from_fn(|i| Branch::from_ordinal(i + offset));
        self
    }

    pub fn branches(mut self, branches: [Branch; SECTOR_COUNT]) -> Self {
        self.branches = branches;
        self
    }

    /// Place stars by name, filed into the group their category implies
    pub fn stars(mut self, index: usize, names: &[&str]) -> Self {
        for name in names {
            self.markers
                .push((index % SECTOR_COUNT, Marker::new(*name, category_of(name))));
        }
        self
    }

    pub fn marker(mut self, index: usize, marker: Marker) -> Self {
        self.markers.push((index % SECTOR_COUNT, marker));
        self
    }

    pub fn scope(mut self, record: ScopeRecord) -> Self {
        self.scope = Some(record);
        self
    }

    pub fn build(self) -> Result<Chart> {
        let mut sectors: Vec<Sector> = (0..SECTOR_COUNT)
            .map(|i| {
                let palace_ordinal = (self.life_index + SECTOR_COUNT - i) % SECTOR_COUNT;
                Sector::new(i, self.branches[i], Palace::ALL[palace_ordinal])
            })
            .collect();

        for (index, marker) in self.markers {
            let sector = &mut sectors[index];
            match marker.category {
                MarkerCategory::Major => sector.primary.push(marker),
                MarkerCategory::Soft
                | MarkerCategory::Tough
                | MarkerCategory::Lucun
                | MarkerCategory::Tianma => sector.secondary.push(marker),
                MarkerCategory::Flower | MarkerCategory::Helper | MarkerCategory::Adjective => {
                    sector.auxiliary.push(marker)
                }
            }
        }

        Chart::new(sectors, self.scope)
    }
}
