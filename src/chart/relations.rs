//! Positional relations on the 12-sector ring
//!
//! Pure index arithmetic modulo 12; no sector ever links to another.

use super::model::SECTOR_COUNT;
use serde::{Deserialize, Serialize};

pub fn opposite(i: usize) -> usize {
    (i + 6) % SECTOR_COUNT
}

/// Trine partners, (i+4) then (i+8)
pub fn trines(i: usize) -> [usize; 2] {
    [(i + 4) % SECTOR_COUNT, (i + 8) % SECTOR_COUNT]
}

pub fn left(i: usize) -> usize {
    (i + SECTOR_COUNT - 1) % SECTOR_COUNT
}

pub fn right(i: usize) -> usize {
    (i + 1) % SECTOR_COUNT
}

/// Self, opposite and both trines (san fang si zheng)
pub fn four_way(i: usize) -> [usize; 4] {
    let [t1, t2] = trines(i);
    [i % SECTOR_COUNT, opposite(i), t1, t2]
}

/// How a neighborhood sector relates to its center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    SelfPosition,
    Opposite,
    Trine1,
    Trine2,
}

impl Relation {
    /// Relations in the order `four_way` lists sectors
    pub const ORDER: [Relation; 4] = [
        Relation::SelfPosition,
        Relation::Opposite,
        Relation::Trine1,
        Relation::Trine2,
    ];

    /// Relation of `j` to center `i`, if `j` is in the four-way neighborhood
    pub fn between(i: usize, j: usize) -> Option<Self> {
        let [center, opp, t1, t2] = four_way(i);
        let j = j % SECTOR_COUNT;
        if j == center {
            Some(Relation::SelfPosition)
        } else if j == opp {
            Some(Relation::Opposite)
        } else if j == t1 {
            Some(Relation::Trine1)
        } else if j == t2 {
            Some(Relation::Trine2)
        } else {
            None
        }
    }
}
