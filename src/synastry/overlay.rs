//! Synastry overlay
//!
//! Two natal charts place the same earthly branch at different indices, so
//! projection aligns by branch rather than by index. `project(a, b)` puts
//! B's stars into A's frame; it is not symmetric with `project(b, a)`.

use crate::chart::{Brightness, ChartIndex, TransformKind, SECTOR_COUNT};
use serde::Serialize;

/// A source star as seen from the target frame, with its source brightness
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedStar {
    pub name: String,
    pub brightness: Option<Brightness>,
}

/// B's stars and transforms keyed by A's sector index
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectedFrame {
    stars: [Vec<ProjectedStar>; SECTOR_COUNT],
    transforms: [Vec<TransformKind>; SECTOR_COUNT],
}

impl ProjectedFrame {
    pub fn stars(&self, index: usize) -> &[ProjectedStar] {
        &self.stars[index % SECTOR_COUNT]
    }

    pub fn transforms(&self, index: usize) -> &[TransformKind] {
        &self.transforms[index % SECTOR_COUNT]
    }

    pub fn is_empty(&self) -> bool {
        self.stars.iter().all(Vec::is_empty) && self.transforms.iter().all(Vec::is_empty)
    }
}

/// Project `source` onto `target`'s frame by shared branch
///
/// A target branch absent from the source leaves that sector empty.
pub fn project(target: &ChartIndex, source: &ChartIndex) -> ProjectedFrame {
    let mut frame = ProjectedFrame::default();

    for i in 0..SECTOR_COUNT {
        let branch = target.branch(i);
        let Some(j) = source.index_of_branch(branch) else {
            tracing::warn!(%branch, index = i, "branch missing from source chart, projection left empty");
            continue;
        };

        // BTreeSet order keeps projections deterministic
        frame.stars[i] = source
            .stars(j)
            .iter()
            .map(|name| ProjectedStar {
                name: name.clone(),
                brightness: source.brightness(j, name),
            })
            .collect();
        frame.transforms[i] = source.transforms(j).iter().copied().collect();
    }

    frame
}
