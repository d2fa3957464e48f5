//! Cross-chart (synastry) scoring
//!
//! - `overlay`: branch-aligned projection of one chart onto another
//! - `weights`: weight tables and scoring parameters
//! - `scoring`: per-palace aggregation, normalization and buckets

pub mod overlay;
pub mod scoring;
pub mod weights;

pub use overlay::{project, ProjectedFrame, ProjectedStar};
pub use scoring::{ContributionLine, PalaceScore, Subject, SynastryScore, SynastryScorer};
pub use weights::{
    BrightnessScale, BrightnessTables, PositionWeights, ScoringConfig, StarGroup, StarWeights,
    TransformWeights,
};
