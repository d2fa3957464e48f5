//! Chart model, ring relations and the chart adapter

pub mod adapter;
pub mod builder;
pub mod model;
pub mod relations;
pub mod stars;

pub use adapter::ChartIndex;
pub use builder::ChartBuilder;
pub use model::{
    Branch, Brightness, Chart, Marker, MarkerCategory, Palace, Scope, ScopeRecord, Sector,
    Surrounded, TransformKind, SECTOR_COUNT,
};
pub use relations::{four_way, left, opposite, right, trines, Relation};
