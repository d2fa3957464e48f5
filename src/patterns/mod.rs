//! Pattern (configuration) detection
//!
//! - `catalog`: static descriptors paired with their rules
//! - `predicates`: shared set primitives over a `ChartIndex`
//! - `rules/`: one module per pattern group
//! - `engine`: evaluates the catalog in order

pub mod catalog;
pub mod engine;
pub mod predicates;
pub mod rules;

pub use catalog::{descriptor, descriptors, PatternDescriptor, PatternGroup, CATALOG};
pub use engine::{PatternEngine, PatternMatch};
pub use predicates::{PatternConfig, PatternContext};
