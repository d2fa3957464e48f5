//! Explanation rendering
//!
//! Turns per-palace synastry scores into ranked highlights, risks, advice
//! and a one-line tone, then formats reports as JSON or Markdown.

pub mod formatters;
pub mod generator;
pub mod tables;
pub mod types;

pub use formatters::{JsonFormatter, MarkdownFormatter};
pub use generator::{ExplanationGenerator, RenderConfig};
pub use types::{PalaceAdvice, PalaceReading, RenderOptions, SynastryReport};
