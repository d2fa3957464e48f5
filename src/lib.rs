//! Zi Wei Dou Shu chart analysis
//!
//! Reads twelve-sector astrological charts and provides:
//! - `patterns/`: named configuration detection over a chart view
//! - `synastry/`: cross-chart scoring, one palace at a time
//! - `explanation/`: ranked, human-readable synastry reports
//!
//! Supporting modules:
//! - `chart/`: chart model, ring relations and the lookup index
//! - `data`: birth parameters, scope queries and chart providers
//! - `config`: JSON-overridable tables and thresholds
//! - `analyzer`: wires providers, engines and the renderer together
//! - `utils/`: logistic normalization and bucket classification

pub mod analyzer;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod explanation;
pub mod patterns;
pub mod synastry;
pub mod utils;

// Re-export commonly used types
pub use analyzer::{Analyzer, PalaceView, PatternReport, SynastryAnalysis, SynastryRequest};
pub use chart::{Chart, ChartBuilder, ChartIndex, Palace, Scope};
pub use config::AnalyzerConfig;
pub use data::{BirthInfo, ChartProvider, ChartRequest, JsonChartProvider, MemoryChartProvider, ScopeQuery};
pub use error::{AnalysisError, ErrorKind, Outcome, Result};
pub use explanation::{ExplanationGenerator, JsonFormatter, MarkdownFormatter, SynastryReport};
pub use patterns::{PatternEngine, PatternMatch};
pub use synastry::{SynastryScore, SynastryScorer};
