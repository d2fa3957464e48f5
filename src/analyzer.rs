//! Analysis coordinator
//!
//! Acquires charts through a `ChartProvider` and runs them through the
//! pattern engine, the synastry scorer and the explanation generator.
//!
//! Pipeline for synastry:
//! 1. Validate both requests
//! 2. Acquire chart A and chart B in parallel (`rayon::join`)
//! 3. Build a `ChartIndex` for each
//! 4. Project B onto A and score each of A's palaces
//! 5. Rank contribution lines and render the report

use crate::chart::{Branch, Chart, ChartIndex, Marker, Palace, Scope, Sector, TransformKind};
use crate::config::AnalyzerConfig;
use crate::data::{ChartProvider, ChartRequest};
use crate::error::{AnalysisError, Result};
use crate::explanation::{ExplanationGenerator, RenderOptions, SynastryReport};
use crate::patterns::{PatternEngine, PatternMatch};
use crate::synastry::{SynastryScore, SynastryScorer};
use serde::{Deserialize, Serialize};

/// Synastry between two parties; both must ask for the same time layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynastryRequest {
    pub a: ChartRequest,
    pub b: ChartRequest,
    /// Overrides the configured render options for this request
    #[serde(default)]
    pub render: Option<RenderOptions>,
    #[serde(default)]
    pub include_raw_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynastrySummary {
    pub headline: String,
    pub total_palaces: usize,
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynastryMetadata {
    pub min_effect_threshold: f64,
    pub max_items_per_polarity: Option<usize>,
    pub scope_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynastryAnalysis {
    pub summary: SynastrySummary,
    pub report: SynastryReport,
    pub metadata: SynastryMetadata,
    /// Per-palace raw sums and every recorded contribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<SynastryScore>,
}

/// Patterns detected in one chart view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternReport {
    pub subject: String,
    pub scope: Scope,
    pub patterns: Vec<PatternMatch>,
}

/// One sector as shown in a palace query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorView {
    pub index: usize,
    pub palace: Palace,
    pub branch: Branch,
    pub primary: Vec<Marker>,
    pub secondary: Vec<Marker>,
    pub auxiliary: Vec<Marker>,
}

impl SectorView {
    fn new(chart: &Chart, sector: &Sector) -> Self {
        Self {
            index: sector.index,
            palace: chart.palace_name(sector.index),
            branch: sector.branch,
            primary: sector.primary.clone(),
            secondary: sector.secondary.clone(),
            auxiliary: sector.auxiliary.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveTransform {
    pub star: String,
    pub transform: TransformKind,
}

/// A palace with its opposite and trines, plus the chart's patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalaceView {
    pub subject: String,
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_date: Option<String>,
    pub target: SectorView,
    pub opposite: SectorView,
    pub trines: [SectorView; 2],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub active_transforms: Vec<ActiveTransform>,
    pub patterns: Vec<PatternMatch>,
}

pub struct Analyzer<P> {
    provider: P,
    config: AnalyzerConfig,
    patterns: PatternEngine,
    scorer: SynastryScorer,
    generator: ExplanationGenerator,
}

impl<P: ChartProvider> Analyzer<P> {
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        let patterns = PatternEngine::new(config.patterns.clone());
        let scorer = SynastryScorer::new(config.scoring.clone());
        let generator = ExplanationGenerator::new(config.render.clone());
        Self { provider, config, patterns, scorer, generator }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn acquire(&self, request: &ChartRequest) -> Result<Chart> {
        request.validate()?;
        let chart = self.provider.chart(request)?;
        tracing::debug!(subject = %request.subject, scope = %request.query.scope, "chart acquired");
        Ok(chart)
    }

    pub fn synastry(&self, request: &SynastryRequest) -> Result<SynastryAnalysis> {
        if request.a.query.scope != request.b.query.scope
            || request.a.query.query_date() != request.b.query.query_date()
        {
            return Err(AnalysisError::validation(
                "Both parties of a synastry must use the same scope and query date",
            ));
        }

        let (chart_a, chart_b) = rayon::join(|| self.acquire(&request.a), || self.acquire(&request.b));
        let (chart_a, chart_b) = (chart_a?, chart_b?);

        tracing::info!(a = %request.a.subject, b = %request.b.subject, scope = %request.a.query.scope, "scoring synastry");
        let (score, report) = self.score_charts(
            &chart_a,
            &chart_b,
            &request.a.subject,
            &request.b.subject,
            request.render.as_ref(),
        );
        let render = request.render.as_ref().unwrap_or(&self.config.render.options);

        Ok(SynastryAnalysis {
            summary: SynastrySummary {
                headline: report.headline.clone(),
                total_palaces: report.palaces.len(),
                scope: request.a.query.scope,
                query_date: request.a.query.query_date(),
            },
            report,
            metadata: SynastryMetadata {
                min_effect_threshold: render.min_abs_effect,
                max_items_per_polarity: render.max_items_per_polarity,
                scope_weight: self.config.scoring.scope_weight,
            },
            raw_data: request.include_raw_data.then_some(score),
        })
    }

    /// Score B onto A for charts already in hand
    ///
    /// `render` overrides the configured ranking options.
    pub fn score_charts(
        &self,
        a: &Chart,
        b: &Chart,
        a_name: &str,
        b_name: &str,
        render: Option<&RenderOptions>,
    ) -> (SynastryScore, SynastryReport) {
        let index_a = ChartIndex::build(a);
        let index_b = ChartIndex::build(b);
        let score = self.scorer.score(&index_a, &index_b);
        let buckets = &self.config.scoring.buckets;

        let report = match render {
            None => self.generator.generate(a_name, b_name, &score, buckets),
            Some(options) => {
                let mut config = self.config.render.clone();
                config.options = options.clone();
                ExplanationGenerator::new(config).generate(a_name, b_name, &score, buckets)
            }
        };
        (score, report)
    }

    pub fn patterns(&self, request: &ChartRequest) -> Result<PatternReport> {
        let chart = self.acquire(request)?;
        let index = ChartIndex::build(&chart);
        Ok(PatternReport {
            subject: request.subject.clone(),
            scope: index.scope(),
            patterns: self.patterns.detect(&index)?,
        })
    }

    pub fn palace(&self, request: &ChartRequest, palace: Palace) -> Result<PalaceView> {
        let chart = self.acquire(request)?;
        let surrounded = chart.surrounded(palace)?;
        let index = ChartIndex::build(&chart);

        let active_transforms = chart
            .scope()
            .map(|record| {
                record
                    .transforms()
                    .map(|(star, transform)| ActiveTransform { star: star.to_string(), transform })
                    .collect()
            })
            .unwrap_or_default();

        Ok(PalaceView {
            subject: request.subject.clone(),
            scope: index.scope(),
            query_date: request.query.query_date(),
            target: SectorView::new(&chart, surrounded.target),
            opposite: SectorView::new(&chart, surrounded.opposite),
            trines: surrounded.trines.map(|s| SectorView::new(&chart, s)),
            active_transforms,
            patterns: self.patterns.detect(&index)?,
        })
    }
}
