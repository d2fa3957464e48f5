//! Chart acquisition
//!
//! Chart generation from birth data lives outside this crate. A
//! `ChartProvider` turns a validated request into a `Chart`; the bundled
//! providers read charts the generator has already exported as JSON.

use crate::chart::{Chart, Scope, ScopeRecord};
use crate::error::{AnalysisError, Result};
use chrono::{NaiveDate, NaiveTime};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "男")]
    Male,
    #[serde(alias = "女")]
    Female,
}

impl FromStr for Gender {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "male" | "Male" | "m" | "男" => Ok(Gender::Male),
            "female" | "Female" | "f" | "女" => Ok(Gender::Female),
            other => Err(AnalysisError::validation(format!("Invalid gender '{}'", other))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

/// Birth parameters forwarded to the chart generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub gender: Gender,
    pub city: String,
    #[serde(default)]
    pub lunar: bool,
    #[serde(default)]
    pub leap: bool,
}

impl BirthInfo {
    pub fn validate(&self) -> Result<()> {
        parse_date(&self.date)
            .ok_or_else(|| AnalysisError::validation(format!("Invalid birth date '{}', expected YYYY-MM-DD", self.date)))?;
        parse_time(&self.time)
            .ok_or_else(|| AnalysisError::validation(format!("Invalid birth time '{}', expected HH:MM", self.time)))?;
        if self.city.trim().is_empty() {
            return Err(AnalysisError::validation("Birth city is required"));
        }
        if self.leap && !self.lunar {
            return Err(AnalysisError::validation("Leap month only applies to lunar dates"));
        }
        Ok(())
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // chrono accepts short years for %Y
    if s.split('-').next().map_or(true, |y| y.len() != 4) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Which time layer of the chart to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeQuery {
    pub scope: Scope,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl Default for ScopeQuery {
    fn default() -> Self {
        Self::origin()
    }
}

impl ScopeQuery {
    pub fn origin() -> Self {
        Self { scope: Scope::Origin, year: None, month: None, day: None }
    }

    pub fn new(scope: Scope, year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { scope, year, month, day }
    }

    /// Non-origin scopes need a year, monthly/daily a month, daily a day
    pub fn validate(&self) -> Result<()> {
        if self.scope != Scope::Origin && self.year.is_none() {
            return Err(AnalysisError::validation(format!("{} scope requires a year", self.scope)));
        }
        if matches!(self.scope, Scope::Monthly | Scope::Daily) && self.month.is_none() {
            return Err(AnalysisError::validation(format!("{} scope requires a month", self.scope)));
        }
        if self.scope == Scope::Daily && self.day.is_none() {
            return Err(AnalysisError::validation("daily scope requires a day"));
        }
        if self.month.is_some_and(|m| !(1..=12).contains(&m)) {
            return Err(AnalysisError::validation("Query month must be 1-12"));
        }
        if self.day.is_some_and(|d| !(1..=31).contains(&d)) {
            return Err(AnalysisError::validation("Query day must be 1-31"));
        }
        if let (Some(year), Some(month), Some(day)) = (self.year, self.month, self.day) {
            if NaiveDate::from_ymd_opt(year, month, day).is_none() {
                return Err(AnalysisError::validation(format!(
                    "Query date {}-{:02}-{:02} is not a calendar date",
                    year, month, day
                )));
            }
        }
        Ok(())
    }

    /// `YYYY-MM-DD` for scoped queries, month and day defaulting to 1
    pub fn query_date(&self) -> Option<String> {
        if self.scope == Scope::Origin {
            return None;
        }
        let year = self.year?;
        Some(format!(
            "{}-{:02}-{:02}",
            year,
            self.month.unwrap_or(1),
            self.day.unwrap_or(1)
        ))
    }
}

/// One party of an analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Display name; also the document key for file-backed providers
    pub subject: String,
    pub birth: BirthInfo,
    #[serde(default)]
    pub query: ScopeQuery,
}

impl ChartRequest {
    pub fn validate(&self) -> Result<()> {
        self.birth.validate()?;
        self.query.validate()
    }
}

/// Source of populated charts
pub trait ChartProvider: Send + Sync {
    fn chart(&self, request: &ChartRequest) -> Result<Chart>;
}

/// Scope layer exported for one query date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeEntry {
    /// `YYYY-MM-DD` the layer was generated for
    pub date: String,
    #[serde(flatten)]
    pub record: ScopeRecord,
}

/// Exported chart: natal sectors plus any generated scope layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDocument {
    #[serde(default)]
    pub birth: Option<BirthInfo>,
    pub chart: Chart,
    #[serde(default)]
    pub scopes: Vec<ScopeEntry>,
}

impl ChartDocument {
    /// The chart view a request asks for
    pub fn resolve(&self, request: &ChartRequest) -> Result<Chart> {
        if let Some(birth) = &self.birth {
            if birth != &request.birth {
                return Err(AnalysisError::provider(format!(
                    "Chart for '{}' was generated from different birth data",
                    request.subject
                )));
            }
        }

        let Some(date) = request.query.query_date() else {
            return Ok(self.chart.clone());
        };
        let entry = self
            .scopes
            .iter()
            .find(|e| e.record.scope == request.query.scope && e.date == date)
            .ok_or_else(|| {
                AnalysisError::provider(format!(
                    "No {} layer for {} in chart '{}'",
                    request.query.scope, date, request.subject
                ))
            })?;
        self.chart.with_scope(entry.record.clone())
    }
}

/// Reads `<root>/<subject>.json` chart documents
pub struct JsonChartProvider {
    root: PathBuf,
}

impl JsonChartProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, subject: &str) -> Result<PathBuf> {
        if subject.is_empty() || subject.contains(['/', '\\']) || subject.starts_with('.') {
            return Err(AnalysisError::validation(format!("Invalid subject name '{}'", subject)));
        }
        Ok(self.root.join(format!("{}.json", subject)))
    }

    pub fn load_document(&self, subject: &str) -> Result<ChartDocument> {
        let path = self.document_path(subject)?;
        let contents = fs::read_to_string(&path).map_err(|e| {
            AnalysisError::provider(format!("Failed to read chart document {:?}: {}", path, e))
        })?;
        let document = serde_json::from_str(&contents)?;
        tracing::debug!(?path, "loaded chart document");
        Ok(document)
    }
}

impl ChartProvider for JsonChartProvider {
    fn chart(&self, request: &ChartRequest) -> Result<Chart> {
        request.validate()?;
        self.load_document(&request.subject)?.resolve(request)
    }
}

/// Provider over documents already in memory
#[derive(Default)]
pub struct MemoryChartProvider {
    documents: FxHashMap<String, ChartDocument>,
}

impl MemoryChartProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: impl Into<String>, document: ChartDocument) {
        self.documents.insert(subject.into(), document);
    }

    pub fn with(mut self, subject: impl Into<String>, document: ChartDocument) -> Self {
        self.insert(subject, document);
        self
    }
}

impl ChartProvider for MemoryChartProvider {
    fn chart(&self, request: &ChartRequest) -> Result<Chart> {
        request.validate()?;
        self.documents
            .get(&request.subject)
            .ok_or_else(|| AnalysisError::provider(format!("No chart for subject '{}'", request.subject)))?
            .resolve(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartBuilder, Palace};
    use crate::error::ErrorKind;

    fn birth() -> BirthInfo {
        BirthInfo {
            date: "1990-05-17".into(),
            time: "08:30".into(),
            gender: Gender::Female,
            city: "Hangzhou".into(),
            lunar: false,
            leap: false,
        }
    }

    fn yearly_record() -> ScopeRecord {
        let mut names = Palace::ALL.to_vec();
        names.rotate_left(3);
        ScopeRecord { scope: Scope::Yearly, palace_names: names, active_transforms: vec![] }
    }

    #[test]
    fn test_birth_validation() {
        assert!(birth().validate().is_ok());
        for (date, time) in [("1990/05/17", "08:30"), ("1990-13-01", "08:30"), ("1990-05-17", "24:00"), ("90-05-17", "8:30"), ("1990-02-31", "08:30"), ("1991-02-29", "08:30"), ("1990-05-17", "08:61")] {
            let info = BirthInfo { date: date.into(), time: time.into(), ..birth() };
            let err = info.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValidationError, "{} {}", date, time);
        }
        let leap_solar = BirthInfo { leap: true, ..birth() };
        assert!(leap_solar.validate().is_err());
    }

    #[test]
    fn test_scope_query_requirements() {
        assert!(ScopeQuery::origin().validate().is_ok());
        assert!(ScopeQuery::new(Scope::Yearly, None, None, None).validate().is_err());
        assert!(ScopeQuery::new(Scope::Monthly, Some(2024), None, None).validate().is_err());
        assert!(ScopeQuery::new(Scope::Daily, Some(2024), Some(3), None).validate().is_err());
        assert!(ScopeQuery::new(Scope::Daily, Some(2024), Some(3), Some(9)).validate().is_ok());
        assert!(ScopeQuery::new(Scope::Daily, Some(2024), Some(2), Some(29)).validate().is_ok());
        assert!(ScopeQuery::new(Scope::Daily, Some(2025), Some(2), Some(29)).validate().is_err());
    }

    #[test]
    fn test_query_date_padding() {
        assert_eq!(ScopeQuery::origin().query_date(), None);
        assert_eq!(
            ScopeQuery::new(Scope::Yearly, Some(2025), None, None).query_date().as_deref(),
            Some("2025-01-01")
        );
        assert_eq!(
            ScopeQuery::new(Scope::Daily, Some(2025), Some(3), Some(9)).query_date().as_deref(),
            Some("2025-03-09")
        );
    }

    #[test]
    fn test_memory_provider_resolves_scope_layer() {
        let document = ChartDocument {
            birth: Some(birth()),
            chart: ChartBuilder::new().build().unwrap(),
            scopes: vec![ScopeEntry { date: "2025-01-01".into(), record: yearly_record() }],
        };
        let provider = MemoryChartProvider::new().with("ana", document);

        let mut request = ChartRequest { subject: "ana".into(), birth: birth(), query: ScopeQuery::origin() };
        assert!(provider.chart(&request).unwrap().scope().is_none());

        request.query = ScopeQuery::new(Scope::Yearly, Some(2025), None, None);
        let scoped = provider.chart(&request).unwrap();
        assert_eq!(scoped.scope().unwrap().scope, Scope::Yearly);

        request.query = ScopeQuery::new(Scope::Yearly, Some(2026), None, None);
        assert_eq!(provider.chart(&request).unwrap_err().kind(), ErrorKind::ProviderError);
    }

    #[test]
    fn test_birth_mismatch_is_provider_error() {
        let document = ChartDocument { birth: Some(birth()), chart: ChartBuilder::new().build().unwrap(), scopes: vec![] };
        let provider = MemoryChartProvider::new().with("ana", document);
        let request = ChartRequest {
            subject: "ana".into(),
            birth: BirthInfo { time: "09:30".into(), ..birth() },
            query: ScopeQuery::origin(),
        };
        assert_eq!(provider.chart(&request).unwrap_err().kind(), ErrorKind::ProviderError);
    }

    #[test]
    fn test_json_provider_rejects_path_subjects() {
        let provider = JsonChartProvider::new("charts");
        let request = ChartRequest { subject: "../etc".into(), birth: birth(), query: ScopeQuery::origin() };
        assert_eq!(provider.chart(&request).unwrap_err().kind(), ErrorKind::ValidationError);
    }
}
