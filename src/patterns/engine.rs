//! Pattern engine
//!
//! Runs every catalog rule against one chart index. Rules are independent:
//! a match never suppresses another, and each rule reports at most once.

use super::catalog::{PatternGroup, PatternRule, CATALOG};
use super::predicates::{PatternConfig, PatternContext};
use crate::chart::ChartIndex;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A detected pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub id: String,
    pub group: PatternGroup,
    pub title: String,
    pub description: String,
    /// Evidence: palaces, branches and stars involved
    pub reason: String,
}

impl PatternMatch {
    fn from_rule(rule: &PatternRule, reason: String) -> Self {
        Self {
            id: rule.descriptor.id.to_string(),
            group: rule.descriptor.group,
            title: rule.descriptor.title.to_string(),
            description: rule.descriptor.description.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatternEngine {
    config: PatternConfig,
}

impl PatternEngine {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Matches in catalog order; empty when nothing fires
    ///
    /// Fails only when the life neighborhood cannot be resolved.
    pub fn detect(&self, index: &ChartIndex) -> Result<Vec<PatternMatch>> {
        let ctx = PatternContext::new(index, &self.config)?;

        let matches: Vec<PatternMatch> = CATALOG
            .iter()
            .filter_map(|rule| (rule.detect)(&ctx).map(|reason| PatternMatch::from_rule(rule, reason)))
            .collect();

        tracing::debug!(
            scope = %index.scope(),
            evaluated = CATALOG.len(),
            matched = matches.len(),
            "pattern detection complete"
        );
        Ok(matches)
    }
}
