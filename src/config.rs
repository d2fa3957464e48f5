//! Analyzer configuration
//!
//! Built-in defaults cover every table; a JSON file only needs the fields it
//! overrides.

use crate::explanation::RenderConfig;
use crate::patterns::PatternConfig;
use crate::synastry::ScoringConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "ZIWEI_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub scoring: ScoringConfig,
    pub patterns: PatternConfig,
    pub render: RenderConfig,
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AnalyzerConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        config.check()?;
        tracing::info!(?path, "loaded analyzer config");
        Ok(config)
    }

    /// `ZIWEI_CONFIG` if set, built-in defaults otherwise
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<()> {
        let scoring = &self.scoring;
        if scoring.epsilon.is_nan() || scoring.epsilon < 0.0 {
            anyhow::bail!("epsilon must be non-negative, got {}", scoring.epsilon);
        }
        if self.patterns.pair_threshold == 0 {
            anyhow::bail!("pair_threshold must be at least 1");
        }
        if !scoring.buckets.is_partition() {
            tracing::warn!("bucket table does not partition [0, 100]; gaps fall back to '{}'", scoring.buckets.fallback);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ziwei_config_{}_{}.json", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_partial_override() {
        let path = write_temp(
            "partial",
            r#"{"patterns": {"pair_threshold": 2}, "scoring": {"logistic": {"center": 2.0, "spread": 3.0}}}"#,
        );
        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.patterns.pair_threshold, 2);
        assert_relative_eq!(config.scoring.logistic.center, 2.0);
        assert_relative_eq!(config.scoring.positions.trine1, 0.5);
        assert_relative_eq!(config.render.options.min_abs_effect, 0.3);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_rejects_negative_epsilon() {
        let path = write_temp("epsilon", r#"{"scoring": {"epsilon": -1.0}}"#);
        assert!(AnalyzerConfig::load(&path).is_err());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = AnalyzerConfig::load(Path::new("/nonexistent/ziwei.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
