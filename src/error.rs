//! Error types for chart analysis
//!
//! Every failure carries an explicit kind so callers can turn it into a
//! structured failure record instead of aborting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used by the engines
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failure category exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    ValidationError,
    LookupError,
    ProviderError,
}

/// Errors raised while acquiring or analyzing charts
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Malformed input: birth parameters, scope query, chart invariants
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A palace, scope or relation that cannot be resolved
    #[error("Lookup error: {message}")]
    Lookup { message: String },

    /// The chart provider could not produce a chart
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// IO error while reading provider output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider output that is not valid chart JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn validation(message: impl Into<String>) -> Self {
        AnalysisError::Validation { message: message.into() }
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        AnalysisError::Lookup { message: message.into() }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        AnalysisError::Provider { message: message.into() }
    }

    /// Kind reported in failure records (IO and JSON problems belong to the provider)
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Validation { .. } => ErrorKind::ValidationError,
            AnalysisError::Lookup { .. } => ErrorKind::LookupError,
            AnalysisError::Provider { .. } | AnalysisError::Io(_) | AnalysisError::Json(_) => {
                ErrorKind::ProviderError
            }
        }
    }
}

/// Serializable failure record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&AnalysisError> for Failure {
    fn from(err: &AnalysisError) -> Self {
        Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Success/failure envelope handed back to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

impl<T> Outcome<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(data) => Outcome { success: true, data: Some(data), error: None },
            Err(err) => {
                tracing::warn!("Analysis failed: {}", err);
                Outcome { success: false, data: None, error: Some(Failure::from(&err)) }
            }
        }
    }
}
