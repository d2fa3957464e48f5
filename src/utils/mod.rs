//! Utility modules for synastry scoring
//!
//! - Normalization: logistic squash and bucket classification

pub mod normalization;

pub use normalization::{logistic_normalize, Bucket, BucketTable, LogisticParams, Polarity};
