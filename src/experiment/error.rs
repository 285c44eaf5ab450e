//! Experiment error types
//!
//! Defines every condition under which a significance calculation or a
//! test report cannot be produced.

use thiserror::Error;

/// Errors that can occur while analyzing an A/B test
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExperimentError {
    /// A variant has no visitors, so its conversion rate is undefined
    #[error("Variant '{variant}' has no visitors")]
    ZeroVisitors { variant: String },

    /// The control converted nobody, so relative lift is undefined
    #[error("Control variant '{variant}' has a zero conversion rate; lift is undefined")]
    ZeroBaselineRate { variant: String },

    /// Pooled conversion rate is 0 or 1, so the standard error is zero
    #[error("Pooled conversion rate of {pooled_rate} leaves no variance to test against")]
    DegenerateVariance { pooled_rate: f64 },

    /// Counters violate conversions <= visitors or revenue >= 0
    #[error("Invalid variant '{variant}': {reason}")]
    InvalidVariant { variant: String, reason: String },

    /// The test only holds its control variant
    #[error("Test '{test}' has no treatment variant to compare against the control")]
    NoTreatment { test: String },

    /// Traffic allocation outside 0..=100 or not summing to 100
    #[error("Invalid traffic split: {0}")]
    InvalidTrafficSplit(String),

    /// Lookup by variant id failed
    #[error("Variant not found: {0}")]
    VariantNotFound(String),
}

/// Result type alias for experiment operations
pub type ExperimentResult<T> = Result<T, ExperimentError>;
