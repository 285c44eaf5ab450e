//! A/B Test Analysis
//!
//! This module provides the experiment side of Beacon:
//!
//! - **types**: Variants, tests and confidence levels
//! - **significance**: Two-proportion z-test between control and treatment
//! - **report**: Whole-test analysis with winner selection
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use beacon::experiment::{compute_significance, ConfidenceLevel, Variant};
//!
//! let control = Variant::new("control", "Control").counts(1000, 50);
//! let treatment = Variant::new("variant_1", "New headline").counts(1000, 80);
//!
//! let result = compute_significance(&control, &treatment).unwrap();
//! assert_eq!(result.significance, ConfidenceLevel::NinetyFive);
//! assert_eq!(result.lift, 60.0);
//! ```

pub mod error;
pub mod report;
pub mod significance;
pub mod types;

pub use error::{ExperimentError, ExperimentResult};
pub use report::{analyze_test, ComparisonOutcome, TestReport, VariantComparison, VariantSummary};
pub use significance::{compute_significance, pooled_rate, standard_error};
pub use types::{AbTest, ConfidenceLevel, SignificanceResult, TestStatus, Variant, CONTROL_ID};
