//! # Beacon
//!
//! Marketing experiment analytics: A/B test significance, placeholder content
//! generation and rule-based compliance checks.
//!
//! ## Modules
//!
//! - [`experiment`]: Two-proportion z-test and whole-test reports
//! - [`creative`]: Template-based copy, illustrative metrics, compliance rules
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use beacon::creative::{check_compliance, generate_variations, ComplianceStatus};
//! use beacon::experiment::{compute_significance, Variant};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let control = Variant::new("control", "Control").counts(1000, 50);
//! let treatment = Variant::new("variant_1", "Short form").counts(1000, 80);
//! let result = compute_significance(&control, &treatment).unwrap();
//! println!("lift {:+.2}% at {}", result.lift, result.significance);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let variations = generate_variations("AI platform launch", "ad_copy", "casual", &mut rng).unwrap();
//! assert!(!variations.is_empty());
//!
//! let report = check_compliance(&variations[0].content, "google_ads", "ad_copy");
//! assert_ne!(report.status, ComplianceStatus::Approved);
//! ```

pub mod config;
pub mod creative;
pub mod experiment;

pub use config::{
    ComplianceConfig, Config, ConfigError, ExperimentConfig, GeneratorConfig, LoggingConfig,
};

pub use experiment::{
    analyze_test, compute_significance, AbTest, ConfidenceLevel, ExperimentError,
    ExperimentResult, SignificanceResult, TestReport, TestStatus, Variant,
};

pub use creative::{
    check_compliance, generate_variations, ComplianceChecker, ComplianceReport, ComplianceStatus,
    ContentDraft, ContentGenerator, CreativeAsset, CreativeError, CreativeRequest, Variation,
};
