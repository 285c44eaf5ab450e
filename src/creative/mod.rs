//! Mock Content & Creative Generation
//!
//! Placeholder marketing copy and synthetic compliance findings.
//!
//! ## Architecture
//!
//! - **vocabulary**: Brief keyword extraction for template placeholders
//! - **templates**: Copy tables keyed by content type, platform and tone
//! - **metrics**: Illustrative (never measured) performance figures
//! - **generator**: Variations, drafts and creatives
//! - **compliance**: Rule-based platform policy checks
//! - **ids**: Injected identifier and clock sources
//!
//! Nothing here talks to an ad platform or a language model; all output is
//! canned text with substitutions.

pub mod compliance;
pub mod error;
pub mod generator;
pub mod ids;
pub mod metrics;
pub mod templates;
pub mod types;
pub mod vocabulary;

pub use compliance::{check_compliance, ComplianceChecker};
pub use error::{CreativeError, CreativeResult};
pub use generator::{generate_variations, ContentGenerator, DEFAULT_IMAGE_STYLE, MAX_VARIATIONS};
pub use ids::{Clock, FixedClock, IdGenerator, SequenceIds, SystemClock};
pub use metrics::sample_metrics;
pub use types::{
    ComplianceIssue, ComplianceReport, ComplianceStatus, ContentDraft, ContentType,
    CreativeAsset, CreativeRequest, DraftStatus, IllustrativeMetrics, Platform, Risk, Tone,
    Variation,
};
pub use vocabulary::BriefTokens;
