//! Core data types for content generation
//!
//! Content types, tones and platforms are accepted as free-form strings at
//! the API boundary. Parsing never fails hard: unrecognised values select the
//! generic fallback templates and the generic compliance rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of marketing content being produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    AdCopy,
    SocialPost,
    Email,
    LandingPage,
    BlogPost,
    BannerAd,
}

impl ContentType {
    /// Parse a content type key such as `"ad_copy"`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "ad_copy" => Some(ContentType::AdCopy),
            "social_post" => Some(ContentType::SocialPost),
            "email" => Some(ContentType::Email),
            "landing_page" | "landing_copy" => Some(ContentType::LandingPage),
            "blog_post" => Some(ContentType::BlogPost),
            "banner_ad" => Some(ContentType::BannerAd),
            _ => None,
        }
    }

    pub fn all() -> &'static [ContentType] {
        &[
            ContentType::AdCopy,
            ContentType::SocialPost,
            ContentType::Email,
            ContentType::LandingPage,
            ContentType::BlogPost,
            ContentType::BannerAd,
        ]
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::AdCopy => write!(f, "ad_copy"),
            ContentType::SocialPost => write!(f, "social_post"),
            ContentType::Email => write!(f, "email"),
            ContentType::LandingPage => write!(f, "landing_page"),
            ContentType::BlogPost => write!(f, "blog_post"),
            ContentType::BannerAd => write!(f, "banner_ad"),
        }
    }
}

/// Voice of the generated copy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Urgent,
    Inspirational,
    Humorous,
    Luxury,
}

impl Tone {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "urgent" => Some(Tone::Urgent),
            "inspirational" => Some(Tone::Inspirational),
            "humorous" => Some(Tone::Humorous),
            "luxury" => Some(Tone::Luxury),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Professional => write!(f, "professional"),
            Tone::Casual => write!(f, "casual"),
            Tone::Urgent => write!(f, "urgent"),
            Tone::Inspirational => write!(f, "inspirational"),
            Tone::Humorous => write!(f, "humorous"),
            Tone::Luxury => write!(f, "luxury"),
        }
    }
}

/// Where the content will be published
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Facebook,
    Instagram,
    GoogleAds,
    Linkedin,
    Twitter,
    Email,
}

impl Platform {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "facebook" => Some(Platform::Facebook),
            "instagram" => Some(Platform::Instagram),
            "google_ads" => Some(Platform::GoogleAds),
            "linkedin" => Some(Platform::Linkedin),
            "twitter" => Some(Platform::Twitter),
            "email" => Some(Platform::Email),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Facebook => write!(f, "facebook"),
            Platform::Instagram => write!(f, "instagram"),
            Platform::GoogleAds => write!(f, "google_ads"),
            Platform::Linkedin => write!(f, "linkedin"),
            Platform::Twitter => write!(f, "twitter"),
            Platform::Email => write!(f, "email"),
        }
    }
}

/// Placeholder performance figures attached to a generated variation
///
/// These are sampled at random for display. They are never measured and
/// must not be read as telemetry; `illustrative` is always `true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IllustrativeMetrics {
    pub illustrative: bool,
    /// Click-through rate, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    /// Engagement rate, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<f64>,
    /// Email open rate, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_rate: Option<f64>,
    /// Conversion rate, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    /// Bounce rate, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_rate: Option<f64>,
}

/// One generated piece of copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variation {
    pub content: String,
    pub metrics: IllustrativeMetrics,
}

/// State of a generated draft; drafts are never published by this crate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    #[default]
    Draft,
}

/// A generated set of variations awaiting selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentDraft {
    pub id: u64,
    pub brief: String,
    pub content_type: String,
    pub tone: String,
    pub variations: Vec<Variation>,
    /// Index into `variations` of the version the user picked
    pub selected_version: usize,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

/// Parameters for a creative asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreativeRequest {
    pub brief: String,
    pub content_type: String,
    pub platform: String,
    pub tone: String,
    #[serde(default)]
    pub image_style: Option<String>,
}

/// Overall compliance verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Approved,
    Warning,
    Rejected,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Approved => write!(f, "approved"),
            ComplianceStatus::Warning => write!(f, "warning"),
            ComplianceStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// How much a triggered rule weighs on the verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    High,
}

/// A single finding from the compliance rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceIssue {
    /// Rule label, e.g. "CAN-SPAM Compliance"
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub suggestion: String,
    pub risk: Risk,
}

/// Result of a compliance check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceReport {
    pub status: ComplianceStatus,
    pub issues: Vec<ComplianceIssue>,
}

/// A generated creative with imagery and its compliance verdict
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreativeAsset {
    pub id: u64,
    pub content: String,
    pub image_urls: Vec<String>,
    pub image_descriptions: Vec<String>,
    pub compliance_status: ComplianceStatus,
    pub compliance_issues: Vec<ComplianceIssue>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parse() {
        assert_eq!(ContentType::parse("ad_copy"), Some(ContentType::AdCopy));
        assert_eq!(ContentType::parse(" email "), Some(ContentType::Email));
        assert_eq!(ContentType::parse("landing_copy"), Some(ContentType::LandingPage));
        assert_eq!(ContentType::parse("podcast"), None);

        for ct in ContentType::all() {
            assert_eq!(ContentType::parse(&ct.to_string()), Some(*ct));
        }
    }

    #[test]
    fn test_tone_and_platform_parse() {
        assert_eq!(Tone::parse("luxury"), Some(Tone::Luxury));
        assert_eq!(Tone::parse("sarcastic"), None);
        assert_eq!(Platform::parse("google_ads"), Some(Platform::GoogleAds));
        assert_eq!(Platform::parse("myspace"), None);
    }

    #[test]
    fn test_metrics_skip_missing_fields() {
        let metrics = IllustrativeMetrics {
            illustrative: true,
            ctr: Some(3.2),
            ..Default::default()
        };
        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(json, r#"{"illustrative":true,"ctr":3.2}"#);
    }

    #[test]
    fn test_issue_serializes_type_field() {
        let issue = ComplianceIssue {
            kind: "Policy Warning".to_string(),
            message: "m".to_string(),
            suggestion: "s".to_string(),
            risk: Risk::High,
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains(r#""type":"Policy Warning""#));
        assert!(json.contains(r#""risk":"high""#));
    }
}
