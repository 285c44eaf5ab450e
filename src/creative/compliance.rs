//! Compliance Checker
//!
//! Runs a short, fixed list of platform and content-type rules over a piece
//! of copy. Any high-risk finding rejects the copy; low-risk findings alone
//! produce a warning. The check is deterministic and makes no external calls.

use crate::config::ComplianceConfig;
use crate::creative::types::{
    ComplianceIssue, ComplianceReport, ComplianceStatus, ContentType, Platform, Risk,
};
use regex::Regex;
use std::sync::OnceLock;

/// Phrases ad networks treat as low-quality calls to action
const GENERIC_CTAS: &[&str] = &["Click here", "click now"];

/// Phrases that satisfy the email opt-out requirement
const OPT_OUT_MARKERS: &[&str] = &["unsubscribe", "opt-out"];

/// Rule-based compliance checker
#[derive(Debug, Clone, Default)]
pub struct ComplianceChecker {
    config: ComplianceConfig,
}

impl ComplianceChecker {
    pub fn new(config: ComplianceConfig) -> Self {
        Self { config }
    }

    /// Check `content` destined for `platform` as `content_type`
    ///
    /// Unknown platforms and content types only get the platform-independent
    /// rules.
    pub fn check(&self, content: &str, platform: &str, content_type: &str) -> ComplianceReport {
        let platform = Platform::parse(platform);
        let content_type = ContentType::parse(content_type);
        let mut issues = Vec::new();

        match platform {
            Some(Platform::Facebook) => {
                if display_length(content) > self.config.facebook_char_limit {
                    issues.push(issue(
                        "Length Violation",
                        "Content exceeds Facebook's recommended character limit",
                        "Consider shortening the copy to improve engagement",
                        Risk::High,
                    ));
                }

                if GENERIC_CTAS.iter().any(|cta| content.contains(cta)) {
                    issues.push(issue(
                        "Policy Warning",
                        "Generic call-to-action may affect ad approval",
                        "Use more specific action words like 'Learn More' or 'Get Started'",
                        Risk::High,
                    ));
                }
            }
            Some(Platform::GoogleAds) => {
                if content.matches('!').count() > self.config.max_exclamations {
                    issues.push(issue(
                        "Editorial Policy",
                        "Excessive punctuation may affect ad quality score",
                        "Limit exclamation marks to maintain professional tone",
                        Risk::High,
                    ));
                }
            }
            Some(Platform::Instagram) => {
                if hashtag_count(content) > self.config.instagram_max_hashtags {
                    issues.push(issue(
                        "Hashtag Violation",
                        "Instagram rejects posts with more than 30 hashtags",
                        "Keep only the most relevant hashtags",
                        Risk::High,
                    ));
                }
            }
            Some(Platform::Linkedin) => {
                if display_length(content) > self.config.linkedin_char_limit {
                    issues.push(issue(
                        "Length Advisory",
                        "Content is longer than LinkedIn shows before truncation",
                        "Move key points into the opening lines",
                        Risk::Low,
                    ));
                }
            }
            Some(Platform::Twitter) | Some(Platform::Email) | None => {}
        }

        match content_type {
            Some(ContentType::Email) => {
                if !OPT_OUT_MARKERS.iter().any(|m| content.contains(m)) {
                    issues.push(issue(
                        "CAN-SPAM Compliance",
                        "Email missing required unsubscribe information",
                        "Add unsubscribe link and physical address",
                        Risk::High,
                    ));
                }
            }
            Some(ContentType::SocialPost) => {
                if hashtag_count(content) > self.config.social_hashtag_advisory {
                    issues.push(issue(
                        "Hashtag Density",
                        "Heavy hashtag use can read as spam",
                        "Trim hashtags to a handful of targeted tags",
                        Risk::Low,
                    ));
                }
            }
            _ => {}
        }

        if shouting_words(content) >= self.config.shouting_word_threshold {
            issues.push(issue(
                "Readability",
                "Several words are written in all capitals",
                "Use sentence case; reserve capitals for a single emphasis",
                Risk::Low,
            ));
        }

        let status = classify(&issues);

        tracing::debug!(
            platform = ?platform,
            content_type = ?content_type,
            issues = issues.len(),
            %status,
            "Compliance check complete"
        );

        ComplianceReport { status, issues }
    }
}

/// Check `content` with the default rule thresholds
pub fn check_compliance(content: &str, platform: &str, content_type: &str) -> ComplianceReport {
    ComplianceChecker::default().check(content, platform, content_type)
}

/// Overall verdict from the triggered rules
fn classify(issues: &[ComplianceIssue]) -> ComplianceStatus {
    if issues.is_empty() {
        ComplianceStatus::Approved
    } else if issues.iter().any(|i| i.risk == Risk::High) {
        ComplianceStatus::Rejected
    } else {
        ComplianceStatus::Warning
    }
}

fn issue(kind: &str, message: &str, suggestion: &str, risk: Risk) -> ComplianceIssue {
    ComplianceIssue {
        kind: kind.to_string(),
        message: message.to_string(),
        suggestion: suggestion.to_string(),
        risk,
    }
}

/// Length as ad platforms count it, in UTF-16 code units
///
/// Emoji outside the BMP count twice.
fn display_length(content: &str) -> usize {
    content.encode_utf16().count()
}

fn hashtag_count(content: &str) -> usize {
    static HASHTAG: OnceLock<Option<Regex>> = OnceLock::new();
    HASHTAG
        .get_or_init(|| Regex::new(r"#\w+").ok())
        .as_ref()
        .map(|re| re.find_iter(content).count())
        .unwrap_or(0)
}

/// Words of four or more capital letters
fn shouting_words(content: &str) -> usize {
    static SHOUTING: OnceLock<Option<Regex>> = OnceLock::new();
    SHOUTING
        .get_or_init(|| Regex::new(r"\b[A-Z]{4,}\b").ok())
        .as_ref()
        .map(|re| re.find_iter(content).count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(report: &ComplianceReport) -> Vec<&str> {
        report.issues.iter().map(|i| i.kind.as_str()).collect()
    }

    #[test]
    fn test_clean_copy_approved() {
        let report = check_compliance("Learn more about our platform.", "facebook", "ad_copy");
        assert_eq!(report.status, ComplianceStatus::Approved);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_facebook_length() {
        let long = "a".repeat(2201);
        let report = check_compliance(&long, "facebook", "ad_copy");
        assert_eq!(kinds(&report), vec!["Length Violation"]);
        assert_eq!(report.status, ComplianceStatus::Rejected);

        let exact = "a".repeat(2200);
        assert_eq!(check_compliance(&exact, "facebook", "ad_copy").status, ComplianceStatus::Approved);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert_eq!(display_length("🚀"), 2);
        assert_eq!(display_length("café"), 4);

        // 1101 rockets are 1101 chars but 2202 UTF-16 units
        let rockets = "🚀".repeat(1101);
        let report = check_compliance(&rockets, "facebook", "social_post");
        assert_eq!(kinds(&report), vec!["Length Violation"]);
        assert_eq!(report.status, ComplianceStatus::Rejected);

        let rockets = "🚀".repeat(1100);
        let report = check_compliance(&rockets, "facebook", "social_post");
        assert_eq!(report.status, ComplianceStatus::Approved);
    }

    #[test]
    fn test_facebook_generic_cta() {
        let report = check_compliance("Great deals. Click here to save.", "facebook", "ad_copy");
        assert_eq!(kinds(&report), vec!["Policy Warning"]);
        assert_eq!(report.status, ComplianceStatus::Rejected);

        // Only Facebook checks calls to action
        let report = check_compliance("Great deals. Click here to save.", "linkedin", "ad_copy");
        assert_eq!(report.status, ComplianceStatus::Approved);
    }

    #[test]
    fn test_google_ads_punctuation() {
        assert_eq!(
            check_compliance("Save today!", "google_ads", "banner_ad").status,
            ComplianceStatus::Approved
        );

        let report = check_compliance("Save today! Act now!", "google_ads", "banner_ad");
        assert_eq!(kinds(&report), vec!["Editorial Policy"]);
        assert_eq!(report.status, ComplianceStatus::Rejected);
    }

    #[test]
    fn test_email_requires_unsubscribe() {
        let report = check_compliance("Hi there, see our offer.", "email", "email");
        assert_eq!(kinds(&report), vec!["CAN-SPAM Compliance"]);
        assert_eq!(report.status, ComplianceStatus::Rejected);

        let ok = check_compliance("Hi there. To unsubscribe, reply STOP.", "email", "email");
        assert_eq!(ok.status, ComplianceStatus::Approved);

        let ok = check_compliance("Hi there. opt-out anytime.", "facebook", "email");
        assert_eq!(ok.status, ComplianceStatus::Approved);
    }

    #[test]
    fn test_low_risk_findings_warn() {
        let shouting = "HUGE SALE TODAY ONLY for everyone";
        let report = check_compliance(shouting, "twitter", "ad_copy");
        assert_eq!(kinds(&report), vec!["Readability"]);
        assert_eq!(report.status, ComplianceStatus::Warning);

        let tags: String = (0..12).map(|i| format!("#tag{} ", i)).collect();
        let report = check_compliance(&tags, "twitter", "social_post");
        assert_eq!(kinds(&report), vec!["Hashtag Density"]);
        assert_eq!(report.status, ComplianceStatus::Warning);

        let long = "word ".repeat(700);
        let report = check_compliance(&long, "linkedin", "ad_copy");
        assert_eq!(kinds(&report), vec!["Length Advisory"]);
        assert_eq!(report.status, ComplianceStatus::Warning);
    }

    #[test]
    fn test_high_risk_dominates() {
        let tags: String = (0..31).map(|i| format!("#t{} ", i)).collect();
        let report = check_compliance(&tags, "instagram", "social_post");
        assert_eq!(kinds(&report), vec!["Hashtag Violation", "Hashtag Density"]);
        assert_eq!(report.status, ComplianceStatus::Rejected);
    }

    #[test]
    fn test_unknown_platform_and_type() {
        let report = check_compliance("Click here!!! now", "myspace", "podcast");
        assert_eq!(report.status, ComplianceStatus::Approved);
    }

    #[test]
    fn test_custom_thresholds() {
        let checker = ComplianceChecker::new(ComplianceConfig {
            max_exclamations: 3,
            ..ComplianceConfig::default()
        });
        let report = checker.check("Wow! Yes! Now!", "google_ads", "ad_copy");
        assert_eq!(report.status, ComplianceStatus::Approved);
    }

    #[test]
    fn test_deterministic() {
        let text = "OMG THIS IS HUGE! Click here! #a #b";
        assert_eq!(
            check_compliance(text, "facebook", "social_post"),
            check_compliance(text, "facebook", "social_post")
        );
    }
}
