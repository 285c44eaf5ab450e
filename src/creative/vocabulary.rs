//! Brief keyword extraction
//!
//! Picks coarse substitution tokens out of a free-text brief by plain,
//! case-sensitive substring search against fixed vocabularies. The first
//! vocabulary entry found in the brief wins.

/// `(needle, phrase)` pairs for the `{topic}` placeholder
const TOPICS: &[(&str, &str)] = &[
    ("AI", "artificial intelligence"),
    ("marketing", "digital marketing"),
    ("ecommerce", "online retail"),
    ("finance", "financial services"),
    ("health", "healthcare"),
    ("security", "cybersecurity"),
];

/// `(needle, phrase)` pairs for the `{service}` placeholder
const SERVICES: &[(&str, &str)] = &[
    ("platform", "platform"),
    ("app", "app"),
    ("software", "software"),
    ("service", "services"),
    ("product", "products"),
    ("tool", "tool"),
];

/// `(needle, phrase)` pairs for the `{audience}` placeholder
const AUDIENCES: &[(&str, &str)] = &[
    ("small", "growing companies"),
    ("startup", "startups"),
    ("enterprise", "enterprise teams"),
    ("premium", "discerning professionals"),
];

const DEFAULT_TOPIC: &str = "business solutions";
const DEFAULT_SERVICE: &str = "solution";
const DEFAULT_AUDIENCE: &str = "industry leaders";

/// Tokens substituted into templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefTokens {
    pub topic: &'static str,
    pub service: &'static str,
    pub audience: &'static str,
}

impl BriefTokens {
    /// Extract tokens from a brief
    pub fn extract(brief: &str) -> Self {
        Self {
            topic: lookup(brief, TOPICS, DEFAULT_TOPIC),
            service: lookup(brief, SERVICES, DEFAULT_SERVICE),
            audience: lookup(brief, AUDIENCES, DEFAULT_AUDIENCE),
        }
    }

    /// Fill `{topic}`, `{service}` and `{audience}` in a template
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{topic}", self.topic)
            .replace("{service}", self.service)
            .replace("{audience}", self.audience)
    }
}

fn lookup(brief: &str, vocabulary: &[(&str, &'static str)], default: &'static str) -> &'static str {
    vocabulary
        .iter()
        .find(|(needle, _)| brief.contains(needle))
        .map(|(_, phrase)| *phrase)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tokens = BriefTokens::extract("");
        assert_eq!(tokens.topic, DEFAULT_TOPIC);
        assert_eq!(tokens.service, DEFAULT_SERVICE);
        assert_eq!(tokens.audience, DEFAULT_AUDIENCE);
    }

    #[test]
    fn test_extract_matches_vocabulary() {
        let tokens = BriefTokens::extract("Launch our AI platform for small agencies");
        assert_eq!(tokens.topic, "artificial intelligence");
        assert_eq!(tokens.service, "platform");
        assert_eq!(tokens.audience, "growing companies");
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let tokens = BriefTokens::extract("Promote our Marketing Product");
        assert_eq!(tokens.topic, DEFAULT_TOPIC);
        assert_eq!(tokens.service, DEFAULT_SERVICE);
    }

    #[test]
    fn test_first_vocabulary_entry_wins() {
        // "platform" precedes "product" in the service vocabulary
        let tokens = BriefTokens::extract("product launch on the new platform");
        assert_eq!(tokens.service, "platform");
    }

    #[test]
    fn test_render() {
        let tokens = BriefTokens::extract("enterprise security tool");
        let text = tokens.render("Our {service} brings {topic} to {audience}.");
        assert_eq!(text, "Our tool brings cybersecurity to enterprise teams.");
    }
}
