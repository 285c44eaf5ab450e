//! Content Generator
//!
//! Produces placeholder marketing copy from template tables. Randomness,
//! record ids and timestamps all come from injected sources so that output is
//! reproducible under test.

use crate::config::Config;
use crate::creative::compliance::ComplianceChecker;
use crate::creative::error::{CreativeError, CreativeResult};
use crate::creative::ids::{Clock, IdGenerator, SequenceIds, SystemClock};
use crate::creative::metrics::sample_metrics;
use crate::creative::templates::{
    content_templates, creative_template, image_count, image_descriptions, GENERIC_TEMPLATES,
};
use crate::creative::types::{
    ContentDraft, ContentType, CreativeAsset, CreativeRequest, DraftStatus, Platform, Tone,
    Variation,
};
use crate::creative::vocabulary::BriefTokens;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound on variations per request
pub const MAX_VARIATIONS: usize = 3;

/// Image style used when a creative request names none
pub const DEFAULT_IMAGE_STYLE: &str = "modern";

/// Generate up to three variations of copy for `brief`
///
/// Unknown content types or tones, and pairs without their own templates,
/// fall back to generic templates; at least one variation is always returned
/// for a non-empty `content_type`.
pub fn generate_variations<R: Rng + ?Sized>(
    brief: &str,
    content_type: &str,
    tone: &str,
    rng: &mut R,
) -> CreativeResult<Vec<Variation>> {
    variations_with_limit(brief, content_type, tone, MAX_VARIATIONS, rng)
}

fn variations_with_limit<R: Rng + ?Sized>(
    brief: &str,
    content_type: &str,
    tone: &str,
    limit: usize,
    rng: &mut R,
) -> CreativeResult<Vec<Variation>> {
    if content_type.trim().is_empty() {
        return Err(CreativeError::EmptyContentType);
    }

    let parsed_type = ContentType::parse(content_type);
    let parsed_tone = Tone::parse(tone);

    let templates = match (parsed_type, parsed_tone) {
        (Some(ct), Some(t)) => content_templates(ct, t),
        _ => None,
    }
    .unwrap_or_else(|| {
        tracing::debug!(content_type, tone, "No templates for pair, using generic copy");
        GENERIC_TEMPLATES
    });

    let tokens = BriefTokens::extract(brief);
    let limit = limit.clamp(1, MAX_VARIATIONS);

    Ok(templates
        .iter()
        .take(limit)
        .map(|template| Variation {
            content: tokens.render(template),
            metrics: sample_metrics(parsed_type, rng),
        })
        .collect())
}

/// Stateful generator holding its random, id and time sources
pub struct ContentGenerator<R: Rng, I: IdGenerator = SequenceIds, C: Clock = SystemClock> {
    rng: R,
    ids: I,
    clock: C,
    max_variations: usize,
    image_style: String,
    checker: ComplianceChecker,
}

impl ContentGenerator<StdRng> {
    /// Build a generator from configuration
    ///
    /// Uses a seeded RNG when `generator.seed` is set, entropy otherwise.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        ContentGenerator::new(rng, SequenceIds::new(), SystemClock)
            .with_max_variations(config.generator.max_variations)
            .with_image_style(config.generator.image_style.clone())
            .with_compliance(ComplianceChecker::new(config.compliance.clone()))
    }
}

impl<R: Rng, I: IdGenerator, C: Clock> ContentGenerator<R, I, C> {
    pub fn new(rng: R, ids: I, clock: C) -> Self {
        Self {
            rng,
            ids,
            clock,
            max_variations: MAX_VARIATIONS,
            image_style: DEFAULT_IMAGE_STYLE.to_string(),
            checker: ComplianceChecker::default(),
        }
    }

    /// Builder method: cap variations per request (clamped to 1..=3)
    pub fn with_max_variations(mut self, max: usize) -> Self {
        self.max_variations = max.clamp(1, MAX_VARIATIONS);
        self
    }

    /// Builder method: default image style for creatives
    pub fn with_image_style(mut self, style: impl Into<String>) -> Self {
        self.image_style = style.into();
        self
    }

    /// Builder method: compliance rules applied to creatives
    pub fn with_compliance(mut self, checker: ComplianceChecker) -> Self {
        self.checker = checker;
        self
    }

    /// Generate variations with this generator's limits and RNG
    pub fn variations(
        &mut self,
        brief: &str,
        content_type: &str,
        tone: &str,
    ) -> CreativeResult<Vec<Variation>> {
        variations_with_limit(brief, content_type, tone, self.max_variations, &mut self.rng)
    }

    /// Generate variations and wrap them in a new draft
    pub fn generate_draft(
        &mut self,
        brief: &str,
        content_type: &str,
        tone: &str,
    ) -> CreativeResult<ContentDraft> {
        let variations = self.variations(brief, content_type, tone)?;
        let id = self.ids.next_id();

        tracing::info!(
            id,
            content_type,
            tone,
            variations = variations.len(),
            "Generated content draft"
        );

        Ok(ContentDraft {
            id,
            brief: brief.to_string(),
            content_type: content_type.to_string(),
            tone: tone.to_string(),
            variations,
            selected_version: 0,
            status: DraftStatus::Draft,
            created_at: self.clock.now(),
        })
    }

    /// Generate a creative: copy, mock imagery and a compliance verdict
    ///
    /// Copy is looked up by `(type, platform, tone)`, then by
    /// `(type, facebook, tone)`, then falls back to professional Facebook ad
    /// copy.
    pub fn generate_creative(&mut self, request: &CreativeRequest) -> CreativeResult<CreativeAsset> {
        if request.brief.trim().is_empty() {
            return Err(CreativeError::EmptyBrief);
        }
        if request.content_type.trim().is_empty() {
            return Err(CreativeError::EmptyContentType);
        }

        let content_type = ContentType::parse(&request.content_type);
        let platform = Platform::parse(&request.platform);
        let tone = Tone::parse(&request.tone);

        let template = match (content_type, tone) {
            (Some(ct), Some(t)) => platform
                .and_then(|p| creative_template(ct, p, t))
                .or_else(|| creative_template(ct, Platform::Facebook, t)),
            _ => None,
        }
        .or_else(|| {
            creative_template(ContentType::AdCopy, Platform::Facebook, Tone::Professional)
        })
        .unwrap_or(GENERIC_TEMPLATES[0]);

        let content = BriefTokens::extract(&request.brief).render(template);

        let style = request
            .image_style
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(self.image_style.as_str());
        let image_urls = (1..=image_count(content_type))
            .map(|i| format!("/mock-image-{}-{}.jpg", style, i))
            .collect();
        let image_descriptions = image_descriptions(content_type)
            .iter()
            .map(|d| d.to_string())
            .collect();

        let compliance = self
            .checker
            .check(&content, &request.platform, &request.content_type);
        let id = self.ids.next_id();

        tracing::info!(
            id,
            content_type = %request.content_type,
            platform = %request.platform,
            compliance = %compliance.status,
            "Generated creative"
        );

        Ok(CreativeAsset {
            id,
            content,
            image_urls,
            image_descriptions,
            compliance_status: compliance.status,
            compliance_issues: compliance.issues,
            created_at: self.clock.now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creative::ids::FixedClock;
    use crate::creative::types::ComplianceStatus;
    use chrono::{DateTime, Utc};

    fn instant() -> DateTime<Utc> {
        DateTime::from_timestamp(1_705_315_800, 0).unwrap()
    }

    fn generator() -> ContentGenerator<StdRng, SequenceIds, FixedClock> {
        ContentGenerator::new(
            StdRng::seed_from_u64(1),
            SequenceIds::new(),
            FixedClock(instant()),
        )
    }

    fn request(content_type: &str, platform: &str, tone: &str) -> CreativeRequest {
        CreativeRequest {
            brief: "Launch our AI platform for small agencies".to_string(),
            content_type: content_type.to_string(),
            platform: platform.to_string(),
            tone: tone.to_string(),
            image_style: None,
        }
    }

    #[test]
    fn test_known_pair_uses_its_templates() {
        let mut rng = StdRng::seed_from_u64(3);
        let variations =
            generate_variations("New AI platform", "ad_copy", "professional", &mut rng).unwrap();

        assert_eq!(variations.len(), 3);
        assert_eq!(
            variations[0].content,
            "Discover the power of our platform. Transform your business with proven results and expert support. Get started today with a free consultation."
        );
        assert!(variations.iter().all(|v| v.metrics.illustrative));
        assert!(variations.iter().all(|v| v.metrics.ctr.is_some()));
    }

    #[test]
    fn test_unknown_pair_falls_back() {
        let mut rng = StdRng::seed_from_u64(3);

        let unknown_tone = generate_variations("brief", "ad_copy", "sarcastic", &mut rng).unwrap();
        assert_eq!(unknown_tone.len(), GENERIC_TEMPLATES.len());

        let unknown_type = generate_variations("brief", "podcast", "casual", &mut rng).unwrap();
        assert!(!unknown_type.is_empty());
        assert!(unknown_type[0].content.starts_with("Introducing our solution"));

        let unlisted = generate_variations("brief", "banner_ad", "humorous", &mut rng).unwrap();
        assert!(!unlisted.is_empty());
    }

    #[test]
    fn test_empty_type_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_variations("brief", "  ", "casual", &mut rng),
            Err(CreativeError::EmptyContentType)
        );
    }

    #[test]
    fn test_single_template_pair() {
        let mut rng = StdRng::seed_from_u64(3);
        let variations = generate_variations("brief", "banner_ad", "urgent", &mut rng).unwrap();
        assert_eq!(variations.len(), 1);
    }

    #[test]
    fn test_max_variations_limit() {
        let mut gen = generator().with_max_variations(1);
        assert_eq!(gen.variations("b", "ad_copy", "casual").unwrap().len(), 1);

        let mut gen = generator().with_max_variations(0);
        assert_eq!(gen.variations("b", "ad_copy", "casual").unwrap().len(), 1);

        let mut gen = generator().with_max_variations(10);
        assert_eq!(gen.variations("b", "ad_copy", "casual").unwrap().len(), 3);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generator().variations("brief", "email", "professional").unwrap();
        let b = generator().variations("brief", "email", "professional").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_draft() {
        let mut gen = generator();

        let first = gen.generate_draft("small app", "social_post", "casual").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.selected_version, 0);
        assert_eq!(first.status, DraftStatus::Draft);
        assert!(serde_json::to_string(&first).unwrap().contains("\"status\":\"draft\""));
        assert_eq!(first.created_at, instant());
        assert_eq!(first.variations.len(), 2);
        assert!(first.variations[0].metrics.engagement_rate.is_some());

        let second = gen.generate_draft("small app", "social_post", "casual").unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_creative_exact_match() {
        let mut gen = generator();
        let asset = gen.generate_creative(&request("ad_copy", "facebook", "luxury")).unwrap();

        assert!(asset.content.starts_with("Discover the pinnacle of artificial intelligence."));
        assert_eq!(asset.image_urls.len(), 4);
        assert_eq!(asset.image_urls[0], "/mock-image-modern-1.jpg");
        assert_eq!(asset.image_descriptions.len(), 4);
        assert_eq!(asset.compliance_status, ComplianceStatus::Approved);
        assert_eq!(asset.id, 1);
        assert_eq!(asset.created_at, instant());
    }

    #[test]
    fn test_creative_platform_fallback() {
        let mut gen = generator();
        // No LinkedIn template: falls back to the Facebook copy for the same tone
        let asset = gen.generate_creative(&request("ad_copy", "linkedin", "casual")).unwrap();
        assert!(asset.content.starts_with("Hey there!"));
    }

    #[test]
    fn test_creative_default_fallback() {
        let mut gen = generator();
        let asset = gen.generate_creative(&request("podcast", "myspace", "sarcastic")).unwrap();
        assert!(asset.content.starts_with("Transform your business"));
    }

    #[test]
    fn test_creative_email_needs_unsubscribe() {
        let mut gen = generator();
        let asset = gen.generate_creative(&request("email", "email", "professional")).unwrap();

        assert_eq!(asset.compliance_status, ComplianceStatus::Rejected);
        assert_eq!(asset.compliance_issues[0].kind, "CAN-SPAM Compliance");
        assert_eq!(asset.image_descriptions.len(), 3);
    }

    #[test]
    fn test_creative_images_and_style() {
        let mut gen = generator().with_image_style("flat");

        let social = gen.generate_creative(&request("social_post", "instagram", "casual")).unwrap();
        assert_eq!(social.image_urls, vec!["/mock-image-flat-1.jpg", "/mock-image-flat-2.jpg"]);

        let mut banner = request("banner_ad", "google_ads", "professional");
        banner.image_style = Some("retro".to_string());
        let asset = gen.generate_creative(&banner).unwrap();
        assert_eq!(asset.image_urls.len(), 3);
        assert_eq!(asset.image_urls[2], "/mock-image-retro-3.jpg");
    }

    #[test]
    fn test_creative_requires_brief() {
        let mut gen = generator();
        let mut req = request("ad_copy", "facebook", "casual");
        req.brief = String::new();
        assert_eq!(gen.generate_creative(&req), Err(CreativeError::EmptyBrief));
    }
}
