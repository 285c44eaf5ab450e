//! Illustrative metric sampling
//!
//! Draws plausible-looking placeholder figures for generated variations from
//! an injected random source. Ranges are in percent.

use crate::creative::types::{ContentType, IllustrativeMetrics};
use rand::Rng;

const CTR: (f64, f64) = (2.0, 7.0);
const ENGAGEMENT: (f64, f64) = (5.0, 25.0);
const OPEN_RATE: (f64, f64) = (15.0, 35.0);
const CONVERSION: (f64, f64) = (1.0, 5.0);
const BOUNCE: (f64, f64) = (30.0, 60.0);

/// Sample metrics suited to `content_type`; unknown types get a CTR only
pub fn sample_metrics<R: Rng + ?Sized>(
    content_type: Option<ContentType>,
    rng: &mut R,
) -> IllustrativeMetrics {
    let mut metrics = IllustrativeMetrics {
        illustrative: true,
        ..Default::default()
    };

    match content_type {
        Some(ContentType::AdCopy) => {
            metrics.ctr = Some(sample(rng, CTR));
            metrics.conversion_rate = Some(sample(rng, CONVERSION));
        }
        Some(ContentType::SocialPost) | Some(ContentType::BlogPost) => {
            metrics.engagement_rate = Some(sample(rng, ENGAGEMENT));
        }
        Some(ContentType::Email) => {
            metrics.open_rate = Some(sample(rng, OPEN_RATE));
            metrics.ctr = Some(sample(rng, CTR));
        }
        Some(ContentType::LandingPage) => {
            metrics.conversion_rate = Some(sample(rng, CONVERSION));
            metrics.bounce_rate = Some(sample(rng, BOUNCE));
        }
        Some(ContentType::BannerAd) | None => {
            metrics.ctr = Some(sample(rng, CTR));
        }
    }

    metrics
}

/// Uniform sample in `[lo, hi]`, rounded to one decimal
fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    let value = rng.gen_range(lo..=hi);
    ((value * 10.0).round() / 10.0).clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_range(value: Option<f64>, (lo, hi): (f64, f64)) -> bool {
        value.map(|v| v >= lo && v <= hi).unwrap_or(false)
    }

    #[test]
    fn test_ranges_per_type() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let ad = sample_metrics(Some(ContentType::AdCopy), &mut rng);
            assert!(ad.illustrative);
            assert!(in_range(ad.ctr, CTR));
            assert!(in_range(ad.conversion_rate, CONVERSION));
            assert!(ad.engagement_rate.is_none());

            let social = sample_metrics(Some(ContentType::SocialPost), &mut rng);
            assert!(in_range(social.engagement_rate, ENGAGEMENT));

            let email = sample_metrics(Some(ContentType::Email), &mut rng);
            assert!(in_range(email.open_rate, OPEN_RATE));

            let landing = sample_metrics(Some(ContentType::LandingPage), &mut rng);
            assert!(in_range(landing.bounce_rate, BOUNCE));

            let unknown = sample_metrics(None, &mut rng);
            assert!(in_range(unknown.ctr, CTR));
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = sample_metrics(Some(ContentType::Email), &mut StdRng::seed_from_u64(42));
        let b = sample_metrics(Some(ContentType::Email), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
