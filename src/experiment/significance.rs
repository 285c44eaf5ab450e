//! Significance Engine
//!
//! Two-proportion z-test between a control and a treatment variant.
//! The pooled conversion rate estimates the standard error under the null
//! hypothesis of no difference; the resulting z-score is mapped onto the
//! fixed 95% / 90% critical values.

use crate::experiment::error::{ExperimentError, ExperimentResult};
use crate::experiment::types::{ConfidenceLevel, SignificanceResult, Variant};

/// Compare treatment `b` against control `a`
///
/// Returns the relative lift of `b` over `a` (percent, 2 decimals) and the
/// discrete confidence level. Fails instead of producing NaN or infinity when
/// either arm has no visitors, when the control never converted, or when the
/// pooled rate is 0 or 1.
pub fn compute_significance(a: &Variant, b: &Variant) -> ExperimentResult<SignificanceResult> {
    a.validate()?;
    b.validate()?;

    let rate_a = rate(a)?;
    let rate_b = rate(b)?;

    if rate_a == 0.0 {
        return Err(ExperimentError::ZeroBaselineRate {
            variant: a.id.clone(),
        });
    }

    let lift = (rate_b - rate_a) / rate_a * 100.0;

    let pooled = pooled_rate(a, b);
    let se = standard_error(pooled, a.visitors, b.visitors);
    if se == 0.0 {
        return Err(ExperimentError::DegenerateVariance { pooled_rate: pooled });
    }

    let z = (rate_b - rate_a).abs() / se;
    let significance = ConfidenceLevel::from_z_score(z);

    tracing::debug!(
        control = %a.id,
        treatment = %b.id,
        rate_a,
        rate_b,
        z,
        %significance,
        "Computed significance"
    );

    Ok(SignificanceResult {
        lift: round2(lift),
        significance,
        z_score: z,
        control_rate: rate_a,
        treatment_rate: rate_b,
    })
}

/// Conversion rate, rejecting arms with no visitors
fn rate(variant: &Variant) -> ExperimentResult<f64> {
    variant
        .conversion_rate()
        .ok_or_else(|| ExperimentError::ZeroVisitors {
            variant: variant.id.clone(),
        })
}

/// Combined conversion rate across both arms
///
/// Sums are taken in `f64` so counters near `u64::MAX` cannot overflow.
pub fn pooled_rate(a: &Variant, b: &Variant) -> f64 {
    let visitors = a.visitors as f64 + b.visitors as f64;
    if visitors == 0.0 {
        return 0.0;
    }
    (a.conversions as f64 + b.conversions as f64) / visitors
}

/// Standard error of the rate difference under the pooled rate
pub fn standard_error(pooled: f64, visitors_a: u64, visitors_b: u64) -> f64 {
    (pooled * (1.0 - pooled) * (1.0 / visitors_a as f64 + 1.0 / visitors_b as f64)).sqrt()
}

/// Round to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
