//! Test Report
//!
//! Compares every treatment arm of a test against its control and picks a
//! winner. An arm that cannot be compared (no visitors yet, control without
//! conversions) is reported as insufficient rather than failing the report.

use crate::config::ExperimentConfig;
use crate::experiment::error::{ExperimentError, ExperimentResult};
use crate::experiment::significance::{compute_significance, round2};
use crate::experiment::types::{AbTest, ConfidenceLevel, SignificanceResult, TestStatus, Variant};
use serde::Serialize;

/// Summary of one arm
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VariantSummary {
    pub id: String,
    pub name: String,
    pub visitors: u64,
    pub conversions: u64,
    /// Conversion rate in percent, rounded to 2 decimals
    pub conversion_rate: Option<f64>,
    pub revenue: f64,
    /// Revenue per visitor, rounded to 2 decimals
    pub revenue_per_visitor: Option<f64>,
}

impl From<&Variant> for VariantSummary {
    fn from(v: &Variant) -> Self {
        Self {
            id: v.id.clone(),
            name: v.name.clone(),
            visitors: v.visitors,
            conversions: v.conversions,
            conversion_rate: v.conversion_rate().map(|r| round2(r * 100.0)),
            revenue: v.revenue,
            revenue_per_visitor: v.revenue_per_visitor().map(round2),
        }
    }
}

/// Result of comparing one treatment against the control
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    Computed(SignificanceResult),
    Insufficient { reason: String },
}

/// One treatment-vs-control comparison
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VariantComparison {
    pub variant_id: String,
    pub variant_name: String,
    /// Either arm is below the configured minimum sample size
    pub underpowered: bool,
    #[serde(flatten)]
    pub outcome: ComparisonOutcome,
}

impl VariantComparison {
    pub fn result(&self) -> Option<&SignificanceResult> {
        match &self.outcome {
            ComparisonOutcome::Computed(r) => Some(r),
            ComparisonOutcome::Insufficient { .. } => None,
        }
    }
}

/// Full analysis of an A/B test
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TestReport {
    pub test_id: u64,
    pub test_name: String,
    pub status: TestStatus,
    pub total_visitors: u64,
    pub control: VariantSummary,
    pub variants: Vec<VariantSummary>,
    /// Sorted by lift, highest first; insufficient comparisons last
    pub comparisons: Vec<VariantComparison>,
    /// Id of the winning treatment, if any reached the required confidence
    pub winner: Option<String>,
    pub recommendation: String,
}

/// Analyze every treatment of `test` against its control
pub fn analyze_test(test: &AbTest, config: &ExperimentConfig) -> ExperimentResult<TestReport> {
    let control = test.control()?;
    let treatments = test.treatments();

    if treatments.is_empty() {
        return Err(ExperimentError::NoTreatment {
            test: test.name.clone(),
        });
    }

    let required = config.required_confidence();

    let mut comparisons: Vec<VariantComparison> = treatments
        .iter()
        .map(|treatment| {
            let underpowered = control.visitors < config.min_visitors_per_variant
                || treatment.visitors < config.min_visitors_per_variant;

            let outcome = match compute_significance(control, treatment) {
                Ok(result) => ComparisonOutcome::Computed(result),
                Err(e) => {
                    tracing::debug!(
                        test = %test.name,
                        variant = %treatment.id,
                        error = %e,
                        "Comparison skipped"
                    );
                    ComparisonOutcome::Insufficient {
                        reason: e.to_string(),
                    }
                }
            };

            VariantComparison {
                variant_id: treatment.id.clone(),
                variant_name: treatment.name.clone(),
                underpowered,
                outcome,
            }
        })
        .collect();

    // Highest lift first, insufficient comparisons last
    comparisons.sort_by(|a, b| match (a.result(), b.result()) {
        (Some(ra), Some(rb)) => rb
            .lift
            .partial_cmp(&ra.lift)
            .unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let winner = comparisons
        .iter()
        .find(|c| {
            c.result()
                .map(|r| r.significance >= required && r.lift > 0.0)
                .unwrap_or(false)
        })
        .map(|c| c.variant_id.clone());

    let recommendation = recommend(&comparisons, winner.as_deref(), required);

    tracing::debug!(
        test = %test.name,
        comparisons = comparisons.len(),
        winner = ?winner,
        "Analyzed test"
    );

    Ok(TestReport {
        test_id: test.id,
        test_name: test.name.clone(),
        status: test.status,
        total_visitors: test.total_visitors(),
        control: VariantSummary::from(control),
        variants: treatments.iter().map(VariantSummary::from).collect(),
        comparisons,
        winner,
        recommendation,
    })
}

/// Human-readable next step
fn recommend(
    comparisons: &[VariantComparison],
    winner: Option<&str>,
    required: ConfidenceLevel,
) -> String {
    if let Some(id) = winner {
        if let Some(r) = comparisons
            .iter()
            .find(|c| c.variant_id == id)
            .and_then(|c| c.result())
        {
            return format!(
                "Roll out {}: {:+.2}% lift at {} confidence.",
                id, r.lift, r.significance
            );
        }
    }

    let losing = comparisons.iter().any(|c| {
        c.result()
            .map(|r| r.significance >= required && r.lift < 0.0)
            .unwrap_or(false)
    });
    if losing && comparisons.iter().all(|c| c.result().map(|r| r.lift < 0.0).unwrap_or(true)) {
        return "Keep the control: treatments perform significantly worse.".to_string();
    }

    if comparisons.iter().all(|c| c.result().is_none()) {
        return "Not enough data yet: collect visitors and conversions on every arm.".to_string();
    }

    if comparisons.iter().any(|c| c.underpowered) {
        return format!(
            "Keep running: sample sizes are too small to reach {} confidence.",
            required
        );
    }

    format!("Keep running: no variant has reached {} confidence yet.", required)
}
