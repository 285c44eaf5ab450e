//! Core data types for A/B tests
//!
//! - `Variant`: one arm of a test with its visitor/conversion/revenue counters
//! - `AbTest`: a named test whose first variant is always the control
//! - `ConfidenceLevel` and `SignificanceResult`: output of the significance engine

use crate::experiment::error::{ExperimentError, ExperimentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier given to the control variant of every new test
pub const CONTROL_ID: &str = "control";

/// One arm of an A/B test
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Stable identifier ("control", "variant_1", ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description of what changed
    #[serde(default)]
    pub description: Option<String>,
    /// Unique visitors exposed to this arm
    #[serde(default)]
    pub visitors: u64,
    /// Visitors that converted
    #[serde(default)]
    pub conversions: u64,
    /// Revenue attributed to this arm
    #[serde(default)]
    pub revenue: f64,
    /// Share of traffic routed here, in percent
    #[serde(default)]
    pub traffic_split: f64,
}

impl Variant {
    /// Create a variant with zeroed counters
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            visitors: 0,
            conversions: 0,
            revenue: 0.0,
            traffic_split: 0.0,
        }
    }

    /// Builder method: set visitor and conversion counters
    pub fn counts(mut self, visitors: u64, conversions: u64) -> Self {
        self.visitors = visitors;
        self.conversions = conversions;
        self
    }

    /// Builder method: set revenue
    pub fn revenue(mut self, revenue: f64) -> Self {
        self.revenue = revenue;
        self
    }

    /// Builder method: set traffic split percentage
    pub fn traffic_split(mut self, percent: f64) -> Self {
        self.traffic_split = percent;
        self
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Conversion rate as a fraction, `None` when nobody visited
    pub fn conversion_rate(&self) -> Option<f64> {
        if self.visitors == 0 {
            None
        } else {
            Some(self.conversions as f64 / self.visitors as f64)
        }
    }

    /// Revenue per visitor, `None` when nobody visited
    pub fn revenue_per_visitor(&self) -> Option<f64> {
        if self.visitors == 0 {
            None
        } else {
            Some(self.revenue / self.visitors as f64)
        }
    }

    /// Check counter invariants
    pub fn validate(&self) -> ExperimentResult<()> {
        if self.conversions > self.visitors {
            return Err(ExperimentError::InvalidVariant {
                variant: self.id.clone(),
                reason: format!(
                    "{} conversions exceed {} visitors",
                    self.conversions, self.visitors
                ),
            });
        }
        if self.revenue.is_nan() || self.revenue < 0.0 {
            return Err(ExperimentError::InvalidVariant {
                variant: self.id.clone(),
                reason: format!("revenue must be non-negative, got {}", self.revenue),
            });
        }
        if !(0.0..=100.0).contains(&self.traffic_split) {
            return Err(ExperimentError::InvalidTrafficSplit(format!(
                "variant '{}' has split {}%",
                self.id, self.traffic_split
            )));
        }
        Ok(())
    }
}

/// Lifecycle of a test
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    #[default]
    Draft,
    Running,
    Paused,
    Completed,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Draft => write!(f, "draft"),
            TestStatus::Running => write!(f, "running"),
            TestStatus::Paused => write!(f, "paused"),
            TestStatus::Completed => write!(f, "completed"),
        }
    }
}

/// An A/B test. `variants[0]` is the control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbTest {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub hypothesis: Option<String>,
    #[serde(default)]
    pub status: TestStatus,
    pub variants: Vec<Variant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AbTest {
    /// Create a draft test seeded with its control variant
    pub fn new(id: u64, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let control = Variant::new(CONTROL_ID, "Control")
            .description("Original version")
            .traffic_split(50.0);

        Self {
            id,
            name: name.into(),
            hypothesis: None,
            status: TestStatus::Draft,
            variants: vec![control],
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder method: set hypothesis
    pub fn hypothesis(mut self, hypothesis: impl Into<String>) -> Self {
        self.hypothesis = Some(hypothesis.into());
        self
    }

    /// Register a new treatment arm with zeroed counters
    ///
    /// The id is `variant_<n>` where `n` is the variant count before insertion.
    pub fn add_variant(
        &mut self,
        name: impl Into<String>,
        traffic_split: f64,
        now: DateTime<Utc>,
    ) -> ExperimentResult<&Variant> {
        if !(0.0..=100.0).contains(&traffic_split) {
            return Err(ExperimentError::InvalidTrafficSplit(format!(
                "{}% is outside 0..=100",
                traffic_split
            )));
        }

        let id = format!("variant_{}", self.variants.len());
        self.variants
            .push(Variant::new(id, name).traffic_split(traffic_split));
        self.updated_at = now;

        Ok(&self.variants[self.variants.len() - 1])
    }

    /// The control arm
    pub fn control(&self) -> ExperimentResult<&Variant> {
        self.variants
            .first()
            .ok_or_else(|| ExperimentError::VariantNotFound(CONTROL_ID.to_string()))
    }

    /// All arms after the control
    pub fn treatments(&self) -> &[Variant] {
        self.variants.get(1..).unwrap_or(&[])
    }

    /// Look up a variant by id
    pub fn variant(&self, id: &str) -> ExperimentResult<&Variant> {
        self.variants
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| ExperimentError::VariantNotFound(id.to_string()))
    }

    /// Check that splits are in range and add up to 100%
    pub fn validate_traffic(&self) -> ExperimentResult<()> {
        for variant in &self.variants {
            variant.validate()?;
        }

        let total: f64 = self.variants.iter().map(|v| v.traffic_split).sum();
        if (total - 100.0).abs() > 0.01 {
            return Err(ExperimentError::InvalidTrafficSplit(format!(
                "splits sum to {}%, expected 100%",
                total
            )));
        }
        Ok(())
    }

    /// Total visitors across all arms, saturating at `u64::MAX`
    pub fn total_visitors(&self) -> u64 {
        self.variants
            .iter()
            .fold(0u64, |total, v| total.saturating_add(v.visitors))
    }
}

/// Discrete confidence level derived from the z-score
///
/// Serialized as the bare integer 0, 90 or 95.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ConfidenceLevel {
    NotSignificant,
    Ninety,
    NinetyFive,
}

impl ConfidenceLevel {
    /// Critical z-value for 95% confidence
    pub const Z_95: f64 = 1.96;
    /// Critical z-value for 90% confidence
    pub const Z_90: f64 = 1.645;

    /// Map a z-score onto the two-threshold lookup
    pub fn from_z_score(z: f64) -> Self {
        if z > Self::Z_95 {
            ConfidenceLevel::NinetyFive
        } else if z > Self::Z_90 {
            ConfidenceLevel::Ninety
        } else {
            ConfidenceLevel::NotSignificant
        }
    }

    /// Percentage value (0, 90 or 95)
    pub fn percent(&self) -> u8 {
        match self {
            ConfidenceLevel::NotSignificant => 0,
            ConfidenceLevel::Ninety => 90,
            ConfidenceLevel::NinetyFive => 95,
        }
    }

    pub fn is_significant(&self) -> bool {
        *self != ConfidenceLevel::NotSignificant
    }
}

impl From<ConfidenceLevel> for u8 {
    fn from(level: ConfidenceLevel) -> Self {
        level.percent()
    }
}

impl TryFrom<u8> for ConfidenceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ConfidenceLevel::NotSignificant),
            90 => Ok(ConfidenceLevel::Ninety),
            95 => Ok(ConfidenceLevel::NinetyFive),
            other => Err(format!("confidence level must be 0, 90 or 95, got {}", other)),
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Outcome of comparing a treatment against the control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SignificanceResult {
    /// Relative change in conversion rate, in percent, rounded to 2 decimals
    pub lift: f64,
    /// Discrete confidence level
    pub significance: ConfidenceLevel,
    /// Two-proportion z-score
    pub z_score: f64,
    /// Control conversion rate (fraction)
    pub control_rate: f64,
    /// Treatment conversion rate (fraction)
    pub treatment_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_new_test_has_control() {
        let test = AbTest::new(1, "Homepage hero", now());
        assert_eq!(test.status, TestStatus::Draft);
        assert_eq!(test.variants.len(), 1);

        let control = test.control().unwrap();
        assert_eq!(control.id, "control");
        assert_eq!(control.name, "Control");
        assert_eq!(control.traffic_split, 50.0);
        assert_eq!(control.visitors, 0);
        assert!(test.treatments().is_empty());
    }

    #[test]
    fn test_add_variant_ids() {
        let mut test = AbTest::new(1, "Pricing page", now());
        let later = DateTime::from_timestamp(1_700_000_100, 0).unwrap();

        let id = test.add_variant("Green button", 50.0, later).unwrap().id.clone();
        assert_eq!(id, "variant_1");
        assert_eq!(test.updated_at, later);

        test.add_variant("Red button", 0.0, later).unwrap();
        assert_eq!(test.variants[2].id, "variant_2");
        assert_eq!(test.treatments().len(), 2);
        assert!(test.variant("variant_2").is_ok());
        assert!(matches!(
            test.variant("variant_9"),
            Err(ExperimentError::VariantNotFound(_))
        ));
    }

    #[test]
    fn test_add_variant_rejects_bad_split() {
        let mut test = AbTest::new(1, "Checkout", now());
        let result = test.add_variant("Too much", 120.0, now());
        assert!(matches!(result, Err(ExperimentError::InvalidTrafficSplit(_))));
        assert_eq!(test.variants.len(), 1);
    }

    #[test]
    fn test_validate_traffic() {
        let mut test = AbTest::new(1, "Checkout", now());
        test.add_variant("B", 50.0, now()).unwrap();
        assert!(test.validate_traffic().is_ok());

        test.add_variant("C", 10.0, now()).unwrap();
        assert!(matches!(
            test.validate_traffic(),
            Err(ExperimentError::InvalidTrafficSplit(_))
        ));
    }

    #[test]
    fn test_variant_validation() {
        let bad = Variant::new("b", "B").counts(10, 11);
        assert!(matches!(bad.validate(), Err(ExperimentError::InvalidVariant { .. })));

        let negative = Variant::new("b", "B").counts(10, 1).revenue(-5.0);
        assert!(negative.validate().is_err());

        let ok = Variant::new("b", "B").counts(10, 1).revenue(25.0);
        assert!(ok.validate().is_ok());
        assert_eq!(ok.conversion_rate(), Some(0.1));
        assert_eq!(ok.revenue_per_visitor(), Some(2.5));
        assert_eq!(Variant::new("e", "E").conversion_rate(), None);
    }

    #[test]
    fn test_confidence_level_mapping() {
        assert_eq!(ConfidenceLevel::from_z_score(2.5), ConfidenceLevel::NinetyFive);
        assert_eq!(ConfidenceLevel::from_z_score(1.96), ConfidenceLevel::Ninety);
        assert_eq!(ConfidenceLevel::from_z_score(1.7), ConfidenceLevel::Ninety);
        assert_eq!(ConfidenceLevel::from_z_score(1.645), ConfidenceLevel::NotSignificant);
        assert_eq!(ConfidenceLevel::from_z_score(0.0), ConfidenceLevel::NotSignificant);
    }

    #[test]
    fn test_confidence_level_serializes_as_integer() {
        let json = serde_json::to_string(&ConfidenceLevel::NinetyFive).unwrap();
        assert_eq!(json, "95");

        let level: ConfidenceLevel = serde_json::from_str("90").unwrap();
        assert_eq!(level, ConfidenceLevel::Ninety);

        assert!(serde_json::from_str::<ConfidenceLevel>("80").is_err());
    }

    #[test]
    fn test_total_visitors_saturates() {
        let mut test = AbTest::new(1, "Big", now());
        test.add_variant("Treatment", 50.0, now()).unwrap();
        test.variants[0].visitors = u64::MAX;
        test.variants[1].visitors = 10;
        assert_eq!(test.total_visitors(), u64::MAX);
    }

    #[test]
    fn test_ab_test_deserializes_with_defaults() {
        let json = r#"{
            "id": 7,
            "name": "Email subject",
            "variants": [
                {"id": "control", "name": "Control", "visitors": 1000, "conversions": 50},
                {"id": "variant_1", "name": "Emoji", "visitors": 1000, "conversions": 80}
            ],
            "created_at": "2024-01-15T00:00:00Z",
            "updated_at": "2024-01-15T00:00:00Z"
        }"#;

        let test: AbTest = serde_json::from_str(json).unwrap();
        assert_eq!(test.status, TestStatus::Draft);
        assert_eq!(test.total_visitors(), 2000);
        assert_eq!(test.variants[1].revenue, 0.0);
    }
}
