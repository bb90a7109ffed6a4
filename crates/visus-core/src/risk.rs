use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Categorical risk level derived from a numeric score via fixed,
/// non-overlapping threshold bands.
///
/// Variants are ordered: comparisons like `level >= RiskLevel::High`
/// follow clinical severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Human-readable label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        }
    }
}
