use serde::{Deserialize, Serialize};
use ts_rs::TS;
use visus_core::bands::{self, FloorBand};

use crate::error::AssessmentError;

/// Snellen reference distance, feet. 20/x notation everywhere.
pub const REFERENCE_DISTANCE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AcuityCategory {
    Normal,
    MildImpairment,
    ModerateImpairment,
    SevereImpairment,
    Blindness,
}

/// Closed-open decimal-acuity intervals, descending; first match wins.
const CATEGORY_BANDS: &[FloorBand<AcuityCategory>] = &[
    FloorBand { floor: 0.8, outcome: AcuityCategory::Normal },
    FloorBand { floor: 0.3, outcome: AcuityCategory::MildImpairment },
    FloorBand { floor: 0.1, outcome: AcuityCategory::ModerateImpairment },
    FloorBand { floor: 0.05, outcome: AcuityCategory::SevereImpairment },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcuityResult {
    pub decimal: f64,
    pub snellen: String,
    pub log_mar: f64,
    pub category: AcuityCategory,
}

/// Convert the denominator of the smallest correctly read Snellen line
/// (20/40 → 40) into decimal and LogMAR form with an impairment category.
pub fn assess(denominator: f64) -> Result<AcuityResult, AssessmentError> {
    if denominator <= 0.0 {
        return Err(AssessmentError::InvalidDenominator(denominator));
    }

    let decimal = REFERENCE_DISTANCE / denominator;
    let log_mar = (denominator / REFERENCE_DISTANCE).log10();
    let category = bands::match_floor(CATEGORY_BANDS, decimal)
        .copied()
        .unwrap_or(AcuityCategory::Blindness);

    Ok(AcuityResult {
        decimal,
        snellen: format!("20/{denominator}"),
        log_mar,
        category,
    })
}
