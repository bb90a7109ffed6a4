use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use visus_core::RiskLevel;
use visus_core::bands::{self, CeilingBand, PointBand};

use super::accumulate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiabetesType {
    Type1,
    Type2,
}

fn default_diabetes_type() -> DiabetesType {
    DiabetesType::Type2
}

fn default_age() -> f64 {
    50.0
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RetinopathyRiskInput {
    pub duration_years: f64,
    pub hba1c_percent: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub total_cholesterol: f64,
    pub smoker: bool,
    #[serde(default = "default_diabetes_type")]
    pub diabetes_type: DiabetesType,
    #[serde(default = "default_age")]
    pub age_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RetinopathyRiskAssessment {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Estimated annual incidence of retinopathy onset/progression, %.
    pub annual_risk_percent: f64,
    pub recommendations: Vec<String>,
    pub screening_interval_months: u32,
}

const DURATION_POINTS: &[PointBand] = &[
    PointBand { floor: 20.0, points: 10.0, advice: None },
    PointBand { floor: 15.0, points: 7.0, advice: None },
    PointBand { floor: 10.0, points: 5.0, advice: None },
    PointBand { floor: 5.0, points: 3.0, advice: None },
    PointBand { floor: 0.0, points: 1.0, advice: None },
];

const HBA1C_POINTS: &[PointBand] = &[
    PointBand {
        floor: 9.5,
        points: 10.0,
        advice: Some("Critical glycemic control gap; intensive therapy adjustment needed"),
    },
    PointBand {
        floor: 8.5,
        points: 7.0,
        advice: Some("Poor glycemic control; review therapy with the diabetes team"),
    },
    PointBand {
        floor: 7.5,
        points: 5.0,
        advice: Some("Suboptimal glycemic control; reinforce diet and medication adherence"),
    },
    PointBand {
        floor: 6.5,
        points: 3.0,
        advice: Some("Near-target HbA1c; continue current regimen with minor adjustments"),
    },
    PointBand {
        floor: 0.0,
        points: 1.0,
        advice: Some("Excellent glycemic control; maintain current regimen"),
    },
];

/// Banded on mean arterial pressure, (systolic + 2×diastolic) / 3.
const MEAN_BP_POINTS: &[PointBand] = &[
    PointBand {
        floor: 120.0,
        points: 6.0,
        advice: Some("Severely elevated blood pressure; urgent antihypertensive review"),
    },
    PointBand {
        floor: 110.0,
        points: 5.0,
        advice: Some("Elevated blood pressure; intensify antihypertensive therapy"),
    },
    PointBand { floor: 100.0, points: 3.0, advice: None },
    PointBand { floor: 0.0, points: 1.0, advice: None },
];

const CHOLESTEROL_POINTS: &[PointBand] = &[
    PointBand { floor: 240.0, points: 4.0, advice: None },
    PointBand { floor: 200.0, points: 2.0, advice: None },
    PointBand { floor: 0.0, points: 1.0, advice: None },
];

/// Total-score bands, ascending ceilings.
const RISK_LEVEL_BANDS: &[CeilingBand<RiskLevel>] = &[
    CeilingBand { ceiling: 8.0, outcome: RiskLevel::Low },
    CeilingBand { ceiling: 15.0, outcome: RiskLevel::Moderate },
    CeilingBand { ceiling: 22.0, outcome: RiskLevel::High },
];

const GENERAL_ADVICE: [&str; 3] = [
    "Annual comprehensive dilated eye examination",
    "Report any sudden vision changes immediately",
    "Coordinate care between ophthalmology and diabetes teams",
];

/// Multi-factor weighted retinopathy risk. Every factor contributes the
/// points of its first matching band; the summed total is then banded once
/// into a risk level (cumulative scoring, not first-match classification).
pub fn assess(input: &RetinopathyRiskInput) -> RetinopathyRiskAssessment {
    let mut score = 0.0;
    let mut recommendations = Vec::new();

    accumulate(DURATION_POINTS, input.duration_years, &mut score, &mut recommendations);
    accumulate(HBA1C_POINTS, input.hba1c_percent, &mut score, &mut recommendations);

    let mean_bp = (input.systolic_bp + 2.0 * input.diastolic_bp) / 3.0;
    accumulate(MEAN_BP_POINTS, mean_bp, &mut score, &mut recommendations);
    accumulate(CHOLESTEROL_POINTS, input.total_cholesterol, &mut score, &mut recommendations);

    if input.smoker {
        score += 3.0;
        recommendations
            .push("Smoking cessation significantly reduces retinopathy progression".to_string());
    }
    if input.diabetes_type == DiabetesType::Type1 {
        score += 2.0;
    }
    if input.age_years > 65.0 {
        score += 1.0;
    }

    let risk_level = bands::match_ceiling(RISK_LEVEL_BANDS, score)
        .copied()
        .unwrap_or(RiskLevel::VeryHigh);

    let annual_risk_percent = annual_risk(risk_level, score);
    let screening_interval_months = match risk_level {
        RiskLevel::Low => 24,
        RiskLevel::Moderate => 12,
        RiskLevel::High => 6,
        RiskLevel::VeryHigh => 3,
    };

    recommendations.extend(GENERAL_ADVICE.iter().map(|s| s.to_string()));

    debug!(
        score,
        mean_bp,
        risk = risk_level.as_str(),
        annual_risk_percent,
        "diabetic retinopathy risk settled"
    );

    RetinopathyRiskAssessment {
        risk_score: score,
        risk_level,
        annual_risk_percent,
        recommendations,
        screening_interval_months,
    }
}

/// Band-local linear interpolation of annual incidence, rounded to one
/// decimal. The top band caps at 85%. Adjacent band formulas agree at the
/// shared boundary to within one percentage point.
pub fn annual_risk(level: RiskLevel, score: f64) -> f64 {
    let raw = match level {
        RiskLevel::Low => 2.0 + 0.5 * score,
        RiskLevel::Moderate => 6.0 + 1.5 * (score - 8.0),
        RiskLevel::High => 17.0 + 2.0 * (score - 15.0),
        RiskLevel::VeryHigh => (45.0 + 2.5 * (score - 22.0)).min(85.0),
    };
    (raw * 10.0).round() / 10.0
}
