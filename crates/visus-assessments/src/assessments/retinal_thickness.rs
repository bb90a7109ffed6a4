use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThicknessScan {
    pub central_um: f64,
    pub average_um: f64,
    /// Per-sector macular volumes from the OCT grid.
    pub sector_volumes: Vec<f64>,
    pub age_years: f64,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ThicknessStatus {
    Edema,
    Thick,
    Atrophy,
    Thin,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThicknessAnalysis {
    pub status: ThicknessStatus,
    pub recommendation: String,
    pub ai_confidence: f64,
    pub risk_factors: Vec<String>,
}

/// Age/gender-normalized expected central thickness, µm.
fn expected_central(age_years: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 278.0 - 0.30 * age_years,
        Gender::Female => 270.0 - 0.25 * age_years,
    }
}

/// Age/gender-normalized expected average thickness, µm.
fn expected_average(age_years: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 285.0 - 0.25 * age_years,
        Gender::Female => 278.0 - 0.20 * age_years,
    }
}

/// Population standard deviation; an empty sample has zero variability.
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Classify retinal thickness against age/gender-normalized expectations.
/// Branches are checked in priority order; the first match wins.
pub fn assess(scan: &ThicknessScan) -> ThicknessAnalysis {
    let expected = expected_central(scan.age_years, scan.gender);
    let expected_avg = expected_average(scan.age_years, scan.gender);
    let variability = population_std_dev(&scan.sector_volumes);
    let central = scan.central_um;

    let (status, recommendation, ai_confidence) = if central > expected + 100.0 {
        (
            ThicknessStatus::Edema,
            "Urgent anti-VEGF therapy evaluation for macular edema",
            0.92,
        )
    } else if central > expected + 50.0 {
        (
            ThicknessStatus::Thick,
            "Retinal thickening noted; OCT follow-up in 3 months",
            0.88,
        )
    } else if central < expected - 50.0 && variability > 20.0 {
        (
            ThicknessStatus::Atrophy,
            "Retinal atrophy pattern; evaluate for degenerative disease",
            0.90,
        )
    } else if central < expected - 30.0 {
        (
            ThicknessStatus::Thin,
            "Retinal thinning; monitor with repeat OCT in 6 months",
            0.85,
        )
    } else {
        (
            ThicknessStatus::Normal,
            "Retinal thickness within expected range for age and gender",
            0.98,
        )
    };

    let mut risk_factors = Vec::new();
    if scan.age_years > 65.0 {
        risk_factors.push("Age over 65: increased risk of age-related retinal disease".to_string());
    }
    if scan.gender == Gender::Female && scan.age_years > 50.0 {
        risk_factors.push(
            "Postmenopausal status: hormonal changes may affect retinal vasculature".to_string(),
        );
    }

    debug!(
        central,
        expected,
        average = scan.average_um,
        expected_avg,
        variability,
        "retinal thickness classified"
    );

    ThicknessAnalysis {
        status,
        recommendation: recommendation.to_string(),
        ai_confidence,
        risk_factors,
    }
}
