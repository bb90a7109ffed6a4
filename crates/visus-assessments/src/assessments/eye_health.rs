//! Aggregate eye-health score.
//!
//! A coarse screening heuristic over bilateral measurements and systemic
//! risk factors. Its weights and thresholds are deliberately independent
//! of the dedicated per-condition engines (visual acuity, IOP, glaucoma,
//! retinopathy): this module screens, those diagnose. Do not refactor it
//! to call them.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use visus_core::bands::{self, FloorBand};
use visus_core::range;

const VISION_WEIGHT: f64 = 0.3;
const PRESSURE_WEIGHT: f64 = 0.25;
const STRUCTURE_WEIGHT: f64 = 0.2;
const FUNCTION_WEIGHT: f64 = 0.25;

/// Sub-risk growth per year past 60, applied multiplicatively.
const AGE_RISK_GROWTH_PER_YEAR: f64 = 0.02;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SystemicRiskFactors {
    pub diabetes: bool,
    pub hypertension: bool,
    pub smoking: bool,
    pub family_history: bool,
    #[serde(default)]
    pub myopia_diopters: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeHealthInput {
    /// Decimal visual acuity per eye.
    pub acuity_right: f64,
    pub acuity_left: f64,
    /// Intraocular pressure per eye, mmHg.
    pub iop_right: f64,
    pub iop_left: f64,
    pub central_thickness_um: f64,
    pub average_thickness_um: f64,
    /// Visual field global indices, dB.
    pub field_mean_deviation_db: f64,
    pub field_psd_db: f64,
    pub age_years: f64,
    pub risk_factors: SystemicRiskFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HealthCategory {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentScores {
    pub vision: f64,
    pub pressure: f64,
    pub structure: f64,
    pub function: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionRisks {
    pub glaucoma: f64,
    pub amd: f64,
    pub diabetic_retinopathy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeHealthReport {
    pub overall_score: f64,
    pub category: HealthCategory,
    pub component_scores: ComponentScores,
    pub recommendations: Vec<String>,
    pub ai_insights: Vec<String>,
    pub risk_assessment: ConditionRisks,
}

const CATEGORY_BANDS: &[FloorBand<HealthCategory>] = &[
    FloorBand { floor: 90.0, outcome: HealthCategory::Excellent },
    FloorBand { floor: 75.0, outcome: HealthCategory::Good },
    FloorBand { floor: 60.0, outcome: HealthCategory::Fair },
    FloorBand { floor: 40.0, outcome: HealthCategory::Poor },
];

/// Compose bilateral measurements and systemic risk factors into one
/// overall score with per-condition risk estimates. Raw deductions
/// accumulate first; scores are clamped to [0, 100] once, at the end.
pub fn assess(input: &EyeHealthInput) -> EyeHealthReport {
    let mut overall: f64 = 100.0;
    let mut vision: f64 = 100.0;
    let mut pressure: f64 = 100.0;
    let mut structure: f64 = 100.0;
    let mut function: f64 = 100.0;
    let mut recommendations = Vec::new();
    let mut insights = Vec::new();
    let mut risks = ConditionRisks {
        glaucoma: 0.0,
        amd: 0.0,
        diabetic_retinopathy: 0.0,
    };

    let average_acuity = (input.acuity_right + input.acuity_left) / 2.0;
    if average_acuity < 0.8 {
        let deduction = (0.8 - average_acuity) / 0.8 * 100.0;
        vision -= deduction;
        overall -= deduction * VISION_WEIGHT;
        recommendations.push("Comprehensive refraction and visual acuity workup".to_string());
        insights.push(format!(
            "Average visual acuity {average_acuity:.2} is below the 0.8 screening threshold"
        ));
    }

    let average_iop = (input.iop_right + input.iop_left) / 2.0;
    if average_iop > 21.0 {
        let deduction = (average_iop - 21.0) * 5.0;
        pressure -= deduction;
        overall -= deduction * PRESSURE_WEIGHT;
        recommendations.push("Intraocular pressure recheck with pachymetry".to_string());
        insights.push(format!(
            "Average intraocular pressure {average_iop:.1} mmHg exceeds 21 mmHg"
        ));
    }

    let central = input.central_thickness_um;
    if central < 200.0 || central > 300.0 {
        let deviation = if central < 200.0 {
            200.0 - central
        } else {
            central - 300.0
        };
        let deduction = deviation * 0.5;
        structure -= deduction;
        overall -= deduction * STRUCTURE_WEIGHT;
        recommendations.push("OCT follow-up of retinal thickness".to_string());
        insights.push(format!(
            "Central retinal thickness {central:.0} um outside the 200-300 um reference band"
        ));
    }

    let md = input.field_mean_deviation_db;
    if md < -2.0 {
        let deduction = (-2.0 - md) * 5.0;
        function -= deduction;
        overall -= deduction * FUNCTION_WEIGHT;
        recommendations.push("Repeat automated perimetry to confirm field loss".to_string());
        insights.push(format!(
            "Visual field mean deviation {md:.1} dB indicates functional loss"
        ));
    }

    let rf = &input.risk_factors;
    if rf.diabetes {
        overall -= 10.0;
        risks.diabetic_retinopathy = 35.0;
        if input.age_years > 50.0 {
            risks.diabetic_retinopathy += 15.0;
        }
    }
    if rf.hypertension {
        overall -= 5.0;
        risks.glaucoma += 10.0;
    }
    if rf.smoking {
        overall -= 8.0;
        risks.amd = 25.0;
        if input.age_years > 60.0 {
            risks.amd += 20.0;
        }
    }
    if rf.family_history {
        overall -= 5.0;
        risks.glaucoma += 15.0;
    }
    if rf.myopia_diopters > 6.0 {
        overall -= 3.0;
        risks.glaucoma += 8.0;
    }

    if input.age_years > 60.0 {
        let years_past = input.age_years - 60.0;
        overall -= 0.5 * years_past;
        let growth = 1.0 + years_past * AGE_RISK_GROWTH_PER_YEAR;
        risks.amd *= growth;
        risks.glaucoma *= growth;
    }

    // Single clamp after all deductions.
    overall = range::SCORE.clamp(overall);
    let component_scores = ComponentScores {
        vision: range::SCORE.clamp(vision),
        pressure: range::SCORE.clamp(pressure),
        structure: range::SCORE.clamp(structure),
        function: range::SCORE.clamp(function),
    };

    let category = bands::match_floor(CATEGORY_BANDS, overall)
        .copied()
        .unwrap_or(HealthCategory::Critical);

    match category {
        HealthCategory::Excellent => insights.push(
            "All measured parameters within normal limits; maintain routine eye care".to_string(),
        ),
        HealthCategory::Critical => insights.push(
            "Multiple significant abnormalities; comprehensive ophthalmic evaluation required"
                .to_string(),
        ),
        _ => {}
    }

    debug!(
        overall,
        average_acuity,
        average_iop,
        psd = input.field_psd_db,
        "aggregate eye-health score settled"
    );

    EyeHealthReport {
        overall_score: overall,
        category,
        component_scores,
        recommendations,
        ai_insights: insights,
        risk_assessment: risks,
    }
}
