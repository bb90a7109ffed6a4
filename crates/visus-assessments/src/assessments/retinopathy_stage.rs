use serde::{Deserialize, Serialize};
use ts_rs::TS;
use visus_core::bands::{self, FloorBand};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FundusLesions {
    pub microaneurysms: u32,
    pub hemorrhages: u32,
    pub hard_exudates: u32,
    pub cotton_wool_spots: u32,
    pub venous_beading: bool,
    /// Intraretinal microvascular abnormalities.
    pub irma: bool,
    pub neovascularization: bool,
    pub macular_edema: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RetinopathyStage {
    None,
    Mild,
    Moderate,
    Severe,
    Proliferative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StagingResult {
    pub stage: RetinopathyStage,
    pub macular_edema: bool,
    pub risk_score: f64,
    pub recommendations: Vec<String>,
    pub follow_up_months: u32,
}

/// Stage floors on the lesion-weighted sum; a positive sum below 2 is mild.
const STAGE_BANDS: &[FloorBand<RetinopathyStage>] = &[
    FloorBand { floor: 8.0, outcome: RetinopathyStage::Proliferative },
    FloorBand { floor: 5.0, outcome: RetinopathyStage::Severe },
    FloorBand { floor: 2.0, outcome: RetinopathyStage::Moderate },
];

fn stage_plan(stage: RetinopathyStage) -> (u32, &'static [&'static str]) {
    match stage {
        RetinopathyStage::None => (12, &["Continue annual diabetic eye screening"]),
        RetinopathyStage::Mild => (
            12,
            &[
                "Annual dilated examination",
                "Optimize glycemic and blood pressure control",
            ],
        ),
        RetinopathyStage::Moderate => (
            6,
            &[
                "Ophthalmology review within 6 months",
                "Tighten glycemic control to slow progression",
            ],
        ),
        RetinopathyStage::Severe => (
            3,
            &[
                "Prompt retinal specialist referral",
                "Evaluate for panretinal photocoagulation",
            ],
        ),
        RetinopathyStage::Proliferative => (
            1,
            &[
                "Urgent retinal specialist referral",
                "Panretinal photocoagulation or anti-VEGF therapy indicated",
            ],
        ),
    }
}

/// Lesion-count-based staging. Counts are weighted, flag findings add flat
/// points; macular edema appends anti-VEGF advice and pulls follow-up in
/// to one month.
pub fn assess(lesions: &FundusLesions) -> StagingResult {
    let mut score = f64::from(lesions.microaneurysms) * 0.1
        + f64::from(lesions.hemorrhages) * 0.2
        + f64::from(lesions.hard_exudates) * 0.15
        + f64::from(lesions.cotton_wool_spots) * 0.3;
    if lesions.venous_beading {
        score += 2.0;
    }
    if lesions.irma {
        score += 2.5;
    }
    if lesions.neovascularization {
        score += 5.0;
    }

    let stage = bands::match_floor(STAGE_BANDS, score)
        .copied()
        .unwrap_or(if score > 0.0 {
            RetinopathyStage::Mild
        } else {
            RetinopathyStage::None
        });

    let (mut follow_up_months, advice) = stage_plan(stage);
    let mut recommendations: Vec<String> = advice.iter().map(|s| s.to_string()).collect();

    if lesions.macular_edema {
        recommendations.push("Anti-VEGF therapy evaluation for macular edema".to_string());
        follow_up_months = follow_up_months.min(1);
    }

    StagingResult {
        stage,
        macular_edema: lesions.macular_edema,
        risk_score: score,
        recommendations,
        follow_up_months,
    }
}
