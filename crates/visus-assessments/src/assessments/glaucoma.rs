use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use visus_core::RiskLevel;
use visus_core::bands::{self, CeilingBand, FloorBand, PointBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Ethnicity {
    Caucasian,
    African,
    Hispanic,
    Asian,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlaucomaInput {
    pub iop_mmhg: f64,
    pub cup_disc_ratio: f64,
    pub rnfl_thickness_um: f64,
    /// Visual field mean deviation, dB. Values below −2 count as a defect.
    pub field_mean_deviation_db: f64,
    pub age_years: f64,
    pub family_history: bool,
    pub ethnicity: Ethnicity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlaucomaAssessment {
    pub risk_level: RiskLevel,
    pub cup_disc_ratio: f64,
    pub rnfl_thickness: f64,
    pub visual_field_defects: bool,
    pub iop: f64,
    /// Relative annual structural-loss rate for downstream simulation.
    pub progression_rate: f64,
    pub treatment_recommendation: String,
}

const IOP_POINTS: &[PointBand] = &[
    PointBand { floor: 30.0, points: 4.0, advice: None },
    PointBand { floor: 26.0, points: 2.0, advice: None },
    PointBand { floor: 22.0, points: 1.0, advice: None },
];

const CUP_DISC_POINTS: &[PointBand] = &[
    PointBand { floor: 0.8, points: 4.0, advice: None },
    PointBand { floor: 0.7, points: 2.0, advice: None },
    PointBand { floor: 0.6, points: 1.0, advice: None },
];

/// Inverse banding: thinner nerve fiber layer scores higher.
const RNFL_POINTS: &[CeilingBand<f64>] = &[
    CeilingBand { ceiling: 70.0, outcome: 4.0 },
    CeilingBand { ceiling: 80.0, outcome: 2.0 },
    CeilingBand { ceiling: 90.0, outcome: 1.0 },
];

/// Field-loss severity, evaluated only once MD is below −2 dB.
const FIELD_POINTS: &[CeilingBand<f64>] = &[
    CeilingBand { ceiling: -12.0, outcome: 4.0 },
    CeilingBand { ceiling: -6.0, outcome: 2.0 },
];

const AGE_POINTS: &[PointBand] = &[
    PointBand { floor: 70.0, points: 2.0, advice: None },
    PointBand { floor: 60.0, points: 1.0, advice: None },
];

/// Total-score floors, descending: ≥10 severe, ≥6 high, ≥3 moderate.
const RISK_BANDS: &[FloorBand<(RiskLevel, f64, &'static str)>] = &[
    FloorBand {
        floor: 10.0,
        outcome: (
            RiskLevel::VeryHigh,
            1.0,
            "Severe risk: target intraocular pressure reduction of 40% from baseline; consider surgical intervention",
        ),
    },
    FloorBand {
        floor: 6.0,
        outcome: (
            RiskLevel::High,
            0.6,
            "Target intraocular pressure reduction of 30% from baseline; consider adjunct therapy",
        ),
    },
    FloorBand {
        floor: 3.0,
        outcome: (
            RiskLevel::Moderate,
            0.3,
            "Target intraocular pressure reduction of 20% from baseline",
        ),
    },
];

const LOW_RISK: (RiskLevel, f64, &str) = (
    RiskLevel::Low,
    0.1,
    "Routine monitoring; no pressure-lowering treatment indicated",
);

/// Structural + functional + demographic weighted glaucoma score.
pub fn assess(input: &GlaucomaInput) -> GlaucomaAssessment {
    let mut score = 0.0;

    if let Some(band) = bands::match_points(IOP_POINTS, input.iop_mmhg) {
        score += band.points;
    }
    if let Some(band) = bands::match_points(CUP_DISC_POINTS, input.cup_disc_ratio) {
        score += band.points;
    }
    if let Some(points) = bands::match_ceiling(RNFL_POINTS, input.rnfl_thickness_um) {
        score += points;
    }

    let visual_field_defects = input.field_mean_deviation_db < -2.0;
    if visual_field_defects {
        score += bands::match_ceiling(FIELD_POINTS, input.field_mean_deviation_db)
            .copied()
            .unwrap_or(1.0);
    }

    if let Some(band) = bands::match_points(AGE_POINTS, input.age_years) {
        score += band.points;
    }

    if input.family_history {
        score += 2.0;
    }
    score += match input.ethnicity {
        Ethnicity::African => 2.0,
        Ethnicity::Hispanic => 1.0,
        _ => 0.0,
    };

    let (risk_level, progression_rate, treatment) = bands::match_floor(RISK_BANDS, score)
        .copied()
        .unwrap_or(LOW_RISK);

    debug!(score, risk = risk_level.as_str(), "glaucoma risk settled");

    GlaucomaAssessment {
        risk_level,
        cup_disc_ratio: input.cup_disc_ratio,
        rnfl_thickness: input.rnfl_thickness_um,
        visual_field_defects,
        iop: input.iop_mmhg,
        progression_rate,
        treatment_recommendation: treatment.to_string(),
    }
}
