use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use visus_core::RiskLevel;
use visus_core::bands::{self, CeilingBand};

/// Reference central corneal thickness, µm. Goldmann tonometry is
/// calibrated to this; thinner corneas under-read true pressure.
pub const STANDARD_CORNEAL_THICKNESS_UM: f64 = 550.0;

/// Pressure correction per µm of deviation from the reference thickness.
const CORRECTION_PER_UM: f64 = 0.007;

fn default_corneal_thickness() -> f64 {
    STANDARD_CORNEAL_THICKNESS_UM
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IopReading {
    pub pressure_mmhg: f64,
    pub age_years: f64,
    /// Pachymetry value; defaults to the 550 µm reference when unknown.
    #[serde(default = "default_corneal_thickness")]
    pub corneal_thickness_um: f64,
}

impl IopReading {
    /// Reading without pachymetry; corneal thickness defaults to 550 µm.
    pub fn new(pressure_mmhg: f64, age_years: f64) -> Self {
        Self {
            pressure_mmhg,
            age_years,
            corneal_thickness_um: STANDARD_CORNEAL_THICKNESS_UM,
        }
    }

    pub fn with_corneal_thickness(mut self, thickness_um: f64) -> Self {
        self.corneal_thickness_um = thickness_um;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IopAssessment {
    pub corrected_pressure: f64,
    pub risk: RiskLevel,
    pub recommendation: String,
}

/// Bands on (corrected − age-adjusted normal), ascending; first match wins.
const RISK_BANDS: &[CeilingBand<(RiskLevel, &'static str)>] = &[
    CeilingBand {
        ceiling: 0.0,
        outcome: (
            RiskLevel::Low,
            "Pressure within the age-adjusted normal range; routine monitoring",
        ),
    },
    CeilingBand {
        ceiling: 5.0,
        outcome: (
            RiskLevel::Moderate,
            "Mildly elevated pressure; recheck with pachymetry in 3-6 months",
        ),
    },
    CeilingBand {
        ceiling: 10.0,
        outcome: (
            RiskLevel::High,
            "Elevated pressure; ophthalmology referral for glaucoma workup",
        ),
    },
];

const VERY_HIGH: (RiskLevel, &str) = (
    RiskLevel::VeryHigh,
    "Severely elevated pressure; urgent ophthalmology referral",
);

/// Corneal-thickness-corrected pressure banded against an age-adjusted
/// normal threshold (16 mmHg at age 40, +0.1 per year).
pub fn assess(reading: &IopReading) -> IopAssessment {
    let corrected = reading.pressure_mmhg
        + (reading.corneal_thickness_um - STANDARD_CORNEAL_THICKNESS_UM) * CORRECTION_PER_UM;
    let normal = 16.0 + (reading.age_years - 40.0) * 0.1;

    let (risk, advice) = bands::match_ceiling(RISK_BANDS, corrected - normal)
        .copied()
        .unwrap_or(VERY_HIGH);

    debug!(corrected, normal, risk = risk.as_str(), "intraocular pressure banded");

    IopAssessment {
        corrected_pressure: corrected,
        risk,
        recommendation: advice.to_string(),
    }
}
