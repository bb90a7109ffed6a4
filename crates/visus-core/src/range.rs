use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A physiologically plausible `[min, max]` range for a raw measurement.
///
/// Out-of-range values are clamped silently, never rejected — the input
/// normalizer is deliberately permissive, and most calculators accept raw
/// numbers without passing through it at all. Callers that want strict
/// validation check `contains` first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhysiologicRange {
    pub min: f64,
    pub max: f64,
}

impl PhysiologicRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Composite and component health scores.
pub const SCORE: PhysiologicRange = PhysiologicRange::new(0.0, 100.0);

/// Intraocular pressure, mmHg.
pub const IOP_MMHG: PhysiologicRange = PhysiologicRange::new(5.0, 70.0);

/// Central corneal thickness, µm.
pub const CORNEAL_THICKNESS_UM: PhysiologicRange = PhysiologicRange::new(400.0, 700.0);

/// Retinal thickness, µm.
pub const RETINAL_THICKNESS_UM: PhysiologicRange = PhysiologicRange::new(100.0, 800.0);

/// Glycated hemoglobin, percent.
pub const HBA1C_PERCENT: PhysiologicRange = PhysiologicRange::new(4.0, 20.0);
