//! One module per clinical domain. Each exposes typed input/output records
//! and a single pure `assess` function.

pub mod amd;
pub mod color_vision;
pub mod eye_health;
pub mod glaucoma;
pub mod intraocular_pressure;
pub mod pediatric;
pub mod retinal_thickness;
pub mod retinopathy_risk;
pub mod retinopathy_stage;
pub mod visual_acuity;

use visus_core::bands::{self, PointBand};

/// Add the first matching contribution band for `value` to a running
/// score, appending the band's recommendation when it carries one.
pub(crate) fn accumulate(
    table: &[PointBand],
    value: f64,
    score: &mut f64,
    recommendations: &mut Vec<String>,
) {
    if let Some(band) = bands::match_points(table, value) {
        *score += band.points;
        if let Some(advice) = band.advice {
            recommendations.push(advice.to_string());
        }
    }
}
