use serde::{Deserialize, Serialize};
use ts_rs::TS;
use visus_core::bands::{self, FloorBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestType {
    Screening,
    Diagnostic,
}

fn default_test_type() -> TestType {
    TestType::Screening
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorVisionType {
    Normal,
    Deuteranomaly,
    Deuteranopia,
}

/// Ordered: escalation via Farnsworth can only move toward `Severe`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorVisionSeverity {
    None,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorVisionInput {
    /// Correctly identified Ishihara plates.
    pub ishihara_correct: u32,
    /// Farnsworth D-15 error score; 0 when the panel was not administered.
    #[serde(default)]
    pub farnsworth_error_score: f64,
    #[serde(default = "default_test_type")]
    pub test_type: TestType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorVisionResult {
    pub vision_type: ColorVisionType,
    pub severity: ColorVisionSeverity,
    pub recommendation: String,
    pub occupational_impact: Vec<String>,
}

/// Ishihara plate-score floors, descending; first match wins.
const ISHIHARA_BANDS: &[FloorBand<ColorVisionSeverity>] = &[
    FloorBand { floor: 13.0, outcome: ColorVisionSeverity::None },
    FloorBand { floor: 9.0, outcome: ColorVisionSeverity::Mild },
    FloorBand { floor: 5.0, outcome: ColorVisionSeverity::Moderate },
];

fn severity_profile(
    severity: ColorVisionSeverity,
) -> (ColorVisionType, &'static str, &'static [&'static str]) {
    match severity {
        ColorVisionSeverity::None => (
            ColorVisionType::Normal,
            "Color vision within normal limits",
            &["No occupational color-vision restrictions"],
        ),
        ColorVisionSeverity::Mild => (
            ColorVisionType::Deuteranomaly,
            "Mild red-green deficiency; consider enhanced lighting for color-critical tasks",
            &[
                "May affect fine color-discrimination tasks",
                "Most occupations unaffected",
            ],
        ),
        ColorVisionSeverity::Moderate => (
            ColorVisionType::Deuteranomaly,
            "Moderate red-green deficiency; formal occupational color-vision testing recommended",
            &[
                "Restricted from color-critical roles such as electrical wiring",
                "Aviation and maritime roles require lantern testing",
            ],
        ),
        ColorVisionSeverity::Severe => (
            ColorVisionType::Deuteranopia,
            "Severe red-green deficiency; formal occupational assessment required",
            &[
                "Unsuitable for color-critical occupations",
                "Aviation, maritime, and electrical trades restricted",
                "Commercial driving may require review",
            ],
        ),
    }
}

/// Ishihara screening sets the severity floor; in diagnostic mode a
/// supplied Farnsworth D-15 error score may escalate it, never reduce it.
pub fn assess(input: &ColorVisionInput) -> ColorVisionResult {
    let mut severity = bands::match_floor(ISHIHARA_BANDS, f64::from(input.ishihara_correct))
        .copied()
        .unwrap_or(ColorVisionSeverity::Severe);

    if input.test_type == TestType::Diagnostic && input.farnsworth_error_score > 0.0 {
        if input.farnsworth_error_score > 2.0 {
            severity = severity.max(ColorVisionSeverity::Severe);
        } else if input.farnsworth_error_score > 1.5 {
            severity = severity.max(ColorVisionSeverity::Moderate);
        }
    }

    let (vision_type, recommendation, impact) = severity_profile(severity);

    ColorVisionResult {
        vision_type,
        severity,
        recommendation: recommendation.to_string(),
        occupational_impact: impact.iter().map(|s| s.to_string()).collect(),
    }
}
