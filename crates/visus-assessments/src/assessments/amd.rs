use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DrusenSize {
    None,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AmdType {
    Dry,
    Wet,
    GeographicAtrophy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AmdStage {
    Early,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentUrgency {
    Routine,
    Urgent,
    Emergent,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AmdInput {
    pub drusen_size: DrusenSize,
    pub drusen_area: f64,
    pub pigment_changes: bool,
    pub geographic_atrophy: bool,
    pub neovascularization: bool,
    pub subretinal_fluid: bool,
    pub age_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AmdClassification {
    pub amd_type: AmdType,
    pub stage: AmdStage,
    pub drusen_size: DrusenSize,
    pub pigment_changes: bool,
    pub neovascularization: bool,
    pub central_vision_threat: bool,
    pub treatment_urgency: TreatmentUrgency,
}

/// Type by priority (wet beats geographic atrophy beats dry), stage from
/// drusen morphology independently of type. Urgency only ever escalates.
pub fn assess(input: &AmdInput) -> AmdClassification {
    let (amd_type, mut central_vision_threat, mut treatment_urgency) =
        if input.neovascularization || input.subretinal_fluid {
            (AmdType::Wet, true, TreatmentUrgency::Emergent)
        } else if input.geographic_atrophy {
            (AmdType::GeographicAtrophy, true, TreatmentUrgency::Urgent)
        } else {
            (AmdType::Dry, false, TreatmentUrgency::Routine)
        };

    let stage = if input.drusen_size == DrusenSize::Small && input.drusen_area < 125.0 {
        AmdStage::Early
    } else if input.drusen_size == DrusenSize::Medium
        || (input.drusen_size == DrusenSize::Large && input.drusen_area < 250.0)
    {
        if input.pigment_changes {
            central_vision_threat = true;
        }
        AmdStage::Intermediate
    } else {
        central_vision_threat = true;
        if treatment_urgency == TreatmentUrgency::Routine {
            treatment_urgency = TreatmentUrgency::Urgent;
        }
        AmdStage::Advanced
    };

    AmdClassification {
        amd_type,
        stage,
        drusen_size: input.drusen_size,
        pigment_changes: input.pigment_changes,
        neovascularization: input.neovascularization,
        central_vision_threat,
        treatment_urgency,
    }
}
