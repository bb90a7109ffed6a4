use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisualBehaviors {
    pub fixation: bool,
    pub following: bool,
    pub reaching: bool,
    pub social_smiling: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisualReflexes {
    pub pupillary: bool,
    pub blink: bool,
    pub optokinetic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PediatricInput {
    pub age_months: u32,
    pub behaviors: VisualBehaviors,
    pub reflexes: VisualReflexes,
}

/// Ordered: later checks may only escalate, never downgrade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DevelopmentStatus {
    Normal,
    Delayed,
    Concerning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PediatricAssessment {
    pub development_status: DevelopmentStatus,
    pub milestones: Vec<String>,
    pub recommendations: Vec<String>,
    pub follow_up_months: u32,
}

fn escalate(status: &mut DevelopmentStatus, to: DevelopmentStatus) {
    if to > *status {
        *status = to;
    }
}

fn tighten(follow_up: &mut Option<u32>, months: u32) {
    *follow_up = Some(follow_up.map_or(months, |f| f.min(months)));
}

/// Age-gated milestone assessment. Gates open at 2/6/12/18/24 months;
/// each missed milestone escalates the status and pulls follow-up in.
pub fn assess(input: &PediatricInput) -> PediatricAssessment {
    let mut status = DevelopmentStatus::Normal;
    let mut milestones = Vec::new();
    let mut recommendations = Vec::new();
    let mut follow_up: Option<u32> = None;

    if input.age_months >= 2 {
        if !input.reflexes.pupillary || !input.reflexes.blink {
            escalate(&mut status, DevelopmentStatus::Concerning);
            recommendations.push(
                "Immediate pediatric ophthalmology referral for absent primary reflexes"
                    .to_string(),
            );
            tighten(&mut follow_up, 1);
        } else {
            milestones.push("Pupillary reflex present".to_string());
            milestones.push("Blink reflex present".to_string());
        }
        if input.reflexes.optokinetic {
            milestones.push("Optokinetic response present".to_string());
        }
    }

    if input.age_months >= 6 {
        if input.behaviors.fixation {
            milestones.push("Steady fixation achieved".to_string());
        } else {
            escalate(&mut status, DevelopmentStatus::Delayed);
            recommendations.push("Begin structured visual stimulation therapy".to_string());
            tighten(&mut follow_up, 3);
        }
    }

    if input.age_months >= 12 {
        if input.behaviors.following {
            milestones.push("Smooth visual tracking achieved".to_string());
        } else {
            escalate(&mut status, DevelopmentStatus::Delayed);
            recommendations.push("Refer for orthoptic evaluation of tracking deficit".to_string());
            tighten(&mut follow_up, 3);
        }
    }

    if input.age_months >= 18 {
        if input.behaviors.reaching {
            milestones.push("Visually guided reaching achieved".to_string());
        } else {
            escalate(&mut status, DevelopmentStatus::Delayed);
            recommendations
                .push("Occupational therapy referral for visuomotor integration".to_string());
            tighten(&mut follow_up, 6);
        }
    }

    if input.age_months >= 24 {
        if input.behaviors.social_smiling {
            milestones.push("Responsive social smiling achieved".to_string());
        } else {
            escalate(&mut status, DevelopmentStatus::Concerning);
            recommendations.push(
                "Developmental pediatrics referral; assess visual and social development"
                    .to_string(),
            );
            tighten(&mut follow_up, 3);
        }
    }

    let follow_up_months =
        follow_up.unwrap_or(if input.age_months < 36 { 6 } else { 12 });

    PediatricAssessment {
        development_status: status,
        milestones,
        recommendations,
        follow_up_months,
    }
}
