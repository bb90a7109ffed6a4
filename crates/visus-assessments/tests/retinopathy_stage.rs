use visus_assessments::assessments::retinopathy_stage::{
    self, FundusLesions, RetinopathyStage,
};

fn clear_fundus() -> FundusLesions {
    FundusLesions {
        microaneurysms: 0,
        hemorrhages: 0,
        hard_exudates: 0,
        cotton_wool_spots: 0,
        venous_beading: false,
        irma: false,
        neovascularization: false,
        macular_edema: false,
    }
}

#[test]
fn clear_fundus_has_no_retinopathy() {
    let result = retinopathy_stage::assess(&clear_fundus());
    assert_eq!(result.stage, RetinopathyStage::None);
    assert_eq!(result.risk_score, 0.0);
    assert_eq!(result.follow_up_months, 12);
}

#[test]
fn scattered_microaneurysms_are_mild() {
    let mut lesions = clear_fundus();
    lesions.microaneurysms = 5;
    let result = retinopathy_stage::assess(&lesions);
    assert_eq!(result.stage, RetinopathyStage::Mild);
    assert_eq!(result.follow_up_months, 12);
}

#[test]
fn mixed_lesions_stage_moderate() {
    let mut lesions = clear_fundus();
    lesions.microaneurysms = 10;
    lesions.hemorrhages = 8;
    // 1.0 + 1.6 = 2.6
    let result = retinopathy_stage::assess(&lesions);
    assert_eq!(result.stage, RetinopathyStage::Moderate);
    assert_eq!(result.follow_up_months, 6);
}

#[test]
fn neovascularization_dominates_the_score() {
    let mut lesions = clear_fundus();
    lesions.neovascularization = true;
    let result = retinopathy_stage::assess(&lesions);
    assert_eq!(result.risk_score, 5.0);
    assert_eq!(result.stage, RetinopathyStage::Severe);
    assert_eq!(result.follow_up_months, 3);
}

#[test]
fn florid_disease_is_proliferative() {
    let mut lesions = clear_fundus();
    lesions.neovascularization = true;
    lesions.irma = true;
    lesions.venous_beading = true;
    let result = retinopathy_stage::assess(&lesions);
    assert_eq!(result.stage, RetinopathyStage::Proliferative);
    assert_eq!(result.follow_up_months, 1);
    assert!(
        result
            .recommendations
            .iter()
            .any(|r| r.contains("Urgent retinal specialist"))
    );
}

#[test]
fn macular_edema_pulls_follow_up_to_one_month() {
    let mut lesions = clear_fundus();
    lesions.microaneurysms = 5;
    lesions.macular_edema = true;
    let result = retinopathy_stage::assess(&lesions);
    assert_eq!(result.stage, RetinopathyStage::Mild);
    assert!(result.macular_edema);
    assert_eq!(result.follow_up_months, 1);
    assert!(
        result
            .recommendations
            .iter()
            .any(|r| r.contains("Anti-VEGF"))
    );
}
