use visus_assessments::assessments::eye_health::{
    self, EyeHealthInput, HealthCategory, SystemicRiskFactors,
};

fn healthy_adult() -> EyeHealthInput {
    EyeHealthInput {
        acuity_right: 1.0,
        acuity_left: 1.0,
        iop_right: 15.0,
        iop_left: 15.0,
        central_thickness_um: 250.0,
        average_thickness_um: 280.0,
        field_mean_deviation_db: 0.0,
        field_psd_db: 0.0,
        age_years: 30.0,
        risk_factors: SystemicRiskFactors::default(),
    }
}

#[test]
fn all_normal_inputs_score_a_perfect_100() {
    let report = eye_health::assess(&healthy_adult());
    assert_eq!(report.overall_score, 100.0);
    assert_eq!(report.category, HealthCategory::Excellent);
    assert_eq!(report.component_scores.vision, 100.0);
    assert_eq!(report.component_scores.pressure, 100.0);
    assert_eq!(report.component_scores.structure, 100.0);
    assert_eq!(report.component_scores.function, 100.0);
    assert_eq!(report.risk_assessment.glaucoma, 0.0);
    assert_eq!(report.risk_assessment.amd, 0.0);
    assert_eq!(report.risk_assessment.diabetic_retinopathy, 0.0);
    assert!(report.recommendations.is_empty());
    assert!(report.ai_insights.iter().any(|i| i.contains("normal limits")));
}

#[test]
fn reduced_acuity_deducts_proportionally_with_insight() {
    let mut input = healthy_adult();
    input.acuity_right = 0.4;
    input.acuity_left = 0.4;
    let report = eye_health::assess(&input);
    // Deficit (0.8 - 0.4) / 0.8 = 50 component points, weighted 0.3.
    assert_eq!(report.component_scores.vision, 50.0);
    assert_eq!(report.overall_score, 85.0);
    assert_eq!(report.category, HealthCategory::Good);
    assert!(report.ai_insights.iter().any(|i| i.contains("0.40")));
}

#[test]
fn elderly_diabetic_smoker_accumulates_condition_risks() {
    let mut input = healthy_adult();
    input.age_years = 65.0;
    input.risk_factors.diabetes = true;
    input.risk_factors.smoking = true;
    let report = eye_health::assess(&input);

    // Flat deductions 10 + 8, then 0.5 per year past 60.
    assert!((report.overall_score - 79.5).abs() < 1e-9);
    assert_eq!(report.category, HealthCategory::Good);
    assert_eq!(report.risk_assessment.diabetic_retinopathy, 50.0);
    // Smoking sets AMD risk to 45 past 60, then 2%/year growth for 5 years.
    assert!((report.risk_assessment.amd - 49.5).abs() < 1e-9);
    assert_eq!(report.risk_assessment.glaucoma, 0.0);
}

#[test]
fn glaucoma_risk_factors_stack() {
    let mut input = healthy_adult();
    input.risk_factors.hypertension = true;
    input.risk_factors.family_history = true;
    input.risk_factors.myopia_diopters = 7.0;
    let report = eye_health::assess(&input);
    assert_eq!(report.risk_assessment.glaucoma, 33.0);
    assert_eq!(report.overall_score, 87.0);
}

#[test]
fn multi_system_failure_is_critical() {
    let input = EyeHealthInput {
        acuity_right: 0.1,
        acuity_left: 0.1,
        iop_right: 40.0,
        iop_left: 40.0,
        central_thickness_um: 400.0,
        average_thickness_um: 380.0,
        field_mean_deviation_db: -20.0,
        field_psd_db: 10.0,
        age_years: 55.0,
        risk_factors: SystemicRiskFactors::default(),
    };
    let report = eye_health::assess(&input);
    assert!((report.overall_score - 17.5).abs() < 1e-9);
    assert_eq!(report.category, HealthCategory::Critical);
    assert_eq!(report.recommendations.len(), 4);
    assert!(
        report
            .ai_insights
            .iter()
            .any(|i| i.contains("comprehensive ophthalmic evaluation"))
    );
}

#[test]
fn scores_clamp_to_zero_not_below() {
    let input = EyeHealthInput {
        acuity_right: 0.0,
        acuity_left: 0.0,
        iop_right: 60.0,
        iop_left: 60.0,
        central_thickness_um: 500.0,
        average_thickness_um: 450.0,
        field_mean_deviation_db: -50.0,
        field_psd_db: 15.0,
        age_years: 80.0,
        risk_factors: SystemicRiskFactors {
            diabetes: true,
            hypertension: true,
            smoking: true,
            family_history: true,
            myopia_diopters: 8.0,
        },
    };
    let report = eye_health::assess(&input);
    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.component_scores.vision, 0.0);
    assert_eq!(report.component_scores.pressure, 0.0);
    assert_eq!(report.component_scores.structure, 0.0);
    assert_eq!(report.component_scores.function, 0.0);
    assert_eq!(report.category, HealthCategory::Critical);
}

#[test]
fn identical_input_yields_identical_report() {
    let mut input = healthy_adult();
    input.risk_factors.diabetes = true;
    input.age_years = 62.0;
    assert_eq!(eye_health::assess(&input), eye_health::assess(&input));
}
