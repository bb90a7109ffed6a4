use visus_core::PhysiologicRange;
use visus_core::range;

#[test]
fn clamp_is_bounded_and_idempotent() {
    let r = PhysiologicRange::new(0.0, 100.0);
    assert_eq!(r.clamp(-5.0), 0.0);
    assert_eq!(r.clamp(105.0), 100.0);
    assert_eq!(r.clamp(42.0), 42.0);
    assert_eq!(r.clamp(r.clamp(-5.0)), 0.0);
}

#[test]
fn contains_matches_clamp_fixpoints() {
    let r = range::IOP_MMHG;
    assert!(r.contains(16.0));
    assert!(!r.contains(0.0));
    assert!(!r.contains(80.0));
    assert_eq!(r.clamp(16.0), 16.0);
}

#[test]
fn risk_level_wire_form_and_ordering() {
    use visus_core::RiskLevel;

    assert_eq!(
        serde_json::to_string(&RiskLevel::VeryHigh).unwrap(),
        "\"very_high\""
    );
    assert!(RiskLevel::Low < RiskLevel::Moderate);
    assert!(RiskLevel::High < RiskLevel::VeryHigh);
    assert_eq!(RiskLevel::Moderate.as_str(), "moderate");
}
