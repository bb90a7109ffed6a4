use visus_core::bands::{self, CeilingBand, FloorBand, PointBand};

const FLOORS: &[FloorBand<&'static str>] = &[
    FloorBand { floor: 0.8, outcome: "normal" },
    FloorBand { floor: 0.3, outcome: "mild" },
    FloorBand { floor: 0.1, outcome: "moderate" },
];

#[test]
fn floor_first_match_wins() {
    assert_eq!(bands::match_floor(FLOORS, 1.0), Some(&"normal"));
    assert_eq!(bands::match_floor(FLOORS, 0.8), Some(&"normal"));
    assert_eq!(bands::match_floor(FLOORS, 0.5), Some(&"mild"));
    assert_eq!(bands::match_floor(FLOORS, 0.1), Some(&"moderate"));
    assert_eq!(bands::match_floor(FLOORS, 0.05), None);
}

const CEILINGS: &[CeilingBand<u32>] = &[
    CeilingBand { ceiling: 8.0, outcome: 24 },
    CeilingBand { ceiling: 15.0, outcome: 12 },
    CeilingBand { ceiling: 22.0, outcome: 6 },
];

#[test]
fn ceiling_bands_partition_without_gaps() {
    assert_eq!(bands::match_ceiling(CEILINGS, 0.0), Some(&24));
    assert_eq!(bands::match_ceiling(CEILINGS, 8.0), Some(&24));
    assert_eq!(bands::match_ceiling(CEILINGS, 8.1), Some(&12));
    assert_eq!(bands::match_ceiling(CEILINGS, 15.0), Some(&12));
    assert_eq!(bands::match_ceiling(CEILINGS, 22.0), Some(&6));
    assert_eq!(bands::match_ceiling(CEILINGS, 22.1), None);
}

const POINTS: &[PointBand] = &[
    PointBand { floor: 9.5, points: 10.0, advice: Some("worst") },
    PointBand { floor: 6.5, points: 3.0, advice: None },
    PointBand { floor: 0.0, points: 1.0, advice: None },
];

#[test]
fn point_band_contribution_is_first_match() {
    let band = bands::match_points(POINTS, 11.0).unwrap();
    assert_eq!(band.points, 10.0);
    assert_eq!(band.advice, Some("worst"));

    let band = bands::match_points(POINTS, 7.0).unwrap();
    assert_eq!(band.points, 3.0);
    assert!(band.advice.is_none());

    assert!(bands::match_points(POINTS, -1.0).is_none());
}
