//! Ordered, declarative rule tables.
//!
//! Two evaluation disciplines exist in the scoring engines and must not be
//! conflated:
//!
//! * first-match-wins classification over a single value (`FloorBand`,
//!   `CeilingBand`) — visual acuity, IOP, stage lookups;
//! * cumulative scoring, where every factor contributes the points of its
//!   first matching band and the summed total is then classified
//!   (`PointBand` followed by a `CeilingBand` lookup) — diabetic
//!   retinopathy risk, glaucoma.

/// A band matching `value >= floor`. Tables are ordered by descending
/// floor; the first match wins.
pub struct FloorBand<T: 'static> {
    pub floor: f64,
    pub outcome: T,
}

/// A band matching `value <= ceiling`. Tables are ordered by ascending
/// ceiling; the first match wins.
pub struct CeilingBand<T: 'static> {
    pub ceiling: f64,
    pub outcome: T,
}

/// A weighted contribution band for cumulative scoring: the first band
/// whose floor the value reaches contributes `points`, optionally with a
/// band-specific recommendation.
pub struct PointBand {
    pub floor: f64,
    pub points: f64,
    pub advice: Option<&'static str>,
}

/// First band (descending floors) with `value >= floor`, if any.
pub fn match_floor<'a, T>(bands: &'a [FloorBand<T>], value: f64) -> Option<&'a T> {
    bands.iter().find(|b| value >= b.floor).map(|b| &b.outcome)
}

/// First band (ascending ceilings) with `value <= ceiling`, if any.
pub fn match_ceiling<'a, T>(bands: &'a [CeilingBand<T>], value: f64) -> Option<&'a T> {
    bands
        .iter()
        .find(|b| value <= b.ceiling)
        .map(|b| &b.outcome)
}

/// First matching contribution band for `value`, if any. The caller adds
/// the returned points to its accumulator and appends the advice string,
/// when present, to its recommendation list.
pub fn match_points(bands: &[PointBand], value: f64) -> Option<&PointBand> {
    bands.iter().find(|b| value >= b.floor)
}
