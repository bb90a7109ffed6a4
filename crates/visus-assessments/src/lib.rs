//! visus-assessments
//!
//! Deterministic clinical scoring engines for ophthalmic biometrics. Each
//! module converts a typed measurement record into a structured assessment
//! (classification, numeric score, risk level, recommendations) through
//! ordered rule-band evaluation. Every entry point is pure and stateless;
//! identical input yields bit-identical output.

pub mod assessments;
pub mod error;
