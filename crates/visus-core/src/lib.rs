//! visus-core
//!
//! Shared vocabulary of the Visus scoring system: the ordered risk-level
//! enum, declarative threshold-band tables, and physiologic measurement
//! ranges. Pure data — no I/O, no async, no state.

pub mod bands;
pub mod range;
pub mod risk;

pub use bands::{CeilingBand, FloorBand, PointBand};
pub use range::PhysiologicRange;
pub use risk::RiskLevel;
