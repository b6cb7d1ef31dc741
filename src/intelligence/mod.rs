//! Lab pattern detection and risk scoring.
//!
//! Pure, synchronous functions over a batch of [`LabValue`](crate::models::LabValue)s:
//! markers are resolved through ordered alias tables, result strings are reduced to
//! their first numeric token, seven detectors name cross-marker patterns and the
//! scorer grades three risk domains. Nothing is cached between calls.

pub mod detection;
pub mod engine;
pub mod helpers;
pub mod markers;
pub mod messages;
pub mod scoring;
pub mod types;

pub use engine::{analyze, detect_all};
pub use helpers::{extract_number, parse_number};
pub use markers::{resolve, resolve_marker, Marker};
pub use scoring::score_risks;
pub use types::{LabAnalysis, LabPattern, RiskScores};
