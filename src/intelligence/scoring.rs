//! Per-domain risk scores.
//!
//! These thresholds overlap with the pattern detectors on purpose but are a
//! separate rule set: detectors name a finding, the scorer grades a risk axis
//! with its own cutoffs and denominators. Keep the two independent.

use crate::models::LabValue;

use super::helpers::{normalize_score, read_marker};
use super::markers::Marker;
use super::types::RiskScores;

const CARDIOVASCULAR_MAX_POINTS: u32 = 7;
const DIABETES_MAX_POINTS: u32 = 10;
const KIDNEY_MAX_POINTS: u32 = 10;

/// Compute all three domain scores for a batch.
pub fn score_risks(batch: &[LabValue]) -> RiskScores {
    RiskScores {
        cardiovascular: cardiovascular_score(batch),
        diabetes: diabetes_score(batch),
        kidney_disease: kidney_score(batch),
    }
}

/// Total cholesterol > 240: +2, HDL < 40: +2, LDL > 160: +3, out of 7.
pub fn cardiovascular_score(batch: &[LabValue]) -> f64 {
    let mut points = 0;
    points += points_if(batch, Marker::TotalCholesterol, |v| v > 240.0, 2);
    points += points_if(batch, Marker::Hdl, |v| v < 40.0, 2);
    points += points_if(batch, Marker::Ldl, |v| v > 160.0, 3);
    normalize_score(points, CARDIOVASCULAR_MAX_POINTS)
}

/// Glucose >= 126: +5 (>= 100: +3), HbA1c >= 6.5: +5 (>= 5.7: +3), out of 10.
pub fn diabetes_score(batch: &[LabValue]) -> f64 {
    let mut points = 0;
    points += tiered_points(batch, Marker::Glucose, |v| v >= 126.0, |v| v >= 100.0);
    points += tiered_points(batch, Marker::HbA1c, |v| v >= 6.5, |v| v >= 5.7);
    normalize_score(points, DIABETES_MAX_POINTS)
}

/// Creatinine > 2.0: +5 (> 1.3: +3), GFR < 30: +5 (< 60: +3), out of 10.
pub fn kidney_score(batch: &[LabValue]) -> f64 {
    let mut points = 0;
    points += tiered_points(batch, Marker::Creatinine, |v| v > 2.0, |v| v > 1.3);
    points += tiered_points(batch, Marker::Gfr, |v| v < 30.0, |v| v < 60.0);
    normalize_score(points, KIDNEY_MAX_POINTS)
}

fn points_if(batch: &[LabValue], marker: Marker, condition: impl Fn(f64) -> bool, points: u32) -> u32 {
    match read_marker(batch, marker) {
        Some(reading) if condition(reading.value) => points,
        _ => 0,
    }
}

/// 5 points for the severe cutoff, else 3 for the elevated one.
fn tiered_points(
    batch: &[LabValue],
    marker: Marker,
    severe: impl Fn(f64) -> bool,
    elevated: impl Fn(f64) -> bool,
) -> u32 {
    match read_marker(batch, marker) {
        Some(reading) if severe(reading.value) => 5,
        Some(reading) if elevated(reading.value) => 3,
        _ => 0,
    }
}
