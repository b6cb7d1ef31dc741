use std::sync::LazyLock;

use regex::Regex;

use crate::models::LabValue;

use super::markers::{resolve_marker, Marker};

/// First numeric token: digits with at most one decimal point, or a bare
/// leading-decimal form like ".5" (compiled once via LazyLock).
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*|\.\d+").expect("numeric token regex is valid"));

/// Parse the first numeric token in a free-form result string.
/// Handles: "145 mg/dL", "7.2%", "<0.01", ".5", "Positive (12)".
/// Returns `None` when the string carries no digits ("Normal", "").
pub fn parse_number(result: &str) -> Option<f64> {
    RE_NUMBER
        .find(result)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Same as [`parse_number`] but unparseable results read as `0.0`.
///
/// Detectors and the risk scorer use this form, so a result of "Normal"
/// behaves exactly like a reported zero.
pub fn extract_number(result: &str) -> f64 {
    parse_number(result).unwrap_or(0.0)
}

/// A resolved marker with its numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading<'a> {
    pub test_name: &'a str,
    pub value: f64,
}

/// Resolve a marker and extract its value in one step.
pub fn read_marker(batch: &[LabValue], marker: Marker) -> Option<Reading<'_>> {
    resolve_marker(batch, marker).map(|lab| Reading {
        test_name: lab.test_name.as_str(),
        value: extract_number(&lab.result),
    })
}

/// Convert points to a 0-100 score.
pub fn normalize_score(points: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (f64::from(points) / f64::from(denominator) * 100.0).min(100.0)
}
