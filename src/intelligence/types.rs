use serde::{Deserialize, Serialize};

use crate::models::{PatternType, RiskDomain, Severity};

// ---------------------------------------------------------------------------
// LabPattern
// ---------------------------------------------------------------------------

/// A named cross-marker finding produced by one detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabPattern {
    pub pattern_type: PatternType,
    pub description: String,
    pub severity: Severity,
    /// Fixed per detector, in [0, 1].
    pub confidence: f64,
    /// Test names of the markers that met their own condition, in check order.
    pub related_tests: Vec<String>,
    pub clinical_significance: String,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// RiskScores
// ---------------------------------------------------------------------------

/// Normalized 0-100 score per clinical domain.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub cardiovascular: f64,
    pub diabetes: f64,
    pub kidney_disease: f64,
}

impl RiskScores {
    pub fn get(&self, domain: RiskDomain) -> f64 {
        match domain {
            RiskDomain::Cardiovascular => self.cardiovascular,
            RiskDomain::Diabetes => self.diabetes,
            RiskDomain::KidneyDisease => self.kidney_disease,
        }
    }

    /// Domains with a non-zero score, highest first. Ties keep domain order.
    pub fn elevated(&self) -> Vec<(RiskDomain, f64)> {
        let mut domains: Vec<(RiskDomain, f64)> = RiskDomain::ALL
            .iter()
            .map(|d| (*d, self.get(*d)))
            .filter(|(_, score)| *score > 0.0)
            .collect();
        domains.sort_by(|a, b| b.1.total_cmp(&a.1));
        domains
    }
}

// ---------------------------------------------------------------------------
// LabAnalysis
// ---------------------------------------------------------------------------

/// Full result of one analysis call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabAnalysis {
    pub patterns: Vec<LabPattern>,
    pub risk_scores: RiskScores,
}

impl LabAnalysis {
    /// Highest severity among the detected patterns.
    pub fn max_severity(&self) -> Option<Severity> {
        self.patterns.iter().map(|p| p.severity).max()
    }
}
