use crate::models::{LabValue, PatternType, Severity};

use super::helpers::{read_marker, Reading};
use super::markers::Marker;
use super::messages::{MessageTemplates, PatternText};
use super::types::LabPattern;

// Fixed confidence per detector.
pub const METABOLIC_SYNDROME_CONFIDENCE: f64 = 0.85;
pub const KIDNEY_DYSFUNCTION_CONFIDENCE: f64 = 0.90;
pub const LIVER_DYSFUNCTION_CONFIDENCE: f64 = 0.80;
pub const ACUTE_CARDIAC_INJURY_CONFIDENCE: f64 = 0.95;
pub const CARDIAC_RISK_FACTORS_CONFIDENCE: f64 = 0.75;
pub const THYROID_CONFIDENCE: f64 = 0.85;
pub const DIABETES_CONFIDENCE: f64 = 0.90;
pub const PRE_DIABETES_CONFIDENCE: f64 = 0.80;
pub const SYSTEMIC_INFLAMMATION_CONFIDENCE: f64 = 0.70;

/// Every pattern the detectors can emit, in aggregator order.
pub const EMITTED_PATTERNS: [(PatternType, f64); 10] = [
    (PatternType::MetabolicSyndrome, METABOLIC_SYNDROME_CONFIDENCE),
    (PatternType::KidneyDysfunction, KIDNEY_DYSFUNCTION_CONFIDENCE),
    (PatternType::LiverDysfunction, LIVER_DYSFUNCTION_CONFIDENCE),
    (PatternType::AcuteCardiacInjury, ACUTE_CARDIAC_INJURY_CONFIDENCE),
    (PatternType::CardiacRiskFactors, CARDIAC_RISK_FACTORS_CONFIDENCE),
    (PatternType::Hypothyroidism, THYROID_CONFIDENCE),
    (PatternType::Hyperthyroidism, THYROID_CONFIDENCE),
    (PatternType::Diabetes, DIABETES_CONFIDENCE),
    (PatternType::PreDiabetes, PRE_DIABETES_CONFIDENCE),
    (PatternType::SystemicInflammation, SYSTEMIC_INFLAMMATION_CONFIDENCE),
];

/// Collects the test names of markers that met their own condition.
#[derive(Default)]
struct Criteria<'a> {
    related: Vec<&'a str>,
}

impl<'a> Criteria<'a> {
    /// Record `reading` when present and `condition` holds on its value.
    fn check(&mut self, reading: Option<Reading<'a>>, condition: impl Fn(f64) -> bool) -> bool {
        match reading {
            Some(r) if condition(r.value) => {
                self.related.push(r.test_name);
                true
            }
            _ => false,
        }
    }

    fn count(&self) -> usize {
        self.related.len()
    }

    fn into_names(self) -> Vec<String> {
        self.related.into_iter().map(str::to_string).collect()
    }
}

fn build_pattern(
    pattern_type: PatternType,
    severity: Severity,
    confidence: f64,
    related_tests: Vec<String>,
    text: PatternText,
) -> LabPattern {
    LabPattern {
        pattern_type,
        description: text.description,
        severity,
        confidence,
        related_tests,
        clinical_significance: text.clinical_significance,
        recommendations: text.recommendations,
    }
}

// ---------------------------------------------------------------------------
// [1] METABOLIC SYNDROME
// ---------------------------------------------------------------------------

/// Two or more of: glucose >= 100, HDL < 40, triglycerides >= 150.
pub fn detect_metabolic_syndrome(batch: &[LabValue]) -> Option<LabPattern> {
    let mut criteria = Criteria::default();
    criteria.check(read_marker(batch, Marker::Glucose), |v| v >= 100.0);
    criteria.check(read_marker(batch, Marker::Hdl), |v| v < 40.0);
    criteria.check(read_marker(batch, Marker::Triglycerides), |v| v >= 150.0);

    let met = criteria.count();
    if met < 2 {
        return None;
    }
    let severity = if met >= 3 {
        Severity::High
    } else {
        Severity::Moderate
    };

    Some(build_pattern(
        PatternType::MetabolicSyndrome,
        severity,
        METABOLIC_SYNDROME_CONFIDENCE,
        criteria.into_names(),
        MessageTemplates::metabolic_syndrome(met),
    ))
}

// ---------------------------------------------------------------------------
// [2] KIDNEY DYSFUNCTION
// ---------------------------------------------------------------------------

/// Creatinine > 1.5 or GFR < 60. Critical when creatinine > 3.0 or GFR < 30.
pub fn detect_kidney_dysfunction(batch: &[LabValue]) -> Option<LabPattern> {
    let creatinine = read_marker(batch, Marker::Creatinine);
    let gfr = read_marker(batch, Marker::Gfr);

    let mut criteria = Criteria::default();
    let creatinine_high = criteria.check(creatinine, |v| v > 1.5);
    let gfr_low = criteria.check(gfr, |v| v < 60.0);

    if !creatinine_high && !gfr_low {
        return None;
    }

    let creatinine_critical = creatinine_high && creatinine.is_some_and(|r| r.value > 3.0);
    let gfr_critical = gfr_low && gfr.is_some_and(|r| r.value < 30.0);
    let severity = if creatinine_critical || gfr_critical {
        Severity::Critical
    } else {
        Severity::High
    };

    Some(build_pattern(
        PatternType::KidneyDysfunction,
        severity,
        KIDNEY_DYSFUNCTION_CONFIDENCE,
        criteria.into_names(),
        MessageTemplates::kidney_dysfunction(severity),
    ))
}

// ---------------------------------------------------------------------------
// [3] LIVER DYSFUNCTION
// ---------------------------------------------------------------------------

/// Two or more of: ALT > 40, AST > 40, alkaline phosphatase > 120.
pub fn detect_liver_dysfunction(batch: &[LabValue]) -> Option<LabPattern> {
    let mut criteria = Criteria::default();
    criteria.check(read_marker(batch, Marker::Alt), |v| v > 40.0);
    criteria.check(read_marker(batch, Marker::Ast), |v| v > 40.0);
    criteria.check(read_marker(batch, Marker::AlkalinePhosphatase), |v| v > 120.0);

    let elevated = criteria.count();
    if elevated < 2 {
        return None;
    }
    let severity = if elevated >= 3 {
        Severity::High
    } else {
        Severity::Moderate
    };

    Some(build_pattern(
        PatternType::LiverDysfunction,
        severity,
        LIVER_DYSFUNCTION_CONFIDENCE,
        criteria.into_names(),
        MessageTemplates::liver_dysfunction(elevated),
    ))
}

// ---------------------------------------------------------------------------
// [4] CARDIAC
// ---------------------------------------------------------------------------

/// Troponin > 0.04 yields acute cardiac injury and skips the risk-factor
/// check. Otherwise two or more of: total cholesterol > 240, LDL > 160,
/// HDL < 40.
pub fn detect_cardiac(batch: &[LabValue]) -> Option<LabPattern> {
    let mut injury = Criteria::default();
    if injury.check(read_marker(batch, Marker::Troponin), |v| v > 0.04) {
        return Some(build_pattern(
            PatternType::AcuteCardiacInjury,
            Severity::Critical,
            ACUTE_CARDIAC_INJURY_CONFIDENCE,
            injury.into_names(),
            MessageTemplates::acute_cardiac_injury(),
        ));
    }

    let mut criteria = Criteria::default();
    criteria.check(read_marker(batch, Marker::TotalCholesterol), |v| v > 240.0);
    criteria.check(read_marker(batch, Marker::Ldl), |v| v > 160.0);
    criteria.check(read_marker(batch, Marker::Hdl), |v| v < 40.0);

    let factors = criteria.count();
    if factors < 2 {
        return None;
    }

    Some(build_pattern(
        PatternType::CardiacRiskFactors,
        Severity::Moderate,
        CARDIAC_RISK_FACTORS_CONFIDENCE,
        criteria.into_names(),
        MessageTemplates::cardiac_risk_factors(factors),
    ))
}

// ---------------------------------------------------------------------------
// [5] THYROID
// ---------------------------------------------------------------------------

/// TSH > 4.5 is hypothyroid (high above 10); TSH < 0.4 is hyperthyroid
/// (high below 0.1). Free T4/T3 are reported as related tests only.
pub fn detect_thyroid(batch: &[LabValue]) -> Option<LabPattern> {
    let tsh = read_marker(batch, Marker::Tsh)?;

    let (pattern_type, severity, text) = if tsh.value > 4.5 {
        let severity = if tsh.value > 10.0 {
            Severity::High
        } else {
            Severity::Moderate
        };
        (
            PatternType::Hypothyroidism,
            severity,
            MessageTemplates::hypothyroidism(severity),
        )
    } else if tsh.value < 0.4 {
        let severity = if tsh.value < 0.1 {
            Severity::High
        } else {
            Severity::Moderate
        };
        (
            PatternType::Hyperthyroidism,
            severity,
            MessageTemplates::hyperthyroidism(severity),
        )
    } else {
        return None;
    };

    let mut related_tests = vec![tsh.test_name.to_string()];
    for marker in [Marker::FreeT4, Marker::FreeT3] {
        if let Some(reading) = read_marker(batch, marker) {
            related_tests.push(reading.test_name.to_string());
        }
    }

    Some(build_pattern(
        pattern_type,
        severity,
        THYROID_CONFIDENCE,
        related_tests,
        text,
    ))
}

// ---------------------------------------------------------------------------
// [6] DIABETIC
// ---------------------------------------------------------------------------

/// Glucose >= 126 or HbA1c >= 6.5 is diabetes (high); otherwise glucose >= 100
/// or HbA1c >= 5.7 is prediabetes (moderate). The two markers' severities
/// combine by taking the higher.
pub fn detect_diabetic(batch: &[LabValue]) -> Option<LabPattern> {
    let glucose = read_marker(batch, Marker::Glucose);
    let hba1c = read_marker(batch, Marker::HbA1c);

    let glucose_severity = glucose.and_then(|r| tier(r.value, 126.0, 100.0));
    let hba1c_severity = hba1c.and_then(|r| tier(r.value, 6.5, 5.7));
    let severity = glucose_severity.max(hba1c_severity)?;

    let related_tests = [(glucose, glucose_severity), (hba1c, hba1c_severity)]
        .into_iter()
        .filter_map(|(reading, sev)| sev.and(reading))
        .map(|r| r.test_name.to_string())
        .collect();

    let pattern = if severity >= Severity::High {
        build_pattern(
            PatternType::Diabetes,
            severity,
            DIABETES_CONFIDENCE,
            related_tests,
            MessageTemplates::diabetes(),
        )
    } else {
        build_pattern(
            PatternType::PreDiabetes,
            severity,
            PRE_DIABETES_CONFIDENCE,
            related_tests,
            MessageTemplates::pre_diabetes(),
        )
    };
    Some(pattern)
}

/// High at or above `diabetic`, moderate at or above `elevated`.
fn tier(value: f64, diabetic: f64, elevated: f64) -> Option<Severity> {
    if value >= diabetic {
        Some(Severity::High)
    } else if value >= elevated {
        Some(Severity::Moderate)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// [7] SYSTEMIC INFLAMMATION
// ---------------------------------------------------------------------------

/// Two or more of: CRP > 3.0, ESR > 30, WBC > 11.0.
pub fn detect_systemic_inflammation(batch: &[LabValue]) -> Option<LabPattern> {
    let mut criteria = Criteria::default();
    criteria.check(read_marker(batch, Marker::Crp), |v| v > 3.0);
    criteria.check(read_marker(batch, Marker::Esr), |v| v > 30.0);
    criteria.check(read_marker(batch, Marker::Wbc), |v| v > 11.0);

    let elevated = criteria.count();
    if elevated < 2 {
        return None;
    }

    Some(build_pattern(
        PatternType::SystemicInflammation,
        Severity::Moderate,
        SYSTEMIC_INFLAMMATION_CONFIDENCE,
        criteria.into_names(),
        MessageTemplates::systemic_inflammation(elevated),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
