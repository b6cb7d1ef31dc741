use std::time::Instant;

use crate::models::LabValue;

use super::detection::{
    detect_cardiac, detect_diabetic, detect_kidney_dysfunction, detect_liver_dysfunction,
    detect_metabolic_syndrome, detect_systemic_inflammation, detect_thyroid,
};
use super::scoring::score_risks;
use super::types::{LabAnalysis, LabPattern};

type Detector = fn(&[LabValue]) -> Option<LabPattern>;

/// Detectors in output order.
const DETECTORS: [Detector; 7] = [
    detect_metabolic_syndrome,
    detect_kidney_dysfunction,
    detect_liver_dysfunction,
    detect_cardiac,
    detect_thyroid,
    detect_diabetic,
    detect_systemic_inflammation,
];

/// Run every detector over the batch and keep the patterns found.
/// Output order is the detector order, independent of input order.
pub fn detect_all(batch: &[LabValue]) -> Vec<LabPattern> {
    DETECTORS.iter().filter_map(|detect| detect(batch)).collect()
}

/// Detect patterns and score risks for one batch.
pub fn analyze(batch: &[LabValue]) -> LabAnalysis {
    let start = Instant::now();

    let patterns = detect_all(batch);
    let risk_scores = score_risks(batch);

    // Counts and tags only: lab values never reach the logs.
    tracing::debug!(
        lab_values = batch.len(),
        patterns = patterns.len(),
        tags = ?patterns.iter().map(|p| p.pattern_type.as_str()).collect::<Vec<_>>(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Lab analysis complete"
    );

    LabAnalysis {
        patterns,
        risk_scores,
    }
}
