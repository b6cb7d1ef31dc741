use crate::models::{PatternType, Severity};

/// Patient-facing text attached to a detected pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternText {
    pub description: String,
    pub clinical_significance: String,
    pub recommendations: Vec<String>,
}

/// Message template builder for consistent, calm framing.
/// No alarm wording; every pattern ends in a concrete next step with a clinician.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Metabolic syndrome: `criteria_met` of the three lab criteria.
    pub fn metabolic_syndrome(criteria_met: usize) -> PatternText {
        PatternText {
            description: format!(
                "{} of 3 lab criteria for metabolic syndrome are present \
                 (elevated glucose, low HDL, elevated triglycerides).",
                criteria_met,
            ),
            clinical_significance: "This combination is associated with a higher risk of \
                heart disease, stroke and type 2 diabetes."
                .into(),
            recommendations: strings(&[
                "Discuss these results with your doctor at your next visit.",
                "Ask whether a waist measurement and blood pressure check are due.",
                "Regular physical activity and dietary changes are commonly advised.",
            ]),
        }
    }

    pub fn kidney_dysfunction(severity: Severity) -> PatternText {
        let mut recommendations = strings(&[
            "Review these kidney results with your doctor.",
            "Ask whether any of your medications need a dose adjustment.",
            "A repeat test is often used to confirm the trend.",
        ]);
        if severity == Severity::Critical {
            recommendations.insert(0, "Please contact your doctor soon about these results.".into());
        }
        PatternText {
            description: "Creatinine or estimated GFR is outside the expected range, \
                suggesting reduced kidney filtration."
                .into(),
            clinical_significance: "Reduced kidney function affects how the body clears waste \
                and many medications."
                .into(),
            recommendations,
        }
    }

    pub fn liver_dysfunction(markers_elevated: usize) -> PatternText {
        PatternText {
            description: format!(
                "{} of 3 liver enzymes (ALT, AST, alkaline phosphatase) are elevated.",
                markers_elevated,
            ),
            clinical_significance: "Several elevated liver enzymes together can indicate \
                liver inflammation or bile flow problems."
                .into(),
            recommendations: strings(&[
                "Discuss these liver results with your doctor.",
                "Mention any alcohol use, supplements or new medications.",
                "Follow-up liver tests or imaging may be suggested.",
            ]),
        }
    }

    pub fn acute_cardiac_injury() -> PatternText {
        PatternText {
            description: "Troponin is above the expected range.".into(),
            clinical_significance: "Elevated troponin indicates heart muscle injury and \
                needs prompt clinical assessment."
                .into(),
            recommendations: strings(&[
                "Please contact your doctor or emergency services promptly, \
                 especially if you have chest pain or shortness of breath.",
                "Bring this result with you to your appointment.",
            ]),
        }
    }

    pub fn cardiac_risk_factors(factors: usize) -> PatternText {
        PatternText {
            description: format!(
                "{} of 3 cholesterol risk factors are present \
                 (high total cholesterol, high LDL, low HDL).",
                factors,
            ),
            clinical_significance: "This lipid profile is associated with increased \
                cardiovascular risk over time."
                .into(),
            recommendations: strings(&[
                "Discuss your cholesterol results with your doctor.",
                "Ask whether a cardiovascular risk assessment is appropriate.",
            ]),
        }
    }

    pub fn hypothyroidism(severity: Severity) -> PatternText {
        PatternText {
            description: "TSH is above the expected range, which suggests an underactive thyroid."
                .into(),
            clinical_significance: if severity >= Severity::High {
                "A markedly raised TSH usually reflects clinically significant hypothyroidism."
                    .into()
            } else {
                "A mildly raised TSH can reflect early or subclinical hypothyroidism.".into()
            },
            recommendations: strings(&[
                "Discuss these thyroid results with your doctor.",
                "Free T4 is often checked to confirm the finding.",
            ]),
        }
    }

    pub fn hyperthyroidism(severity: Severity) -> PatternText {
        PatternText {
            description: "TSH is below the expected range, which suggests an overactive thyroid."
                .into(),
            clinical_significance: if severity >= Severity::High {
                "A strongly suppressed TSH usually reflects clinically significant \
                 hyperthyroidism."
                    .into()
            } else {
                "A mildly low TSH can reflect early or subclinical hyperthyroidism.".into()
            },
            recommendations: strings(&[
                "Discuss these thyroid results with your doctor.",
                "Free T4 and T3 are often checked to confirm the finding.",
            ]),
        }
    }

    pub fn diabetes() -> PatternText {
        PatternText {
            description: "Glucose or HbA1c is in the range consistent with diabetes.".into(),
            clinical_significance: "Blood sugar at this level over time can affect the heart, \
                kidneys, eyes and nerves."
                .into(),
            recommendations: strings(&[
                "Review these results with your doctor; a confirmatory test is usual.",
                "Ask about a diabetes care plan and regular HbA1c monitoring.",
            ]),
        }
    }

    pub fn pre_diabetes() -> PatternText {
        PatternText {
            description: "Glucose or HbA1c is above normal but below the diabetes range.".into(),
            clinical_significance: "Prediabetes raises the chance of developing type 2 \
                diabetes and can often be reversed."
                .into(),
            recommendations: strings(&[
                "Discuss these results at your next appointment.",
                "Diet, activity and weight changes are commonly advised.",
                "Ask when your glucose or HbA1c should be rechecked.",
            ]),
        }
    }

    pub fn systemic_inflammation(markers_elevated: usize) -> PatternText {
        PatternText {
            description: format!(
                "{} of 3 inflammation markers (CRP, ESR, white blood cells) are elevated.",
                markers_elevated,
            ),
            clinical_significance: "Several raised inflammation markers together point to an \
                active inflammatory process or infection."
                .into(),
            recommendations: strings(&[
                "Discuss these results with your doctor, along with any recent symptoms.",
                "Repeat testing is often used to see whether the markers settle.",
            ]),
        }
    }

    /// Short label for a pattern type, for listings.
    pub fn label(pattern_type: PatternType) -> &'static str {
        match pattern_type {
            PatternType::MetabolicSyndrome => "Metabolic syndrome",
            PatternType::KidneyDysfunction => "Kidney dysfunction",
            PatternType::LiverDysfunction => "Liver dysfunction",
            PatternType::AcuteCardiacInjury => "Acute cardiac injury",
            PatternType::CardiacRiskFactors => "Cardiac risk factors",
            PatternType::Hypothyroidism => "Hypothyroidism",
            PatternType::Hyperthyroidism => "Hyperthyroidism",
            PatternType::Diabetes => "Diabetes",
            PatternType::PreDiabetes => "Prediabetes",
            PatternType::SystemicInflammation => "Systemic inflammation",
            PatternType::Anemia => "Anemia",
            PatternType::ElectrolyteImbalance => "Electrolyte imbalance",
            PatternType::NutritionalDeficiency => "Nutritional deficiency",
            PatternType::InfectionMarker => "Infection marker",
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
