use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde tag of each variant is the same string `as_str` returns.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Variant order is the severity order (derived Ord).
str_enum!(Severity {
    Low => "low",
    Moderate => "moderate",
    High => "high",
    Critical => "critical",
});

str_enum!(PatternType {
    MetabolicSyndrome => "metabolic_syndrome",
    KidneyDysfunction => "kidney_dysfunction",
    LiverDysfunction => "liver_dysfunction",
    AcuteCardiacInjury => "acute_cardiac_injury",
    CardiacRiskFactors => "cardiac_risk_factors",
    Hypothyroidism => "hypothyroidism",
    Hyperthyroidism => "hyperthyroidism",
    Diabetes => "diabetes",
    PreDiabetes => "pre_diabetes",
    SystemicInflammation => "systemic_inflammation",
    // Not emitted by the rule engine; produced by the narrative analyzer.
    Anemia => "anemia",
    ElectrolyteImbalance => "electrolyte_imbalance",
    NutritionalDeficiency => "nutritional_deficiency",
    InfectionMarker => "infection_marker",
});

str_enum!(RiskDomain {
    Cardiovascular => "cardiovascular",
    Diabetes => "diabetes",
    KidneyDisease => "kidneyDisease",
});

impl RiskDomain {
    pub const ALL: [RiskDomain; 3] = [Self::Cardiovascular, Self::Diabetes, Self::KidneyDisease];
}
