use serde::{Deserialize, Serialize};

/// One reported lab measurement, already normalized by the retrieval layer.
/// `result` is free-form and may carry the unit or non-numeric text
/// ("145 mg/dL", "Normal", "7.2%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabValue {
    pub test_name: String,
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl LabValue {
    /// Build a value with only a test name and a result string.
    pub fn new(test_name: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            result: result.into(),
            unit: None,
            reference_range: None,
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_optional_fields_missing() {
        let lab: LabValue =
            serde_json::from_str(r#"{"testName":"Fasting Glucose","result":"145 mg/dL"}"#)
                .unwrap();
        assert_eq!(lab, LabValue::new("Fasting Glucose", "145 mg/dL"));
    }

    #[test]
    fn deserializes_all_fields() {
        let lab: LabValue = serde_json::from_str(
            r#"{"testName":"TSH","result":"12.1","unit":"mIU/L",
                "referenceRange":"0.4-4.5","status":"final"}"#,
        )
        .unwrap();
        assert_eq!(lab.unit.as_deref(), Some("mIU/L"));
        assert_eq!(lab.reference_range.as_deref(), Some("0.4-4.5"));
        assert_eq!(lab.status.as_deref(), Some("final"));
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let json = serde_json::to_value(LabValue::new("CRP", "4.0 mg/L")).unwrap();
        assert_eq!(json["testName"], "CRP");
        assert!(json.get("unit").is_none());
    }
}
