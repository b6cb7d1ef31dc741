use crate::models::LabValue;

/// Clinical markers the rule engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Glucose,
    HbA1c,
    Hdl,
    Ldl,
    TotalCholesterol,
    Triglycerides,
    Creatinine,
    Gfr,
    Alt,
    Ast,
    AlkalinePhosphatase,
    Troponin,
    Tsh,
    FreeT4,
    FreeT3,
    Crp,
    Esr,
    Wbc,
}

impl Marker {
    /// Accepted names for the marker, in match priority order.
    ///
    /// Matching is plain substring in both directions, so a short alias can
    /// bind a longer, unrelated name ("ast" inside "fasting glucose"). Short
    /// abbreviations that occur inside common test names are only accepted
    /// through a compound alias ("ast/sgot"), which still contains a bare
    /// "AST" test name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Glucose => &["glucose", "fasting glucose", "blood sugar"],
            Self::HbA1c => &["hba1c", "a1c", "glycated", "glycohemoglobin"],
            Self::Hdl => &["hdl"],
            Self::Ldl => &["ldl"],
            Self::TotalCholesterol => {
                &["total cholesterol", "cholesterol, total", "cholesterol total"]
            }
            Self::Triglycerides => &["triglyceride", "trig"],
            Self::Creatinine => &["creatinine", "serum creatinine"],
            Self::Gfr => &["egfr", "gfr", "glomerular filtration"],
            Self::Alt => &["alt", "alanine aminotransferase", "sgpt"],
            Self::Ast => &["aspartate aminotransferase", "sgot", "ast/sgot"],
            Self::AlkalinePhosphatase => &["alkaline phosphatase", "alp", "alk phos"],
            Self::Troponin => &["troponin", "ctni", "ctnt"],
            Self::Tsh => &["tsh", "thyroid stimulating hormone", "thyrotropin"],
            Self::FreeT4 => &["free t4", "ft4", "t4", "thyroxine"],
            Self::FreeT3 => &["free t3", "ft3", "t3", "triiodothyronine"],
            Self::Crp => &["crp", "c-reactive protein", "c reactive protein"],
            Self::Esr => &["esr", "sed rate", "sedimentation rate"],
            Self::Wbc => &["wbc", "white blood cell", "leukocyte"],
        }
    }
}

/// Find the first lab value matching any alias.
///
/// Aliases are tried in order; for each alias the batch is scanned in input
/// order. A value matches when its lowercased test name contains the alias or
/// the alias contains the test name. Empty names and aliases never match.
pub fn resolve<'a, S: AsRef<str>>(batch: &'a [LabValue], aliases: &[S]) -> Option<&'a LabValue> {
    aliases.iter().find_map(|alias| {
        let alias = alias.as_ref().trim().to_lowercase();
        if alias.is_empty() {
            return None;
        }
        batch.iter().find(|lab| names_match(&lab.test_name, &alias))
    })
}

/// Resolve a canonical marker through its alias table.
pub fn resolve_marker(batch: &[LabValue], marker: Marker) -> Option<&LabValue> {
    resolve(batch, marker.aliases())
}

fn names_match(test_name: &str, alias_lower: &str) -> bool {
    let name = test_name.trim().to_lowercase();
    if name.is_empty() {
        return false;
    }
    name.contains(alias_lower) || alias_lower.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(names: &[&str]) -> Vec<LabValue> {
        names.iter().map(|n| LabValue::new(*n, "1")).collect()
    }

    #[test]
    fn resolves_case_insensitively() {
        let labs = batch(&["FASTING GLUCOSE"]);
        let found = resolve(&labs, &["glucose"]).unwrap();
        assert_eq!(found.test_name, "FASTING GLUCOSE");
    }

    #[test]
    fn alias_containing_test_name_matches() {
        let labs = batch(&["Cholesterol"]);
        let found = resolve_marker(&labs, Marker::TotalCholesterol).unwrap();
        assert_eq!(found.test_name, "Cholesterol");
    }

    #[test]
    fn first_alias_wins_over_batch_order() {
        let labs = batch(&["GFR (MDRD)", "eGFR (CKD-EPI)"]);
        let found = resolve(&labs, &["egfr", "gfr"]).unwrap();
        assert_eq!(found.test_name, "eGFR (CKD-EPI)");
    }

    #[test]
    fn first_value_in_batch_wins_for_same_alias() {
        let labs = vec![
            LabValue::new("Glucose", "90"),
            LabValue::new("Glucose, Fasting", "130"),
        ];
        let found = resolve_marker(&labs, Marker::Glucose).unwrap();
        assert_eq!(found.result, "90");
    }

    #[test]
    fn absent_when_nothing_matches() {
        let labs = batch(&["Sodium", "Potassium"]);
        assert!(resolve_marker(&labs, Marker::Troponin).is_none());
        assert!(resolve::<&str>(&labs, &[]).is_none());
        assert!(resolve_marker(&[], Marker::Glucose).is_none());
    }

    #[test]
    fn empty_names_and_aliases_never_match() {
        let labs = batch(&["", "  "]);
        assert!(resolve_marker(&labs, Marker::Glucose).is_none());
        let labs = batch(&["Sodium"]);
        assert!(resolve(&labs, &[""]).is_none());
    }

    #[test]
    fn hdl_does_not_resolve_as_total_cholesterol() {
        let labs = batch(&["HDL Cholesterol"]);
        assert!(resolve_marker(&labs, Marker::TotalCholesterol).is_none());
        assert!(resolve_marker(&labs, Marker::Hdl).is_some());
    }

    #[test]
    fn fasting_glucose_never_binds_as_ast() {
        let labs = batch(&["Fasting Glucose", "AST"]);
        assert_eq!(resolve_marker(&labs, Marker::Ast).unwrap().test_name, "AST");
        assert_eq!(
            resolve_marker(&labs, Marker::Glucose).unwrap().test_name,
            "Fasting Glucose"
        );

        let labs = batch(&["Fasting Glucose", "Fasting Insulin"]);
        assert!(resolve_marker(&labs, Marker::Ast).is_none());
    }

    #[test]
    fn ast_resolves_by_common_spellings() {
        for name in ["AST", "ast", "SGOT", "AST (SGOT)", "Aspartate Aminotransferase", "AST/SGOT"] {
            let labs = batch(&["Glucose, Fasting", name]);
            assert_eq!(resolve_marker(&labs, Marker::Ast).unwrap().test_name, name);
        }
    }

    #[test]
    fn vldl_listed_first_binds_as_ldl() {
        // "ldl" is a substring of "vldl"; batch order decides.
        let labs = batch(&["VLDL Cholesterol", "LDL Cholesterol"]);
        assert_eq!(
            resolve_marker(&labs, Marker::Ldl).unwrap().test_name,
            "VLDL Cholesterol"
        );
        let labs = batch(&["LDL Cholesterol", "VLDL Cholesterol"]);
        assert_eq!(
            resolve_marker(&labs, Marker::Ldl).unwrap().test_name,
            "LDL Cholesterol"
        );
    }

    #[test]
    fn accepts_owned_alias_lists() {
        let labs = batch(&["hs-CRP"]);
        let aliases = vec!["crp".to_string()];
        assert!(resolve(&labs, &aliases).is_some());
    }
}
