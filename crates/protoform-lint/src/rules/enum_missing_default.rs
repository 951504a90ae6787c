//! Rule: enum-missing-default
//!
//! Reports enums without a zero value; the rendered document gets a
//! synthesized `UNKOWN = 0` member for them.

use protoform_core::catalogs::MISSING_DEFAULT_NAME;
use protoform_core::TypeCatalog;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct EnumMissingDefaultRule;

impl LintRule for EnumMissingDefaultRule {
    fn id(&self) -> &str {
        "enum-missing-default"
    }

    fn description(&self) -> &str {
        "Enums should declare a value equal to zero"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, catalog: &TypeCatalog) -> Vec<LintDiagnostic> {
        catalog
            .enums()
            .filter(|e| e.missing_default())
            .map(|e| {
                LintDiagnostic::new(
                    self,
                    catalog,
                    &e.name,
                    format!(
                        "Enum \"{}\" has no zero value; \"{MISSING_DEFAULT_NAME} = 0\" will be synthesized",
                        e.name
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn reports_enum_without_zero() {
        let input = catalog(vec![
            enum_const("Color", "ColorRed", "1"),
            enum_const("Color", "ColorBlue", "2"),
        ]);
        let results = EnumMissingDefaultRule.check(&input);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].target, "Color");
        assert!(results[0].message.contains("UNKOWN = 0"));
    }

    #[test]
    fn accepts_enum_with_zero() {
        let input = catalog(vec![
            enum_const("Color", "ColorNone", "0"),
            enum_const("Color", "ColorRed", "1"),
        ]);
        assert!(EnumMissingDefaultRule.check(&input).is_empty());
    }
}
