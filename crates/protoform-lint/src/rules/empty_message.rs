//! Rule: empty-message
//!
//! Warns when a struct produced a message without a single exported field.

use protoform_core::TypeCatalog;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct EmptyMessageRule;

impl LintRule for EmptyMessageRule {
    fn id(&self) -> &str {
        "empty-message"
    }

    fn description(&self) -> &str {
        "Messages should carry at least one exported field"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, catalog: &TypeCatalog) -> Vec<LintDiagnostic> {
        catalog
            .messages()
            .iter()
            .filter(|m| m.fields().is_empty())
            .map(|m| {
                LintDiagnostic::new(
                    self,
                    catalog,
                    &m.name,
                    format!("Message \"{}\" has no exported fields", m.name),
                )
            })
            .collect()
    }
}
