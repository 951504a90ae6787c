//! Rule: message-size
//!
//! Warns when a message has too many fields (default threshold: 20).

use protoform_core::TypeCatalog;

use crate::{LintDiagnostic, LintRule, LintSeverity};

const DEFAULT_MAX_FIELDS: usize = 20;

pub struct MessageSizeRule {
    pub max_fields: usize,
}

impl Default for MessageSizeRule {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
        }
    }
}

impl LintRule for MessageSizeRule {
    fn id(&self) -> &str {
        "message-size"
    }

    fn description(&self) -> &str {
        "Messages should not have too many fields"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, catalog: &TypeCatalog) -> Vec<LintDiagnostic> {
        catalog
            .messages()
            .iter()
            .filter(|m| m.fields().len() > self.max_fields)
            .map(|m| {
                LintDiagnostic::new(
                    self,
                    catalog,
                    &m.name,
                    format!(
                        "Message \"{}\" has {} fields (max {}). Consider splitting the struct",
                        m.name,
                        m.fields().len(),
                        self.max_fields
                    ),
                )
            })
            .collect()
    }
}
