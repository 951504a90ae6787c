//! Rule: enum-value-gaps
//!
//! Flags enums whose distinct values are not contiguous.

use protoform_core::{Enum, TypeCatalog};

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct EnumValueGapsRule;

impl LintRule for EnumValueGapsRule {
    fn id(&self) -> &str {
        "enum-value-gaps"
    }

    fn description(&self) -> &str {
        "Enum values should form a contiguous range"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, catalog: &TypeCatalog) -> Vec<LintDiagnostic> {
        catalog
            .enums()
            .filter_map(|e| first_gap(e).map(|(after, next)| (e, after, next)))
            .map(|(e, after, next)| {
                LintDiagnostic::new(
                    self,
                    catalog,
                    &e.name,
                    format!("Enum \"{}\" skips from {after} to {next}", e.name),
                )
            })
            .collect()
    }
}

/// First pair of neighbouring values (in canonical order) more than one apart.
fn first_gap(e: &Enum) -> Option<(i64, i64)> {
    e.values()
        .windows(2)
        .map(|pair| (pair[0].value(), pair[1].value()))
        .find(|(a, b)| b.saturating_sub(*a) > 1)
}
