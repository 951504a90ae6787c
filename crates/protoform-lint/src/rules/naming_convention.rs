//! Rule: naming-convention
//!
//! Checks proto style on the canonical names: messages, enums and maps in
//! PascalCase, fields in snake_case, enum values in SCREAMING_SNAKE_CASE.
//! The default naming strategy always complies; custom strategies may not.

use protoform_core::{Message, TypeCatalog};

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct NamingConventionRule;

impl LintRule for NamingConventionRule {
    fn id(&self) -> &str {
        "naming-convention"
    }

    fn description(&self) -> &str {
        "Message and enum names should be PascalCase, field names snake_case, enum values SCREAMING_SNAKE_CASE"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, catalog: &TypeCatalog) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        // Check message names (PascalCase)
        for message in catalog.messages() {
            if !is_pascal_case(&message.name) {
                diagnostics.push(LintDiagnostic::new(
                    self,
                    catalog,
                    &message.name,
                    format!("Message name \"{}\" should be PascalCase", message.name),
                ));
            }

            // Check field names (snake_case)
            check_field_names(message, catalog, self, &mut diagnostics);
        }

        // Check enum names (PascalCase) and values (SCREAMING_SNAKE_CASE)
        for e in catalog.enums() {
            if !is_pascal_case(&e.name) {
                diagnostics.push(LintDiagnostic::new(
                    self,
                    catalog,
                    &e.name,
                    format!("Enum name \"{}\" should be PascalCase", e.name),
                ));
            }
            for value in e.values() {
                if !is_screaming_snake_case(&value.name) {
                    diagnostics.push(LintDiagnostic::new(
                        self,
                        catalog,
                        format!("{}.{}", e.name, value.name),
                        format!(
                            "Enum value \"{}\" should be SCREAMING_SNAKE_CASE",
                            value.name
                        ),
                    ));
                }
            }
        }

        for map in catalog.maps() {
            if !is_pascal_case(&map.name) {
                diagnostics.push(LintDiagnostic::new(
                    self,
                    catalog,
                    &map.name,
                    format!("Map name \"{}\" should be PascalCase", map.name),
                ));
            }
        }

        diagnostics
    }
}

fn check_field_names(
    message: &Message,
    catalog: &TypeCatalog,
    rule: &NamingConventionRule,
    diagnostics: &mut Vec<LintDiagnostic>,
) {
    for field in message.fields() {
        if !is_snake_case(&field.name) {
            diagnostics.push(LintDiagnostic::new(
                rule,
                catalog,
                format!("{}.{}", message.name, field.name),
                format!("Field name \"{}\" should be snake_case", field.name),
            ));
        }
    }
}

/// Check if a name is PascalCase: starts with uppercase, no underscores.
fn is_pascal_case(name: &str) -> bool {
    let starts_upper = name.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    starts_upper && !name.contains('_')
}

/// Check if a name is snake_case: all lowercase/digits/underscores, doesn't start with a digit.
fn is_snake_case(name: &str) -> bool {
    let starts_lower = name.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    starts_lower
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Check if a name is SCREAMING_SNAKE_CASE: uppercase/digits/underscores, starts with a letter.
fn is_screaming_snake_case(name: &str) -> bool {
    let starts_upper = name.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    starts_upper
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
