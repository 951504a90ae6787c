use std::path::PathBuf;

use protoform_core::DiagnosticSeverity;
use protoform_lint::{LintConfig, LintDiagnostic, LintSeverity, Linter};

use crate::build_catalogs;

/// Lint every package; returns the report and the number of error-level findings.
pub fn run_lint(
    packages: &[PathBuf],
    config: LintConfig,
    format: &str,
) -> Result<(String, usize), String> {
    let catalogs = build_catalogs(packages)?;

    let linter = Linter::new(config);
    let results: Vec<LintDiagnostic> = catalogs.iter().flat_map(|c| linter.lint(c)).collect();
    let error_count = results
        .iter()
        .filter(|d| d.severity == LintSeverity::Error)
        .count();
    let package_count = catalogs.len();

    match format {
        "json" => {
            let ingestion: Vec<_> = catalogs
                .iter()
                .flat_map(|c| {
                    c.diagnostics().iter().map(move |d| {
                        serde_json::json!({ "package": c.path(), "diagnostic": d })
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "diagnostics": results,
                "ingestion": ingestion,
                "summary": {
                    "count": results.len(),
                    "errors": error_count,
                    "packages": package_count,
                }
            }))
            .map_err(|e| format!("JSON serialization error: {e}"))?;
            Ok((json, error_count))
        }
        _ => {
            // Human-readable format
            let mut lines: Vec<String> = Vec::new();

            for catalog in &catalogs {
                for d in catalog.diagnostics() {
                    let severity = match d.severity {
                        DiagnosticSeverity::Error => "error",
                        DiagnosticSeverity::Warning => "warning",
                    };
                    lines.push(format!(
                        "{} {}[{}] {}: {}",
                        catalog.path(),
                        severity,
                        d.code,
                        d.declaration,
                        d.message
                    ));
                }
            }

            for d in &results {
                let severity = match d.severity {
                    LintSeverity::Error => "error",
                    LintSeverity::Warning => "warning",
                    LintSeverity::Info => "info",
                };
                lines.push(format!(
                    "{} {}[{}] {}: {}",
                    d.package, severity, d.rule, d.target, d.message
                ));
            }

            let count = results.len();
            let issue_word = if count == 1 { "issue" } else { "issues" };
            let package_word = if package_count == 1 {
                "package"
            } else {
                "packages"
            };
            lines.push(format!(
                "{count} lint {issue_word} in {package_count} {package_word}."
            ));

            Ok((lines.join("\n"), error_count))
        }
    }
}
