use std::path::PathBuf;

use protoform_core::GENERATOR_VERSION;

use crate::build_catalogs;

/// Dump the canonical catalogs as pretty JSON.
pub fn run_inspect(packages: &[PathBuf]) -> Result<String, String> {
    let catalogs = build_catalogs(packages)?;

    let output = serde_json::json!({
        "generatorVersion": GENERATOR_VERSION,
        "packages": catalogs,
    });
    serde_json::to_string_pretty(&output).map_err(|e| format!("JSON serialization error: {e}"))
}
