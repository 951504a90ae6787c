use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use protoform_core::{output_file_name, render_proto, RenderOptions, TypeCatalog};
use tracing::{info, warn};

use crate::build_catalogs;

pub struct GenerateOptions {
    pub packages: Vec<PathBuf>,
    pub output: PathBuf,
    pub go_package_prefix: String,
    pub filter: Option<String>,
}

/// Write one `<package>.proto` per manifest into an existing directory.
pub fn run_generate(options: &GenerateOptions) -> Result<String, String> {
    if !options.output.is_dir() {
        return Err(format!(
            "Output directory does not exist: {}",
            options.output.display()
        ));
    }

    if let Some(filter) = &options.filter {
        warn!(filter = %filter, "struct filter is accepted but not applied");
    }

    let catalogs = build_catalogs(&options.packages)?;
    check_output_collisions(&catalogs)?;
    let render_options = RenderOptions {
        go_package_prefix: options.go_package_prefix.clone(),
    };

    let mut lines: Vec<String> = Vec::new();
    for catalog in &catalogs {
        let out_path = options.output.join(output_file_name(catalog));
        let proto = render_proto(catalog, &render_options);
        fs::write(&out_path, proto)
            .map_err(|e| format!("Failed to write {}: {e}", out_path.display()))?;

        info!("output file written to {}", out_path.display());
        lines.push(out_path.display().to_string());
    }

    let file_word = if lines.len() == 1 { "file" } else { "files" };
    lines.push(format!("{} proto {file_word} written.", catalogs.len()));
    Ok(lines.join("\n"))
}

/// Two different packages sharing a short name would write the same file.
fn check_output_collisions(catalogs: &[TypeCatalog]) -> Result<(), String> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    for catalog in catalogs {
        let file_name = output_file_name(catalog);
        let Some(first) = owners.insert(file_name.clone(), catalog.path()) else {
            continue;
        };
        if first != catalog.path() {
            return Err(format!(
                "Packages {} and {} would both be written to {}",
                first,
                catalog.path(),
                file_name
            ));
        }
    }
    Ok(())
}
