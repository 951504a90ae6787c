use std::fs;
use std::path::{Path, PathBuf};

use protoform_core::PackageManifest;
use protoform_lint::LintConfig;
use serde::Deserialize;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "protoform.config.yaml";

/// A manifest with the path it was read from.
pub struct ManifestFile {
    pub path: String,
    pub manifest: PackageManifest,
}

/// Project configuration from protoform.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct ProtoformConfig {
    #[serde(default)]
    pub packages: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub go_package_prefix: Option<String>,
    pub filter: Option<String>,
    #[serde(default)]
    pub lint: LintConfig,
    /// Directory the config was read from; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl ProtoformConfig {
    pub fn package_paths(&self) -> Vec<PathBuf> {
        self.packages.iter().map(|p| self.base_dir.join(p)).collect()
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|p| self.base_dir.join(p))
    }
}

/// Load the config named on the command line, or `protoform.config.yaml`
/// from the working directory if present.
pub fn read_config(explicit: Option<&Path>) -> Result<Option<ProtoformConfig>, String> {
    let config_path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(format!("Config file does not exist: {}", path.display()));
            }
            path.to_path_buf()
        }
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            if !default.is_file() {
                return Ok(None);
            }
            default
        }
    };

    let yaml_content = fs::read_to_string(&config_path)
        .map_err(|e| format!("Failed to read config {}: {}", config_path.display(), e))?;
    let mut config: ProtoformConfig = serde_yaml::from_str(&yaml_content)
        .map_err(|e| format!("Invalid YAML config {}: {}", config_path.display(), e))?;
    config.base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    debug!(path = %config_path.display(), packages = config.packages.len(), "config loaded");
    Ok(Some(config))
}

/// Read manifests from each input (file or directory), in input order.
pub fn read_manifests(inputs: &[PathBuf]) -> Result<Vec<ManifestFile>, String> {
    let mut files = Vec::new();
    for input in inputs {
        files.extend(read_manifest_path(input)?);
    }
    Ok(files)
}

fn read_manifest_path(input_path: &Path) -> Result<Vec<ManifestFile>, String> {
    if !input_path.exists() {
        return Err(format!("Path does not exist: {}", input_path.display()));
    }

    if input_path.is_file() {
        return Ok(vec![read_manifest_file(input_path)?]);
    }

    if input_path.is_dir() {
        return scan_directory(input_path);
    }

    Err(format!(
        "Path is neither a file nor a directory: {}",
        input_path.display()
    ))
}

fn read_manifest_file(path: &Path) -> Result<ManifestFile, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let manifest: PackageManifest = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => PackageManifest::from_json(&content)
            .map_err(|e| format!("Invalid JSON manifest {}: {}", path.display(), e))?,
        Some("yaml" | "yml") => serde_yaml::from_str(&content)
            .map_err(|e| format!("Invalid YAML manifest {}: {}", path.display(), e))?,
        _ => {
            return Err(format!(
                "Unsupported manifest format (expected .json, .yaml or .yml): {}",
                path.display()
            ))
        }
    };

    debug!(
        path = %path.display(),
        package = %manifest.path,
        declarations = manifest.declarations.len(),
        "manifest read"
    );
    Ok(ManifestFile {
        path: path.to_string_lossy().to_string(),
        manifest,
    })
}

fn scan_directory(dir_path: &Path) -> Result<Vec<ManifestFile>, String> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for ext in ["json", "yaml", "yml"] {
        let pattern = dir_path.join(format!("**/*.{ext}"));
        let pattern_str = pattern.to_string_lossy().replace('\\', "/");
        let entries =
            glob::glob(&pattern_str).map_err(|e| format!("Invalid glob pattern: {}", e))?;

        for entry in entries {
            match entry {
                Ok(path) => {
                    // Skip the project config living next to the manifests
                    if path.file_name().is_some_and(|n| n == CONFIG_FILE_NAME) {
                        continue;
                    }
                    if !paths.contains(&path) {
                        paths.push(path);
                    }
                }
                Err(e) => {
                    return Err(format!("Glob error: {}", e));
                }
            }
        }
    }

    paths.sort();
    paths.iter().map(|p| read_manifest_file(p)).collect()
}
