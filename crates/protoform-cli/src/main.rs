mod commands;
mod reader;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::generate::GenerateOptions;
use protoform_core::catalogs::DEFAULT_GO_PACKAGE_PREFIX;
use protoform_core::TypeCatalog;
use reader::{read_config, read_manifests, ProtoformConfig};

#[derive(Parser)]
#[command(
    name = "protoform",
    version,
    about = "Protoform: generate proto3 schemas from exported type declarations"
)]
struct Cli {
    /// Log debug details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one .proto file per package manifest
    Generate {
        /// Package manifest (file or directory); repeatable
        #[arg(short = 'p', long = "package")]
        packages: Vec<PathBuf>,

        /// Existing output directory (defaults to the current directory)
        #[arg(short = 'f', long = "output")]
        output: Option<PathBuf>,

        /// Filter by struct names. Case insensitive. (not applied yet)
        #[arg(long)]
        filter: Option<String>,

        /// Project config (defaults to ./protoform.config.yaml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the canonical type catalogs as JSON
    Inspect {
        /// Package manifest (file or directory); repeatable
        #[arg(short = 'p', long = "package")]
        packages: Vec<PathBuf>,

        /// Project config (defaults to ./protoform.config.yaml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Lint the canonical schema for style and quality issues
    Lint {
        /// Package manifest (file or directory); repeatable
        #[arg(short = 'p', long = "package")]
        packages: Vec<PathBuf>,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,

        /// Project config (defaults to ./protoform.config.yaml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            packages,
            output,
            filter,
            config,
        } => {
            let config = load_config(config.as_deref());
            let options = GenerateOptions {
                packages: merge_packages(packages, &config),
                output: output
                    .or_else(|| config.output_path())
                    .unwrap_or_else(|| PathBuf::from(".")),
                go_package_prefix: config
                    .go_package_prefix
                    .clone()
                    .unwrap_or_else(|| DEFAULT_GO_PACKAGE_PREFIX.into()),
                filter: filter.or(config.filter),
            };
            match commands::generate::run_generate(&options) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Inspect { packages, config } => {
            let config = load_config(config.as_deref());
            let packages = merge_packages(packages, &config);
            match commands::inspect::run_inspect(&packages) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Lint {
            packages,
            format,
            config,
        } => {
            let config = load_config(config.as_deref());
            let packages = merge_packages(packages, &config);
            match commands::lint::run_lint(&packages, config.lint, &format) {
                Ok((output, error_count)) => {
                    println!("{output}");
                    if error_count > 0 {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn load_config(explicit: Option<&Path>) -> ProtoformConfig {
    match read_config(explicit) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Command-line packages first, then the config's. Exits with usage when
/// neither names a package.
fn merge_packages(cli_packages: Vec<PathBuf>, config: &ProtoformConfig) -> Vec<PathBuf> {
    let mut packages = cli_packages;
    packages.extend(config.package_paths());

    if packages.is_empty() {
        let mut cmd = Cli::command();
        eprintln!("Error: no packages given; pass -p <manifest> or list them under `packages` in protoform.config.yaml");
        eprintln!("{}", cmd.render_usage());
        process::exit(1);
    }
    packages
}

/// Read every manifest and build its canonical catalog.
pub fn build_catalogs(inputs: &[PathBuf]) -> Result<Vec<TypeCatalog>, String> {
    let files = read_manifests(inputs)?;

    if files.is_empty() {
        let names: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
        return Err(format!(
            "No manifests (.json, .yaml, .yml) found at: {}",
            names.join(", ")
        ));
    }

    Ok(files
        .iter()
        .map(|f| {
            tracing::debug!(path = %f.path, "building catalog");
            TypeCatalog::from_manifest(&f.manifest)
        })
        .collect())
}
