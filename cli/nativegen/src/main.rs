//! nativegen CLI: Lua bindings from a native function catalog.

mod commands;
mod locate;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use commands::generate::GenerateArgs;
use manifest::NativegenManifest;

#[derive(Parser)]
#[command(
    name = "nativegen",
    version,
    about = "Generate Lua bindings from a native function catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Lua bindings from the catalog
    Generate {
        /// Catalog file (default: natives.json, then gta5-nativedb-data/natives.json)
        #[arg(long)]
        catalog: Option<String>,
        /// Output directory (default: natives)
        #[arg(long)]
        out_dir: Option<String>,
        /// Include catalog comments above each binding
        #[arg(long)]
        comments: bool,
        /// Include the original declaration and hash above each binding
        #[arg(long)]
        signatures: bool,
        /// Write all namespaces into a single natives.lua
        #[arg(long)]
        single_file: bool,
        /// Only print the summary line
        #[arg(long, short)]
        quiet: bool,
    },
    /// Summarize a catalog
    Inspect {
        /// Catalog file
        #[arg(long)]
        catalog: Option<String>,
        /// List the natives of one namespace
        #[arg(long)]
        namespace: Option<String>,
    },
    /// Write a starter nativegen.toml in the current directory
    Init,
    /// Remove generated bindings
    Clean {
        /// Output directory (default: natives)
        #[arg(long)]
        out_dir: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Generate {
            catalog,
            out_dir,
            comments,
            signatures,
            single_file,
            quiet,
        } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or_else(|| cwd.clone());
            let args = GenerateArgs {
                catalog,
                out_dir,
                comments,
                signatures,
                single_file,
                quiet,
            };
            commands::generate::run(&project_dir, &cwd, manifest.as_ref(), &args)
        }

        Commands::Inspect { catalog, namespace } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or_else(|| cwd.clone());
            commands::inspect::run(
                &project_dir,
                &cwd,
                manifest.as_ref(),
                catalog.as_deref(),
                namespace.as_deref(),
            )
        }

        Commands::Init => commands::init::run(&cwd),

        Commands::Clean { out_dir } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or_else(|| cwd.clone());
            let out_dir = manifest::resolve_out_dir(
                &project_dir,
                &cwd,
                manifest.as_ref(),
                out_dir.as_deref(),
            );
            commands::clean::run(&out_dir)
        }
    }
}

/// Try to load a manifest from the current directory upward. Returns (None, None) if not found.
fn load_manifest_optional(
    cwd: &Path,
) -> anyhow::Result<(Option<NativegenManifest>, Option<PathBuf>)> {
    match NativegenManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
