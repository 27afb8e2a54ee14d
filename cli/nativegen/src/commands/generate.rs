//! `nativegen generate`: catalog → Lua bindings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nativegen_lua::overrides;

use crate::locate::resolve_catalog;
use crate::manifest::{resolve_out_dir, NativegenManifest};

/// Command-line switches for `nativegen generate`.
///
/// Boolean switches only turn features on; the manifest can enable them
/// too, and a feature is on when either source enables it.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub catalog: Option<String>,
    pub out_dir: Option<String>,
    pub comments: bool,
    pub signatures: bool,
    pub single_file: bool,
    pub quiet: bool,
}

/// What a generation run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    pub catalog: PathBuf,
    /// Written paths with the number of functions each holds.
    pub files: Vec<(PathBuf, usize)>,
    pub namespaces: usize,
    pub functions: usize,
    pub overrides: usize,
}

/// Run `nativegen generate` and report progress on stdout.
pub fn run(
    project_dir: &Path,
    cwd: &Path,
    manifest: Option<&NativegenManifest>,
    args: &GenerateArgs,
) -> Result<()> {
    let summary = generate(project_dir, cwd, manifest, args)?;

    if !args.quiet {
        for (path, functions) in &summary.files {
            println!("  wrote {} ({functions} functions)", path.display());
        }
    }
    println!(
        "Generated {} functions in {} namespaces ({} with vector fix-up) from {} → {} file(s)",
        summary.functions,
        summary.namespaces,
        summary.overrides,
        summary.catalog.display(),
        summary.files.len()
    );

    Ok(())
}

/// Load the catalog, render it and write the output files.
pub(crate) fn generate(
    project_dir: &Path,
    cwd: &Path,
    manifest: Option<&NativegenManifest>,
    args: &GenerateArgs,
) -> Result<GenerateSummary> {
    let catalog_path = resolve_catalog(project_dir, cwd, manifest, args.catalog.as_deref())?;
    let catalog = nativegen_catalog::load_file(&catalog_path)
        .with_context(|| format!("loading {}", catalog_path.display()))?;

    let mut options = manifest
        .map(NativegenManifest::generation_options)
        .unwrap_or_default();
    options.include_comments |= args.comments;
    options.include_original_signature |= args.signatures;
    options.combine_into_single_file |= args.single_file;

    let out_dir = resolve_out_dir(project_dir, cwd, manifest, args.out_dir.as_deref());
    let planned = nativegen_lua::plan_files(&catalog, &options);
    let written = nativegen_lua::write_files(&out_dir, &planned)
        .with_context(|| format!("writing bindings to {}", out_dir.display()))?;
    let files = written
        .into_iter()
        .zip(planned.iter().map(|file| file.function_count))
        .collect();

    Ok(GenerateSummary {
        catalog: catalog_path,
        files,
        namespaces: catalog.namespaces.len(),
        functions: catalog.function_count(),
        overrides: catalog
            .functions()
            .filter(|(_, f)| overrides::applies_to(f))
            .count(),
    })
}
