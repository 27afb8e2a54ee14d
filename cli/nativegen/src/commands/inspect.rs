//! `nativegen inspect`: catalog summary.

use std::path::Path;

use anyhow::{Context, Result};
use nativegen_catalog::Catalog;
use nativegen_lua::{overrides, render::original_signature};

use crate::locate::resolve_catalog;
use crate::manifest::NativegenManifest;

/// Print a catalog overview, or the natives of one namespace.
pub fn run(
    project_dir: &Path,
    cwd: &Path,
    manifest: Option<&NativegenManifest>,
    catalog: Option<&str>,
    namespace: Option<&str>,
) -> Result<()> {
    let path = resolve_catalog(project_dir, cwd, manifest, catalog)?;
    let catalog = nativegen_catalog::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    let lines = match namespace {
        Some(name) => namespace_listing(&catalog, name)?,
        None => overview(&catalog),
    };

    println!("Catalog: {}", path.display());
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Namespace counts, totals, and matched fix-up entries.
pub(crate) fn overview(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![
        format!("  Namespaces: {}", catalog.namespaces.len()),
        format!("  Functions:  {}", catalog.function_count()),
        String::new(),
        "--- Namespaces ---".to_string(),
    ];

    let width = catalog
        .namespaces
        .iter()
        .map(|ns| ns.name.len())
        .max()
        .unwrap_or(0);
    for ns in &catalog.namespaces {
        lines.push(format!("  {:<width$}  {}", ns.name, ns.functions.len()));
    }

    lines.push(String::new());
    lines.push("--- Vector fix-up ---".to_string());
    let matched: Vec<String> = catalog
        .functions()
        .filter(|(_, f)| overrides::applies_to(f))
        .map(|(ns, f)| format!("  {}.{} ({})", ns.name, f.name, f.sequence_id))
        .collect();
    if matched.is_empty() {
        lines.push("  none matched".to_string());
    } else {
        lines.extend(matched);
    }

    lines
}

/// One line per native in `name`: sequence id and original declaration.
pub(crate) fn namespace_listing(catalog: &Catalog, name: &str) -> Result<Vec<String>> {
    let Some(ns) = catalog.namespace(name) else {
        anyhow::bail!("namespace '{name}' not found in catalog");
    };

    let mut lines = vec![format!("--- {} ({} functions) ---", ns.name, ns.functions.len())];
    lines.extend(
        ns.functions
            .iter()
            .map(|f| format!("  {:>5}  {}", f.sequence_id, original_signature(f))),
    );
    Ok(lines)
}
