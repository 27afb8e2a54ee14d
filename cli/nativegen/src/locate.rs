//! Catalog file discovery.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::manifest::NativegenManifest;

/// Upstream repository that publishes `natives.json`.
pub const UPSTREAM_REPO: &str = "https://github.com/alloc8or/gta5-nativedb-data";

/// Places searched, in order, when no catalog path is configured. The
/// second is where a clone of [`UPSTREAM_REPO`] puts the file.
pub const CATALOG_CANDIDATES: &[&str] = &["natives.json", "gta5-nativedb-data/natives.json"];

/// Find the catalog to load.
///
/// An explicit flag wins over the manifest's `[catalog] path`; both must
/// point at an existing file. A flag is relative to `cwd`, a manifest path
/// to `project_dir`. Without either, the first existing entry of
/// [`CATALOG_CANDIDATES`] under `project_dir` is used.
pub fn resolve_catalog(
    project_dir: &Path,
    cwd: &Path,
    manifest: Option<&NativegenManifest>,
    flag: Option<&str>,
) -> Result<PathBuf> {
    let configured = match flag {
        Some(path) => Some(cwd.join(path)),
        None => manifest
            .and_then(|m| m.catalog.path.as_deref())
            .map(|path| project_dir.join(path)),
    };
    if let Some(path) = configured {
        if !path.is_file() {
            bail!("catalog not found: {}", path.display());
        }
        return Ok(path);
    }

    if let Some(found) = CATALOG_CANDIDATES
        .iter()
        .map(|candidate| project_dir.join(candidate))
        .find(|path| path.is_file())
    {
        return Ok(found);
    }

    bail!(
        "no catalog found in {} (looked for {}); download natives.json from {UPSTREAM_REPO} or pass --catalog",
        project_dir.display(),
        CATALOG_CANDIDATES.join(", "),
    )
}
