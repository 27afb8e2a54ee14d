//! `nativegen init`: write a starter manifest.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::manifest::{NativegenManifest, MANIFEST_FILE};

/// Create `nativegen.toml` in `dir`.
pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join(MANIFEST_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::write(&path, NativegenManifest::template())
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Created {}", path.display());
    println!("Place natives.json next to it and run `nativegen generate`.");

    Ok(())
}
