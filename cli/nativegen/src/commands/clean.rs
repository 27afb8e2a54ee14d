//! `nativegen clean`: remove generated bindings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Remove the output directory if it exists.
pub fn run(out_dir: &Path) -> Result<()> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir)
            .with_context(|| format!("removing {}", out_dir.display()))?;
        println!("Removed {}", out_dir.display());
    } else {
        println!("Already clean: {} does not exist", out_dir.display());
    }

    Ok(())
}
