//! Grouping rendered namespaces into output files.

use std::fs;
use std::path::{Path, PathBuf};

use nativegen_catalog::Catalog;

use crate::error::{GenerateError, Result};
use crate::render::{render_namespace, GenerationOptions};

/// File name used when every namespace goes into one file.
pub const COMBINED_FILE_NAME: &str = "natives.lua";

/// A rendered output file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Lua source.
    pub content: String,
    /// Number of natives rendered into this file.
    pub function_count: usize,
}

/// Render the catalog into the files it should be written as.
///
/// Each namespace's text is followed by one newline. In combined mode the
/// namespaces are concatenated into [`COMBINED_FILE_NAME`]; otherwise each
/// namespace gets `<NAMESPACE>.lua`.
pub fn plan_files(catalog: &Catalog, options: &GenerationOptions) -> Vec<GeneratedFile> {
    let rendered = catalog.namespaces.iter().map(|ns| {
        let mut text = render_namespace(ns, options);
        text.push('\n');
        (ns, text)
    });

    if options.combine_into_single_file {
        let content = rendered.map(|(_, text)| text).collect();
        vec![GeneratedFile {
            file_name: COMBINED_FILE_NAME.to_string(),
            content,
            function_count: catalog.function_count(),
        }]
    } else {
        rendered
            .map(|(ns, content)| GeneratedFile {
                file_name: format!("{}.lua", ns.name),
                content,
                function_count: ns.functions.len(),
            })
            .collect()
    }
}

/// Write planned files into `out_dir`, creating it if needed.
///
/// Stops at the first failure. Files written before the failure are left in
/// place. Returns the written paths in order.
pub fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.file_name);
        fs::write(&path, &file.content).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}
