//! `nativegen.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use nativegen_lua::GenerationOptions;

/// Manifest file name searched for from the working directory upward.
pub const MANIFEST_FILE: &str = "nativegen.toml";

/// Output directory used when neither the manifest nor a flag names one.
pub const DEFAULT_OUT_DIR: &str = "natives";

/// The top-level manifest structure. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NativegenManifest {
    /// Where the catalog lives.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Where and how bindings are written.
    #[serde(default)]
    pub output: OutputConfig,
    /// What the generated code contains.
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// `[catalog]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog path, relative to the manifest directory.
    #[serde(default)]
    pub path: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the manifest directory.
    #[serde(default)]
    pub dir: Option<String>,
    /// Write all namespaces into a single `natives.lua`.
    #[serde(default)]
    pub single_file: Option<bool>,
}

/// `[generate]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Emit catalog comments above each binding.
    #[serde(default)]
    pub comments: Option<bool>,
    /// Emit the original declaration and hash above each binding.
    #[serde(default)]
    pub signatures: Option<bool>,
}

impl NativegenManifest {
    /// Search upward from `start_dir` for a `nativegen.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: NativegenManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing nativegen.toml")
    }

    /// Generation options from the manifest alone (flags not applied).
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            include_comments: self.generate.comments.unwrap_or(false),
            include_original_signature: self.generate.signatures.unwrap_or(false),
            combine_into_single_file: self.output.single_file.unwrap_or(false),
        }
    }

    /// The default template for `nativegen init`.
    pub fn template() -> String {
        format!(
            r#"[catalog]
# Leave unset to look for natives.json, then gta5-nativedb-data/natives.json
# path = "natives.json"

[output]
dir = "{DEFAULT_OUT_DIR}"
single_file = false

[generate]
comments = true
signatures = false
"#
        )
    }
}

/// Resolve the output directory: flag, then manifest, then the default.
///
/// A flag is relative to `cwd`; the manifest value and the default are
/// relative to `project_dir`.
pub fn resolve_out_dir(
    project_dir: &Path,
    cwd: &Path,
    manifest: Option<&NativegenManifest>,
    flag: Option<&str>,
) -> PathBuf {
    if let Some(dir) = flag {
        return cwd.join(dir);
    }
    let dir = manifest
        .and_then(|m| m.output.dir.as_deref())
        .unwrap_or(DEFAULT_OUT_DIR);
    project_dir.join(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[catalog]
path = "data/natives.json"

[output]
dir = "lua/natives"
single_file = true

[generate]
comments = true
signatures = true
"#;
        let manifest = NativegenManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.catalog.path.as_deref(), Some("data/natives.json"));
        assert_eq!(manifest.output.dir.as_deref(), Some("lua/natives"));
        let options = manifest.generation_options();
        assert!(options.include_comments);
        assert!(options.include_original_signature);
        assert!(options.combine_into_single_file);
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = NativegenManifest::from_str("").unwrap();
        assert!(manifest.catalog.path.is_none());
        assert_eq!(manifest.generation_options(), GenerationOptions::default());
    }

    #[test]
    fn reject_invalid_toml() {
        let bad = "this is not valid toml [[[";
        assert!(NativegenManifest::from_str(bad).is_err());
    }

    #[test]
    fn reject_wrong_value_type() {
        let bad = "[generate]\ncomments = \"yes\"\n";
        assert!(NativegenManifest::from_str(bad).is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let manifest = NativegenManifest::from_str(&NativegenManifest::template()).unwrap();
        assert!(manifest.catalog.path.is_none());
        assert_eq!(manifest.output.dir.as_deref(), Some(DEFAULT_OUT_DIR));
        let options = manifest.generation_options();
        assert!(options.include_comments);
        assert!(!options.include_original_signature);
        assert!(!options.combine_into_single_file);
    }

    #[test]
    fn out_dir_precedence() {
        let project = Path::new("/project");
        let cwd = Path::new("/project/scripts");
        let manifest = NativegenManifest::from_str("[output]\ndir = \"gen\"\n").unwrap();

        assert_eq!(resolve_out_dir(project, cwd, None, None), project.join("natives"));
        assert_eq!(resolve_out_dir(project, cwd, Some(&manifest), None), project.join("gen"));
        assert_eq!(
            resolve_out_dir(project, cwd, Some(&manifest), Some("flag")),
            cwd.join("flag")
        );
        assert_eq!(
            resolve_out_dir(project, cwd, None, Some("/abs/out")),
            Path::new("/abs/out")
        );
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[output]\ndir = \"here\"\n").unwrap();

        let (manifest, found_dir) = NativegenManifest::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.output.dir.as_deref(), Some("here"));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[output]\ndir = \"parent\"\n").unwrap();

        let nested = dir.path().join("a").join("b").join("c");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = NativegenManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.output.dir.as_deref(), Some("parent"));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[output\n").unwrap();

        let err = NativegenManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
