//! Catalog (`natives.json`) parsing.
//!
//! A catalog is a JSON object mapping namespace names to objects that map
//! function hashes to function records. Document order is preserved for
//! both levels.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, FunctionRecord, NamespaceRecord, ParamRecord};

/// A function record exactly as it appears in the catalog.
#[derive(Debug, Deserialize)]
struct RawFunction {
    name: String,
    #[serde(default)]
    comment: String,
    params: Vec<ParamRecord>,
    return_type: String,
    #[serde(default)]
    jhash: Option<String>,
    #[serde(default)]
    build: Option<String>,
}

type RawCatalog = IndexMap<String, IndexMap<String, RawFunction>>;

/// Parse a catalog from a JSON string.
///
/// Sequence ids are assigned from a single counter shared by all
/// namespaces, starting at 0.
pub fn load(input: &str) -> Result<Catalog> {
    let raw: RawCatalog = serde_json::from_str(input)?;

    let mut namespaces = Vec::with_capacity(raw.len());
    let mut next_id: u32 = 0;
    for (name, functions) in raw {
        if name.contains(['/', '\\']) {
            return Err(CatalogError::Malformed {
                detail: format!("namespace '{name}' contains a path separator"),
            });
        }
        let (namespace, next) = build_namespace(name, functions, next_id)?;
        namespaces.push(namespace);
        next_id = next;
    }

    Ok(Catalog { namespaces })
}

/// Read and parse a catalog file.
pub fn load_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    load(&content)
}

/// Build one namespace whose first function gets `first_id`.
///
/// Returns the namespace and the id the next function should receive.
fn build_namespace(
    name: String,
    functions: IndexMap<String, RawFunction>,
    first_id: u32,
) -> Result<(NamespaceRecord, u32)> {
    let mut records = Vec::with_capacity(functions.len());
    let mut next_id = first_id;
    for (hash, raw) in functions {
        validate(&name, &hash, &raw)?;
        records.push(FunctionRecord {
            name: raw.name,
            hash,
            sequence_id: next_id,
            return_type: raw.return_type,
            params: raw.params,
            comment: raw.comment,
            jhash: raw.jhash,
            build: raw.build,
        });
        next_id += 1;
    }

    Ok((
        NamespaceRecord {
            name,
            functions: records,
        },
        next_id,
    ))
}

/// Reject records that parse but cannot be rendered.
fn validate(namespace: &str, hash: &str, raw: &RawFunction) -> Result<()> {
    let malformed = |what: &str| CatalogError::Malformed {
        detail: format!("{namespace}/{hash}: {what} is empty"),
    };

    if raw.name.is_empty() {
        return Err(malformed("name"));
    }
    if raw.return_type.is_empty() {
        return Err(malformed("return_type"));
    }
    for (i, param) in raw.params.iter().enumerate() {
        if param.param_type.is_empty() {
            return Err(malformed(&format!("type of parameter {i}")));
        }
    }
    Ok(())
}
