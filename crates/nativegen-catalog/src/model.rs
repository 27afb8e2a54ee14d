//! Normalized catalog model.
//!
//! All records are built once by the loader and read-only afterwards.

use serde::Deserialize;

/// One parameter of a native function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParamRecord {
    /// Parameter type as written in the catalog (e.g. `int`, `Vector3*`).
    #[serde(rename = "type")]
    pub param_type: String,
    /// Parameter name as written in the catalog.
    pub name: String,
}

impl ParamRecord {
    /// Whether the parameter is passed by pointer.
    pub fn is_pointer(&self) -> bool {
        self.param_type.contains('*')
    }
}

/// One native function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Function name, e.g. `GET_ENTITY_HEALTH`.
    pub name: String,
    /// The catalog key of this record (e.g. `0xEEF059FAD016D209`).
    pub hash: String,
    /// Global position in catalog traversal order, starting at 0.
    ///
    /// Depends on document order, so it is not stable across catalog
    /// versions.
    pub sequence_id: u32,
    /// Return type as written in the catalog.
    pub return_type: String,
    /// Parameters in call-site order.
    pub params: Vec<ParamRecord>,
    /// Free-text documentation; empty when the catalog has none.
    pub comment: String,
    /// Secondary Jenkins hash, when the catalog carries one.
    pub jhash: Option<String>,
    /// Build in which the native first appeared.
    pub build: Option<String>,
}

impl FunctionRecord {
    /// Whether the function returns nothing.
    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }
}

/// A named group of functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRecord {
    /// The catalog's top-level key, e.g. `ENTITY`.
    pub name: String,
    /// Functions in catalog order.
    pub functions: Vec<FunctionRecord>,
}

/// A fully loaded catalog: namespaces in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub namespaces: Vec<NamespaceRecord>,
}

impl Catalog {
    /// Total number of functions across all namespaces.
    pub fn function_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.functions.len()).sum()
    }

    /// Whether the catalog contains no namespaces at all.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Look up a namespace by exact name.
    pub fn namespace(&self, name: &str) -> Option<&NamespaceRecord> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    /// Iterate over every function, paired with its namespace, in sequence order.
    pub fn functions(&self) -> impl Iterator<Item = (&NamespaceRecord, &FunctionRecord)> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.functions.iter().map(move |f| (ns, f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(name: &str, id: u32) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            hash: format!("0x{id:X}"),
            sequence_id: id,
            return_type: "void".to_string(),
            params: Vec::new(),
            comment: String::new(),
            jhash: None,
            build: None,
        }
    }

    #[test]
    fn pointer_params_detected() {
        let by_ref = ParamRecord {
            param_type: "Vector3*".to_string(),
            name: "out".to_string(),
        };
        let by_value = ParamRecord {
            param_type: "float".to_string(),
            name: "x".to_string(),
        };
        assert!(by_ref.is_pointer());
        assert!(!by_value.is_pointer());
    }

    #[test]
    fn catalog_queries() {
        let catalog = Catalog {
            namespaces: vec![
                NamespaceRecord {
                    name: "PLAYER".to_string(),
                    functions: vec![function("GET_PLAYER_PED", 0), function("PLAYER_ID", 1)],
                },
                NamespaceRecord {
                    name: "EMPTY".to_string(),
                    functions: Vec::new(),
                },
                NamespaceRecord {
                    name: "ENTITY".to_string(),
                    functions: vec![function("GET_ENTITY_HEALTH", 2)],
                },
            ],
        };

        assert_eq!(catalog.function_count(), 3);
        assert!(!catalog.is_empty());
        assert!(catalog.namespace("EMPTY").unwrap().functions.is_empty());
        assert!(catalog.namespace("MISSING").is_none());

        let ids: Vec<u32> = catalog.functions().map(|(_, f)| f.sequence_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        let (ns, f) = catalog.functions().last().unwrap();
        assert_eq!(ns.name, "ENTITY");
        assert_eq!(f.name, "GET_ENTITY_HEALTH");
    }

    #[test]
    fn void_return_detection() {
        let mut f = function("WAIT", 0);
        assert!(f.returns_void());
        f.return_type = "int".to_string();
        assert!(!f.returns_void());
    }
}
