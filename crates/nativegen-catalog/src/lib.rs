//! Native function catalog loading for nativegen.
//!
//! Parses a JSON catalog of native functions (namespace → hash → record)
//! into an ordered, immutable model. Every function gets a global sequence
//! id in document order, which the binding generator uses as the runtime
//! dispatch identifier.
//!
//! ## Modules
//!
//! - [`model`]: Namespace, function and parameter records
//! - [`load`]: JSON catalog parsing and sequence id assignment
//! - [`error`]: Catalog loading errors

pub mod error;
pub mod load;
pub mod model;

// Re-export key types for convenience
pub use error::CatalogError;
pub use load::{load, load_file};
pub use model::{Catalog, FunctionRecord, NamespaceRecord, ParamRecord};
