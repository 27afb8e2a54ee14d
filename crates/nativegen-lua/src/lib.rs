//! Lua binding generation for native function catalogs.
//!
//! Every native becomes a Lua function that forwards its arguments to
//! `native.invoke`, tagged with the runtime type of each value and the
//! function's sequence id.
//!
//! ## Modules
//!
//! - [`types`]: Catalog type → `Type.*` constant formatting
//! - [`naming`]: Lua reserved word escaping
//! - [`overrides`]: Natives that need vector fix-up at runtime
//! - [`render`]: Namespace and function text rendering
//! - [`output`]: Grouping rendered namespaces into files and writing them

pub mod error;
pub mod naming;
pub mod output;
pub mod overrides;
pub mod render;
pub mod types;

// Re-export key types for convenience
pub use error::GenerateError;
pub use output::{plan_files, write_files, GeneratedFile, COMBINED_FILE_NAME};
pub use render::{render_function, render_namespace, GenerationOptions};
pub use types::format_type;
