//! Catalog type names → Lua `Type.*` constants.
//!
//! The mapping is purely textual: pointer markers are dropped, C strings
//! become `string`, then the first character is upper-cased and the rest
//! lower-cased. Mixed-case domain types therefore lose their inner capitals
//! (`ScrHandle` → `Type.Scrhandle`). These strings must match the keys of
//! the runtime's `Type` table.

/// Catalog spelling of a C string once pointer markers are removed.
const C_STRING: &str = "const char";

/// Format a catalog type as a `Type.*` constant.
///
/// ```
/// use nativegen_lua::format_type;
///
/// assert_eq!(format_type("const char*"), "Type.String");
/// assert_eq!(format_type("BOOL"), "Type.Bool");
/// assert_eq!(format_type("Vector3*"), "Type.Vector3");
/// ```
pub fn format_type(catalog_type: &str) -> String {
    let stripped = catalog_type.replace('*', "");
    let base = if stripped == C_STRING { "string" } else { stripped.as_str() };

    let mut chars = base.chars();
    let capitalized = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };
    format!("Type.{capitalized}")
}
