//! Lua source rendering for namespaces and natives.
//!
//! Output for one native looks like:
//!
//! ```text
//! function ENTITY.GET_ENTITY_HEALTH(entity)
//!   return native.invoke(
//!     Type.Int, 0, false,
//!     arg(Type.Entity, entity)
//!   )
//! end
//! ```

use nativegen_catalog::{FunctionRecord, NamespaceRecord, ParamRecord};

use crate::naming::escape_reserved;
use crate::overrides;
use crate::types::format_type;

/// Switches that shape the generated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Emit non-empty catalog comments as `--[[ ]]` blocks.
    pub include_comments: bool,
    /// Emit the native's declaration and hash as a `--` line.
    pub include_original_signature: bool,
    /// Write every namespace into one file. Only consulted by
    /// [`plan_files`](crate::output::plan_files).
    pub combine_into_single_file: bool,
}

/// Render a namespace table declaration followed by all of its natives.
pub fn render_namespace(namespace: &NamespaceRecord, options: &GenerationOptions) -> String {
    let mut out = format!("{} = {{}}\n\n", namespace.name);
    for function in &namespace.functions {
        out.push_str(&render_function(&namespace.name, function, options));
        out.push('\n');
    }
    out
}

/// Render a single native as a Lua function definition.
///
/// The returned text ends with a newline after `end`.
pub fn render_function(
    namespace: &str,
    function: &FunctionRecord,
    options: &GenerationOptions,
) -> String {
    let mut lines = Vec::new();

    if options.include_original_signature {
        lines.push(format!("-- {}", original_signature(function)));
    }
    if options.include_comments && !function.comment.is_empty() {
        lines.push(format!("--[[\n{}\n--]]", function.comment));
    }

    let names: Vec<String> = function
        .params
        .iter()
        .map(|p| escape_reserved(&p.name))
        .collect();

    lines.push(format!(
        "function {namespace}.{}({})",
        function.name,
        names.join(", ")
    ));

    let ret = if function.returns_void() { "" } else { "return " };
    lines.push(format!("  {ret}native.invoke("));

    let separator = if names.is_empty() { "" } else { "," };
    lines.push(format!(
        "    {}, {}, {}{separator}",
        format_type(&function.return_type),
        function.sequence_id,
        overrides::applies_to(function),
    ));

    if !names.is_empty() {
        let args: Vec<String> = function
            .params
            .iter()
            .zip(&names)
            .map(|(param, name)| format!("    {}", wrap_argument(param, name)))
            .collect();
        lines.push(args.join(",\n"));
    }

    lines.push("  )".to_string());
    lines.push("end".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The native's declaration as it appears in the catalog, plus its hash.
///
/// Parameter names are the raw catalog names, not the escaped ones.
pub fn original_signature(function: &FunctionRecord) -> String {
    let params: Vec<String> = function
        .params
        .iter()
        .map(|p| format!("{} {}", p.param_type, p.name))
        .collect();
    format!(
        "{} {}({}) // {}",
        function.return_type,
        function.name,
        params.join(", "),
        function.hash
    )
}

/// Pointer parameters are passed with `ref`, everything else with `arg`.
fn wrap_argument(param: &ParamRecord, name: &str) -> String {
    let wrapper = if param.is_pointer() { "ref" } else { "arg" };
    format!("{wrapper}({}, {name})", format_type(&param.param_type))
}
