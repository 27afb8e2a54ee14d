//! Lua identifier escaping.

/// Lua 5.4 reserved words.
pub const LUA_RESERVED: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Whether `name` is a Lua reserved word (case-sensitive, like Lua).
pub fn is_reserved(name: &str) -> bool {
    LUA_RESERVED.contains(&name)
}

/// Escape a parameter name that would collide with a Lua reserved word by
/// appending `_`. Other names are returned unchanged.
pub fn escape_reserved(name: &str) -> String {
    if is_reserved(name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_escaped() {
        assert_eq!(escape_reserved("end"), "end_");
        assert_eq!(escape_reserved("repeat"), "repeat_");
        assert_eq!(escape_reserved("local"), "local_");
        assert_eq!(escape_reserved("function"), "function_");
    }

    #[test]
    fn ordinary_names_unchanged() {
        assert_eq!(escape_reserved("entity"), "entity");
        assert_eq!(escape_reserved("p0"), "p0");
        assert_eq!(escape_reserved("ending"), "ending");
        assert_eq!(escape_reserved("_end"), "_end");
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!is_reserved("End"));
        assert!(!is_reserved("NIL"));
        assert_eq!(escape_reserved("End"), "End");
    }
}
