//! JavaScript identifier rules for library names and global bindings.

/// Words that cannot name a binding in strict-mode JavaScript.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check whether `name` is a reserved word.
pub(crate) fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Check that `name` is a single JavaScript identifier.
///
/// Must start with a letter, underscore, or dollar sign and continue with
/// letters, digits, underscores, or dollar signs. Reserved words are rejected.
///
/// # Example
///
/// ```
/// use kiln_config::is_identifier;
///
/// assert!(is_identifier("nzhswidgets"));
/// assert!(is_identifier("$jquery"));
/// assert!(!is_identifier("my-lib"));
/// assert!(!is_identifier("123abc"));
/// assert!(!is_identifier("default"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    if is_reserved_word(name) {
        return false;
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return false;
    }

    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Check that `name` is a dotted identifier path such as `Vue` or `Vue.Runtime`.
///
/// Global bindings for UMD and IIFE output may point into a namespace object,
/// so each dot-separated segment is checked with [`is_identifier`].
pub fn is_global_path(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

/// Explain why `name` is not an identifier, for error hints.
pub(crate) fn identifier_hint(name: &str) -> String {
    match name.chars().next() {
        None => "name cannot be empty".to_string(),
        Some(first) if !first.is_alphabetic() && first != '_' && first != '$' => format!(
            "must start with a letter, underscore, or dollar sign (got '{}')",
            first
        ),
        Some(_) => match name
            .chars()
            .find(|c| !c.is_alphanumeric() && *c != '_' && *c != '$')
        {
            Some(bad) => format!("invalid character '{}' in identifier", bad),
            None if is_reserved_word(name) => {
                format!("'{}' is a reserved word in JavaScript", name)
            }
            None => "not a valid identifier".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_library_names() {
        for name in ["nzhswidgets", "MyLibrary", "_internal", "$jquery", "lib123"] {
            assert!(is_identifier(name), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_invalid_names() {
        for name in ["", "123abc", "my-lib", "my.lib", "has space", "class", "new", "default"] {
            assert!(!is_identifier(name), "{name} should be rejected");
        }
    }

    #[test]
    fn global_paths_allow_dots_between_identifiers() {
        assert!(is_global_path("Vue"));
        assert!(is_global_path("Vue.Runtime"));
        assert!(!is_global_path("Vue."));
        assert!(!is_global_path(".Vue"));
        assert!(!is_global_path(""));
        assert!(!is_global_path("this.Vue"));
        assert!(!is_global_path("Vue.default"));
    }

    #[test]
    fn hint_points_at_offending_character() {
        assert!(identifier_hint("my-lib").contains("'-'"));
        assert!(identifier_hint("9lives").contains("'9'"));
        assert_eq!(identifier_hint(""), "name cannot be empty");
        assert!(identifier_hint("class").contains("reserved word"));
    }
}
