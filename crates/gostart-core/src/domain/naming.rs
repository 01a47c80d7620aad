//! Component naming rules.
//!
//! A component name is used verbatim as a Go package name and directory
//! segment, and its title-cased form prefixes every exported identifier the
//! generator emits. Both transforms live here so they can never diverge.

use crate::domain::error::DomainError;

/// Go keywords; none of them can name a package.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Normalise user input into a component name.
///
/// The input is trimmed and lowercased, then checked against the package
/// name rules the generated code relies on: `[a-z][a-z0-9_]*`, not a keyword.
pub fn normalize_component_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim().to_lowercase();
    let invalid = |reason: &str| DomainError::InvalidComponentName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name cannot be empty")),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(invalid("name must start with a letter"));
        }
        Some(_) => {}
    }

    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Err(invalid(
            "only letters, digits, and underscores are allowed",
        ));
    }

    if GO_KEYWORDS.contains(&name.as_str()) {
        return Err(invalid("name is a reserved Go keyword"));
    }

    Ok(name)
}

/// Title-case a component name: `user` -> `User`, `order_item` -> `Order_item`.
///
/// Only the first character changes. This is the single display-name
/// derivation used by both the writer and the parser's cross-validation.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
