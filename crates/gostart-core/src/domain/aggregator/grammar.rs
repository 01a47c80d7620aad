//! The recognised subset of Go source.
//!
//! Aggregator files are only ever read back to recover what this crate
//! wrote, so the grammar is three line shapes and nothing more:
//!
//! | Shape   | Example                                        |
//! |---------|------------------------------------------------|
//! | import  | `"github.com/acme/shop/src/app/usecases/user"` |
//! | alias   | `UserUsecase = user.UserUsecase`               |
//! | binding | `NewUserUsecase = user.NewUserUsecase`         |
//!
//! Any shape may carry a trailing `//` comment. Each regex is deliberately
//! loose about the identifiers it captures; the parser decides what a
//! capture means by comparing it against the names it derives itself.

use once_cell::sync::Lazy;
use regex::Regex;

/// A quoted import path on its own line, optionally named, optionally
/// prefixed with `import` (single-import form).
pub static IMPORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*(?:import[ \t]+)?(?:[A-Za-z_]\w*[ \t]+)?"([^"\s]+)"[ \t]*(?://[^\n]*)?[ \t\r]*$"#)
        .expect("import line pattern is valid")
});

/// `Lhs = pkg.Rhs`, optionally prefixed with `type` (single-alias form).
pub static ALIAS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:type[ \t]+)?([A-Z]\w*)[ \t]*=[ \t]*([a-z_]\w*)\.([A-Z]\w*)[ \t]*(?://[^\n]*)?[ \t\r]*$")
        .expect("alias line pattern is valid")
});

/// `NewLhs = pkg.NewRhs`, optionally prefixed with `var`.
pub static BINDING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:var[ \t]+)?New([A-Z]\w*)[ \t]*=[ \t]*([a-z_]\w*)\.New([A-Z]\w*)[ \t]*(?://[^\n]*)?[ \t\r]*$",
    )
    .expect("binding line pattern is valid")
});

/// An `(identifier, package)` pair captured from an alias or binding line
/// whose two sides name the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCapture<'a> {
    pub ident: &'a str,
    pub package: &'a str,
}

/// Every quoted import path in `text`.
pub fn import_paths(text: &str) -> impl Iterator<Item = &str> {
    IMPORT_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Alias lines whose left and right identifiers agree.
pub fn aliases(text: &str) -> impl Iterator<Item = AliasCapture<'_>> {
    consistent_captures(&ALIAS_LINE, text)
}

/// Binding lines whose left and right identifiers agree. The `New` prefix is
/// not part of the captured identifier.
pub fn bindings(text: &str) -> impl Iterator<Item = AliasCapture<'_>> {
    consistent_captures(&BINDING_LINE, text)
}

fn consistent_captures<'a>(
    re: &'static Regex,
    text: &'a str,
) -> impl Iterator<Item = AliasCapture<'a>> {
    re.captures_iter(text).filter_map(|caps| {
        let lhs = caps.get(1)?.as_str();
        let package = caps.get(2)?.as_str();
        let rhs = caps.get(3)?.as_str();
        (lhs == rhs).then_some(AliasCapture {
            ident: lhs,
            package,
        })
    })
}
