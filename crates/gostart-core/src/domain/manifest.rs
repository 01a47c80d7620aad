//! Go module manifest (`go.mod`) parsing.

/// Extract the module path from the text of a `go.mod` file.
///
/// The first trimmed line starting with `module ` wins. A quoted path
/// (`module "example.com/x"`) is unquoted; trailing `//` comments are dropped.
pub fn parse_module_name(manifest: &str) -> Option<String> {
    manifest.lines().map(str::trim).find_map(|line| {
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.split("//").next().unwrap_or_default().trim();
        let path = path.trim_matches('"').trim();
        (!path.is_empty()).then(|| path.to_string())
    })
}
