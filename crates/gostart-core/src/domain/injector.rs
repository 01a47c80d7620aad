//! Line-anchored splicing for skeleton files.
//!
//! This is a text patch, not a structural edit: the injector knows nothing
//! about Go syntax. It finds the first line containing a literal marker and
//! inserts one line directly beneath it. A skeleton whose marker text was
//! edited by hand silently stops receiving that injection.

/// Indentation used when nothing non-blank follows the marker.
pub const DEFAULT_INDENT: &str = "\t";

/// Result of a single splice attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    Spliced(String),
    /// The marker does not occur in the text. Not an error: the skeleton in
    /// use simply has no slot for this line.
    MarkerNotFound,
}

impl Splice {
    pub fn is_spliced(&self) -> bool {
        matches!(self, Self::Spliced(_))
    }
}

/// Insert `line` directly after the first line containing `marker`.
///
/// The inserted line is re-indented to match the first non-blank line after
/// the marker, or [`DEFAULT_INDENT`] when there is none. The marker line
/// itself is never altered.
pub fn splice_after_marker(text: &str, marker: &str, line: &str) -> Splice {
    let mut lines: Vec<&str> = text.split('\n').collect();

    let Some(at) = lines.iter().position(|l| l.contains(marker)) else {
        return Splice::MarkerNotFound;
    };

    let indent = detect_indentation(&lines[at + 1..]);
    let inserted = format!("{indent}{}", line.trim_start());
    lines.insert(at + 1, &inserted);

    Splice::Spliced(lines.join("\n"))
}

/// [`splice_after_marker`], returning the text unchanged when the marker is
/// missing.
pub fn inject_after_marker(text: &str, marker: &str, line: &str) -> String {
    match splice_after_marker(text, marker, line) {
        Splice::Spliced(spliced) => spliced,
        Splice::MarkerNotFound => text.to_string(),
    }
}

/// Leading whitespace of the first non-blank line in `following`.
pub fn detect_indentation<'a>(following: &[&'a str]) -> &'a str {
    following
        .iter()
        .find(|l| !l.trim().is_empty())
        .map(|l| {
            let rest = l.trim_start_matches([' ', '\t']);
            &l[..l.len() - rest.len()]
        })
        .unwrap_or(DEFAULT_INDENT)
}

/// `true` when some line of `text` holds `line`, up to whitespace runs.
///
/// This is the idempotency guard applied before every injection. Comparing
/// whitespace-insensitively keeps it stable after `gofmt` re-aligns struct
/// fields and composite literals. The match may be followed by a comment or
/// other trailing text, but must start and end at token boundaries: neither
/// side may run on into an identifier, and the end may not continue into a
/// call, selector or index expression.
pub fn contains_line(text: &str, line: &str) -> bool {
    let wanted = squash(line);
    if wanted.is_empty() {
        return false;
    }
    text.lines().any(|l| {
        let squashed = squash(l);
        squashed.match_indices(&wanted).any(|(at, _)| {
            let before = squashed[..at].chars().next_back();
            let after = squashed[at + wanted.len()..].chars().next();
            !before.is_some_and(is_ident_char) && !after.is_some_and(continues_token)
        })
    })
}

fn squash(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn continues_token(c: char) -> bool {
    is_ident_char(c) || matches!(c, '(' | '.' | '[')
}
