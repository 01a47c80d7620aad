//! Recover entries from an aggregator file written by [`super::writer`].
//!
//! Parsing never fails. Anything outside the recognised grammar is ignored,
//! and a component only counts as registered when an import line and at
//! least one alias or binding line agree on it. A stray import alone cannot
//! fabricate an entry.

use std::collections::BTreeSet;

use crate::domain::{
    aggregator::grammar,
    entry::{Entry, EntrySet},
    kind::AggregatorKind,
    naming,
};

/// What an aggregator file says about each component, block by block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAggregator {
    module_path: String,
    /// Names imported from `<module>/<root>/<name>`.
    imports: BTreeSet<String>,
    /// Names with a `<X><Suffix> = <name>.<X><Suffix>` line.
    aliases: BTreeSet<String>,
    /// Names with a `New<X><Suffix> = <name>.New<X><Suffix>` line.
    bindings: BTreeSet<String>,
}

impl ParsedAggregator {
    /// Entries whose import is backed by an alias or a binding.
    pub fn entries(&self) -> EntrySet {
        self.imports
            .iter()
            .filter(|name| self.aliases.contains(*name) || self.bindings.contains(*name))
            .map(|name| Entry::new(name.clone(), self.module_path.clone()))
            .collect()
    }

    /// `true` when all three blocks reference `entry`.
    ///
    /// A file left half-written by an interrupted run (binding present,
    /// import missing) is not complete and gets regenerated.
    pub fn is_complete(&self, entry: &Entry) -> bool {
        let name = entry.name();
        self.imports.contains(name) && self.aliases.contains(name) && self.bindings.contains(name)
    }

    pub fn has_binding(&self, entry: &Entry) -> bool {
        self.bindings.contains(entry.name())
    }
}

/// Parser for one aggregator kind under one module.
#[derive(Debug, Clone)]
pub struct AggregatorParser {
    kind: AggregatorKind,
    module_path: String,
    /// `<module>/<import root>/`
    import_prefix: String,
}

impl AggregatorParser {
    pub fn new(kind: AggregatorKind, module_path: &str, import_root: &str) -> Self {
        Self {
            kind,
            module_path: module_path.to_string(),
            import_prefix: format!("{module_path}/{import_root}/"),
        }
    }

    pub fn parse(&self, text: &str) -> ParsedAggregator {
        let imports = grammar::import_paths(text)
            .filter_map(|path| path.strip_prefix(&self.import_prefix))
            .filter(|segment| is_component_segment(segment))
            .map(str::to_string)
            .collect();

        let suffix = self.kind.suffix();
        let owned = |capture: grammar::AliasCapture<'_>| {
            let expected = format!("{}{}", naming::title_case(capture.package), suffix);
            (capture.ident == expected).then(|| capture.package.to_string())
        };

        let aliases = grammar::aliases(text).filter_map(owned).collect();
        let bindings = grammar::bindings(text).filter_map(owned).collect();

        ParsedAggregator {
            module_path: self.module_path.clone(),
            imports,
            aliases,
            bindings,
        }
    }

    /// Shorthand for `parse(text).entries()`.
    pub fn parse_entries(&self, text: &str) -> EntrySet {
        self.parse(text).entries()
    }
}

/// A single lowercase package segment, as produced by the naming rules.
fn is_component_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
