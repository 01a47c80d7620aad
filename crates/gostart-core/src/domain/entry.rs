//! Aggregator entries.

use std::collections::BTreeMap;

use crate::domain::{error::DomainError, naming};

/// One registered component inside an aggregator file.
///
/// Invariant: `display_name == title_case(name)`. Fields are private and the
/// only constructors derive the display name, so the pair cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    name: String,
    display_name: String,
    module_path: String,
}

impl Entry {
    /// Build an entry from an already-normalised component name.
    pub fn new(name: impl Into<String>, module_path: impl Into<String>) -> Self {
        let name = name.into();
        let display_name = naming::title_case(&name);
        Self {
            name,
            display_name,
            module_path: module_path.into(),
        }
    }

    /// Build an entry from raw user input, validating the name.
    pub fn parse(raw: &str, module_path: impl Into<String>) -> Result<Self, DomainError> {
        let name = naming::normalize_component_name(raw)?;
        Ok(Self::new(name, module_path))
    }

    /// Package / directory segment, e.g. `user`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exported identifier prefix, e.g. `User`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }
}

/// Entries keyed by display name: deduplicated and iterated in ascending
/// display-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: BTreeMap<String, Entry>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns `false` when an entry with the same display
    /// name was already present; the existing entry is kept.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if self.entries.contains_key(entry.display_name()) {
            return false;
        }
        self.entries.insert(entry.display_name.clone(), entry);
        true
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.entries.contains_key(display_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for EntrySet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

impl Extend<Entry> for EntrySet {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE: &str = "github.com/acme/shop";

    #[test]
    fn display_name_is_derived() {
        let entry = Entry::new("user", MODULE);
        assert_eq!(entry.name(), "user");
        assert_eq!(entry.display_name(), "User");
        assert_eq!(entry.module_path(), MODULE);
    }

    #[test]
    fn parse_normalises_input() {
        let entry = Entry::parse("Task", MODULE).unwrap();
        assert_eq!(entry.name(), "task");
        assert_eq!(entry.display_name(), "Task");
    }

    #[test]
    fn set_sorts_by_display_name() {
        let set: EntrySet = ["task", "blog", "user"]
            .into_iter()
            .map(|n| Entry::new(n, MODULE))
            .collect();
        let order: Vec<_> = set.iter().map(Entry::display_name).collect();
        assert_eq!(order, ["Blog", "Task", "User"]);
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut set = EntrySet::new();
        assert!(set.insert(Entry::new("user", MODULE)));
        assert!(!set.insert(Entry::new("user", MODULE)));
        assert_eq!(set.len(), 1);
    }
}
