//! Source-to-target column mappings.
//!
//! A mapping pairs one source (file) header with one target column key.
//! The set is unique by target key; re-mapping a target replaces its
//! entry. Nothing enforces source-side uniqueness.

use serde::{Deserialize, Serialize};

/// One source-column-to-target-key correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Header exactly as it appears in the uploaded file.
    pub source_column: String,
    /// Target column key from the host's column definitions.
    pub target_key: String,
}

/// The working set of mappings for one import session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingSet {
    mappings: Vec<Mapping>,
}

impl MappingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the mapping for `target_key`.
    pub fn set(&mut self, target_key: impl Into<String>, source_column: impl Into<String>) {
        let target_key = target_key.into();
        let source_column = source_column.into();
        if let Some(existing) = self
            .mappings
            .iter_mut()
            .find(|m| m.target_key == target_key)
        {
            existing.source_column = source_column;
        } else {
            self.mappings.push(Mapping {
                source_column,
                target_key,
            });
        }
    }

    /// Removes the mapping for `target_key`, if any. This is the
    /// "no column" option in a mapping UI.
    pub fn clear(&mut self, target_key: &str) {
        self.mappings.retain(|m| m.target_key != target_key);
    }

    /// Returns the mapped source column for `target_key`.
    #[must_use]
    pub fn source_for(&self, target_key: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.target_key == target_key)
            .map(|m| m.source_column.as_str())
    }

    #[must_use]
    pub fn contains_target(&self, target_key: &str) -> bool {
        self.source_for(target_key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_target() {
        let mut set = MappingSet::new();
        set.set("email", "E-Mail");
        set.set("email", "Email Address");
        assert_eq!(set.len(), 1);
        assert_eq!(set.source_for("email"), Some("Email Address"));
    }

    #[test]
    fn clear_removes_target() {
        let mut set = MappingSet::new();
        set.set("email", "Email");
        set.set("name", "Name");
        set.clear("email");
        assert_eq!(set.len(), 1);
        assert!(!set.contains_target("email"));
        assert!(set.contains_target("name"));
    }

    #[test]
    fn duplicate_source_columns_are_not_rejected() {
        // Inherited behavior: one source column may feed several targets.
        let mut set = MappingSet::new();
        set.set("name", "Full Name");
        set.set("display_name", "Full Name");
        assert_eq!(set.len(), 2);
    }
}
