//! Loaded-catalog index for id-based lookups
//!
//! Holds the root-level and scoped field maps for the active locale so
//! relabeling and pick handling can join on stable ids.

use std::collections::HashMap;

use crate::model::FieldRef;

/// Build an id-keyed map from a flat field list.
pub fn index_fields(fields: &[FieldRef]) -> HashMap<String, FieldRef> {
    fields
        .iter()
        .map(|field| (field.id.clone(), field.clone()))
        .collect()
}

/// Root and scoped field maps for the currently-loaded locale.
#[derive(Debug, Default, Clone)]
pub struct FieldIndex {
    root: HashMap<String, FieldRef>,
    scoped: HashMap<String, FieldRef>,
}

impl FieldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the root-catalog map.
    pub fn set_root_fields(&mut self, fields: &[FieldRef]) {
        self.root = index_fields(fields);
    }

    /// Merge scoped fields loaded for one parent into the scoped map.
    /// Fields for several parents accumulate until cleared.
    pub fn merge_scoped_fields(&mut self, fields: &[FieldRef]) {
        for field in fields {
            self.scoped.insert(field.id.clone(), field.clone());
        }
    }

    pub fn clear_scoped(&mut self) {
        self.scoped.clear();
    }

    pub fn root_map(&self) -> &HashMap<String, FieldRef> {
        &self.root
    }

    pub fn scoped_map(&self) -> &HashMap<String, FieldRef> {
        &self.scoped
    }

    /// Look a field up in the map matching its origin: root-catalog rows
    /// (`is_parent_array`) live in the root map, scoped rows in the scoped
    /// map.
    pub fn find_field(&self, field_id: &str, is_parent_array: bool) -> Option<&FieldRef> {
        if field_id.is_empty() {
            return None;
        }
        if is_parent_array {
            self.root.get(field_id)
        } else {
            self.scoped.get(field_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_field_respects_origin() {
        let mut index = FieldIndex::new();
        index.set_root_fields(&[FieldRef::new("Name", "Name")]);
        index.merge_scoped_fields(&[FieldRef::new("Age", "Age")]);

        assert!(index.find_field("Name", true).is_some());
        assert!(index.find_field("Name", false).is_none());
        assert!(index.find_field("Age", false).is_some());
        assert!(index.find_field("", true).is_none());
    }

    #[test]
    fn test_scoped_fields_accumulate_and_clear() {
        let mut index = FieldIndex::new();
        index.merge_scoped_fields(&[FieldRef::new("A", "a")]);
        index.merge_scoped_fields(&[FieldRef::new("B", "b")]);
        assert_eq!(index.scoped_map().len(), 2);

        index.clear_scoped();
        assert!(index.scoped_map().is_empty());
    }
}
