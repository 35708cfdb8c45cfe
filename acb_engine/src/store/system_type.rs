//! System-type multi-select
//!
//! A small companion selection kept separately from the criteria rows: the
//! archival system types the search is limited to. Persisted under its own
//! key and relabeled on locale switches like everything else.

use std::sync::Arc;

use crate::model::DropdownItem;
use crate::ports::persistence::{self, keys, PersistenceError, PersistencePort};

pub struct SystemTypeSelection {
    values: Vec<DropdownItem>,
    persistence: Arc<dyn PersistencePort>,
}

impl SystemTypeSelection {
    pub fn new(persistence: Arc<dyn PersistencePort>) -> Self {
        Self {
            values: Vec::new(),
            persistence,
        }
    }

    pub fn values(&self) -> &[DropdownItem] {
        &self.values
    }

    pub fn set_values(&mut self, values: Vec<DropdownItem>) -> Result<(), PersistenceError> {
        self.values = values;
        persistence::store_json(
            self.persistence.as_ref(),
            keys::SELECTED_SYSTEM_TYPE_VALUES,
            &self.values,
        )
    }

    /// Restore the persisted selection; malformed snapshots yield empty.
    pub fn load_from_persistence(&mut self) -> Result<usize, PersistenceError> {
        self.values = persistence::load_json(
            self.persistence.as_ref(),
            keys::SELECTED_SYSTEM_TYPE_VALUES,
        )?
        .unwrap_or_default();
        Ok(self.values.len())
    }

    /// Rewrite labels from the catalog for the new locale, by id. Items the
    /// catalog no longer serves keep their previous label.
    pub fn relabel(&mut self, catalog: &[DropdownItem]) -> Result<(), PersistenceError> {
        for value in &mut self.values {
            if let Some(fresh) = catalog.iter().find(|item| item.id == value.id) {
                value.label = fresh.label.clone();
            }
        }
        persistence::store_json(
            self.persistence.as_ref(),
            keys::SELECTED_SYSTEM_TYPE_VALUES,
            &self.values,
        )
    }

    /// Full reset: the system-type selection, the accordion state, and the
    /// criteria snapshot all go at once so no stale combination survives.
    pub fn reset_all(&mut self) -> Result<(), PersistenceError> {
        self.values.clear();
        self.persistence
            .remove_item(keys::SELECTED_SYSTEM_TYPE_VALUES)?;
        self.persistence.remove_item(keys::SAVED_ACCORDION_STATE)?;
        self.persistence.remove_item(keys::SELECTED_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::persistence::MemoryStore;

    fn selection() -> (SystemTypeSelection, Arc<MemoryStore>) {
        let backing = Arc::new(MemoryStore::new());
        (SystemTypeSelection::new(backing.clone()), backing)
    }

    #[test]
    fn test_set_and_restore() {
        let (mut selection, backing) = selection();
        selection
            .set_values(vec![DropdownItem::new("st1", "Archive A")])
            .unwrap();

        let mut restored = SystemTypeSelection::new(backing);
        assert_eq!(restored.load_from_persistence().unwrap(), 1);
        assert_eq!(restored.values()[0].id, "st1");
    }

    #[test]
    fn test_malformed_snapshot_yields_empty() {
        let (mut selection, backing) = selection();
        backing
            .set_item(keys::SELECTED_SYSTEM_TYPE_VALUES, "nope[")
            .unwrap();
        assert_eq!(selection.load_from_persistence().unwrap(), 0);
    }

    #[test]
    fn test_relabel_joins_by_id() {
        let (mut selection, _) = selection();
        selection
            .set_values(vec![
                DropdownItem::new("st1", "Archive A"),
                DropdownItem::new("gone", "Old"),
            ])
            .unwrap();

        selection
            .relabel(&[DropdownItem::new("st1", "Archiv A")])
            .unwrap();
        assert_eq!(selection.values()[0].label, "Archiv A");
        assert_eq!(selection.values()[1].label, "Old");
    }

    #[test]
    fn test_reset_all_clears_related_keys() {
        let (mut selection, backing) = selection();
        selection
            .set_values(vec![DropdownItem::new("st1", "Archive A")])
            .unwrap();
        backing.set_item(keys::SAVED_ACCORDION_STATE, "{}").unwrap();
        backing.set_item(keys::SELECTED_FIELDS, "[]").unwrap();

        selection.reset_all().unwrap();
        assert!(selection.values().is_empty());
        assert_eq!(backing.get_item(keys::SELECTED_SYSTEM_TYPE_VALUES).unwrap(), None);
        assert_eq!(backing.get_item(keys::SAVED_ACCORDION_STATE).unwrap(), None);
        assert_eq!(backing.get_item(keys::SELECTED_FIELDS).unwrap(), None);
    }
}
