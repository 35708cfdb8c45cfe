//! Accordion expansion and selection tracking
//!
//! Tracks which saved groups and field groups are expanded and which field
//! is selected, with one invariant: a selected field is always visible.
//! Collapsing anything that contains the selection clears it.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use acb_engine::ports::persistence::{self, keys, PersistenceError, PersistencePort};

use crate::normalize::{SavedField, SavedGroup};

use super::identifier::FieldIdentifier;

/// The field currently selected in the accordion, with enough position to
/// decide containment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectedField {
    pub group_id: String,
    pub field_group_id: String,
    pub identifier: FieldIdentifier,
}

/// Persisted accordion state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AccordionState {
    expanded_groups: Vec<String>,
    expanded_field_groups: Vec<String>,
    selected: Option<SelectedField>,
}

pub struct AccordionTracker {
    expanded_groups: HashSet<String>,
    expanded_field_groups: HashSet<String>,
    selected: Option<SelectedField>,
    persistence: Arc<dyn PersistencePort>,
}

impl AccordionTracker {
    pub fn new(persistence: Arc<dyn PersistencePort>) -> Self {
        Self {
            expanded_groups: HashSet::new(),
            expanded_field_groups: HashSet::new(),
            selected: None,
            persistence,
        }
    }

    pub fn is_group_expanded(&self, group_id: &str) -> bool {
        self.expanded_groups.contains(group_id)
    }

    pub fn is_field_group_expanded(&self, field_group_id: &str) -> bool {
        self.expanded_field_groups.contains(field_group_id)
    }

    pub fn selected_field(&self) -> Option<&SelectedField> {
        self.selected.as_ref()
    }

    fn save(&self) -> Result<(), PersistenceError> {
        let state = AccordionState {
            expanded_groups: {
                let mut ids: Vec<String> = self.expanded_groups.iter().cloned().collect();
                ids.sort();
                ids
            },
            expanded_field_groups: {
                let mut ids: Vec<String> = self.expanded_field_groups.iter().cloned().collect();
                ids.sort();
                ids
            },
            selected: self.selected.clone(),
        };
        persistence::store_json(self.persistence.as_ref(), keys::SAVED_ACCORDION_STATE, &state)
    }

    /// Restore persisted state; a missing or malformed snapshot resets to
    /// everything collapsed, nothing selected.
    pub fn load_from_persistence(&mut self) -> Result<(), PersistenceError> {
        let state: AccordionState =
            persistence::load_json(self.persistence.as_ref(), keys::SAVED_ACCORDION_STATE)?
                .unwrap_or_default();
        self.expanded_groups = state.expanded_groups.into_iter().collect();
        self.expanded_field_groups = state.expanded_field_groups.into_iter().collect();
        self.selected = state.selected;
        Ok(())
    }

    /// Toggle a group panel. Collapsing also collapses the group's field
    /// groups and clears the selection if it lives inside.
    pub fn toggle_group(&mut self, group: &SavedGroup) -> Result<(), PersistenceError> {
        let group_id = group.group_title.id.clone();
        if self.expanded_groups.remove(&group_id) {
            for fg in &group.group_fields {
                self.expanded_field_groups.remove(&fg.title.id);
            }
            if self
                .selected
                .as_ref()
                .is_some_and(|s| s.group_id == group_id)
            {
                self.selected = None;
            }
        } else {
            self.expanded_groups.insert(group_id);
        }
        self.save()
    }

    /// Toggle a field-group panel inside an expanded group. Collapsing
    /// clears a selection contained in it.
    pub fn toggle_field_group(&mut self, field_group_id: &str) -> Result<(), PersistenceError> {
        if self.expanded_field_groups.remove(field_group_id) {
            if self
                .selected
                .as_ref()
                .is_some_and(|s| s.field_group_id == field_group_id)
            {
                self.selected = None;
            }
        } else {
            self.expanded_field_groups.insert(field_group_id.to_string());
        }
        self.save()
    }

    /// Select a field, expanding its containing panels so the invariant
    /// holds by construction.
    pub fn select_field(
        &mut self,
        group_id: &str,
        field_group_id: &str,
        field: &SavedField,
    ) -> Result<(), PersistenceError> {
        self.expanded_groups.insert(group_id.to_string());
        self.expanded_field_groups.insert(field_group_id.to_string());
        self.selected = Some(SelectedField {
            group_id: group_id.to_string(),
            field_group_id: field_group_id.to_string(),
            identifier: FieldIdentifier::for_field(field),
        });
        self.save()
    }

    pub fn clear_selected_field(&mut self) -> Result<(), PersistenceError> {
        self.selected = None;
        self.save()
    }

    /// Expand every panel of the given groups.
    pub fn expand_all(&mut self, groups: &[SavedGroup]) -> Result<(), PersistenceError> {
        for group in groups {
            self.expanded_groups.insert(group.group_title.id.clone());
            for fg in &group.group_fields {
                self.expanded_field_groups.insert(fg.title.id.clone());
            }
        }
        self.save()
    }

    /// Collapse everything. No panel is open afterwards, so nothing may stay
    /// selected.
    pub fn collapse_all(&mut self) -> Result<(), PersistenceError> {
        self.expanded_groups.clear();
        self.expanded_field_groups.clear();
        self.selected = None;
        self.save()
    }

    /// Collapse everything and drop the persisted state.
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.expanded_groups.clear();
        self.expanded_field_groups.clear();
        self.selected = None;
        self.persistence.remove_item(keys::SAVED_ACCORDION_STATE)
    }
}

/// Locate a field across the normalized tree by identifier. Returns the
/// containing group id, field-group id, and the field.
pub fn find_field<'a>(
    groups: &'a [SavedGroup],
    identifier: &FieldIdentifier,
) -> Option<(&'a str, &'a str, &'a SavedField)> {
    for group in groups {
        for fg in &group.group_fields {
            for field in &fg.fields {
                if identifier.matches(field) {
                    return Some((&group.group_title.id, &fg.title.id, field));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use acb_engine::model::{FieldRef, OperatorRef, SelectionRow, TitleRef};
    use acb_engine::ports::persistence::MemoryStore;
    use crate::normalize::FieldGroup;

    fn saved_field(unique_id: &str, field_id: &str) -> SavedField {
        let mut row = SelectionRow::default();
        row.field = FieldRef::new(field_id, field_id);
        row.operator = Some(OperatorRef::new("equals", "Equals"));
        row.value = "25".into();
        SavedField {
            unique_id: unique_id.to_string(),
            row,
        }
    }

    fn sample_groups() -> Vec<SavedGroup> {
        vec![SavedGroup {
            group_title: TitleRef::new("g1", "HR"),
            group_fields: vec![FieldGroup {
                title: TitleRef::new("fg1", "Criteria"),
                fields: vec![saved_field("field_g1_0", "Age")],
            }],
        }]
    }

    fn tracker() -> (AccordionTracker, Arc<MemoryStore>) {
        let backing = Arc::new(MemoryStore::new());
        (AccordionTracker::new(backing.clone()), backing)
    }

    #[test]
    fn test_select_expands_containing_panels() {
        let (mut tracker, _) = tracker();
        let groups = sample_groups();
        let field = &groups[0].group_fields[0].fields[0];

        tracker.select_field("g1", "fg1", field).unwrap();
        assert!(tracker.is_group_expanded("g1"));
        assert!(tracker.is_field_group_expanded("fg1"));
        assert!(tracker.selected_field().is_some());
    }

    #[test]
    fn test_collapsing_group_clears_contained_selection() {
        let (mut tracker, _) = tracker();
        let groups = sample_groups();
        let field = &groups[0].group_fields[0].fields[0];
        tracker.select_field("g1", "fg1", field).unwrap();

        tracker.toggle_group(&groups[0]).unwrap();
        assert!(!tracker.is_group_expanded("g1"));
        assert!(!tracker.is_field_group_expanded("fg1"));
        assert!(tracker.selected_field().is_none());
    }

    #[test]
    fn test_collapsing_unrelated_group_keeps_selection() {
        let (mut tracker, _) = tracker();
        let groups = sample_groups();
        let field = &groups[0].group_fields[0].fields[0];
        tracker.select_field("g1", "fg1", field).unwrap();

        let other = SavedGroup {
            group_title: TitleRef::new("g2", "Other"),
            group_fields: Vec::new(),
        };
        tracker.toggle_group(&other).unwrap(); // expand
        tracker.toggle_group(&other).unwrap(); // collapse
        assert!(tracker.selected_field().is_some());
    }

    #[test]
    fn test_collapsing_field_group_clears_contained_selection() {
        let (mut tracker, _) = tracker();
        let groups = sample_groups();
        let field = &groups[0].group_fields[0].fields[0];
        tracker.select_field("g1", "fg1", field).unwrap();

        tracker.toggle_field_group("fg1").unwrap();
        assert!(tracker.selected_field().is_none());
    }

    #[test]
    fn test_expand_all_and_collapse_all() {
        let (mut tracker, _) = tracker();
        let groups = sample_groups();
        let field = &groups[0].group_fields[0].fields[0];

        tracker.expand_all(&groups).unwrap();
        assert!(tracker.is_group_expanded("g1"));
        assert!(tracker.is_field_group_expanded("fg1"));

        tracker.select_field("g1", "fg1", field).unwrap();
        tracker.collapse_all().unwrap();
        assert!(!tracker.is_group_expanded("g1"));
        assert!(tracker.selected_field().is_none());
    }

    #[test]
    fn test_state_roundtrip_through_persistence() {
        let (mut tracker, backing) = tracker();
        let groups = sample_groups();
        let field = &groups[0].group_fields[0].fields[0];
        tracker.select_field("g1", "fg1", field).unwrap();

        let mut restored = AccordionTracker::new(backing);
        restored.load_from_persistence().unwrap();
        assert!(restored.is_group_expanded("g1"));
        assert_eq!(
            restored.selected_field().unwrap().identifier.unique_id,
            "field_g1_0"
        );
    }

    #[test]
    fn test_malformed_state_resets_to_default() {
        let (mut tracker, backing) = tracker();
        backing.set_item(keys::SAVED_ACCORDION_STATE, "!!").unwrap();
        tracker.load_from_persistence().unwrap();
        assert!(tracker.selected_field().is_none());
        assert!(!tracker.is_group_expanded("g1"));
    }

    #[test]
    fn test_reset_drops_persisted_state() {
        let (mut tracker, backing) = tracker();
        let groups = sample_groups();
        tracker.expand_all(&groups).unwrap();
        assert!(backing.get_item(keys::SAVED_ACCORDION_STATE).unwrap().is_some());

        tracker.reset().unwrap();
        assert_eq!(backing.get_item(keys::SAVED_ACCORDION_STATE).unwrap(), None);
        assert!(!tracker.is_group_expanded("g1"));
    }

    #[test]
    fn test_find_field_across_tree() {
        let groups = sample_groups();
        let ident = FieldIdentifier::for_field(&groups[0].group_fields[0].fields[0]);

        let (group_id, fg_id, field) = find_field(&groups, &ident).unwrap();
        assert_eq!(group_id, "g1");
        assert_eq!(fg_id, "fg1");
        assert_eq!(field.row.field.id, "Age");

        let missing = FieldIdentifier {
            unique_id: "nope".into(),
            ..Default::default()
        };
        assert!(find_field(&groups, &missing).is_none());
    }
}
