//! Selection store
//!
//! Owns the criteria-row list: add/remove/mutate operations, change
//! notification, and write-through persistence. Every mutation persists the
//! full snapshot and notifies subscribers; readers only ever see complete
//! states.

pub mod relabel;
pub mod system_type;

use std::sync::Arc;

use crate::catalog::fields::resolve_field_type;
use crate::catalog::operators::{self, OperatorCatalog};
use crate::config::runtime::StorePreferences;
use crate::locale::select_placeholder;
use crate::model::{DropdownItem, FieldRef, OperatorRef, ParentRef, ParentSelection, SelectionRow, Value};
use crate::ports::persistence::{self, keys, PersistenceError, PersistencePort};
use crate::wire::{self, SearchCriterion};
use crate::{log_debug, log_warning};

/// Handle returned by [`SelectionStore::subscribe`]; pass it back to
/// [`SelectionStore::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionHandle(u64);

type Listener = Box<dyn Fn(&[SelectionRow]) + Send + Sync>;

/// The criteria-row store.
pub struct SelectionStore {
    rows: Vec<SelectionRow>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
    persistence: Arc<dyn PersistencePort>,
    prefs: StorePreferences,
    locale: String,
}

impl SelectionStore {
    pub fn new(persistence: Arc<dyn PersistencePort>, locale: &str) -> Self {
        Self::with_preferences(persistence, locale, StorePreferences::default())
    }

    pub fn with_preferences(
        persistence: Arc<dyn PersistencePort>,
        locale: &str,
        prefs: StorePreferences,
    ) -> Self {
        Self {
            rows: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
            persistence,
            prefs,
            locale: locale.to_string(),
        }
    }

    pub fn rows(&self) -> &[SelectionRow] {
        &self.rows
    }

    pub fn snapshot(&self) -> Vec<SelectionRow> {
        self.rows.clone()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Register a change listener. It fires after every committed mutation,
    /// never during one.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&[SelectionRow]) + Send + Sync + 'static,
    ) -> SubscriptionHandle {
        self.next_listener_id += 1;
        let id = self.next_listener_id;
        self.listeners.push((id, Box::new(listener)));
        SubscriptionHandle(id)
    }

    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.listeners.retain(|(id, _)| *id != handle.0);
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.rows);
        }
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        if !self.prefs.persist_on_change {
            return Ok(());
        }
        persistence::store_json(self.persistence.as_ref(), keys::SELECTED_FIELDS, &self.rows)
    }

    fn commit(&self) -> Result<(), PersistenceError> {
        self.persist()?;
        self.notify();
        Ok(())
    }

    /// Add a row for a picked catalog field.
    ///
    /// The default operator comes from the field's operator table; when no
    /// priority candidate is available the sentinel is stored instead, with
    /// its placeholder label in the current locale.
    pub fn add_field(
        &mut self,
        field: FieldRef,
        parent: ParentRef,
        catalog: &OperatorCatalog,
        is_parent_array: bool,
    ) -> Result<usize, PersistenceError> {
        let mut row = SelectionRow::for_field(field, parent, &self.locale, is_parent_array);

        let available = catalog.operations_for_field(&row.field);
        let field_type = resolve_field_type(&row.field.id);
        row.operator = match operators::pick_default_operator(available, field_type) {
            Some(op) => Some(op),
            None => {
                if self.prefs.log_store_mutations {
                    log_debug!("No default operator candidate",
                        "field_id" => row.field.id
                    );
                }
                Some(OperatorRef::new("select", select_placeholder(&self.locale)))
            }
        };

        self.rows.push(row);
        self.commit()?;
        Ok(self.rows.len() - 1)
    }

    /// Remove a row by index. Out-of-bounds indexes are a no-op.
    pub fn delete_field(&mut self, index: usize) -> Result<(), PersistenceError> {
        if index >= self.rows.len() {
            return Ok(());
        }
        self.rows.remove(index);
        self.commit()
    }

    /// Drop every row and both snapshot keys, current and legacy.
    pub fn clear_fields(&mut self) -> Result<(), PersistenceError> {
        self.rows.clear();
        self.persistence.remove_item(keys::SELECTED_FIELDS)?;
        if self.prefs.clear_legacy_snapshot_key {
            self.persistence.remove_item(keys::LEGACY_SAVED_SEARCH_FIELDS)?;
        }
        self.notify();
        Ok(())
    }

    /// Replace a row's multi-select parent list. The first item is mirrored
    /// into the single parent slot so downstream consumers that only read
    /// `parent` keep working; an empty list clears it.
    pub fn set_parent_selection(
        &mut self,
        index: usize,
        items: Vec<DropdownItem>,
    ) -> Result<(), PersistenceError> {
        let Some(row) = self.rows.get_mut(index) else {
            return Ok(());
        };
        row.is_parent_array = true;
        row.parent_touched = true;
        row.parent = items
            .first()
            .map(|item| ParentRef::new(&*item.id, &*item.label))
            .unwrap_or_else(ParentRef::empty);
        row.parent_selected = ParentSelection::Many(items);
        self.commit()
    }

    pub fn set_operator(
        &mut self,
        index: usize,
        operator: OperatorRef,
    ) -> Result<(), PersistenceError> {
        let Some(row) = self.rows.get_mut(index) else {
            return Ok(());
        };
        row.operator = Some(operator);
        row.operator_touched = true;
        self.commit()
    }

    pub fn set_value(&mut self, index: usize, value: Value) -> Result<(), PersistenceError> {
        let Some(row) = self.rows.get_mut(index) else {
            return Ok(());
        };
        row.value = value;
        self.commit()
    }

    /// Rewrite every label for the current locale. Ids, values, and touched
    /// flags are untouched; running it twice changes nothing.
    pub fn update_field_labels(
        &mut self,
        locale: &str,
        context: &relabel::RelabelContext<'_>,
    ) -> Result<(), PersistenceError> {
        self.locale = locale.to_string();
        let unresolved = relabel::relabel_rows(&mut self.rows, locale, context);
        if unresolved > 0 && self.prefs.log_unresolved_labels {
            log_warning!("Labels unresolved during relabel",
                "count" => unresolved,
                "locale" => locale
            );
        }
        self.commit()
    }

    /// Restore rows from the persisted snapshot. A missing or malformed
    /// snapshot yields an empty store; restored rows are stamped with the
    /// current locale.
    pub fn load_from_persistence(&mut self) -> Result<usize, PersistenceError> {
        let rows: Vec<SelectionRow> =
            persistence::load_json(self.persistence.as_ref(), keys::SELECTED_FIELDS)?
                .unwrap_or_default();
        self.rows = rows;
        for row in &mut self.rows {
            row.current_language = self.locale.clone();
        }
        self.notify();
        Ok(self.rows.len())
    }

    /// The current rows in outbound request form.
    pub fn to_wire(&self) -> Vec<SearchCriterion> {
        wire::convert_to_wire_format(&self.rows)
    }
}
