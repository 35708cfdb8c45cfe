//! Locale relabeling
//!
//! After a locale switch the persisted rows still carry labels from the
//! previous locale. Relabeling joins every reference against the freshly
//! loaded catalogs by id and rewrites only labels. Ids, values, and touched
//! flags never change, so the pass is idempotent.

use crate::catalog::index::FieldIndex;
use crate::catalog::operators::OperatorCatalog;
use crate::locale::select_placeholder;
use crate::model::{DropdownItem, ParentSelection, SelectionRow};

/// Catalogs for the target locale.
pub struct RelabelContext<'a> {
    pub fields: &'a FieldIndex,
    pub parents: &'a [DropdownItem],
    pub operators: &'a OperatorCatalog,
}

impl<'a> RelabelContext<'a> {
    fn parent_label(&self, parent_id: &str) -> Option<&str> {
        self.parents
            .iter()
            .find(|item| item.id == parent_id)
            .map(|item| item.label.as_str())
    }
}

/// Relabel every row for a locale. Returns the number of references that
/// could not be resolved. Unresolved field and parent labels keep their
/// previous text; unresolved operators fall back to the locale placeholder.
pub fn relabel_rows(
    rows: &mut [SelectionRow],
    locale: &str,
    context: &RelabelContext<'_>,
) -> usize {
    let mut unresolved = 0;
    for row in rows.iter_mut() {
        unresolved += relabel_row(row, locale, context);
    }
    unresolved
}

fn relabel_row(row: &mut SelectionRow, locale: &str, context: &RelabelContext<'_>) -> usize {
    let mut unresolved = 0;

    // Field label: root catalog first, scoped catalog second. A miss keeps
    // the previous text rather than blanking it.
    if !row.field.id.is_empty() {
        let found = context
            .fields
            .root_map()
            .get(&row.field.id)
            .or_else(|| context.fields.scoped_map().get(&row.field.id));
        match found {
            Some(fresh) => row.field.label = fresh.label.clone(),
            None => unresolved += 1,
        }
    }

    if !row.parent.id.is_empty() {
        match context.parent_label(&row.parent.id) {
            Some(label) => row.parent.label = label.to_string(),
            None => unresolved += 1,
        }
    }

    // Operator label: searched across every category table. A miss keeps
    // the id but shows the locale placeholder until a catalog serves the
    // operator again; the sentinel always shows the placeholder.
    if let Some(op) = &mut row.operator {
        if op.id == "select" {
            op.label = select_placeholder(locale).to_string();
        } else if !op.id.is_empty() {
            match context.operators.find(&op.id) {
                Some(fresh) => op.label = fresh.label.clone(),
                None => {
                    op.label = select_placeholder(locale).to_string();
                    unresolved += 1;
                }
            }
        }
    }

    // Multi-select parents: resolve each item, keep the ones the catalog no
    // longer knows.
    match &mut row.parent_selected {
        ParentSelection::Many(items) => {
            for item in items.iter_mut() {
                if let Some(label) = context.parent_label(&item.id) {
                    item.label = label.to_string();
                }
            }
        }
        ParentSelection::One(item) => {
            if let Some(label) = context.parent_label(&item.id) {
                item.label = label.to_string();
            }
        }
        ParentSelection::None => {}
    }

    row.current_language = locale.to_string();
    unresolved
}
