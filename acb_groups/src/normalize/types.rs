//! Canonical saved-group tree

use serde::{Deserialize, Serialize};

use acb_engine::model::{SelectionRow, TitleRef};

/// One saved field: a criteria row plus the identity the accordion tracks
/// it by. The id key is spelled `_uniqueId` in persisted payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedField {
    #[serde(rename = "_uniqueId", default)]
    pub unique_id: String,
    #[serde(flatten)]
    pub row: SelectionRow,
}

/// A titled run of saved fields inside a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldGroup {
    pub title: TitleRef,
    pub fields: Vec<SavedField>,
}

/// Top-level saved group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedGroup {
    pub group_title: TitleRef,
    pub group_fields: Vec<FieldGroup>,
}

impl SavedGroup {
    /// Total field count across all field groups.
    pub fn field_count(&self) -> usize {
        self.group_fields.iter().map(|fg| fg.fields.len()).sum()
    }
}
