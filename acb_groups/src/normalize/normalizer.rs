//! Saved-group shape normalization
//!
//! Saved searches arrive in several historical shapes: a single group
//! object, an array of groups, a groupless `{fields: [...]}` object, and a
//! legacy flat field list. All of them normalize into the canonical
//! [`SavedGroup`] tree exactly once; downstream code never re-inspects raw
//! payloads.
//!
//! Field identity prefers ids already present (`_uniqueId`, then `rowId`);
//! synthesized ids are positional, derived from the field-group id and
//! field index, so normalizing the same payload twice yields identical ids.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value as Json;

use acb_engine::config::runtime::NormalizePreferences;
use acb_engine::model::{SelectionRow, TitleRef};
use acb_engine::{log_debug, log_warning};

use super::error::NormalizeError;
use super::types::{FieldGroup, SavedField, SavedGroup};

const MAX_CACHE_ENTRIES: usize = 64;

const DEFAULT_GROUP_ID: &str = "default-group";
const DEFAULT_GROUP_LABEL: &str = "Saved Groups";
const DEFAULT_FIELD_GROUP_ID: &str = "default-field-group";
const DEFAULT_FIELD_GROUP_LABEL: &str = "Search Criteria";

/// Normalizes saved-group payloads, caching results by payload content so
/// repeated loads of the same snapshot skip the walk.
pub struct GroupNormalizer {
    cache: Mutex<HashMap<u64, Vec<SavedGroup>>>,
    prefs: NormalizePreferences,
}

impl Default for GroupNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupNormalizer {
    pub fn new() -> Self {
        Self::with_preferences(NormalizePreferences::default())
    }

    pub fn with_preferences(prefs: NormalizePreferences) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            prefs,
        }
    }

    /// Normalize a raw payload into canonical groups.
    pub fn normalize(&self, payload: &Json) -> Result<Vec<SavedGroup>, NormalizeError> {
        let key = content_hash(payload);
        if self.prefs.enable_normalize_cache {
            if let Some(cached) = self.cache.lock().expect("cache lock").get(&key) {
                return Ok(cached.clone());
            }
        }

        let mut skipped = 0usize;
        let (groups, shape) = normalize_payload(payload, &mut skipped)?;
        if self.prefs.log_detected_shape {
            log_debug!("Detected saved-group payload shape",
                "shape" => shape,
                "groups" => groups.len()
            );
        }
        if skipped > 0 && self.prefs.log_skipped_fields {
            log_warning!("Skipped unparseable saved fields",
                "shape" => shape,
                "skipped" => skipped
            );
        }

        if self.prefs.enable_normalize_cache {
            let mut cache = self.cache.lock().expect("cache lock");
            if cache.len() >= MAX_CACHE_ENTRIES {
                cache.clear();
            }
            cache.insert(key, groups.clone());
        }
        Ok(groups)
    }

    pub fn clear_cache(&self) {
        self.cache.lock().expect("cache lock").clear();
    }
}

/// FNV-1a over the serialized payload. Identity for the cache only.
fn content_hash(payload: &Json) -> u64 {
    let serialized = payload.to_string();
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in serialized.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn normalize_payload(
    payload: &Json,
    skipped: &mut usize,
) -> Result<(Vec<SavedGroup>, &'static str), NormalizeError> {
    match payload {
        Json::Null => Ok((Vec::new(), "null")),
        Json::Object(obj) if obj.contains_key("groupFields") || obj.contains_key("fields") => {
            Ok((vec![normalize_group(payload, 0, skipped)?], "single-group"))
        }
        Json::Array(entries) => {
            if entries.is_empty() {
                return Ok((Vec::new(), "empty"));
            }
            // An array holds either group objects or legacy flat rows, never
            // a mix; anything carrying a group marker key is a group.
            if entries.iter().all(is_group_entry) {
                let groups = entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| normalize_group(entry, index, skipped))
                    .collect::<Result<_, _>>()?;
                Ok((groups, "group-array"))
            } else {
                Ok((normalize_legacy_rows(entries, skipped)?, "legacy-fields"))
            }
        }
        other => Err(NormalizeError::unrecognized_shape(format!(
            "expected object or array, got {}",
            json_kind(other)
        ))),
    }
}

fn is_group_entry(entry: &Json) -> bool {
    entry.as_object().is_some_and(|obj| {
        ["groupFields", "fields", "groupTitle", "title"]
            .iter()
            .any(|key| obj.contains_key(*key))
    })
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

fn normalize_group(
    entry: &Json,
    group_index: usize,
    skipped: &mut usize,
) -> Result<SavedGroup, NormalizeError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| NormalizeError::unrecognized_shape("group entry is not an object"))?;

    // `title` is the historical alias for a missing `groupTitle`.
    let group_title = obj
        .get("groupTitle")
        .or_else(|| obj.get("title"))
        .and_then(|t| serde_json::from_value::<TitleRef>(t.clone()).ok())
        .filter(|t| !t.id.is_empty())
        .unwrap_or_else(|| TitleRef::new(DEFAULT_GROUP_ID, DEFAULT_GROUP_LABEL));

    let group_fields = if let Some(raw_field_groups) = obj.get("groupFields").and_then(Json::as_array)
    {
        let mut group_fields = Vec::with_capacity(raw_field_groups.len());
        for (fg_index, raw) in raw_field_groups.iter().enumerate() {
            group_fields.push(normalize_field_group(raw, group_index, fg_index, skipped)?);
        }
        group_fields
    } else if let Some(raw_fields) = obj.get("fields").and_then(Json::as_array) {
        // Groupless legacy shape: bare rows wrap into one default field
        // group.
        vec![wrap_bare_fields(raw_fields, group_index, skipped)]
    } else {
        Vec::new()
    };

    Ok(SavedGroup {
        group_title,
        group_fields,
    })
}

fn normalize_field_group(
    entry: &Json,
    group_index: usize,
    fg_index: usize,
    skipped: &mut usize,
) -> Result<FieldGroup, NormalizeError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| NormalizeError::unrecognized_shape("field group is not an object"))?;

    // Missing field-group titles default positionally so sibling field
    // groups stay distinguishable in the synthetic ids below.
    let title = obj
        .get("title")
        .and_then(|t| serde_json::from_value::<TitleRef>(t.clone()).ok())
        .filter(|t| !t.id.is_empty())
        .unwrap_or_else(|| {
            TitleRef::new(format!("group-{fg_index}"), format!("Group {}", fg_index + 1))
        });

    let raw_fields = obj
        .get("fields")
        .and_then(Json::as_array)
        .map(|a| a.as_slice())
        .unwrap_or_default();

    let fields = raw_fields
        .iter()
        .enumerate()
        .filter_map(|(field_index, raw)| {
            let field = normalize_field(raw, &title.id, group_index, fg_index, field_index);
            if field.is_none() {
                *skipped += 1;
            }
            field
        })
        .collect();

    Ok(FieldGroup { title, fields })
}

/// A raw field that does not parse as a row is skipped, not fatal.
///
/// Identity precedence: an existing `_uniqueId`, then the row's own
/// `rowId`, then a composite keyed on the enclosing field-group id and the
/// field position.
fn normalize_field(
    raw: &Json,
    fg_id: &str,
    group_index: usize,
    fg_index: usize,
    field_index: usize,
) -> Option<SavedField> {
    let row: SelectionRow = serde_json::from_value(raw.clone()).ok()?;
    if row.field.id.is_empty() {
        return None;
    }

    let existing = raw
        .get("_uniqueId")
        .and_then(Json::as_str)
        .filter(|id| !id.is_empty());
    let unique_id = match existing {
        Some(id) => id.to_string(),
        None if !row.row_id.is_empty() => row.row_id.clone(),
        None if !fg_id.is_empty() => format!("field_{fg_id}_{field_index}"),
        None => format!("field_auto_{group_index}_{fg_index}_{field_index}"),
    };

    Some(SavedField { unique_id, row })
}

/// Wrap bare rows in the default field group, skipping unparseable ones.
fn wrap_bare_fields(entries: &[Json], group_index: usize, skipped: &mut usize) -> FieldGroup {
    let fields = entries
        .iter()
        .enumerate()
        .filter_map(|(field_index, raw)| {
            let field = normalize_field(raw, "", group_index, 0, field_index);
            if field.is_none() {
                *skipped += 1;
            }
            field
        })
        .collect();

    FieldGroup {
        title: TitleRef::new(DEFAULT_FIELD_GROUP_ID, DEFAULT_FIELD_GROUP_LABEL),
        fields,
    }
}

/// Legacy shape: a bare array of rows. Wrapped in one default group with one
/// default field group.
fn normalize_legacy_rows(
    entries: &[Json],
    skipped: &mut usize,
) -> Result<Vec<SavedGroup>, NormalizeError> {
    let field_group = wrap_bare_fields(entries, 0, skipped);
    if field_group.fields.is_empty() {
        return Err(NormalizeError::unrecognized_shape(
            "array holds neither groups nor parseable fields",
        ));
    }

    Ok(vec![SavedGroup {
        group_title: TitleRef::new(DEFAULT_GROUP_ID, DEFAULT_GROUP_LABEL),
        group_fields: vec![field_group],
    }])
}
