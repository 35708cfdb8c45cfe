//! Consolidated event codes and classification system
//!
//! Single source of truth for all event codes, their metadata, and
//! classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Catalog loading error codes
pub mod catalog {
    use super::Code;

    pub const FETCH_FAILED: Code = Code::new("E105");
    pub const SCOPED_FETCH_FAILED: Code = Code::new("E106");
    pub const MALFORMED_PAYLOAD: Code = Code::new("E107");
    pub const STALE_LOCALE_RESPONSE: Code = Code::new("E108");
    pub const UNKNOWN_FIELD: Code = Code::new("E109");
}

/// Selection store error codes
pub mod store {
    use super::Code;

    pub const SNAPSHOT_MALFORMED: Code = Code::new("E120");
    pub const ROW_INDEX_OUT_OF_BOUNDS: Code = Code::new("E121");
    pub const NO_DEFAULT_OPERATOR: Code = Code::new("E122");
    pub const UNRESOLVED_LABEL: Code = Code::new("E123");
}

/// Validation event codes
pub mod validation {
    use super::Code;

    pub const ROWS_INVALID: Code = Code::new("E140");
}

/// Persistence error codes
pub mod persistence {
    use super::Code;

    pub const BACKEND_UNAVAILABLE: Code = Code::new("E160");
    pub const WRITE_FAILED: Code = Code::new("E161");
    pub const SERIALIZE_FAILED: Code = Code::new("E162");
}

/// Saved-group normalization error codes
pub mod groups {
    use super::Code;

    pub const UNRECOGNIZED_SHAPE: Code = Code::new("E180");
    pub const FIELD_SKIPPED: Code = Code::new("E181");
    pub const STATE_MALFORMED: Code = Code::new("E182");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    // Catalog success codes
    pub const CATALOG_LOADED: Code = Code::new("I020");
    pub const LOCALE_SWITCH_COMPLETE: Code = Code::new("I021");

    // Store success codes
    pub const SNAPSHOT_RESTORED: Code = Code::new("I030");
    pub const SELECTION_PERSISTED: Code = Code::new("I031");

    // Validation success codes
    pub const VALIDATION_PASSED: Code = Code::new("I040");

    // Saved-group success codes
    pub const GROUPS_NORMALIZED: Code = Code::new("I050");
    pub const ACCORDION_STATE_RESTORED: Code = Code::new("I051");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal system error",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "System initialization failure",
            ),
        );

        // Catalog errors
        registry.insert(
            "E105",
            ErrorMetadata::new(
                "E105",
                "Catalog",
                Severity::High,
                true,
                "Field catalog fetch failed",
            ),
        );
        registry.insert(
            "E106",
            ErrorMetadata::new(
                "E106",
                "Catalog",
                Severity::Medium,
                true,
                "Scoped field fetch failed for a parent",
            ),
        );
        registry.insert(
            "E107",
            ErrorMetadata::new(
                "E107",
                "Catalog",
                Severity::High,
                true,
                "Catalog payload did not match the expected shape",
            ),
        );
        registry.insert(
            "E108",
            ErrorMetadata::new(
                "E108",
                "Catalog",
                Severity::Low,
                true,
                "Catalog response for a superseded locale was discarded",
            ),
        );
        registry.insert(
            "E109",
            ErrorMetadata::new(
                "E109",
                "Catalog",
                Severity::Low,
                true,
                "Field id not present in any loaded catalog",
            ),
        );

        // Store errors
        registry.insert(
            "E120",
            ErrorMetadata::new(
                "E120",
                "Store",
                Severity::Medium,
                true,
                "Persisted selection snapshot could not be parsed",
            ),
        );
        registry.insert(
            "E121",
            ErrorMetadata::new(
                "E121",
                "Store",
                Severity::Low,
                true,
                "Row index outside the current selection",
            ),
        );
        registry.insert(
            "E122",
            ErrorMetadata::new(
                "E122",
                "Store",
                Severity::Low,
                true,
                "No default operator candidate available for a new row",
            ),
        );
        registry.insert(
            "E123",
            ErrorMetadata::new(
                "E123",
                "Store",
                Severity::Low,
                true,
                "Label could not be resolved during a locale relabel",
            ),
        );

        // Validation events
        registry.insert(
            "E140",
            ErrorMetadata::new(
                "E140",
                "Validation",
                Severity::Low,
                true,
                "One or more criteria rows failed validation",
            ),
        );

        // Persistence errors
        registry.insert(
            "E160",
            ErrorMetadata::new(
                "E160",
                "Persistence",
                Severity::High,
                true,
                "Persistence backend unavailable",
            ),
        );
        registry.insert(
            "E161",
            ErrorMetadata::new(
                "E161",
                "Persistence",
                Severity::Medium,
                true,
                "Write to the persistence backend failed",
            ),
        );
        registry.insert(
            "E162",
            ErrorMetadata::new(
                "E162",
                "Persistence",
                Severity::Medium,
                true,
                "Value could not be serialized for storage",
            ),
        );

        // Saved-group errors
        registry.insert(
            "E180",
            ErrorMetadata::new(
                "E180",
                "Groups",
                Severity::Medium,
                true,
                "Saved-group payload did not match any recognized shape",
            ),
        );
        registry.insert(
            "E181",
            ErrorMetadata::new(
                "E181",
                "Groups",
                Severity::Low,
                true,
                "A saved field was skipped during normalization",
            ),
        );
        registry.insert(
            "E182",
            ErrorMetadata::new(
                "E182",
                "Groups",
                Severity::Low,
                true,
                "Persisted accordion state could not be parsed",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Low)
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code).map(|m| m.category).unwrap_or("Unknown")
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code).map(|m| m.recoverable).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(catalog::FETCH_FAILED.to_string(), "E105");
        assert_eq!(catalog::FETCH_FAILED.as_str(), "E105");
    }

    #[test]
    fn test_registry_covers_error_constants() {
        for code in [
            system::INTERNAL_ERROR,
            catalog::FETCH_FAILED,
            catalog::STALE_LOCALE_RESPONSE,
            store::SNAPSHOT_MALFORMED,
            store::NO_DEFAULT_OPERATOR,
            validation::ROWS_INVALID,
            persistence::WRITE_FAILED,
            groups::UNRECOGNIZED_SHAPE,
        ] {
            assert_ne!(
                get_description(code.as_str()),
                "Unknown error",
                "missing metadata for {code}"
            );
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(!is_recoverable("ERR001"));
        assert_eq!(get_category("E120"), "Store");
        assert!(is_recoverable("E120"));
        assert_eq!(get_category("bogus"), "Unknown");
    }
}
