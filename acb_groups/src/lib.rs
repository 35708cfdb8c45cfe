// Internal modules
pub mod normalize;
pub mod state;

// Re-export key types for library consumers
pub use normalize::{FieldGroup, GroupNormalizer, NormalizeError, SavedField, SavedGroup};
pub use state::{AccordionTracker, FieldIdentifier, SelectedField};
