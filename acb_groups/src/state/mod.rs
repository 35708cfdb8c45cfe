//! Accordion state
//!
//! Expansion tracking, field selection, and lookup over the normalized
//! saved-group tree.

pub mod identifier;
pub mod tracker;

pub use identifier::FieldIdentifier;
pub use tracker::{find_field, AccordionTracker, SelectedField};
