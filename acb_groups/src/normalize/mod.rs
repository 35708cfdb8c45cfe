//! Saved-group normalization
//!
//! Turns the three historical saved-search payload shapes into one
//! canonical tree with stable, position-derived field identity.

pub mod error;
pub mod normalizer;
pub mod types;

pub use error::NormalizeError;
pub use normalizer::GroupNormalizer;
pub use types::{FieldGroup, SavedField, SavedGroup};
