//! Static field/operator catalogs and catalog indexing
//!
//! The field and operator tables are the single source of truth for field
//! typing and operator semantics; everything downstream (control shapes,
//! validation, default operators) derives from them.

pub mod fields;
pub mod index;
pub mod operators;
pub mod pick;

pub use fields::{dropdown_source, resolve_field_type, FieldType};
pub use index::FieldIndex;
pub use operators::{
    default_operator_priority, pick_default_operator, OperatorCatalog, OperatorId,
};
pub use pick::field_from_pick;
