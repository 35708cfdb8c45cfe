//! Core data model for the criteria builder
//!
//! Everything here is plain serializable data. Rows are owned by the
//! selection store and mutated only through its public operations.

pub mod refs;
pub mod row;
pub mod value;

pub use refs::{DropdownItem, FieldRef, OperatorRef, ParentRef, TitleRef};
pub use row::{ParentSelection, SelectionRow, Touched};
pub use value::Value;
