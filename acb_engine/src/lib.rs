// Internal modules
pub mod catalog;
pub mod config;
pub mod control;
pub mod locale;
#[macro_use]
pub mod logging;
pub mod model;
pub mod ports;
pub mod store;
pub mod validation;
pub mod wire;

// Re-export key types for library consumers
pub use catalog::{FieldIndex, FieldType, OperatorCatalog, OperatorId};
pub use control::{ControlKind, ValueControl};
pub use model::{DropdownItem, FieldRef, OperatorRef, ParentRef, SelectionRow, TitleRef, Value};
pub use ports::{CatalogProvider, MemoryStore, PersistencePort};
pub use store::{SelectionStore, SubscriptionHandle};
pub use validation::ValidationReport;
pub use wire::{SearchCriterion, SearchRequest};
