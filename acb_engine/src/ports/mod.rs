//! Host-provided ports
//!
//! The engine never talks to a browser store or an HTTP client directly.
//! Hosts implement these traits; everything else in the crate is pure over
//! them.

pub mod persistence;
pub mod provider;

pub use persistence::{keys, MemoryStore, PersistenceError, PersistencePort};
pub use provider::{CatalogProvider, FetchState, ProviderError};
