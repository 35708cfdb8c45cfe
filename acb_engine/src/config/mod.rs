//! Configuration module
//!
//! Runtime preferences only: behavior toggles a host may set through the
//! environment. Nothing here affects correctness of the engine, only how
//! chatty and how defensive it is.

pub mod runtime;

pub use runtime::{
    LoggingPreferences, NormalizePreferences, RuntimeConfig, StorePreferences,
};
