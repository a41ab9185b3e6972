//! PDF Document module - the indirect object table.
//!
//! This module contains:
//! - `store` - Slot arena keyed by object identity (ObjectStore)
//! - `config` - Store parameters (StoreParams)

pub mod config;
pub mod store;

// Re-export main types for convenience
pub use config::{DEFAULT_MAX_RESOLVE_DEPTH, StoreParams};
pub use store::{NoResolver, ObjectResolver, ObjectStore, SlotId};
