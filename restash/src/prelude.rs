//! Convenient re-exports of commonly used types from restash.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use restash::prelude::*;
//! ```
//!
//! This provides access to:
//! - Entity traits and the derive macro
//! - Store traits and builders
//! - The service layer
//! - Paging parameters
//! - Error types

pub use restash_core::{
    entity::{Entity, EntityExt},
    error::{StoreError, StoreResult},
    paging::{DEFAULT_PAGE_SIZE, PagingInfo, PagingInfoBuilder},
    service::{ReadOnlyService, Service, SharedReadOnlyService, SharedService},
    store::{DataStore, ReadOnlyDataStore, StoreBuilder},
};

pub use restash_macros::Entity;
