//! Persistence gateways
//!
//! # Contract
//! - [`PersistenceGateway::load`] returns records sorted by `sort_order` ascending
//! - [`PersistenceGateway::replace`] atomically swaps the whole persisted layout
//!   for exactly the given records
//!
//! A store that can only delete and insert rows must not implement `replace`
//! as delete-all followed by insert-all: a failed insert would leave the site
//! with no layout at all. [`VersionedGateway`] builds an atomic replace on top
//! of such a store instead.

mod file;
mod memory;
mod versioned;

pub use file::JsonFileGateway;
pub use memory::MemoryGateway;
pub use versioned::{FailPoint, LayoutRow, MemoryRowStore, RowStore, VersionedGateway};

use crate::error::GatewayError;
use async_trait::async_trait;
use folio_layout::PersistedSection;

/// Load / replace of the persisted layout
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Persisted layout, sorted by `sort_order` ascending
    async fn load(&self) -> Result<Vec<PersistedSection>, GatewayError>;

    /// Atomically replace the persisted layout with `entries`
    async fn replace(&self, entries: Vec<PersistedSection>) -> Result<(), GatewayError>;
}

/// Sort records by `sort_order`, keeping arrival order for ties
pub(crate) fn sort_records(records: &mut [PersistedSection]) {
    records.sort_by_key(|record| record.sort_order);
}
