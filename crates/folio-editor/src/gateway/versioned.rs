//! Atomic replace over a row store
//!
//! Rows are tagged with a layout version and one pointer names the active
//! version. A replace reserves a version no other call will ever get, stages
//! the new rows under it, flips the pointer in a single write, then deletes
//! the version it replaced. A failure before the flip leaves the active
//! layout untouched; a failure after it only leaves garbage rows behind.
//!
//! Overlapping replaces never share a version, so their rows cannot merge
//! and a failing call only ever discards its own rows. The last flip wins.

use super::PersistenceGateway;
use crate::error::GatewayError;
use async_trait::async_trait;
use folio_layout::PersistedSection;
use folio_section::Content;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One stored row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    /// Layout version the row belongs to
    pub version: u64,
    /// Referenced section type
    pub section_type_id: String,
    /// Position within its version
    pub sort_order: u32,
    /// Section content
    pub content: Content,
}

/// Minimal table-like store the versioned gateway runs on
///
/// Each method is one independent request; none of them needs to be
/// transactional except [`RowStore::reserve_version`], an atomic counter
/// increment, and [`RowStore::activate`], a single-value write.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Currently active version, `None` before the first replace
    async fn active_version(&self) -> Result<Option<u64>, GatewayError>;

    /// Hand out a version never returned before, even to concurrent callers
    async fn reserve_version(&self) -> Result<u64, GatewayError>;

    /// Rows of one version, in any order
    async fn select(&self, version: u64) -> Result<Vec<LayoutRow>, GatewayError>;

    /// Insert rows
    async fn insert(&self, rows: Vec<LayoutRow>) -> Result<(), GatewayError>;

    /// Point the active version at `version`
    async fn activate(&self, version: u64) -> Result<(), GatewayError>;

    /// Delete all rows of one version
    async fn delete_version(&self, version: u64) -> Result<(), GatewayError>;
}

/// [`PersistenceGateway`] with atomic replace over any [`RowStore`]
#[derive(Debug)]
pub struct VersionedGateway<S> {
    store: S,
}

impl<S: RowStore> VersionedGateway<S> {
    /// Wrap a row store
    #[inline]
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn discard_staged(&self, version: u64) {
        if let Err(e) = self.store.delete_version(version).await {
            tracing::warn!(version, error = %e, "failed to discard staged layout rows");
        }
    }
}

#[async_trait]
impl<S: RowStore> PersistenceGateway for VersionedGateway<S> {
    async fn load(&self) -> Result<Vec<PersistedSection>, GatewayError> {
        let Some(active) = self.store.active_version().await? else {
            return Ok(Vec::new());
        };

        let mut rows = self.store.select(active).await?;
        rows.sort_by_key(|row| row.sort_order);

        Ok(rows
            .into_iter()
            .map(|row| PersistedSection::new(row.section_type_id, row.sort_order, row.content))
            .collect())
    }

    async fn replace(&self, entries: Vec<PersistedSection>) -> Result<(), GatewayError> {
        let previous = self.store.active_version().await?;
        let staged = self.store.reserve_version().await?;

        let rows = entries
            .into_iter()
            .map(|entry| LayoutRow {
                version: staged,
                section_type_id: entry.section_type_id,
                sort_order: entry.sort_order,
                content: entry.content,
            })
            .collect();

        if let Err(e) = self.store.insert(rows).await {
            self.discard_staged(staged).await;
            return Err(e);
        }

        if let Err(e) = self.store.activate(staged).await {
            self.discard_staged(staged).await;
            return Err(e);
        }

        if let Some(old) = previous {
            if let Err(e) = self.store.delete_version(old).await {
                tracing::warn!(version = old, error = %e, "stale layout version left behind");
            }
        }

        tracing::debug!(version = staged, "layout version activated");
        Ok(())
    }
}

/// Request a [`MemoryRowStore`] can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailPoint {
    /// Insert stores the first half of the rows, then fails
    Insert,
    /// Activate fails without changing the pointer
    Activate,
    /// Delete fails without deleting
    Delete,
}

#[derive(Debug, Default)]
struct RowState {
    rows: Vec<LayoutRow>,
    active: Option<u64>,
    last_reserved: u64,
    armed: Vec<FailPoint>,
}

impl RowState {
    fn trip(&mut self, point: FailPoint) -> bool {
        match self.armed.iter().position(|p| *p == point) {
            Some(index) => {
                self.armed.remove(index);
                true
            }
            None => false,
        }
    }
}

/// In-memory [`RowStore`] with failure injection
#[derive(Debug, Default)]
pub struct MemoryRowStore {
    state: Mutex<RowState>,
}

impl MemoryRowStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next request of this kind fail
    pub fn fail_next(&self, point: FailPoint) {
        self.state.lock().armed.push(point);
    }

    /// Total rows across all versions
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.state.lock().rows.len()
    }

    /// Distinct versions present in rows, ascending
    #[must_use]
    pub fn versions(&self) -> Vec<u64> {
        let state = self.state.lock();
        let mut versions: Vec<u64> = state.rows.iter().map(|r| r.version).collect();
        versions.sort_unstable();
        versions.dedup();
        versions
    }
}

#[async_trait]
impl RowStore for MemoryRowStore {
    async fn active_version(&self) -> Result<Option<u64>, GatewayError> {
        Ok(self.state.lock().active)
    }

    async fn reserve_version(&self) -> Result<u64, GatewayError> {
        let mut state = self.state.lock();
        state.last_reserved += 1;
        Ok(state.last_reserved)
    }

    async fn select(&self, version: u64) -> Result<Vec<LayoutRow>, GatewayError> {
        Ok(self
            .state
            .lock()
            .rows
            .iter()
            .filter(|r| r.version == version)
            .cloned()
            .collect())
    }

    async fn insert(&self, mut rows: Vec<LayoutRow>) -> Result<(), GatewayError> {
        let mut state = self.state.lock();
        if state.trip(FailPoint::Insert) {
            rows.truncate(rows.len() / 2);
            state.rows.extend(rows);
            return Err(GatewayError::ReplaceFailed("insert interrupted".into()));
        }
        state.rows.extend(rows);
        Ok(())
    }

    async fn activate(&self, version: u64) -> Result<(), GatewayError> {
        let mut state = self.state.lock();
        if state.trip(FailPoint::Activate) {
            return Err(GatewayError::ReplaceFailed("activate rejected".into()));
        }
        state.active = Some(version);
        Ok(())
    }

    async fn delete_version(&self, version: u64) -> Result<(), GatewayError> {
        let mut state = self.state.lock();
        if state.trip(FailPoint::Delete) {
            return Err(GatewayError::ReplaceFailed("delete rejected".into()));
        }
        state.rows.retain(|r| r.version != version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout(types: &[&str]) -> Vec<PersistedSection> {
        types
            .iter()
            .zip(0u32..)
            .map(|(t, i)| PersistedSection::new(*t, i, Content::new()))
            .collect()
    }

    #[tokio::test]
    async fn empty_store_loads_empty_layout() {
        let gateway = VersionedGateway::new(MemoryRowStore::new());
        assert!(gateway.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_activates_new_version_and_drops_old() {
        let gateway = VersionedGateway::new(MemoryRowStore::new());
        gateway.replace(layout(&["header", "blog"])).await.unwrap();
        gateway.replace(layout(&["blog"])).await.unwrap();

        assert_eq!(gateway.load().await.unwrap(), layout(&["blog"]));
        assert_eq!(gateway.store().versions(), vec![2]);
    }

    #[tokio::test]
    async fn interrupted_insert_keeps_previous_layout() {
        let gateway = VersionedGateway::new(MemoryRowStore::new());
        gateway.replace(layout(&["header", "blog", "connect"])).await.unwrap();

        gateway.store().fail_next(FailPoint::Insert);
        let result = gateway.replace(layout(&["a", "b", "c", "d"])).await;

        assert!(matches!(result, Err(GatewayError::ReplaceFailed(_))));
        assert_eq!(gateway.load().await.unwrap(), layout(&["header", "blog", "connect"]));
        assert_eq!(gateway.store().versions(), vec![1]);
    }

    #[tokio::test]
    async fn failed_activation_keeps_previous_layout() {
        let gateway = VersionedGateway::new(MemoryRowStore::new());
        gateway.replace(layout(&["header"])).await.unwrap();

        gateway.store().fail_next(FailPoint::Activate);
        assert!(gateway.replace(layout(&["blog"])).await.is_err());

        assert_eq!(gateway.load().await.unwrap(), layout(&["header"]));
        assert_eq!(gateway.store().row_count(), 1);
    }

    #[tokio::test]
    async fn failed_cleanup_still_succeeds() {
        let gateway = VersionedGateway::new(MemoryRowStore::new());
        gateway.replace(layout(&["header"])).await.unwrap();

        gateway.store().fail_next(FailPoint::Delete);
        gateway.replace(layout(&["blog"])).await.unwrap();

        assert_eq!(gateway.load().await.unwrap(), layout(&["blog"]));
        assert_eq!(gateway.store().versions(), vec![1, 2]);

        // Leftover rows never shadow a later version.
        gateway.replace(layout(&["connect"])).await.unwrap();
        assert_eq!(gateway.load().await.unwrap(), layout(&["connect"]));
    }

    #[tokio::test]
    async fn staged_garbage_does_not_reuse_version() {
        let gateway = VersionedGateway::new(MemoryRowStore::new());
        gateway.store().fail_next(FailPoint::Insert);
        gateway.store().fail_next(FailPoint::Delete);
        assert!(gateway.replace(layout(&["a", "b", "x", "y"])).await.is_err());
        assert_eq!(gateway.store().versions(), vec![1]);

        gateway.replace(layout(&["c"])).await.unwrap();
        assert_eq!(gateway.load().await.unwrap(), layout(&["c"]));
        assert_eq!(gateway.store().versions(), vec![1, 2]);
    }

    /// Row store that hands control back to the scheduler before every
    /// request, so joined replaces interleave step by step.
    struct Yielding(MemoryRowStore);

    #[async_trait]
    impl RowStore for Yielding {
        async fn active_version(&self) -> Result<Option<u64>, GatewayError> {
            tokio::task::yield_now().await;
            self.0.active_version().await
        }

        async fn reserve_version(&self) -> Result<u64, GatewayError> {
            tokio::task::yield_now().await;
            self.0.reserve_version().await
        }

        async fn select(&self, version: u64) -> Result<Vec<LayoutRow>, GatewayError> {
            tokio::task::yield_now().await;
            self.0.select(version).await
        }

        async fn insert(&self, rows: Vec<LayoutRow>) -> Result<(), GatewayError> {
            tokio::task::yield_now().await;
            self.0.insert(rows).await
        }

        async fn activate(&self, version: u64) -> Result<(), GatewayError> {
            tokio::task::yield_now().await;
            self.0.activate(version).await
        }

        async fn delete_version(&self, version: u64) -> Result<(), GatewayError> {
            tokio::task::yield_now().await;
            self.0.delete_version(version).await
        }
    }

    #[tokio::test]
    async fn overlapping_replaces_do_not_merge() {
        let gateway = VersionedGateway::new(Yielding(MemoryRowStore::new()));
        gateway.replace(layout(&["header"])).await.unwrap();

        let blog = layout(&["header", "blog"]);
        let connect = layout(&["header", "connect"]);
        let (a, b) = tokio::join!(
            gateway.replace(blog.clone()),
            gateway.replace(connect.clone())
        );
        a.unwrap();
        b.unwrap();

        let loaded = gateway.load().await.unwrap();
        assert!(loaded == blog || loaded == connect, "merged layout: {loaded:?}");
        assert!(!gateway.store().0.versions().contains(&1));
    }

    #[tokio::test]
    async fn failed_overlapping_replace_keeps_the_other_rows() {
        let gateway = VersionedGateway::new(Yielding(MemoryRowStore::new()));
        gateway.replace(layout(&["header"])).await.unwrap();
        gateway.store().0.fail_next(FailPoint::Insert);

        let full = layout(&["header", "blog", "connect"]);
        let short = layout(&["header"]);
        let (a, b) = tokio::join!(gateway.replace(full.clone()), gateway.replace(short.clone()));
        assert!(a.is_err() != b.is_err(), "exactly one insert was armed to fail");

        let survivor = if a.is_ok() { full } else { short };
        assert_eq!(gateway.load().await.unwrap(), survivor);
        assert_eq!(gateway.store().0.versions().len(), 1);
    }
}
