//! In-process gateway

use super::{sort_records, PersistenceGateway};
use crate::error::GatewayError;
use async_trait::async_trait;
use folio_layout::PersistedSection;
use parking_lot::Mutex;

/// Gateway keeping the layout in memory
///
/// Replace is a single swap under the lock.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    records: Mutex<Vec<PersistedSection>>,
    replaces: Mutex<u64>,
}

impl MemoryGateway {
    /// Create empty gateway
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create gateway seeded with `records`
    #[must_use]
    pub fn with_records(records: Vec<PersistedSection>) -> Self {
        Self {
            records: Mutex::new(records),
            replaces: Mutex::new(0),
        }
    }

    /// Currently stored records, as stored
    #[must_use]
    pub fn snapshot(&self) -> Vec<PersistedSection> {
        self.records.lock().clone()
    }

    /// Number of completed replaces
    #[must_use]
    pub fn replace_count(&self) -> u64 {
        *self.replaces.lock()
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn load(&self) -> Result<Vec<PersistedSection>, GatewayError> {
        let mut records = self.snapshot();
        sort_records(&mut records);
        Ok(records)
    }

    async fn replace(&self, entries: Vec<PersistedSection>) -> Result<(), GatewayError> {
        *self.records.lock() = entries;
        *self.replaces.lock() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_section::Content;

    #[tokio::test]
    async fn load_sorts_by_sort_order() {
        let gateway = MemoryGateway::with_records(vec![
            PersistedSection::new("b", 1, Content::new()),
            PersistedSection::new("a", 0, Content::new()),
        ]);

        let loaded = gateway.load().await.unwrap();
        let types: Vec<&str> = loaded.iter().map(|r| r.section_type_id.as_str()).collect();
        assert_eq!(types, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn replace_swaps_everything() {
        let gateway = MemoryGateway::with_records(vec![PersistedSection::new("old", 0, Content::new())]);
        gateway
            .replace(vec![PersistedSection::new("new", 0, Content::new())])
            .await
            .unwrap();

        assert_eq!(gateway.snapshot(), vec![PersistedSection::new("new", 0, Content::new())]);
        assert_eq!(gateway.replace_count(), 1);
    }
}
