// src/infrastructure/store.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::{Record, RecordRepository};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-memory backing for the demo's singleton record. No locking
/// discipline beyond the lock itself: concurrent writers race and the last
/// write wins. Contents are lost on restart.
pub struct InMemoryRecordStore {
    record: RwLock<Record>,
}

impl InMemoryRecordStore {
    pub fn new(initial: Record) -> Self {
        Self {
            record: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordStore {
    async fn load(&self) -> DomainResult<Record> {
        Ok(*self.record.read().await)
    }

    async fn store(&self, record: Record) -> DomainResult<()> {
        *self.record.write().await = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn store_then_load_round_trips() {
        let seed = Record::seeded(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(), 0);
        let store = InMemoryRecordStore::new(seed);

        let mut record = store.load().await.unwrap();
        assert_eq!(record, seed);

        record.set_date(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
        store.store(record).await.unwrap();
        assert_eq!(store.load().await.unwrap(), record);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let seed = Record::seeded(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(), 0);
        let store = InMemoryRecordStore::new(seed);

        let mut first = seed;
        first.set_date(Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap());
        let mut second = seed;
        second.set_date(Utc.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap());

        store.store(first).await.unwrap();
        store.store(second).await.unwrap();
        assert_eq!(store.load().await.unwrap().date, second.date);
    }
}
