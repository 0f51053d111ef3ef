//! In-memory statement store.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{EntityId, NewStatementRecord, RecordId, StatementStore};
use crate::error::StoreError;

/// Reference store keeping everything in memory.
///
/// A single mutex guards all state, which makes `get_or_create_entity` and
/// `insert_record` atomic and serializes racing creates for the same name
/// across concurrently running batches. Suitable for tests and for
/// within-run dedup; durable stores live behind the same trait elsewhere.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

/// A record as retained by the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub record_id: RecordId,
    pub entity_id: EntityId,
    pub name: String,
    pub date: String,
    pub amount: Option<Decimal>,
    pub company: String,
    pub filename: String,
    pub file_bytes: Vec<u8>,
    pub extraction_date: NaiveDate,
}

struct Inner {
    entities: HashMap<String, EntityId>,
    records: HashMap<(EntityId, String), StoredRecord>,
    next_entity: EntityId,
    next_record: RecordId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            records: HashMap::new(),
            next_entity: 1,
            next_record: 1,
        }
    }
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known entities.
    pub fn entity_count(&self) -> usize {
        self.inner.lock().unwrap().entities.len()
    }

    /// Number of stored records.
    pub fn record_count(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    /// Snapshot of all stored records, in no particular order.
    pub fn records(&self) -> Vec<StoredRecord> {
        self.inner.lock().unwrap().records.values().cloned().collect()
    }
}

impl StatementStore for MemoryStore {
    fn get_or_create_entity(&self, name: &str) -> Result<EntityId, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(&id) = inner.entities.get(name) {
            return Ok(id);
        }
        let id = inner.next_entity;
        inner.next_entity += 1;
        inner.entities.insert(name.to_string(), id);
        Ok(id)
    }

    fn record_exists(&self, entity: EntityId, date: &str) -> Result<bool, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.records.contains_key(&(entity, date.to_string())))
    }

    fn insert_record(&self, record: NewStatementRecord<'_>) -> Result<RecordId, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let key = (record.entity_id, record.date.to_string());
        if inner.records.contains_key(&key) {
            return Err(StoreError::Duplicate {
                name: record.name.to_string(),
                date: record.date.to_string(),
            });
        }
        let record_id = inner.next_record;
        inner.next_record += 1;
        inner.records.insert(
            key,
            StoredRecord {
                record_id,
                entity_id: record.entity_id,
                name: record.name.to_string(),
                date: record.date.to_string(),
                amount: record.amount,
                company: record.company.to_string(),
                filename: record.filename.to_string(),
                file_bytes: record.file_bytes.to_vec(),
                extraction_date: record.extraction_date,
            },
        );
        Ok(record_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(entity_id: EntityId, name: &'a str, date: &'a str) -> NewStatementRecord<'a> {
        NewStatementRecord {
            entity_id,
            name,
            date,
            amount: None,
            company: "Acme Widgets",
            filename: "x.pdf",
            file_bytes: &[1, 2, 3],
            extraction_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let store = MemoryStore::new();
        let a = store.get_or_create_entity("Jane Doe").unwrap();
        let b = store.get_or_create_entity("Jane Doe").unwrap();
        assert_eq!(a, b);
        assert_eq!(store.entity_count(), 1);
    }

    #[test]
    fn test_insert_enforces_unique_entity_date() {
        let store = MemoryStore::new();
        let entity = store.get_or_create_entity("Jane Doe").unwrap();

        store.insert_record(record(entity, "Jane Doe", "2024-03-15")).unwrap();
        let err = store
            .insert_record(record(entity, "Jane Doe", "2024-03-15"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.record_count(), 1);
    }

    #[test]
    fn test_record_keeps_payload() {
        let store = MemoryStore::new();
        let entity = store.get_or_create_entity("Jane Doe").unwrap();
        store.insert_record(record(entity, "Jane Doe", "2024-03-15")).unwrap();

        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_bytes, vec![1, 2, 3]);
        assert_eq!(records[0].company, "Acme Widgets");
    }
}
