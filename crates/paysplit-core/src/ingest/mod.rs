//! Dedup ingestion gate over a pluggable statement store.
//!
//! The store is an external collaborator; this module only defines the
//! boundary contract and the gate that enforces at-most-one stored record
//! per (recipient, pay date) pair.

mod memory;

pub use memory::{MemoryStore, StoredRecord};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::statement::ExtractedPage;

/// Identifier of a recipient entity, assigned by the store.
pub type EntityId = u64;

/// Identifier of a stored statement record, assigned by the store.
pub type RecordId = u64;

/// A statement record to be persisted.
#[derive(Debug)]
pub struct NewStatementRecord<'a> {
    /// Owning entity.
    pub entity_id: EntityId,
    /// Recipient name as parsed (sentinel included when unresolved).
    pub name: &'a str,
    /// Canonical pay date string.
    pub date: &'a str,
    /// Net pay amount, if resolved.
    pub amount: Option<Decimal>,
    /// Issuing company.
    pub company: &'a str,
    /// Derived output filename.
    pub filename: &'a str,
    /// Single-page PDF bytes.
    pub file_bytes: &'a [u8],
    /// Date the record was extracted.
    pub extraction_date: NaiveDate,
}

/// Storage collaborator contract.
///
/// Implementations must make `get_or_create_entity` an atomic
/// insert-if-absent on the exact (case-sensitive) name, and must enforce a
/// unique constraint on (entity, date) in `insert_record`, returning
/// [`StoreError::Duplicate`] on conflict. Races between concurrent batches
/// are arbitrated here, not in the pipeline.
pub trait StatementStore {
    /// Look up or create the entity with this exact name.
    fn get_or_create_entity(&self, name: &str) -> Result<EntityId, StoreError>;

    /// Whether a record already exists for (entity, date).
    fn record_exists(&self, entity: EntityId, date: &str) -> Result<bool, StoreError>;

    /// Persist a new record; rejects an existing (entity, date) pair with
    /// [`StoreError::Duplicate`].
    fn insert_record(&self, record: NewStatementRecord<'_>) -> Result<RecordId, StoreError>;
}

impl<S: StatementStore + ?Sized> StatementStore for &S {
    fn get_or_create_entity(&self, name: &str) -> Result<EntityId, StoreError> {
        (**self).get_or_create_entity(name)
    }

    fn record_exists(&self, entity: EntityId, date: &str) -> Result<bool, StoreError> {
        (**self).record_exists(entity, date)
    }

    fn insert_record(&self, record: NewStatementRecord<'_>) -> Result<RecordId, StoreError> {
        (**self).insert_record(record)
    }
}

/// What happened to one page at the gate.
#[derive(Debug)]
pub enum IngestOutcome {
    /// A new record was persisted.
    Stored(RecordId),
    /// A record for this (entity, date) already existed; nothing written.
    DuplicateSkipped,
    /// The store failed for this page; earlier pages stay persisted.
    Failed(StoreError),
}

/// Per-page gate outcome, keyed by the page's derived filename.
#[derive(Debug)]
pub struct PageIngest {
    /// 1-based page number in the source document.
    pub page_number: u32,
    /// Derived output filename.
    pub filename: String,
    /// Gate outcome.
    pub outcome: IngestOutcome,
}

/// Outcomes for a whole batch, in page order.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// One entry per ingested page.
    pub entries: Vec<PageIngest>,
}

impl IngestReport {
    /// Pages that were newly persisted.
    pub fn stored(&self) -> impl Iterator<Item = &PageIngest> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, IngestOutcome::Stored(_)))
    }

    /// Pages skipped as duplicates.
    pub fn duplicates(&self) -> impl Iterator<Item = &PageIngest> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, IngestOutcome::DuplicateSkipped))
    }

    /// Pages that hit a store failure.
    pub fn failed(&self) -> impl Iterator<Item = &PageIngest> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, IngestOutcome::Failed(_)))
    }
}

/// Gate between the extraction pipeline and the statement store.
///
/// Reprocessing the same source page any number of times leaves exactly
/// one stored record per (name, date) pair.
pub struct IngestionGate<S: StatementStore> {
    store: S,
}

impl<S: StatementStore> IngestionGate<S> {
    /// Gate over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ingest a single page.
    pub fn ingest(&self, page: &ExtractedPage) -> Result<IngestOutcome, StoreError> {
        let entity = self.store.get_or_create_entity(&page.fields.name)?;

        if self.store.record_exists(entity, &page.fields.date)? {
            debug!(
                "statement already stored for {} on {}, skipping",
                page.fields.name, page.fields.date
            );
            return Ok(IngestOutcome::DuplicateSkipped);
        }

        let record = NewStatementRecord {
            entity_id: entity,
            name: &page.fields.name,
            date: &page.fields.date,
            amount: page.fields.amount,
            company: &page.fields.company,
            filename: &page.filename,
            file_bytes: &page.page_bytes,
            extraction_date: chrono::Local::now().date_naive(),
        };

        match self.store.insert_record(record) {
            Ok(id) => {
                debug!("stored {} as record {}", page.filename, id);
                Ok(IngestOutcome::Stored(id))
            }
            // Lost a check-then-insert race against a concurrent batch;
            // same outcome as seeing the record up front.
            Err(StoreError::Duplicate { .. }) => Ok(IngestOutcome::DuplicateSkipped),
            Err(e) => Err(e),
        }
    }

    /// Ingest a batch of pages in page order.
    ///
    /// Store failures are recorded per page and do not roll back pages
    /// already persisted.
    pub fn ingest_batch(&self, pages: &[ExtractedPage]) -> IngestReport {
        let entries = pages
            .iter()
            .map(|page| {
                let outcome = match self.ingest(page) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!("failed to store {}: {}", page.filename, e);
                        IngestOutcome::Failed(e)
                    }
                };
                PageIngest {
                    page_number: page.page_number,
                    filename: page.filename.clone(),
                    outcome,
                }
            })
            .collect();
        IngestReport { entries }
    }
}
