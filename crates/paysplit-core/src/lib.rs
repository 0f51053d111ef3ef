//! Core library for payroll statement PDF processing.
//!
//! This crate provides:
//! - PDF handling (per-page text retrieval, single-page splitting)
//! - Heuristic field extraction (recipient, cheque date, net pay, company)
//! - Batch orchestration with progress reporting and page-level error isolation
//! - A dedup ingestion gate over a pluggable statement store

pub mod batch;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod models;
pub mod pdf;

pub use error::{BatchError, PaysplitError, PdfError, Result, StoreError};
pub use models::config::PaysplitConfig;
pub use models::statement::{
    BatchResult, ExtractedPage, PageFailure, PageFailureKind, StatementFields, UNKNOWN_COMPANY,
    UNKNOWN_DATE, UNKNOWN_NAME,
};
pub use pdf::{PageSplitter, PageTextExtractor};
pub use extract::{StatementParser, normalize_date};
pub use batch::{BatchProcessor, CancelToken, NoProgress, ProgressFn, ProgressSink};
pub use ingest::{
    EntityId, IngestOutcome, IngestReport, IngestionGate, MemoryStore, NewStatementRecord,
    PageIngest, RecordId, StatementStore,
};

#[cfg(test)]
pub(crate) mod test_util;
