//! Error types for the paysplit-core library.

use thiserror::Error;

use crate::models::statement::PageFailure;

/// Main error type for the paysplit library.
#[derive(Error, Debug)]
pub enum PaysplitError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Batch processing error.
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// Statement store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF handling.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF document.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// The text layer of the document could not be read.
    #[error("failed to read text layer: {0}")]
    TextLayer(String),

    /// A single page could not be copied into its own document.
    #[error("failed to split page {page}: {reason}")]
    Split { page: u32, reason: String },
}

/// Fatal batch outcomes. Page-level failures are accumulated in the
/// [`BatchResult`](crate::models::statement::BatchResult) instead.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input bytes are not a loadable document; nothing was processed.
    #[error("failed to load document: {0}")]
    Load(#[from] PdfError),

    /// The batch was cancelled between page iterations.
    #[error("batch cancelled")]
    Cancelled,

    /// A page failed and the configuration demands a full stop.
    #[error("{0}")]
    Page(PageFailure),
}

/// Errors raised by a statement store collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record for this (entity, date) pair already exists. Stores must
    /// enforce this as a unique constraint so that check-then-insert races
    /// are arbitrated at the storage boundary.
    #[error("statement already recorded for {name} on {date}")]
    Duplicate { name: String, date: String },

    /// Backend failure (connection, corruption, quota...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type for the paysplit library.
pub type Result<T> = std::result::Result<T, PaysplitError>;
