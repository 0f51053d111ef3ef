//! Statement data models produced by the extraction pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel for an unresolved recipient name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Sentinel for an unresolved pay date.
pub const UNKNOWN_DATE: &str = "Unknown_Date";

/// Sentinel for an unresolved issuing company.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Best-effort fields parsed from one statement page.
///
/// Unresolved string fields carry their sentinel value; an unresolved
/// amount is `None`, which is distinct from an actual net pay of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementFields {
    /// Recipient name, or [`UNKNOWN_NAME`].
    pub name: String,

    /// Canonical `YYYY-MM-DD` pay date, or [`UNKNOWN_DATE`].
    pub date: String,

    /// Net pay amount, if a net-pay pattern matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Issuing company, or [`UNKNOWN_COMPANY`].
    pub company: String,
}

impl Default for StatementFields {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            date: UNKNOWN_DATE.to_string(),
            amount: None,
            company: UNKNOWN_COMPANY.to_string(),
        }
    }
}

/// One successfully processed page of the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// 1-based position in the source document.
    pub page_number: u32,

    /// Parsed statement fields.
    #[serde(flatten)]
    pub fields: StatementFields,

    /// Derived output filename: `"{name} {date}.pdf"`, sentinels included.
    pub filename: String,

    /// The single-page PDF byte stream, independently openable.
    #[serde(skip)]
    pub page_bytes: Vec<u8>,
}

impl ExtractedPage {
    /// Build a page result, deriving the filename from the parsed fields.
    pub fn new(page_number: u32, fields: StatementFields, page_bytes: Vec<u8>) -> Self {
        let filename = format!("{} {}.pdf", fields.name, fields.date);
        Self {
            page_number,
            fields,
            filename,
            page_bytes,
        }
    }
}

/// Reason a page was dropped from the batch result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFailureKind {
    /// The page yielded no extractable text.
    #[error("text extraction failed: {0}")]
    TextExtraction(String),

    /// The page could not be copied into its own document.
    #[error("page split failed: {0}")]
    Split(String),
}

/// A page-level failure, recorded alongside the successful pages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("page {page_number}: {kind}")]
pub struct PageFailure {
    /// 1-based page number in the source document.
    pub page_number: u32,

    /// What went wrong.
    pub kind: PageFailureKind,
}

/// Outcome of one batch over one multi-page input document.
///
/// Pages appear in source order. Pages that hit an isolated failure are
/// absent from `pages` and traced in `failures` instead.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// Successfully extracted pages, in page order.
    pub pages: Vec<ExtractedPage>,

    /// Per-page failures, in page order.
    pub failures: Vec<PageFailure>,

    /// Page count of the source document.
    pub page_count: u32,
}

impl BatchResult {
    /// Total number of pages in the source document.
    pub fn total(&self) -> u32 {
        self.page_count
    }

    /// Number of pages that produced an [`ExtractedPage`].
    pub fn processed(&self) -> u32 {
        self.pages.len() as u32
    }

    /// True when every source page made it into the result.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.processed() == self.total()
    }
}
