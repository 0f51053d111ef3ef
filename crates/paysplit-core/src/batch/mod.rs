//! Batch orchestration over a multi-page statement document.

mod progress;

pub use progress::{CancelToken, NoProgress, ProgressFn, ProgressSink};

use tracing::{debug, warn};

use crate::error::BatchError;
use crate::extract::StatementParser;
use crate::models::config::PaysplitConfig;
use crate::models::statement::{BatchResult, ExtractedPage, PageFailure, PageFailureKind};
use crate::pdf::{PageSplitter, PageTextExtractor};
use progress::ProgressTracker;

// Share of the progress range spent loading the document; the page loop
// fills the span up to FINALIZE_AT and the remainder covers finalization.
const LOAD_DONE_AT: f64 = 15.0;
const FINALIZE_AT: f64 = 95.0;

/// Drives extraction and splitting across all pages of one input document.
///
/// Pages are processed sequentially so progress percentages are
/// deterministic. A failure isolated to one page drops that page from the
/// result and is recorded; only an unloadable input fails the whole batch.
pub struct BatchProcessor {
    config: PaysplitConfig,
    parser: StatementParser,
}

impl BatchProcessor {
    /// Processor with default configuration.
    pub fn new() -> Self {
        Self::with_config(PaysplitConfig::default())
    }

    /// Processor with explicit configuration.
    pub fn with_config(config: PaysplitConfig) -> Self {
        let parser = StatementParser::from_config(&config.extraction);
        Self { config, parser }
    }

    /// Process a whole document without progress reporting or cancellation.
    pub fn process(&self, input: &[u8]) -> Result<BatchResult, BatchError> {
        self.process_with(input, &mut NoProgress, &CancelToken::new())
    }

    /// Process a whole document, reporting progress and honoring
    /// cancellation between page iterations.
    pub fn process_with(
        &self,
        input: &[u8],
        progress: &mut dyn ProgressSink,
        cancel: &CancelToken,
    ) -> Result<BatchResult, BatchError> {
        let mut progress = ProgressTracker::new(progress);
        progress.emit(0.0);

        // Two independent parses of the input; the text layer and the page
        // tree each work from their own copy of the bytes.
        let text = PageTextExtractor::load(input)?;
        progress.emit(LOAD_DONE_AT / 2.0);
        let splitter = PageSplitter::load(input)?;
        progress.emit(LOAD_DONE_AT);

        let page_count = splitter.page_count();
        debug!("processing batch of {} pages", page_count);

        let mut pages = Vec::with_capacity(page_count as usize);
        let mut failures = Vec::new();
        let page_span = FINALIZE_AT - LOAD_DONE_AT;

        for page_number in 1..=page_count {
            if cancel.is_cancelled() {
                debug!("batch cancelled before page {}", page_number);
                return Err(BatchError::Cancelled);
            }
            progress.emit(LOAD_DONE_AT + page_span * f64::from(page_number - 1) / f64::from(page_count));

            let page_text = text.page_text(page_number);
            if page_text.trim().is_empty() {
                let failure = PageFailure {
                    page_number,
                    kind: PageFailureKind::TextExtraction(
                        "no extractable text on page".to_string(),
                    ),
                };
                warn!("{}, skipping", failure);
                if self.config.batch.stop_on_page_error {
                    return Err(BatchError::Page(failure));
                }
                failures.push(failure);
                continue;
            }

            let fields = self.parser.parse(page_text);

            match splitter.split_page(page_number) {
                Ok(page_bytes) => {
                    let page = ExtractedPage::new(page_number, fields, page_bytes);
                    debug!("page {}/{} -> {}", page_number, page_count, page.filename);
                    pages.push(page);
                }
                Err(e) => {
                    let failure = PageFailure {
                        page_number,
                        kind: PageFailureKind::Split(e.to_string()),
                    };
                    warn!("{}, skipping", failure);
                    if self.config.batch.stop_on_page_error {
                        return Err(BatchError::Page(failure));
                    }
                    failures.push(failure);
                }
            }

            progress.emit(LOAD_DONE_AT + page_span * f64::from(page_number) / f64::from(page_count));
        }

        let result = BatchResult {
            pages,
            failures,
            page_count,
        };
        debug!(
            "batch done: {}/{} pages, {} failures",
            result.processed(),
            result.total(),
            result.failures.len()
        );
        progress.finish();
        Ok(result)
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}
