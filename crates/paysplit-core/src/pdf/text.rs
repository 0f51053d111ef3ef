//! Per-page text retrieval using pdf-extract.

use tracing::debug;

use super::Result;
use crate::error::PdfError;

/// Text layer of a loaded document, one entry per page.
///
/// The whole text layer is decoded once at load time. Page lookups never
/// fail: a page the text layer cannot serve yields an empty string, and
/// downstream field parsing on empty text resolves every field to its
/// sentinel.
pub struct PageTextExtractor {
    pages: Vec<String>,
}

impl PageTextExtractor {
    /// Decode the text layer from raw PDF bytes.
    ///
    /// The extractor keeps its own copy of the input; callers are free to
    /// hand the same bytes to [`PageSplitter`](super::PageSplitter).
    pub fn load(data: &[u8]) -> Result<Self> {
        let owned = data.to_vec();
        let pages = pdf_extract::extract_text_from_mem_by_pages(&owned)
            .map_err(|e| PdfError::TextLayer(e.to_string()))?;
        debug!("decoded text layer for {} pages", pages.len());
        Ok(Self { pages })
    }

    /// Number of pages the text layer reported.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Text of the given 1-based page, layout order preserved line by line.
    ///
    /// Returns an empty string for any page outside `[1, page_count]`.
    pub fn page_text(&self, page_number: u32) -> &str {
        if page_number == 0 {
            return "";
        }
        self.pages
            .get((page_number - 1) as usize)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::pdf_with_pages;

    #[test]
    fn test_page_text_per_page() {
        let data = pdf_with_pages(&[
            &["Company: Acme Widgets", "Net Pay: $100.00"],
            &["Company: Globex", "Net Pay: $200.00"],
        ]);
        let extractor = PageTextExtractor::load(&data).unwrap();

        assert_eq!(extractor.page_count(), 2);
        assert!(extractor.page_text(1).contains("Acme Widgets"));
        assert!(!extractor.page_text(1).contains("Globex"));
        assert!(extractor.page_text(2).contains("Globex"));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let data = pdf_with_pages(&[&["Company: Acme Widgets"]]);
        let extractor = PageTextExtractor::load(&data).unwrap();

        assert_eq!(extractor.page_text(0), "");
        assert_eq!(extractor.page_text(7), "");
    }

    #[test]
    fn test_garbage_input_fails_to_load() {
        assert!(PageTextExtractor::load(b"definitely not a pdf").is_err());
    }
}
