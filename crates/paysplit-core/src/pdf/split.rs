//! Single-page splitting using lopdf.

use lopdf::Document;
use tracing::{debug, trace};

use super::Result;
use crate::error::PdfError;

/// Splits individual pages of a loaded document into standalone documents.
///
/// Splitting is structural: the page object and everything it references
/// (fonts, images, content streams) are carried over untouched; only the
/// page tree is pruned down to the requested page.
pub struct PageSplitter {
    document: Document,
    page_count: u32,
}

impl PageSplitter {
    /// Parse a document from raw PDF bytes.
    ///
    /// The splitter owns its parsed representation; the caller's buffer is
    /// not retained. PDFs encrypted with an empty password are decrypted
    /// transparently, anything else is rejected.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");
        }

        let page_count = document.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        Ok(Self {
            document,
            page_count,
        })
    }

    /// Number of pages in the source document.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Produce a standalone one-page document for the given 1-based page.
    pub fn split_page(&self, page_number: u32) -> Result<Vec<u8>> {
        if page_number == 0 || page_number > self.page_count {
            return Err(PdfError::InvalidPage(page_number));
        }

        let mut single = self.document.clone();
        let others: Vec<u32> = (1..=self.page_count)
            .filter(|&n| n != page_number)
            .collect();
        single.delete_pages(&others);
        single.prune_objects();
        single.renumber_objects();

        if single.get_pages().len() != 1 {
            return Err(PdfError::Split {
                page: page_number,
                reason: "page tree did not reduce to a single page".to_string(),
            });
        }

        let mut bytes = Vec::new();
        single.save_to(&mut bytes).map_err(|e| PdfError::Split {
            page: page_number,
            reason: e.to_string(),
        })?;

        trace!("split page {} into {} bytes", page_number, bytes.len());
        Ok(bytes)
    }
}
