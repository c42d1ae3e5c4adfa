//! Text extraction from page-structured documents

use crate::error::{Result, ResumeMatcherError};
use log::debug;
use std::panic;

/// Turns document bytes into a single flat string.
///
/// Extraction is all-or-nothing: an implementation either returns the text of
/// every page or an error, never a partial document.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract can panic on some malformed inputs; that is still a bad document.
        let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|_| {
                ResumeMatcherError::DocumentFormat("PDF parser aborted on malformed input".to_string())
            })?
            .map_err(|e| {
                ResumeMatcherError::DocumentFormat(format!("Failed to extract text from PDF: {}", e))
            })?;

        debug!("Extracted {} page(s) from PDF", pages.len());
        Ok(join_pages(&pages))
    }
}

/// Join per-page texts in page order with single spaces and trim the result.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_keeps_order() {
        let pages = ["first page", "second page", "third page"];
        assert_eq!(join_pages(&pages), "first page second page third page");
    }

    #[test]
    fn test_join_pages_trims_outer_whitespace_only() {
        let pages = ["\n  header\n", "body  \n"];
        assert_eq!(join_pages(&pages), "header\n body");
    }

    #[test]
    fn test_join_pages_keeps_empty_pages() {
        let pages = ["a", "", "b"];
        assert_eq!(join_pages(&pages), "a  b");
    }

    #[test]
    fn test_garbage_bytes_are_a_format_error() {
        let result = PdfExtractor.extract(b"definitely not a pdf");
        assert!(matches!(result, Err(ResumeMatcherError::DocumentFormat(_))));
    }

    #[test]
    fn test_empty_input_is_a_format_error() {
        let result = PdfExtractor.extract(&[]);
        assert!(matches!(result, Err(ResumeMatcherError::DocumentFormat(_))));
    }
}
