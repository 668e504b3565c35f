use cvlens_core::{EngineError, TextEngine};

/// Primary PDF engine: layout-aware whole-document extraction via
/// `pdf-extract`. Better at multi-column resume layouts, but stricter
/// about malformed files.
pub struct PdfLayoutEngine;

impl TextEngine for PdfLayoutEngine {
    fn name(&self) -> &'static str {
        "pdf-layout"
    }

    fn try_extract(&self, bytes: &[u8]) -> Result<String, EngineError> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| EngineError::Extraction(e.to_string()))
    }
}

/// Fallback PDF engine: page-by-page extraction via `lopdf`.
///
/// Pages that fail to extract are skipped rather than failing the whole
/// document, so a partially corrupt PDF still yields the readable pages.
pub struct PdfPagewiseEngine;

impl TextEngine for PdfPagewiseEngine {
    fn name(&self) -> &'static str {
        "pdf-pagewise"
    }

    fn try_extract(&self, bytes: &[u8]) -> Result<String, EngineError> {
        let document =
            lopdf::Document::load_mem(bytes).map_err(|e| EngineError::Open(e.to_string()))?;

        let mut pages_text = Vec::new();
        for page_number in document.get_pages().keys() {
            match document.extract_text(&[*page_number]) {
                Ok(page_text) => pages_text.push(page_text),
                Err(e) => {
                    tracing::debug!(page = page_number, error = %e, "skipping unreadable page");
                }
            }
        }

        if pages_text.is_empty() {
            return Err(EngineError::Extraction("no readable pages".into()));
        }
        Ok(pages_text.join("\n"))
    }
}
