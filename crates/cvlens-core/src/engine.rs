use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to open document: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("failed to decode text: {0}")]
    Decode(String),
}

/// Trait for document text extraction engines.
///
/// An engine is a single strategy for converting document bytes of one
/// format into plain text. Engines for the same format are run in order
/// by a strategy-list runner; the first non-empty, non-erroring result
/// wins. Any failure is recoverable — the dispatch layer degrades to
/// empty text rather than propagating.
pub trait TextEngine: Send + Sync {
    /// Short name used in degradation log messages.
    fn name(&self) -> &'static str;

    /// Attempt to extract plain text from the raw document bytes.
    fn try_extract(&self, bytes: &[u8]) -> Result<String, EngineError>;
}

/// Document format inferred from the filename extension.
///
/// The byte content is never sniffed; the extension is the only format
/// signal, matching the upload contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    Word,
    PlainText,
    Unsupported,
}

impl DocumentFormat {
    /// Infer the format from a filename's lowercased extension.
    pub fn from_filename(filename: &str) -> Self {
        let ext = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Word,
            "txt" => Self::PlainText,
            _ => Self::Unsupported,
        }
    }
}
