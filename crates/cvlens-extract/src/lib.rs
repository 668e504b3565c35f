use cvlens_core::{DocumentFormat, TextEngine};

pub mod pdf;
pub mod text;
pub mod word;

pub use pdf::{PdfLayoutEngine, PdfPagewiseEngine};
pub use text::PlainTextEngine;
pub use word::WordEngine;

/// Extract plain text from raw document bytes, dispatching on the
/// filename's lowercased extension.
///
/// - `.pdf`: layout-aware engine first, page-by-page engine as fallback
/// - `.doc` / `.docx`: word-processor reader (paragraphs in order)
/// - `.txt`: UTF-8 decode, Latin-1 retry
/// - anything else: unsupported
///
/// This function is total: every engine failure is logged and degrades
/// to an empty string. An empty result is itself meaningful input to the
/// confidence scorer.
pub fn extract_text(filename: &str, bytes: &[u8]) -> (String, DocumentFormat) {
    let format = DocumentFormat::from_filename(filename);

    let text = match format {
        DocumentFormat::Pdf => run_engines(
            &[&PdfLayoutEngine, &PdfPagewiseEngine],
            bytes,
        ),
        DocumentFormat::Word => run_engines(&[&WordEngine], bytes),
        DocumentFormat::PlainText => run_engines(&[&PlainTextEngine], bytes),
        DocumentFormat::Unsupported => {
            tracing::warn!(filename, "unsupported file type, skipping extraction");
            String::new()
        }
    };

    (text, format)
}

/// Try each engine in order; the first non-empty success wins.
///
/// Engine faults of any kind are recoverable here: `Err` results are
/// logged and the chain falls through to the next engine. Panics are
/// caught too — the underlying PDF parsers can panic on malformed input,
/// and no error may escape this layer.
pub fn run_engines(engines: &[&dyn TextEngine], bytes: &[u8]) -> String {
    for engine in engines {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            engine.try_extract(bytes)
        }));
        match outcome {
            Ok(Ok(text)) => {
                let text = text.trim().to_string();
                if !text.is_empty() {
                    return text;
                }
                tracing::debug!(engine = engine.name(), "engine produced empty text");
            }
            Ok(Err(e)) => {
                tracing::warn!(engine = engine.name(), error = %e, "engine failed, trying next");
            }
            Err(_) => {
                tracing::warn!(engine = engine.name(), "engine panicked, trying next");
            }
        }
    }
    String::new()
}
