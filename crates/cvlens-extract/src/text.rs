use cvlens_core::{EngineError, TextEngine};

/// Plain-text decoder: UTF-8 first, Latin-1 on decode failure.
///
/// Latin-1 maps every byte to a codepoint, so the retry is total; the
/// UTF-8 failure is still logged so garbled uploads can be traced.
pub struct PlainTextEngine;

impl TextEngine for PlainTextEngine {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn try_extract(&self, bytes: &[u8]) -> Result<String, EngineError> {
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_string()),
            Err(e) => {
                tracing::debug!(error = %e, "text file is not UTF-8, decoding as Latin-1");
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
        }
    }
}
