use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;

use cvlens_core::{EngineError, TextEngine};

/// Word-processor document reader.
///
/// A `.docx` is a zip container; the body lives in `word/document.xml`.
/// Text runs are concatenated in document order with one output line per
/// `<w:p>` paragraph. Legacy OLE `.doc` files are not zip archives and
/// fail at open, which the dispatch layer degrades to empty text.
pub struct WordEngine;

impl TextEngine for WordEngine {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn try_extract(&self, bytes: &[u8]) -> Result<String, EngineError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| EngineError::Open(format!("not a docx container: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| EngineError::Open(format!("missing document body: {e}")))?
            .read_to_string(&mut xml)
            .map_err(|e| EngineError::Extraction(e.to_string()))?;

        paragraphs_from_xml(&xml)
    }
}

/// Collect character data from the document XML, emitting a newline at
/// each paragraph boundary and mapping explicit breaks/tabs.
fn paragraphs_from_xml(xml: &str) -> Result<String, EngineError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let chunk = t
                    .unescape()
                    .map_err(|e| EngineError::Decode(e.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:br" => text.push('\n'),
                b"w:tab" => text.push('\t'),
                _ => {}
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(EngineError::Extraction(e.to_string())),
        }
    }

    Ok(text)
}
