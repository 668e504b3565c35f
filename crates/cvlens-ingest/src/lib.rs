//! End-to-end resume ingestion.
//!
//! [`parse_resume`] is the single top-level operation: raw document
//! bytes in, a fully populated [`ResumeProfile`] out. It is total — any
//! failure along the way degrades to a profile carrying an `error`
//! marker and zero confidence rather than an `Err`.

use std::path::Path;

use tracing::{debug, info};

use cvlens_extract::extract_text;
use cvlens_parsing::{ParsingConfig, ResumeParser, Section, records};

pub use cvlens_core::{ConfidenceBreakdown, ConfidenceLevel, ResumeProfile};
pub use cvlens_parsing::confidence_breakdown;

/// Summary text is capped at this many characters.
const SUMMARY_MAX_CHARS: usize = 500;

const NO_TEXT_ERROR: &str = "Could not extract text from file";

/// Parse a resume document into a structured profile.
///
/// The filename is only used for format dispatch; the content comes
/// entirely from `bytes`.
pub fn parse_resume(filename: &str, bytes: &[u8]) -> ResumeProfile {
    parse_resume_with_config(filename, bytes, &ParsingConfig::default())
}

pub fn parse_resume_with_config(
    filename: &str,
    bytes: &[u8],
    config: &ParsingConfig,
) -> ResumeProfile {
    let (text, format) = extract_text(filename, bytes);
    debug!(%filename, ?format, bytes = text.len(), "extracted document text");

    if text.trim().is_empty() {
        info!(%filename, "no text extracted, returning error profile");
        return ResumeProfile {
            error: Some(NO_TEXT_ERROR.to_string()),
            ..ResumeProfile::default()
        };
    }

    let parser = ResumeParser::new(config.clone());

    let contact = parser.contact_info(&text);
    let full_name = parser.name(&text);
    let skills = parser.skills(&text);
    let experience_years = parser.experience_years(&text);
    let sections = parser.segment(&text);

    let summary = sections
        .get(&Section::Summary)
        .map(|s| truncate_chars(s, SUMMARY_MAX_CHARS))
        .unwrap_or_default();
    let education = sections
        .get(&Section::Education)
        .map(|s| records::parse_education(s))
        .unwrap_or_default();
    let work_experience = sections
        .get(&Section::Experience)
        .map(|s| records::parse_work_experience(s))
        .unwrap_or_default();
    let certifications = sections
        .get(&Section::Certifications)
        .map(|s| records::parse_certifications(s))
        .unwrap_or_default();
    let languages = sections
        .get(&Section::Languages)
        .map(|s| records::parse_languages(s))
        .unwrap_or_default();

    let breakdown = parser.confidence(&text, &contact, full_name.as_deref(), &skills);
    let confidence = breakdown.overall_confidence;
    info!(
        %filename,
        confidence,
        level = %breakdown.level(),
        skills = skills.len(),
        "resume parsed"
    );

    ResumeProfile {
        extracted_text: text,
        error: None,
        confidence,
        breakdown,
        full_name,
        contact,
        skills,
        experience_years,
        summary,
        education,
        work_experience,
        certifications,
        languages,
    }
}

/// Read and parse a resume from disk. I/O is the only fallible step.
pub fn parse_resume_file(path: &Path) -> std::io::Result<ResumeProfile> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    Ok(parse_resume(filename, &bytes))
}

fn truncate_chars(s: &str, max: usize) -> String {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max) {
        Some((idx, _)) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}
