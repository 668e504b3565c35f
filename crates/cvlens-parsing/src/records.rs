//! Line-oriented parsers turning section blocks into structured records.
//!
//! These are intentionally shallow heuristics, not grammars: they favor
//! recall over precision and leave sub-fields empty when unknown. The
//! confidence scorer, not this layer, signals extraction quality.

use cvlens_core::{CertificationEntry, EducationEntry, LanguageEntry, WorkExperienceEntry};

use crate::keywords::{INSTITUTION_KEYWORDS, RECORD_ROLE_KEYWORDS};

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// A non-blank line becomes a record only if it names an institution.
/// Degree and year are left empty for future refinement.
pub fn parse_education(section_text: &str) -> Vec<EducationEntry> {
    non_blank_lines(section_text)
        .filter(|line| {
            let lower = line.to_lowercase();
            INSTITUTION_KEYWORDS.iter().any(|w| lower.contains(w))
        })
        .map(|line| EducationEntry {
            institution: line.to_string(),
            ..Default::default()
        })
        .collect()
}

/// A role-keyword line opens a new record; the first later unclaimed
/// short line (five words or fewer) becomes the company; everything else
/// accumulates into the open record's description. The last open record
/// is flushed at end of section.
pub fn parse_work_experience(section_text: &str) -> Vec<WorkExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<WorkExperienceEntry> = None;

    for line in non_blank_lines(section_text) {
        let lower = line.to_lowercase();
        if RECORD_ROLE_KEYWORDS.iter().any(|w| lower.contains(w)) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(WorkExperienceEntry {
                position: line.to_string(),
                ..Default::default()
            });
        } else if let Some(entry) = current.as_mut() {
            if entry.company.is_empty() && line.split_whitespace().count() <= 5 {
                entry.company = line.to_string();
            } else {
                if !entry.description.is_empty() {
                    entry.description.push(' ');
                }
                entry.description.push_str(line);
            }
        }
    }

    if let Some(entry) = current {
        entries.push(entry);
    }
    entries
}

/// Every non-blank line is one certification; issuer and year are left
/// empty.
pub fn parse_certifications(section_text: &str) -> Vec<CertificationEntry> {
    non_blank_lines(section_text)
        .map(|line| CertificationEntry {
            name: line.to_string(),
            ..Default::default()
        })
        .collect()
}

/// Every non-blank line is one language; proficiency is left empty.
pub fn parse_languages(section_text: &str) -> Vec<LanguageEntry> {
    non_blank_lines(section_text)
        .map(|line| LanguageEntry {
            language: line.to_string(),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_keeps_only_institution_lines() {
        let text = "State University\n2015 - 2019\nDean's list\nCommunity College\n";
        let entries = parse_education(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution, "State University");
        assert_eq!(entries[1].institution, "Community College");
        assert_eq!(entries[0].degree, "");
        assert_eq!(entries[0].year, "");
    }

    #[test]
    fn education_empty_section() {
        assert!(parse_education("").is_empty());
        assert!(parse_education("no matching lines here").is_empty());
    }

    #[test]
    fn work_experience_groups_records() {
        let text = concat!(
            "Senior Software Engineer\n",
            "Acme Corp\n",
            "Built the billing platform from scratch.\n",
            "Scaled it to a million users.\n",
            "Data Analyst\n",
            "Beta LLC\n",
            "Wrote dashboards.\n",
        );
        let entries = parse_work_experience(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position, "Senior Software Engineer");
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(
            entries[0].description,
            "Built the billing platform from scratch. Scaled it to a million users."
        );
        assert_eq!(entries[1].position, "Data Analyst");
        assert_eq!(entries[1].company, "Beta LLC");
    }

    #[test]
    fn work_experience_long_line_goes_to_description() {
        let text = concat!(
            "Backend Developer\n",
            "Worked on a very large distributed system for years\n",
            "Initech\n",
        );
        let entries = parse_work_experience(text);
        assert_eq!(entries.len(), 1);
        // The long line is description; the later short line claims company.
        assert_eq!(entries[0].company, "Initech");
        assert!(entries[0].description.starts_with("Worked on"));
    }

    #[test]
    fn work_experience_ignores_preamble_lines() {
        let text = "Some intro line\nProject Manager\nGamma Inc\n";
        let entries = parse_work_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, "Project Manager");
    }

    #[test]
    fn certifications_one_per_line() {
        let entries = parse_certifications("AWS Certified Solutions Architect\nCKA\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "AWS Certified Solutions Architect");
        assert_eq!(entries[0].issuer, "");
    }

    #[test]
    fn languages_one_per_line() {
        let entries = parse_languages("English\nSpanish (fluent)\n\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].language, "Spanish (fluent)");
        assert_eq!(entries[1].proficiency, "");
    }
}
