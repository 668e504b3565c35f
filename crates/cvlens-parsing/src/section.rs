use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;

/// The closed set of recognized resume sections.
///
/// The variant order here is also the header-pattern tie-break order:
/// when a line could match several section patterns, the first pattern
/// in declared order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Summary,
    Certifications,
    Languages,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Summary => "summary",
            Self::Certifications => "certifications",
            Self::Languages => "languages",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text block per recognized section. A section is absent when no
/// header pattern matched; a repeated header overwrites the earlier
/// block when flushed.
pub type SectionMap = BTreeMap<Section, String>;

/// Default header-recognition patterns, one per section, in tie-break
/// order.
pub(crate) static SECTION_PATTERNS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    vec![
        (
            Section::Experience,
            Regex::new(r"(?i)(work\s+)?experience|employment|professional\s+background").unwrap(),
        ),
        (
            Section::Education,
            Regex::new(r"(?i)education|academic|qualifications|degrees?").unwrap(),
        ),
        (
            Section::Skills,
            Regex::new(r"(?i)skills|competencies|technical|technologies").unwrap(),
        ),
        (
            Section::Summary,
            Regex::new(r"(?i)summary|profile|objective|about").unwrap(),
        ),
        (
            Section::Certifications,
            Regex::new(r"(?i)certifications?|certificates?|licenses?").unwrap(),
        ),
        (
            Section::Languages,
            Regex::new(r"(?i)languages?|linguistic").unwrap(),
        ),
    ]
});

/// Split plain text into named logical zones using header-pattern
/// recognition.
pub fn segment(text: &str) -> SectionMap {
    segment_with_config(text, &ParsingConfig::default())
}

/// Config-aware version of [`segment`].
///
/// Line scan with a current-section cursor. A header line flushes the
/// accumulated block into the previous section and opens a new one;
/// non-header lines append to the open section. Blank lines inside an
/// open section are preserved as separators so multi-paragraph entries
/// stay intact.
pub(crate) fn segment_with_config(text: &str, config: &ParsingConfig) -> SectionMap {
    let patterns = config.section_patterns();

    let mut sections = SectionMap::new();
    let mut current: Option<Section> = None;
    let mut content: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if current.is_some() && !content.is_empty() {
                content.push(String::new());
            }
            continue;
        }

        let header = patterns
            .iter()
            .find(|(_, re)| re.is_match(line))
            .map(|(section, _)| *section);

        if let Some(section) = header {
            if let Some(prev) = current {
                flush(&mut sections, prev, &mut content);
            }
            current = Some(section);
            content.clear();
        } else if current.is_some() {
            content.push(line.to_string());
        }
    }

    if let Some(prev) = current {
        flush(&mut sections, prev, &mut content);
    }

    sections
}

fn flush(sections: &mut SectionMap, section: Section, content: &mut Vec<String>) {
    if content.is_empty() {
        return;
    }
    let block = content.join("\n").trim().to_string();
    if !block.is_empty() {
        sections.insert(section, block);
    }
    content.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_basic_sections() {
        let text = "Summary\nSeasoned backend developer.\n\nEducation\nState University\n\nSkills\nPython, SQL\n";
        let sections = segment(text);
        assert_eq!(sections[&Section::Summary], "Seasoned backend developer.");
        assert_eq!(sections[&Section::Education], "State University");
        assert_eq!(sections[&Section::Skills], "Python, SQL");
    }

    #[test]
    fn no_header_yields_empty_map() {
        let sections = segment("just some text\nwith no headers at all? well, none");
        assert!(sections.is_empty());
    }

    #[test]
    fn blank_lines_inside_section_are_preserved() {
        let text = "Experience\nAcme Corp\nBuilt things.\n\nBeta LLC\nShipped things.\n";
        let sections = segment(text);
        let block = &sections[&Section::Experience];
        assert_eq!(block, "Acme Corp\nBuilt things.\n\nBeta LLC\nShipped things.");
    }

    #[test]
    fn repeated_header_overwrites_earlier_block() {
        let text = "Education\nOld University\n\nSummary\nA person.\n\nEducation\nNew College\n";
        let sections = segment(text);
        assert_eq!(sections[&Section::Education], "New College");
    }

    #[test]
    fn tie_break_uses_declared_order() {
        // "Professional Background" matches the experience pattern; a line
        // like "Academic Background" must not be captured as experience.
        let text = "Professional Background\ndid work\n\nAcademic Qualifications\nState College\n";
        let sections = segment(text);
        assert_eq!(sections[&Section::Experience], "did work");
        assert_eq!(sections[&Section::Education], "State College");
    }

    #[test]
    fn text_before_first_header_is_dropped() {
        let text = "John Smith\njohn@example.com\n\nSkills\nPython\n";
        let sections = segment(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[&Section::Skills], "Python");
    }

    #[test]
    fn header_with_no_content_is_absent() {
        let sections = segment("Languages\n");
        assert!(!sections.contains_key(&Section::Languages));
    }

    #[test]
    fn custom_header_patterns_are_honored() {
        let config = crate::ParsingConfigBuilder::new()
            .section_patterns(vec![(Section::Skills, r"(?i)toolbox".to_string())])
            .build()
            .unwrap();
        let text = "Toolbox\nRust, SQL\n\nSkills\nignored header now\n";
        let sections = segment_with_config(text, &config);
        assert_eq!(sections[&Section::Skills], "Rust, SQL\n\nSkills\nignored header now");
    }
}
