//! Resume text parsing: section segmentation, entity extraction,
//! structured-record parsing, and confidence scoring.
//!
//! The free functions at the crate root run with the built-in pattern
//! tables. [`ResumeParser`] wraps a [`ParsingConfig`] for callers that
//! customize patterns; it is cheap to clone and safe to share across
//! threads since all tables are precompiled.

pub mod confidence;
pub mod config;
pub mod entities;
pub mod keywords;
pub mod records;
pub mod section;

pub use confidence::{ConfidenceWeights, confidence_breakdown};
pub use config::{ListOverride, ParsingConfig, ParsingConfigBuilder, SkillKeyword};
pub use entities::{
    extract_contact_info, extract_experience_years, extract_name, extract_skills,
};
pub use records::{
    parse_certifications, parse_education, parse_languages, parse_work_experience,
};
pub use section::{Section, SectionMap, segment};

pub use cvlens_core::{
    CertificationEntry, ConfidenceBreakdown, ConfidenceLevel, ContactInfo, EducationEntry,
    LanguageEntry, MetricScore, WorkExperienceEntry,
};

/// A parser bound to a [`ParsingConfig`].
///
/// Every method is a pure function of the input text; the parser holds
/// no per-document state.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    config: ParsingConfig,
}

impl ResumeParser {
    pub fn new(config: ParsingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    pub fn segment(&self, text: &str) -> SectionMap {
        section::segment_with_config(text, &self.config)
    }

    pub fn contact_info(&self, text: &str) -> ContactInfo {
        entities::extract_contact_info_with_config(text, &self.config)
    }

    pub fn name(&self, text: &str) -> Option<String> {
        entities::extract_name_with_config(text, &self.config)
    }

    pub fn skills(&self, text: &str) -> Vec<String> {
        entities::extract_skills_with_config(text, &self.config)
    }

    pub fn experience_years(&self, text: &str) -> Option<u32> {
        entities::extract_experience_years_with_config(text, &self.config)
    }

    pub fn confidence(
        &self,
        text: &str,
        contact: &ContactInfo,
        name: Option<&str>,
        skills: &[String],
    ) -> ConfidenceBreakdown {
        confidence::confidence_breakdown_with_config(text, contact, name, skills, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
jane.doe@example.com
(555) 123-4567

Summary
Senior engineer with a decade of experience.

Skills
Python, Rust, PostgreSQL

Experience
Software Engineer at Acme
Built data pipelines.
";

    #[test]
    fn parser_with_default_config_matches_free_functions() {
        let parser = ResumeParser::default();
        assert_eq!(parser.contact_info(SAMPLE), extract_contact_info(SAMPLE));
        assert_eq!(parser.name(SAMPLE), extract_name(SAMPLE));
        assert_eq!(parser.skills(SAMPLE), extract_skills(SAMPLE));
        assert_eq!(parser.segment(SAMPLE), segment(SAMPLE));
    }

    #[test]
    fn parser_end_to_end_on_sample() {
        let parser = ResumeParser::default();
        let contact = parser.contact_info(SAMPLE);
        let name = parser.name(SAMPLE);
        let skills = parser.skills(SAMPLE);

        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(name.as_deref(), Some("Jane Doe"));
        assert!(skills.iter().any(|s| s == "Python"));

        let breakdown = parser.confidence(SAMPLE, &contact, name.as_deref(), &skills);
        assert!(breakdown.overall_confidence > 0.4);
        assert!(!breakdown.penalties.contains_key("no_contact_info"));
    }

    #[test]
    fn custom_config_flows_through_parser() {
        let config = ParsingConfigBuilder::new()
            .set_skill_keywords(vec![(
                "cobol".to_string(),
                keywords::SkillCategory::Programming,
            )])
            .build()
            .unwrap();
        let parser = ResumeParser::new(config);
        let skills = parser.skills("I maintain COBOL and Python systems.");
        assert_eq!(skills, vec!["Cobol".to_string()]);
    }
}
