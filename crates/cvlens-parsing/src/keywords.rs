//! Curated keyword tables used by entity extraction and scoring.
//!
//! The tables are global read-only data; the matchers built from them are
//! compiled once and shared across all invocations. Callers that need a
//! different skill list inject one through [`crate::ParsingConfig`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Category of a skill keyword, used for the diversity signal in the
/// professional-content metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Programming,
    Framework,
    Database,
    CloudDevops,
    DataScience,
    Tool,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Framework => "frameworks",
            Self::Database => "databases",
            Self::CloudDevops => "cloud",
            Self::DataScience => "data_science",
            Self::Tool => "tools",
        }
    }
}

/// Default skill keyword table, matched case-insensitively on word
/// boundaries against the full text.
pub static SKILL_KEYWORDS: &[(&str, SkillCategory)] = &[
    // Programming languages
    ("python", SkillCategory::Programming),
    ("javascript", SkillCategory::Programming),
    ("java", SkillCategory::Programming),
    ("c++", SkillCategory::Programming),
    ("c#", SkillCategory::Programming),
    ("php", SkillCategory::Programming),
    ("ruby", SkillCategory::Programming),
    ("go", SkillCategory::Programming),
    ("rust", SkillCategory::Programming),
    ("swift", SkillCategory::Programming),
    ("typescript", SkillCategory::Programming),
    ("kotlin", SkillCategory::Programming),
    ("scala", SkillCategory::Programming),
    ("matlab", SkillCategory::Programming),
    ("sql", SkillCategory::Programming),
    ("html", SkillCategory::Programming),
    ("css", SkillCategory::Programming),
    // Frameworks and libraries
    ("react", SkillCategory::Framework),
    ("angular", SkillCategory::Framework),
    ("vue", SkillCategory::Framework),
    ("django", SkillCategory::Framework),
    ("flask", SkillCategory::Framework),
    ("spring", SkillCategory::Framework),
    ("express", SkillCategory::Framework),
    ("fastapi", SkillCategory::Framework),
    ("laravel", SkillCategory::Framework),
    ("rails", SkillCategory::Framework),
    ("asp.net", SkillCategory::Framework),
    ("jquery", SkillCategory::Framework),
    ("bootstrap", SkillCategory::Framework),
    ("tailwind", SkillCategory::Framework),
    // Databases
    ("mysql", SkillCategory::Database),
    ("postgresql", SkillCategory::Database),
    ("mongodb", SkillCategory::Database),
    ("redis", SkillCategory::Database),
    ("elasticsearch", SkillCategory::Database),
    ("sqlite", SkillCategory::Database),
    ("oracle", SkillCategory::Database),
    ("cassandra", SkillCategory::Database),
    ("dynamodb", SkillCategory::Database),
    ("firebase", SkillCategory::Database),
    // Cloud and DevOps
    ("aws", SkillCategory::CloudDevops),
    ("azure", SkillCategory::CloudDevops),
    ("gcp", SkillCategory::CloudDevops),
    ("docker", SkillCategory::CloudDevops),
    ("kubernetes", SkillCategory::CloudDevops),
    ("jenkins", SkillCategory::CloudDevops),
    ("git", SkillCategory::CloudDevops),
    ("github", SkillCategory::CloudDevops),
    ("gitlab", SkillCategory::CloudDevops),
    ("circleci", SkillCategory::CloudDevops),
    ("terraform", SkillCategory::CloudDevops),
    ("ansible", SkillCategory::CloudDevops),
    ("nginx", SkillCategory::CloudDevops),
    ("apache", SkillCategory::CloudDevops),
    // Data science and AI
    ("machine learning", SkillCategory::DataScience),
    ("deep learning", SkillCategory::DataScience),
    ("data science", SkillCategory::DataScience),
    ("pandas", SkillCategory::DataScience),
    ("numpy", SkillCategory::DataScience),
    ("tensorflow", SkillCategory::DataScience),
    ("pytorch", SkillCategory::DataScience),
    ("scikit-learn", SkillCategory::DataScience),
    ("keras", SkillCategory::DataScience),
    ("opencv", SkillCategory::DataScience),
    ("nltk", SkillCategory::DataScience),
    // Other tools
    ("excel", SkillCategory::Tool),
    ("powerbi", SkillCategory::Tool),
    ("tableau", SkillCategory::Tool),
    ("figma", SkillCategory::Tool),
    ("adobe", SkillCategory::Tool),
    ("photoshop", SkillCategory::Tool),
    ("illustrator", SkillCategory::Tool),
    ("jira", SkillCategory::Tool),
    ("confluence", SkillCategory::Tool),
    ("slack", SkillCategory::Tool),
    ("notion", SkillCategory::Tool),
    ("trello", SkillCategory::Tool),
];

/// Action verbs and professional vocabulary for the keyword-density
/// signal.
pub static PROFESSIONAL_KEYWORDS: &[&str] = &[
    "managed",
    "developed",
    "led",
    "implemented",
    "designed",
    "created",
    "improved",
    "delivered",
    "achieved",
    "coordinated",
    "collaborated",
    "responsible",
    "experience",
    "projects",
];

/// Seniority and role words for the role-signal tier.
pub static SENIORITY_KEYWORDS: &[&str] = &[
    "senior", "junior", "lead", "principal", "staff", "director", "head", "chief", "intern",
];

/// Role keywords that open a new record in work-experience parsing.
pub static RECORD_ROLE_KEYWORDS: &[&str] =
    &["engineer", "manager", "developer", "analyst", "specialist"];

/// Institution keywords that promote a line to an education record.
pub static INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school"];

/// Degree vocabulary for the structure-recognition metric.
pub static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(bachelor|master|ph\.?d|doctorate|mba|b\.?sc?|m\.?sc?|diploma)\b").unwrap()
});

/// Compile a word-boundary matcher for one skill keyword.
///
/// `\b` only works next to word characters, so keywords that start or
/// end with punctuation (`c++`, `c#`, `.net`) get the boundary assertion
/// dropped on that side instead of silently never matching.
pub fn skill_matcher(keyword: &str) -> Regex {
    let escaped = regex::escape(&keyword.to_lowercase());
    let leading = if keyword.starts_with(|c: char| c.is_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    let trailing = if keyword.ends_with(|c: char| c.is_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    Regex::new(&format!("{leading}{escaped}{trailing}")).unwrap()
}

/// Title-case a matched keyword the way the stored skill list expects:
/// capitalize each letter that follows a non-letter, lowercase the rest.
/// "aws" becomes "Aws", "machine learning" becomes "Machine Learning",
/// "asp.net" becomes "Asp.Net".
pub fn title_case(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut prev_alpha = false;
    for c in keyword.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_examples() {
        assert_eq!(title_case("aws"), "Aws");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("asp.net"), "Asp.Net");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
    }

    #[test]
    fn skill_matcher_word_boundaries() {
        let re = skill_matcher("java");
        assert!(re.is_match("expert in java and sql"));
        assert!(!re.is_match("javascript only"));
    }

    #[test]
    fn skill_matcher_punctuated_keywords() {
        let re = skill_matcher("c++");
        assert!(re.is_match("fluent in c++ since 2010"));

        let re = skill_matcher("c#");
        assert!(re.is_match("c# and .net"));

        let re = skill_matcher("asp.net");
        assert!(re.is_match("built services with asp.net core"));
    }

    #[test]
    fn degree_pattern_matches_common_forms() {
        assert!(DEGREE_RE.is_match("Bachelor of Science"));
        assert!(DEGREE_RE.is_match("PhD in Physics"));
        assert!(DEGREE_RE.is_match("M.Sc. Computer Science"));
        assert!(!DEGREE_RE.is_match("went to class"));
    }
}
