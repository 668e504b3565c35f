use regex::Regex;

use crate::confidence::ConfidenceWeights;
use crate::keywords::{SKILL_KEYWORDS, SkillCategory, skill_matcher};
use crate::section::{SECTION_PATTERNS, Section};

/// Controls how a list of patterns/values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// A compiled skill keyword: the canonical keyword text, its category,
/// and the word-boundary matcher built for it.
#[derive(Debug, Clone)]
pub struct SkillKeyword {
    pub keyword: String,
    pub category: SkillCategory,
    pub matcher: Regex,
}

/// Configuration for the parsing pipeline.
///
/// All pattern tables are precompiled at build time and immutable
/// afterwards; the pipeline components take the config by reference, so
/// one config can be shared across any number of concurrent invocations.
/// `None`/`Default` fields mean "use the built-in defaults". Use
/// [`ParsingConfigBuilder`] to construct from string patterns.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    /// Section header patterns in tie-break order.
    pub(crate) section_patterns: Option<Vec<(Section, Regex)>>,
    /// Skill keyword table override (strings; matchers are compiled in
    /// `build`).
    pub(crate) skill_keywords: Option<Vec<SkillKeyword>>,
    /// Override for the contact email pattern.
    pub(crate) email_re: Option<Regex>,
    /// Override for the permissive phone pattern.
    pub(crate) phone_re: Option<Regex>,
    /// Number of leading non-blank lines scanned for the candidate name.
    pub(crate) name_scan_lines: usize,
    /// Minimum digit count for an accepted phone match.
    pub(crate) min_phone_digits: usize,
    /// Upper bound for an accepted experience-years value.
    pub(crate) max_experience_years: u32,
    /// Confidence metric weights.
    pub(crate) confidence_weights: Option<ConfidenceWeights>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            section_patterns: None,
            skill_keywords: None,
            email_re: None,
            phone_re: None,
            name_scan_lines: 5,
            min_phone_digits: 7,
            max_experience_years: 50,
            confidence_weights: None,
        }
    }
}

impl ParsingConfig {
    pub(crate) fn section_patterns(&self) -> &[(Section, Regex)] {
        self.section_patterns
            .as_deref()
            .unwrap_or_else(|| SECTION_PATTERNS.as_slice())
    }

    pub(crate) fn skill_keywords(&self) -> Vec<SkillKeyword> {
        match &self.skill_keywords {
            Some(keywords) => keywords.clone(),
            None => default_skill_keywords(),
        }
    }

    pub(crate) fn confidence_weights(&self) -> ConfidenceWeights {
        self.confidence_weights.clone().unwrap_or_default()
    }
}

pub(crate) fn default_skill_keywords() -> Vec<SkillKeyword> {
    SKILL_KEYWORDS
        .iter()
        .map(|(keyword, category)| SkillKeyword {
            keyword: (*keyword).to_string(),
            category: *category,
            matcher: skill_matcher(keyword),
        })
        .collect()
}

/// Builder for [`ParsingConfig`].
///
/// Accepts string patterns that are compiled in [`build()`](Self::build).
/// Fails fast with `regex::Error` if any pattern is invalid.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    section_patterns: Option<Vec<(Section, String)>>,
    skill_keywords: ListOverride<(String, SkillCategory)>,
    email_re: Option<String>,
    phone_re: Option<String>,
    name_scan_lines: Option<usize>,
    min_phone_digits: Option<usize>,
    max_experience_years: Option<u32>,
    confidence_weights: Option<ConfidenceWeights>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the section header patterns. Order is the tie-break order.
    pub fn section_patterns(mut self, patterns: Vec<(Section, String)>) -> Self {
        self.section_patterns = Some(patterns);
        self
    }

    /// Completely replace the skill keyword table.
    pub fn set_skill_keywords(mut self, keywords: Vec<(String, SkillCategory)>) -> Self {
        self.skill_keywords = ListOverride::Replace(keywords);
        self
    }

    /// Append keywords to the default skill table.
    pub fn add_skill_keyword(mut self, keyword: String, category: SkillCategory) -> Self {
        match &mut self.skill_keywords {
            ListOverride::Extend(v) => v.push((keyword, category)),
            _ => self.skill_keywords = ListOverride::Extend(vec![(keyword, category)]),
        }
        self
    }

    pub fn email_regex(mut self, pattern: &str) -> Self {
        self.email_re = Some(pattern.to_string());
        self
    }

    pub fn phone_regex(mut self, pattern: &str) -> Self {
        self.phone_re = Some(pattern.to_string());
        self
    }

    pub fn name_scan_lines(mut self, n: usize) -> Self {
        self.name_scan_lines = Some(n);
        self
    }

    pub fn min_phone_digits(mut self, n: usize) -> Self {
        self.min_phone_digits = Some(n);
        self
    }

    pub fn max_experience_years(mut self, n: u32) -> Self {
        self.max_experience_years = Some(n);
        self
    }

    /// Set custom confidence metric weights.
    pub fn confidence_weights(mut self, weights: ConfidenceWeights) -> Self {
        self.confidence_weights = Some(weights);
        self
    }

    /// Compile all string patterns and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, regex::Error> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        let section_patterns = self
            .section_patterns
            .map(|patterns| {
                patterns
                    .into_iter()
                    .map(|(section, p)| Ok((section, Regex::new(&p)?)))
                    .collect::<Result<Vec<_>, regex::Error>>()
            })
            .transpose()?;

        let skill_keywords = match self.skill_keywords {
            ListOverride::Default => None,
            ref other => {
                let defaults: Vec<(String, SkillCategory)> = SKILL_KEYWORDS
                    .iter()
                    .map(|(k, c)| ((*k).to_string(), *c))
                    .collect();
                Some(
                    other
                        .resolve(&defaults)
                        .into_iter()
                        .map(|(keyword, category)| SkillKeyword {
                            matcher: skill_matcher(&keyword),
                            keyword,
                            category,
                        })
                        .collect(),
                )
            }
        };

        Ok(ParsingConfig {
            section_patterns,
            skill_keywords,
            email_re: compile(self.email_re)?,
            phone_re: compile(self.phone_re)?,
            name_scan_lines: self.name_scan_lines.unwrap_or(5),
            min_phone_digits: self.min_phone_digits.unwrap_or(7),
            max_experience_years: self.max_experience_years.unwrap_or(50),
            confidence_weights: self.confidence_weights,
        })
    }
}
