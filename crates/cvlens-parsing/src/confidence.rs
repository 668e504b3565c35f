//! Multi-metric confidence scoring for extraction results.
//!
//! Six independently computed metrics in [0, 1] are combined by fixed
//! weights summing to 1.0; named penalties are then subtracted from the
//! weighted sum and the result is clamped to [0, 1]. Penalties are kept
//! separate from the metrics so that "uniformly weak signals" and "a
//! specific red flag" stay distinguishable in the breakdown.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Value, json};

use cvlens_core::{ConfidenceBreakdown, ContactInfo, MetricScore};

use crate::config::ParsingConfig;
use crate::keywords::{DEGREE_RE, PROFESSIONAL_KEYWORDS, SENIORITY_KEYWORDS};

/// Fixed metric weights. The defaults sum to 1.0.
#[derive(Debug, Clone)]
pub struct ConfidenceWeights {
    pub text_quality: f64,
    pub contact_completeness: f64,
    pub personal_info: f64,
    pub professional_content: f64,
    pub structure_recognition: f64,
    pub data_validation: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            text_quality: 0.25,
            contact_completeness: 0.20,
            personal_info: 0.15,
            professional_content: 0.20,
            structure_recognition: 0.10,
            data_validation: 0.10,
        }
    }
}

/// Text shorter than this incurs the `short_text` penalty.
///
/// Deliberately below the ~100 chars of a minimal but parseable resume
/// (name, email, phone, a skills line): such a document should score on
/// its metrics, not be written off for length.
const SHORT_TEXT_CHARS: usize = 80;

const PENALTY_SHORT_TEXT: f64 = 0.30;
const PENALTY_NO_CONTACT: f64 = 0.20;
const PENALTY_SPECIAL_CHARS: f64 = 0.20;
const PENALTY_WORD_DIVERSITY: f64 = 0.15;

/// Special-character ratio above which `high_special_chars` fires.
const SPECIAL_CHAR_RATIO: f64 = 0.30;
/// Unique-word ratio below which `low_word_diversity` fires (only
/// checked above this many words).
const WORD_DIVERSITY_RATIO: f64 = 0.30;
const WORD_DIVERSITY_MIN_WORDS: usize = 10;

static STRICT_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    // Years or Month-Year forms, the usual resume date vocabulary
    Regex::new(r"(?i)\b(?:(?:19|20)\d{2}|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b")
        .unwrap()
});

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[•\-\*–]\s+").unwrap());

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    // "City, ST" or an explicit location label
    Regex::new(r"(?i)\b(?:address|location|based in)\b|[A-Z][a-z]+,\s*[A-Z]{2}\b").unwrap()
});

/// Compute the full confidence breakdown from extracted fields.
pub fn confidence_breakdown(
    text: &str,
    contact: &ContactInfo,
    name: Option<&str>,
    skills: &[String],
) -> ConfidenceBreakdown {
    confidence_breakdown_with_config(text, contact, name, skills, &ParsingConfig::default())
}

pub(crate) fn confidence_breakdown_with_config(
    text: &str,
    contact: &ContactInfo,
    name: Option<&str>,
    skills: &[String],
    config: &ParsingConfig,
) -> ConfidenceBreakdown {
    let weights = config.confidence_weights();

    let mut metrics = BTreeMap::new();
    let mut insert = |key: &str, weight: f64, (score, details): (f64, BTreeMap<String, Value>)| {
        metrics.insert(
            key.to_string(),
            MetricScore {
                score,
                weight,
                weighted: score * weight,
                details,
            },
        );
    };

    insert("text_quality", weights.text_quality, text_quality(text));
    insert(
        "contact_completeness",
        weights.contact_completeness,
        contact_completeness(contact),
    );
    insert("personal_info", weights.personal_info, personal_info(text, name));
    insert(
        "professional_content",
        weights.professional_content,
        professional_content(text, skills, config),
    );
    insert(
        "structure_recognition",
        weights.structure_recognition,
        structure_recognition(text, config),
    );
    insert("data_validation", weights.data_validation, data_validation(contact));

    let weighted_sum: f64 = metrics.values().map(|m| m.weighted).sum();

    let penalties = compute_penalties(text, contact);
    let penalty_sum: f64 = penalties.values().sum();

    // No normalization guarantee before the clamp: a heavy penalty stack
    // may drive the intermediate sum negative.
    let overall_confidence = (weighted_sum - penalty_sum).clamp(0.0, 1.0);

    let recommendations = recommendations(text, contact, name, skills, &penalties, &metrics);

    ConfidenceBreakdown {
        metrics,
        penalties,
        recommendations,
        overall_confidence,
    }
}

/// Text quality: length tiers, alphabetic ratio, valid-word ratio,
/// sentence count. Tiers: length >500/0.4, >200/0.3, >50/0.2, >0/0.1;
/// alpha ratio >=0.7/0.3, >=0.5/0.2, >=0.3/0.1; valid words >=0.8/0.2,
/// >=0.6/0.1; sentences >=5/0.1, >=2/0.05. Capped at 1.0.
fn text_quality(text: &str) -> (f64, BTreeMap<String, Value>) {
    let char_count = text.chars().count();
    let alpha_count = text.chars().filter(|c| c.is_alphabetic()).count();
    let alpha_ratio = if char_count > 0 {
        alpha_count as f64 / char_count as f64
    } else {
        0.0
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    let valid_words = words
        .iter()
        .filter(|w| w.chars().filter(|c| c.is_alphabetic()).count() >= 2)
        .count();
    let valid_word_ratio = if words.is_empty() {
        0.0
    } else {
        valid_words as f64 / words.len() as f64
    };

    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| s.split_whitespace().count() >= 3)
        .count();

    let mut score: f64 = 0.0;
    score += match char_count {
        n if n > 500 => 0.4,
        n if n > 200 => 0.3,
        n if n > 50 => 0.2,
        n if n > 0 => 0.1,
        _ => 0.0,
    };
    score += match alpha_ratio {
        r if r >= 0.7 => 0.3,
        r if r >= 0.5 => 0.2,
        r if r >= 0.3 => 0.1,
        _ => 0.0,
    };
    score += match valid_word_ratio {
        r if r >= 0.8 => 0.2,
        r if r >= 0.6 => 0.1,
        _ => 0.0,
    };
    score += match sentence_count {
        n if n >= 5 => 0.1,
        n if n >= 2 => 0.05,
        _ => 0.0,
    };

    let details = BTreeMap::from([
        ("char_count".to_string(), json!(char_count)),
        ("alpha_ratio".to_string(), json!(alpha_ratio)),
        ("word_count".to_string(), json!(words.len())),
        ("valid_word_ratio".to_string(), json!(valid_word_ratio)),
        ("sentence_count".to_string(), json!(sentence_count)),
    ]);
    (score.min(1.0), details)
}

/// Contact completeness: a valid email dominates (0.5, or 0.25 when
/// present but malformed), phone 0.3 (0.15 when suspect), each
/// professional URL 0.1.
fn contact_completeness(contact: &ContactInfo) -> (f64, BTreeMap<String, Value>) {
    let email_valid = contact
        .email
        .as_deref()
        .is_some_and(|e| STRICT_EMAIL_RE.is_match(e));
    let phone_valid = contact.phone.as_deref().is_some_and(plausible_phone);

    let mut score: f64 = 0.0;
    if contact.email.is_some() {
        score += if email_valid { 0.5 } else { 0.25 };
    }
    if contact.phone.is_some() {
        score += if phone_valid { 0.3 } else { 0.15 };
    }
    if contact.linkedin_url.is_some() {
        score += 0.1;
    }
    if contact.github_url.is_some() {
        score += 0.1;
    }

    let details = BTreeMap::from([
        ("email_present".to_string(), json!(contact.email.is_some())),
        ("email_valid".to_string(), json!(email_valid)),
        ("phone_present".to_string(), json!(contact.phone.is_some())),
        ("phone_valid".to_string(), json!(phone_valid)),
        ("linkedin_present".to_string(), json!(contact.linkedin_url.is_some())),
        ("github_present".to_string(), json!(contact.github_url.is_some())),
    ]);
    (score.min(1.0), details)
}

/// Personal info: name present 0.3, well-formed (two or more capitalized
/// tokens) +0.3, a location indicator 0.2, a plausible year 0.2.
fn personal_info(text: &str, name: Option<&str>) -> (f64, BTreeMap<String, Value>) {
    let name_well_formed = name.is_some_and(|n| {
        let tokens: Vec<&str> = n.split_whitespace().collect();
        tokens.len() >= 2
            && tokens
                .iter()
                .all(|t| t.chars().next().is_some_and(char::is_uppercase))
    });
    let has_location = LOCATION_RE.is_match(text);
    let has_year = YEAR_RE.is_match(text);

    let mut score: f64 = 0.0;
    if name.is_some() {
        score += 0.3;
    }
    if name_well_formed {
        score += 0.3;
    }
    if has_location {
        score += 0.2;
    }
    if has_year {
        score += 0.2;
    }

    let details = BTreeMap::from([
        ("name_present".to_string(), json!(name.is_some())),
        ("name_well_formed".to_string(), json!(name_well_formed)),
        ("location_indicator".to_string(), json!(has_location)),
        ("year_indicator".to_string(), json!(has_year)),
    ]);
    (score.min(1.0), details)
}

/// Professional content: skill count tiers (>=10/0.4, >=5/0.3, >=3/0.25,
/// >=1/0.15), category diversity (>=3/0.2, 2/0.1), professional keyword
/// hits (>=5/0.2, >=2/0.1), seniority keyword hits (>=2/0.2, >=1/0.1).
fn professional_content(
    text: &str,
    skills: &[String],
    config: &ParsingConfig,
) -> (f64, BTreeMap<String, Value>) {
    let text_lower = text.to_lowercase();

    let matched_categories: std::collections::HashSet<&str> = config
        .skill_keywords()
        .iter()
        .filter(|k| k.matcher.is_match(&text_lower))
        .map(|k| k.category.as_str())
        .collect();

    let keyword_hits = PROFESSIONAL_KEYWORDS
        .iter()
        .filter(|w| word_present(&text_lower, w))
        .count();
    let seniority_hits = SENIORITY_KEYWORDS
        .iter()
        .filter(|w| word_present(&text_lower, w))
        .count();

    let mut score: f64 = 0.0;
    score += match skills.len() {
        n if n >= 10 => 0.4,
        n if n >= 5 => 0.3,
        n if n >= 3 => 0.25,
        n if n >= 1 => 0.15,
        _ => 0.0,
    };
    score += match matched_categories.len() {
        n if n >= 3 => 0.2,
        2 => 0.1,
        _ => 0.0,
    };
    score += match keyword_hits {
        n if n >= 5 => 0.2,
        n if n >= 2 => 0.1,
        _ => 0.0,
    };
    score += match seniority_hits {
        n if n >= 2 => 0.2,
        n if n >= 1 => 0.1,
        _ => 0.0,
    };

    let details = BTreeMap::from([
        ("skill_count".to_string(), json!(skills.len())),
        ("category_count".to_string(), json!(matched_categories.len())),
        ("keyword_hits".to_string(), json!(keyword_hits)),
        ("seniority_hits".to_string(), json!(seniority_hits)),
    ]);
    (score.min(1.0), details)
}

/// Structure recognition: recognized section headers (>=4/0.4, >=2/0.25,
/// >=1/0.1), bullet markers 0.2, date patterns (>=2/0.2, >=1/0.1),
/// degree vocabulary 0.2.
fn structure_recognition(text: &str, config: &ParsingConfig) -> (f64, BTreeMap<String, Value>) {
    let patterns = config.section_patterns();
    let matched_sections: std::collections::BTreeSet<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter_map(|line| {
            patterns
                .iter()
                .find(|(_, re)| re.is_match(line))
                .map(|(section, _)| section.as_str())
        })
        .collect();

    let has_bullets = BULLET_RE.is_match(text);
    let date_count = DATE_RE.find_iter(text).count();
    let has_degree = DEGREE_RE.is_match(text);

    let mut score: f64 = 0.0;
    score += match matched_sections.len() {
        n if n >= 4 => 0.4,
        n if n >= 2 => 0.25,
        n if n >= 1 => 0.1,
        _ => 0.0,
    };
    if has_bullets {
        score += 0.2;
    }
    score += match date_count {
        n if n >= 2 => 0.2,
        1 => 0.1,
        _ => 0.0,
    };
    if has_degree {
        score += 0.2;
    }

    let details = BTreeMap::from([
        ("section_header_count".to_string(), json!(matched_sections.len())),
        (
            "sections".to_string(),
            json!(matched_sections.iter().collect::<Vec<_>>()),
        ),
        ("bullet_markers".to_string(), json!(has_bullets)),
        ("date_pattern_count".to_string(), json!(date_count)),
        ("degree_keywords".to_string(), json!(has_degree)),
    ]);
    (score.min(1.0), details)
}

/// Data validation: strict email format 0.4, phone digit length 0.3,
/// URL domain containment 0.15 each.
fn data_validation(contact: &ContactInfo) -> (f64, BTreeMap<String, Value>) {
    let email_valid = contact
        .email
        .as_deref()
        .is_some_and(|e| STRICT_EMAIL_RE.is_match(e));
    let phone_valid = contact.phone.as_deref().is_some_and(plausible_phone);
    let linkedin_valid = contact
        .linkedin_url
        .as_deref()
        .is_some_and(|u| u.to_lowercase().contains("linkedin.com"));
    let github_valid = contact
        .github_url
        .as_deref()
        .is_some_and(|u| u.to_lowercase().contains("github.com"));

    let mut score: f64 = 0.0;
    if email_valid {
        score += 0.4;
    }
    if phone_valid {
        score += 0.3;
    }
    if linkedin_valid {
        score += 0.15;
    }
    if github_valid {
        score += 0.15;
    }

    let details = BTreeMap::from([
        ("email_valid".to_string(), json!(email_valid)),
        ("phone_valid".to_string(), json!(phone_valid)),
        ("linkedin_valid".to_string(), json!(linkedin_valid)),
        ("github_valid".to_string(), json!(github_valid)),
    ]);
    (score.min(1.0), details)
}

fn plausible_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (7..=15).contains(&digits)
}

fn word_present(haystack_lower: &str, word: &str) -> bool {
    haystack_lower.split(|c: char| !c.is_alphanumeric()).any(|w| w == word)
}

fn compute_penalties(text: &str, contact: &ContactInfo) -> BTreeMap<String, f64> {
    let mut penalties = BTreeMap::new();

    if text.chars().count() < SHORT_TEXT_CHARS {
        penalties.insert("short_text".to_string(), PENALTY_SHORT_TEXT);
    }

    if contact.has_no_reachable_channel() {
        penalties.insert("no_contact_info".to_string(), PENALTY_NO_CONTACT);
    }

    let char_count = text.chars().count();
    if char_count > 0 {
        let special = text
            .chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count();
        if special as f64 / char_count as f64 > SPECIAL_CHAR_RATIO {
            penalties.insert("high_special_chars".to_string(), PENALTY_SPECIAL_CHARS);
        }
    }

    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    if words.len() > WORD_DIVERSITY_MIN_WORDS {
        let unique: std::collections::HashSet<&str> =
            words.iter().map(String::as_str).collect();
        if (unique.len() as f64) / (words.len() as f64) < WORD_DIVERSITY_RATIO {
            penalties.insert("low_word_diversity".to_string(), PENALTY_WORD_DIVERSITY);
        }
    }

    penalties
}

fn recommendations(
    text: &str,
    contact: &ContactInfo,
    name: Option<&str>,
    skills: &[String],
    penalties: &BTreeMap<String, f64>,
    metrics: &BTreeMap<String, MetricScore>,
) -> Vec<String> {
    let mut recs = Vec::new();

    if contact.email.is_none() {
        recs.push("No email address found".to_string());
    }
    if contact.phone.is_none() {
        recs.push("No phone number found".to_string());
    }
    if name.is_none() {
        recs.push("Candidate name could not be identified".to_string());
    }
    if skills.len() < 3 {
        recs.push("Few recognizable skills detected".to_string());
    }
    if text.chars().count() < 200 {
        recs.push("Extracted text is very short".to_string());
    }
    if let Some(m) = metrics.get("structure_recognition") {
        if m.details.get("section_header_count") == Some(&json!(0)) {
            recs.push("No recognizable resume sections found".to_string());
        }
    }
    if penalties.contains_key("high_special_chars") {
        recs.push("Text contains a high proportion of non-text characters".to_string());
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email: Option<&str>, phone: Option<&str>) -> ContactInfo {
        ContactInfo {
            email: email.map(String::from),
            phone: phone.map(String::from),
            linkedin_url: None,
            github_url: None,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let w = ConfidenceWeights::default();
        let sum = w.text_quality
            + w.contact_completeness
            + w.personal_info
            + w.professional_content
            + w.structure_recognition
            + w.data_validation;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_text_scores_zero() {
        let breakdown = confidence_breakdown("", &ContactInfo::default(), None, &[]);
        assert_eq!(breakdown.overall_confidence, 0.0);
        assert!(breakdown.penalties.contains_key("short_text"));
        assert!(breakdown.penalties.contains_key("no_contact_info"));
    }

    #[test]
    fn confidence_is_always_clamped() {
        // penalties exceed the weighted sum; the clamp keeps it at 0
        let breakdown = confidence_breakdown("@@@", &ContactInfo::default(), None, &[]);
        assert!(breakdown.overall_confidence >= 0.0);
        assert!(breakdown.overall_confidence <= 1.0);
    }

    #[test]
    fn canonical_sample_scores_above_half() {
        let text = "John Smith\njohn.smith@example.com\n+1-415-555-0100\nSkills: Python, React, AWS\n5 years of experience";
        let c = contact(Some("john.smith@example.com"), Some("+1-415-555-0100"));
        let skills = vec!["Aws".to_string(), "Python".to_string(), "React".to_string()];
        let breakdown = confidence_breakdown(text, &c, Some("John Smith"), &skills);
        assert!(
            breakdown.overall_confidence > 0.5,
            "confidence was {} ({:#?})",
            breakdown.overall_confidence,
            breakdown.penalties
        );
        assert!(breakdown.penalties.is_empty());
    }

    #[test]
    fn garbage_text_is_penalized_below_clean_text() {
        let clean = "Jane Doe is a software engineer with ten years of experience building \
                     distributed systems and leading teams across three companies.";
        let garbage: String = "@#$%^&*()!~".repeat(12);

        let clean_bd = confidence_breakdown(clean, &ContactInfo::default(), Some("Jane Doe"), &[]);
        let garbage_bd = confidence_breakdown(&garbage, &ContactInfo::default(), None, &[]);

        assert!(garbage_bd.penalties.contains_key("high_special_chars"));
        assert!(!clean_bd.penalties.contains_key("high_special_chars"));
        assert!(garbage_bd.overall_confidence < clean_bd.overall_confidence);
    }

    #[test]
    fn low_diversity_text_is_penalized() {
        let text = "skill skill skill skill skill skill skill skill skill skill skill skill";
        let breakdown = confidence_breakdown(text, &ContactInfo::default(), None, &[]);
        assert!(breakdown.penalties.contains_key("low_word_diversity"));
    }

    #[test]
    fn penalties_subtract_after_weighting() {
        let text = "John Smith\njohn.smith@example.com\n+1-415-555-0100\nSkills: Python, React, AWS\n5 years of experience";
        let c = contact(Some("john.smith@example.com"), Some("+1-415-555-0100"));
        let skills = vec!["Aws".to_string(), "Python".to_string(), "React".to_string()];
        let with_contact = confidence_breakdown(text, &c, Some("John Smith"), &skills);

        // Same text scored without any contact info picks up the penalty
        // and loses the contact metric weight.
        let without_contact =
            confidence_breakdown(text, &ContactInfo::default(), Some("John Smith"), &skills);
        assert!(without_contact.penalties.contains_key("no_contact_info"));
        assert!(without_contact.overall_confidence < with_contact.overall_confidence);
    }

    #[test]
    fn breakdown_details_are_populated() {
        let text = "Experience\n• built things in 2020\nEducation\nBachelor of Science, State University";
        let breakdown = confidence_breakdown(text, &ContactInfo::default(), None, &[]);
        let structure = &breakdown.metrics["structure_recognition"];
        assert_eq!(structure.details["bullet_markers"], json!(true));
        assert_eq!(structure.details["degree_keywords"], json!(true));
        assert!(structure.details["section_header_count"].as_u64().unwrap() >= 2);
    }

    #[test]
    fn recommendations_name_missing_signals() {
        let breakdown = confidence_breakdown("short", &ContactInfo::default(), None, &[]);
        assert!(breakdown.recommendations.iter().any(|r| r.contains("email")));
        assert!(breakdown.recommendations.iter().any(|r| r.contains("phone")));
        assert!(breakdown.recommendations.iter().any(|r| r.contains("name")));
        assert!(breakdown.recommendations.iter().any(|r| r.contains("skills")));
    }

    #[test]
    fn metric_scores_stay_capped_on_saturating_input() {
        // Long, well-formed text that trips every tier in every metric.
        let text = format!(
            "John Smith\njohn.smith@example.com\n+1-415-555-0100\n\
             linkedin.com/in/johnsmith\ngithub.com/johnsmith\nSan Francisco, CA\n\n\
             Summary\nSenior staff engineer. Led teams. Designed systems. \
             Delivered projects. Improved everything. Managed releases.\n\n\
             Experience\n• Built platforms from 2015 to 2024\n• Jan 2019 shipped v2\n\n\
             Education\nBachelor of Science, State University\n\n\
             Skills\npython, rust, go, java, react, django, mysql, redis, aws, docker, \
             kubernetes, terraform, pandas, tensorflow\n{}",
            "Additional engineering detail sentence with many distinct words. ".repeat(20)
        );
        let c = ContactInfo {
            email: Some("john.smith@example.com".to_string()),
            phone: Some("+1-415-555-0100".to_string()),
            linkedin_url: Some("https://linkedin.com/in/johnsmith".to_string()),
            github_url: Some("https://github.com/johnsmith".to_string()),
        };
        let skills: Vec<String> = (0..12).map(|i| format!("Skill{i}")).collect();
        let breakdown = confidence_breakdown(&text, &c, Some("John Smith"), &skills);
        for (name, metric) in &breakdown.metrics {
            assert!(metric.score <= 1.0, "{name} exceeded cap: {}", metric.score);
            assert!(metric.score > 0.0, "{name} computed no signal");
        }
        assert!(breakdown.overall_confidence <= 1.0);
    }

    #[test]
    fn strict_email_validation() {
        assert!(STRICT_EMAIL_RE.is_match("a.b@example.co.uk"));
        assert!(!STRICT_EMAIL_RE.is_match("not-an-email"));
        assert!(!STRICT_EMAIL_RE.is_match("a@b"));
    }
}
