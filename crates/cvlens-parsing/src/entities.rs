use once_cell::sync::Lazy;
use regex::Regex;

use cvlens_core::ContactInfo;

use crate::config::ParsingConfig;

pub(crate) static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

// Permissive on purpose: acceptance is gated by the digit-count check,
// and strict format validation is a scoring concern.
pub(crate) static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}").unwrap()
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());

static GITHUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());

static EXPERIENCE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?experience").unwrap(),
        Regex::new(r"(?i)experience[:\s]*(\d+)\+?\s*years?").unwrap(),
        Regex::new(r"(?i)(\d+)\+?\s*years?\s*in\s*(?:the\s*)?(?:field|industry)").unwrap(),
    ]
});

/// Words that mark a leading line as a generic document header rather
/// than the candidate name.
static NAME_SKIP_WORDS: &[&str] = &["curriculum", "vitae", "resume", "cv"];

/// Extract contact channels from the full text. First match wins per
/// channel; professional URLs are normalized to `https://`.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    extract_contact_info_with_config(text, &ParsingConfig::default())
}

pub(crate) fn extract_contact_info_with_config(text: &str, config: &ParsingConfig) -> ContactInfo {
    let email_re = config.email_re.as_ref().unwrap_or(&EMAIL_RE);
    let phone_re = config.phone_re.as_ref().unwrap_or(&PHONE_RE);

    let email = email_re.find(text).map(|m| m.as_str().to_string());

    // First match only; kept when enough digits survive stripping.
    let phone = phone_re.find(text).and_then(|m| {
        let digits = m.as_str().chars().filter(|c| c.is_ascii_digit()).count();
        if digits >= config.min_phone_digits {
            Some(m.as_str().to_string())
        } else {
            None
        }
    });

    let linkedin_url = LINKEDIN_RE
        .find(text)
        .map(|m| format!("https://{}", m.as_str()));
    let github_url = GITHUB_RE
        .find(text)
        .map(|m| format!("https://{}", m.as_str()));

    ContactInfo {
        email,
        phone,
        linkedin_url,
        github_url,
    }
}

/// Extract the candidate name from the leading lines of the text.
///
/// Scans the first few non-blank lines, skips generic header lines
/// ("Curriculum Vitae", "Resume"), and accepts the first line of 2-3
/// alphabetic, initially-capitalized words. Absence of a match is not an
/// error.
pub fn extract_name(text: &str) -> Option<String> {
    extract_name_with_config(text, &ParsingConfig::default())
}

pub(crate) fn extract_name_with_config(text: &str, config: &ParsingConfig) -> Option<String> {
    for line in text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(config.name_scan_lines)
    {
        let lower = line.to_lowercase();
        if NAME_SKIP_WORDS.iter().any(|w| lower.contains(w)) {
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if (2..=3).contains(&words.len())
            && words.iter().all(|w| {
                w.chars().all(char::is_alphabetic)
                    && w.chars().next().is_some_and(char::is_uppercase)
            })
        {
            return Some(line.to_string());
        }
    }
    None
}

/// Match the curated skill keyword table against the lowercased text.
/// Matches are title-cased, deduplicated, and sorted for determinism.
pub fn extract_skills(text: &str) -> Vec<String> {
    extract_skills_with_config(text, &ParsingConfig::default())
}

pub(crate) fn extract_skills_with_config(text: &str, config: &ParsingConfig) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<String> = config
        .skill_keywords()
        .iter()
        .filter(|k| k.matcher.is_match(&text_lower))
        .map(|k| crate::keywords::title_case(&k.keyword))
        .collect();
    found.sort();
    found.dedup();
    found
}

/// Extract a years-of-experience figure via the ordered numeric
/// patterns; the first parsed value within range wins.
pub fn extract_experience_years(text: &str) -> Option<u32> {
    extract_experience_years_with_config(text, &ParsingConfig::default())
}

pub(crate) fn extract_experience_years_with_config(
    text: &str,
    config: &ParsingConfig,
) -> Option<u32> {
    for re in EXPERIENCE_RES.iter() {
        for caps in re.captures_iter(text) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                if years <= config.max_experience_years {
                    return Some(years);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_first_match_wins() {
        let contact =
            extract_contact_info("reach me at jane@work.example.com or jane@home.example.org");
        assert_eq!(contact.email.as_deref(), Some("jane@work.example.com"));
    }

    #[test]
    fn phone_requires_enough_digits() {
        let contact = extract_contact_info("call +1-415-555-0100 anytime");
        assert_eq!(contact.phone.as_deref(), Some("+1-415-555-0100"));

        // First candidate match has too few digits and no later match is taken.
        let contact = extract_contact_info("version 42 of the document");
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn urls_are_normalized_to_https() {
        let contact =
            extract_contact_info("profiles: linkedin.com/in/jane-doe and GitHub.com/janedoe");
        assert_eq!(
            contact.linkedin_url.as_deref(),
            Some("https://linkedin.com/in/jane-doe")
        );
        assert_eq!(contact.github_url.as_deref(), Some("https://GitHub.com/janedoe"));
    }

    #[test]
    fn name_from_first_lines() {
        assert_eq!(
            extract_name("John Smith\njohn@example.com").as_deref(),
            Some("John Smith")
        );
        assert_eq!(
            extract_name("Curriculum Vitae\nMaria Garcia Lopez\n").as_deref(),
            Some("Maria Garcia Lopez")
        );
    }

    #[test]
    fn name_rejects_non_name_lines() {
        // lowercase token
        assert_eq!(extract_name("john smith\n"), None);
        // too many words
        assert_eq!(extract_name("John Jacob Jingleheimer Schmidt\n"), None);
        // digits
        assert_eq!(extract_name("John Smith2\n"), None);
    }

    #[test]
    fn name_scan_is_limited_to_leading_lines() {
        let text = "x\nx\nx\nx\nx\nJohn Smith\n";
        assert_eq!(extract_name(text), None);
    }

    #[test]
    fn skills_are_title_cased_and_sorted() {
        let skills = extract_skills("Python and AWS, also react. Some java too.");
        assert_eq!(skills, vec!["Aws", "Java", "Python", "React"]);
    }

    #[test]
    fn skills_require_word_boundaries() {
        let skills = extract_skills("wrote javascript every day");
        assert_eq!(skills, vec!["Javascript"]);
    }

    #[test]
    fn multiword_skills_match() {
        let skills = extract_skills("focus on machine learning and data science");
        assert_eq!(skills, vec!["Data Science", "Machine Learning"]);
    }

    #[test]
    fn experience_years_patterns() {
        assert_eq!(extract_experience_years("5 years of experience"), Some(5));
        assert_eq!(extract_experience_years("10+ years experience"), Some(10));
        assert_eq!(extract_experience_years("Experience: 7 years"), Some(7));
        assert_eq!(extract_experience_years("12 years in the industry"), Some(12));
        assert_eq!(extract_experience_years("no numbers here"), None);
    }

    #[test]
    fn experience_years_range_check() {
        // 99 is out of range; no other candidate exists
        assert_eq!(extract_experience_years("99 years of experience"), None);
        // out-of-range match is skipped in favor of a later valid one
        assert_eq!(
            extract_experience_years("99 years of experience; really 8 years of experience"),
            Some(8)
        );
    }
}
