use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod engine;

// Re-export for convenience
pub use engine::{DocumentFormat, EngineError, TextEngine};

/// Contact channels extracted from resume text.
///
/// Each channel holds the first (highest-priority) match found in the
/// full text, or `None` if no pattern matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

impl ContactInfo {
    /// True if neither an email address nor a phone number was found.
    pub fn has_no_reachable_channel(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

/// One education entry. Sub-fields other than `institution` are left
/// empty by the line-oriented parser ("extracted but unknown").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// One work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// One certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// One language entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub proficiency: String,
}

/// A single confidence metric: raw score, fixed weight, weighted
/// contribution, and the counts that went into the computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricScore {
    /// Raw score in [0, 1].
    pub score: f64,
    /// Fixed weight; all metric weights sum to 1.0.
    pub weight: f64,
    /// `score * weight`.
    pub weighted: f64,
    /// Diagnostic details (counts, ratios, presence flags).
    pub details: BTreeMap<String, serde_json::Value>,
}

/// Human-readable confidence tier for an overall confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            Self::Excellent
        } else if confidence >= 0.6 {
            Self::Good
        } else if confidence >= 0.4 {
            Self::Fair
        } else if confidence >= 0.2 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auditable breakdown of an extraction confidence score.
///
/// `overall_confidence` is the weighted metric sum minus the named
/// penalties, clamped to [0, 1]. Metrics and penalties are kept separate
/// so that "low scores across the board" and "a specific red flag" stay
/// distinguishable in diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub metrics: BTreeMap<String, MetricScore>,
    pub penalties: BTreeMap<String, f64>,
    pub recommendations: Vec<String>,
    pub overall_confidence: f64,
}

impl ConfidenceBreakdown {
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.overall_confidence)
    }

    /// Names of the strongest extraction areas: metrics scoring >= 0.7,
    /// formatted as "Text Quality (84%)", at most five.
    pub fn strengths(&self) -> Vec<String> {
        let mut strengths: Vec<(f64, String)> = self
            .metrics
            .iter()
            .filter(|(_, m)| m.score >= 0.7)
            .map(|(name, m)| {
                let title = name
                    .split('_')
                    .map(|w| {
                        let mut chars = w.chars();
                        match chars.next() {
                            Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                            None => String::new(),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                (m.score, format!("{} ({:.0}%)", title, m.score * 100.0))
            })
            .collect();
        strengths.sort_by(|a, b| b.0.total_cmp(&a.0));
        strengths.into_iter().take(5).map(|(_, s)| s).collect()
    }
}

/// The terminal aggregate of the extraction pipeline; the only object
/// exposed to callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub extracted_text: String,
    /// Set when no text could be extracted from the document; the
    /// pipeline degrades rather than erroring, so this is the explicit
    /// failure indicator.
    pub error: Option<String>,
    pub confidence: f64,
    pub breakdown: ConfidenceBreakdown,
    pub full_name: Option<String>,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
}
