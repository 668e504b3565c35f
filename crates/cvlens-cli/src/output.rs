use std::io::Write;

use cvlens_core::{ConfidenceLevel, ResumeProfile};
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the parsed profile in human-readable form.
pub fn print_profile(
    w: &mut dyn Write,
    file_name: &str,
    profile: &ResumeProfile,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w, "Parsed {}", file_name)?;
    writeln!(w)?;

    if let Some(error) = &profile.error {
        if color.enabled() {
            writeln!(w, "{} {}", "ERROR:".red(), error)?;
        } else {
            writeln!(w, "ERROR: {}", error)?;
        }
        return Ok(());
    }

    let level = profile.breakdown.level();
    let confidence_line = format!(
        "Confidence: {:.1}% ({})",
        profile.confidence * 100.0,
        level
    );
    if color.enabled() {
        match level {
            ConfidenceLevel::Excellent | ConfidenceLevel::Good => {
                writeln!(w, "{}", confidence_line.green())?
            }
            ConfidenceLevel::Fair => writeln!(w, "{}", confidence_line.yellow())?,
            ConfidenceLevel::Poor | ConfidenceLevel::VeryPoor => {
                writeln!(w, "{}", confidence_line.red())?
            }
        }
    } else {
        writeln!(w, "{}", confidence_line)?;
    }
    writeln!(w)?;

    writeln!(w, "Name:  {}", profile.full_name.as_deref().unwrap_or("-"))?;
    writeln!(w, "Email: {}", profile.contact.email.as_deref().unwrap_or("-"))?;
    writeln!(w, "Phone: {}", profile.contact.phone.as_deref().unwrap_or("-"))?;
    if let Some(url) = &profile.contact.linkedin_url {
        writeln!(w, "LinkedIn: {}", url)?;
    }
    if let Some(url) = &profile.contact.github_url {
        writeln!(w, "GitHub: {}", url)?;
    }
    if let Some(years) = profile.experience_years {
        writeln!(w, "Experience: {} years", years)?;
    }

    if !profile.skills.is_empty() {
        writeln!(w)?;
        writeln!(w, "Skills ({}): {}", profile.skills.len(), profile.skills.join(", "))?;
    }

    if !profile.summary.is_empty() {
        writeln!(w)?;
        writeln!(w, "Summary:")?;
        writeln!(w, "{}", profile.summary)?;
    }

    if !profile.work_experience.is_empty() {
        writeln!(w)?;
        writeln!(w, "Work experience:")?;
        for entry in &profile.work_experience {
            if entry.company.is_empty() {
                writeln!(w, "  - {}", entry.position)?;
            } else {
                writeln!(w, "  - {} at {}", entry.position, entry.company)?;
            }
        }
    }

    if !profile.education.is_empty() {
        writeln!(w)?;
        writeln!(w, "Education:")?;
        for entry in &profile.education {
            writeln!(w, "  - {}", entry.institution)?;
        }
    }

    if !profile.certifications.is_empty() {
        writeln!(w)?;
        writeln!(w, "Certifications:")?;
        for entry in &profile.certifications {
            writeln!(w, "  - {}", entry.name)?;
        }
    }

    if !profile.languages.is_empty() {
        writeln!(w)?;
        writeln!(w, "Languages:")?;
        for entry in &profile.languages {
            if entry.proficiency.is_empty() {
                writeln!(w, "  - {}", entry.language)?;
            } else {
                writeln!(w, "  - {} ({})", entry.language, entry.proficiency)?;
            }
        }
    }

    Ok(())
}

/// Print the per-metric confidence breakdown.
pub fn print_breakdown(
    w: &mut dyn Write,
    profile: &ResumeProfile,
    color: ColorMode,
) -> std::io::Result<()> {
    let breakdown = &profile.breakdown;

    writeln!(w)?;
    writeln!(w, "Confidence breakdown:")?;
    for (name, metric) in &breakdown.metrics {
        writeln!(
            w,
            "  {:<24} {:>5.2} x {:.2} = {:.3}",
            name, metric.score, metric.weight, metric.weighted
        )?;
    }

    if !breakdown.penalties.is_empty() {
        writeln!(w)?;
        writeln!(w, "Penalties:")?;
        for (name, amount) in &breakdown.penalties {
            if color.enabled() {
                writeln!(w, "  {:<24} {}", name, format!("-{:.2}", amount).red())?;
            } else {
                writeln!(w, "  {:<24} -{:.2}", name, amount)?;
            }
        }
    }

    let strengths = breakdown.strengths();
    if !strengths.is_empty() {
        writeln!(w)?;
        writeln!(w, "Strengths: {}", strengths.join(", "))?;
    }

    if !breakdown.recommendations.is_empty() {
        writeln!(w)?;
        writeln!(w, "Recommendations:")?;
        for rec in &breakdown.recommendations {
            if color.enabled() {
                writeln!(w, "  {} {}", "!".yellow(), rec)?;
            } else {
                writeln!(w, "  ! {}", rec)?;
            }
        }
    }

    Ok(())
}
