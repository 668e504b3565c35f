use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod output;

use output::ColorMode;

/// Resume parser - extract structured candidate profiles from documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a PDF, DOCX, or plain-text resume into a structured profile
    Parse {
        /// Path to the resume file
        file_path: PathBuf,

        /// Emit the full profile as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Show the per-metric confidence breakdown
        #[arg(long)]
        breakdown: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            file_path,
            json,
            breakdown,
            no_color,
        } => parse(file_path, json, breakdown, no_color),
    }
}

fn parse(file_path: PathBuf, json: bool, breakdown: bool, no_color: bool) -> anyhow::Result<()> {
    let profile = cvlens_ingest::parse_resume_file(&file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &profile)?;
        writeln!(out)?;
        return Ok(());
    }

    let color = ColorMode(!no_color);
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("input");

    output::print_profile(&mut out, file_name, &profile, color)?;
    if breakdown {
        output::print_breakdown(&mut out, &profile, color)?;
    }

    // Unreadable input is reported in-band but still fails the command.
    if profile.error.is_some() {
        std::process::exit(1);
    }
    Ok(())
}
