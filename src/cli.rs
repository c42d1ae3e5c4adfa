//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Score how well a resume matches a job description")]
#[command(long_about = "Screen a PDF resume, score its compatibility with a job description using a fitted TF-IDF model, and list matched and missing skills")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    #[command(group(ArgGroup::new("jd").required(true).args(["job", "job_file"])))]
    Match {
        /// Path to resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description text
        #[arg(short, long)]
        job: Option<String>,

        /// Path to a plain text job description
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Directory holding the scoring artifacts
        #[arg(short, long)]
        artifacts: Option<PathBuf>,
    },

    /// Check whether a PDF looks like a resume
    Validate {
        /// Path to resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// List known skills found in a text
    #[command(group(ArgGroup::new("source").required(true).args(["text", "file"])))]
    Skills {
        /// Text to scan
        #[arg(short, long)]
        text: Option<String>,

        /// Text file to scan
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
