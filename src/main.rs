//! Resume matcher: resume to job description compatibility scoring

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::input::{InputManager, PdfExtractor, TextExtractor};
use resume_matcher::output::formatter_for;
use resume_matcher::processing::skill_matcher::SkillMatcher;
use resume_matcher::processing::validator::ResumeValidator;
use resume_matcher::processing::vocabulary::Vocabulary;
use resume_matcher::{CompatibilityScorer, Config, MatchPipeline, ResumeMatcherError};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli.command, cli.config).await {
        match e.downcast_ref::<ResumeMatcherError>() {
            Some(matcher_error) if matcher_error.is_fatal() => {
                error!("Startup failed: {:#}", e);
                eprintln!("{}", matcher_error);
                process::exit(2);
            }
            Some(matcher_error) => {
                error!("Request failed: {:#}", e);
                eprintln!("{}", matcher_error.public_message());
            }
            None => error!("Command failed: {:#}", e),
        }
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> resume_matcher::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    // Built once and shared by everything that matches text.
    let skills = Arc::new(Vocabulary::skills());
    let indicators = Arc::new(Vocabulary::resume_indicators());

    match command {
        Commands::Match {
            resume,
            job,
            job_file,
            output,
            artifacts,
        } => {
            let config = load_config(config_path.as_deref())?;
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format)
                    .map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let config = match artifacts {
                Some(dir) => config.with_artifacts_dir(dir),
                None => config,
            };

            // Artifacts must load before any request is looked at.
            let scorer = CompatibilityScorer::load(&config.vectorizer_path(), &config.regressor_path())
                .context("Scoring artifacts are unavailable")?;
            let pipeline = MatchPipeline::new(Arc::new(scorer)).with_vocabularies(skills, indicators);

            let input_manager = InputManager::new();
            let document = input_manager.load_document(&resume).await?;
            let job_description = match (job, job_file) {
                (Some(text), _) => text,
                (None, Some(path)) => input_manager.load_job_description(&path).await?,
                (None, None) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "A job description is required".to_string(),
                    )
                    .into())
                }
            };

            info!("Matching {} against job description", resume.display());
            let result = pipeline.run(document, &job_description).await?;

            let formatter = formatter_for(output_format, &config.output);
            println!("{}", formatter.format_result(&result)?);
        }

        Commands::Validate { resume } => {
            let document = InputManager::new().load_document(&resume).await?;
            let text = tokio::task::spawn_blocking(move || PdfExtractor.extract(&document.bytes))
                .await
                .context("Extraction task failed")??;

            let report = ResumeValidator::new(indicators).screen(&text);
            println!("Characters: {}", report.character_count);
            println!("Resume indicators: {}", report.indicator_count);
            if report.is_resume {
                println!("Looks like a resume");
            } else {
                println!("Does not look like a resume");
            }
        }

        Commands::Skills { text, file } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => InputManager::new().load_job_description(&path).await?,
                (None, None) => {
                    return Err(ResumeMatcherError::InvalidInput("No text given".to_string()).into())
                }
            };

            let found = SkillMatcher::new(skills).extract_skills(&text);
            if found.is_empty() {
                println!("No known skills found");
            } else {
                for skill in found.iter() {
                    println!("  • {}", skill);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.clone().unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let config = load_config(config_path.as_deref())?;
                    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
                    println!("{}", rendered);
                }
                ConfigAction::Path => {
                    println!("{}", path.display());
                }
                ConfigAction::Reset => {
                    Config::reset_at(&path)?;
                    println!("Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
