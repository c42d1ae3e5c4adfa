//! Output formatters for console and JSON

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::processing::pipeline::{MatchResult, MatchStatus};
use colored::{Color, Colorize};

/// Trait for rendering a match result
pub trait OutputFormatter {
    fn format_result(&self, result: &MatchResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-readable console output
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON output using the public field names
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_skills(&self, label: &str, skills: &[String], color: Color) -> String {
        let listed = if skills.is_empty() {
            "none".to_string()
        } else {
            skills.join(", ")
        };
        format!("{} {}\n", self.colorize(label, color), listed)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &MatchResult) -> Result<String> {
        let report = match &result.report {
            Some(report) if !result.is_invalid => report,
            _ => {
                return Ok(format!(
                    "{}\nThe uploaded file does not look like a resume. Please upload an actual resume.\n",
                    self.colorize("Invalid resume", Color::Red)
                ));
            }
        };

        let status_color = match report.match_status {
            MatchStatus::Matched => Color::Green,
            MatchStatus::NotMatched => Color::Yellow,
        };

        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            self.colorize("Match status:", Color::Cyan),
            self.colorize(&report.match_status.to_string(), status_color)
        ));
        output.push_str(&format!(
            "{} {:.2}\n",
            self.colorize("Compatibility score:", Color::Cyan),
            report.compatibility_score
        ));
        output.push_str(&self.format_skills("Matched skills:", &report.matched_skills, Color::Green));
        output.push_str(&self.format_skills("Missing skills:", &report.missing_skills, Color::Red));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &MatchResult) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Pick the formatter for a format, honouring the output settings.
pub fn formatter_for(format: OutputFormat, config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(config.color_output)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.pretty_json)),
    }
}
