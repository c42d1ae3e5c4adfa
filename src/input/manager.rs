//! Input manager: gates uploads and loads them as raw documents

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use log::info;
use std::path::Path;
use tokio::fs;

/// Uploaded file content plus the name it was declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn file_type(&self) -> FileType {
        FileType::from_filename(&self.filename)
    }
}

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Reject anything that is not a PDF before it reaches the matcher.
    pub fn check_upload(&self, filename: &str) -> Result<()> {
        match FileType::from_filename(filename) {
            FileType::Pdf => Ok(()),
            FileType::Unknown => Err(ResumeMatcherError::UnsupportedFormat(
                "Only PDF files are supported".to_string(),
            )),
        }
    }

    /// Read an uploaded resume from disk.
    pub async fn load_document(&self, path: &Path) -> Result<RawDocument> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ResumeMatcherError::InvalidInput(format!("Not a file path: {}", path.display()))
            })?
            .to_string();

        self.check_upload(&filename)?;

        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Loading resume: {}", path.display());
        let bytes = fs::read(path).await?;
        Ok(RawDocument::new(filename, bytes))
    }

    /// Read a job description given as a plain text file.
    pub async fn load_job_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading job description: {}", path.display());
        Ok(fs::read_to_string(path).await?)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
