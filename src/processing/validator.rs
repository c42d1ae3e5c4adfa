//! Resume screening heuristic

use crate::processing::vocabulary::Vocabulary;
use log::debug;
use std::sync::Arc;

/// Minimum number of characters for a text to count as a resume.
pub const MIN_RESUME_CHARS: usize = 500;

/// Minimum number of distinct indicator words for a text to count as a resume.
pub const MIN_INDICATOR_COUNT: usize = 3;

/// What the screening looked at, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningReport {
    pub character_count: usize,
    pub indicator_count: usize,
    pub is_resume: bool,
}

/// Cheap bulk-plus-vocabulary check that runs before anything is scored.
#[derive(Debug, Clone)]
pub struct ResumeValidator {
    indicators: Arc<Vocabulary>,
}

impl Default for ResumeValidator {
    fn default() -> Self {
        Self::new(Arc::new(Vocabulary::resume_indicators()))
    }
}

impl ResumeValidator {
    pub fn new(indicators: Arc<Vocabulary>) -> Self {
        Self { indicators }
    }

    pub fn screen(&self, text: &str) -> ScreeningReport {
        let lowered = text.to_lowercase();
        let character_count = lowered.chars().count();
        let indicator_count = self.indicators.count_present(&lowered);
        let is_resume = character_count >= MIN_RESUME_CHARS && indicator_count >= MIN_INDICATOR_COUNT;

        debug!(
            "Resume screening: {} chars, {} indicators -> {}",
            character_count, indicator_count, is_resume
        );

        ScreeningReport {
            character_count,
            indicator_count,
            is_resume,
        }
    }

    pub fn is_valid_resume(&self, text: &str) -> bool {
        self.screen(text).is_resume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(text: &str, len: usize) -> String {
        let mut out = text.to_string();
        while out.chars().count() < len {
            out.push('x');
        }
        out
    }

    #[test]
    fn test_short_text_is_never_a_resume() {
        let validator = ResumeValidator::default();
        let text = "education experience skills projects summary github";
        assert!(text.len() < MIN_RESUME_CHARS);
        assert!(!validator.is_valid_resume(text));
    }

    #[test]
    fn test_short_text_without_indicators() {
        let validator = ResumeValidator::default();
        let text = "The quick brown fox jumps over the lazy dog today.";
        assert_eq!(text.len(), 50);

        let report = validator.screen(text);
        assert_eq!(report.indicator_count, 0);
        assert!(!report.is_resume);
    }

    #[test]
    fn test_long_text_with_three_indicators() {
        let validator = ResumeValidator::default();
        let text = padded("Education: BSc. Experience: 3 years. Skills: Python. ", MIN_RESUME_CHARS);

        let report = validator.screen(&text);
        assert_eq!(report.indicator_count, 3);
        assert!(report.is_resume);
    }

    #[test]
    fn test_long_text_with_two_indicators_is_rejected() {
        let validator = ResumeValidator::default();
        let text = padded("Experience and more experience. Skills. ", 2 * MIN_RESUME_CHARS);
        assert!(!validator.is_valid_resume(&text));
    }

    #[test]
    fn test_length_boundary() {
        let validator = ResumeValidator::default();
        let base = "education experience skills ";

        assert!(!validator.is_valid_resume(&padded(base, MIN_RESUME_CHARS - 1)));
        assert!(validator.is_valid_resume(&padded(base, MIN_RESUME_CHARS)));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let validator = ResumeValidator::default();
        let mut text = "education experience skills ".to_string();
        while text.chars().count() < MIN_RESUME_CHARS - 1 {
            text.push('é');
        }
        assert!(text.len() >= MIN_RESUME_CHARS);
        assert!(!validator.is_valid_resume(&text));
    }

    #[test]
    fn test_indicators_match_inside_longer_words() {
        let validator = ResumeValidator::default();
        // "mastery", "emails" and "summary" all count.
        let text = padded("Mastery of emails, a summary. ", MIN_RESUME_CHARS);
        assert_eq!(validator.screen(&text).indicator_count, 3);
    }

    #[test]
    fn test_indicator_matching_ignores_case() {
        let validator = ResumeValidator::default();
        let text = padded("EDUCATION / EXPERIENCE / PROJECTS ", MIN_RESUME_CHARS);
        assert!(validator.is_valid_resume(&text));
    }
}
