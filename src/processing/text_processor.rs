//! Text normalization

use regex::Regex;

/// Strips URLs and collapses whitespace and case so matching downstream is
/// consistent.
pub struct TextNormalizer {
    url_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let url_regex = Regex::new(r"(?i)http\S+").expect("Invalid URL regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            url_regex,
            whitespace_regex,
        }
    }

    /// Normalize text for vectorization.
    ///
    /// URLs are removed before whitespace is collapsed, and removal leaves no
    /// space behind, so `"ahttp://x b"` becomes `"a b"` but `"x http://y z"`
    /// becomes `"x z"`. The order of the two steps matters.
    ///
    /// The URL pattern ignores case; otherwise `HTTP://X` would survive the
    /// first pass and be removed by the second once lower-cased.
    pub fn normalize(&self, text: &str) -> String {
        let without_urls = self.url_regex.replace_all(text, "");
        let collapsed = self.whitespace_regex.replace_all(&without_urls, " ");
        collapsed.trim().to_lowercase()
    }
}

/// Concatenate resume and job description with one space, then normalize once.
pub fn combine_for_scoring(normalizer: &TextNormalizer, resume_text: &str, job_description: &str) -> String {
    let combined = format!("{} {}", resume_text, job_description);
    normalizer.normalize(&combined)
}
