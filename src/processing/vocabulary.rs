//! Fixed keyword vocabularies and substring presence detection

use crate::error::{Result, ResumeMatcherError};
use aho_corasick::AhoCorasick;

/// Skill keywords recognised in resumes and job descriptions, in reporting order.
pub const DEFAULT_SKILL_KEYWORDS: &[&str] = &[
    "python", "django", "flask", "html", "css", "javascript", "react",
    "sql", "git", "docker", "kubernetes", "java", "tensorflow", "pandas",
    "communication", "teamwork", "problem-solving", "aws", "azure", "api",
];

/// Words whose presence suggests that a text is a resume.
pub const RESUME_INDICATORS: &[&str] = &[
    "education", "experience", "skills", "projects", "summary",
    "certifications", "contact", "linkedin", "github", "bachelor", "master", "email",
];

/// An ordered, immutable set of lower-case keywords.
///
/// Presence is plain substring containment: `"java"` is found inside
/// `"javascript"` and `"git"` inside `"digital"`. Each keyword is reported at
/// most once however often it occurs.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: Vec<String>,
    automaton: AhoCorasick,
}

impl Vocabulary {
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            if !ordered.contains(&keyword) {
                ordered.push(keyword);
            }
        }

        let automaton = AhoCorasick::new(&ordered)
            .map_err(|e| ResumeMatcherError::InvalidInput(format!("Invalid vocabulary: {}", e)))?;

        Ok(Self {
            keywords: ordered,
            automaton,
        })
    }

    pub fn skills() -> Self {
        Self::new(DEFAULT_SKILL_KEYWORDS).expect("built-in skill vocabulary is valid")
    }

    pub fn resume_indicators() -> Self {
        Self::new(RESUME_INDICATORS).expect("built-in indicator vocabulary is valid")
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Per-keyword presence flags for an already lower-cased text.
    pub fn presence(&self, lowered: &str) -> Vec<bool> {
        let mut present = vec![false; self.keywords.len()];
        for found in self.automaton.find_overlapping_iter(lowered) {
            present[found.pattern().as_usize()] = true;
        }
        present
    }

    /// Keywords present in an already lower-cased text, in vocabulary order.
    pub fn present_in(&self, lowered: &str) -> Vec<&str> {
        self.presence(lowered)
            .into_iter()
            .zip(&self.keywords)
            .filter_map(|(present, keyword)| present.then_some(keyword.as_str()))
            .collect()
    }

    /// Number of distinct keywords present in an already lower-cased text.
    pub fn count_present(&self, lowered: &str) -> usize {
        self.presence(lowered).into_iter().filter(|present| *present).count()
    }
}
