//! Skill keyword extraction and gap detection

use crate::processing::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Skills found in one text, kept in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.skills
    }

    /// Skills in both sets.
    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        self.skills
            .iter()
            .filter(|skill| other.contains(skill))
            .cloned()
            .collect()
    }

    /// Skills in `self` but not in `other`.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        self.skills
            .iter()
            .filter(|skill| !other.contains(skill))
            .cloned()
            .collect()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut skills = Vec::new();
        for skill in iter {
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }
        Self { skills }
    }
}

/// Overlap between what the resume shows and what the job asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGap {
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub matched: SkillSet,
    pub missing: SkillSet,
}

#[derive(Debug, Clone)]
pub struct SkillMatcher {
    vocabulary: Arc<Vocabulary>,
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(Arc::new(Vocabulary::skills()))
    }
}

impl SkillMatcher {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Vocabulary skills occurring anywhere in `text`, case-insensitively.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        self.vocabulary
            .present_in(&lowered)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Matched and missing skills, computed on the raw (unnormalized) texts.
    pub fn compare(&self, resume_text: &str, job_description: &str) -> SkillGap {
        let resume_skills = self.extract_skills(resume_text);
        let job_skills = self.extract_skills(job_description);

        let matched = resume_skills.intersection(&job_skills);
        let missing = job_skills.difference(&resume_skills);

        SkillGap {
            resume_skills,
            job_skills,
            matched,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills() {
        let matcher = SkillMatcher::default();
        let skills = matcher.extract_skills("Built REST APIs with Python, Django and PostgreSQL on AWS.");

        for expected in ["python", "django", "sql", "aws", "api"] {
            assert!(skills.contains(expected), "missing {}", expected);
        }
        assert!(!skills.contains("react"));
    }

    #[test]
    fn test_substring_matching_known_limitation() {
        let matcher = SkillMatcher::default();

        // Only JavaScript is mentioned, yet "java" is reported too.
        let skills = matcher.extract_skills("Frontend work in JavaScript");
        assert!(skills.contains("javascript"));
        assert!(skills.contains("java"));

        // "git" hides inside "digital".
        assert!(matcher.extract_skills("digital marketing").contains("git"));
    }

    #[test]
    fn test_skills_follow_vocabulary_order() {
        let matcher = SkillMatcher::default();
        let skills = matcher.extract_skills("aws then sql then python");
        assert_eq!(skills.into_vec(), vec!["python", "sql", "aws"]);
    }

    #[test]
    fn test_compare_matched_and_missing() {
        let matcher = SkillMatcher::default();
        let gap = matcher.compare(
            "Python, Django, SQL, 3 years experience",
            "python sql aws",
        );

        assert_eq!(gap.matched.clone().into_vec(), vec!["python", "sql"]);
        assert_eq!(gap.missing.clone().into_vec(), vec!["aws"]);
    }

    #[test]
    fn test_identical_texts_miss_nothing() {
        let matcher = SkillMatcher::default();
        let text = "Docker, Kubernetes and teamwork";
        let gap = matcher.compare(text, text);

        assert!(gap.missing.is_empty());
        assert_eq!(gap.matched, gap.job_skills);
    }

    #[test]
    fn test_set_laws_hold() {
        let matcher = SkillMatcher::default();
        let cases = [
            ("python flask html css", "python react css azure"),
            ("", "git docker"),
            ("pandas tensorflow", ""),
            ("communication, problem-solving", "Problem-Solving and Communication, API"),
        ];

        for (resume, job) in cases {
            let gap = matcher.compare(resume, job);

            // matched is exactly the intersection
            for skill in gap.matched.iter() {
                assert!(gap.resume_skills.contains(skill) && gap.job_skills.contains(skill));
            }
            for skill in gap.job_skills.iter() {
                let in_both = gap.resume_skills.contains(skill);
                assert_eq!(gap.matched.contains(skill), in_both);
                assert_eq!(gap.missing.contains(skill), !in_both);
            }

            // matched and missing partition the job skills
            assert_eq!(gap.matched.len() + gap.missing.len(), gap.job_skills.len());
        }
    }
}
