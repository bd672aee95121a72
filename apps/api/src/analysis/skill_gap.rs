//! Skill Gap Analyzer: which vocabulary skills a job description asks for
//! that the candidate's skill list does not cover.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::resume::skills::title_case;

/// Cap on reported missing skills.
pub const MAX_MISSING: usize = 10;

/// Skills looked for in job descriptions. Lowercase; matched as substrings.
const GAP_VOCABULARY: &[&str] = &[
    "python", "java", "c++", "javascript", "typescript", "go", "rust", "c#", "php", "ruby",
    "sql", "nosql", "mongodb", "postgresql", "mysql", "redis", "cassandra", "dynamodb",
    "ai", "ml", "machine learning", "deep learning", "nlp", "computer vision",
    "pytorch", "tensorflow", "keras", "scikit-learn", "neural networks",
    "aws", "gcp", "azure", "docker", "kubernetes", "jenkins", "terraform", "ansible",
    "react", "angular", "vue", "node", "express", "django", "flask", "spring", "fastapi",
    "git", "ci/cd", "agile", "scrum", "devops", "tdd", "rest api", "graphql", "microservices",
    "spark", "hadoop", "kafka", "elasticsearch", "etl", "data engineering",
    "data analysis", "statistics", "data visualization", "tableau", "power bi", "big data",
    "unity", "game development", "mobile development", "swift", "kotlin", "react native",
    "html", "css", "web development", "frontend", "backend", "full stack",
    "data science", "unreal engine", "augmented reality", "virtual reality",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub missing_skills: Vec<String>,
    /// The candidate's skills, echoed unchanged.
    pub matched_skills: Vec<String>,
}

/// Compares candidate skills with the vocabulary terms found in a job description.
/// Comparison is case-insensitive; missing skills are title-cased and sorted.
pub fn analyze_skill_gap(candidate_skills: &[String], job_description: &str) -> SkillGapReport {
    let jd = job_description.to_lowercase();
    let have: HashSet<String> = candidate_skills
        .iter()
        .map(|s| title_case(&s.to_lowercase()))
        .collect();

    let required: BTreeSet<String> = GAP_VOCABULARY
        .iter()
        .filter(|skill| jd.contains(*skill))
        .map(|skill| title_case(skill))
        .collect();

    let missing_skills = required
        .into_iter()
        .filter(|skill| !have.contains(skill))
        .take(MAX_MISSING)
        .collect();

    SkillGapReport {
        missing_skills,
        matched_skills: candidate_skills.to_vec(),
    }
}
