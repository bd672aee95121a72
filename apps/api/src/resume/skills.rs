//! Skill Extractor: substring scan of free text against the static taxonomy.

use std::collections::BTreeSet;

use crate::resume::taxonomy::all_skills;

/// Returned when the text mentions no known skill.
pub const DEFAULT_SKILL: &str = "Software Engineer";

/// Extracts display-cased skill names from free text.
///
/// Matching is case-insensitive substring containment; no tokenization, so
/// short terms ("r", "go", "ar") match inside longer words. The result is
/// sorted and never empty.
pub fn extract_skills(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();

    let found: BTreeSet<String> = all_skills()
        .filter(|skill| haystack.contains(skill))
        .map(display_case)
        .collect();

    if found.is_empty() {
        vec![DEFAULT_SKILL.to_string()]
    } else {
        found.into_iter().collect()
    }
}

/// Acronyms that are already upper-case are kept; everything else is title-cased.
pub fn display_case(skill: &str) -> String {
    if is_upper(skill) {
        skill.to_string()
    } else {
        title_case(skill)
    }
}

/// True when the text has at least one cased letter and none are lower-case.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest,
/// so "ci/cd" → "Ci/Cd", "3d modeling" → "3D Modeling", "next.js" → "Next.Js".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_ml_aws_resume() {
        let skills = extract_skills("Experienced Python developer with ML and AWS");
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Ml".to_string()));
        assert!(skills.contains(&"Aws".to_string()));
    }

    #[test]
    fn test_no_match_defaults_to_software_engineer() {
        assert_eq!(extract_skills("").as_slice(), &["Software Engineer".to_string()]);
        assert_eq!(extract_skills("12345 !!!").as_slice(), &["Software Engineer".to_string()]);
    }

    #[test]
    fn test_output_is_never_empty() {
        for text in ["", " ", "\n\n", "zzz", "Python", "ÄÖÜ 😀"] {
            assert!(!extract_skills(text).is_empty(), "empty for {text:?}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = extract_skills("KUBERNETES and TensorFlow");
        assert!(skills.contains(&"Kubernetes".to_string()));
        assert!(skills.contains(&"Tensorflow".to_string()));
    }

    #[test]
    fn test_duplicate_terms_collapse() {
        // "c++" appears in two categories; "git" in two.
        let skills = extract_skills("c++ and git");
        assert_eq!(skills.iter().filter(|s| *s == "C++").count(), 1);
        assert_eq!(skills.iter().filter(|s| *s == "Git").count(), 1);
    }

    #[test]
    fn test_output_is_sorted() {
        let skills = extract_skills("react, docker, python, aws");
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }

    #[test]
    fn test_title_case_handles_separators_and_digits() {
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("3d modeling"), "3D Modeling");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("machine learning"), "Machine Learning");
    }

    #[test]
    fn test_display_case_preserves_acronyms() {
        assert_eq!(display_case("AWS"), "AWS");
        assert_eq!(display_case("aws"), "Aws");
        assert_eq!(display_case("C++"), "C++");
        assert_eq!(display_case("++"), "++");
    }
}
