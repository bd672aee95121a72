//! Boundary normalization of the `skills` request field.
//!
//! Clients send either a flat list or a category-keyed mapping (the shape the
//! taxonomy produces). Both collapse into one ordered list before any query is built.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Upper bound on skill terms carried into query building.
pub const MAX_SKILL_TERMS: usize = 10;
/// Terms taken from each category of a mapping.
pub const PER_CATEGORY: usize = 3;
/// Used whenever no usable skill term is available.
pub const GENERIC_SKILL: &str = "software engineer";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Categorized(Map<String, Value>),
    Other(Value),
}

impl Default for SkillsInput {
    fn default() -> Self {
        SkillsInput::List(Vec::new())
    }
}

/// Converts either input shape into at most `MAX_SKILL_TERMS` terms, preserving order.
/// Unrecognized shapes fall back to the generic term.
pub fn normalize_skills(input: &SkillsInput) -> Vec<String> {
    let terms: Vec<String> = match input {
        SkillsInput::List(skills) => skills.iter().map(|s| s.trim().to_string()).collect(),
        SkillsInput::Categorized(categories) => categories
            .values()
            .filter_map(Value::as_array)
            .flat_map(|skills| {
                skills
                    .iter()
                    .take(PER_CATEGORY)
                    .filter_map(Value::as_str)
                    .map(|s| s.trim().to_string())
            })
            .collect(),
        SkillsInput::Other(value) => {
            tracing::warn!("Unexpected skills shape: {value}");
            vec![GENERIC_SKILL.to_string()]
        }
    };

    terms
        .into_iter()
        .filter(|s| !s.is_empty())
        .take(MAX_SKILL_TERMS)
        .collect()
}

/// First `n` terms for a query, or the generic term when there are none.
pub fn top_terms(skills: &[String], n: usize) -> Vec<String> {
    if skills.is_empty() {
        vec![GENERIC_SKILL.to_string()]
    } else {
        skills.iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> SkillsInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flat_list_capped_at_ten() {
        let skills: Vec<String> = (0..15).map(|i| format!("skill{i}")).collect();
        let normalized = normalize_skills(&parse(json!(skills)));
        assert_eq!(normalized.len(), 10);
        assert_eq!(normalized[0], "skill0");
        assert_eq!(normalized[9], "skill9");
    }

    #[test]
    fn test_mapping_takes_three_per_category_in_order() {
        let input = parse(json!({
            "Languages": ["python", "rust", "go", "java"],
            "Cloud": ["aws", "docker"],
            "Data": ["spark", "kafka", "airflow", "dbt"]
        }));
        let normalized = normalize_skills(&input);
        assert_eq!(
            normalized,
            vec!["python", "rust", "go", "aws", "docker", "spark", "kafka", "airflow"]
        );
    }

    #[test]
    fn test_mapping_capped_at_ten_terms() {
        let input = parse(json!({
            "a": ["1", "2", "3"], "b": ["4", "5", "6"],
            "c": ["7", "8", "9"], "d": ["10", "11", "12"]
        }));
        let normalized = normalize_skills(&input);
        assert_eq!(normalized.len(), MAX_SKILL_TERMS);
        assert_eq!(normalized.last().map(String::as_str), Some("10"));
    }

    #[test]
    fn test_mapping_ignores_non_list_values() {
        let input = parse(json!({"Languages": "python", "Cloud": ["aws"]}));
        assert_eq!(normalize_skills(&input), vec!["aws"]);
    }

    #[test]
    fn test_unexpected_shape_falls_back_to_generic() {
        assert_eq!(normalize_skills(&parse(json!(42))), vec![GENERIC_SKILL]);
        assert_eq!(normalize_skills(&parse(json!("python"))), vec![GENERIC_SKILL]);
    }

    #[test]
    fn test_blank_terms_dropped() {
        let normalized = normalize_skills(&parse(json!(["", "  ", "python"])));
        assert_eq!(normalized, vec!["python"]);
    }

    #[test]
    fn test_top_terms_defaults_when_empty() {
        assert_eq!(top_terms(&[], 5), vec![GENERIC_SKILL]);
        let skills = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(top_terms(&skills, 2), vec!["a", "b"]);
    }
}
