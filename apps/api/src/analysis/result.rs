use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Render view of a parsed analysis record.
///
/// Built by the consumer from the raw JSON value: missing or mistyped fields
/// fall back to a zero score or an empty list, and the score is clamped to 0–100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ats_score: f64,
    pub missing_technical_skills: Vec<String>,
    pub missing_soft_skills: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub content_structure: Vec<String>,
    pub experience_analysis: Vec<String>,
    pub education_analysis: Vec<String>,
    pub skills_analysis: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn from_value(value: &Value) -> Self {
        Self {
            ats_score: score(value.get("ats_score")),
            missing_technical_skills: string_list(value, "missing_technical_skills"),
            missing_soft_skills: string_list(value, "missing_soft_skills"),
            formatting_issues: string_list(value, "formatting_issues"),
            content_structure: string_list(value, "content_structure"),
            experience_analysis: string_list(value, "experience_analysis"),
            education_analysis: string_list(value, "education_analysis"),
            skills_analysis: string_list(value, "skills_analysis"),
            suggestions: string_list(value, "suggestions"),
        }
    }
}

fn score(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        // Models occasionally quote the number
        Some(Value::String(s)) => s.trim().trim_end_matches("/100").trim().parse().ok(),
        _ => None,
    };
    raw.filter(|s: &f64| s.is_finite())
        .map(|s| s.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

fn string_list(value: &Value, field: &str) -> Vec<String> {
    value
        .get(field)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_maps_every_field() {
        let value = json!({
            "ats_score": 80.0,
            "missing_technical_skills": ["System Design"],
            "missing_soft_skills": ["Leadership"],
            "formatting_issues": ["Inconsistent dates"],
            "content_structure": ["Summary is long"],
            "experience_analysis": ["Strong backend work"],
            "education_analysis": ["BSc listed"],
            "skills_analysis": ["Cloud skills present"],
            "suggestions": ["Add quantifiable achievements"]
        });
        let result = AnalysisResult::from_value(&value);
        assert_eq!(result.ats_score, 80.0);
        assert_eq!(result.missing_technical_skills, vec!["System Design"]);
        assert_eq!(result.education_analysis, vec!["BSc listed"]);
        assert_eq!(result.suggestions, vec!["Add quantifiable achievements"]);
    }

    #[test]
    fn test_missing_fields_default_at_render_time() {
        let result = AnalysisResult::from_value(&json!({"suggestions": ["Tighten summary"]}));
        assert_eq!(result.ats_score, 0.0);
        assert!(result.missing_technical_skills.is_empty());
        assert_eq!(result.suggestions, vec!["Tighten summary"]);
    }

    #[test]
    fn test_score_is_clamped_and_quoted_scores_are_read() {
        assert_eq!(AnalysisResult::from_value(&json!({"ats_score": 130})).ats_score, 100.0);
        assert_eq!(AnalysisResult::from_value(&json!({"ats_score": -4})).ats_score, 0.0);
        assert_eq!(AnalysisResult::from_value(&json!({"ats_score": "72"})).ats_score, 72.0);
        assert_eq!(AnalysisResult::from_value(&json!({"ats_score": "65/100"})).ats_score, 65.0);
        assert_eq!(AnalysisResult::from_value(&json!({"ats_score": "high"})).ats_score, 0.0);
    }

    #[test]
    fn test_mistyped_lists_are_tolerated() {
        let value = json!({
            "formatting_issues": "not a list",
            "suggestions": ["Use bullets", null, 3]
        });
        let result = AnalysisResult::from_value(&value);
        assert!(result.formatting_issues.is_empty());
        assert_eq!(result.suggestions, vec!["Use bullets", "3"]);
    }
}
