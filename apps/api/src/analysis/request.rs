//! Analysis Request Builder — renders the prompt sent to the generation service.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::analysis::prompts::ANALYSIS_PROMPT_TEMPLATE;
use crate::roles::RoleProfile;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(job_title|technical_skills|soft_skills|resume_text)\}")
        .expect("placeholder pattern is valid")
});

/// Builds the analysis prompt for one résumé and target role.
///
/// Placeholders are filled in a single pass over the template, so
/// placeholder-like text in the role name or the résumé is never expanded.
pub fn build_analysis_prompt(resume_text: &str, job_title: &str, profile: &RoleProfile) -> String {
    let technical_skills = profile.technical_skills.join(", ");
    let soft_skills = profile.soft_skills.join(", ");

    PLACEHOLDER
        .replace_all(ANALYSIS_PROMPT_TEMPLATE, |caps: &Captures| {
            let value = match &caps[1] {
                "job_title" => job_title,
                "technical_skills" => technical_skills.as_str(),
                "soft_skills" => soft_skills.as_str(),
                _ => resume_text,
            };
            value.to_string()
        })
        .into_owned()
}
