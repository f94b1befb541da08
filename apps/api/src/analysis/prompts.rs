// Prompt template for résumé analysis.
// Placeholders are substituted by `request::build_analysis_prompt`.

/// Résumé analysis prompt template.
/// Replace: {job_title}, {resume_text}, {technical_skills}, {soft_skills}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for a {job_title} position. Provide a detailed analysis in the following JSON format:

{
    "ats_score": float,  # Score between 0-100, based on keyword matching, formatting, and content relevance
    "missing_technical_skills": [string],  # List of missing technical skills
    "missing_soft_skills": [string],  # List of missing soft skills
    "formatting_issues": [string],  # List of formatting issues
    "content_structure": [string],  # List of content structure observations
    "experience_analysis": [string],  # List of experience-related observations
    "education_analysis": [string],  # List of education-related observations
    "skills_analysis": [string],  # List of skills-related observations
    "suggestions": [string]  # List of improvement suggestions
}

Focus on:
1. ATS compatibility and keyword optimization
2. Technical and soft skills alignment with the role
3. Experience relevance and impact
4. Education and certifications
5. Overall structure and formatting
6. Specific, actionable improvement suggestions

Resume:
{resume_text}

Important keywords for this role:
Technical Skills: {technical_skills}
Soft Skills: {soft_skills}

IMPORTANT: Respond ONLY with the JSON object, no additional text or explanation."#;
