//! Analysis flow: extracted text + role → prompt → generation service → parsed record.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analysis::request::build_analysis_prompt;
use crate::analysis::response::parse_analysis_response;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::roles::RoleCatalog;

/// Runs one analysis: a single call to the generation service, no retries.
///
/// Returns the parsed record as-is; callers build the render view from it.
pub async fn analyze_resume(
    generator: &dyn TextGenerator,
    catalog: &RoleCatalog,
    resume_text: &str,
    job_title: &str,
) -> Result<Value, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }
    if !catalog.contains(job_title) {
        warn!("Role '{job_title}' is not in the catalog; prompting without role keywords");
    }

    let prompt = build_analysis_prompt(resume_text, job_title, catalog.profile(job_title));
    info!(
        "Requesting analysis: role='{}', resume_chars={}, prompt_chars={}",
        job_title,
        resume_text.chars().count(),
        prompt.len()
    );

    let reply = generator.generate(&prompt).await?;
    debug!("Generation service replied with {} bytes", reply.len());

    Ok(parse_analysis_response(&reply)?)
}
