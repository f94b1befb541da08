//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::analysis::report::{build_report, report_file_name};
use crate::analysis::result::AnalysisResult;
use crate::analysis::service::analyze_resume;
use crate::errors::AppError;
use crate::extraction::{extract_text, resolve_type_tag};
use crate::roles::normalize_role;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub role: String,
    pub role_key: String,
    /// Render view with defaults applied.
    pub analysis: AnalysisResult,
    /// The record exactly as parsed from the service reply.
    pub raw: Value,
    pub report_file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub role: String,
    /// Either the raw record or the render view; both are read leniently.
    pub analysis: Value,
}

/// The parts of an analysis upload.
struct ResumeUpload {
    data: Bytes,
    content_type: Option<String>,
    file_name: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form with a `file` part (PDF or DOCX) and a `role` part (display name).
/// Extracts the résumé text, calls the generation service once, and returns the
/// parsed analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload_limit = state.config.max_upload_bytes;
    let (upload, role) = read_analyze_form(multipart, upload_limit).await?;
    let analysis_id = Uuid::new_v4();

    let type_tag = resolve_type_tag(upload.content_type.as_deref(), upload.file_name.as_deref());
    info!(
        %analysis_id,
        "Received resume upload: type='{}', bytes={}",
        type_tag,
        upload.data.len()
    );

    let data = upload.data;
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&data, &type_tag))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let raw = analyze_resume(state.llm.as_ref(), &state.roles, &resume_text, &role).await?;
    info!(%analysis_id, "Analysis complete");

    Ok(Json(AnalyzeResponse {
        analysis_id,
        role_key: normalize_role(&role),
        analysis: AnalysisResult::from_value(&raw),
        raw,
        role,
        report_file_name: report_file_name(Local::now().naive_local()),
    }))
}

/// POST /api/v1/report
///
/// Renders the downloadable plain-text report for an analysis the client already holds.
pub async fn handle_report(
    Json(request): Json<ReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    if !request.analysis.is_object() {
        return Err(AppError::Validation(
            "analysis must be a JSON object".to_string(),
        ));
    }

    let analysis = AnalysisResult::from_value(&request.analysis);
    let body = build_report(request.role.trim(), &analysis);
    let file_name = report_file_name(Local::now().naive_local());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}

async fn read_analyze_form(
    mut multipart: Multipart,
    upload_limit: usize,
) -> Result<(ResumeUpload, String), AppError> {
    let form_error = |e: MultipartError| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge {
            limit: upload_limit,
        },
        _ => AppError::Validation(e.body_text()),
    };

    let mut upload = None;
    let mut role = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(form_error)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(form_error)?;
                upload = Some(ResumeUpload {
                    data,
                    content_type,
                    file_name,
                });
            }
            "role" => {
                let text = field
                    .text()
                    .await
                    .map_err(form_error)?;
                role = Some(text.trim().to_string());
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let role = role
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("role is required".to_string()))?;

    Ok((upload, role))
}
