//! Axum route handlers for the review flow.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, UploadRejection};
use crate::evaluation::encoder::EncodedDocument;
use crate::evaluation::export::ReportDownload;
use crate::evaluation::filter::StatusFilter;
use crate::evaluation::models::EvaluationResult;
use crate::screens::{self, input, layout};
use crate::session::controller::{AppStep, Controller};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScreenQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub session_id: Uuid,
    pub step: &'static str,
    pub candidate_name: Option<String>,
    pub file_name: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub result: Option<EvaluationResult>,
}

struct UploadedFile {
    file_name: String,
    media_type: String,
    bytes: Bytes,
}

struct Upload {
    name: String,
    file: Option<UploadedFile>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn session_path(id: Uuid) -> String {
    format!("/evaluations/{id}")
}

async fn find_session(state: &AppState, id: Uuid) -> Result<Arc<Controller>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut upload = Upload {
        name: String::new(),
        file: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => {
                upload.name = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed name field: {e}")))?;
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let media_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed file field: {e}")))?;
                // Browsers send an empty, nameless part when no file was chosen.
                if !file_name.is_empty() || !bytes.is_empty() {
                    upload.file = Some(UploadedFile {
                        file_name,
                        media_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(upload)
}

/// Applies the Input screen rules: PDF/DOCX only, name and file both present.
fn prepare(upload: Upload, action: &str) -> Result<(String, EncodedDocument), AppError> {
    let Upload { name, file } = upload;
    let reject = |reason| AppError::UploadRejected {
        reason,
        action: action.to_string(),
        name: name.clone(),
    };

    let Some(file) = file else {
        return Err(reject(UploadRejection::Incomplete));
    };
    let document = EncodedDocument::encode(&file.file_name, &file.media_type, &file.bytes)
        .map_err(|e| reject(UploadRejection::from_encode_error(&e)))?;
    if !input::submission_enabled(&name, true) {
        return Err(reject(UploadRejection::Incomplete));
    }

    Ok((name.trim().to_string(), document))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_input_screen() -> Html<String> {
    let body = input::render(&input::InputView {
        action: "/evaluations",
        name: "",
        alert: None,
    });
    Html(layout::page(&body, None, None))
}

/// POST /evaluations
///
/// Validates the upload first, so a rejected file never creates a session.
pub async fn handle_create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let upload = read_upload(multipart).await?;
    let (name, document) = prepare(upload, "/evaluations")?;

    let session = state.sessions.create().await;
    session.submit(name, document).await?;

    Ok(Redirect::to(&session_path(session.id())))
}

/// POST /evaluations/:id/submit
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let session = find_session(&state, id).await?;
    let upload = read_upload(multipart).await?;
    let action = format!("{}/submit", session_path(id));
    let (name, document) = prepare(upload, &action)?;

    session.submit(name, document).await?;

    Ok(Redirect::to(&session_path(id)))
}

/// GET /evaluations/:id
///
/// Renders whichever screen the session's step gates.
pub async fn handle_show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ScreenQuery>,
) -> Result<Html<String>, AppError> {
    let filter = StatusFilter::parse(query.status.as_deref()).ok_or_else(|| {
        AppError::Validation(format!(
            "Unknown status filter '{}'",
            query.status.unwrap_or_default()
        ))
    })?;
    let session = find_session(&state, id).await?;
    let step = session.snapshot().await;

    Ok(Html(screens::render_step(&step, &session_path(id), filter)))
}

/// POST /evaluations/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    let session = find_session(&state, id).await?;
    session.reset().await;
    Ok(Redirect::to(&session_path(id)))
}

/// GET /evaluations/:id/report
pub async fn handle_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ReportDownload, AppError> {
    let session = find_session(&state, id).await?;
    match session.snapshot().await {
        AppStep::Succeeded { result, .. } => Ok(ReportDownload::new(
            &result.meta.file_name,
            &result.report_txt,
        )),
        other => Err(AppError::Conflict(format!(
            "No report while the session is in the '{}' step",
            other.name()
        ))),
    }
}

/// GET /evaluations/:id/state
pub async fn handle_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let step = session.snapshot().await;

    let mut response = StepResponse {
        session_id: id,
        step: step.name(),
        candidate_name: None,
        file_name: None,
        started_at: None,
        completed_at: None,
        message: None,
        result: None,
    };
    match step {
        AppStep::Idle => {}
        AppStep::Analyzing {
            candidate_name,
            file_name,
            started_at,
        } => {
            response.candidate_name = Some(candidate_name);
            response.file_name = Some(file_name);
            response.started_at = Some(started_at);
        }
        AppStep::Succeeded {
            result,
            completed_at,
        } => {
            response.completed_at = Some(completed_at);
            response.result = Some(EvaluationResult::clone(&result));
        }
        AppStep::Failed { message } => response.message = Some(message),
    }

    Ok(Json(response))
}
