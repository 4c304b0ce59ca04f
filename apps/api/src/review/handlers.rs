//! Axum route handlers for the resume review API.
//!
//! Each handler is a single linear pass: validate → (fetch/parse) → prompt →
//! complete → respond. Any failure ends the request; nothing partial is returned.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::document::extract_file_id;
use crate::errors::AppError;
use crate::models::UserInfo;
use crate::review::prompts::{
    build_achievements_prompt, build_analysis_prompt, build_improvement_prompt,
};
use crate::state::AppState;

pub const INVALID_LINK: &str = "Invalid Google Drive link";
pub const MISSING_RESUME_TEXT: &str = "Resume text is required.";
pub const MISSING_IMPROVE_INPUT: &str = "Missing userInfo or pdfText";
pub const IMPROVE_FAILED: &str = "Failed to improve resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub drive_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub ats_analysis: String,
    pub pdf_text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestAchievementsRequest {
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestAchievementsResponse {
    pub suggested_achievements: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    pub user_info: Option<Map<String, Value>>,
    pub pdf_text: Option<String>,
    /// Any JSON is accepted; only a string value is used.
    pub user_accepted_achievements: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved: String,
}

/// A body that fails to deserialize is treated as one with every field absent,
/// so the handler answers with its own validation message.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected request body: {rejection}");
            T::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Downloads the shared resume PDF and returns an ATS analysis with the extracted text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request = body_or_default(payload);

    let file_id = request
        .drive_url
        .as_deref()
        .and_then(extract_file_id)
        .ok_or_else(|| AppError::Validation(INVALID_LINK.to_string()))?;
    info!("Analyzing shared document {file_id}");

    let pdf_text = state.documents.fetch_pdf_text(&file_id).await?;

    let prompt = build_analysis_prompt(&pdf_text);
    let ats_analysis = state.llm.invoke(&prompt).await?;

    Ok(Json(AnalyzeResponse {
        ats_analysis,
        pdf_text,
    }))
}

/// POST /suggest-achievements
///
/// Suggests field-tailored achievement bullets for the given resume text.
pub async fn handle_suggest_achievements(
    State(state): State<AppState>,
    payload: Result<Json<SuggestAchievementsRequest>, JsonRejection>,
) -> Result<Json<SuggestAchievementsResponse>, AppError> {
    let request = body_or_default(payload);

    let resume_text = non_blank(request.resume_text)
        .ok_or_else(|| AppError::Validation(MISSING_RESUME_TEXT.to_string()))?;

    let prompt = build_achievements_prompt(&resume_text);
    let suggested_achievements = state.llm.invoke(&prompt).await?;

    Ok(Json(SuggestAchievementsResponse {
        suggested_achievements,
    }))
}

/// POST /improve
///
/// Rewrites the resume from the user's structured details, accepted
/// achievements and the original text.
pub async fn handle_improve(
    State(state): State<AppState>,
    payload: Result<Json<ImproveRequest>, JsonRejection>,
) -> Result<Json<ImproveResponse>, AppError> {
    let request = body_or_default(payload);

    let (user_info, pdf_text) = match (request.user_info, non_blank(request.pdf_text)) {
        (Some(user_info), Some(pdf_text)) => (UserInfo::from(user_info), pdf_text),
        _ => return Err(AppError::Validation(MISSING_IMPROVE_INPUT.to_string())),
    };

    let prompt = build_improvement_prompt(
        &user_info,
        &pdf_text,
        request
            .user_accepted_achievements
            .as_ref()
            .and_then(Value::as_str),
    );

    let improved = state.llm.invoke(&prompt).await.map_err(|e| {
        error!("Resume improvement failed: {e}");
        AppError::Internal(IMPROVE_FAILED.to_string())
    })?;

    Ok(Json(ImproveResponse { improved }))
}
