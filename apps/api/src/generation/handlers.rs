//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::composer::focus::{select_focus_instruction, FocusInstruction};
use crate::composer::mode::RecruitingMode;
use crate::composer::{compose, ComposedPrompt, InputBundle};
use crate::errors::AppError;
use crate::generation::generator::{run_generation, GenerateRequest, GenerateResponse};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub mode: RecruitingMode,
    #[serde(flatten)]
    pub input: InputBundle,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub mode: RecruitingMode,
    pub mode_label: &'static str,
    #[serde(flatten)]
    pub composed: ComposedPrompt,
}

#[derive(Debug, Serialize)]
pub struct ModeSummary {
    pub key: &'static str,
    pub label: &'static str,
    pub is_default: bool,
    pub focus: FocusInstruction,
}

#[derive(Debug, Serialize)]
pub struct ModeListResponse {
    pub modes: Vec<ModeSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/modes
///
/// Lists the focus selector options in UI order, with each mode's guidance block.
pub async fn handle_list_modes() -> Json<ModeListResponse> {
    let modes = RecruitingMode::ALL
        .into_iter()
        .map(|mode| ModeSummary {
            key: mode.key(),
            label: mode.label(),
            is_default: mode == RecruitingMode::default(),
            focus: select_focus_instruction(mode),
        })
        .collect();

    Json(ModeListResponse { modes })
}

/// POST /api/v1/prompts/preview
///
/// Returns exactly what would be sent to the provider. No API key needed, no network call.
pub async fn handle_preview(Json(request): Json<PreviewRequest>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        mode: request.mode,
        mode_label: request.mode.label(),
        composed: compose(&request.input, request.mode),
    })
}

/// POST /api/v1/prompts/generate
///
/// Validates, composes and makes the single provider call.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = run_generation(state.provider.as_ref(), request).await?;
    Ok(Json(response))
}
