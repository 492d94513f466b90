//! Site prompt generation — orchestrates one generation request.
//!
//! Flow: check API key → check material → compose → one provider call → response.
//!
//! Both checks run before any network access. Provider failures are returned
//! as-is: no classification, no retry, no partial result.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::composer::mode::RecruitingMode;
use crate::composer::prompts::CANVAS_TIP;
use crate::composer::{compose, ComposedPrompt, InputBundle};
use crate::errors::AppError;
use crate::llm_client::{TextProvider, MODEL};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for site prompt generation.
#[derive(Clone, Deserialize)]
pub struct GenerateRequest {
    /// Per-request Gemini key. Never logged, never stored. `null` counts as missing.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub mode: RecruitingMode,
    #[serde(flatten)]
    pub input: InputBundle,
}

impl std::fmt::Debug for GenerateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateRequest")
            .field("api_key", &"<redacted>")
            .field("mode", &self.mode)
            .field("input", &self.input)
            .finish()
    }
}

/// Successful generation result.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    /// Provider output, untouched. Meant to be pasted into Gemini Canvas.
    pub generated_prompt: String,
    pub model: String,
    pub mode: RecruitingMode,
    pub mode_label: String,
    pub generated_at: DateTime<Utc>,
    pub tip: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Sends the composed pair to the provider and returns its text.
pub async fn generate_site(
    provider: &dyn TextProvider,
    api_key: &str,
    composed: &ComposedPrompt,
) -> Result<String, AppError> {
    Ok(provider.generate(api_key, composed).await?)
}

/// Runs one generation request end to end.
///
/// Steps:
/// 1. Reject a missing/blank API key
/// 2. Reject when transcript, docs and web are all blank
/// 3. compose() → ComposedPrompt
/// 4. generate_site() → provider text (exactly one call)
pub async fn run_generation(
    provider: &dyn TextProvider,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let api_key = request.api_key.as_deref().unwrap_or_default().trim();
    if api_key.is_empty() {
        return Err(AppError::MissingApiKey);
    }

    if request.input.has_no_material() {
        return Err(AppError::EmptyMaterial);
    }

    let generation_id = Uuid::new_v4();
    let composed = compose(&request.input, request.mode);

    info!(
        "Generation {generation_id} started: mode={:?}, system_prompt_chars={}, raw_data_chars={}",
        request.mode,
        composed.system_prompt.chars().count(),
        composed.raw_data.chars().count()
    );
    let started = Instant::now();

    let generated_prompt = generate_site(provider, api_key, &composed).await?;

    info!(
        "Generation {generation_id} finished in {}ms ({} chars)",
        started.elapsed().as_millis(),
        generated_prompt.chars().count()
    );

    Ok(GenerateResponse {
        generation_id,
        generated_prompt,
        model: MODEL.to_string(),
        mode: request.mode,
        mode_label: request.mode.label().to_string(),
        generated_at: Utc::now(),
        tip: CANVAS_TIP.to_string(),
    })
}
