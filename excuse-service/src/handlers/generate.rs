//! Excuse generation handler.
//!
//! Dispatches to the Gemini provider when the caller asks for AI and a
//! provider is configured; any provider failure falls back to the template
//! picker and is never surfaced to the caller.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::services::prompt::build_prompt;
use crate::services::templates;
use crate::AppState;

/// Maximum accepted context length, in characters.
const MAX_CONTEXT_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free-form situation description, folded into the excuse.
    #[serde(default)]
    pub context: String,
    /// Reason classification: general, social, work, family.
    #[serde(default = "default_category")]
    pub category: String,
    /// Stylistic register: polite, blunt, funny.
    #[serde(default = "default_tone")]
    pub tone: String,
    /// Length preference: short, medium, long.
    #[serde(default = "default_length")]
    pub length: String,
    /// Ask for AI generation instead of the template bank.
    #[serde(default)]
    pub use_ai: bool,
}

fn default_category() -> String {
    "general".to_string()
}

fn default_tone() -> String {
    "polite".to_string()
}

fn default_length() -> String {
    "short".to_string()
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub excuse: String,
    pub source: ExcuseSource,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcuseSource {
    Ai,
    Template,
}

pub async fn generate_excuse(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let context = payload.context.trim().to_string();
    let category = payload.category.trim().to_lowercase();
    let tone = payload.tone.trim().to_lowercase();
    let length = payload.length.trim().to_lowercase();

    if context.chars().count() > MAX_CONTEXT_CHARS {
        return Err(AppError::BadRequest(anyhow::anyhow!("Context too long")));
    }

    if payload.use_ai {
        if let Some(provider) = &state.text_provider {
            let prompt = build_prompt(&context, &category, &tone, &length);
            match provider.generate(&prompt).await {
                Ok(excuse) => {
                    tracing::info!(category = %category, tone = %tone, "Generated excuse via AI");
                    return Ok(Json(GenerateResponse {
                        excuse,
                        source: ExcuseSource::Ai,
                    }));
                }
                Err(e) => {
                    tracing::error!(error = %e, "AI generation failed, falling back to templates");
                }
            }
        }
    }

    let excuse = {
        let mut rng = rand::thread_rng();
        templates::pick(&state.templates, &mut rng, &category, &tone, &length, &context)
    };

    Ok(Json(GenerateResponse {
        excuse,
        source: ExcuseSource::Template,
    }))
}
