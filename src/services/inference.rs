// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gemini API client for nutrition estimation and coaching tips.
//!
//! Handles:
//! - Meal analysis from free-text descriptions
//! - Meal analysis from photos (inline image data)
//! - Personalized daily tips built from profile and totals
//! - Failure classification (safety block, malformed response, transport)

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::{AnalyzedFood, DailyTotals, UserProfile};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini structured-inference client.
#[derive(Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl InferenceClient {
    /// Create a client from the configured API key and model.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: API_BASE_URL.to_string(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// Estimate nutrition facts for a meal described in free text.
    pub async fn analyze_text(&self, description: &str) -> Result<AnalyzedFood, InferenceError> {
        let prompt = format!(
            "Analyze the following meal description and provide its nutritional \
             information. Description: {description}"
        );
        self.analyze(vec![ContentPart::Text { text: prompt }]).await
    }

    /// Estimate nutrition facts for a meal photo.
    pub async fn analyze_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<AnalyzedFood, InferenceError> {
        let parts = vec![
            ContentPart::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.to_string(),
                    data: STANDARD.encode(image),
                },
            },
            ContentPart::Text {
                text: "Analyze the food in this image and provide its estimated \
                       nutritional information."
                    .to_string(),
            },
        ];
        self.analyze(parts).await
    }

    /// Generate a short coaching tip from the user's goals and today's totals.
    pub async fn daily_tip(
        &self,
        profile: &UserProfile,
        totals: &DailyTotals,
    ) -> Result<String, InferenceError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![ContentPart::Text {
                    text: tip_prompt(profile, totals),
                }],
            }],
            generation_config: None,
        };

        let response = self.generate(&request).await?;
        let text = extract_text(&response)?;
        Ok(text.trim().to_string())
    }

    /// Run an analysis request constrained to the nutrition JSON schema.
    async fn analyze(&self, parts: Vec<ContentPart>) -> Result<AnalyzedFood, InferenceError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent { parts }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.2),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(nutrition_schema()),
            }),
        };

        let response = self.generate(&request).await?;
        let text = extract_text(&response)?;
        parse_analysis(&text)
    }

    /// POST to `generateContent` and decode the response envelope.
    async fn generate(&self, request: &GeminiRequest) -> Result<GeminiResponse, InferenceError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        tracing::debug!(model = %self.model, "Sending Gemini request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map_or(body, |e| e.message);
            tracing::error!(status = %status, "Gemini API error");
            return Err(InferenceError::Unknown(format!("HTTP {status}: {message}")));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            InferenceError::MalformedResponse(format!("invalid response JSON: {e}"))
        })?;

        if let Some(error) = parsed.error {
            return Err(InferenceError::Unknown(error.message));
        }

        Ok(parsed)
    }
}

/// Pull the first text part out of a response, surfacing safety blocks.
fn extract_text(response: &GeminiResponse) -> Result<String, InferenceError> {
    if let Some(feedback) = &response.prompt_feedback {
        if feedback.block_reason.is_some() {
            return Err(InferenceError::SafetyBlocked);
        }
    }

    let candidate = response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .ok_or_else(|| {
            InferenceError::MalformedResponse("no candidates in response".to_string())
        })?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(InferenceError::SafetyBlocked);
    }

    let part = candidate
        .content
        .as_ref()
        .and_then(|c| c.parts.first())
        .ok_or_else(|| {
            InferenceError::MalformedResponse("no content in candidate".to_string())
        })?;

    match part {
        ContentPart::Text { text } => Ok(text.clone()),
        ContentPart::InlineData { .. } => Err(InferenceError::MalformedResponse(
            "unexpected inline data in model output".to_string(),
        )),
    }
}

/// Parse the schema-constrained analysis JSON.
fn parse_analysis(text: &str) -> Result<AnalyzedFood, InferenceError> {
    serde_json::from_str(text.trim())
        .map_err(|e| InferenceError::MalformedResponse(format!("invalid nutrition JSON: {e}")))
}

fn tip_prompt(profile: &UserProfile, totals: &DailyTotals) -> String {
    let name = if profile.name.is_empty() {
        "the user"
    } else {
        &profile.name
    };

    format!(
        "You are a friendly nutrition coach. Give one short, encouraging health tip \
         (under 60 words) for {name}. Their daily goal is {:.0} kcal with {:.0}g protein, \
         {:.0}g carbohydrates and {:.0}g fat. So far today they have logged {:.0} kcal, \
         {:.0}g protein, {:.0}g carbohydrates and {:.0}g fat.",
        profile.goals.calories,
        profile.goals.protein,
        profile.goals.carbs,
        profile.goals.fat,
        totals.calories,
        totals.protein,
        totals.carbs,
        totals.fat,
    )
}

/// JSON schema the analysis response must conform to.
fn nutrition_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "A descriptive name for the food item or meal.",
            },
            "calories": {
                "type": "NUMBER",
                "description": "Estimated total calories for the item.",
            },
            "protein": {
                "type": "NUMBER",
                "description": "Estimated grams of protein.",
            },
            "carbohydrates": {
                "type": "NUMBER",
                "description": "Estimated grams of carbohydrates.",
            },
            "fat": {
                "type": "NUMBER",
                "description": "Estimated grams of fat.",
            },
        },
        "required": ["name", "calories", "protein", "carbohydrates", "fat"],
    })
}

/// Classified failures from the inference service.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Request blocked by content safety filters")]
    SafetyBlocked,

    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),

    #[error("Inference request failed: {0}")]
    Transport(String),

    #[error("Inference service error: {0}")]
    Unknown(String),
}

impl InferenceError {
    /// Message suitable for showing directly to the user. Safety blocks get
    /// their own wording; everything else shares a generic retry message.
    pub fn user_message(&self) -> String {
        match self {
            Self::SafetyBlocked => {
                "This request was blocked by the safety filters. Please adjust your \
                 description or photo and try again."
                    .to_string()
            }
            _ => "Sorry, we couldn't analyze your meal. Please try again.".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gemini wire format
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<ContentPart>,
}

/// A single content part: text for prompts and replies, inline data for
/// image payloads.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64-encoded media attachment.
#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

/// Response body from `generateContent`.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
    error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// Prompt-level feedback. A block reason means the request was refused
/// before any candidate was generated.
#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}
