//! Gemini API client for order annotation.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::instrument;

use bamboo_box_core::OrderAnalysis;

use crate::config::GeminiConfig;

use super::error::AnnotatorError;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use super::Annotate;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client.
///
/// Sends the order text with a fixed JSON response schema and parses the
/// structured estimate out of the first candidate.
#[derive(Clone)]
pub struct GeminiAnnotator {
    inner: Arc<GeminiAnnotatorInner>,
}

struct GeminiAnnotatorInner {
    client: reqwest::Client,
    model: String,
}

/// What the model is asked to produce, verbatim from the response schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAnalysis {
    summary: String,
    estimated_price: f64,
    nutrition_tip: String,
}

impl GeminiAnnotator {
    /// Create a new Gemini client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "x-goog-api-key",
            reqwest::header::HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiAnnotatorInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    fn request_for(text: &str) -> GenerateContentRequest {
        let prompt = format!(
            "Analyze the following takeout order text and extract the key details. \
             If it is gibberish or not about food, politely say so.\n\n\
             User input: \"{text}\""
        );

        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_owned(),
                response_schema: serde_json::json!({
                    "type": "OBJECT",
                    "properties": {
                        "summary": {
                            "type": "STRING",
                            "description": "Short summary of the order, e.g. \"two beef noodle bowls and a cola\""
                        },
                        "estimatedPrice": {
                            "type": "NUMBER",
                            "description": "Estimated total price based on typical delivery menu prices"
                        },
                        "nutritionTip": {
                            "type": "STRING",
                            "description": "One-line nutrition comment on the meal, at most 50 words"
                        }
                    },
                    "required": ["summary", "estimatedPrice", "nutritionTip"]
                }),
            },
        }
    }

    async fn handle_response(
        response: reqwest::Response,
    ) -> Result<OrderAnalysis, AnnotatorError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnnotatorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.first_text().ok_or(AnnotatorError::EmptyResponse)?;
        let wire: WireAnalysis = serde_json::from_str(text)?;

        Ok(OrderAnalysis {
            summary: wire.summary,
            // A price the decimal type cannot hold degrades to zero
            estimated_price: Decimal::from_f64(wire.estimated_price).unwrap_or_default(),
            nutrition_tip: wire.nutrition_tip,
        })
    }
}

impl Annotate for GeminiAnnotator {
    #[instrument(skip(self, text), fields(model = %self.inner.model))]
    async fn analyze(&self, text: &str) -> Result<OrderAnalysis, AnnotatorError> {
        let url = format!(
            "{GEMINI_API_BASE}/models/{}:generateContent",
            self.inner.model
        );

        let response = self
            .inner
            .client
            .post(url)
            .json(&Self::request_for(text))
            .send()
            .await?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_embeds_user_text_and_schema() {
        let req = GeminiAnnotator::request_for("one bowl of noodles");
        let json = serde_json::to_value(&req).unwrap();

        let prompt = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("one bowl of noodles"));

        let required = &json["generationConfig"]["responseSchema"]["required"];
        assert_eq!(required[1], "estimatedPrice");
    }

    #[test]
    fn test_wire_analysis_accepts_numeric_price() {
        let wire: WireAnalysis = serde_json::from_str(
            r#"{"summary":"noodles","estimatedPrice":22.5,"nutritionTip":"fine"}"#,
        )
        .unwrap();
        assert!((wire.estimated_price - 22.5).abs() < f64::EPSILON);
    }
}
