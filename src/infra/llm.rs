use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: String, max_output_tokens: u32) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model,
            max_output_tokens,
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration("GEMINI_API_KEY environment variable not set".to_string())
        })
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE_URL}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl LanguageModelService for GeminiClient {
    async fn generate_completion(&self, prompt: &str) -> AppResult<String> {
        // Credential check happens before any network I/O.
        let api_key = self.api_key()?;
        let request_body = GenerateContentRequest::new(prompt, self.max_output_tokens);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::LanguageModel(format!("failed to call Gemini: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::LanguageModel(format!(
                "Gemini responded with {status}: {body}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse Gemini response: {err}"))
        })?;

        payload.first_text().ok_or_else(|| {
            AppError::LanguageModel("Gemini response contained no text".to_string())
        })
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: &str, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { max_output_tokens },
        }
    }
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
    }
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        let client = GeminiClient::new(None, "gemini-2.0-flash".to_string(), 64);
        let err = client.generate_completion("+x").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn extracts_first_text_segment() {
        let payload: GenerateContentResponse = serde_json::from_str(
            "{\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"## Summary\"},{\"text\":\"ignored\"}]}}]}",
        )
        .unwrap();
        assert_eq!(payload.first_text().as_deref(), Some("## Summary"));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let payload: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(payload.first_text().is_none());
    }
}
