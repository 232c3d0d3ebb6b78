//! Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EnricherError;
use crate::types::EnricherConfig;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

pub(crate) struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`EnricherError::Http`] if the HTTP client cannot be built.
    pub(crate) fn new(config: &EnricherConfig, api_key: &str) -> Result<Self, EnricherError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.gemini_base_url.trim_end_matches('/'),
                config.gemini_model
            ),
            api_key: api_key.to_string(),
        })
    }

    /// Send one prompt and return the text of the first candidate.
    ///
    /// # Errors
    ///
    /// - [`EnricherError::Http`] on network failure, timeout, or an
    ///   undecodable body.
    /// - [`EnricherError::Api`] on a non-2xx status.
    /// - [`EnricherError::EmptyResponse`] when no candidate carries text.
    pub(crate) async fn generate(&self, prompt: &str) -> Result<String, EnricherError> {
        let request = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EnricherError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(EnricherError::EmptyResponse);
        }
        Ok(text)
    }
}
