// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Optional description polishing through a hosted language model.
//!
//! The capability exists only when an API key is configured; without one
//! the editor simply hides the affordance.

use crate::config::PolishConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const SYSTEM_INSTRUCTION: &str = "You are a professional theater critic and copywriter. \
Your job is to take raw notes or rough descriptions of a theater production and rewrite them \
into sophisticated, engaging, and artistic portfolio descriptions. Keep the tone elegant and minimalist.";

/// Rewrites a piece of text.
pub trait TextPolisher: Send + Sync {
    fn polish(&self, text: &str) -> Result<String>;
}

/// Build the configured polisher, or `None` when no API key is set.
pub fn polisher_from_env(config: &PolishConfig) -> Option<Arc<dyn TextPolisher>> {
    let key = std::env::var(&config.api_key_env).ok()?;
    if key.trim().is_empty() {
        return None;
    }
    log::info!("Description polishing enabled ({})", config.model);
    Some(Arc::new(GeminiPolisher::new(key, config.model.clone())))
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiPolisher {
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl GeminiPolisher {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

fn text_content(text: String) -> Content {
    Content {
        parts: vec![Part { text }],
    }
}

fn build_request(text: &str) -> GenerateRequest {
    GenerateRequest {
        system_instruction: text_content(SYSTEM_INSTRUCTION.to_string()),
        contents: vec![text_content(format!(
            "Please polish the following theater work description:\n\n\"{text}\""
        ))],
    }
}

/// First candidate's text, or `fallback` when the model returned nothing.
fn response_text(response: GenerateResponse, fallback: &str) -> String {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

impl TextPolisher for GeminiPolisher {
    fn polish(&self, text: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", ENDPOINT, self.model);
        let response: GenerateResponse = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .timeout(REQUEST_TIMEOUT)
            .json(&build_request(text))
            .send()
            .context("Polish request failed")?
            .error_for_status()
            .context("Polish service returned an error")?
            .json()
            .context("Unexpected polish response")?;
        Ok(response_text(response, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(build_request("rough notes")).unwrap();
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("You are a professional theater critic"));
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Please polish the following theater work description:\n\n\"rough notes\""
        );
    }

    #[test]
    fn test_response_text_uses_first_candidate() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Elegant "}, {"text": "prose."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response_text(response, "raw"), "Elegant prose.");
    }

    #[test]
    fn test_empty_response_falls_back_to_input() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response_text(response, "raw"), "raw");

        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {}}]}"#).unwrap();
        assert_eq!(response_text(response, "raw"), "raw");
    }

    #[test]
    fn test_no_key_means_no_capability() {
        let config = PolishConfig {
            api_key_env: "PROSCENIUM_TEST_UNSET_POLISH_KEY".to_string(),
            ..Default::default()
        };
        assert!(polisher_from_env(&config).is_none());
    }
}
