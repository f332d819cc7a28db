//! Gemini `generateContent` client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::domain::lead::Lead;
use crate::drafts::{
    EMPTY_REPLY_MESSAGE, EmailDrafter, FAILURE_MESSAGE, fallback_draft, outreach_prompt,
};
use crate::models::config::ServerConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API answered with status {0}")]
    Api(u16),
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Drafts emails with Gemini, or with the canned template when no key is set.
#[derive(Clone, Debug)]
pub struct GeminiDrafter {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_url: String,
}

impl GeminiDrafter {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, DraftError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, DraftError> {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_api_url.clone(),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends `prompt` to the model and returns its reply, `None` when empty.
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<Option<String>, DraftError> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        let body = json!({
            "contents": [Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DraftError::Api(status.as_u16()));
        }

        let reply: GenerateContentResponse = response.json().await?;
        Ok(reply.text())
    }
}

impl EmailDrafter for GeminiDrafter {
    async fn draft(&self, lead: &Lead) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return fallback_draft(lead);
        };

        match self.generate(api_key, &outreach_prompt(lead)).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_REPLY_MESSAGE.to_string(),
            Err(err) => {
                log::error!("Failed to generate draft for lead {}: {err}", lead.id);
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}
