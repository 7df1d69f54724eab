//! Google Translate API provider
//!
//! Integrates with Google Translate API v2. One provider instance serves one
//! hop; the factory hands every hop its own client sharing the same key.
//!
//! # Authentication
//!
//! The API key is read from the `GOOGLE_TRANSLATE_API_KEY` environment
//! variable (see [`Config`](crate::config::Config)). Obtain a key from:
//! https://console.cloud.google.com/

use crate::mt::error::{MtError, MtResult};
use crate::mt::language::Hop;
use crate::mt::translator::{Backend, BackendFactory, MachineTranslator};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Translate API v2 provider bound to one hop
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    hop: Hop,
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per request (30KB per Google Translate API limits)
    const MAX_CHARS_PER_STRING: usize = 30_000;

    /// Create a provider for `hop` with an explicit API key
    ///
    /// Fails with `ConfigError` if the key is empty.
    pub fn new(hop: Hop, api_key: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            hop,
            api_key,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn hop(&self) -> Hop {
        self.hop
    }

    /// Reject input longer than the per-request limit, counted in characters
    fn check_length(text: &str) -> MtResult<()> {
        if text.chars().count() > Self::MAX_CHARS_PER_STRING {
            return Err(MtError::BackendFailure(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }
        Ok(())
    }

    async fn request(&self, text: &str, hop: Hop) -> MtResult<String> {
        let url = format!("{}?key={}", self.base_url, self.api_key);
        let body = json!({
            "q": [text],
            "source": hop.source.code(),
            "target": hop.target.code(),
            "format": "text"
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MtError::BackendFailure(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            MtError::BackendFailure(format!("Failed to parse API response: {}", e))
        })?;

        json["data"]["translations"][0]["translatedText"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                MtError::BackendFailure(
                    "Invalid API response: missing 'data.translations[0].translatedText'"
                        .to_string(),
                )
            })
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("hop", &self.hop)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(&self, text: &str, hop: Hop) -> MtResult<String> {
        if hop != self.hop {
            return Err(MtError::BackendFailure(format!(
                "provider for {} asked to translate {}",
                self.hop, hop
            )));
        }

        if text.is_empty() {
            return Ok(String::new());
        }

        Self::check_length(text)?;

        self.request(text, hop).await
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

/// Builds one [`GoogleTranslateProvider`] per hop
#[derive(Clone)]
pub struct GoogleTranslateFactory {
    api_key: String,
}

impl GoogleTranslateFactory {
    pub fn new(api_key: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError(
                "GOOGLE_TRANSLATE_API_KEY is empty".to_string(),
            ));
        }
        Ok(Self { api_key })
    }
}

impl std::fmt::Debug for GoogleTranslateFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateFactory")
            .field("api_key", &"***")
            .finish()
    }
}

#[async_trait]
impl BackendFactory for GoogleTranslateFactory {
    async fn acquire(&self, hop: Hop, _resource_key: &str) -> MtResult<Backend> {
        let provider = GoogleTranslateProvider::new(hop, self.api_key.clone()).map_err(|e| {
            MtError::AcquisitionFailure {
                hop,
                reason: e.to_string(),
            }
        })?;
        Ok(Arc::new(provider))
    }
}
