//! Hugging Face inference provider
//!
//! Serves a hop with the OPUS-MT model named by the route table (for
//! example `Helsinki-NLP/opus-mt-uz-ru`) through the hosted inference API.
//!
//! # Authentication
//!
//! The access token is read from `HF_API_TOKEN`.

use crate::mt::error::{MtError, MtResult};
use crate::mt::language::Hop;
use crate::mt::translator::{Backend, BackendFactory, MachineTranslator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Generation settings sent with every request
#[derive(Debug, Clone, Copy, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    num_beams: u32,
    early_stopping: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 256,
            num_beams: 4,
            early_stopping: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: InferenceOptions,
}

#[derive(Debug, Deserialize)]
struct TranslationOutput {
    translation_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

/// OPUS-MT model endpoint bound to one hop
#[derive(Clone)]
pub struct HuggingFaceProvider {
    hop: Hop,
    model: String,
    token: String,
    client: reqwest::Client,
    endpoint: String,
}

impl HuggingFaceProvider {
    /// Input limit per request; OPUS-MT truncates at 512 tokens anyway
    const MAX_CHARS_PER_STRING: usize = 5_000;

    pub fn new(hop: Hop, model: &str, token: String, base_url: &str) -> MtResult<Self> {
        if token.trim().is_empty() {
            return Err(MtError::ConfigError("HF API token cannot be empty".to_string()));
        }
        if model.trim().is_empty() {
            return Err(MtError::ConfigError(format!("No model configured for {}", hop)));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| MtError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            hop,
            model: model.to_string(),
            token,
            client,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), model),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
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

    fn parse_response(body: &str) -> MtResult<String> {
        if let Ok(outputs) = serde_json::from_str::<Vec<TranslationOutput>>(body) {
            return outputs
                .into_iter()
                .next()
                .map(|o| o.translation_text)
                .ok_or_else(|| MtError::BackendFailure("Empty inference response".to_string()));
        }

        match serde_json::from_str::<InferenceError>(body) {
            Ok(err) => Err(MtError::BackendFailure(format!("Inference error: {}", err.error))),
            Err(e) => Err(MtError::BackendFailure(format!(
                "Failed to parse inference response: {}",
                e
            ))),
        }
    }
}

impl std::fmt::Debug for HuggingFaceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceProvider")
            .field("hop", &self.hop)
            .field("model", &self.model)
            .field("token", &"***")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for HuggingFaceProvider {
    async fn translate(&self, text: &str, hop: Hop) -> MtResult<String> {
        if hop != self.hop {
            return Err(MtError::BackendFailure(format!(
                "model {} serves {}, not {}",
                self.model, self.hop, hop
            )));
        }

        if text.is_empty() {
            return Ok(String::new());
        }

        Self::check_length(text)?;

        let request = InferenceRequest {
            inputs: text,
            parameters: GenerationParameters::default(),
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MtError::BackendFailure(format!(
                "Inference API error ({}): {}",
                status, body
            )));
        }

        Self::parse_response(&body)
    }

    fn provider_name(&self) -> &str {
        "Hugging Face OPUS-MT"
    }
}

/// Builds one [`HuggingFaceProvider`] per hop, using the hop's resource key
/// as the model id
#[derive(Clone)]
pub struct HuggingFaceFactory {
    token: String,
    base_url: String,
}

impl HuggingFaceFactory {
    pub fn new(token: String) -> MtResult<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: String, base_url: &str) -> MtResult<Self> {
        if token.trim().is_empty() {
            return Err(MtError::ConfigError("HF_API_TOKEN is empty".to_string()));
        }
        Ok(Self {
            token,
            base_url: base_url.to_string(),
        })
    }
}

impl std::fmt::Debug for HuggingFaceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceFactory")
            .field("token", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl BackendFactory for HuggingFaceFactory {
    async fn acquire(&self, hop: Hop, resource_key: &str) -> MtResult<Backend> {
        let provider =
            HuggingFaceProvider::new(hop, resource_key, self.token.clone(), &self.base_url)
                .map_err(|e| MtError::AcquisitionFailure {
                    hop,
                    reason: e.to_string(),
                })?;
        Ok(Arc::new(provider))
    }
}
