//! Environment-driven configuration
//!
//! | Variable                   | Meaning                                   |
//! |----------------------------|-------------------------------------------|
//! | `TARJIMON_BACKEND`         | `huggingface` (default), `google`, `mock` |
//! | `HF_API_TOKEN`             | token for the Hugging Face backend        |
//! | `GOOGLE_TRANSLATE_API_KEY` | key for the Google Translate backend      |

use crate::mt::{
    BackendFactory, GoogleTranslateFactory, HuggingFaceFactory, MockFactory, MockMode, MtError,
    MtResult,
};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const BACKEND_VAR: &str = "TARJIMON_BACKEND";
pub const HF_TOKEN_VAR: &str = "HF_API_TOKEN";
pub const GOOGLE_KEY_VAR: &str = "GOOGLE_TRANSLATE_API_KEY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendKind {
    #[default]
    Huggingface,
    Google,
    Mock,
}

impl FromStr for BackendKind {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(BackendKind::Huggingface),
            "google" => Ok(BackendKind::Google),
            "mock" => Ok(BackendKind::Mock),
            other => Err(MtError::ConfigError(format!(
                "Unknown backend {:?} (expected huggingface, google or mock)",
                other
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::Huggingface => "huggingface",
            BackendKind::Google => "google",
            BackendKind::Mock => "mock",
        })
    }
}

#[derive(Clone, Default)]
pub struct Config {
    pub backend: BackendKind,
    pub hf_token: Option<String>,
    pub google_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MtResult<Self> {
        let backend = match lookup(BACKEND_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => BackendKind::default(),
        };

        Ok(Self {
            backend,
            hf_token: lookup(HF_TOKEN_VAR).filter(|v| !v.trim().is_empty()),
            google_api_key: lookup(GOOGLE_KEY_VAR).filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Factory for the configured backend
    ///
    /// Missing credentials are reported here, before any translation runs.
    pub fn backend_factory(&self) -> MtResult<Arc<dyn BackendFactory>> {
        match self.backend {
            BackendKind::Huggingface => {
                let token = self.hf_token.clone().ok_or_else(|| {
                    MtError::ConfigError(format!("{} environment variable not set", HF_TOKEN_VAR))
                })?;
                Ok(Arc::new(HuggingFaceFactory::new(token)?))
            }
            BackendKind::Google => {
                let key = self.google_api_key.clone().ok_or_else(|| {
                    MtError::ConfigError(format!("{} environment variable not set", GOOGLE_KEY_VAR))
                })?;
                Ok(Arc::new(GoogleTranslateFactory::new(key)?))
            }
            BackendKind::Mock => Ok(Arc::new(MockFactory::new(MockMode::Suffix))),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("backend", &self.backend)
            .field("hf_token", &self.hf_token.as_ref().map(|_| "***"))
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}
