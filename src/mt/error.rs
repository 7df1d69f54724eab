use crate::mt::language::{Hop, Language};

/// Error types for the translation module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Neither a direct route nor a pivot exists for the pair
    RouteUnsupported { source: Language, target: Language },
    /// A single hop failed inside its backend
    BackendFailure(String),
    /// The backend for a hop could not be constructed
    AcquisitionFailure { hop: Hop, reason: String },
    /// Language tag outside the supported set
    InvalidLanguage(String),
    /// Missing or malformed configuration
    ConfigError(String),
}

impl MtError {
    /// True for failures that happened while acquiring or invoking a backend.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            MtError::BackendFailure(_) | MtError::AcquisitionFailure { .. }
        )
    }
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::RouteUnsupported { source, target } => {
                write!(f, "Route not supported: {}->{}", source, target)
            }
            MtError::BackendFailure(msg) => write!(f, "Backend failure: {}", msg),
            MtError::AcquisitionFailure { hop, reason } => {
                write!(f, "Could not acquire backend for {}: {}", hop, reason)
            }
            MtError::InvalidLanguage(tag) => write!(f, "Unsupported language tag: {:?}", tag),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(e: reqwest::Error) -> Self {
        MtError::BackendFailure(format!("Network error: {}", e))
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;
