//! Backend traits
//!
//! A [`MachineTranslator`] executes exactly one direct hop. A
//! [`BackendFactory`] builds a translator for a hop; building may load model
//! weights or authenticate a client, so the [`BackendCache`] calls it at most
//! once per hop.
//!
//! # Example
//!
//! ```ignore
//! use tarjimon::mt::{Hop, Language, MachineTranslator};
//!
//! let hop = Hop::new(Language::Uz, Language::Ru);
//! let result = backend.translate("Salom", hop).await?;
//! ```
//!
//! [`BackendCache`]: crate::mt::cache::BackendCache

use crate::mt::error::MtResult;
use crate::mt::language::Hop;
use async_trait::async_trait;
use std::sync::Arc;

/// A translation capability bound to one direct hop
///
/// Implementations report every internal problem (network, model, quota,
/// malformed input) as [`MtError::BackendFailure`]; callers do not
/// interpret the cause.
///
/// [`MtError::BackendFailure`]: crate::mt::error::MtError::BackendFailure
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` along `hop`
    async fn translate(&self, text: &str, hop: Hop) -> MtResult<String>;

    /// Name used in logs
    fn provider_name(&self) -> &str;
}

/// Shared handle to a constructed backend
pub type Backend = Arc<dyn MachineTranslator>;

/// Constructs the backend for a direct hop
#[async_trait]
pub trait BackendFactory: Send + Sync {
    /// Acquire whatever `resource_key` names and return a backend for `hop`
    ///
    /// Failures should be reported as `MtError::AcquisitionFailure`.
    async fn acquire(&self, hop: Hop, resource_key: &str) -> MtResult<Backend>;
}
