//! Mock backends for testing
//!
//! Deterministic, network-free translators and a factory that counts how
//! often it is asked to acquire a backend.
//!
//! # Example
//!
//! ```ignore
//! use tarjimon::mt::{Hop, Language, MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let hop = Hop::new(Language::Uz, Language::Ru);
//!     assert_eq!(mock.translate("salom", hop).await.unwrap(), "salom_ru");
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::language::{Hop, Language};
use crate::mt::translator::{Backend, BackendFactory, MachineTranslator};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "salom" → "salom_ru"
    Suffix,

    /// Predefined (text, target) → translation, falling back to `Suffix`
    Mappings(HashMap<(String, Language), String>),

    /// Fail every call with a backend failure
    Error(String),

    /// Return input unchanged
    NoOp,
}

/// Shared record of (hop, input text) for every call
pub type CallLog = Arc<Mutex<Vec<(Hop, String)>>>;

#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Simulated inference delay in milliseconds
    delay_ms: u64,
    calls: CallLog,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self::with_log(mode, 0, CallLog::default())
    }

    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self::with_log(mode, delay_ms, CallLog::default())
    }

    fn with_log(mode: MockMode, delay_ms: u64, calls: CallLog) -> Self {
        Self {
            mode,
            delay_ms,
            calls,
        }
    }

    /// Inputs seen so far, in call order
    pub fn calls(&self) -> Vec<(Hop, String)> {
        lock_log(&self.calls).clone()
    }

    fn apply_translation(&self, text: &str, hop: Hop) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, hop.target)),
            MockMode::Mappings(map) => Ok(map
                .get(&(text.to_string(), hop.target))
                .cloned()
                .unwrap_or_else(|| format!("{}_{}", text, hop.target))),
            MockMode::Error(msg) => Err(MtError::BackendFailure(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(&self, text: &str, hop: Hop) -> MtResult<String> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        lock_log(&self.calls).push((hop, text.to_string()));
        self.apply_translation(text, hop)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

/// Factory producing [`MockTranslator`]s that share one call log
#[derive(Debug, Default)]
pub struct MockFactory {
    mode: Option<MockMode>,
    overrides: HashMap<Hop, MockMode>,
    /// Simulated acquisition delay in milliseconds
    delay_ms: u64,
    /// Number of initial acquisitions that fail
    fail_first: usize,
    acquisitions: AtomicUsize,
    acquired_keys: Mutex<Vec<String>>,
    calls: CallLog,
}

impl MockFactory {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    pub fn failing_first(mode: MockMode, fail_first: usize) -> Self {
        Self {
            fail_first,
            ..Self::new(mode)
        }
    }

    /// Use a different mode for backends built for `hop`
    pub fn with_override(mut self, hop: Hop, mode: MockMode) -> Self {
        self.overrides.insert(hop, mode);
        self
    }

    /// How many times `acquire` has been called
    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }

    /// Resource keys of successful acquisitions
    pub fn acquired_keys(&self) -> Vec<String> {
        self.acquired_keys
            .lock()
            .map(|keys| keys.clone())
            .unwrap_or_default()
    }

    /// Every translate call made on any backend from this factory
    pub fn calls(&self) -> Vec<(Hop, String)> {
        lock_log(&self.calls).clone()
    }
}

#[async_trait]
impl BackendFactory for MockFactory {
    async fn acquire(&self, hop: Hop, resource_key: &str) -> MtResult<Backend> {
        let attempt = self.acquisitions.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if attempt < self.fail_first {
            return Err(MtError::AcquisitionFailure {
                hop,
                reason: format!("simulated failure #{}", attempt + 1),
            });
        }

        if let Ok(mut keys) = self.acquired_keys.lock() {
            keys.push(resource_key.to_string());
        }

        let mode = self
            .overrides
            .get(&hop)
            .or(self.mode.as_ref())
            .cloned()
            .unwrap_or(MockMode::Suffix);
        Ok(Arc::new(MockTranslator::with_log(mode, 0, Arc::clone(&self.calls))))
    }
}

fn lock_log(log: &CallLog) -> std::sync::MutexGuard<'_, Vec<(Hop, String)>> {
    log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
