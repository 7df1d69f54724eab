//! Uzbek transliteration and pivot-routed machine translation
//!
//! Two capabilities sit behind a chat front end, which lives outside this
//! crate and owns all per-user state:
//!
//! - [`transliterate`] converts between Latin and Cyrillic Uzbek
//! - [`Tarjimon::translate`] translates among Uzbek, Russian and English,
//!   pivoting through Russian where no direct model exists
//!
//! ```
//! assert_eq!(tarjimon::transliterate("salom"), "салом");
//! ```

pub mod config;
pub mod mt;
pub mod translit;

use std::sync::Arc;
use tracing::debug;

pub use config::{BackendKind, Config};
pub use mt::{BackendCache, BackendFactory, Hop, Language, MtError, MtResult, RoutePlan, RouteTable};
pub use translit::transliterate;

/// What the caller wants done with incoming text
///
/// Owned by the caller's conversation state and passed in on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    Transliterate,
    Translate { source: Language, target: Language },
}

/// Translation entry point holding the shared backend cache
#[derive(Debug)]
pub struct Tarjimon {
    cache: BackendCache,
}

impl Tarjimon {
    /// Standard route table served by `factory`
    pub fn new(factory: Arc<dyn BackendFactory>) -> Self {
        Self::with_routes(RouteTable::standard().clone(), factory)
    }

    pub fn with_routes(routes: RouteTable, factory: Arc<dyn BackendFactory>) -> Self {
        Self {
            cache: BackendCache::new(routes, factory),
        }
    }

    pub fn from_config(config: &Config) -> MtResult<Self> {
        Ok(Self::new(config.backend_factory()?))
    }

    pub fn routes(&self) -> &RouteTable {
        self.cache.routes()
    }

    pub fn cache(&self) -> &BackendCache {
        &self.cache
    }

    /// Transliterate into the other script; never fails
    pub fn transliterate(&self, text: &str) -> String {
        transliterate(text)
    }

    /// Translate between two tags such as `"uz"` and `" EN "`
    ///
    /// Tags are trimmed and compared case-insensitively.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> MtResult<String> {
        let source = Language::parse(source)?;
        let target = Language::parse(target)?;
        self.translate_languages(text, source, target).await
    }

    pub async fn translate_languages(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> MtResult<String> {
        let plan = self.cache.routes().plan(source, target)?;
        self.translate_plan(text, &plan).await
    }

    /// Run an already planned route, e.g. one the caller has logged or shown
    pub async fn translate_plan(&self, text: &str, plan: &RoutePlan) -> MtResult<String> {
        debug!(%plan, "translating");
        mt::execute(&self.cache, plan, text).await
    }

    /// Dispatch on the caller's current mode
    pub async fn handle(&self, text: &str, mode: &ChatMode) -> MtResult<String> {
        match *mode {
            ChatMode::Transliterate => Ok(transliterate(text)),
            ChatMode::Translate { source, target } => {
                self.translate_languages(text, source, target).await
            }
        }
    }
}
