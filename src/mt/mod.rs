/// Machine Translation Module
///
/// Translation among Uzbek, Russian and English. Not every pair has a model:
/// `uz<->ru` and `ru<->en` are direct, while `uz<->en` pivots through Russian.
///
/// # Overview
///
/// 1. **Languages & Hops** - closed tag set, case-insensitive parsing
/// 2. **Route Table & Planner** - direct routes with their model ids, curated pivots
/// 3. **Backend Traits & Providers** - one backend per hop (Hugging Face, Google, mock)
/// 4. **Backend Cache** - acquires each backend once, on first use
/// 5. **Orchestrator** - runs a plan hop by hop
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use tarjimon::mt::{BackendCache, HuggingFaceFactory, Language, RouteTable, execute, plan};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let factory = HuggingFaceFactory::new(std::env::var("HF_API_TOKEN")?)?;
///     let cache = BackendCache::new(RouteTable::standard().clone(), Arc::new(factory));
///
///     let route = plan(Language::Uz, Language::En)?;
///     let english = execute(&cache, &route, "Salom, dunyo!").await?;
///     println!("{}", english);
///     Ok(())
/// }
/// ```
pub mod cache;
pub mod error;
pub mod google_translate;
pub mod huggingface;
pub mod language;
pub mod mock;
pub mod orchestrator;
pub mod routes;
pub mod translator;

#[cfg(test)]
mod integration_tests;

pub use cache::BackendCache;
pub use error::{MtError, MtResult};
pub use google_translate::{GoogleTranslateFactory, GoogleTranslateProvider};
pub use huggingface::{HuggingFaceFactory, HuggingFaceProvider};
pub use language::{Hop, Language};
pub use mock::{MockFactory, MockMode, MockTranslator};
pub use orchestrator::execute;
pub use routes::{RoutePlan, RouteTable, plan};
pub use translator::{Backend, BackendFactory, MachineTranslator};
