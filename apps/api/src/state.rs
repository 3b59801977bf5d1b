use std::sync::Arc;

use crate::cache::ResultCache;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::llm_client::CompletionService;
use crate::portfolio::{FactsSnapshot, PortfolioFacts};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub dispatcher: Arc<Dispatcher>,
    pub facts: Arc<PortfolioFacts>,
    /// Serialized once at startup; every instruction embeds the same text.
    pub snapshot: Arc<FactsSnapshot>,
    /// Swappable so tests run without network access.
    pub llm: Arc<dyn CompletionService>,
    pub cache: Option<Arc<ResultCache>>,
}

impl AppState {
    pub fn new(
        config: Config,
        dispatcher: Dispatcher,
        facts: PortfolioFacts,
        llm: Arc<dyn CompletionService>,
        cache: Option<ResultCache>,
    ) -> anyhow::Result<Self> {
        let snapshot = facts.snapshot()?;
        Ok(Self {
            config,
            dispatcher: Arc::new(dispatcher),
            facts: Arc::new(facts),
            snapshot: Arc::new(snapshot),
            llm,
            cache: cache.map(Arc::new),
        })
    }
}
