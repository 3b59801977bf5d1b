mod a2ui;
mod cache;
mod config;
mod dispatch;
mod errors;
mod generation;
mod llm_client;
mod portfolio;
mod routes;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::ResultCache;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::llm_client::GeminiClient;
use crate::portfolio::PortfolioFacts;
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::TemplateRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Portfolio facts: embedded copy unless PORTFOLIO_DATA_PATH points elsewhere
    let facts = PortfolioFacts::load(config.portfolio_data_path.as_deref())?;
    info!("Portfolio facts loaded for {}", facts.owner());

    let registry = TemplateRegistry::new();
    let checked = registry.check_skeletons()?;
    info!(
        "Template registry v{} ({} formats, {} skeletons checked)",
        registry.version(),
        registry.supported_formats().len(),
        checked
    );
    let dispatcher = Dispatcher::new(registry);

    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.genai_model.clone(),
        config.genai_api_base.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    let cache = match &config.result_cache_dir {
        Some(dir) => {
            let cache = ResultCache::new(dir.clone(), config.result_cache_ttl_secs)?;
            info!(
                "Result cache at {} (ttl {}s)",
                cache.dir().display(),
                config.result_cache_ttl_secs
            );
            Some(cache)
        }
        None => {
            info!("Result cache disabled");
            None
        }
    };

    let state = AppState::new(config.clone(), dispatcher, facts, Arc::new(llm), cache)?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
