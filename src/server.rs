//! Server startup: builds adapters from configuration and serves the API.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::adapters::ai::{MockAIProvider, OpenAIProvider};
use crate::adapters::http::{create_router, AppDependencies, AppState};
use crate::adapters::memory::{InMemoryCatalog, InMemoryChatHistory, InMemoryConsultationRepository};
use crate::config::{AiConfig, AppConfig, ConfigError, ValidationError};
use crate::domain::catalog::CatalogSeedError;
use crate::domain::pricing::{EstimateCalculator, PricingError};
use crate::ports::{AIError, AIProvider};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("pricing rules: {0}")]
    Pricing(#[from] PricingError),

    #[error("catalog seed: {0}")]
    Catalog(#[from] CatalogSeedError),

    #[error("AI provider: {0}")]
    Ai(#[from] AIError),

    #[error("server I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Chat-completions client when a key is configured, otherwise the mock.
pub fn build_ai_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    match config.openai_config() {
        Some(openai) => {
            info!(model = %openai.model, base_url = %openai.base_url, "Using OpenAI-compatible provider");
            Ok(Arc::new(OpenAIProvider::new(openai)?))
        }
        None => {
            tracing::warn!("No AI API key configured; assistant replies come from the mock provider");
            Ok(Arc::new(MockAIProvider::new()))
        }
    }
}

/// Wires every adapter and handler from configuration.
pub fn build_state(config: &AppConfig) -> Result<AppState, StartupError> {
    let rules = config.pricing.load_rules()?;
    let settings = config.pricing.settings()?;
    let calculator = Arc::new(EstimateCalculator::new(Arc::new(rules), settings)?);

    let seed = config.catalog.load_seed()?;
    let catalog = InMemoryCatalog::from_seed(seed);
    info!(projects = catalog.project_count(), "Catalog loaded");

    Ok(AppState::new(AppDependencies {
        calculator,
        catalog: Arc::new(catalog),
        consultations: Arc::new(InMemoryConsultationRepository::new()),
        chat_history: Arc::new(InMemoryChatHistory::new()),
        ai_provider: build_ai_provider(&config.ai)?,
        persona: config.assistant.persona(),
        reply_timeout: config.server.assistant_reply_timeout(),
    }))
}

/// Serves the API until Ctrl-C or SIGTERM.
pub async fn start_server(config: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&config)?;
    let app = create_router(state, &config.server);
    let addr = config.server.socket_addr()?;

    info!("Starting Noor Interiors API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, draining connections...");
}
