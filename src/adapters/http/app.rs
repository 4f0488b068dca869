//! Router composition.
//!
//! Each module contributes full-path routes which are merged into one
//! router; cross-cutting layers are applied last.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    BookConsultationHandler, CatalogListingHandler, ComputeEstimateHandler, GetChatHistoryHandler,
    GetRateCardHandler, ListConsultationsHandler, ProjectQueryHandler, SendChatMessageHandler,
    UpdateConsultationStatusHandler,
};
use crate::config::ServerConfig;
use crate::domain::assistant::Persona;
use crate::domain::pricing::EstimateCalculator;
use crate::ports::{AIProvider, CatalogReader, ChatHistoryRepository, ConsultationRepository};

use super::assistant::{assistant_routes, AssistantHandlers};
use super::catalog::{catalog_routes, CatalogHandlers};
use super::consultation::{consultation_routes, ConsultationHandlers};
use super::health::health_check;
use super::middleware::{USER_ID_HEADER, USER_ROLE_HEADER};
use super::pricing::{pricing_routes, PricingHandlers};

/// Handler state for every module.
#[derive(Clone)]
pub struct AppState {
    pub pricing: PricingHandlers,
    pub catalog: CatalogHandlers,
    pub consultations: ConsultationHandlers,
    pub assistant: AssistantHandlers,
}

/// Ports and shared values the handlers are built from.
pub struct AppDependencies {
    pub calculator: Arc<EstimateCalculator>,
    pub catalog: Arc<dyn CatalogReader>,
    pub consultations: Arc<dyn ConsultationRepository>,
    pub chat_history: Arc<dyn ChatHistoryRepository>,
    pub ai_provider: Arc<dyn AIProvider>,
    pub persona: Persona,
    /// Time the assistant may wait for the model; keep it under the request timeout.
    pub reply_timeout: Duration,
}

impl AppState {
    pub fn new(deps: AppDependencies) -> Self {
        let history_limit = deps.persona.history_limit;
        let persona = Arc::new(deps.persona);

        let pricing = PricingHandlers::new(
            Arc::new(ComputeEstimateHandler::new(deps.calculator.clone())),
            Arc::new(GetRateCardHandler::new(deps.calculator)),
        );
        let catalog = CatalogHandlers::new(
            Arc::new(ProjectQueryHandler::new(deps.catalog.clone())),
            Arc::new(CatalogListingHandler::new(deps.catalog)),
        );
        let consultations = ConsultationHandlers::new(
            Arc::new(BookConsultationHandler::new(deps.consultations.clone())),
            Arc::new(ListConsultationsHandler::new(deps.consultations.clone())),
            Arc::new(UpdateConsultationStatusHandler::new(deps.consultations)),
        );
        let assistant = AssistantHandlers::new(
            Arc::new(
                SendChatMessageHandler::new(deps.ai_provider, deps.chat_history.clone(), persona)
                    .with_reply_timeout(deps.reply_timeout),
            ),
            Arc::new(GetChatHistoryHandler::new(deps.chat_history, history_limit)),
        );

        Self {
            pricing,
            catalog,
            consultations,
            assistant,
        }
    }
}

/// All routes, without middleware layers.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(pricing_routes(state.pricing))
        .merge(catalog_routes(state.catalog))
        .merge(consultation_routes(state.consultations))
        .merge(assistant_routes(state.assistant))
}

/// The served application: routes plus tracing, CORS and request timeout.
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(USER_ROLE_HEADER),
        ]);

    if !origins.is_empty() {
        base.allow_origin(AllowOrigin::list(origins))
    } else if server.is_production() {
        // Same-origin only.
        base
    } else {
        base.allow_origin(AllowOrigin::any())
    }
}
