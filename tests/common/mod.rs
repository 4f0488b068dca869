//! Shared setup for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use noor_interiors::adapters::ai::MockAIProvider;
use noor_interiors::adapters::http::{api_router, create_router, AppDependencies, AppState};
use noor_interiors::adapters::memory::{
    InMemoryCatalog, InMemoryChatHistory, InMemoryConsultationRepository,
};
use noor_interiors::config::ServerConfig;
use noor_interiors::domain::assistant::Persona;
use noor_interiors::domain::catalog::CatalogSeed;
use noor_interiors::domain::pricing::{CalculatorSettings, EstimateCalculator, PricingRules};

pub const SEED: &str = r#"
projects:
  - id: 11111111-1111-4111-8111-111111111111
    title: Marina apartment
    category: apartment
    status: completed
    completed_at: "2024-03-01T10:00:00Z"
    created_at: "2024-01-01T10:00:00Z"
  - id: 22222222-2222-4222-8222-222222222222
    title: Jumeirah villa
    category: villa
    status: in_progress
    created_at: "2024-02-01T10:00:00Z"
materials:
  - name: Walnut veneer
    category: wood
    price_per_unit: 220
    unit: m2
  - name: Matte emulsion
    category: paint
    price_per_unit: 45.5
    unit: liter
pricing:
  - project_type: apartment
    style: modern
    base_price_per_m2: 1500
    labor_cost_per_m2: 300
reviews:
  - project_id: 11111111-1111-4111-8111-111111111111
    user_id: client-9
    rating: 5
    comment: Beautiful work
"#;

pub struct TestApp {
    pub router: Router,
    pub ai: Arc<MockAIProvider>,
    pub chat_history: Arc<InMemoryChatHistory>,
}

fn build(
    settings: CalculatorSettings,
    ai: MockAIProvider,
    server: &ServerConfig,
) -> (AppState, Arc<MockAIProvider>, Arc<InMemoryChatHistory>) {
    let calculator = EstimateCalculator::new(Arc::new(PricingRules::standard()), settings)
        .expect("valid settings");
    let seed = CatalogSeed::from_yaml_str(SEED).expect("valid seed");
    let ai = Arc::new(ai);
    let chat_history = Arc::new(InMemoryChatHistory::new());

    let state = AppState::new(AppDependencies {
        calculator: Arc::new(calculator),
        catalog: Arc::new(InMemoryCatalog::from_seed(seed)),
        consultations: Arc::new(InMemoryConsultationRepository::new()),
        chat_history: chat_history.clone(),
        ai_provider: ai.clone(),
        persona: Persona::default(),
        reply_timeout: server.assistant_reply_timeout(),
    });
    (state, ai, chat_history)
}

/// Routes only, without the served middleware layers.
pub fn app_with(settings: CalculatorSettings, ai: MockAIProvider) -> TestApp {
    let (state, ai, chat_history) = build(settings, ai, &ServerConfig::default());
    TestApp {
        router: api_router(state),
        ai,
        chat_history,
    }
}

/// The router exactly as served, with timeout, CORS and tracing layers.
pub fn served_app(server: &ServerConfig, ai: MockAIProvider) -> TestApp {
    let (state, ai, chat_history) = build(CalculatorSettings::default(), ai, server);
    TestApp {
        router: create_router(state, server),
        ai,
        chat_history,
    }
}

pub fn app() -> TestApp {
    app_with(CalculatorSettings::default(), MockAIProvider::new())
}

/// Sends one request and returns the status with the parsed JSON body.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
