use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use crate::account::ports::AccountServicePort;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
}

pub fn create_router(account_service: Arc<dyn AccountServicePort>) -> Router {
    let state = AppState { account_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/", get(root))
        .route("/api/accounts", post(register))
        .route("/api/auth/token", post(login))
        .route("/api/auth/me", get(me))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the account service" }))
}
