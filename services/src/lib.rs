//! Backend of the roster screen: a health check and the demo command
//! endpoint.

use crate::command::CommandRunner;
use crate::config::Config;
use axum::{
    Extension, Json, Router,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

pub mod command;
pub mod config;
pub mod telemetry;

#[derive(Clone)]
struct AppState<R> {
    runner: R,
}

#[derive(Debug, Serialize)]
struct CommandOutput {
    output: String,
}

/// Builds the service router around `runner`.
pub fn routes<R: CommandRunner>(runner: R, config: Config) -> Router {
    let api = Router::new()
        .route("/is-health", get(health_check))
        .route(
            "/execute-command",
            post(execute_command::<R>).fallback(method_not_allowed),
        );

    Router::new()
        .nest("/api", api)
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                )
            }),
        )
        .layer(Extension(config))
        .with_state(AppState { runner })
}

async fn health_check(Extension(config): Extension<Config>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, "OK").into_response();

    if let Ok(env_value) = HeaderValue::from_str(&config.environment().to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-service-env"), env_value);
    }
    response.headers_mut().insert(
        HeaderName::from_static("x-service-version"),
        HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
    );

    response
}

async fn execute_command<R: CommandRunner>(State(state): State<AppState<R>>) -> Response {
    match state.runner.run().await {
        Ok(output) => (StatusCode::OK, Json(CommandOutput { output })).into_response(),
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "command failed");
            err.into_response()
        }
    }
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
