//! HTTP routing: one router per service, shared middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use serde_json::{Value, json};
use tokio::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::app::{GerenciamentoState, ReservasState, TarefasState};
use crate::infra::observability::PrometheusHandle;

use super::handlers::{alunos, notas, professores, reservas, tarefas, turmas};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Roster service: `/professores`, `/turmas`, `/alunos`.
pub fn gerenciamento_router(state: GerenciamentoState) -> Router {
    let professores_routes = Router::new()
        .route("/", get(professores::list).post(professores::create))
        .route(
            "/{id}",
            get(professores::get)
                .put(professores::update)
                .delete(professores::remove),
        );

    let turmas_routes = Router::new()
        .route("/", get(turmas::list).post(turmas::create))
        .route(
            "/{id}",
            get(turmas::get).put(turmas::update).delete(turmas::remove),
        );

    let alunos_routes = Router::new()
        .route("/", get(alunos::list).post(alunos::create))
        .route(
            "/{id}",
            get(alunos::get).put(alunos::update).delete(alunos::remove),
        );

    Router::new()
        .route("/", get(gerenciamento_index))
        .route("/health", get(health))
        .nest("/professores", professores_routes)
        .nest("/turmas", turmas_routes)
        .nest("/alunos", alunos_routes)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .layer(middleware::from_fn(track_http))
        .with_state(state)
}

/// Assignment service: `/tarefas`, `/notas`.
pub fn tarefas_router(state: TarefasState) -> Router {
    let tarefas_routes = Router::new()
        .route("/", get(tarefas::list).post(tarefas::create))
        .route(
            "/{id}",
            get(tarefas::get)
                .put(tarefas::update)
                .delete(tarefas::remove),
        );

    let notas_routes = Router::new()
        .route("/", get(notas::list).post(notas::create))
        .route(
            "/{id}",
            get(notas::get).put(notas::update).delete(notas::remove),
        );

    Router::new()
        .route("/", get(tarefas_index))
        .route("/health", get(health))
        .nest("/tarefas", tarefas_routes)
        .nest("/notas", notas_routes)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .layer(middleware::from_fn(track_http))
        .with_state(state)
}

/// Booking service: `/reservas`.
pub fn reservas_router(state: ReservasState) -> Router {
    let reservas_routes = Router::new()
        .route("/", get(reservas::list).post(reservas::create))
        .route(
            "/{id}",
            get(reservas::get)
                .put(reservas::update)
                .delete(reservas::remove),
        );

    Router::new()
        .route("/", get(reservas_index))
        .route("/health", get(health))
        .nest("/reservas", reservas_routes)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .layer(middleware::from_fn(track_http))
        .with_state(state)
}

/// Prometheus exposition, merged onto the served router by the binary.
pub fn metrics_router(handle: Arc<PrometheusHandle>) -> Router {
    Router::new().route(
        "/metrics",
        get(move || {
            let handle = Arc::clone(&handle);
            async move { handle.render() }
        }),
    )
}

/// Request counter and latency histogram, labeled by route template so
/// path parameters do not explode the cardinality.
async fn track_http(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_owned(), |p| p.as_str().to_owned());

    let start = Instant::now();
    let response = next.run(req).await;

    metrics::counter!(
        "http_requests_total",
        "method" => method,
        "path" => path,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);
    metrics::histogram!("http_request_duration_seconds").record(start.elapsed().as_secs_f64());

    response
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn gerenciamento_index() -> Json<Value> {
    Json(json!({
        "servico": "gerenciamento",
        "recursos": ["/professores", "/turmas", "/alunos"],
    }))
}

async fn tarefas_index() -> Json<Value> {
    Json(json!({
        "servico": "tarefas",
        "recursos": ["/tarefas", "/notas"],
    }))
}

async fn reservas_index() -> Json<Value> {
    Json(json!({
        "servico": "reservas",
        "recursos": ["/reservas"],
    }))
}
