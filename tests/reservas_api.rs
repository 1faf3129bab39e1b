//! Integration tests for the booking service.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use gestao_escolar::api::reservas_router;
use gestao_escolar::app::ReservasState;
use gestao_escolar::domain::PeerKind;
use gestao_escolar::test_utils::MockReferenceChecker;

fn app_with_checker(checker: Arc<MockReferenceChecker>) -> Router {
    reservas_router(ReservasState::new(checker))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_create_reserva_with_known_turma() {
    let checker = Arc::new(MockReferenceChecker::new());
    checker.allow(PeerKind::Turma, 1);
    let app = app_with_checker(checker.clone());

    let (status, created) = send(
        &app,
        "POST",
        "/reservas",
        Some(json!({ "num_sala": 12, "data": "2024-03-15", "turma_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["data"], "2024-03-15");
    // lab defaults to false when omitted
    assert_eq!(created["lab"], false);
    assert_eq!(created["hora_inicio"], Value::Null);
    assert_eq!(checker.call_count(), 1);

    let (_, fetched) = send(&app, "GET", "/reservas/1", None).await;
    assert_eq!(fetched["data"], "2024-03-15");
}

#[tokio::test]
async fn test_create_reserva_rejected_when_roster_unreachable() {
    let checker = Arc::new(MockReferenceChecker::unavailable());
    let app = app_with_checker(checker);

    let (status, body) = send(
        &app,
        "POST",
        "/reservas",
        Some(json!({ "num_sala": 12, "data": "2024-03-15", "turma_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_reference");
    assert!(body["error"]["message"].as_str().unwrap().contains("turma"));

    let (_, listed) = send(&app, "GET", "/reservas", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_reserva_malformed_date() {
    let checker = Arc::new(MockReferenceChecker::new());
    checker.allow(PeerKind::Turma, 1);
    let app = app_with_checker(checker.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/reservas",
        Some(json!({ "num_sala": 12, "data": "15/03/2024", "turma_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");

    // rejected at parse time, before any lookup
    assert_eq!(checker.call_count(), 0);
}

#[tokio::test]
async fn test_update_clears_time_with_explicit_null() {
    let checker = Arc::new(MockReferenceChecker::new());
    checker.allow(PeerKind::Turma, 1);
    let app = app_with_checker(checker.clone());

    send(
        &app,
        "POST",
        "/reservas",
        Some(json!({
            "num_sala": 12,
            "lab": true,
            "data": "2024-03-15",
            "turma_id": 1,
            "hora_inicio": "08:00",
            "hora_fim": "10:00"
        })),
    )
    .await;

    let (status, updated) = send(
        &app,
        "PUT",
        "/reservas/1",
        Some(json!({ "hora_inicio": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["hora_inicio"], Value::Null);
    assert_eq!(updated["hora_fim"], "10:00");
    assert_eq!(updated["lab"], true);

    // no reference supplied, no lookup beyond the create
    assert_eq!(checker.call_count(), 1);
}

#[tokio::test]
async fn test_update_revalidates_turma() {
    let checker = Arc::new(MockReferenceChecker::new());
    checker.allow(PeerKind::Turma, 1);
    let app = app_with_checker(checker.clone());

    send(
        &app,
        "POST",
        "/reservas",
        Some(json!({ "num_sala": 12, "data": "2024-03-15", "turma_id": 1 })),
    )
    .await;

    let (status, _) = send(&app, "PUT", "/reservas/1", Some(json!({ "turma_id": 8 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, "GET", "/reservas/1", None).await;
    assert_eq!(fetched["turma_id"], 1);
}

#[tokio::test]
async fn test_delete_reserva() {
    let checker = Arc::new(MockReferenceChecker::new());
    checker.allow(PeerKind::Turma, 1);
    let app = app_with_checker(checker);

    send(
        &app,
        "POST",
        "/reservas",
        Some(json!({ "num_sala": 12, "data": "2024-03-15", "turma_id": 1 })),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/reservas/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "DELETE", "/reservas/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
