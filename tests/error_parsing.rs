//! Error-body message extraction and per-call fallbacks.

mod common;

use common::make_signed_in_app;
use common::mock_backend::{MockBackend, MockResponse};
use serde_json::json;
use vota_informado::api::parse_error_message;
use vota_informado::repository::{Resource, EMPTY_RESPONSE};

#[test]
fn test_error_key_wins_over_message_and_detail() {
    let body = r#"{"detail": "d", "message": "m", "error": "e"}"#;
    assert_eq!(parse_error_message(Some(body), "fb"), "e");
}

#[test]
fn test_message_then_detail() {
    assert_eq!(parse_error_message(Some(r#"{"message": "m"}"#), "fb"), "m");
    assert_eq!(
        parse_error_message(Some(r#"{"detail": "Token inválido"}"#), "fb"),
        "Token inválido"
    );
}

#[test]
fn test_fallback_cases() {
    assert_eq!(parse_error_message(None, "fb"), "fb");
    assert_eq!(parse_error_message(Some(""), "fb"), "fb");
    assert_eq!(parse_error_message(Some("<html>502</html>"), "fb"), "fb");
    assert_eq!(parse_error_message(Some(r#"["error"]"#), "fb"), "fb");
    assert_eq!(parse_error_message(Some(r#"{"error": 42}"#), "fb"), "fb");
    assert_eq!(parse_error_message(Some(r#"{"error": "  "}"#), "fb"), "fb");
    assert_eq!(parse_error_message(Some(r#"{"other": "x"}"#), "fb"), "fb");
}

#[tokio::test]
async fn test_html_error_page_falls_back_to_call_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("candidatos/42/", MockResponse::raw(502, "<h1>Bad Gateway</h1>"))
        .await;

    let app = make_signed_in_app(&backend, "tok");
    let result = app.candidatos().candidato_detail(42).await;

    assert_eq!(
        result,
        Resource::error("Error al cargar el detalle del candidato")
    );
}

#[tokio::test]
async fn test_unknown_route_reports_body_error() {
    let backend = MockBackend::start().await;

    let app = make_signed_in_app(&backend, "tok");
    let result = app.votos().estadisticas().await;

    assert_eq!(result.message(), Some("Not found."));
}

#[tokio::test]
async fn test_rejected_credentials_report_detail() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "usuarios/perfil/",
            MockResponse::json_with_status(
                401,
                json!({"detail": "Las credenciales de autenticación no se proveyeron."}),
            ),
        )
        .await;

    let app = make_signed_in_app(&backend, "tok");
    let result = app.auth().perfil().await;

    assert_eq!(
        result.message(),
        Some("Las credenciales de autenticación no se proveyeron.")
    );
}

#[tokio::test]
async fn test_empty_success_body_is_reported() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("votos/votar/", MockResponse::raw(201, ""))
        .await;

    let app = make_signed_in_app(&backend, "tok");
    let result = app.votos().votar(3).await;

    assert_eq!(result.message(), Some(EMPTY_RESPONSE));
    let sent = backend.requests_to("votos/votar/").await;
    assert_eq!(sent[0].json(), json!({"candidato_id": 3}));
}
