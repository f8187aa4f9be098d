//! # Integration Tests for convo-api
//!
//! Drives the assembled router in-process: chat success and rejection
//! paths, the health probe and the body limit.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use convo_api::state::AppState;
use convo_core::NlpProcessor;

fn test_app() -> axum::Router {
    convo_api::app(AppState::new(NlpProcessor::new()))
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_chat(body: impl Into<Body>) -> axum::http::Response<Body> {
    test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap()
}

// -- Health -------------------------------------------------------------------

#[tokio::test]
async fn test_health() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "healthy",
            "message": "Conversational AI Platform is running"
        })
    );
}

#[tokio::test]
async fn test_health_rejects_post() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// -- Chat ---------------------------------------------------------------------

#[tokio::test]
async fn test_chat_neutral_message() {
    let response = post_chat(r#"{"message": "hi"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"response": "Mensagem processada: hi Sentimento: neutro"})
    );
}

#[tokio::test]
async fn test_chat_positive_message() {
    let response = post_chat(r#"{"message": "O atendimento foi excelente"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["response"],
        "Mensagem processada: O atendimento foi excelente Sentimento: positivo"
    );
}

#[tokio::test]
async fn test_chat_negative_message() {
    let response = post_chat(r#"{"message": "I am SAD today"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["response"],
        "Mensagem processada: I am SAD today Sentimento: negativo"
    );
}

#[tokio::test]
async fn test_chat_missing_message() {
    let response = post_chat("{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Campo \"message\" e obrigatorio"})
    );
}

#[tokio::test]
async fn test_chat_non_string_message() {
    let response = post_chat(r#"{"message": 5}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Campo \"message\" deve ser uma string nao vazia"})
    );
}

#[tokio::test]
async fn test_chat_empty_message() {
    let response = post_chat(r#"{"message": ""}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Campo \"message\" deve ser uma string nao vazia"
    );
}

#[tokio::test]
async fn test_chat_malformed_json() {
    let response = post_chat("{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Campo \"message\" e obrigatorio"
    );
}

#[tokio::test]
async fn test_chat_without_content_type() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .body(Body::from(r#"{"message": "hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_body_over_limit() {
    let message = "a".repeat(convo_api::BODY_LIMIT_BYTES + 1);
    let body = json!({ "message": message }).to_string();
    let response = post_chat(body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
