mod common;

use basiq::{AuthScope, BasiqError, Client, Config};
use common::{TOKEN, client, mount_token, unauthorized};
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_body() -> serde_json::Value {
    json!({
        "type": "user",
        "id": "u1",
        "email": "gavin@hooli.com",
        "links": {"self": "/users/u1"}
    })
}

#[tokio::test]
async fn unauthorized_call_reauthenticates_once_and_retries() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let user = client.user("u1").await.unwrap();

    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.email.as_deref(), Some("gavin@hooli.com"));
    assert!(client.token_issued_at().await.is_some());
}

#[tokio::test]
async fn successful_call_does_not_touch_token_endpoint() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;
    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.user("u1").await.unwrap();
    assert!(client.token_issued_at().await.is_none());
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;
    Mock::given(method("GET"))
        .and(path("/jobs/j1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).job("j1").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.to_string(), "api rejected request: 500: unknown error");
}

#[tokio::test]
async fn second_unauthorized_is_returned_without_another_retry() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/users/u1/accounts"))
        .respond_with(unauthorized())
        .expect(2)
        .mount(&server)
        .await;

    let err = client(&server).accounts("u1").await.unwrap_err();
    assert!(err.is_unauthorized());
    match err {
        BasiqError::Api(api) => {
            assert_eq!(api.correlation_id, "c-401");
            assert_eq!(api.data[0].code, "unauthorized-access");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn failed_token_exchange_replaces_original_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "type": "list",
            "correlationId": "c-403",
            "data": [{"title": "Forbidden", "detail": "Invalid api key"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).user("u1").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert!(err.to_string().contains("Invalid api key"));
}

#[tokio::test]
async fn token_request_carries_credentials_and_scope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header("authorization", "Basic key"))
        .and(header("accept", "application/json"))
        .and(header("basiq-version", "3.0"))
        .and(body_string_contains("scope=SERVER_ACCESS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body()))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).authenticate().await.unwrap();
}

#[tokio::test]
async fn client_scope_sends_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("scope=CLIENT_ACCESS"))
        .and(body_string_contains("userId=u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new("key", AuthScope::Client).with_user_id("u-1");
    let client = Client::new(config).unwrap().with_base_url(server.uri());
    client.authenticate().await.unwrap();
}

#[tokio::test]
async fn concurrent_authentication_is_debounced() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    let client = Arc::new(client(&server));
    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let client = Arc::clone(&client);
        tasks.spawn(async move { client.authenticate().await });
    }
    while let Some(res) = tasks.join_next().await {
        res.unwrap().unwrap();
    }
}

#[tokio::test]
async fn authentication_after_window_exchanges_again() {
    let server = MockServer::start().await;
    mount_token(&server, 2).await;

    let client = client(&server).with_auth_debounce(Duration::from_millis(20));
    client.authenticate().await.unwrap();
    let first = client.token_issued_at().await.unwrap();
    client.authenticate().await.unwrap();
    assert_eq!(client.token_issued_at().await, Some(first));

    tokio::time::sleep(Duration::from_millis(40)).await;
    client.authenticate().await.unwrap();
    assert!(client.token_issued_at().await.unwrap() >= first);
}

#[tokio::test]
async fn authenticated_requests_carry_version_and_bearer() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(header("authorization", "Bearer tok"))
        .and(header("basiq-version", "3.0"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "list",
            "data": [{"type": "event", "id": "e1", "eventType": "connection.created"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.authenticate().await.unwrap();
    let events = client.events().await.unwrap();
    assert_eq!(events.data.len(), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_token() {
    let server = MockServer::start().await;
    common::mount_token_once(&server, TOKEN, 1).await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"type": "list", "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).with_auth_debounce(Duration::from_millis(10));
    client.authenticate().await.unwrap();
    let issued = client.token_issued_at().await;

    tokio::time::sleep(Duration::from_millis(30)).await;
    let err = client.authenticate().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(client.token_issued_at().await, issued);

    client.events().await.unwrap();
}

#[tokio::test]
async fn stale_token_is_replaced_before_retry() {
    let server = MockServer::start().await;
    common::mount_token_once(&server, "tok-old", 1).await;
    common::mount_token_once(&server, "tok-new", 1).await;
    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .and(header("authorization", "Bearer tok-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .and(header("authorization", "Bearer tok-old"))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).with_auth_debounce(Duration::from_millis(10));
    client.authenticate().await.unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;

    let user = client.user("u1").await.unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn token_exchange_rejects_unexpected_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(203).set_body_json(common::token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.authenticate().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NON_AUTHORITATIVE_INFORMATION));
    assert!(client.token_issued_at().await.is_none());
}
