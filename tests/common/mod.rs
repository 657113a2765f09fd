#![allow(dead_code)]

use basiq::{AuthScope, Client, Config};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "tok";

pub fn client(server: &MockServer) -> Client {
    Client::new(Config::new("key", AuthScope::Server))
        .unwrap()
        .with_base_url(server.uri())
}

pub fn token_body() -> serde_json::Value {
    json!({
        "access_token": TOKEN,
        "expires_in": 3600,
        "token_type": "Bearer"
    })
}

/// Mount `POST /token` and require it to be hit exactly `times` times.
pub async fn mount_token(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(times)
        .mount(server)
        .await;
}

/// Mount a `POST /token` that hands out `token` for the next `times` exchanges.
/// Mounts are consulted in order, so successive calls queue up tokens.
pub async fn mount_token_once(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .up_to_n_times(times)
        .expect(times)
        .mount(server)
        .await;
}

pub fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({
        "type": "list",
        "correlationId": "c-401",
        "data": [{
            "type": "error",
            "code": "unauthorized-access",
            "title": "Unauthorized Access",
            "detail": "You are not authorized to access this resource"
        }]
    }))
}
