//! Shared helpers for the WireMock-backed integration tests.

#![allow(dead_code)]

use integrations_keycloak::KeycloakClient;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-access-token";
pub const REALM: &str = "demo";

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, KeycloakClient) {
    let server = MockServer::start().await;
    let client = KeycloakClient::new(server.uri()).expect("client should build");
    (server, client)
}

/// Mock matching an authenticated request on an admin path of the test realm.
pub fn admin_mock(http_method: &str, admin_path: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(format!("/admin/realms/{}{}", REALM, admin_path)))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
}

/// JSON success response.
pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// `201 Created` response pointing at `location`.
pub fn created_response(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(201).insert_header("Location", location)
}
