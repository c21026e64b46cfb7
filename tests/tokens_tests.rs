//! Integration tests for the token endpoints.

mod common;

use common::*;
use integrations_keycloak::{
    ApiErrorType, KeycloakErrorKind, RequestingPartyTokenOptions, SecretString, TokenOptions,
    GRANT_TYPE_UMA_TICKET,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

const TOKEN_PATH: &str = "/realms/demo/protocol/openid-connect/token";

fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string())
}

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "at",
        "expires_in": 300,
        "refresh_expires_in": 1800,
        "refresh_token": "rt",
        "token_type": "Bearer",
        "not-before-policy": 0,
        "session_state": "s1",
        "scope": "openid profile"
    })
}

#[tokio::test]
async fn test_login_posts_password_grant_form() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "client_id=app&client_secret=s3cret&grant_type=password&password=pw&scope=openid&username=alice",
        ))
        .respond_with(json_response(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let token = client
        .tokens()
        .login("app", &secret("s3cret"), REALM, "alice", &secret("pw"))
        .await
        .unwrap();

    assert_eq!(token.access_token, "at");
    assert_eq!(token.refresh_token, "rt");
    assert_eq!(token.expires_in, 300);
    assert_eq!(token.scope, "openid profile");
}

#[tokio::test]
async fn test_login_admin_uses_admin_cli() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .and(body_string_contains("client_id=admin-cli"))
        .and(body_string_contains("grant_type=password"))
        .respond_with(json_response(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let token = client.tokens().login_admin("admin", &secret("pw"), "master").await.unwrap();
    assert_eq!(token.token_type, "Bearer");
}

#[tokio::test]
async fn test_login_client_joins_scopes() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("scope=openid+email"))
        .respond_with(json_response(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .tokens()
        .login_client("svc", &secret("secret"), REALM, &["openid", "email"])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_credentials_are_classified() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid user credentials"
        })))
        .mount(&server)
        .await;

    let err = client
        .tokens()
        .login("app", &secret("s3cret"), REALM, "alice", &secret("wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), KeycloakErrorKind::Api);
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.api_error_type(), ApiErrorType::InvalidGrant);
    assert_eq!(err.message(), "401 Unauthorized: invalid_grant: Invalid user credentials");
}

#[tokio::test]
async fn test_get_token_sends_custom_options() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=rt-1"))
        .respond_with(json_response(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let options = TokenOptions {
        client_id: Some("app".to_string()),
        grant_type: Some("refresh_token".to_string()),
        refresh_token: Some("rt-1".to_string()),
        ..Default::default()
    };
    client.tokens().get_token(REALM, &options).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token_sends_exposed_secrets() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string(
            "client_id=app&client_secret=s3cret&grant_type=refresh_token&refresh_token=rt-2",
        ))
        .respond_with(json_response(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let token = client
        .tokens()
        .refresh_token(&secret("rt-2"), "app", &secret("s3cret"), REALM)
        .await
        .unwrap();

    assert_eq!(token.refresh_token, "rt");
    assert!(!format!("{:?}", token).contains("\"rt\""));
}

#[tokio::test]
async fn test_token_exchange_form() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("subject_token=subject-at"))
        .and(body_string_contains("client_secret=s3cret"))
        .and(body_string_contains("audience=target"))
        .and(body_string_contains("requested_subject=u1"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Atoken-exchange",
        ))
        .respond_with(json_response(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .tokens()
        .login_client_token_exchange("app", &secret("subject-at"), &secret("s3cret"), REALM, "target", "u1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_requesting_party_permissions_use_permissions_mode() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Authorization", "Bearer test-access-token"))
        .and(body_string_contains("response_mode=permissions"))
        .and(body_string_contains("permission=doc%23read"))
        .and(body_string_contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Auma-ticket"))
        .respond_with(json_response(json!([
            { "rsid": "r1", "rsname": "doc", "scopes": ["read"] }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestingPartyTokenOptions {
        audience: Some("api".to_string()),
        permissions: Some(vec!["doc#read".to_string()]),
        ..Default::default()
    };
    let permissions = client
        .tokens()
        .get_requesting_party_permissions(TOKEN, REALM, &options)
        .await
        .unwrap();

    assert_eq!(permissions.len(), 1);
    assert_eq!(permissions[0].resource_name.as_deref(), Some("doc"));
    assert!(GRANT_TYPE_UMA_TICKET.ends_with("uma-ticket"));
}

#[tokio::test]
async fn test_permission_decision() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("response_mode=decision"))
        .respond_with(json_response(json!({ "result": true })))
        .mount(&server)
        .await;

    let decision = client
        .tokens()
        .get_requesting_party_permission_decision(TOKEN, REALM, &RequestingPartyTokenOptions::default())
        .await
        .unwrap();

    assert_eq!(decision.result, Some(true));
}

#[tokio::test]
async fn test_logout_and_revoke() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/realms/demo/protocol/openid-connect/logout"))
        .and(body_string("client_id=app&client_secret=s3cret&refresh_token=rt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/realms/demo/protocol/openid-connect/revoke"))
        .and(body_string("client_id=app&client_secret=s3cret&token=rt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client_secret = secret("s3cret");
    let refresh_token = secret("rt");
    client
        .tokens()
        .logout("app", &client_secret, REALM, &refresh_token)
        .await
        .unwrap();
    client
        .tokens()
        .revoke_token(REALM, "app", &client_secret, &refresh_token)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_retrospect_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/realms/demo/protocol/openid-connect/token/introspect"))
        .and(body_string_contains("token_type_hint=requesting_party_token"))
        .and(body_string_contains("token=at"))
        .respond_with(json_response(json!({
            "active": true,
            "aud": "account",
            "typ": "Bearer",
            "exp": 1700000000
        })))
        .mount(&server)
        .await;

    let result = client
        .tokens()
        .retrospect_token("at", "app", &secret("s3cret"), REALM)
        .await
        .unwrap();

    assert_eq!(result.active, Some(true));
    assert_eq!(result.token_type.as_deref(), Some("Bearer"));
}

#[tokio::test]
async fn test_user_info_and_raw_user_info() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/realms/demo/protocol/openid-connect/userinfo"))
        .and(header("Authorization", "Bearer at"))
        .respond_with(json_response(json!({
            "sub": "u1",
            "preferred_username": "alice",
            "department": "ops"
        })))
        .mount(&server)
        .await;

    let info = client.tokens().get_user_info("at", REALM).await.unwrap();
    assert_eq!(info.preferred_username.as_deref(), Some("alice"));

    let raw = client.tokens().get_raw_user_info("at", REALM).await.unwrap();
    assert_eq!(raw["department"], json!("ops"));
}

#[tokio::test]
async fn test_issuer_and_certs_are_public() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/realms/demo"))
        .respond_with(json_response(json!({
            "realm": "demo",
            "public_key": "MIIB",
            "token-service": "http://kc/realms/demo/protocol/openid-connect",
            "tokens-not-before": 0
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/realms/demo/protocol/openid-connect/certs"))
        .respond_with(json_response(json!({
            "keys": [{ "kid": "k1", "kty": "RSA", "alg": "RS256", "use": "sig" }]
        })))
        .mount(&server)
        .await;

    let issuer = client.tokens().get_issuer(REALM).await.unwrap();
    assert_eq!(issuer.realm.as_deref(), Some("demo"));
    assert!(issuer.token_service.is_some());

    let certs = client.tokens().get_certs(REALM).await.unwrap();
    let keys = certs.keys.unwrap();
    assert_eq!(keys[0].kid.as_deref(), Some("k1"));
    assert_eq!(keys[0].key_use.as_deref(), Some("sig"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| !r.headers.contains_key("authorization")));
}
