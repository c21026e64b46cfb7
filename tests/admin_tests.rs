//! Integration tests for the realm administration services.

mod common;

use common::*;
use integrations_keycloak::{
    ExecuteActionsEmail, GetClientsParams, GetGroupsParams, GetUsersParams, Group, KeycloakErrorKind,
    RealmRepresentation, Role, SecretString, User,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, query_param};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_create_user_returns_location_id() {
    let (server, client) = setup().await;

    admin_mock("POST", "/users")
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "username": "alice", "enabled": true })))
        .respond_with(created_response(&format!(
            "{}/admin/realms/demo/users/5f1c-42",
            server.uri()
        )))
        .expect(1)
        .mount(&server)
        .await;

    let user = User {
        username: Some("alice".to_string()),
        enabled: Some(true),
        ..Default::default()
    };
    let id = client.users().create_user(TOKEN, REALM, &user).await.unwrap();

    assert_eq!(id, "5f1c-42");
}

#[tokio::test]
async fn test_create_without_location_is_rejected() {
    let (server, client) = setup().await;

    admin_mock("POST", "/users")
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let err = client
        .users()
        .create_user(TOKEN, REALM, &User::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), KeycloakErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_duplicate_user_is_a_conflict() {
    let (server, client) = setup().await;

    admin_mock("POST", "/users")
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "errorMessage": "User exists with same username" })),
        )
        .mount(&server)
        .await;

    let err = client
        .users()
        .create_user(TOKEN, REALM, &User::default())
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(err.message(), "409 Conflict: User exists with same username");
}

#[tokio::test]
async fn test_get_users_sends_filters() {
    let (server, client) = setup().await;

    admin_mock("GET", "/users")
        .and(query_param("search", "al ice"))
        .and(query_param("enabled", "true"))
        .respond_with(json_response(json!([
            { "id": "u1", "username": "alice", "emailVerified": false }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = GetUsersParams {
        search: Some("al ice".to_string()),
        enabled: Some(true),
        ..Default::default()
    };
    let users = client.users().get_users(TOKEN, REALM, &params).await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id.as_deref(), Some("u1"));
    assert_eq!(users[0].email_verified, Some(false));
}

#[tokio::test]
async fn test_get_users_count() {
    let (server, client) = setup().await;

    admin_mock("GET", "/users/count")
        .respond_with(json_response(json!(42)))
        .mount(&server)
        .await;

    let count = client
        .users()
        .get_users_count(TOKEN, REALM, &GetUsersParams::default())
        .await
        .unwrap();

    assert_eq!(count, 42);
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let (server, client) = setup().await;

    admin_mock("GET", "/users/nobody")
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "User not found" })))
        .mount(&server)
        .await;

    let err = client
        .users()
        .get_user_by_id(TOKEN, REALM, "nobody")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.message(), "404 Not Found: User not found");
}

#[tokio::test]
async fn test_update_user_requires_id() {
    let (_server, client) = setup().await;

    let err = client
        .users()
        .update_user(TOKEN, REALM, &User::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), KeycloakErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_set_password_body() {
    let (server, client) = setup().await;

    admin_mock("PUT", "/users/u1/reset-password")
        .and(body_json(json!({ "type": "password", "value": "n3w", "temporary": false })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .users()
        .set_password(TOKEN, "u1", REALM, &SecretString::new("n3w".to_string()), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_execute_actions_email_splits_query_and_body() {
    let (server, client) = setup().await;

    admin_mock("PUT", "/users/u1/execute-actions-email")
        .and(query_param("client_id", "app"))
        .and(query_param("lifespan", "600"))
        .and(body_json(json!(["UPDATE_PASSWORD", "VERIFY_EMAIL"])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let params = ExecuteActionsEmail {
        user_id: Some("u1".to_string()),
        client_id: Some("app".to_string()),
        lifespan: Some(600),
        actions: Some(vec!["UPDATE_PASSWORD".to_string(), "VERIFY_EMAIL".to_string()]),
        ..Default::default()
    };
    client
        .users()
        .execute_actions_email(TOKEN, REALM, &params)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_group_count_and_path_lookup() {
    let (server, client) = setup().await;

    admin_mock("GET", "/groups/count")
        .and(query_param("search", "eng"))
        .respond_with(json_response(json!({ "count": 3 })))
        .mount(&server)
        .await;
    admin_mock("GET", "/group-by-path/eng/platform")
        .respond_with(json_response(json!({
            "id": "g2",
            "name": "platform",
            "path": "/eng/platform",
            "subGroups": []
        })))
        .mount(&server)
        .await;

    let params = GetGroupsParams {
        search: Some("eng".to_string()),
        ..Default::default()
    };
    let count = client.groups().get_groups_count(TOKEN, REALM, &params).await.unwrap();
    assert_eq!(count, 3);

    let group = client
        .groups()
        .get_group_by_path(TOKEN, REALM, "/eng/platform")
        .await
        .unwrap();
    assert_eq!(group.path.as_deref(), Some("/eng/platform"));
    assert_eq!(group.sub_groups, Some(vec![]));
}

#[tokio::test]
async fn test_group_count_without_field_is_zero() {
    let (server, client) = setup().await;

    admin_mock("GET", "/groups/count")
        .respond_with(json_response(json!({})))
        .mount(&server)
        .await;

    let count = client
        .groups()
        .get_groups_count(TOKEN, REALM, &GetGroupsParams::default())
        .await
        .unwrap();

    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_child_group() {
    let (server, client) = setup().await;

    admin_mock("POST", "/groups/g1/children")
        .and(body_json(json!({ "name": "child" })))
        .respond_with(created_response("http://kc/admin/realms/demo/groups/g9"))
        .mount(&server)
        .await;

    let group = Group {
        name: Some("child".to_string()),
        ..Default::default()
    };
    let id = client
        .groups()
        .create_child_group(TOKEN, REALM, "g1", &group)
        .await
        .unwrap();

    assert_eq!(id, "g9");
}

#[tokio::test]
async fn test_realm_role_mappings() {
    let (server, client) = setup().await;

    let roles = vec![Role {
        id: Some("r1".to_string()),
        name: Some("viewer".to_string()),
        ..Default::default()
    }];

    admin_mock("POST", "/users/u1/role-mappings/realm")
        .and(body_json(json!([{ "id": "r1", "name": "viewer" }])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    admin_mock("DELETE", "/users/u1/role-mappings/realm")
        .and(body_json(json!([{ "id": "r1", "name": "viewer" }])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    admin_mock("GET", "/users/u1/role-mappings")
        .respond_with(json_response(json!({
            "realmMappings": [{ "id": "r1", "name": "viewer" }],
            "clientMappings": {
                "app": { "id": "c1", "client": "app", "mappings": [{ "name": "editor" }] }
            }
        })))
        .mount(&server)
        .await;

    client
        .roles()
        .add_realm_role_to_user(TOKEN, REALM, "u1", &roles)
        .await
        .unwrap();
    client
        .roles()
        .delete_realm_role_from_user(TOKEN, REALM, "u1", &roles)
        .await
        .unwrap();

    let mappings = client
        .roles()
        .get_role_mapping_by_user_id(TOKEN, REALM, "u1")
        .await
        .unwrap();
    assert_eq!(mappings.realm_mappings.unwrap().len(), 1);
    assert!(mappings.client_mappings.unwrap().contains_key("app"));
}

#[tokio::test]
async fn test_get_clients_by_client_id() {
    let (server, client) = setup().await;

    admin_mock("GET", "/clients")
        .and(query_param("clientId", "web-app"))
        .respond_with(json_response(json!([
            { "id": "c1", "clientId": "web-app", "publicClient": true }
        ])))
        .mount(&server)
        .await;

    let params = GetClientsParams {
        client_id: Some("web-app".to_string()),
        ..Default::default()
    };
    let clients = client.clients().get_clients(TOKEN, REALM, &params).await.unwrap();

    assert_eq!(clients[0].id.as_deref(), Some("c1"));
    assert_eq!(clients[0].public_client, Some(true));
}

#[tokio::test]
async fn test_regenerate_client_secret() {
    let (server, client) = setup().await;

    admin_mock("POST", "/clients/c1/client-secret")
        .respond_with(json_response(json!({ "type": "secret", "value": "s3cret" })))
        .mount(&server)
        .await;

    let secret = client
        .clients()
        .regenerate_client_secret(TOKEN, REALM, "c1")
        .await
        .unwrap();

    assert_eq!(secret.value.as_deref(), Some("s3cret"));
}

#[tokio::test]
async fn test_realm_lifecycle() {
    let (server, client) = setup().await;

    wiremock::Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::path("/admin/realms"))
        .and(body_json(json!({ "realm": "fresh", "enabled": true })))
        .respond_with(created_response("http://kc/admin/realms/fresh"))
        .expect(1)
        .mount(&server)
        .await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/admin/serverinfo"))
        .respond_with(json_response(json!({
            "systemInfo": { "version": "26.0.0" }
        })))
        .mount(&server)
        .await;
    admin_mock("POST", "/clear-realm-cache")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let realm = RealmRepresentation {
        realm: Some("fresh".to_string()),
        enabled: Some(true),
        ..Default::default()
    };
    let name = client.realms().create_realm(TOKEN, &realm).await.unwrap();
    assert_eq!(name, "fresh");

    let info = client.realms().get_server_info(TOKEN).await.unwrap();
    assert_eq!(
        info.system_info.and_then(|s| s.version).as_deref(),
        Some("26.0.0")
    );

    client.realms().clear_realm_cache(TOKEN, REALM).await.unwrap();
}
