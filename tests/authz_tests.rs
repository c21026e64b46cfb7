//! Integration tests for authorization services, the UMA protection API and
//! the remaining realm administration endpoints.

mod common;

use common::*;
use integrations_keycloak::{
    Component, CreatePermissionTicketParams, DecisionStrategy, GetComponentsParams, GetResourceParams,
    GetUserPermissionParams, IdentityProviderRepresentation, KeycloakErrorKind, Logic,
    OrganizationRepresentation, PermissionGrantParams, PolicyRepresentation, ResourceRepresentation,
    RoleDefinition, RolePolicyRepresentation,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, ResponseTemplate};

const RESOURCE_SERVER: &str = "/clients/c1/authz/resource-server";

fn protection_mock(http_method: &str, protection_path: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(format!("/realms/{}/authz/protection{}", REALM, protection_path)))
        .and(header("Authorization", "Bearer pat"))
}

#[tokio::test]
async fn test_create_resource_in_resource_server() {
    let (server, client) = setup().await;

    admin_mock("POST", &format!("{}/resource", RESOURCE_SERVER))
        .and(body_json(json!({ "name": "doc", "uris": ["/docs/*"] })))
        .respond_with(json_response(json!({ "_id": "r1", "name": "doc", "uris": ["/docs/*"] })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ResourceRepresentation {
        name: Some("doc".to_string()),
        uris: Some(vec!["/docs/*".to_string()]),
        ..Default::default()
    };
    let created = client
        .authorization()
        .create_resource(TOKEN, REALM, "c1", &resource)
        .await
        .unwrap();

    assert_eq!(created.id.as_deref(), Some("r1"));
}

#[tokio::test]
async fn test_create_role_policy_posts_to_typed_path() {
    let (server, client) = setup().await;

    admin_mock("POST", &format!("{}/policy/role", RESOURCE_SERVER))
        .and(body_json(json!({
            "name": "admins",
            "type": "role",
            "logic": "POSITIVE",
            "decisionStrategy": "UNANIMOUS",
            "roles": [{ "id": "r-admin", "required": true }]
        })))
        .respond_with(json_response(json!({ "id": "p1", "name": "admins", "type": "role" })))
        .expect(1)
        .mount(&server)
        .await;

    let policy = PolicyRepresentation {
        name: Some("admins".to_string()),
        policy_type: Some("role".to_string()),
        logic: Some(Logic::Positive),
        decision_strategy: Some(DecisionStrategy::Unanimous),
        role_policy: RolePolicyRepresentation {
            roles: Some(vec![RoleDefinition {
                id: Some("r-admin".to_string()),
                required: Some(true),
            }]),
        },
        ..Default::default()
    };
    let created = client
        .authorization()
        .create_policy(TOKEN, REALM, "c1", &policy)
        .await
        .unwrap();

    assert_eq!(created.id.as_deref(), Some("p1"));
}

#[tokio::test]
async fn test_create_policy_requires_type() {
    let (_server, client) = setup().await;

    let err = client
        .authorization()
        .create_policy(TOKEN, REALM, "c1", &PolicyRepresentation::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), KeycloakErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_permission_resources_and_dependents() {
    let (server, client) = setup().await;

    admin_mock("GET", &format!("{}/policy/perm1/resources", RESOURCE_SERVER))
        .respond_with(json_response(json!([{ "_id": "r1", "name": "doc" }])))
        .mount(&server)
        .await;
    admin_mock("GET", &format!("{}/policy/p1/dependentPolicies", RESOURCE_SERVER))
        .respond_with(json_response(json!([{ "id": "perm1", "type": "resource" }])))
        .mount(&server)
        .await;

    let resources = client
        .authorization()
        .get_permission_resources(TOKEN, REALM, "c1", "perm1")
        .await
        .unwrap();
    assert_eq!(resources[0].resource_id.as_deref(), Some("r1"));

    let dependents = client
        .authorization()
        .get_dependent_permissions(TOKEN, REALM, "c1", "p1")
        .await
        .unwrap();
    assert_eq!(dependents[0].permission_type.as_deref(), Some("resource"));
}

#[tokio::test]
async fn test_protection_resource_ids_and_full_listing() {
    let (server, client) = setup().await;

    protection_mock("GET", "/resource_set")
        .and(query_param("deep", "true"))
        .respond_with(json_response(json!([{ "_id": "r1", "name": "doc" }])))
        .mount(&server)
        .await;
    protection_mock("GET", "/resource_set")
        .and(query_param("name", "doc"))
        .respond_with(json_response(json!(["r1"])))
        .mount(&server)
        .await;

    let params = GetResourceParams {
        name: Some("doc".to_string()),
        ..Default::default()
    };
    let ids = client
        .protection()
        .get_resource_ids("pat", REALM, &params)
        .await
        .unwrap();
    assert_eq!(ids, vec!["r1".to_string()]);

    let resources = client
        .protection()
        .get_resources("pat", REALM, &GetResourceParams::default())
        .await
        .unwrap();
    assert_eq!(resources[0].name.as_deref(), Some("doc"));
}

#[tokio::test]
async fn test_create_permission_ticket() {
    let (server, client) = setup().await;

    protection_mock("POST", "/permission")
        .and(body_json(json!([{ "resource_id": "r1", "resource_scopes": ["read"] }])))
        .respond_with(json_response(json!({ "ticket": "t-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let permissions = vec![CreatePermissionTicketParams {
        resource_id: Some("r1".to_string()),
        resource_scopes: Some(vec!["read".to_string()]),
        ..Default::default()
    }];
    let response = client
        .protection()
        .create_permission_ticket("pat", REALM, &permissions)
        .await
        .unwrap();

    assert_eq!(response.ticket.as_deref(), Some("t-1"));
}

#[tokio::test]
async fn test_user_permission_tickets() {
    let (server, client) = setup().await;

    protection_mock("POST", "/permission/ticket")
        .and(body_json(json!({ "resource": "r1", "requester": "u2", "granted": true, "scopeName": "read" })))
        .respond_with(json_response(json!({ "id": "t1", "resource": "r1", "granted": true })))
        .expect(1)
        .mount(&server)
        .await;
    protection_mock("GET", "/permission/ticket")
        .and(query_param("resourceId", "r1"))
        .and(query_param("returnNames", "true"))
        .respond_with(json_response(json!([{ "id": "t1", "resource": "r1" }])))
        .mount(&server)
        .await;
    protection_mock("DELETE", "/permission/ticket/t1")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let grant = PermissionGrantParams {
        resource_id: Some("r1".to_string()),
        requester: Some("u2".to_string()),
        granted: Some(true),
        scope_name: Some("read".to_string()),
        ..Default::default()
    };
    let granted = client
        .protection()
        .grant_user_permission("pat", REALM, &grant)
        .await
        .unwrap();
    assert_eq!(granted.id.as_deref(), Some("t1"));

    let params = GetUserPermissionParams {
        resource_id: Some("r1".to_string()),
        return_names: Some(true),
        ..Default::default()
    };
    let tickets = client
        .protection()
        .get_user_permissions("pat", REALM, &params)
        .await
        .unwrap();
    assert_eq!(tickets.len(), 1);

    client
        .protection()
        .delete_user_permission("pat", REALM, "t1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_user_permission_requires_ticket_id() {
    let (_server, client) = setup().await;

    let err = client
        .protection()
        .update_user_permission("pat", REALM, &PermissionGrantParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), KeycloakErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_components() {
    let (server, client) = setup().await;

    admin_mock("GET", "/components")
        .and(query_param("type", "org.keycloak.keys.KeyProvider"))
        .respond_with(json_response(json!([
            { "id": "k1", "name": "rsa-generated", "config": { "priority": ["100"] } }
        ])))
        .mount(&server)
        .await;
    admin_mock("POST", "/components")
        .respond_with(created_response("http://kc/admin/realms/demo/components/k2"))
        .mount(&server)
        .await;

    let params = GetComponentsParams {
        provider_type: Some("org.keycloak.keys.KeyProvider".to_string()),
        ..Default::default()
    };
    let components = client
        .components()
        .get_components(TOKEN, REALM, &params)
        .await
        .unwrap();
    assert_eq!(components[0].name.as_deref(), Some("rsa-generated"));

    let component = Component {
        name: Some("hmac".to_string()),
        ..Default::default()
    };
    let id = client
        .components()
        .create_component(TOKEN, REALM, &component)
        .await
        .unwrap();
    assert_eq!(id, "k2");
}

#[tokio::test]
async fn test_identity_provider_by_alias() {
    let (server, client) = setup().await;

    admin_mock("POST", "/identity-provider/instances")
        .and(body_json(json!({ "alias": "github", "providerId": "github", "enabled": true })))
        .respond_with(created_response("http://kc/admin/realms/demo/identity-provider/instances/github"))
        .mount(&server)
        .await;
    admin_mock("DELETE", "/identity-provider/instances/github")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let provider = IdentityProviderRepresentation {
        alias: Some("github".to_string()),
        provider_id: Some("github".to_string()),
        enabled: Some(true),
        ..Default::default()
    };
    let alias = client
        .identity_providers()
        .create_identity_provider(TOKEN, REALM, &provider)
        .await
        .unwrap();
    assert_eq!(alias, "github");

    client
        .identity_providers()
        .delete_identity_provider(TOKEN, REALM, "github")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_organization_update_uses_id() {
    let (server, client) = setup().await;

    admin_mock("PUT", "/organizations/o1")
        .and(body_json(json!({ "id": "o1", "name": "Acme" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let organization = OrganizationRepresentation {
        id: Some("o1".to_string()),
        name: Some("Acme".to_string()),
        ..Default::default()
    };
    client
        .organizations()
        .update_organization(TOKEN, REALM, &organization)
        .await
        .unwrap();
}
