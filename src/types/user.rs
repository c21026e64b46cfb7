//! User representations.

use super::render::impl_pretty_display;
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A realm user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Milliseconds since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federation_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disableable_credential_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<HashMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_roles: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_client_id: Option<String>,
    /// Only honoured on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<CredentialRepresentation>>,
}

/// LDAP attributes attached to federated users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "LDAP_ENTRY_DN", skip_serializing_if = "Option::is_none")]
    pub ldap_entry_dn: Option<Vec<String>>,
    #[serde(rename = "LDAP_ID", skip_serializing_if = "Option::is_none")]
    pub ldap_id: Option<Vec<String>>,
}

/// Admin permissions on a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_group_membership: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_roles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impersonate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage: Option<bool>,
}

/// Body of a password reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetPasswordRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A stored credential (password, OTP, client secret).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Group membership of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Parameters of an execute-actions email.
///
/// `user_id` selects the user and `actions` is sent as the body; the
/// remaining fields go to the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteActionsEmail {
    #[serde(skip)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Link lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip)]
    pub actions: Option<Vec<String>>,
}

impl QueryParams for ExecuteActionsEmail {}

/// Parameters of a verify-email request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendVerificationMailParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

impl QueryParams for SendVerificationMailParams {}

/// An active or offline user session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSessionRepresentation {
    /// Client ids keyed by client UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Link between a user and an identity provider account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedIdentityRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiValuedHashMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_factor: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i32>,
}

/// Filters of the user listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_representation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Match `username`, `email` and names exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    /// Attribute query, `key:value key2:value2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl QueryParams for GetUsersParams {}

impl_pretty_display!(
    User,
    Attributes,
    Access,
    SetPasswordRequest,
    CredentialRepresentation,
    UserGroup,
    ExecuteActionsEmail,
    SendVerificationMailParams,
    UserSessionRepresentation,
    FederatedIdentityRepresentation,
    MultiValuedHashMap,
    GetUsersParams,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{bool_p, int32_p, int_p, string_p};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_wire_names() {
        let user = User {
            username: string_p("alice"),
            first_name: string_p("Alice"),
            email_verified: bool_p(true),
            created_timestamp: int_p(1),
            ..Default::default()
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "alice",
                "firstName": "Alice",
                "emailVerified": true,
                "createdTimestamp": 1
            })
        );
    }

    #[test]
    fn test_execute_actions_email_query_skips_body_fields() {
        let params = ExecuteActionsEmail {
            user_id: string_p("u1"),
            client_id: string_p("app"),
            lifespan: int_p(600),
            actions: Some(vec!["UPDATE_PASSWORD".into()]),
            ..Default::default()
        };

        let query = params.to_query_params().unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query["client_id"], "app");
        assert_eq!(query["lifespan"], "600");
        assert_eq!(params.to_string(), "{\n\t\"client_id\": \"app\",\n\t\"lifespan\": 600\n}");
    }

    #[test]
    fn test_get_users_params_query() {
        let params = GetUsersParams {
            username: string_p("alice"),
            exact: bool_p(true),
            first: int32_p(0),
            max: int32_p(10),
            ..Default::default()
        };

        let query = params.to_query_params().unwrap();
        assert_eq!(query["username"], "alice");
        assert_eq!(query["exact"], "true");
        assert_eq!(query["first"], "0");
        assert_eq!(query["max"], "10");
        assert!(!query.contains_key("briefRepresentation"));
    }

    #[test]
    fn test_set_password_request_uses_value() {
        let request = SetPasswordRequest {
            credential_type: string_p("password"),
            temporary: bool_p(false),
            password: string_p("s3cret"),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"type": "password", "temporary": false, "value": "s3cret"})
        );
    }
}
