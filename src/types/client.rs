//! Client and client scope representations.

use super::authz::ResourceServerRepresentation;
use super::flexible::EnforcedString;
use super::render::impl_pretty_display;
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A realm client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Internal UUID, distinct from `client_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<HashMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_flow_binding_overrides: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_services_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_settings: Option<ResourceServerRepresentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_authenticator_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_client_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_access_grants_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontchannel_logout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_scope_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_flow_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_re_registration_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_client_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_mappers: Option<Vec<ProtocolMapperRepresentation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_client: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_nodes: Option<HashMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_accounts_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_flow_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surrogate_auth_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_origins: Option<Vec<String>>,
}

/// A protocol mapper attached to a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolMapperRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_mapper: Option<String>,
}

/// A client scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(rename = "attributes", skip_serializing_if = "Option::is_none")]
    pub client_scope_attributes: Option<ClientScopeAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_mappers: Option<Vec<ProtocolMappers>>,
}

/// Dotted attributes of a client scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientScopeAttributes {
    #[serde(rename = "consent.screen.text", skip_serializing_if = "Option::is_none")]
    pub consent_screen_text: Option<String>,
    #[serde(rename = "display.on.consent.screen", skip_serializing_if = "Option::is_none")]
    pub display_on_consent_screen: Option<String>,
    #[serde(rename = "include.in.token.scope", skip_serializing_if = "Option::is_none")]
    pub include_in_token_scope: Option<String>,
}

/// A protocol mapper inside a client scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolMappers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_mapper: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_required: Option<bool>,
    #[serde(rename = "config", skip_serializing_if = "Option::is_none")]
    pub protocol_mappers_config: Option<ProtocolMappersConfig>,
}

/// Mapper settings.
///
/// The server stores every value as a string; flags sent by older
/// tooling as JSON booleans are accepted as their literal text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolMappersConfig {
    #[serde(rename = "userinfo.token.claim", skip_serializing_if = "Option::is_none")]
    pub user_info_token_claim: Option<EnforcedString>,
    #[serde(rename = "user.attribute", skip_serializing_if = "Option::is_none")]
    pub user_attribute: Option<String>,
    #[serde(rename = "id.token.claim", skip_serializing_if = "Option::is_none")]
    pub id_token_claim: Option<EnforcedString>,
    #[serde(rename = "access.token.claim", skip_serializing_if = "Option::is_none")]
    pub access_token_claim: Option<EnforcedString>,
    #[serde(rename = "claim.name", skip_serializing_if = "Option::is_none")]
    pub claim_name: Option<String>,
    #[serde(rename = "claim.value", skip_serializing_if = "Option::is_none")]
    pub claim_value: Option<String>,
    #[serde(rename = "jsonType.label", skip_serializing_if = "Option::is_none")]
    pub json_type_label: Option<String>,
    #[serde(rename = "friendly.name", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(rename = "attribute.name", skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(rename = "included.client.audience", skip_serializing_if = "Option::is_none")]
    pub included_client_audience: Option<String>,
    #[serde(rename = "included.custom.audience", skip_serializing_if = "Option::is_none")]
    pub included_custom_audience: Option<String>,
    #[serde(rename = "multivalued", skip_serializing_if = "Option::is_none")]
    pub multivalued: Option<EnforcedString>,
    #[serde(rename = "full.path", skip_serializing_if = "Option::is_none")]
    pub full_path: Option<EnforcedString>,
    #[serde(rename = "usermodel.realmRoleMapping.rolePrefix", skip_serializing_if = "Option::is_none")]
    pub user_realm_role_mapping_role_prefix: Option<String>,
    #[serde(rename = "usermodel.clientRoleMapping.rolePrefix", skip_serializing_if = "Option::is_none")]
    pub user_client_role_mapping_role_prefix: Option<String>,
    #[serde(rename = "usermodel.clientRoleMapping.clientId", skip_serializing_if = "Option::is_none")]
    pub user_client_role_mapping_client_id: Option<String>,
}

/// Filters of the client listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClientsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    /// Treat `client_id` as a substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewable_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl QueryParams for GetClientsParams {}

/// Paging of the client session listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetClientUserSessionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

impl QueryParams for GetClientUserSessionsParams {}

impl_pretty_display!(
    Client,
    ProtocolMapperRepresentation,
    ClientScope,
    ClientScopeAttributes,
    ProtocolMappers,
    ProtocolMappersConfig,
    GetClientsParams,
    GetClientUserSessionsParams,
);
