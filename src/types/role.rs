//! Role and role mapping representations.

use super::render::impl_pretty_display;
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A realm or client role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_param_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composites: Option<CompositesRepresentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_role: Option<bool>,
    /// Realm or client id owning the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, Vec<String>>>,
}

/// Children of a composite role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositesRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<Vec<String>>,
}

/// Realm and client roles of a realm export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolesRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<HashMap<String, Vec<Role>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<Vec<Role>>,
}

/// Full role mapping of a user or group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingsRepresentation {
    /// Keyed by client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_mappings: Option<HashMap<String, ClientMappingsRepresentation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_mappings: Option<Vec<Role>>,
}

/// Client roles mapped to a user or group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientMappingsRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Vec<Role>>,
}

/// Filters of the role listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRoleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_representation: Option<bool>,
}

impl QueryParams for GetRoleParams {}

/// Paging of the users-in-role listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersByRoleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_representation: Option<bool>,
}

impl QueryParams for GetUsersByRoleParams {}

impl_pretty_display!(
    Role,
    CompositesRepresentation,
    RolesRepresentation,
    MappingsRepresentation,
    ClientMappingsRepresentation,
    GetRoleParams,
    GetUsersByRoleParams,
);
