//! UMA protection API.
//!
//! Every call authenticates with a protection API token (PAT), obtained by
//! the resource server through the client credentials grant.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{
    CreatePermissionTicketParams, GetResourceParams, GetResourcePoliciesParams, GetUserPermissionParams,
    PermissionGrantParams, PermissionGrantResponseRepresentation, PermissionTicketResponseRepresentation,
    ResourcePolicyRepresentation, ResourceRepresentation,
};

/// Service for the UMA protection API.
pub struct ProtectionService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> ProtectionService<'a> {
    /// Creates a new protection service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    fn url(&self, realm: &str, segments: &[&str]) -> KeycloakResult<String> {
        let mut all = vec!["authz", "protection"];
        all.extend_from_slice(segments);
        self.client.realm_url(realm, &all)
    }

    // Resource sets

    /// Registers a resource.
    pub async fn create_resource(
        &self,
        token: &str,
        realm: &str,
        resource: &ResourceRepresentation,
    ) -> KeycloakResult<ResourceRepresentation> {
        let url = self.url(realm, &["resource_set"])?;
        self.client.post(token, url, resource).await
    }

    /// Lists the ids of the resources matching the filters.
    pub async fn get_resource_ids(
        &self,
        token: &str,
        realm: &str,
        params: &GetResourceParams,
    ) -> KeycloakResult<Vec<String>> {
        let url = self.url(realm, &["resource_set"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Lists full resource representations matching the filters.
    pub async fn get_resources(
        &self,
        token: &str,
        realm: &str,
        params: &GetResourceParams,
    ) -> KeycloakResult<Vec<ResourceRepresentation>> {
        let params = GetResourceParams {
            deep: Some(true),
            ..params.clone()
        };
        let url = self.url(realm, &["resource_set"])?;
        self.client.get_with_params(token, url, &params).await
    }

    /// Gets a resource.
    pub async fn get_resource(&self, token: &str, realm: &str, resource_id: &str) -> KeycloakResult<ResourceRepresentation> {
        let url = self.url(realm, &["resource_set", resource_id])?;
        self.client.get(token, url).await
    }

    /// Updates the resource identified by `resource.id`.
    pub async fn update_resource(&self, token: &str, realm: &str, resource: &ResourceRepresentation) -> KeycloakResult<()> {
        let id = required(&resource.id, "resource id")?;
        let url = self.url(realm, &["resource_set", id])?;
        self.client.put_no_response(token, url, resource).await
    }

    /// Deletes a resource.
    pub async fn delete_resource(&self, token: &str, realm: &str, resource_id: &str) -> KeycloakResult<()> {
        let url = self.url(realm, &["resource_set", resource_id])?;
        self.client.delete(token, url).await
    }

    // Permission tickets

    /// Requests a permission ticket for the given resources and scopes.
    pub async fn create_permission_ticket(
        &self,
        token: &str,
        realm: &str,
        permissions: &[CreatePermissionTicketParams],
    ) -> KeycloakResult<PermissionTicketResponseRepresentation> {
        let url = self.url(realm, &["permission"])?;
        self.client.post(token, url, permissions).await
    }

    /// Grants a user access to a resource.
    pub async fn grant_user_permission(
        &self,
        token: &str,
        realm: &str,
        permission: &PermissionGrantParams,
    ) -> KeycloakResult<PermissionGrantResponseRepresentation> {
        let url = self.url(realm, &["permission", "ticket"])?;
        self.client.post(token, url, permission).await
    }

    /// Lists user permission tickets.
    pub async fn get_user_permissions(
        &self,
        token: &str,
        realm: &str,
        params: &GetUserPermissionParams,
    ) -> KeycloakResult<Vec<PermissionGrantResponseRepresentation>> {
        let url = self.url(realm, &["permission", "ticket"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Updates the ticket identified by `permission.ticket_id`.
    pub async fn update_user_permission(
        &self,
        token: &str,
        realm: &str,
        permission: &PermissionGrantParams,
    ) -> KeycloakResult<()> {
        required(&permission.ticket_id, "ticket id")?;
        let url = self.url(realm, &["permission", "ticket"])?;
        self.client.put_no_response(token, url, permission).await
    }

    /// Deletes a user permission ticket.
    pub async fn delete_user_permission(&self, token: &str, realm: &str, ticket_id: &str) -> KeycloakResult<()> {
        let url = self.url(realm, &["permission", "ticket", ticket_id])?;
        self.client.delete(token, url).await
    }

    // User-managed policies

    /// Lists user-managed policies.
    pub async fn get_resource_policies(
        &self,
        token: &str,
        realm: &str,
        params: &GetResourcePoliciesParams,
    ) -> KeycloakResult<Vec<ResourcePolicyRepresentation>> {
        let url = self.url(realm, &["uma-policy"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a user-managed policy.
    pub async fn get_resource_policy(
        &self,
        token: &str,
        realm: &str,
        permission_id: &str,
    ) -> KeycloakResult<ResourcePolicyRepresentation> {
        let url = self.url(realm, &["uma-policy", permission_id])?;
        self.client.get(token, url).await
    }

    /// Attaches a user-managed policy to a resource.
    pub async fn create_resource_policy(
        &self,
        token: &str,
        realm: &str,
        resource_id: &str,
        policy: &ResourcePolicyRepresentation,
    ) -> KeycloakResult<ResourcePolicyRepresentation> {
        let url = self.url(realm, &["uma-policy", resource_id])?;
        self.client.post(token, url, policy).await
    }

    /// Updates a user-managed policy.
    pub async fn update_resource_policy(
        &self,
        token: &str,
        realm: &str,
        permission_id: &str,
        policy: &ResourcePolicyRepresentation,
    ) -> KeycloakResult<()> {
        let url = self.url(realm, &["uma-policy", permission_id])?;
        self.client.put_no_response(token, url, policy).await
    }

    /// Deletes a user-managed policy.
    pub async fn delete_resource_policy(&self, token: &str, realm: &str, permission_id: &str) -> KeycloakResult<()> {
        let url = self.url(realm, &["uma-policy", permission_id])?;
        self.client.delete(token, url).await
    }
}
