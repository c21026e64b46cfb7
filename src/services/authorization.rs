//! Authorization services administration (resource server of a client).

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{
    GetPermissionParams, GetPolicyParams, GetResourceParams, GetScopeParams, PermissionRepresentation,
    PermissionResource, PermissionScope, PolicyRepresentation, ResourceRepresentation,
    ResourceServerRepresentation, ScopeRepresentation,
};
use tracing::instrument;

/// Service for the resource server admin API.
pub struct AuthorizationService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> AuthorizationService<'a> {
    /// Creates a new authorization service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    fn url(&self, realm: &str, id_of_client: &str, segments: &[&str]) -> KeycloakResult<String> {
        let mut all = vec!["clients", id_of_client, "authz", "resource-server"];
        all.extend_from_slice(segments);
        self.client.admin_url(realm, &all)
    }

    /// Gets the authorization settings of a client.
    pub async fn get_resource_server(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
    ) -> KeycloakResult<ResourceServerRepresentation> {
        let url = self.url(realm, id_of_client, &[])?;
        self.client.get(token, url).await
    }

    // Resources

    /// Creates a resource.
    #[instrument(skip(self, token, resource))]
    pub async fn create_resource(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        resource: &ResourceRepresentation,
    ) -> KeycloakResult<ResourceRepresentation> {
        let url = self.url(realm, id_of_client, &["resource"])?;
        self.client.post(token, url, resource).await
    }

    /// Lists resources.
    pub async fn get_resources(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetResourceParams,
    ) -> KeycloakResult<Vec<ResourceRepresentation>> {
        let url = self.url(realm, id_of_client, &["resource"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a resource.
    pub async fn get_resource(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        resource_id: &str,
    ) -> KeycloakResult<ResourceRepresentation> {
        let url = self.url(realm, id_of_client, &["resource", resource_id])?;
        self.client.get(token, url).await
    }

    /// Updates the resource identified by `resource.id`.
    pub async fn update_resource(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        resource: &ResourceRepresentation,
    ) -> KeycloakResult<()> {
        let id = required(&resource.id, "resource id")?;
        let url = self.url(realm, id_of_client, &["resource", id])?;
        self.client.put_no_response(token, url, resource).await
    }

    /// Deletes a resource.
    pub async fn delete_resource(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        resource_id: &str,
    ) -> KeycloakResult<()> {
        let url = self.url(realm, id_of_client, &["resource", resource_id])?;
        self.client.delete(token, url).await
    }

    // Scopes

    /// Creates an authorization scope.
    pub async fn create_scope(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        scope: &ScopeRepresentation,
    ) -> KeycloakResult<ScopeRepresentation> {
        let url = self.url(realm, id_of_client, &["scope"])?;
        self.client.post(token, url, scope).await
    }

    /// Lists authorization scopes.
    pub async fn get_scopes(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetScopeParams,
    ) -> KeycloakResult<Vec<ScopeRepresentation>> {
        let url = self.url(realm, id_of_client, &["scope"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets an authorization scope.
    pub async fn get_scope(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        scope_id: &str,
    ) -> KeycloakResult<ScopeRepresentation> {
        let url = self.url(realm, id_of_client, &["scope", scope_id])?;
        self.client.get(token, url).await
    }

    /// Updates the scope identified by `scope.id`.
    pub async fn update_scope(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        scope: &ScopeRepresentation,
    ) -> KeycloakResult<()> {
        let id = required(&scope.id, "scope id")?;
        let url = self.url(realm, id_of_client, &["scope", id])?;
        self.client.put_no_response(token, url, scope).await
    }

    /// Deletes an authorization scope.
    pub async fn delete_scope(&self, token: &str, realm: &str, id_of_client: &str, scope_id: &str) -> KeycloakResult<()> {
        let url = self.url(realm, id_of_client, &["scope", scope_id])?;
        self.client.delete(token, url).await
    }

    // Policies

    /// Creates a policy of type `policy.policy_type`.
    #[instrument(skip(self, token, policy))]
    pub async fn create_policy(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        policy: &PolicyRepresentation,
    ) -> KeycloakResult<PolicyRepresentation> {
        let policy_type = required(&policy.policy_type, "policy type")?;
        let url = self.url(realm, id_of_client, &["policy", policy_type])?;
        self.client.post(token, url, policy).await
    }

    /// Lists policies.
    pub async fn get_policies(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetPolicyParams,
    ) -> KeycloakResult<Vec<PolicyRepresentation>> {
        let url = self.url(realm, id_of_client, &["policy"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a policy.
    pub async fn get_policy(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        policy_id: &str,
    ) -> KeycloakResult<PolicyRepresentation> {
        let url = self.url(realm, id_of_client, &["policy", policy_id])?;
        self.client.get(token, url).await
    }

    /// Updates the policy identified by `policy.id`.
    pub async fn update_policy(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        policy: &PolicyRepresentation,
    ) -> KeycloakResult<()> {
        let policy_type = required(&policy.policy_type, "policy type")?;
        let id = required(&policy.id, "policy id")?;
        let url = self.url(realm, id_of_client, &["policy", policy_type, id])?;
        self.client.put_no_response(token, url, policy).await
    }

    /// Deletes a policy.
    pub async fn delete_policy(&self, token: &str, realm: &str, id_of_client: &str, policy_id: &str) -> KeycloakResult<()> {
        let url = self.url(realm, id_of_client, &["policy", policy_id])?;
        self.client.delete(token, url).await
    }

    // Permissions

    /// Creates a permission of type `permission.permission_type`.
    #[instrument(skip(self, token, permission))]
    pub async fn create_permission(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        permission: &PermissionRepresentation,
    ) -> KeycloakResult<PermissionRepresentation> {
        let permission_type = required(&permission.permission_type, "permission type")?;
        let url = self.url(realm, id_of_client, &["permission", permission_type])?;
        self.client.post(token, url, permission).await
    }

    /// Lists permissions.
    pub async fn get_permissions(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetPermissionParams,
    ) -> KeycloakResult<Vec<PermissionRepresentation>> {
        let url = self.url(realm, id_of_client, &["permission"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a permission.
    pub async fn get_permission(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        permission_id: &str,
    ) -> KeycloakResult<PermissionRepresentation> {
        let url = self.url(realm, id_of_client, &["permission", permission_id])?;
        self.client.get(token, url).await
    }

    /// Updates the permission identified by `permission.id`.
    pub async fn update_permission(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        permission: &PermissionRepresentation,
    ) -> KeycloakResult<()> {
        let permission_type = required(&permission.permission_type, "permission type")?;
        let id = required(&permission.id, "permission id")?;
        let url = self.url(realm, id_of_client, &["permission", permission_type, id])?;
        self.client.put_no_response(token, url, permission).await
    }

    /// Deletes a permission.
    pub async fn delete_permission(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        permission_id: &str,
    ) -> KeycloakResult<()> {
        let url = self.url(realm, id_of_client, &["permission", permission_id])?;
        self.client.delete(token, url).await
    }

    /// Lists the resources a permission applies to.
    pub async fn get_permission_resources(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        permission_id: &str,
    ) -> KeycloakResult<Vec<PermissionResource>> {
        let url = self.url(realm, id_of_client, &["policy", permission_id, "resources"])?;
        self.client.get(token, url).await
    }

    /// Lists the scopes a permission applies to.
    pub async fn get_permission_scopes(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        permission_id: &str,
    ) -> KeycloakResult<Vec<PermissionScope>> {
        let url = self.url(realm, id_of_client, &["policy", permission_id, "scopes"])?;
        self.client.get(token, url).await
    }

    /// Lists the permissions that depend on a policy.
    pub async fn get_dependent_permissions(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        policy_id: &str,
    ) -> KeycloakResult<Vec<PermissionRepresentation>> {
        let url = self.url(realm, id_of_client, &["policy", policy_id, "dependentPolicies"])?;
        self.client.get(token, url).await
    }
}
