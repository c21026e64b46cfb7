//! Realm roles, client roles and role mappings.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{GetRoleParams, GetUsersByRoleParams, MappingsRepresentation, Role, User};
use tracing::instrument;

/// Service for role operations.
pub struct RolesService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> RolesService<'a> {
    /// Creates a new roles service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    // Realm roles

    /// Creates a realm role and returns its name.
    #[instrument(skip(self, token, role))]
    pub async fn create_realm_role(&self, token: &str, realm: &str, role: &Role) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["roles"])?;
        self.client.post_created(token, url, role).await
    }

    /// Lists realm roles.
    pub async fn get_realm_roles(&self, token: &str, realm: &str, params: &GetRoleParams) -> KeycloakResult<Vec<Role>> {
        let url = self.client.admin_url(realm, &["roles"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a realm role by name.
    pub async fn get_realm_role(&self, token: &str, realm: &str, role_name: &str) -> KeycloakResult<Role> {
        let url = self.client.admin_url(realm, &["roles", role_name])?;
        self.client.get(token, url).await
    }

    /// Gets a role by id.
    pub async fn get_realm_role_by_id(&self, token: &str, realm: &str, role_id: &str) -> KeycloakResult<Role> {
        let url = self.client.admin_url(realm, &["roles-by-id", role_id])?;
        self.client.get(token, url).await
    }

    /// Updates the realm role currently named `role_name`.
    pub async fn update_realm_role(&self, token: &str, realm: &str, role_name: &str, role: &Role) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["roles", role_name])?;
        self.client.put_no_response(token, url, role).await
    }

    /// Deletes a realm role.
    #[instrument(skip(self, token))]
    pub async fn delete_realm_role(&self, token: &str, realm: &str, role_name: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["roles", role_name])?;
        self.client.delete(token, url).await
    }

    /// Lists users holding a realm role.
    pub async fn get_users_by_role(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
        params: &GetUsersByRoleParams,
    ) -> KeycloakResult<Vec<User>> {
        let url = self.client.admin_url(realm, &["roles", role_name, "users"])?;
        self.client.get_with_params(token, url, params).await
    }

    // Composite realm roles

    /// Adds children to a composite realm role.
    pub async fn add_realm_role_composite(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
        roles: &[Role],
    ) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["roles", role_name, "composites"])?;
        self.client.post_no_response(token, url, roles).await
    }

    /// Lists the children of a composite realm role.
    pub async fn get_composite_realm_roles(&self, token: &str, realm: &str, role_name: &str) -> KeycloakResult<Vec<Role>> {
        let url = self.client.admin_url(realm, &["roles", role_name, "composites"])?;
        self.client.get(token, url).await
    }

    /// Removes children from a composite realm role.
    pub async fn delete_realm_role_composite(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
        roles: &[Role],
    ) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["roles", role_name, "composites"])?;
        self.client.delete_with_body(token, url, roles).await
    }

    // Client roles

    /// Creates a client role and returns its name.
    #[instrument(skip(self, token, role))]
    pub async fn create_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role: &Role,
    ) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["clients", id_of_client, "roles"])?;
        self.client.post_created(token, url, role).await
    }

    /// Lists the roles of a client.
    pub async fn get_client_roles(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetRoleParams,
    ) -> KeycloakResult<Vec<Role>> {
        let url = self.client.admin_url(realm, &["clients", id_of_client, "roles"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a client role by name.
    pub async fn get_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role_name: &str,
    ) -> KeycloakResult<Role> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "roles", role_name])?;
        self.client.get(token, url).await
    }

    /// Updates the client role named by `role.name`.
    pub async fn update_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role: &Role,
    ) -> KeycloakResult<()> {
        let name = required(&role.name, "role name")?;
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "roles", name])?;
        self.client.put_no_response(token, url, role).await
    }

    /// Deletes a client role.
    #[instrument(skip(self, token))]
    pub async fn delete_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role_name: &str,
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "roles", role_name])?;
        self.client.delete(token, url).await
    }

    /// Lists users holding a client role.
    pub async fn get_users_by_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role_name: &str,
        params: &GetUsersByRoleParams,
    ) -> KeycloakResult<Vec<User>> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "roles", role_name, "users"])?;
        self.client.get_with_params(token, url, params).await
    }

    // User role mappings

    /// Grants realm roles to a user.
    pub async fn add_realm_role_to_user(&self, token: &str, realm: &str, user_id: &str, roles: &[Role]) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "role-mappings", "realm"])?;
        self.client.post_no_response(token, url, roles).await
    }

    /// Lists the realm roles mapped directly to a user.
    pub async fn get_realm_roles_by_user_id(&self, token: &str, realm: &str, user_id: &str) -> KeycloakResult<Vec<Role>> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "role-mappings", "realm"])?;
        self.client.get(token, url).await
    }

    /// Lists the effective realm roles of a user, composites expanded.
    pub async fn get_composite_realm_roles_by_user_id(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> KeycloakResult<Vec<Role>> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "role-mappings", "realm", "composite"])?;
        self.client.get(token, url).await
    }

    /// Revokes realm roles from a user.
    pub async fn delete_realm_role_from_user(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        roles: &[Role],
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "role-mappings", "realm"])?;
        self.client.delete_with_body(token, url, roles).await
    }

    /// Grants client roles to a user.
    pub async fn add_client_roles_to_user(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        user_id: &str,
        roles: &[Role],
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "role-mappings", "clients", id_of_client])?;
        self.client.post_no_response(token, url, roles).await
    }

    /// Lists the client roles mapped directly to a user.
    pub async fn get_client_roles_by_user_id(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        user_id: &str,
    ) -> KeycloakResult<Vec<Role>> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "role-mappings", "clients", id_of_client])?;
        self.client.get(token, url).await
    }

    /// Lists the effective client roles of a user, composites expanded.
    pub async fn get_composite_client_roles_by_user_id(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        user_id: &str,
    ) -> KeycloakResult<Vec<Role>> {
        let url = self.client.admin_url(
            realm,
            &["users", user_id, "role-mappings", "clients", id_of_client, "composite"],
        )?;
        self.client.get(token, url).await
    }

    /// Revokes client roles from a user.
    pub async fn delete_client_roles_from_user(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        user_id: &str,
        roles: &[Role],
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "role-mappings", "clients", id_of_client])?;
        self.client.delete_with_body(token, url, roles).await
    }

    /// Gets every role mapped to a user.
    pub async fn get_role_mapping_by_user_id(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> KeycloakResult<MappingsRepresentation> {
        let url = self.client.admin_url(realm, &["users", user_id, "role-mappings"])?;
        self.client.get(token, url).await
    }

    // Group role mappings

    /// Grants realm roles to a group.
    pub async fn add_realm_role_to_group(&self, token: &str, realm: &str, group_id: &str, roles: &[Role]) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["groups", group_id, "role-mappings", "realm"])?;
        self.client.post_no_response(token, url, roles).await
    }

    /// Lists the realm roles mapped to a group.
    pub async fn get_realm_roles_by_group_id(&self, token: &str, realm: &str, group_id: &str) -> KeycloakResult<Vec<Role>> {
        let url = self
            .client
            .admin_url(realm, &["groups", group_id, "role-mappings", "realm"])?;
        self.client.get(token, url).await
    }

    /// Revokes realm roles from a group.
    pub async fn delete_realm_role_from_group(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        roles: &[Role],
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["groups", group_id, "role-mappings", "realm"])?;
        self.client.delete_with_body(token, url, roles).await
    }

    /// Gets every role mapped to a group.
    pub async fn get_role_mapping_by_group_id(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
    ) -> KeycloakResult<MappingsRepresentation> {
        let url = self.client.admin_url(realm, &["groups", group_id, "role-mappings"])?;
        self.client.get(token, url).await
    }
}
