//! User administration.

use super::required;
use crate::client::{with_query, KeycloakClient};
use crate::errors::KeycloakResult;
use crate::types::{
    CredentialRepresentation, ExecuteActionsEmail, FederatedIdentityRepresentation, GetGroupsParams,
    GetUsersParams, Group, SendVerificationMailParams, SetPasswordRequest, User,
    UserSessionRepresentation,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

/// Service for user operations.
pub struct UsersService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> UsersService<'a> {
    /// Creates a new users service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Creates a user and returns its id.
    #[instrument(skip(self, token, user))]
    pub async fn create_user(&self, token: &str, realm: &str, user: &User) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["users"])?;
        self.client.post_created(token, url, user).await
    }

    /// Lists users.
    pub async fn get_users(&self, token: &str, realm: &str, params: &GetUsersParams) -> KeycloakResult<Vec<User>> {
        let url = self.client.admin_url(realm, &["users"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Counts users matching the filters.
    pub async fn get_users_count(&self, token: &str, realm: &str, params: &GetUsersParams) -> KeycloakResult<i64> {
        let url = self.client.admin_url(realm, &["users", "count"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a user.
    pub async fn get_user_by_id(&self, token: &str, realm: &str, user_id: &str) -> KeycloakResult<User> {
        let url = self.client.admin_url(realm, &["users", user_id])?;
        self.client.get(token, url).await
    }

    /// Updates the user identified by `user.id`.
    pub async fn update_user(&self, token: &str, realm: &str, user: &User) -> KeycloakResult<()> {
        let id = required(&user.id, "user id")?;
        let url = self.client.admin_url(realm, &["users", id])?;
        self.client.put_no_response(token, url, user).await
    }

    /// Deletes a user.
    #[instrument(skip(self, token))]
    pub async fn delete_user(&self, token: &str, realm: &str, user_id: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["users", user_id])?;
        self.client.delete(token, url).await
    }

    /// Sets the password of a user.
    #[instrument(skip(self, token, password))]
    pub async fn set_password(
        &self,
        token: &str,
        user_id: &str,
        realm: &str,
        password: &SecretString,
        temporary: bool,
    ) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["users", user_id, "reset-password"])?;
        let request = SetPasswordRequest {
            credential_type: Some("password".to_string()),
            temporary: Some(temporary),
            password: Some(password.expose_secret().clone()),
        };
        self.client.put_no_response(token, url, &request).await
    }

    /// Emails the user a link to perform the required actions.
    pub async fn execute_actions_email(
        &self,
        token: &str,
        realm: &str,
        params: &ExecuteActionsEmail,
    ) -> KeycloakResult<()> {
        let user_id = required(&params.user_id, "user id")?;
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "execute-actions-email"])?;
        let url = with_query(url, params)?;
        let actions = params.actions.clone().unwrap_or_default();
        self.client.put_no_response(token, url, &actions).await
    }

    /// Emails the user an address verification link.
    pub async fn send_verify_email(
        &self,
        token: &str,
        user_id: &str,
        realm: &str,
        params: &SendVerificationMailParams,
    ) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["users", user_id, "send-verify-email"])?;
        let url = with_query(url, params)?;
        self.client.put_empty(token, url).await
    }

    // Groups

    /// Lists the groups of a user.
    pub async fn get_user_groups(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        params: &GetGroupsParams,
    ) -> KeycloakResult<Vec<Group>> {
        let url = self.client.admin_url(realm, &["users", user_id, "groups"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Adds a user to a group.
    pub async fn add_user_to_group(&self, token: &str, realm: &str, user_id: &str, group_id: &str) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "groups", group_id])?;
        self.client.put_empty(token, url).await
    }

    /// Removes a user from a group.
    pub async fn delete_user_from_group(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "groups", group_id])?;
        self.client.delete(token, url).await
    }

    // Sessions

    /// Lists the active sessions of a user.
    pub async fn get_user_sessions(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> KeycloakResult<Vec<UserSessionRepresentation>> {
        let url = self.client.admin_url(realm, &["users", user_id, "sessions"])?;
        self.client.get(token, url).await
    }

    /// Lists the offline sessions of a user for one client.
    pub async fn get_user_offline_sessions(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        id_of_client: &str,
    ) -> KeycloakResult<Vec<UserSessionRepresentation>> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "offline-sessions", id_of_client])?;
        self.client.get(token, url).await
    }

    /// Ends every session of a user.
    pub async fn logout_all_sessions(&self, token: &str, realm: &str, user_id: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["users", user_id, "logout"])?;
        self.client.post_empty_no_response(token, url).await
    }

    /// Ends one session.
    pub async fn logout_user_session(&self, token: &str, realm: &str, session_id: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["sessions", session_id])?;
        self.client.delete(token, url).await
    }

    // Federated identities

    /// Lists the identity provider links of a user.
    pub async fn get_user_federated_identities(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> KeycloakResult<Vec<FederatedIdentityRepresentation>> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "federated-identity"])?;
        self.client.get(token, url).await
    }

    /// Links a user to an identity provider account.
    pub async fn create_user_federated_identity(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        provider_id: &str,
        identity: &FederatedIdentityRepresentation,
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "federated-identity", provider_id])?;
        self.client.post_no_response(token, url, identity).await
    }

    /// Removes an identity provider link.
    pub async fn delete_user_federated_identity(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        provider_id: &str,
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "federated-identity", provider_id])?;
        self.client.delete(token, url).await
    }

    // Credentials

    /// Lists the stored credentials of a user.
    pub async fn get_credentials(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> KeycloakResult<Vec<CredentialRepresentation>> {
        let url = self.client.admin_url(realm, &["users", user_id, "credentials"])?;
        self.client.get(token, url).await
    }

    /// Deletes a stored credential.
    pub async fn delete_credentials(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        credential_id: &str,
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["users", user_id, "credentials", credential_id])?;
        self.client.delete(token, url).await
    }
}
