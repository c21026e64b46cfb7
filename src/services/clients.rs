//! Client administration.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{
    Client, ClientScope, CredentialRepresentation, GetClientUserSessionsParams, GetClientsParams,
    ProtocolMapperRepresentation, User, UserSessionRepresentation,
};
use tracing::instrument;

/// Service for client operations.
///
/// `id_of_client` is the internal UUID of a client, not its `clientId`.
pub struct ClientsService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> ClientsService<'a> {
    /// Creates a new clients service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Creates a client and returns its id.
    #[instrument(skip(self, token, new_client))]
    pub async fn create_client(&self, token: &str, realm: &str, new_client: &Client) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["clients"])?;
        self.client.post_created(token, url, new_client).await
    }

    /// Lists clients.
    pub async fn get_clients(
        &self,
        token: &str,
        realm: &str,
        params: &GetClientsParams,
    ) -> KeycloakResult<Vec<Client>> {
        let url = self.client.admin_url(realm, &["clients"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a client.
    pub async fn get_client(&self, token: &str, realm: &str, id_of_client: &str) -> KeycloakResult<Client> {
        let url = self.client.admin_url(realm, &["clients", id_of_client])?;
        self.client.get(token, url).await
    }

    /// Gets the registration view of a client by its `clientId`.
    pub async fn get_client_representation(
        &self,
        token: &str,
        realm: &str,
        client_id: &str,
    ) -> KeycloakResult<Client> {
        let url = self
            .client
            .realm_url(realm, &["clients-registrations", "default", client_id])?;
        self.client.get(token, url).await
    }

    /// Updates the client identified by `updated.id`.
    pub async fn update_client(&self, token: &str, realm: &str, updated: &Client) -> KeycloakResult<()> {
        let id = required(&updated.id, "client id")?;
        let url = self.client.admin_url(realm, &["clients", id])?;
        self.client.put_no_response(token, url, updated).await
    }

    /// Deletes a client.
    #[instrument(skip(self, token))]
    pub async fn delete_client(&self, token: &str, realm: &str, id_of_client: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["clients", id_of_client])?;
        self.client.delete(token, url).await
    }

    /// Gets the secret of a confidential client.
    pub async fn get_client_secret(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
    ) -> KeycloakResult<CredentialRepresentation> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "client-secret"])?;
        self.client.get(token, url).await
    }

    /// Generates a new secret for a confidential client.
    pub async fn regenerate_client_secret(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
    ) -> KeycloakResult<CredentialRepresentation> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "client-secret"])?;
        self.client.post_empty(token, url).await
    }

    /// Gets the service account user of a client.
    pub async fn get_client_service_account(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
    ) -> KeycloakResult<User> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "service-account-user"])?;
        self.client.get(token, url).await
    }

    /// Lists the user sessions of a client.
    pub async fn get_client_user_sessions(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetClientUserSessionsParams,
    ) -> KeycloakResult<Vec<UserSessionRepresentation>> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "user-sessions"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Lists the offline sessions of a client.
    pub async fn get_client_offline_sessions(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetClientUserSessionsParams,
    ) -> KeycloakResult<Vec<UserSessionRepresentation>> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "offline-sessions"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Adds a protocol mapper to a client and returns its id.
    pub async fn create_client_protocol_mapper(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        mapper: &ProtocolMapperRepresentation,
    ) -> KeycloakResult<String> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "protocol-mappers", "models"])?;
        self.client.post_created(token, url, mapper).await
    }

    /// Removes a protocol mapper from a client.
    pub async fn delete_client_protocol_mapper(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        mapper_id: &str,
    ) -> KeycloakResult<()> {
        let url = self.client.admin_url(
            realm,
            &["clients", id_of_client, "protocol-mappers", "models", mapper_id],
        )?;
        self.client.delete(token, url).await
    }

    /// Lists the default client scopes of a client.
    pub async fn get_client_default_scopes(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
    ) -> KeycloakResult<Vec<ClientScope>> {
        let url = self
            .client
            .admin_url(realm, &["clients", id_of_client, "default-client-scopes"])?;
        self.client.get(token, url).await
    }

    /// Makes a client scope a default scope of a client.
    pub async fn add_default_scope_to_client(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        scope_id: &str,
    ) -> KeycloakResult<()> {
        let url = self.client.admin_url(
            realm,
            &["clients", id_of_client, "default-client-scopes", scope_id],
        )?;
        self.client.put_empty(token, url).await
    }

    /// Removes a default client scope from a client.
    pub async fn remove_default_scope_from_client(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        scope_id: &str,
    ) -> KeycloakResult<()> {
        let url = self.client.admin_url(
            realm,
            &["clients", id_of_client, "default-client-scopes", scope_id],
        )?;
        self.client.delete(token, url).await
    }
}
