//! Client scope administration.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::ClientScope;

/// Service for client scope operations.
pub struct ClientScopesService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> ClientScopesService<'a> {
    /// Creates a new client scopes service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Creates a client scope and returns its id.
    pub async fn create_client_scope(&self, token: &str, realm: &str, scope: &ClientScope) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["client-scopes"])?;
        self.client.post_created(token, url, scope).await
    }

    /// Lists client scopes.
    pub async fn get_client_scopes(&self, token: &str, realm: &str) -> KeycloakResult<Vec<ClientScope>> {
        let url = self.client.admin_url(realm, &["client-scopes"])?;
        self.client.get(token, url).await
    }

    /// Gets a client scope.
    pub async fn get_client_scope(&self, token: &str, realm: &str, scope_id: &str) -> KeycloakResult<ClientScope> {
        let url = self.client.admin_url(realm, &["client-scopes", scope_id])?;
        self.client.get(token, url).await
    }

    /// Updates the client scope identified by `scope.id`.
    pub async fn update_client_scope(&self, token: &str, realm: &str, scope: &ClientScope) -> KeycloakResult<()> {
        let id = required(&scope.id, "client scope id")?;
        let url = self.client.admin_url(realm, &["client-scopes", id])?;
        self.client.put_no_response(token, url, scope).await
    }

    /// Deletes a client scope.
    pub async fn delete_client_scope(&self, token: &str, realm: &str, scope_id: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["client-scopes", scope_id])?;
        self.client.delete(token, url).await
    }
}
