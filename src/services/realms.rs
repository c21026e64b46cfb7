//! Realm administration.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{KeyStoreConfig, RealmRepresentation, ServerInfoRepresentation};
use tracing::instrument;

/// Service for realm operations.
pub struct RealmsService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> RealmsService<'a> {
    /// Creates a new realms service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Gets a realm.
    pub async fn get_realm(&self, token: &str, realm: &str) -> KeycloakResult<RealmRepresentation> {
        let url = self.client.admin_url(realm, &[])?;
        self.client.get(token, url).await
    }

    /// Lists all realms visible to the token.
    pub async fn get_realms(&self, token: &str) -> KeycloakResult<Vec<RealmRepresentation>> {
        let url = self.client.admin_realms_url(&[])?;
        self.client.get(token, url).await
    }

    /// Creates a realm and returns its name.
    #[instrument(skip(self, token, realm))]
    pub async fn create_realm(&self, token: &str, realm: &RealmRepresentation) -> KeycloakResult<String> {
        let url = self.client.admin_realms_url(&[])?;
        self.client.post_created(token, url, realm).await
    }

    /// Updates the realm named by `realm.realm`.
    pub async fn update_realm(&self, token: &str, realm: &RealmRepresentation) -> KeycloakResult<()> {
        let name = required(&realm.realm, "realm name")?;
        let url = self.client.admin_url(name, &[])?;
        self.client.put_no_response(token, url, realm).await
    }

    /// Deletes a realm.
    #[instrument(skip(self, token))]
    pub async fn delete_realm(&self, token: &str, realm: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &[])?;
        self.client.delete(token, url).await
    }

    /// Clears the realm cache.
    pub async fn clear_realm_cache(&self, token: &str, realm: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["clear-realm-cache"])?;
        self.client.post_empty_no_response(token, url).await
    }

    /// Clears the user cache.
    pub async fn clear_user_cache(&self, token: &str, realm: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["clear-user-cache"])?;
        self.client.post_empty_no_response(token, url).await
    }

    /// Clears the cache of external public keys.
    pub async fn clear_keys_cache(&self, token: &str, realm: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["clear-keys-cache"])?;
        self.client.post_empty_no_response(token, url).await
    }

    /// Gets the keys of a realm.
    pub async fn get_key_store_config(&self, token: &str, realm: &str) -> KeycloakResult<KeyStoreConfig> {
        let url = self.client.admin_url(realm, &["keys"])?;
        self.client.get(token, url).await
    }

    /// Gets the server info.
    pub async fn get_server_info(&self, token: &str) -> KeycloakResult<ServerInfoRepresentation> {
        let url = self.client.admin_root_url(&["serverinfo"])?;
        self.client.get(token, url).await
    }
}
