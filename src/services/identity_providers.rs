//! Identity provider administration.

use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::IdentityProviderRepresentation;

/// Service for identity provider operations.
pub struct IdentityProvidersService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> IdentityProvidersService<'a> {
    /// Creates a new identity providers service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Creates an identity provider and returns its alias.
    pub async fn create_identity_provider(
        &self,
        token: &str,
        realm: &str,
        provider: &IdentityProviderRepresentation,
    ) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["identity-provider", "instances"])?;
        self.client.post_created(token, url, provider).await
    }

    /// Lists identity providers.
    pub async fn get_identity_providers(
        &self,
        token: &str,
        realm: &str,
    ) -> KeycloakResult<Vec<IdentityProviderRepresentation>> {
        let url = self.client.admin_url(realm, &["identity-provider", "instances"])?;
        self.client.get(token, url).await
    }

    /// Gets an identity provider by alias.
    pub async fn get_identity_provider(
        &self,
        token: &str,
        realm: &str,
        alias: &str,
    ) -> KeycloakResult<IdentityProviderRepresentation> {
        let url = self
            .client
            .admin_url(realm, &["identity-provider", "instances", alias])?;
        self.client.get(token, url).await
    }

    /// Updates the identity provider currently aliased `alias`.
    pub async fn update_identity_provider(
        &self,
        token: &str,
        realm: &str,
        alias: &str,
        provider: &IdentityProviderRepresentation,
    ) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["identity-provider", "instances", alias])?;
        self.client.put_no_response(token, url, provider).await
    }

    /// Deletes an identity provider.
    pub async fn delete_identity_provider(&self, token: &str, realm: &str, alias: &str) -> KeycloakResult<()> {
        let url = self
            .client
            .admin_url(realm, &["identity-provider", "instances", alias])?;
        self.client.delete(token, url).await
    }
}
