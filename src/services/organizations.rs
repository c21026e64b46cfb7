//! Organization administration.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{GetOrganizationsParams, OrganizationRepresentation};

/// Service for organization operations.
pub struct OrganizationsService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> OrganizationsService<'a> {
    /// Creates a new organizations service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Creates an organization and returns its id.
    pub async fn create_organization(
        &self,
        token: &str,
        realm: &str,
        organization: &OrganizationRepresentation,
    ) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["organizations"])?;
        self.client.post_created(token, url, organization).await
    }

    /// Lists organizations.
    pub async fn get_organizations(
        &self,
        token: &str,
        realm: &str,
        params: &GetOrganizationsParams,
    ) -> KeycloakResult<Vec<OrganizationRepresentation>> {
        let url = self.client.admin_url(realm, &["organizations"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets an organization.
    pub async fn get_organization_by_id(
        &self,
        token: &str,
        realm: &str,
        organization_id: &str,
    ) -> KeycloakResult<OrganizationRepresentation> {
        let url = self.client.admin_url(realm, &["organizations", organization_id])?;
        self.client.get(token, url).await
    }

    /// Updates the organization identified by `organization.id`.
    pub async fn update_organization(
        &self,
        token: &str,
        realm: &str,
        organization: &OrganizationRepresentation,
    ) -> KeycloakResult<()> {
        let id = required(&organization.id, "organization id")?;
        let url = self.client.admin_url(realm, &["organizations", id])?;
        self.client.put_no_response(token, url, organization).await
    }

    /// Deletes an organization.
    pub async fn delete_organization(&self, token: &str, realm: &str, organization_id: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["organizations", organization_id])?;
        self.client.delete(token, url).await
    }
}
