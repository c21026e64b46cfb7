//! Realm component administration.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{Component, GetComponentsParams};

/// Service for component operations.
pub struct ComponentsService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> ComponentsService<'a> {
    /// Creates a new components service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Lists components.
    pub async fn get_components(
        &self,
        token: &str,
        realm: &str,
        params: &GetComponentsParams,
    ) -> KeycloakResult<Vec<Component>> {
        let url = self.client.admin_url(realm, &["components"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Gets a component.
    pub async fn get_component(&self, token: &str, realm: &str, component_id: &str) -> KeycloakResult<Component> {
        let url = self.client.admin_url(realm, &["components", component_id])?;
        self.client.get(token, url).await
    }

    /// Creates a component and returns its id.
    pub async fn create_component(&self, token: &str, realm: &str, component: &Component) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["components"])?;
        self.client.post_created(token, url, component).await
    }

    /// Updates the component identified by `component.id`.
    pub async fn update_component(&self, token: &str, realm: &str, component: &Component) -> KeycloakResult<()> {
        let id = required(&component.id, "component id")?;
        let url = self.client.admin_url(realm, &["components", id])?;
        self.client.put_no_response(token, url, component).await
    }

    /// Deletes a component.
    pub async fn delete_component(&self, token: &str, realm: &str, component_id: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["components", component_id])?;
        self.client.delete(token, url).await
    }
}
