//! Group administration.

use super::required;
use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{GetGroupMembersParams, GetGroupsParams, Group, GroupsCount, User};
use crate::utils::p_int64;
use tracing::instrument;

/// Service for group operations.
pub struct GroupsService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> GroupsService<'a> {
    /// Creates a new groups service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    /// Creates a top level group and returns its id.
    #[instrument(skip(self, token, group))]
    pub async fn create_group(&self, token: &str, realm: &str, group: &Group) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["groups"])?;
        self.client.post_created(token, url, group).await
    }

    /// Creates a subgroup of `group_id` and returns its id.
    #[instrument(skip(self, token, group))]
    pub async fn create_child_group(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        group: &Group,
    ) -> KeycloakResult<String> {
        let url = self.client.admin_url(realm, &["groups", group_id, "children"])?;
        self.client.post_created(token, url, group).await
    }

    /// Lists top level groups.
    pub async fn get_groups(&self, token: &str, realm: &str, params: &GetGroupsParams) -> KeycloakResult<Vec<Group>> {
        let url = self.client.admin_url(realm, &["groups"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Counts groups matching the filters.
    pub async fn get_groups_count(&self, token: &str, realm: &str, params: &GetGroupsParams) -> KeycloakResult<i64> {
        let url = self.client.admin_url(realm, &["groups", "count"])?;
        let count: GroupsCount = self.client.get_with_params(token, url, params).await?;
        Ok(p_int64(&count.count))
    }

    /// Gets a group.
    pub async fn get_group(&self, token: &str, realm: &str, group_id: &str) -> KeycloakResult<Group> {
        let url = self.client.admin_url(realm, &["groups", group_id])?;
        self.client.get(token, url).await
    }

    /// Gets a group by its path, e.g. `/parent/child`.
    pub async fn get_group_by_path(&self, token: &str, realm: &str, group_path: &str) -> KeycloakResult<Group> {
        let mut segments = vec!["group-by-path"];
        segments.extend(group_path.split('/').filter(|s| !s.is_empty()));
        let url = self.client.admin_url(realm, &segments)?;
        self.client.get(token, url).await
    }

    /// Lists the subgroups of a group.
    pub async fn get_child_groups(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        params: &GetGroupsParams,
    ) -> KeycloakResult<Vec<Group>> {
        let url = self.client.admin_url(realm, &["groups", group_id, "children"])?;
        self.client.get_with_params(token, url, params).await
    }

    /// Updates the group identified by `group.id`.
    pub async fn update_group(&self, token: &str, realm: &str, group: &Group) -> KeycloakResult<()> {
        let id = required(&group.id, "group id")?;
        let url = self.client.admin_url(realm, &["groups", id])?;
        self.client.put_no_response(token, url, group).await
    }

    /// Deletes a group and its subgroups.
    #[instrument(skip(self, token))]
    pub async fn delete_group(&self, token: &str, realm: &str, group_id: &str) -> KeycloakResult<()> {
        let url = self.client.admin_url(realm, &["groups", group_id])?;
        self.client.delete(token, url).await
    }

    /// Lists the direct members of a group.
    pub async fn get_group_members(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        params: &GetGroupMembersParams,
    ) -> KeycloakResult<Vec<User>> {
        let url = self.client.admin_url(realm, &["groups", group_id, "members"])?;
        self.client.get_with_params(token, url, params).await
    }
}
