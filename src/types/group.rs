//! Group representations.

use super::render::impl_pretty_display;
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A realm group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Slash separated path from the top level group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<HashMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_roles: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_roles: Option<Vec<String>>,
}

/// Result of the group count endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupsCount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Filters of the group listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGroupsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_representation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl QueryParams for GetGroupsParams {}

/// Paging of the group member listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGroupMembersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_representation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

impl QueryParams for GetGroupMembersParams {}

impl_pretty_display!(Group, GroupsCount, GetGroupsParams, GetGroupMembersParams);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::string_p;

    #[test]
    fn test_group_decodes_sub_groups() {
        let group: Group = serde_json::from_str(
            r#"{"id":"g1","name":"parent","path":"/parent","subGroups":[{"id":"g2","name":"child","path":"/parent/child"}]}"#,
        )
        .unwrap();

        let children = group.sub_groups.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].path, string_p("/parent/child"));
    }

    #[test]
    fn test_groups_count_decode() {
        let count: GroupsCount = serde_json::from_str(r#"{"count":7}"#).unwrap();
        assert_eq!(count.count, Some(7));

        let missing: GroupsCount = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.count, None);
        assert_eq!(missing.to_string(), "{}");
    }
}
