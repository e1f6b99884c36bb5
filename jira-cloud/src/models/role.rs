use serde::{Deserialize, Serialize};

/// Role entry of `GET /project/{key}/role`, with the id recovered from its URL
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRoleLinkScheme {
  pub id: i64,
  pub name: String,
  #[serde(rename = "self")]
  pub self_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRoleScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub actors: Vec<RoleActorScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<serde_json::Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub translated_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub current_user_role: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub admin: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role_configurable: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<bool>,
}

/// User or group attached to a project role
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleActorScheme {
  pub id: Option<i64>,
  pub display_name: Option<String>,
  /// `atlassian-user-role-actor` or `atlassian-group-role-actor`
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub name: Option<String>,
  pub avatar_url: Option<String>,
  pub actor_user: Option<RoleActorUserScheme>,
  pub actor_group: Option<RoleActorGroupScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleActorUserScheme {
  pub account_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleActorGroupScheme {
  pub name: Option<String>,
  pub display_name: Option<String>,
  pub group_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRoleDetailScheme {
  pub id: i64,
  pub name: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub description: Option<String>,
  pub translated_name: Option<String>,
  pub admin: Option<bool>,
  pub default: Option<bool>,
  pub role_configurable: Option<bool>,
  pub scope: Option<serde_json::Value>,
}

/// Body for `POST /role`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRolePayloadScheme {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}
