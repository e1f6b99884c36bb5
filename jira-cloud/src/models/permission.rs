use serde::{Deserialize, Serialize};

/// A global or project permission Jira knows about
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionScheme {
  pub key: String,
  pub name: Option<String>,
  /// `GLOBAL` or `PROJECT`
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub description: Option<String>,
}

/// Body for `POST /permissions/check`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCheckPayload {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub global_permissions: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub project_permissions: Vec<BulkProjectPermissionsScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkProjectPermissionsScheme {
  #[serde(default)]
  pub issues: Vec<i64>,
  #[serde(default)]
  pub projects: Vec<i64>,
  pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrantsScheme {
  #[serde(default)]
  pub project_permissions: Vec<BulkProjectPermissionGrantsScheme>,
  #[serde(default)]
  pub global_permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkProjectPermissionGrantsScheme {
  pub permission: String,
  #[serde(default)]
  pub issues: Vec<i64>,
  #[serde(default)]
  pub projects: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermittedProjectsScheme {
  #[serde(default)]
  pub projects: Vec<ProjectIdentifierScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdentifierScheme {
  pub id: i64,
  pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSchemePageScheme {
  #[serde(default)]
  pub permission_schemes: Vec<PermissionSchemeScheme>,
}

/// A permission scheme; also the body for creating and updating one
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSchemeScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<serde_json::Value>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub permissions: Vec<PermissionGrantScheme>,
}

/// A single grant inside a permission scheme
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrantScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub holder: Option<PermissionGrantHolderScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub permission: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrantHolderScheme {
  /// `group`, `user`, `projectRole`, `anyone`, `applicationRole`, ...
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parameter: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
}

/// Body for `POST /permissionscheme/{id}/permission`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrantPayloadScheme {
  pub holder: PermissionGrantHolderScheme,
  pub permission: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSchemeGrantsScheme {
  #[serde(default)]
  pub permissions: Vec<PermissionGrantScheme>,
  pub expand: Option<String>,
}
