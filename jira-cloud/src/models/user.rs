use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Represents a Jira user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  /// `atlassian`, `app` or `customer`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_type: Option<String>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub active: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub time_zone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub locale: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<BTreeMap<String, String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub groups: Option<UserGroupsScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub application_roles: Option<UserApplicationRolesScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupsScheme {
  pub size: Option<i64>,
  pub max_results: Option<i64>,
  #[serde(default)]
  pub items: Vec<UserGroupScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub group_id: Option<String>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserApplicationRolesScheme {
  pub size: Option<i64>,
  pub max_results: Option<i64>,
  #[serde(default)]
  pub items: Vec<ApplicationRoleScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRoleScheme {
  pub key: Option<String>,
  pub name: Option<String>,
}

/// Body for `POST /user`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayloadScheme {
  pub email_address: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  /// Products the user gets access to, e.g. `jira-software`
  #[serde(default)]
  pub products: Vec<String>,
}
