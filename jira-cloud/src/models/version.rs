use serde::{Deserialize, Serialize};

/// Represents a project version (fix version / release)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionScheme {
  pub id: Option<String>,
  pub name: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub description: Option<String>,
  pub expand: Option<String>,
  pub archived: Option<bool>,
  pub released: Option<bool>,
  pub overdue: Option<bool>,
  pub start_date: Option<String>,
  pub release_date: Option<String>,
  pub user_start_date: Option<String>,
  pub user_release_date: Option<String>,
  pub project_id: Option<i64>,
  pub issues_status_for_fix_version: Option<VersionIssuesStatusScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionIssuesStatusScheme {
  pub unmapped: Option<i64>,
  pub to_do: Option<i64>,
  pub in_progress: Option<i64>,
  pub done: Option<i64>,
}

/// Body for creating and updating versions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionPayloadScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub released: Option<bool>,
  /// `YYYY-MM-DD`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<String>,
  /// `YYYY-MM-DD`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub release_date: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub move_unfixed_issues_to: Option<String>,
}

/// Filters for `GET /project/{key}/version`
#[derive(Debug, Clone, Default)]
pub struct VersionGetsOptions {
  pub order_by: Option<String>,
  pub query: Option<String>,
  /// Any of `released`, `unreleased` and `archived`
  pub status: Vec<String>,
  pub expand: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionIssueCountsScheme {
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub issues_fixed_count: Option<i64>,
  pub issues_affected_count: Option<i64>,
  pub issue_count_with_custom_fields_showing_version: Option<i64>,
  #[serde(default)]
  pub custom_field_usage: Vec<VersionUsageInCustomFieldScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionUsageInCustomFieldScheme {
  pub field_name: Option<String>,
  pub custom_field_id: Option<i64>,
  pub issue_count_with_version_in_custom_field: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionUnresolvedIssuesCountScheme {
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub issues_unresolved_count: Option<i64>,
  pub issues_count: Option<i64>,
}
