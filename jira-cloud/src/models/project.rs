use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{UserScheme, VersionScheme};

/// Represents a Jira project. Every field is optional because Jira returns
/// trimmed-down projects when they are embedded in other resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead: Option<UserScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub simplified: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_private: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub deleted: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_category: Option<ProjectCategoryScheme>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub issue_types: Vec<IssueTypeScheme>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub versions: Vec<VersionScheme>,
  /// Role name to role URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub roles: Option<BTreeMap<String, String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCategoryScheme {
  pub id: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeScheme {
  pub id: String,
  pub name: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub description: Option<String>,
  pub icon_url: Option<String>,
  pub subtask: Option<bool>,
  pub hierarchy_level: Option<i32>,
}

/// Body for `POST /project`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayloadScheme {
  pub key: String,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead_account_id: Option<String>,
  /// `software`, `service_desk` or `business`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_template_key: Option<String>,
  /// `PROJECT_LEAD` or `UNASSIGNED`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_security_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub permission_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notification_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub workflow_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field_configuration_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_type_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_type_screen_scheme: Option<i64>,
}

/// Body for `PUT /project/{key}`; only set fields are changed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead_account_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_security_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub permission_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notification_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectCreatedScheme {
  pub id: i64,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
}

/// Filters for `GET /project/search`
#[derive(Debug, Clone, Default)]
pub struct ProjectSearchOptionsScheme {
  pub order_by: Option<String>,
  pub query: Option<String>,
  /// `view`, `browse` or `edit`
  pub action: Option<String>,
  pub type_key: Option<String>,
  pub category_id: Option<i64>,
  pub ids: Vec<i64>,
  pub keys: Vec<String>,
  pub expand: Vec<String>,
}

/// Statuses available to one issue type of a project
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusPageScheme {
  pub id: String,
  pub name: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub subtask: Option<bool>,
  #[serde(default)]
  pub statuses: Vec<ProjectStatusDetailsScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusDetailsScheme {
  pub id: String,
  pub name: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub description: Option<String>,
  pub icon_url: Option<String>,
  pub status_category: Option<StatusCategoryScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategoryScheme {
  pub id: Option<i64>,
  pub key: Option<String>,
  pub name: Option<String>,
  pub color_name: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSchemeScheme {
  pub id: Option<i64>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub expand: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  #[serde(default)]
  pub notification_scheme_events: Vec<NotificationSchemeEventScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSchemeEventScheme {
  pub event: Option<NotificationEventScheme>,
  #[serde(default)]
  pub notifications: Vec<EventNotificationScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEventScheme {
  pub id: Option<i64>,
  pub name: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventNotificationScheme {
  pub id: Option<i64>,
  pub notification_type: Option<String>,
  pub parameter: Option<String>,
}
