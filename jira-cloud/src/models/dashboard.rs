use serde::{Deserialize, Serialize};

use super::{ProjectRoleScheme, ProjectScheme, UserGroupScheme, UserScheme};

/// Page returned by `GET /dashboard`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPageScheme {
  pub start_at: Option<i32>,
  pub max_results: Option<i32>,
  pub total: Option<i32>,
  pub prev: Option<String>,
  pub next: Option<String>,
  #[serde(default)]
  pub dashboards: Vec<DashboardScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardScheme {
  pub id: String,
  pub name: String,
  pub description: Option<String>,
  pub is_favourite: Option<bool>,
  pub owner: Option<UserScheme>,
  pub popularity: Option<i32>,
  pub rank: Option<i32>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub view: Option<String>,
  #[serde(default)]
  pub share_permissions: Vec<SharePermissionScheme>,
  #[serde(default)]
  pub edit_permissions: Vec<SharePermissionScheme>,
}

/// Who a dashboard (or filter) is shared with
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharePermissionScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  /// `user`, `group`, `project`, `projectRole`, `global`, `loggedin` or `project-unknown`
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project: Option<ProjectScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role: Option<ProjectRoleScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub group: Option<UserGroupScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user: Option<UserScheme>,
}

/// Body for creating, copying and updating dashboards
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayloadScheme {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub share_permissions: Vec<SharePermissionScheme>,
  #[serde(default)]
  pub edit_permissions: Vec<SharePermissionScheme>,
}

/// Filters for `GET /dashboard/search`
#[derive(Debug, Clone, Default)]
pub struct DashboardSearchOptionsScheme {
  pub dashboard_name: Option<String>,
  pub owner_account_id: Option<String>,
  pub group_permission_name: Option<String>,
  pub group_id: Option<String>,
  pub project_id: Option<i64>,
  pub order_by: Option<String>,
  pub status: Option<String>,
  pub expand: Vec<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_dashboard_payload_serialization() {
    let payload = DashboardPayloadScheme {
      name: "Team board".to_string(),
      description: None,
      share_permissions: vec![SharePermissionScheme {
        kind: "project".to_string(),
        project: Some(ProjectScheme {
          id: Some("10000".to_string()),
          ..Default::default()
        }),
        ..Default::default()
      }],
      edit_permissions: vec![],
    };

    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["name"], "Team board");
    assert!(json.get("description").is_none());
    assert_eq!(json["sharePermissions"][0]["type"], "project");
    assert_eq!(json["sharePermissions"][0]["project"]["id"], "10000");
    assert_eq!(json["editPermissions"], json!([]));
  }
}
