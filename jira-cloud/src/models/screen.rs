use serde::{Deserialize, Serialize};

use super::ProjectScheme;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenScheme {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub scope: Option<ScreenScopeScheme>,
  /// Only populated by `GET /field/{id}/screens`
  pub tab: Option<ScreenTabScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenScopeScheme {
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub project: Option<ProjectScheme>,
}

/// Body for creating and updating screens
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenPayloadScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableScreenFieldScheme {
  pub id: String,
  pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTabScheme {
  pub id: i64,
  pub name: String,
}
