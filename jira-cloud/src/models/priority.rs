use serde::{Deserialize, Serialize};

/// Represents a Jira issue priority
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriorityScheme {
  pub id: String,
  pub name: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub status_color: Option<String>,
  pub description: Option<String>,
  pub icon_url: Option<String>,
  pub is_default: Option<bool>,
}
