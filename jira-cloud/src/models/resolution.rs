use serde::{Deserialize, Serialize};

/// Represents a Jira issue resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionScheme {
  pub id: String,
  pub name: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub description: Option<String>,
  pub is_default: Option<bool>,
}
