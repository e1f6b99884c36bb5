use serde::{Deserialize, Serialize};

/// Represents a system or custom Jira field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldScheme {
  pub id: String,
  pub key: Option<String>,
  pub name: String,
  #[serde(default)]
  pub custom: bool,
  pub orderable: Option<bool>,
  pub navigable: Option<bool>,
  pub searchable: Option<bool>,
  #[serde(default)]
  pub clause_names: Vec<String>,
  pub schema: Option<FieldSchemaScheme>,
  pub description: Option<String>,
  pub is_locked: Option<bool>,
  pub searcher_key: Option<String>,
  pub screens_count: Option<i32>,
  pub contexts_count: Option<i32>,
  pub last_used: Option<FieldLastUsedScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchemaScheme {
  #[serde(rename = "type")]
  pub kind: String,
  pub items: Option<String>,
  pub system: Option<String>,
  pub custom: Option<String>,
  pub custom_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldLastUsedScheme {
  /// `TRACKED`, `NOT_TRACKED` or `NO_INFORMATION`
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub value: Option<String>,
}

/// Body for `POST /field`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldScheme {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Custom field type key, e.g. `com.atlassian.jira.plugin.system.customfieldtypes:select`
  #[serde(rename = "type")]
  pub field_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub searcher_key: Option<String>,
}

/// Filters for `GET /field/search`
#[derive(Debug, Clone, Default)]
pub struct FieldSearchOptionsScheme {
  /// `custom` and/or `system`
  pub types: Vec<String>,
  pub ids: Vec<String>,
  pub query: Option<String>,
  pub order_by: Option<String>,
  pub expand: Vec<String>,
}
