use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationScheme {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub is_default: Option<bool>,
}

/// Body for creating and updating field configurations and their schemes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationPayloadScheme {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// How one field behaves inside a field configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationItemScheme {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_hidden: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_required: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub renderer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldConfigurationItemPayloadScheme {
  pub field_configuration_items: Vec<FieldConfigurationItemScheme>,
}

/// A field configuration scheme. Jira reports scheme ids as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationSchemeScheme {
  pub id: String,
  pub name: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationIssueTypeItemScheme {
  pub field_configuration_scheme_id: String,
  pub issue_type_id: String,
  pub field_configuration_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationSchemeProjectScheme {
  #[serde(default)]
  pub project_ids: Vec<String>,
  pub field_configuration_scheme: Option<FieldConfigurationSchemeScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationToIssueTypeMappingPayloadScheme {
  pub mappings: Vec<FieldConfigurationToIssueTypeMappingScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigurationToIssueTypeMappingScheme {
  /// Issue type id, or `default` for the scheme-wide mapping
  pub issue_type_id: String,
  pub field_configuration_id: String,
}
