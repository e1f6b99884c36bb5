use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::UserScheme;

/// Body for `POST /workflow/create`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPayloadScheme {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub statuses: Vec<WorkflowStatusPayloadScheme>,
  pub transitions: Vec<WorkflowTransitionPayloadScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatusPayloadScheme {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub properties: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransitionPayloadScheme {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub from: Vec<String>,
  pub to: String,
  /// `global`, `initial` or `directed`
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rules: Option<serde_json::Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub screen: Option<WorkflowTransitionScreenScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub properties: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransitionScreenScheme {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCreatedResponseScheme {
  pub name: String,
  pub entity_id: String,
}

/// Filters for `GET /workflow/search`
#[derive(Debug, Clone, Default)]
pub struct WorkflowSearchOptions {
  pub workflow_names: Vec<String>,
  pub query_string: Option<String>,
  pub order_by: Option<String>,
  pub is_active: Option<bool>,
  pub expand: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowScheme {
  pub id: Option<WorkflowPublishedIdScheme>,
  pub description: Option<String>,
  pub is_default: Option<bool>,
  pub created: Option<String>,
  pub updated: Option<String>,
  #[serde(default)]
  pub statuses: Vec<WorkflowStatusScheme>,
  #[serde(default)]
  pub transitions: Vec<WorkflowTransitionScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPublishedIdScheme {
  pub name: String,
  pub entity_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatusScheme {
  pub id: String,
  pub name: Option<String>,
  pub properties: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransitionScheme {
  pub id: String,
  pub name: String,
  pub description: Option<String>,
  #[serde(default)]
  pub from: Vec<String>,
  pub to: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub screen: Option<WorkflowTransitionScreenScheme>,
  pub rules: Option<serde_json::Value>,
}

/// A workflow scheme; issue type mappings are keyed by issue type id
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSchemeScheme {
  pub id: Option<i64>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub default_workflow: Option<String>,
  pub issue_type_mappings: Option<BTreeMap<String, String>>,
  pub original_default_workflow: Option<String>,
  pub original_issue_type_mappings: Option<BTreeMap<String, String>>,
  pub draft: Option<bool>,
  pub last_modified_user: Option<UserScheme>,
  pub last_modified: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub update_draft_if_needed: Option<bool>,
}

/// Body for creating and updating workflow schemes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSchemePayloadScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_workflow: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_type_mappings: Option<BTreeMap<String, String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_draft_if_needed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSchemeAssociationPageScheme {
  #[serde(default)]
  pub values: Vec<WorkflowSchemeAssociationsScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSchemeAssociationsScheme {
  #[serde(default)]
  pub project_ids: Vec<String>,
  pub workflow_scheme: Option<WorkflowSchemeScheme>,
}
