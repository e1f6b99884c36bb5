use serde::{Deserialize, Serialize};

/// Body for `POST /issueLink`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkPayloadScheme {
  #[serde(rename = "type")]
  pub link_type: LinkTypeScheme,
  pub inward_issue: LinkedIssueScheme,
  pub outward_issue: LinkedIssueScheme,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<LinkCommentScheme>,
}

/// Comment added to the outward issue when a link is created.
///
/// `body` is a plain string on API v2 and an Atlassian Document Format node
/// on v3, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkCommentScheme {
  pub body: serde_json::Value,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub visibility: Option<CommentVisibilityScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentVisibilityScheme {
  /// `group` or `role`
  #[serde(rename = "type")]
  pub kind: String,
  pub value: String,
}

/// Either end of an issue link
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedIssueScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fields: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkTypeScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inward: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub outward: Option<String>,
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkScheme {
  pub id: String,
  #[serde(rename = "type")]
  pub link_type: LinkTypeScheme,
  pub inward_issue: Option<LinkedIssueScheme>,
  pub outward_issue: Option<LinkedIssueScheme>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
}

/// Issue reduced to its links, from `GET /issue/{key}?fields=issuelinks`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkPageScheme {
  pub id: String,
  pub key: String,
  #[serde(default)]
  pub fields: IssueLinkFieldsScheme,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IssueLinkFieldsScheme {
  #[serde(default)]
  pub issuelinks: Vec<IssueLinkScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkTypeSearchScheme {
  #[serde(default)]
  pub issue_link_types: Vec<LinkTypeScheme>,
}
