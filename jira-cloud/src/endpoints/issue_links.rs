//! # Jira Issue Link Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{IssueLinkPageScheme, IssueLinkScheme, LinkPayloadScheme};
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Issue link endpoints, obtained through [`JiraClient::issue_links`]
pub struct IssueLinkService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn issue_links(&self) -> IssueLinkService<'_> {
    IssueLinkService { client: self }
  }
}

impl IssueLinkService<'_> {
  /// Link two issues. Jira answers `201 Created` without a body.
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &LinkPayloadScheme) -> Result<ResponseScheme> {
    let endpoint = self.client.api_path("issueLink");
    self.client.send_with(Method::POST, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, link_id: &str) -> Result<(IssueLinkScheme, ResponseScheme)> {
    if link_id.is_empty() {
      return Err(Error::NoLinkId);
    }

    let link_id = path_segment(link_id)?;
    let endpoint = self.client.api_path(&format!("issueLink/{link_id}"));
    self.client.call(Method::GET, &endpoint).await
  }

  /// Every link of an issue, fetched by reducing the issue to its
  /// `issuelinks` field.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self, issue_key_or_id: &str) -> Result<(IssueLinkPageScheme, ResponseScheme)> {
    if issue_key_or_id.is_empty() {
      return Err(Error::NoIssueKeyOrId);
    }

    let issue_key_or_id = path_segment(issue_key_or_id)?;
    let endpoint = Query::new()
      .with("fields", "issuelinks")
      .endpoint(&self.client.api_path(&format!("issue/{issue_key_or_id}")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, link_id: &str) -> Result<ResponseScheme> {
    if link_id.is_empty() {
      return Err(Error::NoLinkId);
    }

    let link_id = path_segment(link_id)?;
    let endpoint = self.client.api_path(&format!("issueLink/{link_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }
}
