//! # Jira Issue Link Type Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{IssueLinkTypeSearchScheme, LinkTypeScheme};
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Issue link type endpoints, obtained through [`JiraClient::issue_link_types`]
pub struct IssueLinkTypeService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn issue_link_types(&self) -> IssueLinkTypeService<'_> {
    IssueLinkTypeService { client: self }
  }
}

impl IssueLinkTypeService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self) -> Result<(IssueLinkTypeSearchScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("issueLinkType");
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, link_type_id: &str) -> Result<(LinkTypeScheme, ResponseScheme)> {
    if link_type_id.is_empty() {
      return Err(Error::NoLinkTypeId);
    }

    let link_type_id = path_segment(link_type_id)?;
    let endpoint = self.client.api_path(&format!("issueLinkType/{link_type_id}"));
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &LinkTypeScheme) -> Result<(LinkTypeScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("issueLinkType");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update(&self, link_type_id: &str, payload: &LinkTypeScheme) -> Result<(LinkTypeScheme, ResponseScheme)> {
    if link_type_id.is_empty() {
      return Err(Error::NoLinkTypeId);
    }

    let link_type_id = path_segment(link_type_id)?;
    let endpoint = self.client.api_path(&format!("issueLinkType/{link_type_id}"));
    self.client.call_with(Method::PUT, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, link_type_id: &str) -> Result<ResponseScheme> {
    if link_type_id.is_empty() {
      return Err(Error::NoLinkTypeId);
    }

    let link_type_id = path_segment(link_type_id)?;
    let endpoint = self.client.api_path(&format!("issueLinkType/{link_type_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }
}
