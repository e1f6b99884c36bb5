//! # Jira Priority Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::PriorityScheme;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Priority endpoints, obtained through [`JiraClient::priorities`]
pub struct PriorityService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn priorities(&self) -> PriorityService<'_> {
    PriorityService { client: self }
  }
}

impl PriorityService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self) -> Result<(Vec<PriorityScheme>, ResponseScheme)> {
    let endpoint = self.client.api_path("priority");
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, priority_id: &str) -> Result<(PriorityScheme, ResponseScheme)> {
    if priority_id.is_empty() {
      return Err(Error::NoPriorityId);
    }

    let priority_id = path_segment(priority_id)?;
    let endpoint = self.client.api_path(&format!("priority/{priority_id}"));
    self.client.call(Method::GET, &endpoint).await
  }
}
