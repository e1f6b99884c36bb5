//! # Jira Screen Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{AvailableScreenFieldScheme, PageScheme, ScreenPayloadScheme, ScreenScheme};
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Screen endpoints, obtained through [`JiraClient::screens`]
pub struct ScreenService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn screens(&self) -> ScreenService<'_> {
    ScreenService { client: self }
  }
}

fn payload(name: &str, description: &str) -> ScreenPayloadScheme {
  ScreenPayloadScheme {
    name: (!name.is_empty()).then(|| name.to_string()),
    description: (!description.is_empty()).then(|| description.to_string()),
  }
}

impl ScreenService<'_> {
  /// Screens and tabs a field is used on.
  #[instrument(skip(self), level = "debug")]
  pub async fn fields(
    &self,
    field_id: &str,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<ScreenScheme>, ResponseScheme)> {
    if field_id.is_empty() {
      return Err(Error::NoFieldId);
    }

    let field_id = path_segment(field_id)?;
    let endpoint = Query::new()
      .page(start_at, max_results)
      .endpoint(&self.client.api_path(&format!("field/{field_id}/screens")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    screen_ids: &[i64],
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<ScreenScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_each("id", screen_ids)
      .endpoint(&self.client.api_path("screens"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn create(&self, name: &str, description: &str) -> Result<(ScreenScheme, ResponseScheme)> {
    if name.is_empty() {
      return Err(Error::NoScreenName);
    }

    let endpoint = self.client.api_path("screens");
    self.client.call_with(Method::POST, &endpoint, &payload(name, description)).await
  }

  /// Add a field to the default tab of the default screen.
  #[instrument(skip(self), level = "debug")]
  pub async fn add_to_default(&self, field_id: &str) -> Result<ResponseScheme> {
    if field_id.is_empty() {
      return Err(Error::NoFieldId);
    }

    let field_id = path_segment(field_id)?;
    let endpoint = self.client.api_path(&format!("screens/addToDefault/{field_id}"));
    self.client.send(Method::POST, &endpoint).await
  }

  /// Update a screen's name and/or description; empty values are left
  /// unchanged.
  #[instrument(skip(self), level = "debug")]
  pub async fn update(&self, screen_id: i64, name: &str, description: &str) -> Result<(ScreenScheme, ResponseScheme)> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }

    let endpoint = self.client.api_path(&format!("screens/{screen_id}"));
    self.client.call_with(Method::PUT, &endpoint, &payload(name, description)).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, screen_id: i64) -> Result<ResponseScheme> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }

    let endpoint = self.client.api_path(&format!("screens/{screen_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Fields that can still be added to a screen.
  #[instrument(skip(self), level = "debug")]
  pub async fn available(&self, screen_id: i64) -> Result<(Vec<AvailableScreenFieldScheme>, ResponseScheme)> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }

    let endpoint = self.client.api_path(&format!("screens/{screen_id}/availableFields"));
    self.client.call(Method::GET, &endpoint).await
  }
}
