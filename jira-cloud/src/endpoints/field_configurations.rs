//! # Jira Field Configuration Endpoints
//!
//! Field configurations decide which fields are hidden or required and how
//! they are rendered. Configurations are identified by integer ids.

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{
  FieldConfigurationItemScheme, FieldConfigurationPayloadScheme, FieldConfigurationScheme, PageScheme,
  UpdateFieldConfigurationItemPayloadScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Field configuration endpoints, obtained through
/// [`JiraClient::field_configurations`]
pub struct FieldConfigurationService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn field_configurations(&self) -> FieldConfigurationService<'_> {
    FieldConfigurationService { client: self }
  }
}

fn payload(name: &str, description: &str) -> FieldConfigurationPayloadScheme {
  FieldConfigurationPayloadScheme {
    name: name.to_string(),
    description: (!description.is_empty()).then(|| description.to_string()),
  }
}

impl FieldConfigurationService<'_> {
  /// List field configurations, optionally restricted to `ids` or to the
  /// default configuration only.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    ids: &[i64],
    is_default: bool,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<FieldConfigurationScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_flag("isDefault", is_default)
      .with_each("id", ids)
      .endpoint(&self.client.api_path("fieldconfiguration"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn create(&self, name: &str, description: &str) -> Result<(FieldConfigurationScheme, ResponseScheme)> {
    if name.is_empty() {
      return Err(Error::NoFieldConfigurationName);
    }

    let endpoint = self.client.api_path("fieldconfiguration");
    self.client.call_with(Method::POST, &endpoint, &payload(name, description)).await
  }

  /// Rename a field configuration. Jira answers with an empty body.
  #[instrument(skip(self), level = "debug")]
  pub async fn update(&self, field_configuration_id: i64, name: &str, description: &str) -> Result<ResponseScheme> {
    if field_configuration_id == 0 {
      return Err(Error::NoFieldConfigurationId);
    }
    if name.is_empty() {
      return Err(Error::NoFieldConfigurationName);
    }

    let endpoint = self.client.api_path(&format!("fieldconfiguration/{field_configuration_id}"));
    self.client.send_with(Method::PUT, &endpoint, &payload(name, description)).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, field_configuration_id: i64) -> Result<ResponseScheme> {
    if field_configuration_id == 0 {
      return Err(Error::NoFieldConfigurationId);
    }

    let endpoint = self.client.api_path(&format!("fieldconfiguration/{field_configuration_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Field items of a configuration.
  #[instrument(skip(self), level = "debug")]
  pub async fn items(
    &self,
    field_configuration_id: i64,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<FieldConfigurationItemScheme>, ResponseScheme)> {
    if field_configuration_id == 0 {
      return Err(Error::NoFieldConfigurationId);
    }

    let endpoint = Query::new()
      .page(start_at, max_results)
      .endpoint(&self.client.api_path(&format!("fieldconfiguration/{field_configuration_id}/fields")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update_items(
    &self,
    field_configuration_id: i64,
    payload: &UpdateFieldConfigurationItemPayloadScheme,
  ) -> Result<ResponseScheme> {
    if field_configuration_id == 0 {
      return Err(Error::NoFieldConfigurationId);
    }

    let endpoint = self.client.api_path(&format!("fieldconfiguration/{field_configuration_id}/fields"));
    self.client.send_with(Method::PUT, &endpoint, payload).await
  }
}
